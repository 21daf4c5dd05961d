mod sidebar;
pub use sidebar::{BottomNav, DetailNav, DetailSidebar};

mod meta;
pub use meta::MetaCards;

mod challenge_idea;
pub use challenge_idea::ChallengeIdea;

mod reader;
pub use reader::PaperReader;

mod gallery;
pub use gallery::RedactedGallery;

mod lightbox;
pub use lightbox::LightboxOverlay;
