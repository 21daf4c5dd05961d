mod overview;
pub use overview::Overview;

mod paper;
pub use paper::PaperDetail;
