//! Shared overlay image viewer state.
//!
//! One lightbox serves both pages: opening replaces the image/caption/label
//! lists wholesale, navigation wraps modulo the list length, and closing
//! hides the overlay without clearing the lists (the next open replaces
//! them anyway).

/// State of the shared lightbox overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightboxState {
    pub visible: bool,
    pub images: Vec<String>,
    pub captions: Vec<String>,
    pub labels: Vec<String>,
    pub index: usize,
}

impl LightboxState {
    /// Show the overlay over a fresh image list, positioned at `index`.
    pub fn open(
        &mut self,
        images: Vec<String>,
        index: usize,
        captions: Vec<String>,
        labels: Vec<String>,
    ) {
        self.index = if images.is_empty() {
            0
        } else {
            index.min(images.len() - 1)
        };
        self.images = images;
        self.captions = captions;
        self.labels = labels;
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Caption under the image; empty captions render as nothing.
    pub fn current_caption(&self) -> Option<&str> {
        self.captions
            .get(self.index)
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    /// Counter text: the slide label when one was supplied, otherwise a
    /// `current/total` position indicator.
    pub fn counter_text(&self) -> String {
        match self.labels.get(self.index).filter(|l| !l.is_empty()) {
            Some(label) => label.clone(),
            None => format!("{}/{}", self.index + 1, self.images.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with(n: usize, start: usize) -> LightboxState {
        let mut state = LightboxState::default();
        state.open(
            (0..n).map(|i| format!("img_{i}.png")).collect(),
            start,
            Vec::new(),
            Vec::new(),
        );
        state
    }

    #[test]
    fn next_wraps_at_the_end() {
        let mut state = open_with(3, 2);
        state.next();
        assert_eq!(state.index, 0);
    }

    #[test]
    fn prev_wraps_at_zero() {
        let mut state = open_with(3, 0);
        state.prev();
        assert_eq!(state.index, 2);
    }

    #[test]
    fn open_replaces_previous_lists() {
        let mut state = open_with(3, 1);
        state.open(vec!["only.png".into()], 0, vec!["cap".into()], Vec::new());
        assert!(state.visible);
        assert_eq!(state.images.len(), 1);
        assert_eq!(state.current_caption(), Some("cap"));
    }

    #[test]
    fn counter_prefers_labels_and_falls_back_to_position() {
        let mut state = LightboxState::default();
        state.open(
            vec!["a.png".into(), "b.png".into()],
            1,
            Vec::new(),
            vec!["Fig. 1".into(), "Fig. 2".into()],
        );
        assert_eq!(state.counter_text(), "Fig. 2");

        state.open(vec!["a.png".into(), "b.png".into()], 1, Vec::new(), Vec::new());
        assert_eq!(state.counter_text(), "2/2");
    }

    #[test]
    fn close_hides_without_forgetting_position() {
        let mut state = open_with(4, 3);
        state.close();
        assert!(!state.visible);
        assert_eq!(state.index, 3);
    }

    #[test]
    fn navigation_on_empty_list_is_inert() {
        let mut state = LightboxState::default();
        state.next();
        state.prev();
        assert_eq!(state.index, 0);
    }
}
