use std::cell::RefCell;

use crate::traits::TextElement;

/// Text element backed by an in-memory string
#[derive(Debug, Default)]
pub struct TextCell {
    content: RefCell<String>,
}

impl TextCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(text.into()),
        }
    }
}

impl TextElement for TextCell {
    fn text(&self) -> String {
        self.content.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.content.borrow_mut() = text.to_string();
    }
}
