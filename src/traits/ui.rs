/// A UI element that holds text (an input box or a message line)
pub trait TextElement {
    /// Current text content
    fn text(&self) -> String;

    /// Replace the text content
    fn set_text(&self, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MockElement {
        content: RefCell<String>,
        writes: RefCell<usize>,
    }

    impl TextElement for MockElement {
        fn text(&self) -> String {
            self.content.borrow().clone()
        }

        fn set_text(&self, text: &str) {
            *self.content.borrow_mut() = text.to_string();
            *self.writes.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_text_element_set_and_read() {
        let el = MockElement {
            content: RefCell::new(String::new()),
            writes: RefCell::new(0),
        };

        assert_eq!(el.text(), "");
        el.set_text("Hello");
        el.set_text("Hello, world");

        assert_eq!(el.text(), "Hello, world");
        assert_eq!(*el.writes.borrow(), 2);
    }
}
