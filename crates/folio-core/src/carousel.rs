//! # Carousel
//!
//! The rotating "featured books" strip on the home page.
//!
//! ```text
//!   retreat ◄──  [ b0 | b1 | b2 | b3 ]  ──► advance
//!                   ▲ current
//!   advance from the last slot wraps to b0, retreat from b0 wraps to the last
//! ```

use crate::types::BookId;

/// A wrap-around cursor over featured book ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<BookId>,
    index: usize,
}

impl Carousel {
    /// Starts on the first slide. Empty ids are dropped.
    pub fn new(slides: impl IntoIterator<Item = BookId>) -> Self {
        Self {
            slides: slides.into_iter().filter(|id| !id.is_empty()).collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&BookId> {
        self.slides.get(self.index)
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Moves to the next slide and returns it.
    pub fn advance(&mut self) -> Option<&BookId> {
        if !self.slides.is_empty() {
            self.index = (self.index + 1) % self.slides.len();
        }
        self.current()
    }

    /// Moves to the previous slide and returns it.
    pub fn retreat(&mut self) -> Option<&BookId> {
        if !self.slides.is_empty() {
            self.index = (self.index + self.slides.len() - 1) % self.slides.len();
        }
        self.current()
    }
}
