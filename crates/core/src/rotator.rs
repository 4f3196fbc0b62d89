use std::num::NonZeroUsize;

/// Cyclic index over a fixed, non-empty list of role labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRotator {
    index: usize,
    len: NonZeroUsize,
}

impl RoleRotator {
    /// `None` for an empty list: there would be no valid index.
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { index: 0, len })
    }

    /// Step to the next role, wrapping to 0 after the last one.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len.get();
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
