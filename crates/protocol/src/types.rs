use serde::{Deserialize, Serialize};

/// Vertical extent of an element relative to the top of the viewport.
///
/// Mirrors the `top`/`bottom` pair of a DOM bounding client rect: negative
/// `top` means the element starts above the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the horizontal line at `y` passes through these bounds,
    /// edges included.
    pub fn contains_line(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}
