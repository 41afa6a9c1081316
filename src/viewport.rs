/// Snapshot of the window's scroll offset and height, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub scroll_position: i32,
    pub viewport_height: i32,
}

impl ViewportState {
    pub fn new(scroll_position: i32, viewport_height: i32) -> Self {
        Self {
            scroll_position: scroll_position.max(0),
            viewport_height: viewport_height.max(0),
        }
    }

    /// Builds a state from the raw `f64` values the DOM hands out.
    pub fn from_window_metrics(scroll_y: f64, inner_height: f64) -> Self {
        Self::new(to_px(scroll_y), to_px(inner_height))
    }

    /// Document y coordinate of the bottom edge of the viewport.
    pub fn bottom(&self) -> i64 {
        i64::from(self.scroll_position) + i64::from(self.viewport_height)
    }
}

/// Top edge of an element in document coordinates.
///
/// `Unmeasured` stands in for "no layout pass yet" and never counts as visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElementTop {
    #[default]
    Unmeasured,
    Measured(i32),
}

impl ElementTop {
    /// Converts a bounding-rect top (relative to the viewport) to a document offset.
    pub fn from_client_rect(rect_top: f64, viewport: ViewportState) -> Self {
        if !rect_top.is_finite() {
            return Self::Unmeasured;
        }
        Self::Measured(to_px(rect_top).saturating_add(viewport.scroll_position))
    }

    pub fn px(&self) -> Option<i32> {
        match self {
            Self::Unmeasured => None,
            Self::Measured(px) => Some(*px),
        }
    }
}

fn to_px(value: f64) -> i32 {
    if value.is_nan() {
        0
    } else {
        value.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    }
}
