use serde::{Deserialize, Serialize};

/// Pixel margins around the chart window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same margin on all four sides.
    #[must_use]
    pub fn uniform(px: f64) -> Self {
        Self::new(px, px, px, px)
    }
}

/// Endpoints of a straight axis baseline, ready for a renderer to stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Pixel interval covered by one contiguous run of a facet label.
///
/// A label that recurs in non-adjacent runs produces one interval per run;
/// intervals are never merged by label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetInterval {
    pub label: String,
    pub start_position: f64,
    pub end_position: f64,
    pub extent: f64,
}
