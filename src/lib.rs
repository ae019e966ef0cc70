//! oncoband: band-scale and panel-layout math for oncoplot-style charts.
//!
//! This crate computes pixel geometry only. It maps an ordered categorical
//! domain (sample IDs, gene names), optionally grouped into contiguous
//! facets, onto a 1-D pixel range, and solves the absolute bounding boxes of
//! the surrounding chart panels (TMB bar, clinical annotation rows, label
//! columns). Rendering, event handling, and data wrangling belong to the
//! host application; everything here is a pure function of its configuration.

pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::core::{BandFacetScale, XAxisLayout, XLayoutMetrics, YAxisLayout, YLayoutMetrics};
pub use crate::error::{OncobandError, OncobandResult};
