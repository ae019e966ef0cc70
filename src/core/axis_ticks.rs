//! Tick and label geometry for band-scale axes.
//!
//! Everything here is plain data for a renderer to consume: where the
//! baseline runs, where each tick sits (band centers), how far the label
//! text is nudged off the tick mark, and which anchor/baseline/rotation the
//! text should use. Nothing touches a drawing surface.

use serde::{Deserialize, Serialize};

use crate::core::band_scale::BandFacetScale;
use crate::core::types::AxisLine;

/// Default tick mark length in px.
pub const DEFAULT_TICK_LENGTH_PX: f64 = 6.0;
/// Default gap between a tick mark and its label in px.
pub const DEFAULT_TICK_TEXT_PADDING_PX: f64 = 4.0;

/// Which side of the plot a horizontal axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XAxisSide {
    Bottom,
    Top,
}

/// Which side of the plot a vertical axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YAxisSide {
    Left,
    Right,
}

/// SVG-style horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// SVG-style vertical text alignment against the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominantBaseline {
    TextBeforeEdge,
    TextAfterEdge,
    Middle,
}

/// Axis along which the label text is nudged away from the tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NudgeAxis {
    X,
    Y,
}

/// Shared text/tick styling for every tick of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    /// Signed tick mark length; the sign points away from the plot.
    pub tick_length: f64,
    /// Signed label offset from the tick anchor, along `nudge_axis`.
    pub text_nudge: f64,
    pub nudge_axis: NudgeAxis,
    pub text_anchor: TextAnchor,
    pub dominant_baseline: DominantBaseline,
    pub rotation_degrees: f64,
}

/// One tick: the domain value and its band-center position along the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub label: String,
    pub position: f64,
}

/// Complete renderer-ready description of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTickLayout {
    pub baseline: AxisLine,
    pub ticks: Vec<AxisTick>,
    pub style: TickStyle,
}

/// Tick layout for a horizontal (sample) axis.
///
/// `rotate_labels` turns the labels 90° counterclockwise so long sample
/// names run vertically. Returns `None` while the scale is not fully
/// configured.
#[must_use]
pub fn x_axis_ticks(
    scale: &BandFacetScale,
    side: XAxisSide,
    rotate_labels: bool,
    tick_length_base: f64,
    tick_text_padding: f64,
) -> Option<AxisTickLayout> {
    scale.bandwidth()?;
    let baseline = scale.axis_line_horizontal()?;

    let tick_length = match side {
        XAxisSide::Bottom => tick_length_base,
        XAxisSide::Top => -tick_length_base,
    };
    let nudge = tick_length + tick_length.signum() * tick_text_padding;

    let style = if rotate_labels {
        TickStyle {
            tick_length,
            text_nudge: -nudge,
            nudge_axis: NudgeAxis::X,
            text_anchor: match side {
                XAxisSide::Bottom => TextAnchor::End,
                XAxisSide::Top => TextAnchor::Start,
            },
            dominant_baseline: DominantBaseline::Middle,
            rotation_degrees: -90.0,
        }
    } else {
        TickStyle {
            tick_length,
            text_nudge: nudge,
            nudge_axis: NudgeAxis::Y,
            text_anchor: TextAnchor::Middle,
            dominant_baseline: match side {
                XAxisSide::Bottom => DominantBaseline::TextBeforeEdge,
                XAxisSide::Top => DominantBaseline::TextAfterEdge,
            },
            rotation_degrees: 0.0,
        }
    };

    Some(AxisTickLayout {
        baseline,
        ticks: collect_ticks(scale),
        style,
    })
}

/// Tick layout for a vertical (gene) axis. Returns `None` while the scale
/// is not fully configured.
#[must_use]
pub fn y_axis_ticks(
    scale: &BandFacetScale,
    side: YAxisSide,
    tick_length_base: f64,
    tick_text_padding: f64,
) -> Option<AxisTickLayout> {
    scale.bandwidth()?;
    let baseline = scale.axis_line_vertical()?;

    let tick_length = match side {
        YAxisSide::Left => -tick_length_base,
        YAxisSide::Right => tick_length_base,
    };

    Some(AxisTickLayout {
        baseline,
        ticks: collect_ticks(scale),
        style: TickStyle {
            tick_length,
            text_nudge: tick_length + tick_length.signum() * tick_text_padding,
            nudge_axis: NudgeAxis::X,
            text_anchor: match side {
                YAxisSide::Left => TextAnchor::End,
                YAxisSide::Right => TextAnchor::Start,
            },
            dominant_baseline: DominantBaseline::Middle,
            rotation_degrees: 0.0,
        },
    })
}

fn collect_ticks(scale: &BandFacetScale) -> Vec<AxisTick> {
    scale
        .centers()
        .into_iter()
        .map(|(label, position)| AxisTick { label, position })
        .collect()
}
