pub mod axis_ticks;
pub mod band_scale;
pub mod text;
pub mod types;
pub mod x_layout;
pub mod y_layout;

pub use axis_ticks::{
    AxisTick, AxisTickLayout, DEFAULT_TICK_LENGTH_PX, DEFAULT_TICK_TEXT_PADDING_PX,
    DominantBaseline, NudgeAxis, TextAnchor, TickStyle, XAxisSide, YAxisSide, x_axis_ticks,
    y_axis_ticks,
};
pub use band_scale::BandFacetScale;
pub use text::{cumulative_sum, longest_string, max_character_count};
pub use types::{AxisLine, FacetInterval, Margin};
pub use x_layout::{XAxisLayout, XLayoutMetrics};
pub use y_layout::{YAxisLayout, YLayoutMetrics};
