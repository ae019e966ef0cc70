use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::text::max_character_count;
use crate::core::types::Margin;
use crate::error::{OncobandError, OncobandResult};

/// Vertical panel coordinates of the sample side of the chart, top to
/// bottom: tumor-mutation-burden bar, main plot, clinical annotation block,
/// sample name labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XLayoutMetrics {
    pub max_sample_labels_height: f64,
    pub tmb_bar_pos_start_y: f64,
    pub tmb_bar_height: f64,
    pub tmb_bar_pos_end_y: f64,
    pub oncoplot_pos_start_y: f64,
    pub oncoplot_height: f64,
    pub oncoplot_pos_end_y: f64,
    pub clinical_height: f64,
    pub clinical_start_y: f64,
    pub clinical_end_y: f64,
}

/// Solves the Y intercepts that place the X-axis panels.
///
/// The main plot gets whatever height remains after the fixed panels are
/// placed. Inconsistent panel sizes can leave that remainder negative; the
/// value is passed through unvalidated for the caller to detect, never
/// clamped here.
#[derive(Debug, Clone)]
pub struct XAxisLayout {
    domain: Option<Vec<String>>,
    show_sample_names: bool,
    font_size_x: f64,
    margin: Option<Margin>,
    window_height: Option<f64>,
    tmb_bar_padding: Option<f64>,
    tmb_bar_height: Option<f64>,
    tick_mark_and_text_padding: Option<f64>,
    tick_length: Option<f64>,
    oncoplot_clinical_padding: f64,
    clinical_row_height: f64,
    clinical_row_padding: f64,
    clinical_row_count: usize,
}

impl Default for XAxisLayout {
    fn default() -> Self {
        Self {
            domain: None,
            show_sample_names: false,
            font_size_x: 14.0,
            margin: None,
            window_height: None,
            tmb_bar_padding: None,
            tmb_bar_height: None,
            tick_mark_and_text_padding: None,
            tick_length: None,
            oncoplot_clinical_padding: 10.0,
            clinical_row_height: 0.0,
            clinical_row_padding: 0.0,
            clinical_row_count: 0,
        }
    }
}

impl XAxisLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample names shown as X-axis tick labels.
    #[must_use]
    pub fn domain<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Whether a label block for sample names is reserved at all.
    /// Default false, which collapses the block to zero height.
    #[must_use]
    pub fn show_sample_names(mut self, show: bool) -> Self {
        self.show_sample_names = show;
        self
    }

    /// Sample label font size in px. Default 14.
    #[must_use]
    pub fn font_size_x(mut self, px: f64) -> Self {
        self.font_size_x = px;
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    #[must_use]
    pub fn window_height(mut self, px: f64) -> Self {
        self.window_height = Some(px);
        self
    }

    #[must_use]
    pub fn tmb_bar_padding(mut self, px: f64) -> Self {
        self.tmb_bar_padding = Some(px);
        self
    }

    #[must_use]
    pub fn tmb_bar_height(mut self, px: f64) -> Self {
        self.tmb_bar_height = Some(px);
        self
    }

    #[must_use]
    pub fn tick_mark_and_text_padding(mut self, px: f64) -> Self {
        self.tick_mark_and_text_padding = Some(px);
        self
    }

    #[must_use]
    pub fn tick_length(mut self, px: f64) -> Self {
        self.tick_length = Some(px);
        self
    }

    /// Gap between the main plot and the clinical block. Default 10.
    #[must_use]
    pub fn oncoplot_clinical_padding(mut self, px: f64) -> Self {
        self.oncoplot_clinical_padding = px;
        self
    }

    /// Height of one clinical annotation row. Default 0.
    #[must_use]
    pub fn clinical_row_height(mut self, px: f64) -> Self {
        self.clinical_row_height = px;
        self
    }

    /// Gap between adjacent clinical rows. Default 0.
    #[must_use]
    pub fn clinical_row_padding(mut self, px: f64) -> Self {
        self.clinical_row_padding = px;
        self
    }

    /// Number of clinical annotation rows. Default 0 (no clinical block).
    #[must_use]
    pub fn clinical_row_count(mut self, rows: usize) -> Self {
        self.clinical_row_count = rows;
        self
    }

    pub fn compute_layout(&self) -> OncobandResult<XLayoutMetrics> {
        let margin = self.margin.ok_or(OncobandError::MissingField("margin"))?;
        let window_height = self
            .window_height
            .ok_or(OncobandError::MissingField("window_height"))?;
        let tmb_bar_padding = self
            .tmb_bar_padding
            .ok_or(OncobandError::MissingField("tmb_bar_padding"))?;
        let tmb_bar_height = self
            .tmb_bar_height
            .ok_or(OncobandError::MissingField("tmb_bar_height"))?;
        let tick_mark_and_text_padding = self
            .tick_mark_and_text_padding
            .ok_or(OncobandError::MissingField("tick_mark_and_text_padding"))?;
        let tick_length = self
            .tick_length
            .ok_or(OncobandError::MissingField("tick_length"))?;
        let domain = self
            .domain
            .as_ref()
            .ok_or(OncobandError::MissingField("domain"))?;

        let max_sample_labels_height = if self.show_sample_names {
            self.font_size_x * max_character_count(domain) as f64
                + (tick_length + tick_mark_and_text_padding).abs()
        } else {
            0.0
        };

        let clinical_height = if self.clinical_row_count == 0 {
            0.0
        } else {
            self.clinical_row_height * self.clinical_row_count as f64
                + self.clinical_row_padding * (self.clinical_row_count - 1) as f64
        };

        let tmb_bar_pos_start_y = margin.top;
        let tmb_bar_pos_end_y = margin.top + tmb_bar_height;
        let oncoplot_pos_start_y = tmb_bar_pos_end_y + tmb_bar_padding;

        // Remaining height for the main plot; negative when the fixed panels
        // do not fit inside the window.
        let oncoplot_height = window_height
            - tmb_bar_height
            - clinical_height
            - max_sample_labels_height
            - tmb_bar_padding
            - self.oncoplot_clinical_padding
            - margin.top
            - margin.bottom;
        let oncoplot_pos_end_y = oncoplot_pos_start_y + oncoplot_height;

        let clinical_start_y = oncoplot_pos_end_y + self.oncoplot_clinical_padding;

        let metrics = XLayoutMetrics {
            max_sample_labels_height,
            tmb_bar_pos_start_y,
            tmb_bar_height,
            tmb_bar_pos_end_y,
            oncoplot_pos_start_y,
            oncoplot_height,
            oncoplot_pos_end_y,
            clinical_height,
            clinical_start_y,
            clinical_end_y: clinical_start_y + clinical_height,
        };
        debug!(?metrics, "x-axis layout computed");
        Ok(metrics)
    }
}
