use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::text::max_character_count;
use crate::core::types::Margin;
use crate::error::{OncobandError, OncobandResult};

/// Horizontal panel coordinates of the gene/facet side of the chart,
/// left to right: facet label column, gene tick+label column, main plot,
/// gene mutation-frequency bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YLayoutMetrics {
    pub facet_pos_x: f64,
    pub facet_width: f64,
    pub y_text_and_tick_width: f64,
    pub oncoplot_pos_start_x: f64,
    pub oncoplot_width: f64,
    pub oncoplot_pos_end_x: f64,
    pub gene_bar_pos_x: f64,
}

/// Solves the X intercepts that place the Y-axis panels.
///
/// Label column widths are estimated as `max character count x font size`.
/// The estimate is a deliberate proxy for rendered text width: it keeps the
/// layout a deterministic function of its inputs with no font backend in the
/// loop. All fields except the font sizes are required; [`compute_layout`]
/// reports the first missing one.
///
/// [`compute_layout`]: YAxisLayout::compute_layout
#[derive(Debug, Clone)]
pub struct YAxisLayout {
    margin: Option<Margin>,
    window_width: Option<f64>,
    gene_bar_padding: Option<f64>,
    gene_bar_width: Option<f64>,
    tick_mark_and_text_padding: Option<f64>,
    tick_length: Option<f64>,
    facets: Option<Vec<String>>,
    domain: Option<Vec<String>>,
    font_size_facet: f64,
    font_size_domain: f64,
}

impl Default for YAxisLayout {
    fn default() -> Self {
        Self {
            margin: None,
            window_width: None,
            gene_bar_padding: None,
            gene_bar_width: None,
            tick_mark_and_text_padding: None,
            tick_length: None,
            facets: None,
            domain: None,
            font_size_facet: 14.0,
            font_size_domain: 14.0,
        }
    }
}

impl YAxisLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    #[must_use]
    pub fn window_width(mut self, px: f64) -> Self {
        self.window_width = Some(px);
        self
    }

    #[must_use]
    pub fn gene_bar_padding(mut self, px: f64) -> Self {
        self.gene_bar_padding = Some(px);
        self
    }

    #[must_use]
    pub fn gene_bar_width(mut self, px: f64) -> Self {
        self.gene_bar_width = Some(px);
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

    /// Facet labels shown in the leftmost column.
    #[must_use]
    pub fn facets<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facets = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Gene names shown as Y-axis tick labels.
    #[must_use]
    pub fn domain<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Facet label font size in px. Default 14.
    #[must_use]
    pub fn font_size_facet(mut self, px: f64) -> Self {
        self.font_size_facet = px;
        self
    }

    /// Gene label font size in px. Default 14.
    #[must_use]
    pub fn font_size_domain(mut self, px: f64) -> Self {
        self.font_size_domain = px;
        self
    }

    pub fn compute_layout(&self) -> OncobandResult<YLayoutMetrics> {
        let margin = self.margin.ok_or(OncobandError::MissingField("margin"))?;
        let window_width = self
            .window_width
            .ok_or(OncobandError::MissingField("window_width"))?;
        let gene_bar_padding = self
            .gene_bar_padding
            .ok_or(OncobandError::MissingField("gene_bar_padding"))?;
        let gene_bar_width = self
            .gene_bar_width
            .ok_or(OncobandError::MissingField("gene_bar_width"))?;
        let tick_mark_and_text_padding = self
            .tick_mark_and_text_padding
            .ok_or(OncobandError::MissingField("tick_mark_and_text_padding"))?;
        let tick_length = self
            .tick_length
            .ok_or(OncobandError::MissingField("tick_length"))?;
        let facets = self
            .facets
            .as_ref()
            .ok_or(OncobandError::MissingField("facets"))?;
        let domain = self
            .domain
            .as_ref()
            .ok_or(OncobandError::MissingField("domain"))?;

        let tick_width = tick_length + tick_mark_and_text_padding;

        let facet_width = max_character_count(facets) as f64 * self.font_size_facet;
        let y_text_and_tick_width =
            max_character_count(domain) as f64 * self.font_size_domain + tick_width.abs();

        let oncoplot_pos_start_x = margin.left + facet_width + y_text_and_tick_width;
        let oncoplot_width = window_width
            - margin.left
            - margin.right
            - facet_width
            - y_text_and_tick_width
            - gene_bar_width
            - gene_bar_padding;
        let oncoplot_pos_end_x = oncoplot_pos_start_x + oncoplot_width;

        let metrics = YLayoutMetrics {
            facet_pos_x: margin.left,
            facet_width,
            y_text_and_tick_width,
            oncoplot_pos_start_x,
            oncoplot_width,
            oncoplot_pos_end_x,
            gene_bar_pos_x: oncoplot_pos_end_x + gene_bar_padding,
        };
        debug!(?metrics, "y-axis layout computed");
        Ok(metrics)
    }
}
