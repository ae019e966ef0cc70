use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::text::cumulative_sum;
use crate::core::types::{AxisLine, FacetInterval};
use crate::error::{OncobandError, OncobandResult};

/// Banded categorical scale with optional contiguous facet grouping.
///
/// Maps an ordered domain onto a pixel interval, reserving `padding_outer`
/// at the two ends, `padding_inner` between bands, and a widened
/// `facet_padding_multiplier x` inner gap wherever the facet label changes
/// between adjacent domain entries. Unlike a conventional band scale, the
/// inner and outer padding ratios are fractions of the whole range, not of
/// one step.
///
/// Configuration is chainable; every setter eagerly rebuilds the cached
/// lookup tables once both a domain and a range are present. Until then the
/// rebuild is a silent no-op and every read returns `None`/empty.
///
/// ```
/// use oncoband::BandFacetScale;
///
/// let mut scale = BandFacetScale::new();
/// scale
///     .domain(["TP53", "RAD51", "BRCA1", "BRCA2"])?
///     .range([0.0, 400.0])
///     .facet(["TP53", "HRD", "HRD", "HRD"])?
///     .padding_inner(0.05)
///     .facet_padding_multiplier(5.0);
///
/// assert_eq!(scale.facet_ranges().len(), 2);
/// # Ok::<(), oncoband::OncobandError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BandFacetScale {
    domain: Option<Vec<String>>,
    start: Option<f64>,
    stop: Option<f64>,
    facet: Option<FacetSpec>,
    padding_inner: f64,
    padding_outer: f64,
    facet_padding_multiplier: f64,
    state: Option<ScaleState>,
}

#[derive(Debug, Clone)]
struct FacetSpec {
    labels: Vec<String>,
    /// `boundary[i]` is true when `labels[i] != labels[i - 1]`; index 0 is
    /// never a boundary.
    boundary: Vec<bool>,
    boundary_count: usize,
}

#[derive(Debug, Clone)]
struct ScaleState {
    bandwidth: f64,
    steps: Vec<f64>,
    positions: IndexMap<String, f64>,
    centers: IndexMap<String, f64>,
    facet_intervals: Vec<FacetInterval>,
}

impl Default for BandFacetScale {
    fn default() -> Self {
        Self {
            domain: None,
            start: None,
            stop: None,
            facet: None,
            padding_inner: 0.05,
            padding_outer: 0.05,
            facet_padding_multiplier: 0.5,
            state: None,
        }
    }
}

impl BandFacetScale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the ordered domain.
    ///
    /// Rejects duplicate keys (they would collide in the position lookup)
    /// and a new length that disagrees with an already-configured facet;
    /// on error the previously computed state is left untouched.
    pub fn domain<I, S>(&mut self, values: I) -> OncobandResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        for value in &values {
            if !seen.insert(value.as_str()) {
                return Err(OncobandError::DuplicateDomainValue(value.clone()));
            }
        }

        if let Some(facet) = &self.facet {
            if facet.labels.len() != values.len() {
                return Err(OncobandError::FacetLengthMismatch {
                    facets: facet.labels.len(),
                    domain: values.len(),
                });
            }
        }

        self.domain = Some(values);
        self.rebuild();
        Ok(self)
    }

    /// Replaces the output pixel interval.
    ///
    /// The interval may be given in either direction; it is normalized so
    /// positions always advance from the lower endpoint, which means a
    /// reversed input flips the visual order of the bands.
    pub fn range(&mut self, interval: [f64; 2]) -> &mut Self {
        let [r0, r1] = interval;
        let reverse = r1 < r0;
        self.start = Some(if reverse { r1 } else { r0 });
        self.stop = Some(if reverse { r0 } else { r1 });
        self.rebuild();
        self
    }

    /// Assigns one facet label per domain entry, index-aligned.
    ///
    /// Fails before any state is touched when no domain is set or the
    /// lengths disagree. Boundaries are detected by adjacent-pair
    /// inequality, so a label recurring in non-adjacent runs yields one
    /// facet interval per run.
    pub fn facet<I, S>(&mut self, labels: I) -> OncobandResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(domain) = &self.domain else {
            return Err(OncobandError::FacetWithoutDomain);
        };

        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != domain.len() {
            return Err(OncobandError::FacetLengthMismatch {
                facets: labels.len(),
                domain: domain.len(),
            });
        }

        let boundary: Vec<bool> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| i > 0 && *label != labels[i - 1])
            .collect();
        let boundary_count = boundary.iter().filter(|b| **b).count();
        trace!(?boundary, boundary_count, "facet boundaries detected");

        self.facet = Some(FacetSpec {
            labels,
            boundary,
            boundary_count,
        });
        self.rebuild();
        Ok(self)
    }

    /// Total inner padding as a fraction of the range, spread over the
    /// ordinary (non-facet) gaps. Default 0.05.
    pub fn padding_inner(&mut self, ratio: f64) -> &mut Self {
        self.padding_inner = ratio;
        self.rebuild();
        self
    }

    /// Total outer padding as a fraction of the range, half at each end.
    /// Default 0.05.
    pub fn padding_outer(&mut self, ratio: f64) -> &mut Self {
        self.padding_outer = ratio;
        self.rebuild();
        self
    }

    /// Scales the inner gap at facet boundaries. Default 0.5.
    pub fn facet_padding_multiplier(&mut self, multiplier: f64) -> &mut Self {
        self.facet_padding_multiplier = multiplier;
        self.rebuild();
        self
    }

    /// Start-aligned pixel position of `value`, `None` when the value is not
    /// in the domain or the scale is not fully configured.
    #[must_use]
    pub fn resolve(&self, value: &str) -> Option<f64> {
        self.state.as_ref()?.positions.get(value).copied()
    }

    /// Band-center pixel position of `value`; `None` as for [`resolve`].
    ///
    /// [`resolve`]: BandFacetScale::resolve
    #[must_use]
    pub fn resolve_centered(&self, value: &str) -> Option<f64> {
        self.state.as_ref()?.centers.get(value).copied()
    }

    /// Uniform pixel width of every band.
    #[must_use]
    pub fn bandwidth(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.bandwidth)
    }

    /// Per-index advance from the previous band: `steps()[0] == 0`, and
    /// `steps()[i]` is the bandwidth plus the gap preceding band `i` (the
    /// facet gap where a boundary sits, the ordinary inner gap elsewhere).
    #[must_use]
    pub fn steps(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.steps.as_slice())
    }

    /// Lower endpoint of the normalized range.
    #[must_use]
    pub fn start(&self) -> Option<f64> {
        self.start
    }

    /// Upper endpoint of the normalized range.
    #[must_use]
    pub fn stop(&self) -> Option<f64> {
        self.stop
    }

    /// Configured domain values in band order.
    #[must_use]
    pub fn domain_values(&self) -> Option<&[String]> {
        self.domain.as_deref()
    }

    /// One pixel interval per maximal contiguous run of a facet label, in
    /// domain order. Empty when unfaceted or not fully configured.
    #[must_use]
    pub fn facet_ranges(&self) -> &[FacetInterval] {
        self.state
            .as_ref()
            .map_or(&[], |s| s.facet_intervals.as_slice())
    }

    /// Ordered `(domain value, center position)` pairs, the tick anchors of
    /// an axis renderer.
    #[must_use]
    pub fn centers(&self) -> Vec<(String, f64)> {
        self.state.as_ref().map_or_else(Vec::new, |s| {
            s.centers
                .iter()
                .map(|(value, px)| (value.clone(), *px))
                .collect()
        })
    }

    /// Baseline segment along a horizontal axis, at y = 0 in axis-local
    /// coordinates. `None` until a range is set.
    #[must_use]
    pub fn axis_line_horizontal(&self) -> Option<AxisLine> {
        Some(AxisLine {
            x1: self.start?,
            y1: 0.0,
            x2: self.stop?,
            y2: 0.0,
        })
    }

    /// Baseline segment along a vertical axis, at x = 0 in axis-local
    /// coordinates. `None` until a range is set.
    #[must_use]
    pub fn axis_line_vertical(&self) -> Option<AxisLine> {
        Some(AxisLine {
            x1: 0.0,
            y1: self.start?,
            x2: 0.0,
            y2: self.stop?,
        })
    }

    /// Recomputes the cached lookup tables; a silent no-op until both the
    /// domain and the range are configured.
    fn rebuild(&mut self) {
        let (Some(domain), Some(start), Some(stop)) = (&self.domain, self.start, self.stop) else {
            return;
        };
        if domain.is_empty() {
            self.state = None;
            return;
        }

        let state = compute(
            domain,
            start,
            stop,
            self.facet.as_ref(),
            self.padding_inner,
            self.padding_outer,
            self.facet_padding_multiplier,
        );
        debug!(
            n = domain.len(),
            boundaries = self.facet.as_ref().map_or(0, |f| f.boundary_count),
            bandwidth = state.bandwidth,
            "band scale rebuilt"
        );
        self.state = Some(state);
    }
}

/// Pure placement math behind [`BandFacetScale`], O(n) in the domain size.
///
/// The pixel budget is exact by construction:
/// `2*outer + (n-1-k)*inner + k*facet_inner + n*bandwidth == stop - start`,
/// with `k` the number of facet boundaries.
fn compute(
    domain: &[String],
    start: f64,
    stop: f64,
    facet: Option<&FacetSpec>,
    padding_inner: f64,
    padding_outer: f64,
    facet_padding_multiplier: f64,
) -> ScaleState {
    let range_width = stop - start;
    let n = domain.len();
    let boundaries = facet.map_or(0, |f| f.boundary_count);

    // Ratios are fractions of the whole range: the inner ratio is split over
    // the n-1 gaps, the outer ratio over the two ends. A single-entry domain
    // with nonzero inner padding has no gap to spread it over; the division
    // is left to produce a non-finite bandwidth, as documented.
    let padding_inner_px = padding_inner * range_width / (n as f64 - 1.0);
    let padding_outer_px = padding_outer * range_width / 2.0;
    let padding_facet_px = facet_padding_multiplier * padding_inner_px;

    let bandwidth = (range_width
        - 2.0 * padding_outer_px
        - padding_inner_px * (n - 1 - boundaries) as f64
        - padding_facet_px * boundaries as f64)
        / n as f64;

    let steps: Vec<f64> = (0..n)
        .map(|i| {
            if i == 0 {
                0.0
            } else if facet.is_some_and(|f| f.boundary[i]) {
                bandwidth + padding_facet_px
            } else {
                bandwidth + padding_inner_px
            }
        })
        .collect();

    let first_band = start + padding_outer_px;
    let offsets = cumulative_sum(&steps);

    let mut positions = IndexMap::with_capacity(n);
    let mut centers = IndexMap::with_capacity(n);
    for (value, offset) in domain.iter().zip(&offsets) {
        positions.insert(value.clone(), first_band + offset);
        centers.insert(value.clone(), first_band + offset + bandwidth / 2.0);
    }

    let facet_intervals = facet.map_or_else(Vec::new, |f| {
        facet_runs(f)
            .into_iter()
            .map(|(first, last)| {
                let start_position = first_band + offsets[first];
                let end_position = first_band + offsets[last] + bandwidth;
                FacetInterval {
                    label: f.labels[first].clone(),
                    start_position,
                    end_position,
                    extent: end_position - start_position,
                }
            })
            .collect()
    });

    ScaleState {
        bandwidth,
        steps,
        positions,
        centers,
        facet_intervals,
    }
}

/// Maximal runs of equal adjacent labels as inclusive `(first, last)` index
/// pairs, in domain order.
fn facet_runs(facet: &FacetSpec) -> Vec<(usize, usize)> {
    let n = facet.labels.len();
    let mut runs = Vec::with_capacity(facet.boundary_count + 1);
    let mut run_start = 0;
    for i in 1..n {
        if facet.boundary[i] {
            runs.push((run_start, i - 1));
            run_start = i;
        }
    }
    if n > 0 {
        runs.push((run_start, n - 1));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::BandFacetScale;

    #[test]
    fn steps_lead_with_zero_and_widen_at_boundaries() {
        let mut scale = BandFacetScale::new();
        scale
            .domain(["a", "b", "c", "d"])
            .expect("valid domain")
            .range([0.0, 200.0])
            .padding_inner(0.1)
            .padding_outer(0.0)
            .facet_padding_multiplier(3.0)
            .facet(["g1", "g1", "g2", "g2"])
            .expect("valid facet");

        let steps = scale.steps().expect("configured scale");
        let bandwidth = scale.bandwidth().expect("configured scale");
        let inner = 0.1 * 200.0 / 3.0;

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], 0.0);
        assert!((steps[1] - (bandwidth + inner)).abs() < 1e-9);
        assert!((steps[2] - (bandwidth + 3.0 * inner)).abs() < 1e-9);
        assert!((steps[3] - (bandwidth + inner)).abs() < 1e-9);
    }

    #[test]
    fn single_run_facet_spans_all_bands() {
        let mut scale = BandFacetScale::new();
        scale
            .domain(["a", "b"])
            .expect("valid domain")
            .range([0.0, 100.0])
            .facet(["only", "only"])
            .expect("valid facet");

        let ranges = scale.facet_ranges();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].label, "only");
        assert_eq!(ranges[0].start_position, scale.resolve("a").unwrap());
        assert_eq!(
            ranges[0].end_position,
            scale.resolve("b").unwrap() + scale.bandwidth().unwrap()
        );
    }
}
