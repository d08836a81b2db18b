//! Per-member diagram assembly
//!
//! Top-level entry points that tie the geometric core together: scale a raw
//! sample series, split it into same-sign groups, lay out the coordinate
//! loops, and produce the renderer-facing [`MemberDiagram`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, DiagramResult};
use crate::geometry::{
    compose_face_loops, generate_coordinates, separate_ordinates, Loop, DEFAULT_ZERO_TOL,
};
use crate::labels::{label_positions, DiagramLabel};
use crate::results::{DiagramKind, MemberResultSet};

/// Scale a raw sample series and lay it out as coordinate loops
///
/// Returns the raw (non-normalized) loop list together with the scaled
/// values; the two stay index-aligned, which is what label placement relies
/// on. Callers wanting renderer-safe loops apply
/// [`compose_face_loops`] to the returned loops separately.
///
/// `scale` may be any float: zero collapses every ordinate onto the
/// baseline, a negative value mirrors the diagram, neither is an error.
pub fn member_diagram_coords(
    values: &[f64],
    dist: f64,
    scale: f64,
    zero_tol: f64,
) -> (Vec<Loop>, Vec<f64>) {
    let values_scaled: Vec<f64> = values.iter().map(|v| v * scale).collect();
    let ordinates = separate_ordinates(&values_scaled, zero_tol);
    let coordinates = generate_coordinates(&ordinates, dist, zero_tol);
    (coordinates, values_scaled)
}

/// Display settings for a member diagram
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DiagramSettings {
    /// Ordinate scale factor applied before layout
    pub scale: f64,
    /// Magnitude below which an ordinate counts as zero
    pub zero_tol: f64,
    /// Mantissa digits of the label text
    pub precision: usize,
    /// Text height used by the renderer (placement-neutral, see
    /// [`label_positions`])
    pub font_height: f64,
    /// Vertical distance between the drawn curve and a label anchor
    pub label_offset: f64,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            zero_tol: DEFAULT_ZERO_TOL,
            precision: 2,
            font_height: 0.0,
            label_offset: 0.0,
        }
    }
}

/// A fully assembled diagram for one member and one load effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDiagram {
    /// Load effect this diagram draws
    pub kind: DiagramKind,
    /// Spacing between consecutive sample stations
    pub dist: f64,
    /// Normalized, face-safe outlines (closed, no degenerate loops)
    pub loops: Vec<Loop>,
    /// Pre-normalization loops, index-aligned with the sample stations
    pub raw_loops: Vec<Loop>,
    /// One label per sample station
    pub labels: Vec<DiagramLabel>,
    /// Sample values after scaling
    pub values_scaled: Vec<f64>,
}

/// Builds [`MemberDiagram`]s from stored result series
#[derive(Debug, Clone, Default)]
pub struct DiagramBuilder {
    settings: DiagramSettings,
}

impl DiagramBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ordinate scale factor
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.settings.scale = scale;
        self
    }

    /// Set the zero tolerance shared by splitting and layout
    pub fn with_zero_tol(mut self, zero_tol: f64) -> Self {
        self.settings.zero_tol = zero_tol;
        self
    }

    /// Set the label mantissa precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.settings.precision = precision;
        self
    }

    /// Set the renderer text height carried alongside the labels
    pub fn with_font_height(mut self, font_height: f64) -> Self {
        self.settings.font_height = font_height;
        self
    }

    /// Set the vertical label offset
    pub fn with_label_offset(mut self, label_offset: f64) -> Self {
        self.settings.label_offset = label_offset;
        self
    }

    /// Current settings
    pub fn settings(&self) -> &DiagramSettings {
        &self.settings
    }

    /// Build the diagram for one stored series
    pub fn build(
        &self,
        results: &MemberResultSet,
        kind: DiagramKind,
    ) -> DiagramResult<MemberDiagram> {
        let values = results
            .series(kind)
            .ok_or(DiagramError::SeriesNotFound(kind))?;
        let dist = results.sample_spacing(kind)?;

        let (raw_loops, values_scaled) =
            member_diagram_coords(values, dist, self.settings.scale, self.settings.zero_tol);
        let loops = compose_face_loops(&raw_loops);
        let labels = label_positions(
            &values_scaled,
            values,
            dist,
            self.settings.font_height,
            self.settings.precision,
            self.settings.label_offset,
        );

        debug!(
            "{kind} diagram: {} sample(s), dist {dist}, {} face loop(s) ({} raw)",
            values.len(),
            loops.len(),
            raw_loops.len()
        );

        Ok(MemberDiagram {
            kind,
            dist,
            loops,
            raw_loops,
            labels,
            values_scaled,
        })
    }

    /// Build diagrams for every stored series, in conventional kind order
    pub fn build_all(&self, results: &MemberResultSet) -> DiagramResult<Vec<MemberDiagram>> {
        DiagramKind::ALL
            .iter()
            .filter(|&&kind| results.series(kind).is_some())
            .map(|&kind| self.build(results, kind))
            .collect()
    }
}
