//! Per-member analysis result series
//!
//! A [`MemberResultSet`] holds the sampled load-effect arrays an FE solver
//! reports for one frame member: one array per diagram kind, all sampled at
//! equally spaced stations along the member's local x-axis.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, DiagramResult};

/// The load-effect quantity a diagram is drawn for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramKind {
    /// Bending moment about the local y axis
    MomentY,
    /// Bending moment about the local z axis
    MomentZ,
    /// Shear force in the local y direction
    ShearY,
    /// Shear force in the local z direction
    ShearZ,
    /// Axial force (positive = tension)
    Axial,
    /// Torsional moment about the local x axis
    Torque,
    /// Deflection in the local y direction
    DeflectionY,
    /// Deflection in the local z direction
    DeflectionZ,
}

impl DiagramKind {
    /// All diagram kinds, in the order they are conventionally reported
    pub const ALL: [DiagramKind; 8] = [
        DiagramKind::MomentY,
        DiagramKind::MomentZ,
        DiagramKind::ShearY,
        DiagramKind::ShearZ,
        DiagramKind::Axial,
        DiagramKind::Torque,
        DiagramKind::DeflectionY,
        DiagramKind::DeflectionZ,
    ];

    /// Short lowercase name, used in logs and serialized output
    pub fn name(&self) -> &'static str {
        match self {
            DiagramKind::MomentY => "moment_y",
            DiagramKind::MomentZ => "moment_z",
            DiagramKind::ShearY => "shear_y",
            DiagramKind::ShearZ => "shear_z",
            DiagramKind::Axial => "axial",
            DiagramKind::Torque => "torque",
            DiagramKind::DeflectionY => "deflection_y",
            DiagramKind::DeflectionZ => "deflection_z",
        }
    }
}

impl std::fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sampled result arrays for a single member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResultSet {
    /// Member length, used to derive the sample spacing
    pub member_length: f64,
    /// Raw (unscaled) sample series keyed by diagram kind
    series: HashMap<DiagramKind, Vec<f64>>,
}

impl MemberResultSet {
    /// Create an empty result set for a member of the given length
    pub fn new(member_length: f64) -> Self {
        Self {
            member_length,
            series: HashMap::new(),
        }
    }

    /// Store the sample series for one diagram kind
    ///
    /// Samples are raw solver output in index order along the member, equally
    /// spaced from the i-node to the j-node.
    pub fn add_series(&mut self, kind: DiagramKind, values: Vec<f64>) -> DiagramResult<&mut Self> {
        if self.series.contains_key(&kind) {
            return Err(DiagramError::DuplicateSeries(kind));
        }
        self.series.insert(kind, values);
        Ok(self)
    }

    /// Get the stored series for a kind, if present
    pub fn series(&self, kind: DiagramKind) -> Option<&[f64]> {
        self.series.get(&kind).map(|v| v.as_slice())
    }

    /// Kinds that have a stored series
    pub fn kinds(&self) -> impl Iterator<Item = DiagramKind> + '_ {
        self.series.keys().copied()
    }

    /// Uniform distance between consecutive sample stations for a kind
    ///
    /// Defined as `member_length / (n_points - 1)`; a series with fewer than
    /// two points has no spacing.
    pub fn sample_spacing(&self, kind: DiagramKind) -> DiagramResult<f64> {
        let values = self
            .series(kind)
            .ok_or(DiagramError::SeriesNotFound(kind))?;
        if values.len() < 2 {
            return Err(DiagramError::SpacingUndefined {
                kind,
                points: values.len(),
            });
        }
        Ok(self.member_length / (values.len() - 1) as f64)
    }
}
