//! Error types for diagram construction

use thiserror::Error;

use crate::results::DiagramKind;

/// Main error type for diagram operations
///
/// The geometry functions themselves are total over their input domain and
/// never fail; errors only arise at the result-set boundary where a caller
/// contract can be checked up front.
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("No {0} result series stored for this member")]
    SeriesNotFound(DiagramKind),

    #[error("A {0} result series already exists for this member")]
    DuplicateSeries(DiagramKind),

    #[error("Sample spacing undefined for {kind}: {points} sample point(s), need at least 2")]
    SpacingUndefined { kind: DiagramKind, points: usize },
}

/// Result type for diagram operations
pub type DiagramResult<T> = Result<T, DiagramError>;
