//! Geometric core: signed diagram loop construction
//!
//! Turns one member's scalar sample series into closed 2D polygon loops in
//! the member's local plane, one loop per contiguous same-sign region of the
//! diagram, anchored to the baseline and split at interpolated zero
//! crossings.

pub mod coords;
pub mod loops;
pub mod ordinates;

use serde::{Deserialize, Serialize};

pub use coords::generate_coordinates;
pub use loops::{close_loop, compose_face_loops};
pub use ordinates::{separate_ordinates, DEFAULT_ZERO_TOL};

/// A 2D point in the member's local diagram plane
///
/// `x` is the distance along the member's local axis; `y` is the (scaled)
/// ordinate value, with `y = 0` on the member baseline. Value equality is
/// exact, which is what loop de-duplication relies on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    pub x: f64,
    pub y: f64,
}

impl DiagramPoint {
    /// Create a point at the given station and ordinate
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A point on the member baseline at the given station
    pub fn baseline(x: f64) -> Self {
        Self { x, y: 0.0 }
    }
}

/// One filled lobe's outline: an ordered list of diagram points
pub type Loop = Vec<DiagramPoint>;
