//! Member Diagrams - signed force/moment diagram geometry
//!
//! This library turns per-member structural analysis results (sampled
//! moment, shear, axial, torque, or deflection series) into the 2D geometry
//! of a filled force diagram:
//! - closed polygon loops, one per same-sign lobe of the curve, split at
//!   linearly interpolated zero crossings and anchored to the member
//!   baseline, ready to be extruded into faces by a CAD renderer, and
//! - formatted value labels with anchor positions tracking the drawn curve.
//!
//! The FE solver producing the sample arrays and the renderer consuming the
//! loops are external; everything here is pure 2D math in the member's local
//! plane.
//!
//! ## Example
//! ```rust
//! use member_diagrams::prelude::*;
//!
//! // Midspan moment samples for a 6 m simply supported beam
//! let mut results = MemberResultSet::new(6.0);
//! results
//!     .add_series(DiagramKind::MomentZ, vec![0.0, 22.5, 30.0, 22.5, 0.0])
//!     .unwrap();
//!
//! let diagram = DiagramBuilder::new()
//!     .with_scale(0.1)
//!     .with_precision(2)
//!     .build(&results, DiagramKind::MomentZ)
//!     .unwrap();
//!
//! // One label per sample, every face loop closed
//! assert_eq!(diagram.labels.len(), 5);
//! for face in &diagram.loops {
//!     assert_eq!(face.first(), face.last());
//! }
//! ```

pub mod builder;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::builder::{
        member_diagram_coords, DiagramBuilder, DiagramSettings, MemberDiagram,
    };
    pub use crate::error::{DiagramError, DiagramResult};
    pub use crate::geometry::{
        close_loop, compose_face_loops, generate_coordinates, separate_ordinates, DiagramPoint,
        Loop, DEFAULT_ZERO_TOL,
    };
    pub use crate::labels::{label_positions, DiagramLabel};
    pub use crate::results::{DiagramKind, MemberResultSet};
}
