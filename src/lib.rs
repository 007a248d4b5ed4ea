//! Voxtrace walks every voxel a straight 3D segment passes through, using
//! integer arithmetic only.
//!
//! ```
//! use voxtrace::{traverse, XYZPoint, XYZVector};
//!
//! let mut seen = Vec::new();
//! traverse(
//!     XYZPoint::new(1, 1, 1),
//!     XYZVector::new(2, -3, 1),
//!     &mut |voxel: XYZPoint| seen.push(voxel),
//! );
//! assert_eq!(seen.len(), 7);
//! assert_eq!(seen.last(), Some(&XYZPoint::new(3, -2, 2)));
//! ```

pub mod args;
pub mod cli;
pub mod coordinate_system;
pub mod errors;
pub mod logging;
pub mod parallel_processing;
pub mod visitor;
pub mod voxel_traversal;

pub use args::Args;
pub use coordinate_system::cartesian::{Axis, XYZPoint, XYZVector};
pub use errors::TraversalError;
pub use parallel_processing::{count_voxels, trace_segments};
pub use visitor::{CollectingVisitor, LoggingVisitor, NoopVisitor, VoxelVisitor, WriterVisitor};
pub use voxel_traversal::{
    find_voxel, sign, traverse, try_traverse, validate, voxel_line, Segment, VoxelTraversal,
    MAX_DELTA,
};
