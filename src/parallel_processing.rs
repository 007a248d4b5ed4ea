//! Traces many independent segments at once on the rayon thread pool.
//!
//! Every traversal owns its own state, so segments are split across workers
//! without any locking; results come back in input order.

use crate::coordinate_system::cartesian::XYZPoint;
use crate::errors::TraversalError;
use crate::voxel_traversal::Segment;
use log::debug;
use rayon::prelude::*;

/// Voxel lists for every segment, in the same order as `segments`.
///
/// If any segment is out of range, an error from one of the failing segments
/// is returned instead.
pub fn trace_segments(segments: &[Segment]) -> Result<Vec<Vec<XYZPoint>>, TraversalError> {
    debug!("tracing {} segments in parallel", segments.len());
    segments
        .par_iter()
        .map(|segment| -> Result<Vec<XYZPoint>, TraversalError> {
            Ok(segment.voxels()?.collect())
        })
        .collect()
}

/// Total number of voxels visited across all segments.
pub fn count_voxels(segments: &[Segment]) -> Result<u64, TraversalError> {
    segments
        .par_iter()
        .map(Segment::voxel_count)
        .try_reduce(|| 0, |a, b| Ok(a.saturating_add(b)))
}
