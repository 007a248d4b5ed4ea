//! Integer-only traversal of every voxel a 3D line segment passes through.
//!
//! The walk keeps three pairwise error terms (`exy`, `exz`, `ezy`) in the
//! spirit of Bresenham's line algorithm and moves along exactly one axis per
//! step, so a segment with delta `(dx, dy, dz)` visits
//! `|dx| + |dy| + |dz| + 1` voxels: the start, then one voxel per step,
//! ending on `start + delta`.

use crate::coordinate_system::cartesian::{Axis, XYZPoint, XYZVector};
use crate::errors::TraversalError;
use crate::visitor::VoxelVisitor;
use log::{debug, trace};
use std::iter::FusedIterator;

/// Largest supported magnitude of a single delta component.
///
/// Keeps the doubled deltas, the error terms and the step count inside `i64`.
pub const MAX_DELTA: i64 = 1 << 61;

/// Returns `1`, `-1` or `0` according to the sign of `v`.
pub fn sign(v: i64) -> i64 {
    i64::from(v > 0) - i64::from(v < 0)
}

/// A start voxel plus the displacement to walk.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: XYZPoint,
    pub delta: XYZVector,
}

impl Segment {
    pub fn new(start: XYZPoint, delta: XYZVector) -> Self {
        Self { start, delta }
    }

    /// Segment from `start` to `end`, both inclusive.
    pub fn between(start: XYZPoint, end: XYZPoint) -> Result<Self, TraversalError> {
        let delta = end
            .checked_sub(start)
            .map_err(|axis| TraversalError::EndpointOverflow { axis })?;
        Ok(Self { start, delta })
    }

    pub fn voxels(&self) -> Result<VoxelTraversal, TraversalError> {
        VoxelTraversal::new(self.start, self.delta)
    }

    /// Number of voxels a traversal of this segment visits.
    pub fn voxel_count(&self) -> Result<u64, TraversalError> {
        Ok(self.voxels()?.remaining_steps() + 1)
    }
}

/// Checks that walking `delta` from `start` cannot overflow.
pub fn validate(start: XYZPoint, delta: XYZVector) -> Result<(), TraversalError> {
    for axis in Axis::ALL {
        let value = delta.get(axis);
        if value.unsigned_abs() > MAX_DELTA.unsigned_abs() {
            return Err(TraversalError::DeltaOutOfRange { axis, value });
        }
    }
    start
        .checked_add(delta)
        .map_err(|axis| TraversalError::EndpointOverflow { axis })?;
    Ok(())
}

/// Iterator over the voxels of a segment, start and end included.
#[derive(Debug, Clone)]
pub struct VoxelTraversal {
    current: XYZPoint,
    step: XYZVector,
    bx: i64,
    by: i64,
    bz: i64,
    exy: i64,
    exz: i64,
    ezy: i64,
    remaining: u64,
    exhausted: bool,
}

impl VoxelTraversal {
    pub fn new(start: XYZPoint, delta: XYZVector) -> Result<Self, TraversalError> {
        validate(start, delta)?;
        Ok(Self::unchecked(start, delta))
    }

    /// Builds the walk without range checks. Deltas beyond [`MAX_DELTA`] or an
    /// endpoint outside `i64` overflow while stepping.
    pub fn unchecked(start: XYZPoint, delta: XYZVector) -> Self {
        let ax = delta.dx.abs();
        let ay = delta.dy.abs();
        let az = delta.dz.abs();

        Self {
            current: start,
            step: XYZVector::new(sign(delta.dx), sign(delta.dy), sign(delta.dz)),
            bx: 2 * ax,
            by: 2 * ay,
            bz: 2 * az,
            exy: ay - ax,
            exz: az - ax,
            ezy: ay - az,
            remaining: delta.dx.unsigned_abs() + delta.dy.unsigned_abs() + delta.dz.unsigned_abs(),
            exhausted: false,
        }
    }

    /// Steps still to take after the voxel that `next` returns next.
    pub fn remaining_steps(&self) -> u64 {
        self.remaining
    }

    fn advance(&mut self) {
        let axis = if self.exy < 0 {
            if self.exz < 0 {
                Axis::X
            } else {
                Axis::Z
            }
        } else if self.ezy < 0 {
            Axis::Z
        } else {
            Axis::Y
        };

        match axis {
            Axis::X => {
                self.current.x += self.step.dx;
                self.exy += self.by;
                self.exz += self.bz;
            }
            Axis::Y => {
                self.current.y += self.step.dy;
                self.exy -= self.bx;
                self.ezy -= self.bz;
            }
            Axis::Z => {
                self.current.z += self.step.dz;
                self.exz -= self.bx;
                self.ezy += self.by;
            }
        }
        self.remaining -= 1;
    }
}

impl Iterator for VoxelTraversal {
    type Item = XYZPoint;

    fn next(&mut self) -> Option<XYZPoint> {
        if self.exhausted {
            return None;
        }
        let voxel = self.current;
        if self.remaining == 0 {
            self.exhausted = true;
        } else {
            self.advance();
        }
        Some(voxel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match usize::try_from(self.remaining)
            .ok()
            .and_then(|n| n.checked_add(1))
        {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for VoxelTraversal {}

/// Calls `visitor` once for every voxel from `start` to `start + delta`.
///
/// Performs no range checks; see [`try_traverse`] for the checked variant.
pub fn traverse<V>(start: XYZPoint, delta: XYZVector, visitor: &mut V)
where
    V: VoxelVisitor + ?Sized,
{
    trace!("traverse from {start} by {delta}");
    for voxel in VoxelTraversal::unchecked(start, delta) {
        visitor.visit(voxel);
    }
}

/// Like [`traverse`], but rejects segments that would overflow before
/// visiting anything.
pub fn try_traverse<V>(
    start: XYZPoint,
    delta: XYZVector,
    visitor: &mut V,
) -> Result<(), TraversalError>
where
    V: VoxelVisitor + ?Sized,
{
    let traversal = VoxelTraversal::new(start, delta)?;
    debug!(
        "traversing {} voxels from {start} by {delta}",
        traversal.remaining_steps() + 1
    );
    for voxel in traversal {
        visitor.visit(voxel);
    }
    Ok(())
}

/// All voxels from `start` to `end`, both inclusive.
pub fn voxel_line(start: XYZPoint, end: XYZPoint) -> Result<Vec<XYZPoint>, TraversalError> {
    Ok(Segment::between(start, end)?.voxels()?.collect())
}

/// Walks the segment and returns the first value `probe` produces.
/// No voxel past the first hit is probed, and nothing is probed when the
/// segment is out of range.
pub fn find_voxel<T, F>(
    start: XYZPoint,
    delta: XYZVector,
    probe: F,
) -> Result<Option<T>, TraversalError>
where
    F: FnMut(XYZPoint) -> Option<T>,
{
    Ok(VoxelTraversal::new(start, delta)?.find_map(probe))
}
