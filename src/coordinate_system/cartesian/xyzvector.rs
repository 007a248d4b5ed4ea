use super::axis::Axis;
use std::fmt;
use std::ops::Neg;

/// A displacement between two voxels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct XYZVector {
    pub dx: i64,
    pub dy: i64,
    pub dz: i64,
}

impl XYZVector {
    pub fn new(dx: i64, dy: i64, dz: i64) -> Self {
        Self { dx, dy, dz }
    }

    pub fn get(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
            Axis::Z => self.dz,
        }
    }
}

impl fmt::Display for XYZVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.dx, self.dy, self.dz)
    }
}

impl Neg for XYZVector {
    type Output = XYZVector;

    fn neg(self) -> XYZVector {
        XYZVector {
            dx: -self.dx,
            dy: -self.dy,
            dz: -self.dz,
        }
    }
}
