use super::axis::Axis;
use super::xyzvector::XYZVector;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A single voxel of the integer lattice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct XYZPoint {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl XYZPoint {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    /// `self + delta`, or the first axis that overflows.
    pub fn checked_add(&self, delta: XYZVector) -> Result<XYZPoint, Axis> {
        Ok(Self {
            x: self.x.checked_add(delta.dx).ok_or(Axis::X)?,
            y: self.y.checked_add(delta.dy).ok_or(Axis::Y)?,
            z: self.z.checked_add(delta.dz).ok_or(Axis::Z)?,
        })
    }

    /// `self - other`, or the first axis that overflows.
    pub fn checked_sub(&self, other: XYZPoint) -> Result<XYZVector, Axis> {
        Ok(XYZVector {
            dx: self.x.checked_sub(other.x).ok_or(Axis::X)?,
            dy: self.y.checked_sub(other.y).ok_or(Axis::Y)?,
            dz: self.z.checked_sub(other.z).ok_or(Axis::Z)?,
        })
    }
}

impl fmt::Display for XYZPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

// below are associated +- operators
impl Add<XYZVector> for XYZPoint {
    type Output = XYZPoint;

    fn add(self, other: XYZVector) -> XYZPoint {
        XYZPoint {
            x: self.x + other.dx,
            y: self.y + other.dy,
            z: self.z + other.dz,
        }
    }
}

impl AddAssign<XYZVector> for XYZPoint {
    fn add_assign(&mut self, other: XYZVector) {
        self.x += other.dx;
        self.y += other.dy;
        self.z += other.dz;
    }
}

impl Sub for XYZPoint {
    type Output = XYZVector;

    fn sub(self, other: XYZPoint) -> XYZVector {
        XYZVector {
            dx: self.x - other.x,
            dy: self.y - other.y,
            dz: self.z - other.z,
        }
    }
}

impl Sub<XYZVector> for XYZPoint {
    type Output = XYZPoint;

    fn sub(self, other: XYZVector) -> XYZPoint {
        XYZPoint {
            x: self.x - other.dx,
            y: self.y - other.dy,
            z: self.z - other.dz,
        }
    }
}

impl SubAssign<XYZVector> for XYZPoint {
    fn sub_assign(&mut self, other: XYZVector) {
        self.x -= other.dx;
        self.y -= other.dy;
        self.z -= other.dz;
    }
}
