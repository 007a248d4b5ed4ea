mod axis;
mod xyzpoint;
mod xyzvector;

pub use axis::Axis;
pub use xyzpoint::XYZPoint;
pub use xyzvector::XYZVector;
