use crate::coordinate_system::cartesian::Axis;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    #[error("delta {axis} = {value} is outside the supported range (|d| <= 2^61)")]
    DeltaOutOfRange { axis: Axis, value: i64 },
    #[error("segment endpoint overflows a 64-bit coordinate on the {axis} axis")]
    EndpointOverflow { axis: Axis },
}
