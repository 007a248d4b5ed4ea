use crate::coordinate_system::cartesian::{XYZPoint, XYZVector};
use clap::Parser;

/// Command-line arguments parser
#[derive(Parser, Debug)]
#[command(author, version, about, allow_negative_numbers = true)]
pub struct Args {
    /// X coordinate of the start voxel
    pub x: i64,

    /// Y coordinate of the start voxel
    pub y: i64,

    /// Z coordinate of the start voxel
    pub z: i64,

    /// Displacement along X
    pub dx: i64,

    /// Displacement along Y
    pub dy: i64,

    /// Displacement along Z
    pub dz: i64,

    /// Print the parsed start and delta before the visited voxels (optional)
    #[arg(long)]
    pub echo: bool,

    /// Enable debug logging (optional)
    #[arg(long, env = "VOXTRACE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn start(&self) -> XYZPoint {
        XYZPoint::new(self.x, self.y, self.z)
    }

    pub fn delta(&self) -> XYZVector {
        XYZVector::new(self.dx, self.dy, self.dz)
    }
}
