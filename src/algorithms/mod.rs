//! Geometry algorithms: AR projection and compass rotations

pub mod projection;
pub mod compass;

pub use projection::GeometryProjector;
pub use compass::{pointer_rotation, rose_rotation, compass_point_label, CompassReading};
