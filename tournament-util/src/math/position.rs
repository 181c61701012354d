use std::fmt;

use super::vector3::Vector3;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// Aka Block Position
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn floored(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(
            x.floor() as i32,
            y.floor() as i32,
            z.floor() as i32,
        ))
    }

    /// Corner of the block as a world-space vector.
    pub fn to_f64(&self) -> Vector3<f64> {
        self.0.to_f64()
    }

    /// Center of the block as a world-space vector.
    pub fn to_centered_f64(&self) -> Vector3<f64> {
        self.to_f64().add_raw(0.5, 0.5, 0.5)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}
