use std::ops::{
    Add,
    Mul,
    Sub
};

use nalgebra::Vector3;
use serde::{
    Deserialize,
    Serialize
};

/// Immutable three-component vector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    coords: Vector3<f64>
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { coords: Vector3::new(x, y, z) }
    }

    pub fn zero() -> Vec3 {
        Vec3 { coords: Vector3::zeros() }
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    pub fn z(&self) -> f64 {
        self.coords.z
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        self.coords.dot(&other.coords)
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3 { coords: self.coords.cross(&other.coords) }
    }

    pub fn magnitude(&self) -> f64 {
        self.coords.norm()
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    pub fn normalize(&self) -> Vec3 {
        let m = self.magnitude();
        if m == 0.0 {
            Vec3::zero()
        } else {
            *self * (1.0 / m)
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::zero()
    }
}

impl From<Vector3<f64>> for Vec3 {
    fn from(coords: Vector3<f64>) -> Self {
        Vec3 { coords }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 { coords: self.coords + rhs.coords }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 { coords: self.coords - rhs.coords }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3 { coords: self.coords * rhs }
    }
}
