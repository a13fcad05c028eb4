use crate::core::types::{Number, Point3, Vector3};
use getset::CopyGetters;

/// A ray in world-space, with a cached reciprocal direction for slab tests
#[derive(CopyGetters, Copy, Clone, PartialEq, Debug)]
#[getset(get_copy = "pub")]
pub struct Ray {
    /// World-space coordinate of the ray
    pos: Point3,
    /// Direction vector of the ray. Always normalised
    dir: Vector3,
    /// Component-wise reciprocal of [`Self::dir`].
    ///
    /// Zero components of the direction become infinities here (signed like the zero),
    /// which the slab test relies on.
    inv_dir: Vector3,
}

impl Ray {
    pub fn new(pos: Point3, dir: Vector3) -> Self {
        let dir = dir.normalize();
        Self {
            pos,
            dir,
            inv_dir: dir.recip(),
        }
    }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    pub fn at(&self, t: Number) -> Point3 { self.pos + (self.dir * t) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn direction_is_normalised() {
        let ray = Ray::new(Point3::ZERO, Vector3::new(0., 3., 4.));
        assert_relative_eq!(ray.dir().length(), 1.);
        assert_relative_eq!(ray.at(5.), Point3::new(0., 3., 4.));
    }

    #[test]
    fn zero_components_invert_to_infinity() {
        let ray = Ray::new(Point3::ZERO, Vector3::new(0., -0., 1.));
        assert_eq!(ray.inv_dir().x, Number::INFINITY);
        assert_eq!(ray.inv_dir().y, Number::NEG_INFINITY);
        assert_eq!(ray.inv_dir().z, 1.);
    }
}
