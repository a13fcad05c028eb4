use crate::core::colour::{ColourRgb, ColourRgba};

/// Numeric type used for colour channels
pub type Channel = f32;
pub type Colour = ColourRgb;
/// The colour format the compute pass writes to the output image
pub type OutputColour = ColourRgba;
pub type Image = crate::core::image::Image<OutputColour>;

/// Numeric type used for geometry calculations in the engine
pub type Number = f32;
pub type Vector3 = glam::Vec3;
pub type Point2 = glam::Vec2;
pub type Point3 = glam::Vec3;
/// Integer 2D coordinate, used for pixel positions, image extents and dispatch IDs
pub type Size2 = glam::UVec2;
