//! A small real-time ray caster.
//!
//! Every frame, one ray per pixel is cast into a fixed scene of axis-aligned boxes
//! ([`scene`]), the resulting debug colours are written into an output image in parallel tiles
//! ([`render::compute`]), and the image is painted over the whole window ([`render::presentation`]).
//! The [`driver`] ties these together behind a [`driver::surface::Surface`] provided by the windowing layer.

pub mod core;
pub mod driver;
pub mod render;
pub mod scene;
pub mod shared;
