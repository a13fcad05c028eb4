pub mod frame_driver;
pub mod surface;
