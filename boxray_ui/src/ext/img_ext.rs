use boxray_engine::core::types::Image;
use egui::{Color32, ColorImage};
use puffin::profile_function;
use rayon::prelude::*;

pub trait ImageExt {
    /// Converts the output image into an egui-appropriate one.
    ///
    /// Channels are quantised to 8 bits as they are, with no colour space conversion,
    /// the same as storing them into an `rgba8` texture.
    fn to_egui(&self) -> ColorImage;
}

impl ImageExt for Image {
    fn to_egui(&self) -> ColorImage {
        profile_function!();

        let pixels = self
            .par_iter()
            .map(|c| {
                let [r, g, b, a] = c.to_unorm8();
                Color32::from_rgba_unmultiplied(r, g, b, a)
            })
            .collect();

        ColorImage {
            size: [self.width(), self.height()],
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxray_engine::core::types::OutputColour;

    #[test]
    fn converts_row_major_without_gamma() {
        let image = Image::from_fn(2, 2, |x, y| OutputColour::new([x as f32, y as f32, 0.5, 1.]));
        let converted = image.to_egui();

        assert_eq!(converted.size, [2, 2]);
        assert_eq!(converted.pixels[0], Color32::from_rgba_unmultiplied(0, 0, 128, 255));
        assert_eq!(converted.pixels[1], Color32::from_rgba_unmultiplied(255, 0, 128, 255));
        assert_eq!(converted.pixels[2], Color32::from_rgba_unmultiplied(0, 255, 128, 255));
        assert_eq!(converted[(1, 1)], Color32::from_rgba_unmultiplied(255, 255, 128, 255));
    }
}
