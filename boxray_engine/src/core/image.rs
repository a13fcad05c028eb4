use crate::core::types::{OutputColour, Size2};
use derivative::Derivative;
use getset::{CopyGetters, Getters};
use num_integer::Integer;
use std::ops::{Deref, DerefMut, Index, IndexMut, Range};

/// A row-major 2D buffer of pixels, with row `0` being the top of the image
#[derive(CopyGetters, Getters, Derivative, Clone, PartialEq)]
#[derivative(Debug)]
pub struct Image<Col = OutputColour> {
    #[get_copy = "pub"]
    width: usize,
    #[get_copy = "pub"]
    height: usize,
    #[get_copy = "pub"]
    len: usize,
    #[derivative(Debug = "ignore")]
    #[get = "pub"]
    data: Box<[Col]>,
}

// region Constructors

impl<Col: Clone> Image<Col> {
    /// Creates a new image with the specified dimensions, and the given fill pixel value
    pub fn new_filled(width: usize, height: usize, fill: Col) -> Self {
        Self::new_from(width, height, vec![fill; width * height])
    }
}

impl<Col> Image<Col> {
    /// Creates an image from the image's dimensions, and a slice of pixels
    ///
    /// # Panics
    /// The length of the `data` must be equal to the number of pixels `width * height`.
    pub fn new_from(width: usize, height: usize, data: impl Into<Box<[Col]>>) -> Self {
        let data = data.into();
        let len = width * height;
        assert_eq!(data.len(), len, "number of pixels does not match dimensions");

        Self { width, height, data, len }
    }

    /// Creates an image from the image's dimensions, using the given function to calculate pixel values
    pub fn from_fn(width: usize, height: usize, mut func: impl FnMut(usize, usize) -> Col) -> Self {
        let len = width * height;
        let data = (0..len)
            .map(|i| {
                let (x, y) = Self::decompress_index_dims(i, width);
                func(x, y)
            })
            .collect::<Box<[Col]>>();

        Self { width, height, data, len }
    }
}

// endregion Constructors

// region Pixel Accessors

impl<Col> Image<Col> {
    /// The dimensions of the image as `(width, height)`
    pub fn extent(&self) -> Size2 { Size2::new(self.width as u32, self.height as u32) }

    fn compress_index(&self, x: usize, y: usize) -> usize { x + (y * self.width) }

    fn decompress_index_dims(n: usize, width: usize) -> (usize, usize) {
        let (y, x) = usize::div_rem(&n, &width);
        (x, y)
    }

    fn row_range(&self, y: usize) -> Range<usize> {
        assert!(y < self.height, "invalid row {} for height {}", y, self.height);
        let start = self.compress_index(0, y);
        start..start + self.width
    }

    /// The pixels of row `y`, left to right
    pub fn row(&self, y: usize) -> &[Col] { &self.data[self.row_range(y)] }

    pub fn row_mut(&mut self, y: usize) -> &mut [Col] {
        let range = self.row_range(y);
        &mut self.data[range]
    }

    /// Iterates over the pixels row-by-row, returning `(x, y, &pixel)`
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (usize, usize, &Col)> + '_ {
        self.data.iter().enumerate().map(|(i, px)| {
            let (x, y) = Self::decompress_index_dims(i, self.width);
            (x, y, px)
        })
    }
}

impl<Col> Index<(usize, usize)> for Image<Col> {
    type Output = Col;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.width && y < self.height,
            "invalid pixel index ({}, {}) for dims ({},{})",
            x,
            y,
            self.width,
            self.height
        );
        &self.data[self.compress_index(x, y)]
    }
}

impl<Col> IndexMut<(usize, usize)> for Image<Col> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(
            x < self.width && y < self.height,
            "invalid pixel index ({}, {}) for dims ({},{})",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.compress_index(x, y);
        &mut self.data[idx]
    }
}

// endregion Pixel Accessors

// region Deref

impl<Col> Deref for Image<Col> {
    type Target = [Col];

    fn deref(&self) -> &Self::Target { self.data.deref() }
}
impl<Col> DerefMut for Image<Col> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.data.deref_mut() }
}

// endregion Deref

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let img = Image::from_fn(3, 2, |x, y| (x, y));
        assert_eq!(img.len(), 6);
        assert_eq!(img[(2, 0)], (2, 0));
        assert_eq!(img[(0, 1)], (0, 1));
        assert_eq!(img.row(1), &[(0, 1), (1, 1), (2, 1)]);
        assert!(img.enumerate_pixels().all(|(x, y, &px)| px == (x, y)));
    }

    #[test]
    fn row_mut_only_touches_that_row() {
        let mut img = Image::new_filled(4, 3, 0u8);
        img.row_mut(1)[1..3].copy_from_slice(&[7, 8]);
        assert_eq!(&*img, &[0, 0, 0, 0, 0, 7, 8, 0, 0, 0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_index_panics() {
        let img = Image::new_filled(2, 2, 0u8);
        let _ = img[(2, 0)];
    }
}
