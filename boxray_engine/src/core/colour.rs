use crate::core::types::Channel;
use std::ops::{Deref, Index, IndexMut};

#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
#[repr(transparent)]
pub struct Colour<const N: usize>(pub [Channel; N]);

pub type ColourRgb = Colour<3>;
pub type ColourRgba = Colour<4>;

impl<const N: usize> Default for Colour<N> {
    fn default() -> Self { Self::BLACK }
}

// region Constructors

impl<const N: usize> Colour<N> {
    pub const fn new(val: [Channel; N]) -> Self { Self(val) }
}

// endregion Constructors

// region RGB(A) Impl

impl ColourRgb {
    /// Extends the colour with an alpha channel
    pub const fn with_alpha(self, alpha: Channel) -> ColourRgba {
        let [r, g, b] = self.0;
        ColourRgba::new([r, g, b, alpha])
    }
}

impl ColourRgba {
    /// Drops the alpha channel
    pub const fn rgb(self) -> ColourRgb {
        let [r, g, b, _] = self.0;
        ColourRgb::new([r, g, b])
    }

    pub const fn alpha(self) -> Channel { self.0[3] }
}

// endregion RGB(A) Impl

// region Known Colours

impl<const N: usize> Colour<N> {
    pub const BLACK: Self = Self::new([0.; N]);
    pub const WHITE: Self = Self::new([1.; N]);
}

impl ColourRgba {
    /// Opaque black, the value of every texel before the first barrier
    pub const OPAQUE_BLACK: Self = ColourRgb::BLACK.with_alpha(1.);
}

// endregion Known Colours

// region To/From impls

impl<const N: usize> From<[Channel; N]> for Colour<N> {
    fn from(val: [Channel; N]) -> Self { Self::new(val) }
}
impl<const N: usize> From<Colour<N>> for [Channel; N] {
    fn from(Colour(val): Colour<N>) -> Self { val }
}

impl<const N: usize> Colour<N> {
    /// Quantises each channel to an 8-bit unorm value, the way an `rgba8` texture store does.
    ///
    /// Channels are clamped to `0..=1` first, then scaled and rounded to the nearest integer.
    pub fn to_unorm8(&self) -> [u8; N] { self.0.map(|c| (c.clamp(0., 1.) * 255.).round() as u8) }

    /// The raw bit patterns of each channel, for exact comparisons
    pub fn to_bits(&self) -> [u32; N] { self.0.map(Channel::to_bits) }
}

// endregion To/From impls

// region Iterating/Indexing

impl<const N: usize> Deref for Colour<N> {
    type Target = [Channel; N];

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<const N: usize> Index<usize> for Colour<N> {
    type Output = Channel;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}
impl<const N: usize> IndexMut<usize> for Colour<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

// endregion Iterating/Indexing
