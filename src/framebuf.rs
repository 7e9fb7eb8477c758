use core::ops::{Deref, DerefMut};

use crate::capture::Colorspace;
use crate::sensors::FrameSize;

/// Fixed pixel buffer for capture engines that do not allocate.
#[repr(C, align(2))]
pub struct FrameBuf<const SIZE: usize>([u8; SIZE]);

impl<const SIZE: usize> FrameBuf<SIZE> {
    /// Bytes needed for one frame of `size` in `colorspace`
    pub const fn fb_size(size: FrameSize, colorspace: Colorspace) -> usize {
        size.pixel_count() * colorspace.bytes_per_pixel()
    }

    pub const fn new() -> Self {
        Self([0u8; SIZE])
    }

    pub const fn capacity(&self) -> usize {
        SIZE
    }

    /// Whether a `width` x `height` frame fits.
    pub fn fits(&self, width: u16, height: u16, colorspace: Colorspace) -> bool {
        width as usize * height as usize * colorspace.bytes_per_pixel() <= SIZE
    }

    /// View the buffer as a slice of u16
    ///
    /// # Panics
    ///
    /// Panics if the buffer is not correctly aligned for access as u16
    pub fn as_u16_array(&self) -> &[u16] {
        // SAFETY: Framebuf is `repr(C, align(2))`, so is also a valid array of u16
        let (pre, buf, post) = unsafe { self.0.align_to::<u16>() };
        debug_assert!(pre.is_empty());
        debug_assert!(post.is_empty());
        buf
    }

    /// Iterate the first `height` lines of a `width` pixel wide 16-bit frame.
    ///
    /// A zero `width` yields no lines.
    pub fn lines(&self, width: usize, height: usize) -> impl Iterator<Item = &[u16]> {
        let height = if width == 0 { 0 } else { height };
        self.as_u16_array().chunks_exact(width.max(1)).take(height)
    }
}

impl<const SIZE: usize> Default for FrameBuf<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> Deref for FrameBuf<SIZE> {
    type Target = [u8; SIZE];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const SIZE: usize> DerefMut for FrameBuf<SIZE> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
