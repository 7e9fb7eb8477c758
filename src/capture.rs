//! Parallel capture engine seam
//!
//! The sensor driver never touches pixel memory. Whatever moves pixels off the
//! DVP bus (PIO + DMA, a PCC peripheral, ...) implements [`ParallelCapture`] and
//! the driver tells it when to size buffers, where to point DMA and when to
//! start streaming.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Colorspace {
    #[default]
    Rgb565,
    /// YUV422, YUYV order
    Yuv,
}

impl Colorspace {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Colorspace::Rgb565 | Colorspace::Yuv => 2,
        }
    }
}

/// Buffer (re)allocation policy for [`ParallelCapture::buffer_config`].
///
/// Ignored by capture engines that own a fixed, statically allocated buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Realloc {
    /// Keep the existing buffer; the new frame must fit in it.
    None,
    /// Reallocate whenever the required size changes.
    #[default]
    Change,
    /// Reallocate only when the new frame does not fit.
    Larger,
}

impl Realloc {
    /// Whether a buffer of `current` bytes has to be replaced to hold `required` bytes.
    ///
    /// Returns `None` when the policy forbids reallocation but the frame does not fit.
    pub fn decide(self, current: usize, required: usize) -> Option<bool> {
        match self {
            Realloc::None if required <= current => Some(false),
            Realloc::None => None,
            Realloc::Change => Some(required != current),
            Realloc::Larger => Some(required > current),
        }
    }
}

/// The capture side of a parallel camera.
pub trait ParallelCapture {
    type Error;

    /// Bring up clocks, pins, state machines and DMA. Called once per `begin()`.
    fn init_peripherals(&mut self) -> Result<(), Self::Error>;

    /// Make room for `buffers` frames of `width * height` pixels.
    fn buffer_config(
        &mut self,
        width: u16,
        height: u16,
        colorspace: Colorspace,
        buffers: u8,
        realloc: Realloc,
    ) -> Result<(), Self::Error>;

    /// Point the DMA transfer at the first frame buffer, `pixels` long.
    fn rewire_dma(&mut self, pixels: usize);

    /// Start (or restart) the background capture.
    fn resume(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realloc_policies() {
        assert_eq!(Realloc::None.decide(1000, 800), Some(false));
        assert_eq!(Realloc::None.decide(1000, 1200), None);
        assert_eq!(Realloc::Change.decide(1000, 1000), Some(false));
        assert_eq!(Realloc::Change.decide(1000, 800), Some(true));
        assert_eq!(Realloc::Larger.decide(1000, 800), Some(false));
        assert_eq!(Realloc::Larger.decide(1000, 1200), Some(true));
    }

    #[test]
    fn two_bytes_per_pixel() {
        assert_eq!(Colorspace::Rgb565.bytes_per_pixel(), 2);
        assert_eq!(Colorspace::Yuv.bytes_per_pixel(), 2);
    }
}
