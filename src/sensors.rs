//! Frame sizes, aspect ratio geometry and the sensor window plan derived from them

pub mod ov5640;

pub use ov5640 as sensor;

/// Output frame sizes, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameSize {
    /// 96x96
    R96x96,
    /// 160x120
    Qqvga,
    /// 176x144
    Qcif,
    /// 240x176
    Hqvga,
    /// 240x240
    R240x240,
    /// 320x240
    Qvga,
    /// 400x296
    Cif,
    /// 480x320
    Hvga,
    /// 640x480
    Vga,
    /// 800x600
    Svga,
    /// 1024x768
    Xga,
    /// 1280x720
    Hd,
    /// 1280x1024
    Sxga,
    /// 1600x1200
    Uxga,
    /// 2560x1440
    Qhd,
    /// 2560x1600
    Wqxga,
    /// 1088x1920
    PortraitFhd,
    /// 2560x1920
    Qsxga,
}

impl FrameSize {
    pub const ALL: [FrameSize; 18] = [
        FrameSize::R96x96,
        FrameSize::Qqvga,
        FrameSize::Qcif,
        FrameSize::Hqvga,
        FrameSize::R240x240,
        FrameSize::Qvga,
        FrameSize::Cif,
        FrameSize::Hvga,
        FrameSize::Vga,
        FrameSize::Svga,
        FrameSize::Xga,
        FrameSize::Hd,
        FrameSize::Sxga,
        FrameSize::Uxga,
        FrameSize::Qhd,
        FrameSize::Wqxga,
        FrameSize::PortraitFhd,
        FrameSize::Qsxga,
    ];

    /// (width, height) in pixels
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            FrameSize::R96x96 => (96, 96),
            FrameSize::Qqvga => (160, 120),
            FrameSize::Qcif => (176, 144),
            FrameSize::Hqvga => (240, 176),
            FrameSize::R240x240 => (240, 240),
            FrameSize::Qvga => (320, 240),
            FrameSize::Cif => (400, 296),
            FrameSize::Hvga => (480, 320),
            FrameSize::Vga => (640, 480),
            FrameSize::Svga => (800, 600),
            FrameSize::Xga => (1024, 768),
            FrameSize::Hd => (1280, 720),
            FrameSize::Sxga => (1280, 1024),
            FrameSize::Uxga => (1600, 1200),
            FrameSize::Qhd => (2560, 1440),
            FrameSize::Wqxga => (2560, 1600),
            FrameSize::PortraitFhd => (1088, 1920),
            FrameSize::Qsxga => (2560, 1920),
        }
    }

    pub const fn aspect_ratio(self) -> AspectRatio {
        match self {
            FrameSize::R96x96 | FrameSize::R240x240 => AspectRatio::R1x1,
            FrameSize::Qcif | FrameSize::Sxga => AspectRatio::R5x4,
            FrameSize::Hvga => AspectRatio::R3x2,
            FrameSize::Hd | FrameSize::Qhd => AspectRatio::R16x9,
            FrameSize::Wqxga => AspectRatio::R16x10,
            FrameSize::PortraitFhd => AspectRatio::R9x16,
            FrameSize::Qqvga
            | FrameSize::Hqvga
            | FrameSize::Qvga
            | FrameSize::Cif
            | FrameSize::Vga
            | FrameSize::Svga
            | FrameSize::Xga
            | FrameSize::Uxga
            | FrameSize::Qsxga => AspectRatio::R4x3,
        }
    }

    pub const fn pixel_count(self) -> usize {
        let (w, h) = self.dimensions();
        w as usize * h as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AspectRatio {
    R4x3,
    R3x2,
    R16x10,
    R5x3,
    R16x9,
    R21x9,
    R5x4,
    R1x1,
    R9x16,
}

/// Sensor array window for one aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RatioGeometry {
    pub max_width: u16,
    pub max_height: u16,
    pub start_x: u16,
    pub start_y: u16,
    pub end_x: u16,
    pub end_y: u16,
    pub offset_x: u16,
    pub offset_y: u16,
    pub total_x: u16,
    pub total_y: u16,
}

const fn row(g: [u16; 10]) -> RatioGeometry {
    RatioGeometry {
        max_width: g[0],
        max_height: g[1],
        start_x: g[2],
        start_y: g[3],
        end_x: g[4],
        end_y: g[5],
        offset_x: g[6],
        offset_y: g[7],
        total_x: g[8],
        total_y: g[9],
    }
}

impl AspectRatio {
    pub const fn geometry(self) -> RatioGeometry {
        //               mw,   mh,  sx,  sy,   ex,   ey, ox, oy,   tx,   ty
        match self {
            AspectRatio::R4x3 => row([2560, 1920, 0, 0, 2623, 1951, 32, 16, 2844, 1968]),
            AspectRatio::R3x2 => row([2560, 1704, 0, 110, 2623, 1843, 32, 16, 2844, 1752]),
            AspectRatio::R16x10 => row([2560, 1600, 0, 160, 2623, 1791, 32, 16, 2844, 1648]),
            AspectRatio::R5x3 => row([2560, 1536, 0, 192, 2623, 1759, 32, 16, 2844, 1584]),
            AspectRatio::R16x9 => row([2560, 1440, 0, 240, 2623, 1711, 32, 16, 2844, 1488]),
            AspectRatio::R21x9 => row([2560, 1080, 0, 420, 2623, 1531, 32, 16, 2844, 1128]),
            AspectRatio::R5x4 => row([2400, 1920, 80, 0, 2543, 1951, 32, 16, 2684, 1968]),
            AspectRatio::R1x1 => row([1920, 1920, 320, 0, 2543, 1951, 32, 16, 2684, 1968]),
            AspectRatio::R9x16 => row([1088, 1920, 736, 0, 1887, 1951, 32, 16, 1884, 1968]),
        }
    }
}

/// Total horizontal timing used in binning mode for narrow outputs.
const BINNED_NARROW_TOTAL_X: u16 = 2060;
const BINNED_WIDE_THRESHOLD: u16 = 920;

/// Register values for a frame size: crop window, output size, timing and ISP offsets.
///
/// Each pair is written as X-high, X-low, Y-high, Y-low starting at the
/// matching `*_H` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowPlan {
    pub start: (u16, u16),
    pub end: (u16, u16),
    pub output: (u16, u16),
    pub total: (u16, u16),
    pub offset: (u16, u16),
    pub binning: bool,
    pub scale: bool,
}

impl WindowPlan {
    pub const fn for_size(size: FrameSize) -> Self {
        let (width, height) = size.dimensions();
        let g = size.aspect_ratio().geometry();

        let binning = width <= g.max_width / 2 && height <= g.max_height / 2;
        let scale = !((width == g.max_width && height == g.max_height)
            || (width == g.max_width / 2 && height == g.max_height / 2));

        // Binned readout skips every other line and column, so vertical
        // timing and both offsets halve.
        let (total, offset) = if binning {
            let total_x = if width > BINNED_WIDE_THRESHOLD {
                g.total_x - 200
            } else {
                BINNED_NARROW_TOTAL_X
            };
            ((total_x, g.total_y / 2), (g.offset_x / 2, g.offset_y / 2))
        } else {
            ((g.total_x, g.total_y), (g.offset_x, g.offset_y))
        };

        Self {
            start: (g.start_x, g.start_y),
            end: (g.end_x, g.end_y),
            output: (width, height),
            total,
            offset,
            binning,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_follow_catalog_order() {
        assert_eq!(FrameSize::ALL.len(), 18);
        for pair in FrameSize::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        let dims: [(u16, u16); 18] = FrameSize::ALL.map(FrameSize::dimensions);
        assert_eq!(
            dims,
            [
                (96, 96),
                (160, 120),
                (176, 144),
                (240, 176),
                (240, 240),
                (320, 240),
                (400, 296),
                (480, 320),
                (640, 480),
                (800, 600),
                (1024, 768),
                (1280, 720),
                (1280, 1024),
                (1600, 1200),
                (2560, 1440),
                (2560, 1600),
                (1088, 1920),
                (2560, 1920),
            ]
        );
        assert_eq!(FrameSize::PortraitFhd.aspect_ratio(), AspectRatio::R9x16);
    }

    #[test]
    fn crop_window_covers_every_output() {
        for size in FrameSize::ALL {
            let (w, h) = size.dimensions();
            let g = size.aspect_ratio().geometry();
            assert!(g.end_x - g.start_x >= w, "{:?}", size);
            assert!(g.end_y - g.start_y >= h, "{:?}", size);
        }
    }

    #[test]
    fn binning_and_scale_follow_ratio_limits() {
        for size in FrameSize::ALL {
            let (w, h) = size.dimensions();
            let g = size.aspect_ratio().geometry();
            let plan = WindowPlan::for_size(size);
            assert_eq!(plan.binning, w <= g.max_width / 2 && h <= g.max_height / 2, "{:?}", size);
            let native = (w, h) == (g.max_width, g.max_height);
            let half = (w, h) == (g.max_width / 2, g.max_height / 2);
            assert_eq!(plan.scale, !(native || half), "{:?}", size);
        }
    }

    #[test]
    fn qvga_is_binned_with_narrow_timing() {
        let plan = WindowPlan::for_size(FrameSize::Qvga);
        assert!(plan.binning);
        assert!(plan.scale);
        assert_eq!(plan.start, (0, 0));
        assert_eq!(plan.end, (2623, 1951));
        assert_eq!(plan.output, (320, 240));
        assert_eq!(plan.total, (2060, 984));
        assert_eq!(plan.offset, (16, 8));
    }

    #[test]
    fn wide_binned_output_trims_horizontal_timing() {
        let plan = WindowPlan::for_size(FrameSize::Hd);
        assert!(plan.binning);
        assert_eq!(plan.total, (2844 - 200, 1488 / 2));
        assert_eq!(plan.offset, (16, 8));
    }

    #[test]
    fn full_resolution_uses_table_timing_without_scaling() {
        let plan = WindowPlan::for_size(FrameSize::Qsxga);
        assert!(!plan.binning);
        assert!(!plan.scale);
        assert_eq!(plan.total, (2844, 1968));
        assert_eq!(plan.offset, (32, 16));
    }

    #[test]
    fn half_resolution_bins_without_scaling() {
        // 1280x720 is exactly half of the 16:9 window
        let plan = WindowPlan::for_size(FrameSize::Hd);
        assert!(!plan.scale);
        let plan = WindowPlan::for_size(FrameSize::Uxga);
        assert!(!plan.binning);
        assert!(plan.scale);
    }
}
