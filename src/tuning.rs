//! Image tuning levels

use crate::sensors::sensor::{
    CONTRAST_LEVELS, EXPOSURE_LEVELS, GAMMA_SOFT_REGS, GAMMA_STANDARD_REGS, SATURATION_LEVELS,
    SPECIAL_EFFECTS, WHITE_BALANCE_MODES,
};

pub const BRIGHTNESS_RANGE: (i8, i8) = (-4, 4);
pub const CONTRAST_RANGE: (i8, i8) = (-3, 3);
pub const SATURATION_RANGE: (i8, i8) = (-4, 4);
pub const EXPOSURE_RANGE: (i8, i8) = (-3, 3);

/// Map a signed level onto a tuning table row.
///
/// Non-negative levels index directly; negative levels wrap to the end of the
/// table (`level + rows`). Levels outside `min..=max` yield `None`.
pub fn table_index(level: i8, (min, max): (i8, i8), rows: usize) -> Option<usize> {
    if level < min || level > max {
        return None;
    }
    if level < 0 {
        Some((level as isize + rows as isize) as usize)
    } else {
        Some(level as usize)
    }
}

pub fn contrast_row(level: i8) -> Option<&'static [u8; 2]> {
    table_index(level, CONTRAST_RANGE, CONTRAST_LEVELS.len()).map(|i| &CONTRAST_LEVELS[i])
}

pub fn saturation_row(level: i8) -> Option<&'static [u8; 11]> {
    table_index(level, SATURATION_RANGE, SATURATION_LEVELS.len()).map(|i| &SATURATION_LEVELS[i])
}

pub fn exposure_row(level: i8) -> Option<&'static [u8; 6]> {
    table_index(level, EXPOSURE_RANGE, EXPOSURE_LEVELS.len()).map(|i| &EXPOSURE_LEVELS[i])
}

/// (magnitude, sign) register values for a brightness level
pub fn brightness_values(level: i8) -> Option<(u8, u8)> {
    let (min, max) = BRIGHTNESS_RANGE;
    if level < min || level > max {
        return None;
    }
    let magnitude = level.unsigned_abs() << 4;
    let sign = if level < 0 { 0x09 } else { 0x01 };
    Some((magnitude, sign))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecialEffect {
    #[default]
    Normal,
    Negative,
    Grayscale,
    RedTint,
    GreenTint,
    BlueTint,
    Sepia,
}

impl SpecialEffect {
    pub fn values(self) -> &'static [u8; 4] {
        &SPECIAL_EFFECTS[self as usize]
    }
}

impl TryFrom<u8> for SpecialEffect {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => SpecialEffect::Normal,
            1 => SpecialEffect::Negative,
            2 => SpecialEffect::Grayscale,
            3 => SpecialEffect::RedTint,
            4 => SpecialEffect::GreenTint,
            5 => SpecialEffect::BlueTint,
            6 => SpecialEffect::Sepia,
            other => return Err(other),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WhiteBalance {
    #[default]
    Auto,
    Sunny,
    /// Fluorescent
    Office,
    Cloudy,
    /// Incandescent
    Home,
}

impl WhiteBalance {
    pub fn values(self) -> &'static [u8; 7] {
        &WHITE_BALANCE_MODES[self as usize]
    }
}

impl TryFrom<u8> for WhiteBalance {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => WhiteBalance::Auto,
            1 => WhiteBalance::Sunny,
            2 => WhiteBalance::Office,
            3 => WhiteBalance::Cloudy,
            4 => WhiteBalance::Home,
            other => return Err(other),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GammaCurve {
    /// Lifted shadows, brighter midtones
    Soft,
    /// Curve loaded by the default register list
    #[default]
    Standard,
}

impl GammaCurve {
    pub fn registers(self) -> &'static [(u16, u8)] {
        match self {
            GammaCurve::Soft => &GAMMA_SOFT_REGS,
            GammaCurve::Standard => &GAMMA_STANDARD_REGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_levels_wrap_to_table_end() {
        assert_eq!(table_index(0, CONTRAST_RANGE, 7), Some(0));
        assert_eq!(table_index(3, CONTRAST_RANGE, 7), Some(3));
        assert_eq!(table_index(-3, CONTRAST_RANGE, 7), Some(4));
        assert_eq!(table_index(-1, CONTRAST_RANGE, 7), Some(6));
        assert_eq!(table_index(-4, SATURATION_RANGE, 9), Some(5));
        assert_eq!(table_index(-1, SATURATION_RANGE, 9), Some(8));
    }

    #[test]
    fn out_of_range_levels_have_no_row() {
        assert_eq!(contrast_row(4), None);
        assert_eq!(contrast_row(-4), None);
        assert_eq!(saturation_row(5), None);
        assert_eq!(saturation_row(-5), None);
        assert_eq!(exposure_row(i8::MIN), None);
        assert_eq!(brightness_values(5), None);
        assert_eq!(brightness_values(-5), None);
    }

    #[test]
    fn rows_match_literal_tables() {
        assert_eq!(contrast_row(-3), Some(&[0x14, 0x14]));
        assert_eq!(contrast_row(2), Some(&[0x28, 0x18]));
        assert_eq!(saturation_row(-4).map(|r| r[3]), Some(0x07));
        assert_eq!(saturation_row(4).map(|r| r[3]), Some(0x11));
        assert_eq!(exposure_row(-2), Some(&[0x20, 0x18, 0x41, 0x20, 0x18, 0x10]));
        assert_eq!(exposure_row(3), Some(&[0x60, 0x58, 0xA0, 0x60, 0x58, 0x20]));
    }

    #[test]
    fn brightness_encodes_sign_and_magnitude() {
        assert_eq!(brightness_values(0), Some((0x00, 0x01)));
        assert_eq!(brightness_values(3), Some((0x30, 0x01)));
        assert_eq!(brightness_values(-4), Some((0x40, 0x09)));
    }

    #[test]
    fn enum_values_index_tables() {
        assert_eq!(SpecialEffect::Sepia.values(), &[0x1E, 0x40, 0xA0, 0x08]);
        assert_eq!(WhiteBalance::Home.values()[6], 0x40);
        assert_eq!(SpecialEffect::try_from(7), Err(7));
        assert_eq!(WhiteBalance::try_from(2), Ok(WhiteBalance::Office));
        assert_eq!(GammaCurve::Soft.registers()[1], (0x5481, 0x08));
    }
}
