//! Register map and constant tables for the OV5640

/// Pseudo-address in a register list: sleep for `value` milliseconds instead of writing.
pub const REG_DLY: u16 = 0xFFFF;
// 7-bit I2C address (0x78 >> 1)
pub const CAM_ADDR: u8 = 0x3C;
pub const CHIP_ID: u16 = 0x5640;

/* system control registers */
pub const SYSTEM_RESET00: u16 = 0x3000; // Reset for Individual Block
// (0: enable block; 1: reset block)
// Bit[7]: Reset BIST
// Bit[6]: Reset MCU program memory
// Bit[5]: Reset MCU
// Bit[4]: Reset OTP
// Bit[3]: Reset STB
// Bit[2]: Reset d5060
// Bit[1]: Reset timing control
// Bit[0]: Reset array control

pub const SYSTEM_RESET02: u16 = 0x3002; // Reset for Individual Block
// (0: enable block; 1: reset block)
// Bit[7]: Reset VFIFO
// Bit[5]: Reset format
// Bit[4]: Reset JFIFO
// Bit[3]: Reset SFIFO
// Bit[2]: Reset JPG
// Bit[1]: Reset format MUX
// Bit[0]: Reset average

pub const CLOCK_ENABLE02: u16 = 0x3006; // Clock Enable Control
// (0: disable clock; 1: enable clock)
// Bit[7]: Enable PSRAM clock
// Bit[6]: Enable FMT clock
// Bit[5]: Enable JPEG 2x clock
// Bit[3]: Enable JPEG clock
// Bit[1]: Enable format MUX clock
// Bit[0]: Enable average clock

pub const SYSTEM_CTRL0: u16 = 0x3008; // Bit[7]: Software reset
// Bit[6]: Software power down
// Bit[5]: Reserved
// Bit[4]: SRB clock SYNC enable
// Bit[3]: Isolation suspend select
// Bit[2:0]: Not used

pub const CHIP_ID_HIGH: u16 = 0x300A;
pub const CHIP_ID_LOW: u16 = 0x300B;

pub const DRIVE_CAPABILITY: u16 = 0x302C; // Bit[7:6]:
//          00: 1x
//          01: 2x
//          10: 3x
//          11: 4x

pub const SC_PLL_CTRL0: u16 = 0x3034; // Bit[6:4]: charge pump, Bit[3:0]: MIPI bit mode
pub const SC_PLL_CTRL1: u16 = 0x3035; // Bit[7:4]: system clock divider, Bit[3:0]: MIPI divider
pub const SC_PLL_CTRL2: u16 = 0x3036; // Bit[7:0]: PLL multiplier
pub const SC_PLL_CTRL3: u16 = 0x3037; // Bit[4]: PLL root divider (0: /1, 1: /2)
// Bit[3:0]: PLL pre-divider
pub const SC_PLL_BYPASS: u16 = 0x3039; // Bit[7]: PLL bypass
pub const SC_CLOCK_SELECT: u16 = 0x3103; // Bit[1]: system clock from PLL
pub const SYSTEM_ROOT_DIVIDER: u16 = 0x3108; // Bit[5:4]: PCLK root divider
//          00: PLL clock
//          01: PLL clock/2
//          10: PLL clock/4
//          11: PLL clock/8
// Bit[3:2]: sclk2x root divider
// Bit[1:0]: SCLK root divider

/* group hold registers */
pub const GROUP_ACCESS: u16 = 0x3212; // Bit[7]: group launch enable
// Bit[5]: group launch
// Bit[4]: group hold end
// Bit[3:0]: group ID
pub const GROUP3_START: u8 = 0x03;
pub const GROUP3_END: u8 = 0x13;
pub const GROUP3_LAUNCH: u8 = 0xA3;

/* AWB manual gain control */
pub const AWB_R_GAIN_H: u16 = 0x3400; // Bit[3:0]: AWB red gain[11:8]
pub const AWB_R_GAIN_L: u16 = 0x3401;
pub const AWB_G_GAIN_H: u16 = 0x3402; // Bit[3:0]: AWB green gain[11:8]
pub const AWB_G_GAIN_L: u16 = 0x3403;
pub const AWB_B_GAIN_H: u16 = 0x3404; // Bit[3:0]: AWB blue gain[11:8]
pub const AWB_B_GAIN_L: u16 = 0x3405;
pub const AWB_MANUAL_CONTROL: u16 = 0x3406; // Bit[0]: AWB gain manual enable

/* AEC/AGC control functions */
pub const AEC_PK_EXPOSURE_HI: u16 = 0x3500; // Bit[3:0]: exposure[19:16]
pub const AEC_PK_EXPOSURE_MED: u16 = 0x3501; // Bit[7:0]: exposure[15:8]
pub const AEC_PK_EXPOSURE_LO: u16 = 0x3502; // Bit[7:0]: exposure[7:0]
pub const AEC_PK_MANUAL: u16 = 0x3503; // AEC Manual Mode Control
// Bit[7:6]: Reserved
// Bit[5]: Gain delay option
//         Valid when 0x3503[4]=1’b0
//         0: Delay one frame latch
//         1: One frame latch
// Bit[4:2]: Reserved
// Bit[1]: AGC manual
//         0: Auto enable
//         1: Manual enable
// Bit[0]: AEC manual
//         0: Auto enable
//         1: Manual enable
pub const AEC_PK_MANUAL_AGC_MANUALEN: u8 = 0x02;
pub const AEC_PK_MANUAL_AEC_MANUALEN: u8 = 0x01;

//gain = {0x350A[1:0], 0x350B[7:0]} / 16
pub const AEC_PK_REAL_GAIN_HI: u16 = 0x350A;
pub const AEC_PK_REAL_GAIN_LO: u16 = 0x350B;

//exposure = {0x3500[3:0], 0x3501[7:0], 0x3502[7:0]} / 16 × tROW

pub const AEC_POWER_DOMAIN: u16 = 0x3A00; // AEC/AGC power domain control
// Bit[7]: Debug mode
// Bit[6]: Less one line enable
// Bit[5]: Band function enable
// Bit[4]: Less 1 band enable
// Bit[3]: Start selection
// Bit[2]: Night mode
// Bit[1]: New balance function
// Bit[0]: Freeze
pub const AEC_POWER_DOMAIN_NIGHT_MASK: u8 = 0x04;

pub const X_ADDR_ST_H: u16 = 0x3800; //Bit[3:0]: X address start[11:8]
pub const X_ADDR_ST_L: u16 = 0x3801; //Bit[7:0]: X address start[7:0]
pub const Y_ADDR_ST_H: u16 = 0x3802; //Bit[2:0]: Y address start[10:8]
pub const Y_ADDR_ST_L: u16 = 0x3803; //Bit[7:0]: Y address start[7:0]
pub const X_ADDR_END_H: u16 = 0x3804; //Bit[3:0]: X address end[11:8]
pub const X_ADDR_END_L: u16 = 0x3805; //Bit[7:0]:
pub const Y_ADDR_END_H: u16 = 0x3806; //Bit[2:0]: Y address end[10:8]
pub const Y_ADDR_END_L: u16 = 0x3807; //Bit[7:0]:
// Size after scaling
pub const X_OUTPUT_SIZE_H: u16 = 0x3808; //Bit[3:0]: DVP output horizontal width[11:8]
pub const X_OUTPUT_SIZE_L: u16 = 0x3809; //Bit[7:0]:
pub const Y_OUTPUT_SIZE_H: u16 = 0x380A; //Bit[2:0]: DVP output vertical height[10:8]
pub const Y_OUTPUT_SIZE_L: u16 = 0x380B; //Bit[7:0]:
pub const X_TOTAL_SIZE_H: u16 = 0x380C; //Bit[3:0]: Total horizontal size[11:8]
pub const X_TOTAL_SIZE_L: u16 = 0x380D; //Bit[7:0]:
pub const Y_TOTAL_SIZE_H: u16 = 0x380E; //Bit[7:0]: Total vertical size[15:8]
pub const Y_TOTAL_SIZE_L: u16 = 0x380F; //Bit[7:0]:
pub const X_OFFSET_H: u16 = 0x3810; //Bit[3:0]: ISP horizontal offset[11:8]
pub const X_OFFSET_L: u16 = 0x3811; //Bit[7:0]:
pub const Y_OFFSET_H: u16 = 0x3812; //Bit[2:0]: ISP vertical offset[10:8]
pub const Y_OFFSET_L: u16 = 0x3813; //Bit[7:0]:
pub const X_INCREMENT: u16 = 0x3814; //Bit[7:4]: Horizontal odd subsample increment
//Bit[3:0]: Horizontal even subsample increment
pub const Y_INCREMENT: u16 = 0x3815; //Bit[7:4]: Vertical odd subsample increment
//Bit[3:0]: Vertical even subsample increment

/* mirror and flip registers */
pub const TIMING_TC_REG20: u16 = 0x3820; // Timing Control Register
// Bit[6]: undocumented, set when not binning
// Bit[2:1]: Vertical flip enable
//         00: Normal
//         11: Vertical flip
// Bit[0]: Vertical binning enable
pub const TIMING_TC_REG21: u16 = 0x3821; // Timing Control Register
// Bit[5]: Compression Enable
// Bit[2:1]: Horizontal mirror enable
//         00: Normal
//         11: Horizontal mirror
// Bit[0]: Horizontal binning enable
pub const TIMING_TC_REG20_VFLIP: u8 = 0x06;
pub const TIMING_TC_REG21_HMIRROR: u8 = 0x06;

pub const PCLK_RATIO: u16 = 0x3824; // Bit[4:0]: PCLK ratio manual

/* frame control registers */
pub const FRAME_CTRL01: u16 = 0x4201; // Control Passed Frame Number When both ON and OFF number set to 0x00,frame control is in bypass mode
// Bit[7:4]: Not used
// Bit[3:0]: Frame ON number
pub const FRAME_CTRL02: u16 = 0x4202; // Control Masked Frame Number When both ON and OFF number set to 0x00,frame control is in bypass mode
// Bit[7:4]: Not used
// BIT[3:0]: Frame OFF number

/* format control registers */
pub const FORMAT_CTRL00: u16 = 0x4300;

pub const VFIFO_CTRL0C: u16 = 0x460C; // Bit[1]: PCLK manual enable
//          0: Auto
//          1: Manual by PCLK_RATIO

// Undocumented, tracks the flip/binning combination
pub const TIMING_4514: u16 = 0x4514;
// Undocumented, 0x0B when binning else 0x10
pub const TIMING_4520: u16 = 0x4520;

pub const CLOCK_POL_CONTROL: u16 = 0x4740; // Bit[5]: PCLK polarity 0: active low
//          1: active high
// Bit[3]: Gate PCLK under VSYNC
// Bit[2]: Gate PCLK under HREF
// Bit[1]: HREF polarity
//          0: active low
//          1: active high
// Bit[0] VSYNC polarity
//          0: active low
//          1: active high

pub const ISP_CONTROL_00: u16 = 0x5000;
pub const ISP_CONTROL_01: u16 = 0x5001; // Bit[5]: Scale enable
//          0: Disable
//          1: Enable
pub const ISP_CONTROL_01_SCALE_EN: u8 = 0x20;
pub const ISP_CONTROL_03: u16 = 0x5003; // Bit[3]: buffer enable, also part of special effects

/* output format control registers */
pub const FORMAT_CTRL: u16 = 0x501F; // Format select
// Bit[2:0]:
//  000: YUV422
//  001: RGB
//  010: Dither
//  011: RAW after DPC
//  101: RAW after CIP

/* ISP top control registers */
pub const PRE_ISP_TEST_SETTING_1: u16 = 0x503D; // Bit[7]: Test enable
//         0: Test disable
//         1: Color bar enable
// Bit[6]: Rolling
// Bit[5]: Transparent
// Bit[4]: Square black and white
// Bit[3:2]: Color bar style
//         00: Standard 8 color bar
//         01: Gradual change at vertical mode 1
//         10: Gradual change at horizontal
//         11: Gradual change at vertical mode 2
// Bit[1:0]: Test select
//         00: Color bar
//         01: Random data
//         10: Square data
//         11: Black image
pub const TEST_PATTERN_ENABLE: u8 = 0x80;

/* color matrix, shared by saturation and exposure tables */
pub const CMX1: u16 = 0x5381;

/* special digital effects */
pub const SDE_CTRL0: u16 = 0x5580; // Bit[6]: negative, Bit[4:3]: fixed U/V, Bit[2]: saturation, Bit[1]: contrast
pub const SDE_CTRL3: u16 = 0x5583; // U fixed value / saturation U
pub const SDE_CTRL4: u16 = 0x5584; // V fixed value / saturation V
pub const SDE_CTRL5: u16 = 0x5585; // contrast offset
pub const SDE_CTRL6: u16 = 0x5586; // contrast gain
pub const SDE_CTRL7: u16 = 0x5587; // brightness magnitude
pub const SDE_CTRL8: u16 = 0x5588; // Bit[3]: brightness sign (1: negative)

pub const SENSOR_DEFAULT_REGS: [(u16, u8); 136] = [
    (SYSTEM_CTRL0, 0x82), // software reset
    (REG_DLY, 10),        // delay 10ms
    (SYSTEM_CTRL0, 0x42), // power down
    // enable pll
    (SC_CLOCK_SELECT, 0x13),
    // io direction
    (0x3017, 0xFF),
    (0x3018, 0xFF),
    (DRIVE_CAPABILITY, 0xC3),
    (CLOCK_POL_CONTROL, 0x21),
    (0x4713, 0x02),         // jpg mode select
    (ISP_CONTROL_01, 0x83), // turn color matrix, awb and SDE
    // sys reset
    (SYSTEM_RESET00, 0x00), // enable all blocks
    (SYSTEM_RESET02, 0x1C), // reset jfifo, sfifo, jpg, fmux, avg
    // clock enable
    (0x3004, 0xFF),
    (CLOCK_ENABLE02, 0xC3),
    // isp control
    (ISP_CONTROL_00, 0xA7),
    (ISP_CONTROL_01, 0xA3), // +scaling?
    (ISP_CONTROL_03, 0x08), // special_effect
    // unknown, required
    (0x370C, 0x02),
    (0x3634, 0x40),
    // AEC/AGC
    (0x3A02, 0x03),
    (0x3A03, 0xD8),
    (0x3A08, 0x01),
    (0x3A09, 0x27),
    (0x3A0A, 0x00),
    (0x3A0B, 0xF6),
    (0x3A0D, 0x04),
    (0x3A0E, 0x03),
    (0x3A0F, 0x30), // ae_level
    (0x3A10, 0x28), // ae_level
    (0x3A11, 0x60), // ae_level
    (0x3A13, 0x43),
    (0x3A14, 0x03),
    (0x3A15, 0xD8),
    (0x3A18, 0x00), // gainceiling
    (0x3A19, 0xF8), // gainceiling
    (0x3A1B, 0x30), // ae_level
    (0x3A1E, 0x26), // ae_level
    (0x3A1F, 0x14), // ae_level
    // vcm debug
    (0x3600, 0x08),
    (0x3601, 0x33),
    // 50/60Hz
    (0x3C01, 0xA4),
    (0x3C04, 0x28),
    (0x3C05, 0x98),
    (0x3C06, 0x00),
    (0x3C07, 0x08),
    (0x3C08, 0x00),
    (0x3C09, 0x1C),
    (0x3C0A, 0x9C),
    (0x3C0B, 0x40),
    (VFIFO_CTRL0C, 0x22), // disable jpeg footer
    // BLC
    (0x4001, 0x02),
    (0x4004, 0x02),
    // AWB
    (0x5180, 0xFF),
    (0x5181, 0xF2),
    (0x5182, 0x00),
    (0x5183, 0x14),
    (0x5184, 0x25),
    (0x5185, 0x24),
    (0x5186, 0x09),
    (0x5187, 0x09),
    (0x5188, 0x09),
    (0x5189, 0x75),
    (0x518A, 0x54),
    (0x518B, 0xE0),
    (0x518C, 0xB2),
    (0x518D, 0x42),
    (0x518E, 0x3D),
    (0x518F, 0x56),
    (0x5190, 0x46),
    (0x5191, 0xF8),
    (0x5192, 0x04),
    (0x5193, 0x70),
    (0x5194, 0xF0),
    (0x5195, 0xF0),
    (0x5196, 0x03),
    (0x5197, 0x01),
    (0x5198, 0x04),
    (0x5199, 0x12),
    (0x519A, 0x04),
    (0x519B, 0x00),
    (0x519C, 0x06),
    (0x519D, 0x82),
    (0x519E, 0x38),
    // color matrix (Saturation)
    (0x5381, 0x1E),
    (0x5382, 0x5B),
    (0x5383, 0x08),
    (0x5384, 0x0A),
    (0x5385, 0x7E),
    (0x5386, 0x88),
    (0x5387, 0x7C),
    (0x5388, 0x6C),
    (0x5389, 0x10),
    (0x538A, 0x01),
    (0x538B, 0x98),
    //CIP control (Sharpness)
    (0x5300, 0x10), //sharpness
    (0x5301, 0x10), //sharpness
    (0x5302, 0x18), //sharpness
    (0x5303, 0x19), //sharpness
    (0x5304, 0x10),
    (0x5305, 0x10),
    (0x5306, 0x08), //denoise
    (0x5307, 0x16),
    (0x5308, 0x40),
    (0x5309, 0x10), //sharpness
    (0x530A, 0x10), //sharpness
    (0x530B, 0x04), //sharpness
    (0x530C, 0x06), //sharpness
    // GAMMA
    (0x5480, 0x01),
    (0x5481, 0x00),
    (0x5482, 0x1E),
    (0x5483, 0x3B),
    (0x5484, 0x58),
    (0x5485, 0x66),
    (0x5486, 0x71),
    (0x5487, 0x7D),
    (0x5488, 0x83),
    (0x5489, 0x8F),
    (0x548A, 0x98),
    (0x548B, 0xA6),
    (0x548C, 0xB8),
    (0x548D, 0xCA),
    (0x548E, 0xD7),
    (0x548F, 0xE3),
    (0x5490, 0x1D),
    // Special Digital Effects (SDE) (UV adjust)
    (SDE_CTRL0, 0x06), // enable brightness and contrast
    (SDE_CTRL3, 0x40), // special_effect
    (SDE_CTRL4, 0x10), // special_effect
    (SDE_CTRL6, 0x20), // contrast
    (SDE_CTRL7, 0x00), // brightness
    (SDE_CTRL8, 0x00), // brightness
    (0x5589, 0x10),
    (0x558A, 0x00),
    (0x558B, 0xF8),
    (0x501D, 0x40), // enable manual offset of contrast
    // power on
    (SYSTEM_CTRL0, 0x02),
    // 50Hz
    (0x3C00, 0x04),
];

pub const RESET_AWB_REGS: [(u16, u8); 72] = [
    (ISP_CONTROL_01, 0x83), // turn color matrix, awb and SDE
    // sys reset
    (SYSTEM_RESET00, 0x00), // enable all blocks
    (SYSTEM_RESET02, 0x1C), // reset jfifo, sfifo, jpg, fmux, avg
    // isp control
    (ISP_CONTROL_00, 0xA7),
    (ISP_CONTROL_01, 0xA3),
    (ISP_CONTROL_03, 0x08), // special_effect
    // unknown, required
    (0x370C, 0x02),
    (0x3634, 0x40),
    // AEC/AGC
    (0x3A02, 0x03),
    (0x3A03, 0xD8),
    (0x3A08, 0x01),
    (0x3A09, 0x27),
    (0x3A0A, 0x00),
    (0x3A0B, 0xF6),
    (0x3A0D, 0x04),
    (0x3A0E, 0x03),
    (0x3A0F, 0x30), // ae_level
    (0x3A10, 0x28), // ae_level
    (0x3A11, 0x60), // ae_level
    (0x3A13, 0x43),
    (0x3A14, 0x03),
    (0x3A15, 0xD8),
    (0x3A18, 0x00), // gainceiling
    (0x3A19, 0xF8), // gainceiling
    (0x3A1B, 0x30), // ae_level
    (0x3A1E, 0x26), // ae_level
    (0x3A1F, 0x14), // ae_level
    // vcm debug
    (0x3600, 0x08),
    (0x3601, 0x33),
    // 50/60Hz
    (0x3C01, 0xA4),
    (0x3C04, 0x28),
    (0x3C05, 0x98),
    (0x3C06, 0x00),
    (0x3C07, 0x08),
    (0x3C08, 0x00),
    (0x3C09, 0x1C),
    (0x3C0A, 0x9C),
    (0x3C0B, 0x40),
    (VFIFO_CTRL0C, 0x22), // disable jpeg footer
    // BLC
    (0x4001, 0x02),
    (0x4004, 0x02),
    // AWB
    (0x5180, 0xFF),
    (0x5181, 0xF2),
    (0x5182, 0x00),
    (0x5183, 0x14),
    (0x5184, 0x25),
    (0x5185, 0x24),
    (0x5186, 0x09),
    (0x5187, 0x09),
    (0x5188, 0x09),
    (0x5189, 0x75),
    (0x518A, 0x54),
    (0x518B, 0xE0),
    (0x518C, 0xB2),
    (0x518D, 0x42),
    (0x518E, 0x3D),
    (0x518F, 0x56),
    (0x5190, 0x46),
    (0x5191, 0xF8),
    (0x5192, 0x04),
    (0x5193, 0x70),
    (0x5194, 0xF0),
    (0x5195, 0xF0),
    (0x5196, 0x03),
    (0x5197, 0x01),
    (0x5198, 0x04),
    (0x5199, 0x12),
    (0x519A, 0x04),
    (0x519B, 0x00),
    (0x519C, 0x06),
    (0x519D, 0x82),
    (0x519E, 0x38),
];

pub const FORMAT_YUV422_REGS: [(u16, u8); 2] = [
    (FORMAT_CTRL, 0x00),   // YUV422
    (FORMAT_CTRL00, 0x30), // YUYV
];

pub const FORMAT_RGB565_REGS: [(u16, u8); 4] = [
    (FORMAT_CTRL, 0x01),    // RGB
    (FORMAT_CTRL00, 0x61),  // RGB565 (BGR)
    (SYSTEM_RESET02, 0x1C), // reset jfifo, sfifo, jpg, fmux, avg
    (CLOCK_ENABLE02, 0xC3), // no jpg clock
];

pub const GAMMA_SOFT_REGS: [(u16, u8); 17] = [
    (0x5480, 0x01),
    (0x5481, 0x08),
    (0x5482, 0x14),
    (0x5483, 0x28),
    (0x5484, 0x51),
    (0x5485, 0x65),
    (0x5486, 0x71),
    (0x5487, 0x7D),
    (0x5488, 0x87),
    (0x5489, 0x91),
    (0x548A, 0x9A),
    (0x548B, 0xAA),
    (0x548C, 0xB8),
    (0x548D, 0xCD),
    (0x548E, 0xDD),
    (0x548F, 0xEA),
    (0x5490, 0x1D),
];

pub const GAMMA_STANDARD_REGS: [(u16, u8); 17] = [
    (0x5480, 0x01),
    (0x5481, 0x00),
    (0x5482, 0x1E),
    (0x5483, 0x3B),
    (0x5484, 0x58),
    (0x5485, 0x66),
    (0x5486, 0x71),
    (0x5487, 0x7D),
    (0x5488, 0x83),
    (0x5489, 0x8F),
    (0x548A, 0x98),
    (0x548B, 0xA6),
    (0x548C, 0xB8),
    (0x548D, 0xCA),
    (0x548E, 0xD7),
    (0x548F, 0xE3),
    (0x5490, 0x1D),
];

pub const AWB_CURVE_REGS: [(u16, u8); 31] = [
    (0x5180, 0xFF),
    (0x5181, 0xF2),
    (0x5182, 0x00),
    (0x5183, 0x14),
    (0x5184, 0x25),
    (0x5185, 0x24),
    (0x5186, 0x09),
    (0x5187, 0x09),
    (0x5188, 0x09),
    (0x5189, 0x75),
    (0x518A, 0x54),
    (0x518B, 0xE0),
    (0x518C, 0xB2),
    (0x518D, 0x42),
    (0x518E, 0x3D),
    (0x518F, 0x56),
    (0x5190, 0x46),
    (0x5191, 0xF8),
    (0x5192, 0x04),
    (0x5193, 0x70),
    (0x5194, 0xF0),
    (0x5195, 0xF0),
    (0x5196, 0x03),
    (0x5197, 0x01),
    (0x5198, 0x04),
    (0x5199, 0x12),
    (0x519A, 0x04),
    (0x519B, 0x00),
    (0x519C, 0x06),
    (0x519D, 0x82),
    (0x519E, 0x38),
];

// Tuning tables. Rows for negative levels sit at the end of each table, so a
// level `l < 0` lives at row `l + rows`.

/// (SDE_CTRL6, SDE_CTRL5) per contrast level
pub const CONTRAST_LEVELS: [[u8; 2]; 7] = [
    [0x20, 0x00], //  0
    [0x24, 0x10], // +1
    [0x28, 0x18], // +2
    [0x2C, 0x1C], // +3
    [0x14, 0x14], // -3
    [0x18, 0x18], // -2
    [0x1C, 0x1C], // -1
];

/// Color matrix CMX1..CMX11 per saturation level
pub const SATURATION_LEVELS: [[u8; 11]; 9] = [
    [0x1D, 0x60, 0x03, 0x0C, 0x78, 0x84, 0x7D, 0x6B, 0x12, 0x01, 0x98], //  0
    [0x1D, 0x60, 0x03, 0x0D, 0x84, 0x91, 0x8A, 0x76, 0x14, 0x01, 0x98], // +1
    [0x1D, 0x60, 0x03, 0x0E, 0x90, 0x9E, 0x96, 0x80, 0x16, 0x01, 0x98], // +2
    [0x1D, 0x60, 0x03, 0x10, 0x9C, 0xAC, 0xA2, 0x8B, 0x17, 0x01, 0x98], // +3
    [0x1D, 0x60, 0x03, 0x11, 0xA8, 0xB9, 0xAF, 0x96, 0x19, 0x01, 0x98], // +4
    [0x1D, 0x60, 0x03, 0x07, 0x48, 0x4F, 0x4B, 0x40, 0x0B, 0x01, 0x98], // -4
    [0x1D, 0x60, 0x03, 0x08, 0x54, 0x5C, 0x58, 0x4B, 0x0D, 0x01, 0x98], // -3
    [0x1D, 0x60, 0x03, 0x0A, 0x60, 0x6A, 0x64, 0x56, 0x0E, 0x01, 0x98], // -2
    [0x1D, 0x60, 0x03, 0x0B, 0x6C, 0x77, 0x70, 0x60, 0x10, 0x01, 0x98], // -1
];

/// AE target values per exposure (EV) level
pub const EXPOSURE_LEVELS: [[u8; 6]; 7] = [
    [0x38, 0x30, 0x61, 0x38, 0x30, 0x10], //  0
    [0x40, 0x38, 0x71, 0x40, 0x38, 0x10], // +1
    [0x50, 0x48, 0x90, 0x50, 0x48, 0x20], // +2
    [0x60, 0x58, 0xA0, 0x60, 0x58, 0x20], // +3
    [0x10, 0x08, 0x10, 0x08, 0x20, 0x10], // -3
    [0x20, 0x18, 0x41, 0x20, 0x18, 0x10], // -2
    [0x30, 0x28, 0x61, 0x30, 0x28, 0x10], // -1
];

pub const WHITE_BALANCE_REGS: [u16; 7] = [
    AWB_MANUAL_CONTROL,
    AWB_R_GAIN_H,
    AWB_R_GAIN_L,
    AWB_G_GAIN_H,
    AWB_G_GAIN_L,
    AWB_B_GAIN_H,
    AWB_B_GAIN_L,
];

pub const WHITE_BALANCE_MODES: [[u8; 7]; 5] = [
    [0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00], // auto
    [0x01, 0x06, 0x1C, 0x04, 0x00, 0x04, 0xF3], // sunny
    [0x01, 0x05, 0x48, 0x04, 0x00, 0x07, 0xCF], // office / fluorescent
    [0x01, 0x06, 0x48, 0x04, 0x00, 0x04, 0xD3], // cloudy
    [0x01, 0x04, 0x10, 0x04, 0x00, 0x08, 0x40], // home / incandescent
];

pub const SPECIAL_EFFECT_REGS: [u16; 4] = [SDE_CTRL0, SDE_CTRL3, SDE_CTRL4, ISP_CONTROL_03];

pub const SPECIAL_EFFECTS: [[u8; 4]; 7] = [
    [0x06, 0x40, 0x10, 0x08], // Normal
    [0x46, 0x40, 0x28, 0x08], // Negative
    [0x1E, 0x80, 0x80, 0x08], // Grayscale
    [0x1E, 0x80, 0xC0, 0x08], // Red Tint
    [0x1E, 0x60, 0x60, 0x08], // Green Tint
    [0x1E, 0xA0, 0x40, 0x08], // Blue Tint
    [0x1E, 0x40, 0xA0, 0x08], // Sepia
];

/// 0x4514 value indexed by `flip_y | flip_x << 1 | binning << 2`
pub const TIMING_4514_TABLE: [u8; 8] = [0x88, 0x00, 0xBB, 0x00, 0xAA, 0xBB, 0xBB, 0xAA];

/// Timing registers for a binning/mirror/flip combination, in write order.
pub fn image_option_regs(binning: bool, flip_x: bool, flip_y: bool) -> [(u16, u8); 6] {
    let mut reg20 = 0;
    let mut reg21 = 0;
    let mut combo = 0;

    if binning {
        reg20 |= 0x01;
        reg21 |= 0x01;
        combo |= 4;
    } else {
        reg20 |= 0x40;
    }
    if flip_y {
        reg20 |= TIMING_TC_REG20_VFLIP;
        combo |= 1;
    }
    if flip_x {
        reg21 |= TIMING_TC_REG21_HMIRROR;
        combo |= 2;
    }

    let (r4520, increment) = if binning { (0x0B, 0x31) } else { (0x10, 0x11) };
    [
        (TIMING_TC_REG20, reg20),
        (TIMING_TC_REG21, reg21),
        (TIMING_4514, TIMING_4514_TABLE[combo]),
        (TIMING_4520, r4520),
        (X_INCREMENT, increment),
        (Y_INCREMENT, increment),
    ]
}

/// PLL and pixel clock plan.
///
/// Only the DVP (non-JPEG) plan is used; see [`PllConfig::DVP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PllConfig {
    pub bypass: bool,
    pub multiplier: u8,
    pub sys_div: u8,
    pub pre_div: u8,
    pub root_2x: bool,
    pub pclk_root_div: u8,
    pub pclk_manual: bool,
    pub pclk_div: u8,
}

impl PllConfig {
    pub const DVP: Self = Self {
        bypass: false,
        multiplier: 40,
        sys_div: 1,
        pre_div: 1,
        root_2x: false,
        pclk_root_div: 1,
        pclk_manual: true,
        pclk_div: 4,
    };

    pub fn is_valid(&self) -> bool {
        (4..=252).contains(&self.multiplier)
            && self.sys_div <= 15
            && self.pre_div <= 8
            && self.pclk_div <= 31
            && self.pclk_root_div <= 3
    }

    /// Register writes for this plan, or `None` when a field is out of range.
    pub fn registers(&self) -> Option<[(u16, u8); 9]> {
        if !self.is_valid() {
            return None;
        }
        Some([
            (SC_PLL_BYPASS, if self.bypass { 0x80 } else { 0x00 }),
            (SC_PLL_CTRL0, 0x1A),
            (SC_PLL_CTRL1, 0x01 | ((self.sys_div & 0x0F) << 4)),
            (SC_PLL_CTRL2, self.multiplier),
            (SC_PLL_CTRL3, (self.pre_div & 0x0F) | if self.root_2x { 0x10 } else { 0x00 }),
            (SYSTEM_ROOT_DIVIDER, ((self.pclk_root_div & 0x03) << 4) | 0x06),
            (PCLK_RATIO, self.pclk_div & 0x1F),
            (VFIFO_CTRL0C, if self.pclk_manual { 0x22 } else { 0x20 }),
            (SC_CLOCK_SELECT, 0x13),
        ])
    }
}
