//! OV5640 driver for parallel (DVP) capture.
//!
//! [`Camera`] owns the sensor's I2C endpoint and a [`ParallelCapture`] engine.
//! It walks the sensor through power-on, identity check and the baseline
//! register load (`begin`), programs window, timing, PLL and output format for
//! a frame size (`config`), and applies image tuning on top.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod capture;
pub mod error;
pub mod framebuf;
pub mod sensors;
pub mod tuning;

use core::convert::Infallible;

use embedded_hal::{
	delay::DelayNs,
	digital::{self, OutputPin},
	i2c::{ErrorType, I2c},
};
use fugit::ExtU32 as _;

pub use capture::{Colorspace, ParallelCapture, Realloc};
pub use error::Error;
pub use framebuf::FrameBuf;
pub use sensors::{AspectRatio, FrameSize, RatioGeometry, WindowPlan};
pub use tuning::{GammaCurve, SpecialEffect, WhiteBalance};

use sensors::sensor::*;

pub type CameraResult<T, CAP, I2C> =
	Result<T, Error<<I2C as ErrorType>::Error, <CAP as ParallelCapture>::Error>>;

/// Bus settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	/// 7-bit I2C address
	pub address: u8,
	/// Pause after every register written from a list; some modules lock up without it
	pub write_delay: fugit::MicrosDurationU32,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			address: CAM_ADDR,
			write_delay: fugit::MicrosDurationU32::from_ticks(1000),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
	Uninitialized,
	PoweredOn,
	Configured { size: FrameSize, colorspace: Colorspace },
	Streaming { size: FrameSize, colorspace: Colorspace },
}

/// What the driver last told the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorState {
	pub colorspace: Colorspace,
	pub binning: bool,
	pub scale: bool,
	pub flip_x: bool,
	pub flip_y: bool,
	pub test_pattern: bool,
	pub brightness: i8,
	pub contrast: i8,
	pub saturation: i8,
	pub exposure: i8,
	pub effect: SpecialEffect,
	pub white_balance: WhiteBalance,
}

impl Default for SensorState {
	fn default() -> Self {
		Self {
			colorspace: Colorspace::Rgb565,
			binning: false,
			scale: false,
			flip_x: false,
			// Most modules mount the sensor upside down
			flip_y: true,
			test_pattern: false,
			brightness: 0,
			contrast: 0,
			saturation: 0,
			exposure: 0,
			effect: SpecialEffect::Normal,
			white_balance: WhiteBalance::Auto,
		}
	}
}

/// Placeholder for boards without a power-down line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPin;

impl digital::ErrorType for NoPin {
	type Error = Infallible;
}

impl OutputPin for NoPin {
	fn set_low(&mut self) -> Result<(), Self::Error> {
		Ok(())
	}

	fn set_high(&mut self) -> Result<(), Self::Error> {
		Ok(())
	}
}

pub struct Camera<CAP, I2C, D, EN = NoPin> {
	capture: CAP,
	i2c: I2C,
	delay: D,
	/// PWDN, active high
	cam_pwdn: EN,
	config: Config,
	state: SensorState,
	lifecycle: Lifecycle,
}

impl<CAP, I2C, D, EN> Camera<CAP, I2C, D, EN>
where
	CAP: ParallelCapture,
	I2C: I2c,
	D: DelayNs,
	EN: OutputPin,
{
	pub fn new(capture: CAP, i2c: I2C, delay: D, cam_pwdn: EN, config: Config) -> Self {
		Self {
			capture,
			i2c,
			delay,
			cam_pwdn,
			config,
			state: SensorState::default(),
			lifecycle: Lifecycle::Uninitialized,
		}
	}

	pub fn state(&self) -> &SensorState {
		&self.state
	}

	pub fn lifecycle(&self) -> Lifecycle {
		self.lifecycle
	}

	/// The capture engine, for reading frames
	pub fn capture(&mut self) -> &mut CAP {
		&mut self.capture
	}

	pub fn release(self) -> (CAP, I2C, D, EN) {
		(self.capture, self.i2c, self.delay, self.cam_pwdn)
	}

	fn sleep(&mut self, duration: fugit::MillisDurationU32) {
		self.delay.delay_ms(duration.to_millis());
	}

	fn sleep_us(&mut self, duration: fugit::MicrosDurationU32) {
		self.delay.delay_us(duration.to_micros());
	}

	fn ensure_powered(&self) -> CameraResult<(), CAP, I2C> {
		match self.lifecycle {
			Lifecycle::Uninitialized => Err(Error::NotInitialized),
			_ => Ok(()),
		}
	}

	/// Power the sensor up, check its identity and load the baseline registers.
	///
	/// Capture is not started; follow with [`Camera::config`].
	pub fn begin(&mut self) -> CameraResult<(), CAP, I2C> {
		self.lifecycle = Lifecycle::Uninitialized;

		self.capture.init_peripherals().map_err(Error::PeripheralInit)?;

		// PWDN low enables the sensor
		self.cam_pwdn.set_low().ok();

		let id = self.sensor_id()?;
		log_debug!("Sensor ID: {:#X}", id);
		if id != CHIP_ID {
			log_error!("Unexpected sensor ID {:#X}", id);
			return Err(Error::CameraIdentity { found: id });
		}

		self.write_register_list(&SENSOR_DEFAULT_REGS)?;

		self.state = SensorState::default();
		self.lifecycle = Lifecycle::PoweredOn;
		log_info!("Camera Init Success");
		Ok(())
	}

	/// [`Camera::begin`], [`Camera::config`] and start streaming, stopping at the first failure.
	pub fn begin_with(
		&mut self,
		size: FrameSize,
		colorspace: Colorspace,
		fps: f32,
		buffers: u8,
	) -> CameraResult<(), CAP, I2C> {
		self.begin()?;
		self.config(size, colorspace, fps, buffers, Realloc::Change)?;
		self.capture.resume();
		Ok(())
	}

	/// Size the capture buffer for `size`, program the sensor for it and restart capture.
	///
	/// With `fps > 0` this blocks for roughly ten frame periods so auto exposure
	/// can settle before DMA is pointed at the new buffer.
	pub fn config(
		&mut self,
		size: FrameSize,
		colorspace: Colorspace,
		fps: f32,
		buffers: u8,
		realloc: Realloc,
	) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;

		let (width, height) = size.dimensions();
		self.capture
			.buffer_config(width, height, colorspace, buffers, realloc)
			.map_err(Error::Allocation)?;

		self.set_size_and_colorspace(size, colorspace)?;
		self.test_pattern(false)?;
		self.lifecycle = Lifecycle::Configured { size, colorspace };
		log_info!("Configured {}x{}", width, height);

		if fps > 0.0 {
			let settle_us = (10_000_000.0 / fps) as u32;
			self.sleep_us(settle_us.micros());
		}

		self.capture.rewire_dma(size.pixel_count());
		self.capture.resume();
		self.lifecycle = Lifecycle::Streaming { size, colorspace };
		Ok(())
	}

	/// Program crop window, output size, timing, scaler, PLL and output format.
	///
	/// Only `config` drives this, after the capture buffer has been sized.
	fn set_size_and_colorspace(
		&mut self,
		size: FrameSize,
		colorspace: Colorspace,
	) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;

		let plan = WindowPlan::for_size(size);
		self.state.binning = plan.binning;
		self.state.scale = plan.scale;

		self.write_addr_reg(X_ADDR_ST_H, plan.start)?;
		self.write_addr_reg(X_ADDR_END_H, plan.end)?;
		self.write_addr_reg(X_OUTPUT_SIZE_H, plan.output)?;
		self.write_addr_reg(X_TOTAL_SIZE_H, plan.total)?;
		self.write_addr_reg(X_OFFSET_H, plan.offset)?;

		self.write_reg_bits(ISP_CONTROL_01, ISP_CONTROL_01_SCALE_EN, plan.scale)?;

		self.set_image_options()?;
		self.set_pll(PllConfig::DVP)?;
		self.apply_colorspace(colorspace)
	}

	/// Select the output format without touching geometry.
	pub fn set_colorspace(&mut self, colorspace: Colorspace) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.apply_colorspace(colorspace)
	}

	fn apply_colorspace(&mut self, colorspace: Colorspace) -> CameraResult<(), CAP, I2C> {
		self.state.colorspace = colorspace;
		match &mut self.lifecycle {
			Lifecycle::Configured { colorspace: current, .. }
			| Lifecycle::Streaming { colorspace: current, .. } => *current = colorspace,
			Lifecycle::Uninitialized | Lifecycle::PoweredOn => {}
		}
		match colorspace {
			Colorspace::Rgb565 => self.write_register_list(&FORMAT_RGB565_REGS),
			Colorspace::Yuv => self.write_register_list(&FORMAT_YUV422_REGS),
		}
	}

	/// Reprogram binning, mirror and flip timing from the current state.
	pub fn set_image_options(&mut self) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		let regs = image_option_regs(self.state.binning, self.state.flip_x, self.state.flip_y);
		for (reg, val) in regs {
			self.write_register(reg, val)?;
		}
		Ok(())
	}

	fn set_pll(&mut self, pll: PllConfig) -> CameraResult<(), CAP, I2C> {
		let Some(regs) = pll.registers() else {
			log_warn!("Ignoring out of range PLL settings");
			return Ok(());
		};
		for (reg, val) in regs {
			self.write_register(reg, val)?;
		}
		Ok(())
	}

	/// Mirror horizontally (`flip_x`) and/or flip vertically (`flip_y`).
	pub fn flip(&mut self, flip_x: bool, flip_y: bool) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.state.flip_x = flip_x;
		self.state.flip_y = flip_y;
		self.set_image_options()
	}

	pub fn set_night(&mut self, enable: bool) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.write_reg_bits(AEC_POWER_DOMAIN, AEC_POWER_DOMAIN_NIGHT_MASK, enable)
	}

	/// Enable/disable the color bar test pattern
	pub fn test_pattern(&mut self, on: bool) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.state.test_pattern = on;
		self.write_register(PRE_ISP_TEST_SETTING_1, if on { TEST_PATTERN_ENABLE } else { 0x00 })
	}

	/// Saturation level in -4..=4. Other values are ignored.
	pub fn set_saturation(&mut self, level: i8) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		let Some(row) = tuning::saturation_row(level) else {
			log_warn!("Ignoring saturation level {}", level);
			return Ok(());
		};
		self.state.saturation = level;
		for (offset, val) in row.iter().enumerate() {
			self.write_register(CMX1 + offset as u16, *val)?;
		}
		Ok(())
	}

	/// Contrast level in -3..=3. Other values are ignored.
	pub fn set_contrast(&mut self, level: i8) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		let Some(row) = tuning::contrast_row(level) else {
			log_warn!("Ignoring contrast level {}", level);
			return Ok(());
		};
		self.state.contrast = level;
		self.write_group(&[(SDE_CTRL6, row[0]), (SDE_CTRL5, row[1])])
	}

	pub fn set_special_effect(&mut self, effect: SpecialEffect) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.state.effect = effect;
		for (reg, val) in SPECIAL_EFFECT_REGS.iter().zip(effect.values()) {
			self.write_register(*reg, *val)?;
		}
		Ok(())
	}

	/// Exposure (EV) level in -3..=3. Other values are ignored.
	pub fn set_exposure(&mut self, level: i8) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		let Some(row) = tuning::exposure_row(level) else {
			log_warn!("Ignoring exposure level {}", level);
			return Ok(());
		};
		self.state.exposure = level;
		// TODO: these land in the color matrix (CMX1..CMX6) and clobber saturation;
		// the values are AE targets meant for 0x3A0F, 0x3A10, 0x3A11, 0x3A1B, 0x3A1E, 0x3A1F.
		for (offset, val) in row.iter().enumerate() {
			self.write_register(CMX1 + offset as u16, *val)?;
		}
		Ok(())
	}

	/// Brightness level in -4..=4. Other values are ignored.
	pub fn set_brightness(&mut self, level: i8) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		let Some((magnitude, sign)) = tuning::brightness_values(level) else {
			log_warn!("Ignoring brightness level {}", level);
			return Ok(());
		};
		self.state.brightness = level;
		self.write_group(&[(SDE_CTRL7, magnitude), (SDE_CTRL8, sign)])
	}

	pub fn set_white_balance(&mut self, mode: WhiteBalance) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.state.white_balance = mode;
		let values = mode.values();
		let regs: [(u16, u8); 7] = core::array::from_fn(|i| (WHITE_BALANCE_REGS[i], values[i]));
		self.write_group(&regs)
	}

	/// Set manual exposure, in line periods. Takes effect with AEC off.
	pub fn set_manual_exposure(&mut self, exposure: u32) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.write_register(AEC_PK_EXPOSURE_HI, ((exposure >> 12) & 0x0F) as u8)?; // Exposure[19:16]
		self.write_register(AEC_PK_EXPOSURE_MED, (exposure >> 4) as u8)?; // Exposure[15:8]
		self.write_register(AEC_PK_EXPOSURE_LO, (exposure << 4) as u8) // Exposure[7:0]
	}

	/// Set manual gain, in 1/16 steps. Takes effect with AGC off.
	pub fn set_manual_gain(&mut self, gain: u16) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.write_register(AEC_PK_REAL_GAIN_HI, ((gain >> 8) & 0x03) as u8)?; // Gain[9:8]
		self.write_register(AEC_PK_REAL_GAIN_LO, gain as u8) // Gain[7:0]
	}

	pub fn set_auto_exposure(&mut self, enable: bool) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.write_reg_bits(AEC_PK_MANUAL, AEC_PK_MANUAL_AEC_MANUALEN, !enable)
	}

	pub fn set_auto_gain(&mut self, enable: bool) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.write_reg_bits(AEC_PK_MANUAL, AEC_PK_MANUAL_AGC_MANUALEN, !enable)
	}

	/// Reload the ISP, AEC/AGC, banding filter and AWB baseline without a sensor reset.
	pub fn reset_auto_white_balance(&mut self) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.write_register_list(&RESET_AWB_REGS)
	}

	pub fn reset_awb_curve(&mut self) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.write_register_list(&AWB_CURVE_REGS)
	}

	pub fn set_gamma(&mut self, curve: GammaCurve) -> CameraResult<(), CAP, I2C> {
		self.ensure_powered()?;
		self.write_register_list(curve.registers())
	}

	/// Verify sensor is responding with correct chip ID
	pub fn sensor_id(&mut self) -> CameraResult<u16, CAP, I2C> {
		let high = self.read_register(CHIP_ID_HIGH)?;
		let low = self.read_register(CHIP_ID_LOW)?;
		Ok(u16::from_be_bytes([high, low]))
	}

	pub fn read_register(&mut self, reg: u16) -> CameraResult<u8, CAP, I2C> {
		let mut buf = [0u8; 1];
		self.i2c
			.write_read(self.config.address, &reg.to_be_bytes(), &mut buf)
			.map_err(Error::I2c)?;
		log_trace!("Read {:#X} from {:#X}", buf[0], reg);
		Ok(buf[0])
	}

	pub fn write_register(&mut self, reg: u16, val: u8) -> CameraResult<(), CAP, I2C> {
		log_trace!("Writing {:#X} to {:#X}", val, reg);
		let [high, low] = reg.to_be_bytes();
		self.i2c
			.write(self.config.address, &[high, low, val])
			.map_err(Error::I2c)
	}

	/// Write `(register, value)` pairs in order. A [`REG_DLY`] entry sleeps for `value` ms.
	pub fn write_register_list(&mut self, regs: &[(u16, u8)]) -> CameraResult<(), CAP, I2C> {
		for &(reg, val) in regs {
			if reg == REG_DLY {
				self.sleep((val as u32).millis());
			} else {
				self.write_register(reg, val)?;
				self.sleep_us(self.config.write_delay);
			}
		}
		Ok(())
	}

	/// Write an X/Y pair as four bytes starting at `reg`: X high, X low, Y high, Y low
	fn write_addr_reg(&mut self, reg: u16, (x, y): (u16, u16)) -> CameraResult<(), CAP, I2C> {
		let [x_high, x_low] = x.to_be_bytes();
		let [y_high, y_low] = y.to_be_bytes();
		self.write_register(reg, x_high)?;
		self.write_register(reg + 1, x_low)?;
		self.write_register(reg + 2, y_high)?;
		self.write_register(reg + 3, y_low)
	}

	fn write_reg_bits(&mut self, reg: u16, mask: u8, enable: bool) -> CameraResult<(), CAP, I2C> {
		let val = self.read_register(reg)?;
		let val = if enable { val | mask } else { val & !mask };
		self.write_register(reg, val)
	}

	/// Write `regs` inside group 3 so they latch together on the next frame.
	fn write_group(&mut self, regs: &[(u16, u8)]) -> CameraResult<(), CAP, I2C> {
		self.write_register(GROUP_ACCESS, GROUP3_START)?;
		self.write_register_list(regs)?;
		self.write_register(GROUP_ACCESS, GROUP3_END)?;
		self.write_register(GROUP_ACCESS, GROUP3_LAUNCH)
	}
}
