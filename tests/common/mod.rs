#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorKind, Operation};
use ov5640_dvp_camera::sensors::sensor::{CAM_ADDR, CHIP_ID_HIGH, CHIP_ID_LOW};
use ov5640_dvp_camera::{Camera, Colorspace, Config, NoPin, ParallelCapture, Realloc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    Write(u16, u8),
    Read(u16),
}

#[derive(Default)]
pub struct SensorModel {
    pub regs: HashMap<u16, u8>,
    pub log: Vec<BusOp>,
    pointer: u16,
}

/// Register-file stand-in for the sensor: remembers writes, serves reads.
#[derive(Clone, Default)]
pub struct FakeSensor(pub Rc<RefCell<SensorModel>>);

impl FakeSensor {
    pub fn with_chip_id(id: u16) -> Self {
        let sensor = Self::default();
        {
            let mut model = sensor.0.borrow_mut();
            model.regs.insert(CHIP_ID_HIGH, (id >> 8) as u8);
            model.regs.insert(CHIP_ID_LOW, id as u8);
        }
        sensor
    }

    pub fn log(&self) -> Vec<BusOp> {
        self.0.borrow().log.clone()
    }

    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.0
            .borrow()
            .log
            .iter()
            .filter_map(|op| match *op {
                BusOp::Write(reg, val) => Some((reg, val)),
                BusOp::Read(_) => None,
            })
            .collect()
    }

    pub fn clear_log(&self) {
        self.0.borrow_mut().log.clear();
    }

    pub fn reg(&self, reg: u16) -> u8 {
        self.0.borrow().regs.get(&reg).copied().unwrap_or(0)
    }

    pub fn set_reg(&self, reg: u16, val: u8) {
        self.0.borrow_mut().regs.insert(reg, val);
    }
}

impl i2c::ErrorType for FakeSensor {
    type Error = ErrorKind;
}

impl i2c::I2c for FakeSensor {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != CAM_ADDR {
            return Err(ErrorKind::NoAcknowledge(i2c::NoAcknowledgeSource::Address));
        }
        let mut model = self.0.borrow_mut();
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let reg = u16::from_be_bytes([bytes[0], bytes[1]]);
                    model.pointer = reg;
                    if let Some(&val) = bytes.get(2) {
                        model.regs.insert(reg, val);
                        model.log.push(BusOp::Write(reg, val));
                    }
                }
                Operation::Read(buf) => {
                    let reg = model.pointer;
                    buf[0] = model.regs.get(&reg).copied().unwrap_or(0);
                    model.log.push(BusOp::Read(reg));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureCall {
    Init,
    BufferConfig {
        width: u16,
        height: u16,
        colorspace: Colorspace,
        buffers: u8,
        realloc: Realloc,
    },
    RewireDma(usize),
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    Clock,
    NoMemory,
}

pub struct CaptureModel {
    pub calls: Vec<CaptureCall>,
    pub fail_init: bool,
    /// Largest buffer the engine can hand out, in bytes
    pub capacity: usize,
    pub allocated: usize,
}

/// Capture engine that records what the driver asked of it.
#[derive(Clone)]
pub struct FakeCapture(pub Rc<RefCell<CaptureModel>>);

impl FakeCapture {
    pub fn new(capacity: usize) -> Self {
        Self(Rc::new(RefCell::new(CaptureModel {
            calls: Vec::new(),
            fail_init: false,
            capacity,
            allocated: 0,
        })))
    }

    pub fn calls(&self) -> Vec<CaptureCall> {
        self.0.borrow().calls.clone()
    }
}

impl ParallelCapture for FakeCapture {
    type Error = CaptureError;

    fn init_peripherals(&mut self) -> Result<(), Self::Error> {
        let mut model = self.0.borrow_mut();
        model.calls.push(CaptureCall::Init);
        if model.fail_init {
            Err(CaptureError::Clock)
        } else {
            Ok(())
        }
    }

    fn buffer_config(
        &mut self,
        width: u16,
        height: u16,
        colorspace: Colorspace,
        buffers: u8,
        realloc: Realloc,
    ) -> Result<(), Self::Error> {
        let mut model = self.0.borrow_mut();
        model.calls.push(CaptureCall::BufferConfig {
            width,
            height,
            colorspace,
            buffers,
            realloc,
        });
        let required =
            width as usize * height as usize * colorspace.bytes_per_pixel() * buffers as usize;
        if required > model.capacity {
            return Err(CaptureError::NoMemory);
        }
        match realloc.decide(model.allocated, required) {
            None => Err(CaptureError::NoMemory),
            Some(true) => {
                model.allocated = required;
                Ok(())
            }
            Some(false) => Ok(()),
        }
    }

    fn rewire_dma(&mut self, pixels: usize) {
        self.0.borrow_mut().calls.push(CaptureCall::RewireDma(pixels));
    }

    fn resume(&mut self) {
        self.0.borrow_mut().calls.push(CaptureCall::Resume);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayCall {
    Ns(u32),
    Us(u32),
    Ms(u32),
}

#[derive(Clone, Default)]
pub struct FakeDelay(pub Rc<RefCell<Vec<DelayCall>>>);

impl FakeDelay {
    pub fn calls(&self) -> Vec<DelayCall> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(DelayCall::Ns(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.borrow_mut().push(DelayCall::Us(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(DelayCall::Ms(ms));
    }
}

pub type TestCamera = Camera<FakeCapture, FakeSensor, FakeDelay, NoPin>;

pub struct Rig {
    pub camera: TestCamera,
    pub sensor: FakeSensor,
    pub capture: FakeCapture,
    pub delay: FakeDelay,
}

/// Pixel memory of the fake engine: one QSXGA frame fits, two do not
pub const CAPACITY: usize = 16 * 1024 * 1024;

pub fn rig_with_id(id: u16) -> Rig {
    let sensor = FakeSensor::with_chip_id(id);
    let capture = FakeCapture::new(CAPACITY);
    let delay = FakeDelay::default();
    let camera = Camera::new(
        capture.clone(),
        sensor.clone(),
        delay.clone(),
        NoPin,
        Config::default(),
    );
    Rig {
        camera,
        sensor,
        capture,
        delay,
    }
}

pub fn rig() -> Rig {
    rig_with_id(0x5640)
}

/// A rig that has been through `begin()` with logs cleared.
pub fn powered_rig() -> Rig {
    let mut rig = rig();
    rig.camera.begin().expect("begin");
    rig.sensor.clear_log();
    rig.delay.clear();
    rig.capture.0.borrow_mut().calls.clear();
    rig
}
