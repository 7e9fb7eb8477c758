/// Errors from camera bring-up and configuration.
///
/// `I2C` is the bus error type, `CAP` the capture engine's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<I2C, CAP> {
    /// Bus transaction failed
    I2c(I2C),
    /// Chip ID registers did not read back 0x5640
    CameraIdentity { found: u16 },
    /// Capture engine failed to initialize
    PeripheralInit(CAP),
    /// Capture engine could not provide a buffer for the requested frame
    Allocation(CAP),
    /// Sensor has not been through `begin()` yet
    NotInitialized,
}
