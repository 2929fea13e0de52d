//! The temperature sensor collaborator.
//!
//! The sensor driver owns register access and any persisted
//! configuration; frames only carry its numeric inputs and results.

use frame_codec::Wire;

use crate::error::errno;

/// One temperature in degrees Celsius, as reported by the sensor driver.
///
/// The whole and decimal parts are independent signed fields; no
/// arithmetic relationship between them is assumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Wire)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorValue {
    pub whole: i32,
    pub decimal: i32,
}

impl SensorValue {
    pub const fn new(whole: i32, decimal: i32) -> Self {
        Self { whole, decimal }
    }
}

/// Register values and alert thresholds applied in one go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Wire)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Configuration register value.
    pub config: u16,
    /// Resolution register value.
    pub resolution: u8,
    /// Upper alert threshold.
    pub upper: SensorValue,
    /// Lower alert threshold.
    pub lower: SensorValue,
    /// Critical alert threshold.
    pub critical: SensorValue,
}

/// Describes temperature sensor drivers.
///
/// Errors are negative errno-style codes from the driver.
#[allow(async_fn_in_trait)]
pub trait TemperatureSensor {
    async fn read_temperature(&mut self) -> Result<SensorValue, i32>;
    async fn apply_config(&mut self, config: &SensorConfig) -> Result<(), i32>;
}

/// Stand-in for boards without a temperature sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensor;

impl TemperatureSensor for NoSensor {
    async fn read_temperature(&mut self) -> Result<SensorValue, i32> {
        Err(-errno::ENODEV)
    }

    async fn apply_config(&mut self, _config: &SensorConfig) -> Result<(), i32> {
        Err(-errno::ENODEV)
    }
}
