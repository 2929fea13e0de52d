//! One function per opcode.
//!
//! Handlers take the decoded request payload and produce the response
//! payload; framing and sending is left to the dispatcher.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::counter::Counter;
use crate::frame::{CounterReport, Empty};
#[cfg(feature = "sensor")]
use crate::{
    error::Error,
    frame::{SensorConfigReport, TemperatureReport},
    sensor::{SensorConfig, TemperatureSensor},
};

/// Echo.
pub fn ping(request: Empty) -> Empty {
    info!("ping()");

    request
}

/// Increment the shared counter and report the new value.
pub fn counter<M: RawMutex>(counter: &Counter<M>, _request: Empty) -> CounterReport {
    info!("counter()");

    CounterReport {
        count: counter.increment(),
    }
}

/// Echo after suspending the calling task for `delay_ms`.
///
/// This is the one handler that stalls its caller on purpose; the
/// suspension yields to the executor rather than blocking the core.
pub async fn delay(mut delay: impl DelayNs, delay_ms: u32, request: Empty) -> Empty {
    info!("delay()");

    delay.delay_ms(delay_ms).await;

    request
}

/// Report the sensor's current temperature.
#[cfg(feature = "sensor")]
pub async fn temperature(
    sensor: &mut impl TemperatureSensor,
    _request: Empty,
) -> Result<TemperatureReport, Error> {
    info!("temperature()");

    let temperature = sensor.read_temperature().await.map_err(Error::Sensor)?;

    Ok(TemperatureReport { temperature })
}

/// Apply a sensor configuration and report the driver's verdict.
#[cfg(feature = "sensor")]
pub async fn configure_sensor(
    sensor: &mut impl TemperatureSensor,
    request: SensorConfig,
) -> SensorConfigReport {
    info!("configure_sensor()");

    let return_code = match sensor.apply_config(&request).await {
        Ok(()) => 0,
        Err(code) => code,
    };

    SensorConfigReport { return_code }
}
