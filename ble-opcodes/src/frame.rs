//! Frame layouts.
//!
//! Index | Name
//! ------|--------
//! 0     | OpCode
//! 1:n   | Payload
//!
//! Payloads are fixed-size [`Wire`] layouts, so the length of every
//! frame is known at compile time.

use frame_codec::{error::EndOfInput, Wire};
use heapless::Vec;

use crate::opcode::{OpCode, DATA_POS};
use crate::sensor::SensorValue;

/// Length of the largest registered frame (TEMP_SENSOR_CONFIG request).
pub const MAX_FRAME_LEN: usize = 28;

/// An encoded frame.
pub type FrameBuf = Vec<u8, MAX_FRAME_LEN>;

/// Payload of frames that carry nothing but their opcode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Wire)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Empty;

/// COUNTER response payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Wire)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterReport {
    /// Count value after this request's increment.
    pub count: u32,
}

/// TEMPERATURE response payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Wire)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureReport {
    pub temperature: SensorValue,
}

/// TEMP_SENSOR_CONFIG response payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Wire)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfigReport {
    /// 0 if the sensor accepted the configuration,
    /// otherwise a negative error code.
    pub return_code: i32,
}

/// Total frame length for a payload layout.
#[inline]
pub const fn len<P: Wire>() -> usize {
    DATA_POS + P::SIZE
}

/// Render an opcode and its payload into a frame.
pub fn encode<P: Wire>(opcode: OpCode, payload: &P) -> Result<FrameBuf, EndOfInput> {
    let mut frame = FrameBuf::new();

    frame.push(opcode.byte()).map_err(|_| EndOfInput)?;
    frame.resize_default(len::<P>()).map_err(|_| EndOfInput)?;
    payload.write_iter(frame[DATA_POS..].iter_mut())?;

    Ok(frame)
}

/// Read the payload of a frame, skipping the opcode.
///
/// The frame length is not inspected beyond what the
/// layout needs; trailing bytes are ignored.
pub fn decode<P: Wire>(frame: &[u8]) -> Result<P, EndOfInput> {
    P::read_iter(frame.iter().skip(DATA_POS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SensorConfig;

    mod lengths {
        use super::*;

        #[test]
        fn table() {
            assert_eq!(1, len::<Empty>());
            assert_eq!(5, len::<CounterReport>());
            assert_eq!(9, len::<TemperatureReport>());
            assert_eq!(28, len::<SensorConfig>());
            assert_eq!(5, len::<SensorConfigReport>());
        }

        #[test]
        fn largest_fits() {
            assert_eq!(MAX_FRAME_LEN, len::<SensorConfig>());
        }
    }

    mod encoding {
        use super::*;

        #[test]
        fn opcode_only() {
            let frame = encode(OpCode::Ping, &Empty).unwrap();

            assert_eq!([0x01], frame[..]);
        }

        #[test]
        fn counter() {
            let frame = encode(OpCode::Counter, &CounterReport { count: 0x0403_0201 }).unwrap();

            assert_eq!([0x02, 0x01, 0x02, 0x03, 0x04], frame[..]);
        }

        #[test]
        fn temperature() {
            let frame = encode(
                OpCode::Temperature,
                &TemperatureReport {
                    temperature: SensorValue::new(-3, 750_000),
                },
            )
            .unwrap();

            assert_eq!(9, frame.len());
            assert_eq!(0x04, frame[0]);
            assert_eq!((-3i32).to_le_bytes(), frame[1..5]);
            assert_eq!(750_000i32.to_le_bytes(), frame[5..9]);
        }

        #[test]
        fn sensor_config_report() {
            let frame =
                encode(OpCode::TempSensorConfig, &SensorConfigReport { return_code: -5 }).unwrap();

            assert_eq!([0x05, 0xfb, 0xff, 0xff, 0xff], frame[..]);
        }
    }

    mod decoding {
        use super::*;

        #[test]
        fn skips_opcode() {
            let frame = [0x02, 0x2a, 0x00, 0x00, 0x00];

            assert_eq!(
                CounterReport { count: 42 },
                decode::<CounterReport>(&frame).unwrap()
            );
        }

        #[test]
        fn handcrafted_config() {
            let mut frame = [0u8; 28];
            frame[0] = 0x05;
            frame[1..3].copy_from_slice(&0x0060u16.to_le_bytes());
            frame[3] = 0x03;
            frame[4..8].copy_from_slice(&30i32.to_le_bytes());
            frame[8..12].copy_from_slice(&5i32.to_le_bytes());
            frame[12..16].copy_from_slice(&(-5i32).to_le_bytes());
            frame[16..20].copy_from_slice(&(-25i32).to_le_bytes());
            frame[20..24].copy_from_slice(&90i32.to_le_bytes());
            frame[24..28].copy_from_slice(&0i32.to_le_bytes());

            let config = decode::<SensorConfig>(&frame).unwrap();

            assert_eq!(
                SensorConfig {
                    config: 0x0060,
                    resolution: 0x03,
                    upper: SensorValue::new(30, 5),
                    lower: SensorValue::new(-5, -25),
                    critical: SensorValue::new(90, 0),
                },
                config
            );
        }

        #[test]
        fn short_frame() {
            assert_eq!(Err(EndOfInput), decode::<CounterReport>(&[0x02, 0x00]));
            assert_eq!(Ok(Empty), decode::<Empty>(&[]));
        }
    }
}
