//! Opcode frame dispatch for a BLE streaming characteristic.
//!
//! A peer writes fixed-length frames (an opcode byte plus a payload)
//! into the inbound stream. The [`Dispatcher`] matches each frame
//! against the static [`registry`] by opcode *and* exact length, runs
//! the bound handler, and writes the handler's fixed-length response
//! back through the [`Transport`].
//!
//! | Opcode | Name | Request | Response |
//! |---|---|---|---|
//! | 0x01 | PING | 1 | 1 |
//! | 0x02 | COUNTER | 1 | 5 |
//! | 0x03 | DELAY | 1 | 1 |
//! | 0x04 | TEMPERATURE | 1 | 9 |
//! | 0x05 | TEMP_SENSOR_CONFIG | 28 | 5 |
//!
//! TEMPERATURE and TEMP_SENSOR_CONFIG are only live with the
//! `sensor` feature.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod counter;
pub mod dispatcher;
pub mod error;
pub mod frame;
pub mod handler;
pub mod opcode;
pub mod registry;
pub mod sensor;
pub mod transport;

pub use config::Config;
pub use dispatcher::Dispatcher;
pub use error::Error;
pub use opcode::OpCode;
pub use sensor::{NoSensor, SensorConfig, SensorValue, TemperatureSensor};
pub use transport::{deliver, Inbox, InboundFrame, StreamTransport, Transport};
