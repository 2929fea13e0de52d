//! The static table of supported opcodes.

use crate::frame::{self, CounterReport, Empty};
#[cfg(feature = "sensor")]
use crate::frame::{SensorConfigReport, TemperatureReport};
use crate::opcode::{OpCode, OP_POS};
#[cfg(feature = "sensor")]
use crate::sensor::SensorConfig;

/// The handler logic bound to a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handler {
    Ping,
    Counter,
    Delay,
    #[cfg(feature = "sensor")]
    Temperature,
    #[cfg(feature = "sensor")]
    TempSensorConfig,
}

/// Binds one opcode to its frame lengths and handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameDescriptor {
    pub opcode: OpCode,
    /// Exact length an inbound frame must have to match.
    pub request_len: usize,
    /// Exact length of the frame the handler answers with.
    pub response_len: usize,
    pub handler: Handler,
}

pub const PING: FrameDescriptor = FrameDescriptor {
    opcode: OpCode::Ping,
    request_len: frame::len::<Empty>(),
    response_len: frame::len::<Empty>(),
    handler: Handler::Ping,
};

pub const COUNTER: FrameDescriptor = FrameDescriptor {
    opcode: OpCode::Counter,
    request_len: frame::len::<Empty>(),
    response_len: frame::len::<CounterReport>(),
    handler: Handler::Counter,
};

pub const DELAY: FrameDescriptor = FrameDescriptor {
    opcode: OpCode::Delay,
    request_len: frame::len::<Empty>(),
    response_len: frame::len::<Empty>(),
    handler: Handler::Delay,
};

#[cfg(feature = "sensor")]
pub const TEMPERATURE: FrameDescriptor = FrameDescriptor {
    opcode: OpCode::Temperature,
    request_len: frame::len::<Empty>(),
    response_len: frame::len::<TemperatureReport>(),
    handler: Handler::Temperature,
};

#[cfg(feature = "sensor")]
pub const TEMP_SENSOR_CONFIG: FrameDescriptor = FrameDescriptor {
    opcode: OpCode::TempSensorConfig,
    request_len: frame::len::<SensorConfig>(),
    response_len: frame::len::<SensorConfigReport>(),
    handler: Handler::TempSensorConfig,
};

/// The live registry.
#[cfg(not(feature = "sensor"))]
pub static REGISTRY: [FrameDescriptor; 3] = [PING, COUNTER, DELAY];

/// The live registry.
#[cfg(feature = "sensor")]
pub static REGISTRY: [FrameDescriptor; 5] = [PING, COUNTER, DELAY, TEMPERATURE, TEMP_SENSOR_CONFIG];

/// Find the descriptor matching an inbound frame.
///
/// A descriptor matches only if both the opcode and the exact frame
/// length agree; the first match wins. Empty frames never match.
pub fn lookup(frame: &[u8]) -> Option<&'static FrameDescriptor> {
    let opcode = *frame.get(OP_POS)?;

    REGISTRY
        .iter()
        .find(|desc| desc.opcode.byte() == opcode && desc.request_len == frame.len())
}
