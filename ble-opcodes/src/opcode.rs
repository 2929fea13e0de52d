/// The closed set of commands a frame can carry.
///
/// The discriminant is the byte found at [`OP_POS`] of every
/// request and response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OpCode {
    Ping = 0x01,
    Counter = 0x02,
    Delay = 0x03,
    Temperature = 0x04,
    TempSensorConfig = 0x05,
}

/// Position of the opcode within a frame.
pub const OP_POS: usize = 0;
/// Position of the first payload byte within a frame.
pub const DATA_POS: usize = 1;

/// The byte is not a known opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownOpCode(pub u8);

impl OpCode {
    pub const ALL: [Self; 5] = [
        Self::Ping,
        Self::Counter,
        Self::Delay,
        Self::Temperature,
        Self::TempSensorConfig,
    ];

    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

impl From<OpCode> for u8 {
    fn from(value: OpCode) -> Self {
        value.byte()
    }
}

impl TryFrom<u8> for OpCode {
    type Error = UnknownOpCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|op| op.byte() == value)
            .ok_or(UnknownOpCode(value))
    }
}
