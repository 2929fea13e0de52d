//! Error types.

/// errno values reported alongside handler failures.
pub mod errno {
    pub const EIO: i32 = 5;
    pub const ENODEV: i32 = 19;
    pub const EINVAL: i32 = 22;
}

/// Why a handler did not produce a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The outbound transport refused the response.
    Transport,
    /// The sensor collaborator failed with the contained (negative) code.
    Sensor(i32),
    /// A layout did not fit its frame buffer.
    Codec,
}

impl Error {
    /// Negative errno-style code for diagnostics.
    pub const fn code(&self) -> i32 {
        match self {
            Self::Transport => -errno::EIO,
            Self::Sensor(code) => *code,
            Self::Codec => -errno::EINVAL,
        }
    }
}

impl From<frame_codec::error::EndOfInput> for Error {
    fn from(_: frame_codec::error::EndOfInput) -> Self {
        Self::Codec
    }
}

/// An inbound frame could not be handed to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejected {
    /// The frame is larger than the inbox slot.
    Oversized,
    /// The inbox is full; a frame is still in flight.
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_negative() {
        assert_eq!(-5, Error::Transport.code());
        assert_eq!(-22, Error::Codec.code());
        assert_eq!(-121, Error::Sensor(-121).code());
    }

    #[test]
    fn codec_conversion() {
        let err: Error = frame_codec::error::EndOfInput.into();

        assert_eq!(Error::Codec, err);
    }
}
