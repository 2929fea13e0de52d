/// Default suspension of the DELAY opcode, in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 1000;

/// Build-time dispatcher settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// How long the DELAY opcode suspends before answering.
    pub delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }

    pub const fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}
