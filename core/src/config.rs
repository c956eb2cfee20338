use alloc::string::String;
use core::fmt;

/// Widest unit that still fits the packing accumulator
pub const MAX_BITS_PER_UNIT: u8 = 32;

pub const DEFAULT_NAME: &str = "YOUR_NAME";

/// What happens to the pixels left over when a row is not a multiple of
/// the unit width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Remainder {
    /// Leftover pixels are discarded. This is what existing firmware expects.
    #[default]
    Drop,
    /// Leftover pixels form one more unit, aligned to its most significant bit.
    Flush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroBits,
    TooWide(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBits => f.write_str("bits per unit must be at least 1"),
            ConfigError::TooWide(bits) => write!(
                f,
                "bits per unit must be at most {MAX_BITS_PER_UNIT}, got {bits}"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingConfig {
    pub bits_per_unit: u8,
    pub remainder: Remainder,
    /// Identifier of the emitted array
    pub name: String,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self::unchecked(8)
    }
}

impl PackingConfig {
    /// Builds a config, rejecting unit widths outside `1..=32`.
    pub fn new(bits_per_unit: u8) -> Result<Self, ConfigError> {
        match bits_per_unit {
            0 => Err(ConfigError::ZeroBits),
            bits if bits > MAX_BITS_PER_UNIT => Err(ConfigError::TooWide(bits)),
            bits => Ok(Self::unchecked(bits)),
        }
    }

    /// Builds a config without validation. `pack` turns an invalid width
    /// into empty output instead of failing.
    pub fn unchecked(bits_per_unit: u8) -> Self {
        Self {
            bits_per_unit,
            remainder: Remainder::Drop,
            name: String::from(DEFAULT_NAME),
        }
    }

    pub fn with_remainder(mut self, remainder: Remainder) -> Self {
        self.remainder = remainder;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_valid(&self) -> bool {
        (1..=MAX_BITS_PER_UNIT).contains(&self.bits_per_unit)
    }
}
