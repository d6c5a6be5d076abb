//! Configuration primitives for the D7S driver.

/// Default settle delay around each bus transaction, in microseconds.
pub const DEFAULT_SETTLE_DELAY_US: u32 = 10_000;
/// Default number of attempts for a register read.
pub const DEFAULT_MAX_ATTEMPTS: u8 = 3;

/// User-facing configuration for the D7S driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Delay inserted before and after every bus transaction, in microseconds.
    pub settle_delay_us: u32,
    /// Total attempts for a register read before the bus error is reported.
    pub max_attempts: u8,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is usable.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the settle delay in microseconds.
    pub fn settle_delay_us(mut self, settle_delay_us: u32) -> Self {
        self.config.settle_delay_us = settle_delay_us;
        self
    }

    /// Overrides the read attempt budget.
    pub fn max_attempts(mut self, max_attempts: u8) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay_us: DEFAULT_SETTLE_DELAY_US,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A read must be attempted at least once.
    ZeroAttempts,
}
