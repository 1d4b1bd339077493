use crate::commands::DEFAULT_ADDRESS;

/// Configuration settings for the APC1 driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// 7-bit I2C address of the sensor.
    pub address: u8,
}

impl Config {
    /// Creates a new `Config` for a sensor at `address`.
    pub fn new(address: u8) -> Config {
        Config { address }
    }

    /// Sets the I2C address for the configuration.
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
}

impl Default for Config {
    /// The default configuration addresses the sensor at `0x12`.
    fn default() -> Config {
        Config {
            address: DEFAULT_ADDRESS,
        }
    }
}
