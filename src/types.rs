use core::fmt;

use crate::commands::{MODE_LOW_POWER, MODE_RESET, MODE_SLEEP, MODE_WORK};

/// Operating modes accepted by the mode change command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// Fan and sensors off.
    Sleep = MODE_SLEEP,
    /// Continuous sampling.
    Work = MODE_WORK,
    /// Reduced duty cycle sampling.
    LowPower = MODE_LOW_POWER,
    /// Software reset. The sensor reboots and needs about two seconds.
    Reset = MODE_RESET,
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> u8 {
        mode as u8
    }
}

/// 8-byte serial number read from the info frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerialNumber(pub [u8; 8]);

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Module information returned by the info command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apc1Info {
    /// ASCII device type, `APC1-I` for the I2C variant.
    pub device_type: [u8; 6],
    /// Serial number.
    pub serial_number: SerialNumber,
}

/// APC1 measurement data as delivered by the 64-byte data frame.
///
/// Values are the raw register contents; no scaling is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Apc1Data {
    /// Mass Concentration PM1.0 [μg/m³]
    pub pm1_0: u16,
    /// Mass Concentration PM2.5 [μg/m³]
    pub pm2_5: u16,
    /// Mass Concentration PM10 [μg/m³]
    pub pm10: u16,
    /// Mass Concentration PM1.0 under atmospheric environment [μg/m³]
    pub apm1_0: u16,
    /// Mass Concentration PM2.5 under atmospheric environment [μg/m³]
    pub apm2_5: u16,
    /// Mass Concentration PM10 under atmospheric environment [μg/m³]
    pub apm10: u16,
    /// Particles beyond 0.3 μm in 0.1 L of air
    pub count0_3: u16,
    /// Particles beyond 0.5 μm in 0.1 L of air
    pub count0_5: u16,
    /// Particles beyond 1.0 μm in 0.1 L of air
    pub count1_0: u16,
    /// Particles beyond 2.5 μm in 0.1 L of air
    pub count2_5: u16,
    /// Particles beyond 5.0 μm in 0.1 L of air
    pub count5_0: u16,
    /// Particles beyond 10 μm in 0.1 L of air
    pub count10: u16,
    /// Total VOC [ppb]
    pub tvoc: u16,
    /// Equivalent CO2 [ppm]
    pub eco2: u16,
    /// Compensated Temperature
    pub temperature: i16,
    /// Compensated Humidity
    pub humidity: u16,
    /// Raw Temperature
    pub raw_temperature: i16,
    /// Raw Humidity
    pub raw_humidity: u16,
    /// Gas sensor resistance RS0 [Ω]
    pub hp0: u32,
    /// Gas sensor resistance RS1 [Ω]
    pub hp1: u32,
    /// Gas sensor resistance RS2 [Ω]
    pub hp2: u32,
    /// Gas sensor resistance RS3 [Ω]
    pub hp3: u32,
    /// UBA air quality index (1..5)
    pub iaq: u8,
    /// AQI500 index
    pub aqi_index: u16,
    /// Firmware version
    pub firmware_version: u8,
    /// Error code
    pub error_code: u8,
}

impl Apc1Data {
    /// High nibble of the firmware version byte.
    pub fn firmware_major(&self) -> u8 {
        self.firmware_version >> 4
    }

    /// Low nibble of the firmware version byte.
    pub fn firmware_minor(&self) -> u8 {
        self.firmware_version & 0x0F
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_bytes() {
        assert_eq!(u8::from(Mode::Sleep), 0x00);
        assert_eq!(u8::from(Mode::Work), 0x01);
        assert_eq!(u8::from(Mode::LowPower), 0x02);
        assert_eq!(u8::from(Mode::Reset), 0x0F);
    }

    #[test]
    fn serial_number_as_hex() {
        let sn = SerialNumber([0x00, 0x01, 0xAB, 0x10, 0xFF, 0x2C, 0x03, 0x9D]);
        assert_eq!(sn.to_string(), "0001AB10FF2C039D");
    }

    #[test]
    fn firmware_nibbles() {
        let data = Apc1Data {
            firmware_version: 0x23,
            ..Default::default()
        };
        assert_eq!(data.firmware_major(), 2);
        assert_eq!(data.firmware_minor(), 3);
    }
}
