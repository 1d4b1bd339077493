//! embedded-hal driver for the ScioSense APC1 air quality combo sensor.
//!
//! The APC1 reports particulate matter, TVOC/eCO2, temperature, humidity and
//! metal oxide gas sensor resistances in a single 64-byte frame. The driver
//! owns the I2C bus and a delay provider and caches the last valid frame.
//!
//! ```ignore
//! let mut apc1 = Apc1::new(i2c, delay);
//! apc1.begin()?;
//! apc1.set_mode(Mode::Work)?;
//! loop {
//!     if apc1.measure().is_ok() {
//!         log::info!("PM2.5: {}", apc1.pm2_5());
//!     }
//! }
//! ```
#![cfg_attr(not(test), no_std)]

use embedded_hal::{delay::DelayNs, i2c::I2c};
use log::{debug, error, info, warn};

mod checksum;

mod commands;
pub use commands::{APC1_PART_ID, DEFAULT_ADDRESS, DEVICE_TYPE, HEADER};
use commands::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

pub mod frame;
pub use frame::FrameError;

mod types;
pub use types::*;

/// APC1 device session.
pub struct Apc1<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
    available: bool,
    serial_number: Option<SerialNumber>,
    data: Apc1Data,
}

impl<I2C, D, E> Apc1<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
    E: core::fmt::Debug,
{
    /// Creates a new driver for a sensor at the default address. No I/O is
    /// performed.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, Config::default())
    }

    /// Creates a new driver with a custom configuration.
    pub fn with_config(i2c: I2C, delay: D, config: Config) -> Self {
        Self {
            i2c,
            delay,
            config,
            available: false,
            serial_number: None,
            data: Apc1Data::default(),
        }
    }

    /// Destroys the driver and returns the bus and the delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Waits for the sensor to boot, resets it and checks its identity.
    ///
    /// The sensor is marked available only when the identity check passes.
    /// A failed reset is logged; the identity check still decides the outcome.
    pub fn begin(&mut self) -> Result<(), Error<E>> {
        self.delay.delay_ms(RESET_DELAY_MS);

        self.available = false;
        if let Err(e) = self.reset() {
            warn!("APC1 reset failed during begin: {:?}", e);
        }

        self.check_part_id()?;
        self.available = true;
        Ok(())
    }

    /// Sends a software reset and waits for the sensor to reboot.
    ///
    /// Only the command transaction is checked; the identity is not verified.
    pub fn reset(&mut self) -> Result<(), Error<E>> {
        let result = self.send_command(CMD_MODE, 0x00, MODE_RESET);
        self.delay.delay_ms(RESET_DELAY_MS);
        result
    }

    /// Changes the operating mode. The byte is forwarded without validation.
    pub fn set_mode(&mut self, mode: impl Into<u8>) -> Result<(), Error<E>> {
        let mode = mode.into();
        debug!("Setting APC1 mode to {:#04x}", mode);
        self.send_command(CMD_MODE, 0x00, mode)
    }

    /// Reads the module info and confirms that an APC1 is attached.
    ///
    /// On success the serial number is logged and cached.
    pub fn check_part_id(&mut self) -> Result<Apc1Info, Error<E>> {
        self.send_command(CMD_INFO, 0x00, 0x00)?;
        self.delay.delay_ms(INFO_DELAY_MS);

        let mut buf = [0u8; INFO_LENGTH];
        self.read_register(INFO_REG_ADDR, &mut buf)?;

        let info = frame::decode_info(&buf).map_err(|e| {
            match e {
                FrameError::HeaderMismatch => warn!("CheckID no header detected!"),
                FrameError::TypeMismatch => warn!("CheckID no correct type detected!"),
                _ => warn!("CheckID frame error: {:?}", e),
            }
            Error::from(e)
        })?;

        info!("SN: {}", info.serial_number);
        self.serial_number = Some(info.serial_number);
        Ok(info)
    }

    /// Reads the data frame and updates the cached measurement.
    ///
    /// No command is sent, so the sensor must already be sampling. On error the
    /// cache keeps its previous values.
    pub fn measure(&mut self) -> Result<Apc1Data, Error<E>> {
        let mut buf = [0u8; DATA_LENGTH];
        self.read_register(DATA_REG_ADDR, &mut buf)?;

        let data = frame::decode_data(&buf).map_err(|e| {
            match e {
                FrameError::HeaderMismatch => warn!("Read data no header detected!"),
                FrameError::ChecksumMismatch => warn!("Read data checksum error!"),
                _ => warn!("Read data frame error: {:?}", e),
            }
            Error::from(e)
        })?;

        self.data = data;
        Ok(data)
    }

    /// Writes a command frame to the command register.
    pub fn send_command(&mut self, code: u8, data_high: u8, data_low: u8) -> Result<(), Error<E>> {
        let command = frame::command_frame(code, data_high, data_low);
        debug!("Executing command: {:02X?}", command);
        self.write_register(CMD_REG_ADDR, &command)
    }

    // Reads `buf.len()` bytes starting at `reg`, at most READ_CHUNK per transaction.
    fn read_register(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        let address = self.config.address;
        for (index, chunk) in buf.chunks_mut(READ_CHUNK).enumerate() {
            let offset = reg.wrapping_add((index * READ_CHUNK) as u8);
            self.i2c
                .write_read(address, &[offset], chunk)
                .map_err(|e| {
                    error!("I2C read at register {:#04x} failed", offset);
                    Error::I2c(e)
                })?;
        }
        debug!("Read from register {:#04x}: {:02X?}", reg, buf);
        Ok(())
    }

    // Single transaction: register byte followed by the payload.
    fn write_register(&mut self, reg: u8, payload: &[u8]) -> Result<(), Error<E>> {
        let mut buf = [0u8; CMD_LENGTH + 1];
        buf[0] = reg;
        buf[1..=payload.len()].copy_from_slice(payload);
        self.i2c
            .write(self.config.address, &buf[..=payload.len()])
            .map_err(|e| {
                error!("I2C write to register {:#04x} failed", reg);
                Error::I2c(e)
            })
    }

    /// I2C address the driver talks to.
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Whether the last `begin` found an APC1.
    pub fn available(&self) -> bool {
        self.available
    }

    /// Serial number from the last successful identity check.
    pub fn serial_number(&self) -> Option<SerialNumber> {
        self.serial_number
    }

    /// Last successfully decoded measurement.
    pub fn data(&self) -> &Apc1Data {
        &self.data
    }

    /// PM1.0 concentration [μg/m³].
    pub fn pm1_0(&self) -> u16 {
        self.data.pm1_0
    }

    /// PM2.5 concentration [μg/m³].
    pub fn pm2_5(&self) -> u16 {
        self.data.pm2_5
    }

    /// PM10 concentration [μg/m³].
    pub fn pm10(&self) -> u16 {
        self.data.pm10
    }

    /// PM1.0 concentration under atmospheric environment [μg/m³].
    pub fn apm1_0(&self) -> u16 {
        self.data.apm1_0
    }

    /// PM2.5 concentration under atmospheric environment [μg/m³].
    pub fn apm2_5(&self) -> u16 {
        self.data.apm2_5
    }

    /// PM10 concentration under atmospheric environment [μg/m³].
    pub fn apm10(&self) -> u16 {
        self.data.apm10
    }

    pub fn count0_3(&self) -> u16 {
        self.data.count0_3
    }

    pub fn count0_5(&self) -> u16 {
        self.data.count0_5
    }

    pub fn count1_0(&self) -> u16 {
        self.data.count1_0
    }

    pub fn count2_5(&self) -> u16 {
        self.data.count2_5
    }

    pub fn count5_0(&self) -> u16 {
        self.data.count5_0
    }

    pub fn count10(&self) -> u16 {
        self.data.count10
    }

    /// Compensated temperature.
    pub fn temperature(&self) -> i16 {
        self.data.temperature
    }

    /// Compensated humidity.
    pub fn humidity(&self) -> u16 {
        self.data.humidity
    }

    pub fn raw_temperature(&self) -> i16 {
        self.data.raw_temperature
    }

    pub fn raw_humidity(&self) -> u16 {
        self.data.raw_humidity
    }

    /// UBA air quality index.
    pub fn iaq(&self) -> u8 {
        self.data.iaq
    }

    pub fn tvoc(&self) -> u16 {
        self.data.tvoc
    }

    pub fn eco2(&self) -> u16 {
        self.data.eco2
    }

    /// AQI500 index.
    pub fn aqi_index(&self) -> u16 {
        self.data.aqi_index
    }

    pub fn hp0(&self) -> u32 {
        self.data.hp0
    }

    pub fn hp1(&self) -> u32 {
        self.data.hp1
    }

    pub fn hp2(&self) -> u32 {
        self.data.hp2
    }

    pub fn hp3(&self) -> u32 {
        self.data.hp3
    }

    pub fn firmware_version(&self) -> u8 {
        self.data.firmware_version
    }

    pub fn firmware_major(&self) -> u8 {
        self.data.firmware_major()
    }

    pub fn firmware_minor(&self) -> u8 {
        self.data.firmware_minor()
    }

    pub fn error_code(&self) -> u8 {
        self.data.error_code
    }
}
