// Part ID reported by the APC1 datasheet.
pub const APC1_PART_ID: u16 = 0x6001;

// DEFAULT_ADDRESS is the 7-bit I2C address of the APC1.
pub const DEFAULT_ADDRESS: u8 = 0x12;

// HEADER is the two byte magic that starts every command, info and data frame.
pub const HEADER: [u8; 2] = [0x42, 0x4D];

// DEVICE_TYPE is the ASCII type tag carried at bytes 4..10 of the info frame.
pub const DEVICE_TYPE: [u8; 6] = *b"APC1-I";

// Register holding the command frame; the info frame is read from CMD_REG_ADDR + 7.
pub(crate) const CMD_REG_ADDR: u8 = 0x40;
pub(crate) const INFO_REG_ADDR: u8 = CMD_REG_ADDR + 7;
pub(crate) const DATA_REG_ADDR: u8 = 0x00;

pub(crate) const CMD_LENGTH: usize = 7;
pub(crate) const INFO_LENGTH: usize = 23;
pub(crate) const DATA_LENGTH: usize = 64;

// Largest read the bus is asked for in one transaction.
pub(crate) const READ_CHUNK: usize = 32;

pub(crate) const CMD_MODE: u8 = 0xE4;
pub(crate) const CMD_INFO: u8 = 0xE9;

pub(crate) const MODE_RESET: u8 = 0x0F;
pub(crate) const MODE_SLEEP: u8 = 0x00;
// Not verified against the datasheet, which may list work mode as 0x00.
pub(crate) const MODE_WORK: u8 = 0x01;
pub(crate) const MODE_LOW_POWER: u8 = 0x02;

// Boot time after power on and after a reset.
pub(crate) const RESET_DELAY_MS: u32 = 2000;
pub(crate) const INFO_DELAY_MS: u32 = 10;
