//! Encoding of command frames and validation/decoding of info and data frames.
//!
//! Every function here is pure: bytes in, typed values out. Reporting of
//! failures is left to the caller.

use crate::checksum::checksum;
use crate::commands::{CMD_LENGTH, DATA_LENGTH, DEVICE_TYPE, HEADER, INFO_LENGTH};
use crate::types::{Apc1Data, Apc1Info, SerialNumber};

/// Why a received frame was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum FrameError {
    /// Fewer bytes than a full frame.
    #[cfg_attr(feature = "thiserror", error("short read"))]
    ShortRead,
    /// The first two bytes are not `0x42 0x4D`.
    #[cfg_attr(feature = "thiserror", error("no frame header detected"))]
    HeaderMismatch,
    /// The info frame does not carry the `APC1-I` type tag.
    #[cfg_attr(feature = "thiserror", error("wrong device type"))]
    TypeMismatch,
    /// The trailing checksum does not match the frame contents.
    #[cfg_attr(feature = "thiserror", error("frame checksum error"))]
    ChecksumMismatch,
}

/// Builds the 7-byte command frame: header, command code, two data bytes and
/// the big-endian checksum of the first five bytes.
pub fn command_frame(code: u8, data_high: u8, data_low: u8) -> [u8; CMD_LENGTH] {
    let mut frame = [HEADER[0], HEADER[1], code, data_high, data_low, 0, 0];
    let sum = checksum(&frame[..CMD_LENGTH - 2]).to_be_bytes();
    frame[CMD_LENGTH - 2..].copy_from_slice(&sum);
    frame
}

/// Validates and decodes the 23-byte info frame.
///
/// Checks run in order and stop at the first failure: length, header,
/// device type, checksum.
pub fn decode_info(bytes: &[u8]) -> Result<Apc1Info, FrameError> {
    let frame = take(bytes, INFO_LENGTH)?;
    check_header(frame)?;
    if frame[4..10] != DEVICE_TYPE {
        return Err(FrameError::TypeMismatch);
    }
    check_checksum(frame)?;

    let mut device_type = [0u8; 6];
    device_type.copy_from_slice(&frame[4..10]);
    let mut serial = [0u8; 8];
    serial.copy_from_slice(&frame[10..18]);

    Ok(Apc1Info {
        device_type,
        serial_number: SerialNumber(serial),
    })
}

/// Validates and decodes the 64-byte data frame.
///
/// Nothing is decoded unless both the header and the checksum pass.
pub fn decode_data(bytes: &[u8]) -> Result<Apc1Data, FrameError> {
    let frame = take(bytes, DATA_LENGTH)?;
    check_header(frame)?;
    check_checksum(frame)?;

    Ok(Apc1Data {
        pm1_0: be_u16(frame, 4),
        pm2_5: be_u16(frame, 6),
        pm10: be_u16(frame, 8),
        apm1_0: be_u16(frame, 10),
        apm2_5: be_u16(frame, 12),
        apm10: be_u16(frame, 14),
        count0_3: be_u16(frame, 16),
        count0_5: be_u16(frame, 18),
        count1_0: be_u16(frame, 20),
        count2_5: be_u16(frame, 22),
        count5_0: be_u16(frame, 24),
        count10: be_u16(frame, 26),
        tvoc: be_u16(frame, 28),
        eco2: be_u16(frame, 30),
        // 32..34 reserved
        temperature: be_u16(frame, 34) as i16,
        humidity: be_u16(frame, 36),
        raw_temperature: be_u16(frame, 38) as i16,
        raw_humidity: be_u16(frame, 40),
        hp0: be_u32(frame, 42),
        hp1: be_u32(frame, 46),
        hp2: be_u32(frame, 50),
        hp3: be_u32(frame, 54),
        iaq: frame[58] & 0x0F,
        aqi_index: u16::from(frame[58] >> 4) << 8 | u16::from(frame[59]),
        firmware_version: frame[60],
        error_code: frame[61],
    })
}

fn take(bytes: &[u8], len: usize) -> Result<&[u8], FrameError> {
    bytes.get(..len).ok_or(FrameError::ShortRead)
}

fn check_header(frame: &[u8]) -> Result<(), FrameError> {
    if frame[..2] != HEADER {
        return Err(FrameError::HeaderMismatch);
    }
    Ok(())
}

// The last two bytes hold the big-endian sum of everything before them.
fn check_checksum(frame: &[u8]) -> Result<(), FrameError> {
    let (body, trailer) = frame.split_at(frame.len() - 2);
    if checksum(body) != be_u16(trailer, 0) {
        return Err(FrameError::ChecksumMismatch);
    }
    Ok(())
}

fn be_u16(frame: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([frame[offset], frame[offset + 1]])
}

fn be_u32(frame: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        frame[offset],
        frame[offset + 1],
        frame[offset + 2],
        frame[offset + 3],
    ])
}
