use crate::frame::FrameError;

/// Errors returned by the APC1 driver.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum Error<E> {
    /// The I2C transaction failed.
    #[cfg_attr(feature = "thiserror", error("I2C bus error: {0:?}"))]
    I2c(E),
    /// The frame did not start with the `0x42 0x4D` header.
    #[cfg_attr(feature = "thiserror", error("no frame header detected"))]
    NoHeader,
    /// The info frame carried a device type other than `APC1-I`.
    #[cfg_attr(feature = "thiserror", error("wrong device type"))]
    WrongDeviceType,
    /// The frame checksum did not match its contents.
    #[cfg_attr(feature = "thiserror", error("frame checksum error"))]
    Checksum,
    /// Fewer bytes than a full frame were available.
    #[cfg_attr(feature = "thiserror", error("short read"))]
    ShortRead,
}

impl<E> From<FrameError> for Error<E> {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::ShortRead => Error::ShortRead,
            FrameError::HeaderMismatch => Error::NoHeader,
            FrameError::TypeMismatch => Error::WrongDeviceType,
            FrameError::ChecksumMismatch => Error::Checksum,
        }
    }
}
