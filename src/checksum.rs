/// 16-bit additive checksum used by every APC1 frame: the sum of all bytes,
/// truncated to 16 bits.
pub(crate) fn checksum(data: &[u8]) -> u16 {
    data.iter()
        .copied()
        .fold(0u16, |sum, byte| sum.wrapping_add(u16::from(byte)))
}

#[cfg(test)]
mod tests {
    use super::checksum;

    #[test]
    fn example() {
        assert_eq!(checksum(&[0x42, 0x4d, 0xe9, 0x00, 0x00]), 0x0178);
    }

    #[test]
    fn empty() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn wraps_at_16_bits() {
        assert_eq!(checksum(&[0xff; 258]), 0x00fe);
    }
}
