//! Bit-field primitives for AIS message composition
//!
//! Every primitive produces a `String` of `0`/`1` characters, most
//! significant bit first, exactly as wide as the target field.

use crate::error::{EncodeError, Result};

/// Fixed-width bit-field formatter
pub struct BitField;

impl BitField {
    /// Format a non-negative integer as a zero-padded binary string of
    /// exactly `width` bits
    ///
    /// Values that do not fit in `width` bits are rejected rather than
    /// truncated, so a corrupt-but-plausible bit string can never escape.
    pub fn unsigned(value: u64, width: usize) -> Result<String> {
        if width < 64 && (value >> width) != 0 {
            return Err(EncodeError::field_overflow(format!(
                "Value {} does not fit in {} bits",
                value, width
            )));
        }
        Ok(format!("{:0>width$b}", value, width = width))
    }

    /// Encode a signed value as scaled fixed-point two's complement
    ///
    /// Computes `round(value * scale)` and reduces it modulo `2^width`.
    /// Used for latitude/longitude: scale 600000 at 27/28 bits for the
    /// standard 1/10000-minute resolution, scale 600 at 17/18 bits for the
    /// short 0.01-minute form.
    pub fn signed_fixed_point(value: f64, scale: f64, width: usize) -> Result<String> {
        let scaled = (value * scale).round() as i64;
        let half = 1i64 << (width - 1);
        if scaled < -half || scaled >= half {
            return Err(EncodeError::value_out_of_range(format!(
                "Scaled value {} exceeds signed {}-bit range",
                scaled, width
            )));
        }
        let mask = (1u64 << width) - 1;
        Ok(format!(
            "{:0>width$b}",
            (scaled as u64) & mask,
            width = width
        ))
    }

    /// Encode a scaled unsigned value, or a sentinel when out of domain
    ///
    /// When `0 <= value < limit` the field carries `round(value * scale)`,
    /// otherwise the fixed `sentinel` pattern meaning "not available".
    pub fn scaled_or_sentinel(
        value: f64,
        limit: f64,
        scale: f64,
        width: usize,
        sentinel: u64,
    ) -> Result<String> {
        if value >= 0.0 && value < limit {
            Self::unsigned((value * scale).round() as u64, width)
        } else {
            Self::unsigned(sentinel, width)
        }
    }

    /// Encode vessel dimensions with the antenna at the geometric center
    ///
    /// Emits half-length twice at 9 bits and half-beam twice at 6 bits,
    /// each rounded up, for the 30-bit dimension field.
    pub fn half_dimensions(length: u16, beam: u16) -> Result<String> {
        let half_length = Self::unsigned(u64::from(length).div_ceil(2), 9)?;
        let half_beam = Self::unsigned(u64::from(beam).div_ceil(2), 6)?;
        Ok(format!(
            "{hl}{hl}{hb}{hb}",
            hl = half_length,
            hb = half_beam
        ))
    }

    /// Encode a position at 1/10000-minute resolution
    ///
    /// Returns `(latitude, longitude)` at 27 and 28 bits.
    pub fn position(lat: f64, lon: f64) -> Result<(String, String)> {
        Ok((
            Self::signed_fixed_point(lat, crate::itu::POSITION_SCALE, crate::itu::LAT_BITS)?,
            Self::signed_fixed_point(lon, crate::itu::POSITION_SCALE, crate::itu::LON_BITS)?,
        ))
    }

    /// Encode a position at 0.01-minute resolution
    ///
    /// Returns `(latitude, longitude)` at 17 and 18 bits, used by the
    /// channel-management, group-assignment and long-range layouts.
    pub fn position_short(lat: f64, lon: f64) -> Result<(String, String)> {
        Ok((
            Self::signed_fixed_point(
                lat,
                crate::itu::POSITION_SCALE_SHORT,
                crate::itu::LAT_SHORT_BITS,
            )?,
            Self::signed_fixed_point(
                lon,
                crate::itu::POSITION_SCALE_SHORT,
                crate::itu::LON_SHORT_BITS,
            )?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_padding() -> Result<()> {
        assert_eq!(BitField::unsigned(1, 6)?, "000001");
        assert_eq!(BitField::unsigned(3, 2)?, "11");
        assert_eq!(BitField::unsigned(0, 4)?, "0000");
        assert_eq!(BitField::unsigned(1023, 10)?, "1111111111");
        Ok(())
    }

    #[test]
    fn test_unsigned_overflow() {
        assert!(BitField::unsigned(4, 2).is_err());
        assert!(BitField::unsigned(1 << 30, 30).is_err());
        assert!(BitField::unsigned((1 << 30) - 1, 30).is_ok());
    }

    #[test]
    fn test_signed_fixed_point_positive() -> Result<()> {
        // 48.0 degrees * 600000 = 28_800_000
        let bits = BitField::signed_fixed_point(48.0, 600_000.0, 27)?;
        assert_eq!(bits.len(), 27);
        assert_eq!(u64::from_str_radix(&bits, 2).unwrap(), 28_800_000);
        Ok(())
    }

    #[test]
    fn test_signed_fixed_point_negative() -> Result<()> {
        // -90.0 degrees in two's complement at 27 bits
        let bits = BitField::signed_fixed_point(-90.0, 600_000.0, 27)?;
        let raw = u64::from_str_radix(&bits, 2).unwrap();
        assert_eq!(raw, (1u64 << 27) - 54_000_000);
        Ok(())
    }

    #[test]
    fn test_signed_fixed_point_boundaries() -> Result<()> {
        for &(value, width) in &[(90.0, 27), (-90.0, 27)] {
            let bits = BitField::signed_fixed_point(value, 600_000.0, width)?;
            let raw = i64::from_str_radix(&bits, 2).unwrap();
            let decoded = if raw >= 1 << (width - 1) {
                raw - (1 << width)
            } else {
                raw
            };
            assert_eq!(decoded as f64 / 600_000.0, value);
        }
        for &(value, width) in &[(180.0, 28), (-180.0, 28)] {
            let bits = BitField::signed_fixed_point(value, 600_000.0, width)?;
            let raw = i64::from_str_radix(&bits, 2).unwrap();
            let decoded = if raw >= 1 << (width - 1) {
                raw - (1 << width)
            } else {
                raw
            };
            assert_eq!(decoded as f64 / 600_000.0, value);
        }
        Ok(())
    }

    #[test]
    fn test_signed_fixed_point_out_of_range() {
        assert!(BitField::signed_fixed_point(300.0, 600_000.0, 27).is_err());
    }

    #[test]
    fn test_speed_sentinel() -> Result<()> {
        // Speed over ground: 0.1-knot resolution, 1023 = not available
        assert_eq!(
            BitField::scaled_or_sentinel(102.2, 102.2, 10.0, 10, 1023)?,
            "1111111111"
        );
        assert_eq!(
            BitField::scaled_or_sentinel(-1.0, 102.2, 10.0, 10, 1023)?,
            "1111111111"
        );
        assert_eq!(
            BitField::scaled_or_sentinel(0.0, 102.2, 10.0, 10, 1023)?,
            "0000000000"
        );
        Ok(())
    }

    #[test]
    fn test_course_sentinel() -> Result<()> {
        // Course over ground: 0.1-degree resolution, 3600 = not available
        assert_eq!(
            BitField::scaled_or_sentinel(360.0, 360.0, 10.0, 12, 3600)?,
            "111000010000"
        );
        let bits = BitField::scaled_or_sentinel(83.4, 360.0, 10.0, 12, 3600)?;
        assert_eq!(u64::from_str_radix(&bits, 2).unwrap(), 834);
        Ok(())
    }

    #[test]
    fn test_half_dimensions_rounding() -> Result<()> {
        // Odd dimensions round up
        let bits = BitField::half_dimensions(91, 15)?;
        assert_eq!(bits.len(), 30);
        assert_eq!(u64::from_str_radix(&bits[0..9], 2).unwrap(), 46);
        assert_eq!(&bits[0..9], &bits[9..18]);
        assert_eq!(u64::from_str_radix(&bits[18..24], 2).unwrap(), 8);
        assert_eq!(&bits[18..24], &bits[24..30]);
        Ok(())
    }

    #[test]
    fn test_position_widths() -> Result<()> {
        let (lat, lon) = BitField::position(48.0, 10.0)?;
        assert_eq!(lat.len(), 27);
        assert_eq!(lon.len(), 28);

        let (lat, lon) = BitField::position_short(48.0, 10.0)?;
        assert_eq!(lat.len(), 17);
        assert_eq!(lon.len(), 18);
        Ok(())
    }
}
