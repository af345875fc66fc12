//! Byte-size formatting

/// Units in ascending powers of 1024
const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with the default two decimal places
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with(bytes, 2)
}

/// Format a byte count against the largest base-1024 unit that keeps the
/// scaled value below 1024. Trailing zeros after rounding are trimmed, so
/// 1024 renders as `1 KB` and 1536 as `1.5 KB`. Zero is special-cased to
/// `0 Bytes` to avoid the logarithm.
pub fn format_bytes_with(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut rendered = format!("{scaled:.decimals$}");
    if rendered.contains('.') {
        rendered.truncate(rendered.trim_end_matches('0').trim_end_matches('.').len());
    }

    format!("{rendered} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_special_cased() {
        assert_eq!(format_bytes(0), "0 Bytes");
    }

    #[test]
    fn test_sub_kilobyte_counts() {
        assert_eq!(format_bytes(1), "1 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1023), "1023 Bytes");
    }

    #[test]
    fn test_exact_unit_boundaries() {
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1 GB");
        assert_eq!(format_bytes(1024_u64.pow(4)), "1 TB");
    }

    #[test]
    fn test_fractional_values_are_trimmed() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1126), "1.1 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024 + 256 * 1024), "5.25 MB");
    }

    #[test]
    fn test_custom_decimals() {
        assert_eq!(format_bytes_with(1126, 0), "1 KB");
        assert_eq!(format_bytes_with(1126, 3), "1.1 KB");
        assert_eq!(format_bytes_with(1234567, 3), "1.177 MB");
    }

    #[test]
    fn test_rescaling_reconstructs_within_tolerance() {
        for &bytes in &[1_u64, 999, 1024, 4096, 123_456_789, 9_876_543_210] {
            let rendered = format_bytes(bytes);
            let mut parts = rendered.split(' ');
            let value: f64 = parts.next().unwrap().parse().unwrap();
            let unit = parts.next().unwrap();
            let exponent = UNITS.iter().position(|u| *u == unit).unwrap() as i32;

            assert!(value < 1024.0, "{rendered} is not scaled far enough");
            let reconstructed = value * 1024_f64.powi(exponent);
            let tolerance = 0.005 * 1024_f64.powi(exponent) + 0.5;
            assert!(
                (reconstructed - bytes as f64).abs() <= tolerance,
                "{rendered} does not reconstruct {bytes}"
            );
        }
    }
}
