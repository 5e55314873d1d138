const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with binary (1024-based) units.
///
/// Picks the largest unit for which the value is >= 1 and prints one
/// decimal place once the unit-relative value reaches 10, two below that.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let decimals = if value >= 10.0 { 1 } else { 2 };
    format!("{value:.decimals$} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_bytes(0), "0 B");
    }

    #[test]
    fn test_unit_selection() {
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(10 * 1024 * 1024), "10.0 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_decimal_threshold() {
        // One decimal from 10 upward in the chosen unit, two below
        assert_eq!(format_bytes(512), "512.0 B");
        assert_eq!(format_bytes(5 * 1024), "5.00 KB");
        assert_eq!(format_bytes(10 * 1024), "10.0 KB");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_bytes(1023), "1023.0 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MB");
    }
}
