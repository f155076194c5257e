//! Display Formatting
//!
//! Rounding happens here only; stored values keep full precision.

pub fn format_price(prefix: &str, price: f64) -> String {
    format!("{}{:.2}", prefix, price)
}

pub fn format_accessibility(accessibility: f64) -> String {
    format!("{:.1}", accessibility)
}

pub fn booking_label(booking_required: bool) -> &'static str {
    if booking_required {
        "Booking required"
    } else {
        "No booking needed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("RM", 10.0), "RM10.00");
        assert_eq!(format_price("RM", 0.0), "RM0.00");
        assert_eq!(format_price("RM", 19.999), "RM20.00");
        assert_eq!(format_price("", 3.5), "3.50");
    }

    #[test]
    fn test_format_accessibility() {
        assert_eq!(format_accessibility(0.8), "0.8");
        assert_eq!(format_accessibility(1.0), "1.0");
        assert_eq!(format_accessibility(0.0), "0.0");
    }

    #[test]
    fn test_booking_label() {
        assert_eq!(booking_label(true), "Booking required");
        assert_eq!(booking_label(false), "No booking needed");
    }
}
