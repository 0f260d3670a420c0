//! Number formatting for tables and cards (UK style: `1,234.56`)

/// Format with a comma thousands separator and the given number of decimals
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let formatted = format!("{:.prec$}", value, prec = decimals.min(4) as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" after rounding reads as zero
    let sign = if grouped.chars().all(|c| c == '0') && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0')) {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Two decimals with thousands separator
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Pound sterling amount, `-£1,234.50` for negatives
pub fn format_gbp(value: f64) -> String {
    let body = format_money(value.abs());
    if value < 0.0 && body != "0.00" {
        format!("-£{}", body)
    } else {
        format!("£{}", body)
    }
}

/// Missing amounts render as a dash
pub fn format_gbp_opt(value: Option<f64>) -> String {
    value.map(format_gbp).unwrap_or_else(|| "-".to_string())
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(value, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
        assert_eq!(format_money(999.999), "1,000.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(f64::NAN, 2), "-");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(100.0), "100");
        assert_eq!(format_number_int(-1234.0), "-1,234");
        assert_eq!(format_number_int(-0.4), "0");
    }

    #[test]
    fn test_format_gbp() {
        assert_eq!(format_gbp(48250.0), "£48,250.00");
        assert_eq!(format_gbp(-12.5), "-£12.50");
        assert_eq!(format_gbp(-0.001), "£0.00");
        assert_eq!(format_gbp_opt(None), "-");
        assert_eq!(format_percent(62.5, 1), "62.5%");
    }
}
