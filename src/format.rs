pub fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Renders an amount held in cents, e.g. `125000` -> `$1,250.00`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}${}.{:02}", format_with_commas(abs / 100), abs % 100)
}

/// Renders a 0..1 completion fraction as a whole percentage.
pub fn format_percent(rate: f64) -> String {
    format!("{}%", (rate.clamp(0.0, 1.0) * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(1234567, "1,234,567")]
    #[case(-5200, "-5,200")]
    fn commas(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(format_with_commas(value), expected);
    }

    #[rstest]
    #[case(0, "$0.00")]
    #[case(5, "$0.05")]
    #[case(125000, "$1,250.00")]
    #[case(-4200, "-$42.00")]
    fn amounts(#[case] cents: i64, #[case] expected: &str) {
        assert_eq!(format_amount(cents), expected);
    }

    #[rstest]
    #[case(0.0, "0%")]
    #[case(0.874, "87%")]
    #[case(1.0, "100%")]
    #[case(1.6, "100%")]
    fn percentages(#[case] rate: f64, #[case] expected: &str) {
        assert_eq!(format_percent(rate), expected);
    }
}
