/// Human-friendly quantity: `5`, `2.5`, `0.333333`.
///
/// Whole numbers print without decimals; others keep at most six
/// fractional digits, trailing zeros removed.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        return format!("{}", quantity as i64);
    }
    let fixed = format!("{quantity:.6}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_decimals() {
        assert_eq!(format_quantity(5.0), "5");
        assert_eq!(format_quantity(250.0), "250");
    }

    #[test]
    fn fractions_are_trimmed() {
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(0.1 + 0.2), "0.3");
        assert_eq!(format_quantity(1.0 / 3.0), "0.333333");
    }
}
