/// Renders the final value for display.
///
/// Values whose shortest decimal form has more than `precision` fractional
/// digits are rounded to `precision` places. Whole values are printed without
/// a decimal point and negative zero is printed as `0`.
pub fn format_result(value: f64, precision: usize) -> String {
    let shortest = value.to_string();
    let value = match shortest.split_once('.') {
        Some((_, fraction)) if fraction.len() > precision => {
            format!("{:.*}", precision, value).parse::<f64>().unwrap_or(value)
        }
        _ => value,
    };

    // -0.0 == 0.0
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
