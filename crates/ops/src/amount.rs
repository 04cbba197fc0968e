/// Truncate (never round) a decimal string to at most `places` fractional
/// digits. Integers pass through unchanged.
pub fn truncate_decimals(amount: &str, places: usize) -> String {
    match amount.split_once('.') {
        Some((int_part, frac_part)) => {
            let kept = &frac_part[..frac_part.len().min(places)];
            if kept.is_empty() {
                int_part.to_string()
            } else {
                format!("{int_part}.{kept}")
            }
        }
        None => amount.to_string(),
    }
}
