// format.rs - Number formatting shared by loaders and renderers

/// Integer with comma thousands separators: 1234567 -> "1,234,567"
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Value expressed in millions with a fixed number of decimals
pub fn millions(value: u64, decimals: usize) -> String {
    format!("{:.*}", decimals, value as f64 / 1_000_000.0)
}

/// Shortest float representation that always keeps a decimal point:
/// 99.0 -> "99.0", 12.34 -> "12.34"
pub fn percentage(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Parse a trimmed unsigned integer field
pub fn parse_count(field: &str) -> Result<u64, String> {
    let cleaned = field.trim();
    cleaned
        .parse::<u64>()
        .map_err(|_| format!("Failed to parse '{}' as integer", cleaned))
}
