//! Number formatting for rendered reports.

/// Placeholder for any value no source provided.
pub const NOT_AVAILABLE: &str = "N/A";

/// Groups digits in threes with `,`: `30000` → `"30,000"`.
#[must_use]
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

/// Euro amount with thousands separators, or [`NOT_AVAILABLE`].
#[must_use]
pub fn currency(value: Option<u64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("€{}", thousands(v)))
}

/// Any displayable value, or [`NOT_AVAILABLE`].
#[must_use]
pub fn or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}
