//! Value annotation formats

/// How a bar's value is printed above it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Fixed number of decimal places
    Decimals(usize),
    /// Rounded to a whole number with `,` thousands separators
    Thousands,
}

impl ValueFormat {
    /// Format a value
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Decimals(places) => format!("{:.*}", places, value),
            ValueFormat::Thousands => group_thousands(value),
        }
    }
}

fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value.is_sign_negative() && digits.bytes().any(|b| b != b'0') {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
