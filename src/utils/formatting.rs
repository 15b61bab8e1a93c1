//! Display formatting (de-DE locale) for CLI output.
//! Library data structures carry plain numbers; only the CLI formats.

/// Format an amount as "€1.234,56" (German grouping and decimal comma).
pub fn format_euro(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}€{grouped},{frac:02}")
}

/// Format a ratio already expressed in percent: "46,2%".
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value).replace('.', ",")
}
