pub const DEFAULT_CURRENCY_SYMBOL: &str = "C$";
pub const DEFAULT_DECIMALS: u32 = 2;
pub const MAX_DECIMALS: u32 = 6;

/// Formats an amount for display, e.g. `C$ 16,963.33`.
///
/// Rounds half away from zero to `decimals` places and groups the integer
/// part in thousands. `decimals` is capped at `MAX_DECIMALS`.
pub fn format_currency(amount: f64, symbol: &str, decimals: u32) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let factor = 10f64.powi(decimals as i32);
    let rounded = (amount * factor).round() / factor;
    let negative = rounded < 0.0;

    let digits = format!("{:.*}", decimals as usize, rounded.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + symbol.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(symbol);
    out.push(' ');
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

pub fn format_cordobas(amount: f64) -> String {
    format_currency(amount, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMALS)
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
