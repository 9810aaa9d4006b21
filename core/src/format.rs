use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_SYMBOL: &str = "R$";
const NBSP: char = '\u{a0}';

/// Rounds a value for display: two decimal places, halves away from zero.
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value as Brazilian reais, e.g. `R$ 1.800,00` (the space is a no-break space).
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_for_display(value);
    let negative = rounded < Decimal::ZERO;
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "{}{}{}{},{}",
        if negative { "-" } else { "" },
        CURRENCY_SYMBOL,
        NBSP,
        grouped,
        frac_part
    )
}

/// Parses a user-typed amount, accepting a comma as the decimal separator.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replacen(',', ".", 1);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<Decimal>().ok()
}
