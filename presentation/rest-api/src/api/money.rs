use bigdecimal::{BigDecimal, RoundingMode};

/// Renders an amount with two decimal places, e.g. `107.70`.
pub fn format_money(value: &BigDecimal) -> String {
    value.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

/// Parses a client-supplied amount; rejects negatives.
pub fn parse_money(value: &str) -> Option<BigDecimal> {
    let parsed = value.trim().replace(',', ".").parse::<BigDecimal>().ok()?;
    if parsed < BigDecimal::from(0) {
        return None;
    }
    Some(parsed)
}
