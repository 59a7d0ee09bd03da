//! Numeric coercion for display-formatted statement figures.

/// Coerce captured display text (digits with optional thousands separators
/// and decimal point) into a value.
///
/// Only separators are stripped here; parenthesized negatives are the
/// pattern layer's job. Text that does not parse yields `None`; a coercion
/// failure is indistinguishable from a pattern miss downstream. No rounding
/// is applied at this stage.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let value: f64 = cleaned.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
