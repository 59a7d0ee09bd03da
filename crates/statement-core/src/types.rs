use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A metric reported with current and prior period values adjacent in text,
/// keyed by metric label.
///
/// `prior` is populated only when the pattern's second capture slot matched;
/// an unmatched slot is `None`, never a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualPeriodFact {
    pub label: String,
    pub current: Option<f64>,
    pub prior: Option<f64>,
}

/// A metric tracked for the current period only, keyed by metric label.
/// A prior-period duplicate in the source text, if any, is matched but not
/// tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinglePeriodFact {
    pub label: String,
    pub value: Option<f64>,
}

/// The full extraction result for one document.
///
/// Covers exactly the labels declared in the pattern library, in declaration
/// order. A label whose pattern did not match is still present, with absent
/// values. Created fresh per extraction call, immutable afterward. `Option`
/// fields serialize as explicit nulls so a renderer can distinguish
/// "Not Found" from an actual zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactTable {
    pub dual: Vec<DualPeriodFact>,
    pub single: Vec<SinglePeriodFact>,
}

impl FactTable {
    /// Current-period value of a dual-period metric.
    pub fn current(&self, label: &str) -> Option<f64> {
        self.dual
            .iter()
            .find(|e| e.label == label)
            .and_then(|e| e.current)
    }

    /// Prior-period value of a dual-period metric.
    pub fn prior(&self, label: &str) -> Option<f64> {
        self.dual
            .iter()
            .find(|e| e.label == label)
            .and_then(|e| e.prior)
    }

    /// Value of a single-period metric.
    pub fn single(&self, label: &str) -> Option<f64> {
        self.single
            .iter()
            .find(|e| e.label == label)
            .and_then(|e| e.value)
    }

    /// Total number of labels covered (dual + single).
    pub fn len(&self) -> usize {
        self.dual.len() + self.single.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dual.is_empty() && self.single.is_empty()
    }
}

/// A named financial ratio derived from the fact table.
///
/// `value` is `None` whenever the computation was not well-defined (missing
/// operand or zero/absent denominator). The formula is kept alongside the
/// value for transparency, even when the value is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    pub name: String,
    pub formula: String,
    pub value: Option<f64>,
}

impl Ratio {
    pub fn new(name: &str, formula: &str, value: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            formula: formula.to_string(),
            value,
        }
    }
}

/// Advisory severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Positive,
    Neutral,
}

impl Severity {
    /// Human-readable label for the severity
    pub fn to_label(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Positive => "Positive",
            Severity::Neutral => "Neutral",
        }
    }
}

/// A threshold-triggered, human-readable flag derived from one ratio.
///
/// Advisories have no identity of their own; they are recomputed from the
/// ratio set every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub severity: Severity,
    pub message: String,
}

impl Advisory {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Complete analysis of one statement document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementAnalysis {
    pub timestamp: DateTime<Utc>,
    pub facts: FactTable,
    pub ratios: Vec<Ratio>,
    pub advisories: Vec<Advisory>,
    /// Plain label/value lines handed to the LLM as grounding context.
    pub context: String,
}

/// Format a ratio value as a percentage, e.g. `40.00%`; absent values
/// render as `N/A`.
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "N/A".to_string(),
    }
}

/// Format a monetary amount with thousands separators and two decimals;
/// absent values render as `N/A`.
pub fn format_amount(value: Option<f64>) -> String {
    let Some(v) = value else {
        return "N/A".to_string();
    };
    let negative = v < 0.0;
    let rounded = format!("{:.2}", v.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();
    if negative {
        format!("-{int_grouped}.{frac_part}")
    } else {
        format!("{int_grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(Some(0.4)), "40.00%");
        assert_eq!(format_pct(Some(0.0612)), "6.12%");
        assert_eq!(format_pct(None), "N/A");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(Some(1234567.5)), "1,234,567.50");
        assert_eq!(format_amount(Some(400.0)), "400.00");
        assert_eq!(format_amount(Some(-1200.0)), "-1,200.00");
        assert_eq!(format_amount(None), "N/A");
    }

    #[test]
    fn test_fact_table_lookup_distinguishes_families() {
        let table = FactTable {
            dual: vec![DualPeriodFact {
                label: "Total Operating Income".to_string(),
                current: Some(1000.0),
                prior: None,
            }],
            single: vec![SinglePeriodFact {
                label: "Gross Loans".to_string(),
                value: Some(10_000.0),
            }],
        };
        assert_eq!(table.current("Total Operating Income"), Some(1000.0));
        assert_eq!(table.prior("Total Operating Income"), None);
        assert_eq!(table.single("Gross Loans"), Some(10_000.0));
        assert_eq!(table.single("Total Operating Income"), None);
        assert_eq!(table.len(), 2);
    }
}
