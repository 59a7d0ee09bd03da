//! LLM context builder.

use statement_core::{format_pct, FactTable, Ratio};

fn token(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "absent".to_string(),
    }
}

/// Serialize the fact table and ratio set as plain label/value lines.
///
/// Every declared label appears, in the fact table's (library) order, with
/// an explicit absence marker; the consumer must be able to tell "not
/// found" from a reported zero, and the enumeration must be stable and
/// complete across calls.
pub fn metrics_to_context(facts: &FactTable, ratios: &[Ratio]) -> String {
    let mut lines = vec!["Key metrics & ratios:".to_string()];

    for entry in &facts.dual {
        lines.push(format!(
            "{}: current={}, prior={}",
            entry.label,
            token(entry.current),
            token(entry.prior)
        ));
    }
    for entry in &facts.single {
        lines.push(format!("{}: {}", entry.label, token(entry.value)));
    }

    lines.push("Ratios:".to_string());
    for ratio in ratios {
        lines.push(format!("{}: {}", ratio.name, format_pct(ratio.value)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use statement_core::{DualPeriodFact, SinglePeriodFact};

    fn sample_facts() -> FactTable {
        FactTable {
            dual: vec![
                DualPeriodFact {
                    label: "Total Operating Income".to_string(),
                    current: Some(1000.0),
                    prior: Some(900.0),
                },
                DualPeriodFact {
                    label: "Earnings Per Share (AED)".to_string(),
                    current: Some(1.2),
                    prior: None,
                },
            ],
            single: vec![SinglePeriodFact {
                label: "Gross Loans".to_string(),
                value: None,
            }],
        }
    }

    #[test]
    fn test_context_lists_every_label_with_absence_markers() {
        let ratios = vec![
            Ratio::new("Cost-to-Income", "n/d", Some(0.4)),
            Ratio::new("NPL Ratio", "n/d", None),
        ];
        let context = metrics_to_context(&sample_facts(), &ratios);
        let lines: Vec<&str> = context.lines().collect();

        assert_eq!(lines[0], "Key metrics & ratios:");
        assert_eq!(lines[1], "Total Operating Income: current=1000, prior=900");
        assert_eq!(lines[2], "Earnings Per Share (AED): current=1.2, prior=absent");
        assert_eq!(lines[3], "Gross Loans: absent");
        assert_eq!(lines[4], "Ratios:");
        assert_eq!(lines[5], "Cost-to-Income: 40.00%");
        assert_eq!(lines[6], "NPL Ratio: N/A");
    }

    #[test]
    fn test_context_order_is_stable() {
        let facts = sample_facts();
        let ratios = vec![Ratio::new("Cost-to-Income", "n/d", Some(0.4))];
        assert_eq!(
            metrics_to_context(&facts, &ratios),
            metrics_to_context(&facts, &ratios)
        );
    }
}
