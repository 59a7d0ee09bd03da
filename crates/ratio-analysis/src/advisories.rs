//! Threshold advisory rules over the computed ratio set.

use statement_core::{Advisory, Ratio, Severity};
use tracing::debug;

use crate::ratios::{COST_TO_INCOME, COVERAGE_RATIO, NPL_RATIO};

/// Evaluate the advisory rules in declaration order.
///
/// Rules are independent and non-exclusive; a rule whose ratio is absent is
/// skipped. The result is never empty: with nothing to flag, a single
/// neutral advisory is emitted.
pub fn advise(ratios: &[Ratio]) -> Vec<Advisory> {
    let value = |name: &str| ratios.iter().find(|r| r.name == name).and_then(|r| r.value);

    let cost_to_income = value(COST_TO_INCOME);
    let npl_ratio = value(NPL_RATIO);
    let coverage = value(COVERAGE_RATIO);

    let mut advisories = Vec::new();

    if let Some(ci) = cost_to_income {
        if ci > 0.50 {
            advisories.push(Advisory::new(
                Severity::Warning,
                "High cost-to-income; review operating expenses.",
            ));
        }
    }
    if let Some(ci) = cost_to_income {
        if ci < 0.35 {
            advisories.push(Advisory::new(
                Severity::Positive,
                "Cost-to-income below 35%; strong operating efficiency.",
            ));
        }
    }
    if let Some(npl) = npl_ratio {
        if npl > 0.06 {
            advisories.push(Advisory::new(
                Severity::Warning,
                "NPL ratio elevated; examine credit concentrations.",
            ));
        }
    }
    if let Some(cov) = coverage {
        if cov < 1.00 {
            advisories.push(Advisory::new(
                Severity::Warning,
                "ECL coverage below impaired loans; provisioning looks light.",
            ));
        }
    }

    if advisories.is_empty() {
        advisories.push(Advisory::new(
            Severity::Neutral,
            "Headline ratios look balanced; no threshold flags raised.",
        ));
    }

    debug!(count = advisories.len(), "advisory evaluation complete");
    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(name: &str, value: Option<f64>) -> Ratio {
        Ratio::new(name, "n/d", value)
    }

    #[test]
    fn test_scenario_d_three_warnings_in_rule_order() {
        let ratios = vec![
            ratio(COST_TO_INCOME, Some(0.55)),
            ratio(NPL_RATIO, Some(0.08)),
            ratio(COVERAGE_RATIO, Some(0.9)),
        ];
        let advisories = advise(&ratios);
        assert_eq!(advisories.len(), 3);
        assert!(advisories[0].message.contains("cost-to-income"));
        assert!(advisories[1].message.contains("NPL"));
        assert!(advisories[2].message.contains("coverage"));
        assert!(advisories.iter().all(|a| a.severity == Severity::Warning));
    }

    #[test]
    fn test_strong_efficiency_is_positive() {
        let advisories = advise(&[ratio(COST_TO_INCOME, Some(0.30))]);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].severity, Severity::Positive);
    }

    #[test]
    fn test_absent_ratios_are_skipped_not_errors() {
        // Scenario B tail: rules 3 and 4 must not fire on absent values.
        let ratios = vec![
            ratio(COST_TO_INCOME, Some(0.40)),
            ratio(NPL_RATIO, None),
            ratio(COVERAGE_RATIO, None),
        ];
        let advisories = advise(&ratios);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].severity, Severity::Neutral);
    }

    #[test]
    fn test_never_empty_all_absent_yields_neutral() {
        let ratios = vec![
            ratio(COST_TO_INCOME, None),
            ratio(NPL_RATIO, None),
            ratio(COVERAGE_RATIO, None),
        ];
        let advisories = advise(&ratios);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].severity, Severity::Neutral);

        let advisories = advise(&[]);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].severity, Severity::Neutral);
    }

    #[test]
    fn test_boundary_values_do_not_fire() {
        let ratios = vec![
            ratio(COST_TO_INCOME, Some(0.50)),
            ratio(NPL_RATIO, Some(0.06)),
            ratio(COVERAGE_RATIO, Some(1.00)),
        ];
        let advisories = advise(&ratios);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].severity, Severity::Neutral);
    }
}
