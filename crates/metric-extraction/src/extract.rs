//! Metric extraction engine.

use statement_core::{labels, AnalysisError, DualPeriodFact, FactTable, SinglePeriodFact};
use tracing::debug;

use crate::numeric::parse_amount;
use crate::patterns::LIBRARY;

/// Extract the full fact table from a flattened statement text stream.
///
/// Each pattern is searched independently over the whole text with no shared
/// cursor, so a label binds to its first matching occurrence regardless of
/// the others. Every declared label produces an entry: a pattern miss or a
/// coercion failure records absence for that label and extraction carries
/// on. The single failure mode is a document with no text at all, which must
/// not be conflated with a document where nothing matched.
pub fn extract(text: &str) -> Result<FactTable, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyDocument);
    }

    let lib = &*LIBRARY;

    let mut dual = Vec::with_capacity(lib.dual.len());
    for pat in &lib.dual {
        let caps = pat.regex().captures(text);
        let current = caps
            .as_ref()
            .and_then(|c| c.get(1))
            .and_then(|m| parse_amount(m.as_str()));
        let prior = caps
            .as_ref()
            .and_then(|c| c.get(2))
            .and_then(|m| parse_amount(m.as_str()));
        dual.push(DualPeriodFact {
            label: pat.label.to_string(),
            current,
            prior,
        });
    }

    let mut single = Vec::with_capacity(lib.single.len() + 1);
    for pat in &lib.single {
        let value = pat
            .regex()
            .captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| parse_amount(m.as_str()));
        single.push(SinglePeriodFact {
            label: pat.label.to_string(),
            value,
        });
    }

    // Total Assets comes out of the segment-reporting block via the
    // anchor-pair branch rather than the uniform record loop.
    let total_assets = lib
        .total_assets
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| parse_amount(m.as_str()));
    single.push(SinglePeriodFact {
        label: labels::TOTAL_ASSETS.to_string(),
        value: total_assets,
    });

    let table = FactTable { dual, single };
    let matched = table.dual.iter().filter(|e| e.current.is_some()).count()
        + table.single.iter().filter(|e| e.value.is_some()).count();
    debug!(
        labels = table.len(),
        matched,
        chars = text.len(),
        "extraction complete"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Condensed statement text in the layout the patterns were written
    /// against: income statement lines with two period columns, loan-book
    /// notes with a discarded prior column, and a segment-reporting block.
    const SAMPLE: &str = "\
Group income statement
Net fee and commission income   1,200   1,150
Net trading income   310   280
Other operating income   150   140
Net gain on foreign exchange and derivatives   420   390
Total operating income   1,000   900
General and administrative expenses   (400)   (380)
Operating profit before impairment   600   520
Profit for the period before taxation   560   489
Taxation charge   (51)   (44)
Profit for the period   509   445
Earnings per share (AED)   1.20   1.05

Notes to the financial statements
Gross loans and receivables   10,000   9,400
Less: Expected credit losses   (620)   (590)
Total of credit impaired loans and receivables   680   640

Segment reporting
Segment Assets
120,500 80,200
699,800
Segment Liabilities
610,200
";

    #[test]
    fn test_scenario_a_dual_extraction() {
        let table = extract(SAMPLE).unwrap();
        assert_eq!(table.current("Total Operating Income"), Some(1000.0));
        assert_eq!(table.prior("Total Operating Income"), Some(900.0));
        assert_eq!(table.current("General and Administrative Expenses"), Some(400.0));
        assert_eq!(table.prior("General and Administrative Expenses"), Some(380.0));
    }

    #[test]
    fn test_profit_lines_do_not_cross_bind() {
        // "Profit for the period" must not bind to the earlier
        // "Profit for the period before taxation" line.
        let table = extract(SAMPLE).unwrap();
        assert_eq!(table.current("Profit Before Tax"), Some(560.0));
        assert_eq!(table.current("Profit for the Period"), Some(509.0));
    }

    #[test]
    fn test_single_family_discards_prior_column() {
        let table = extract(SAMPLE).unwrap();
        assert_eq!(table.single("Gross Loans"), Some(10_000.0));
        assert_eq!(table.single("Expected Credit Losses"), Some(620.0));
        assert_eq!(table.single("Credit-Impaired Loans"), Some(680.0));
    }

    #[test]
    fn test_total_assets_from_segment_block() {
        let table = extract(SAMPLE).unwrap();
        assert_eq!(table.single("Total Assets"), Some(699_800.0));
    }

    #[test]
    fn test_eps_decimals() {
        let table = extract(SAMPLE).unwrap();
        assert_eq!(table.current("Earnings Per Share (AED)"), Some(1.20));
        assert_eq!(table.prior("Earnings Per Share (AED)"), Some(1.05));
    }

    #[test]
    fn test_totality_every_label_has_an_entry() {
        let table = extract("no statement lines in here at all").unwrap();
        assert_eq!(table.len(), LIBRARY.len());
        assert!(table.dual.iter().all(|e| e.current.is_none() && e.prior.is_none()));
        assert!(table.single.iter().all(|e| e.value.is_none()));
    }

    #[test]
    fn test_idempotence() {
        let first = extract(SAMPLE).unwrap();
        let second = extract(SAMPLE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "Total operating income 1,000 900\nTotal operating income 5,000 4,000";
        let table = extract(text).unwrap();
        assert_eq!(table.current("Total Operating Income"), Some(1000.0));
    }

    #[test]
    fn test_missing_prior_slot_leaves_prior_absent() {
        let text = "Earnings per share (AED) 1.20\nsome trailing narrative";
        let table = extract(text).unwrap();
        assert_eq!(table.current("Earnings Per Share (AED)"), Some(1.20));
        assert_eq!(table.prior("Earnings Per Share (AED)"), None);
    }

    #[test]
    fn test_coercion_failure_is_absence() {
        // A separator-only token matches the amount class but cannot coerce.
        let text = "Total operating income ,, 900";
        let table = extract(text).unwrap();
        assert_eq!(table.current("Total Operating Income"), None);
        assert_eq!(table.prior("Total Operating Income"), Some(900.0));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(matches!(extract(""), Err(AnalysisError::EmptyDocument)));
        assert!(matches!(extract("   \n\t  "), Err(AnalysisError::EmptyDocument)));
    }
}
