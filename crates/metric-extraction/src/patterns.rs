//! Declarative pattern library for statement line items.
//!
//! Each record names a metric label, the phrase the statement prints for it,
//! how many numeric capture slots to expect and how the figure is signed.
//! Records are compiled into regexes once, process-wide; the library is
//! read-only after initialization and safe to share across concurrent
//! callers without locking.

use lazy_static::lazy_static;
use regex::Regex;
use statement_core::labels;

/// Number of numeric capture slots a pattern expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCount {
    /// Current and prior period values adjacent in text.
    Dual,
    /// Current period only; an adjacent prior-period duplicate is matched
    /// but discarded.
    Single,
}

/// How the statement prints the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignConvention {
    Plain,
    /// Expenses, charges and deductions are parenthesized; the parens are
    /// matched but only the digits are captured.
    Parenthesized,
}

/// Shape of the numeric token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Thousands-grouped amount, e.g. `12,345`.
    Amount,
    /// Per-share decimal, e.g. `1.25`.
    PerShare,
}

/// One compiled pattern record.
#[derive(Debug)]
pub struct MetricPattern {
    pub label: &'static str,
    pub slots: SlotCount,
    pub sign: SignConvention,
    pub token: TokenClass,
    regex: Regex,
}

impl MetricPattern {
    fn new(
        label: &'static str,
        phrase: &'static str,
        slots: SlotCount,
        sign: SignConvention,
        token: TokenClass,
    ) -> Self {
        let tok = match token {
            TokenClass::Amount => r"[\d,]+",
            TokenClass::PerShare => r"[\d.]+",
        };
        let captured = match sign {
            SignConvention::Plain => format!(r"\s+({tok})"),
            SignConvention::Parenthesized => format!(r"\s+\(({tok})\)"),
        };
        let ignored = match sign {
            SignConvention::Plain => format!(r"(?:\s+{tok})?"),
            SignConvention::Parenthesized => format!(r"(?:\s+\({tok}\))?"),
        };

        // Phrase words may be separated by arbitrary whitespace, including
        // line breaks introduced by the page flattener.
        let phrase_re = phrase
            .split_whitespace()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s+");

        let pattern = match slots {
            SlotCount::Dual => format!(r"(?i){phrase_re}{captured}(?:{captured})?"),
            SlotCount::Single => format!(r"(?i){phrase_re}{captured}{ignored}"),
        };

        Self {
            label,
            slots,
            sign,
            token,
            regex: Regex::new(&pattern).expect("pattern record must compile"),
        }
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// The full set of declared patterns, split by capture family.
#[derive(Debug)]
pub struct PatternLibrary {
    pub dual: Vec<MetricPattern>,
    pub single: Vec<MetricPattern>,
    /// Anchor-pair strategy for Total Assets: the figure sits inside the
    /// segment-reporting block, so it is located between "Segment Assets"
    /// and "Segment Liabilities" rather than after its own label. First
    /// grouped figure before the second anchor wins. Written against one
    /// statement format; known to be fragile on other segment layouts.
    pub total_assets: Regex,
}

impl PatternLibrary {
    fn build() -> Self {
        use SignConvention::{Parenthesized, Plain};
        use SlotCount::{Dual, Single};
        use TokenClass::{Amount, PerShare};

        let dual = vec![
            MetricPattern::new(
                labels::TOTAL_OPERATING_INCOME,
                "Total operating income",
                Dual,
                Plain,
                Amount,
            ),
            MetricPattern::new(
                labels::GA_EXPENSES,
                "General and administrative expenses",
                Dual,
                Parenthesized,
                Amount,
            ),
            MetricPattern::new(
                labels::OPERATING_PROFIT_BEFORE_IMPAIRMENT,
                "Operating profit before impairment",
                Dual,
                Plain,
                Amount,
            ),
            MetricPattern::new(
                labels::PROFIT_BEFORE_TAX,
                "Profit for the period before taxation",
                Dual,
                Plain,
                Amount,
            ),
            MetricPattern::new(
                labels::TAXATION_CHARGE,
                "Taxation charge",
                Dual,
                Parenthesized,
                Amount,
            ),
            MetricPattern::new(
                labels::PROFIT_FOR_PERIOD,
                "Profit for the period",
                Dual,
                Plain,
                Amount,
            ),
            MetricPattern::new(
                labels::NET_FEES_COMMISSION,
                "Net fee and commission income",
                Dual,
                Plain,
                Amount,
            ),
            MetricPattern::new(
                labels::FX_DERIVATIVE_INCOME,
                "Net gain on foreign exchange and derivatives",
                Dual,
                Plain,
                Amount,
            ),
            MetricPattern::new(
                labels::TRADING_GAIN,
                "Net trading income",
                Dual,
                Plain,
                Amount,
            ),
            MetricPattern::new(
                labels::OTHER_OPERATING_INCOME,
                "Other operating income",
                Dual,
                Plain,
                Amount,
            ),
            MetricPattern::new(
                labels::EARNINGS_PER_SHARE,
                "Earnings per share (AED)",
                Dual,
                Plain,
                PerShare,
            ),
        ];

        let single = vec![
            MetricPattern::new(
                labels::GROSS_LOANS,
                "Gross loans and receivables",
                Single,
                Plain,
                Amount,
            ),
            MetricPattern::new(
                labels::EXPECTED_CREDIT_LOSSES,
                "Less: Expected credit losses",
                Single,
                Parenthesized,
                Amount,
            ),
            MetricPattern::new(
                labels::CREDIT_IMPAIRED_LOANS,
                "Total of credit impaired loans and receivables",
                Single,
                Plain,
                Amount,
            ),
        ];

        let total_assets =
            Regex::new(r"(?i)Segment Assets[\s\S]*?(\d{1,3}(?:,\d{3})+)\s*\n\s*Segment Liabilities")
                .expect("anchor pattern must compile");

        let library = Self {
            dual,
            single,
            total_assets,
        };
        library.assert_unique_labels();
        library
    }

    /// Total number of declared labels, anchor branch included.
    pub fn len(&self) -> usize {
        self.dual.len() + self.single.len() + 1
    }

    fn assert_unique_labels(&self) {
        let mut seen = Vec::new();
        for pat in self.dual.iter().chain(self.single.iter()) {
            assert!(
                !seen.contains(&pat.label),
                "duplicate metric label: {}",
                pat.label
            );
            seen.push(pat.label);
        }
        assert!(!seen.contains(&labels::TOTAL_ASSETS));
    }
}

lazy_static! {
    /// Process-wide, load-once pattern library.
    pub static ref LIBRARY: PatternLibrary = PatternLibrary::build();
}
