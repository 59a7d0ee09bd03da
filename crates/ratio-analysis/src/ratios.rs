//! Ratio computation over an extracted fact table.

use statement_core::{labels, FactTable, Ratio};
use tracing::debug;

pub const COST_TO_INCOME: &str = "Cost-to-Income";
pub const NET_PROFIT_MARGIN: &str = "Net Profit Margin";
pub const PRE_IMPAIRMENT_MARGIN: &str = "Pre-Impairment Operating Margin";
pub const FEE_INCOME_MIX: &str = "Fee Income Mix";
pub const MARKETS_OTHER_MIX: &str = "Markets & Other Income Mix";
pub const NPL_RATIO: &str = "NPL Ratio";
pub const COVERAGE_RATIO: &str = "Coverage Ratio";
pub const ECL_TO_GROSS_LOANS: &str = "ECL / Gross Loans";
pub const EFFECTIVE_TAX_RATE: &str = "Effective Tax Rate";
pub const ROA: &str = "ROA (period, approximate)";
pub const EPS_YOY_CHANGE: &str = "EPS Year-over-Year Change";

/// Null-safe division: defined iff both operands are present and the
/// denominator is non-zero. Defined values are rounded to 4 decimal places;
/// everything else is absent, never an arithmetic error.
pub fn safe_div(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(round4(n / d)),
        _ => None,
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Compute the fixed ratio set from current-period values (prior-period
/// values feed only the EPS year-over-year change). Every ratio appears in
/// the output with its formula intact even when its value is absent.
pub fn compute(facts: &FactTable) -> Vec<Ratio> {
    let toi = facts.current(labels::TOTAL_OPERATING_INCOME);
    let ga = facts.current(labels::GA_EXPENSES);
    let opb = facts.current(labels::OPERATING_PROFIT_BEFORE_IMPAIRMENT);
    let pbt = facts.current(labels::PROFIT_BEFORE_TAX);
    let tax = facts.current(labels::TAXATION_CHARGE);
    let pat = facts.current(labels::PROFIT_FOR_PERIOD);
    let fees = facts.current(labels::NET_FEES_COMMISSION);
    let fx = facts.current(labels::FX_DERIVATIVE_INCOME);
    let trading = facts.current(labels::TRADING_GAIN);
    let other = facts.current(labels::OTHER_OPERATING_INCOME);
    let eps_current = facts.current(labels::EARNINGS_PER_SHARE);
    let eps_prior = facts.prior(labels::EARNINGS_PER_SHARE);

    let gross = facts.single(labels::GROSS_LOANS);
    let ecl = facts.single(labels::EXPECTED_CREDIT_LOSSES);
    let npl = facts.single(labels::CREDIT_IMPAIRED_LOANS);
    let assets = facts.single(labels::TOTAL_ASSETS);

    // Markets & Other mix: the Trading + Other substitution applies only
    // when the FX line is wholly absent. A reported zero keeps the primary
    // numerator, and a fallback with both addends missing stays
    // absent rather than becoming a synthetic nil.
    let markets = match fx {
        Some(v) => Some(v),
        None if trading.is_none() && other.is_none() => None,
        None => Some(trading.unwrap_or(0.0) + other.unwrap_or(0.0)),
    };

    // EPS delta requires both periods present; a zero current EPS is a
    // legitimate value, not a missing one.
    let eps_delta = match (eps_current, eps_prior) {
        (Some(c), Some(p)) => Some(c - p),
        _ => None,
    };

    let ratios = vec![
        Ratio::new(
            COST_TO_INCOME,
            "G&A Expenses / Total Operating Income",
            safe_div(ga, toi),
        ),
        Ratio::new(
            NET_PROFIT_MARGIN,
            "Profit for the Period / Total Operating Income",
            safe_div(pat, toi),
        ),
        Ratio::new(
            PRE_IMPAIRMENT_MARGIN,
            "Operating Profit Before Impairment / Total Operating Income",
            safe_div(opb, toi),
        ),
        Ratio::new(
            FEE_INCOME_MIX,
            "Net Fees & Commission / Total Operating Income",
            safe_div(fees, toi),
        ),
        Ratio::new(
            MARKETS_OTHER_MIX,
            "FX & Derivative Income (else Trading Gain + Other Operating Income) / Total Operating Income",
            safe_div(markets, toi),
        ),
        Ratio::new(
            NPL_RATIO,
            "Credit-Impaired Loans / Gross Loans",
            safe_div(npl, gross),
        ),
        Ratio::new(
            COVERAGE_RATIO,
            "Expected Credit Losses / Credit-Impaired Loans",
            safe_div(ecl, npl),
        ),
        Ratio::new(
            ECL_TO_GROSS_LOANS,
            "Expected Credit Losses / Gross Loans",
            safe_div(ecl, gross),
        ),
        Ratio::new(
            EFFECTIVE_TAX_RATE,
            "Taxation Charge / Profit Before Tax",
            safe_div(tax, pbt),
        ),
        Ratio::new(
            ROA,
            "Profit for the Period / Total Assets",
            safe_div(pat, assets),
        ),
        Ratio::new(
            EPS_YOY_CHANGE,
            "(EPS current - EPS prior) / EPS prior",
            safe_div(eps_delta, eps_prior),
        ),
    ];

    let defined = ratios.iter().filter(|r| r.value.is_some()).count();
    debug!(ratios = ratios.len(), defined, "ratio computation complete");
    ratios
}
