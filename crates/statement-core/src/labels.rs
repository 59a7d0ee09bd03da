//! Metric labels.
//!
//! Labels are the join key between the pattern library, the fact table and
//! the ratio engine. They are opaque display strings; the unit of a value
//! (thousands of AED, per-share amount) is implied by the label alone.

pub const TOTAL_OPERATING_INCOME: &str = "Total Operating Income";
pub const GA_EXPENSES: &str = "General and Administrative Expenses";
pub const OPERATING_PROFIT_BEFORE_IMPAIRMENT: &str = "Operating Profit Before Impairment";
pub const PROFIT_BEFORE_TAX: &str = "Profit Before Tax";
pub const TAXATION_CHARGE: &str = "Taxation Charge";
pub const PROFIT_FOR_PERIOD: &str = "Profit for the Period";
pub const NET_FEES_COMMISSION: &str = "Net Fees & Commission";
pub const FX_DERIVATIVE_INCOME: &str = "FX & Derivative Income";
pub const TRADING_GAIN: &str = "Trading Gain";
pub const OTHER_OPERATING_INCOME: &str = "Other Operating Income";
pub const EARNINGS_PER_SHARE: &str = "Earnings Per Share (AED)";

pub const GROSS_LOANS: &str = "Gross Loans";
pub const EXPECTED_CREDIT_LOSSES: &str = "Expected Credit Losses";
pub const CREDIT_IMPAIRED_LOANS: &str = "Credit-Impaired Loans";
pub const TOTAL_ASSETS: &str = "Total Assets";
