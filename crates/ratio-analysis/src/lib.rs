pub mod advisories;
pub mod ratios;

pub use advisories::advise;
pub use ratios::{compute, safe_div};
pub use ratios::{
    COST_TO_INCOME, COVERAGE_RATIO, ECL_TO_GROSS_LOANS, EFFECTIVE_TAX_RATE, EPS_YOY_CHANGE,
    FEE_INCOME_MIX, MARKETS_OTHER_MIX, NET_PROFIT_MARGIN, NPL_RATIO, PRE_IMPAIRMENT_MARGIN, ROA,
};
