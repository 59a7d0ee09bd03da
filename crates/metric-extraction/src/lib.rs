pub mod extract;
pub mod numeric;
pub mod patterns;

pub use extract::extract;
pub use numeric::parse_amount;
pub use patterns::{MetricPattern, PatternLibrary, SignConvention, SlotCount, TokenClass, LIBRARY};
