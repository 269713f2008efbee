/// Hard cap on generated occurrences for unbounded recurrences
pub const OCCURRENCE_SAFETY_CAP: usize = 365;

/// Decimal precision for fiat display
pub const FIAT_DECIMAL_PRECISION: u32 = 2;

/// Placeholder rendered for absent field values in audit changesets
pub const NOT_DEFINED_PLACEHOLDER: &str = "not defined";

/// Default bounded size of the exchange rate cache
pub const RATE_CACHE_CAPACITY: usize = 512;

/// Default time-to-live of a cached exchange rate, in seconds
pub const RATE_CACHE_TTL_SECS: u64 = 24 * 60 * 60;
