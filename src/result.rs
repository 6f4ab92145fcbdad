//! Result type used by the [`highcharts_switcher`](super) crate
pub type Result<T> = std::result::Result<T, crate::error::Error>;
