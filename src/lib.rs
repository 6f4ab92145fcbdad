//!
//! Browser-side orchestration for externally hosted
//! [Highcharts Cloud](https://cloud.highcharts.com) charts.
//!
//! The crate mounts one container element per configured chart hash,
//! injects the per-chart rendering script served by the cloud host,
//! polls the DOM until every chart has rendered its title, then builds
//! a dropdown selector that switches which single chart is visible by
//! toggling CSS classes.
//!
//! Example:
//!
//! ```rust ignore
//! use highcharts_switcher::prelude::*;
//!
//! let options = ChartSwitcherOptions::new(["GBanZitX-", "7wUBl0Fdj", "zh90QUuF5"]);
//! let switcher = ChartSwitcher::try_new(&window(), options).await?;
//! switcher.mount()?;
//! switcher.activate().await?;
//! ```

pub mod chart;
pub mod error;
pub mod imports;
pub mod poll;
pub mod result;
pub mod runtime;
pub mod switch;
pub mod switcher;

pub use chart::ChartContainer;
pub use poll::{poll, PollOptions, PollOutcome};
pub use switch::Selection;
pub use switcher::{ChartSwitcher, ChartSwitcherOptions};

pub mod prelude {
    pub use crate::chart::ChartContainer;
    pub use crate::poll::{poll, PollOptions, PollOutcome};
    pub use crate::switch::Selection;
    pub use crate::switcher::{ChartSwitcher, ChartSwitcherOptions};
    pub use workflow_dom::utils::{document, window};
}
