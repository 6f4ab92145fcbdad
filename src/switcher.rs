//!
//! Dropdown-driven chart switcher: mounts the configured charts, waits
//! for the cloud scripts to render them, then binds a selector that
//! toggles which single chart is visible.
//!

use crate::chart::ChartContainer;
use crate::imports::*;
use crate::poll::{poll, PollOptions, PollOutcome};
use crate::runtime;
use crate::switch::Selection;
use web_sys::{Element, HtmlOptionElement, HtmlSelectElement};

/// Chart hashes and DOM/polling configuration for a [`ChartSwitcher`].
#[derive(Debug, Clone)]
pub struct ChartSwitcherOptions {
    /// Chart hashes in mount order; the first is initially visible.
    pub ids: Vec<String>,
    /// Cloud host serving the injection scripts.
    pub host: String,
    /// Container element id prefix.
    pub prefix: String,
    /// Selector matching the rendered chart title node.
    pub title_selector: String,
    /// Readiness poll budget.
    pub poll: PollOptions,
}

impl Default for ChartSwitcherOptions {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            host: "cloud.highcharts.com".to_string(),
            prefix: "highcharts-".to_string(),
            title_selector: "text.highcharts-title".to_string(),
            poll: PollOptions::default(),
        }
    }
}

impl ChartSwitcherOptions {
    pub fn new<T: Into<String>>(ids: impl IntoIterator<Item = T>) -> Self {
        Self {
            ids: ids.into_iter().map(|id| id.into()).collect(),
            ..Default::default()
        }
    }

    pub fn set_host<T: Into<String>>(mut self, host: T) -> Self {
        self.host = host.into();
        self
    }

    pub fn set_prefix<T: Into<String>>(mut self, prefix: T) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn set_title_selector<T: Into<String>>(mut self, title_selector: T) -> Self {
        self.title_selector = title_selector.into();
        self
    }

    pub fn set_poll(mut self, poll: PollOptions) -> Self {
        self.poll = poll;
        self
    }
}

struct Inner {
    options: ChartSwitcherOptions,
    selection: Selection,
    charts: Vec<ChartContainer>,
    titles: Vec<String>,
}

impl Inner {
    fn title_of(&self, id: &str) -> Option<&str> {
        self.charts
            .iter()
            .position(|chart| chart.id() == id)
            .map(|idx| self.titles[idx].as_str())
    }
}

/// Orchestrates the chart containers, the readiness poll, and the
/// dropdown selector for one page.
#[derive(Clone)]
pub struct ChartSwitcher {
    mount: Element,
    dropdown: HtmlSelectElement,
    inner: Arc<Mutex<Inner>>,
    /// holds references to [Callback](workflow_wasm::callback::Callback)
    pub callbacks: CallbackMap,
}

unsafe impl Sync for ChartSwitcher {}
unsafe impl Send for ChartSwitcher {}

impl ChartSwitcher {
    /// Resolves the `.chart-holder` mount point and the `dd` dropdown,
    /// both of which must be present before the switcher starts.
    pub async fn try_new(
        window: &web_sys::Window,
        options: ChartSwitcherOptions,
    ) -> Result<ChartSwitcher> {
        ChartContainer::try_init().await?;

        let document = window.document().unwrap();
        let mount = document
            .query_selector(".chart-holder")?
            .ok_or_else(|| "Unable to get .chart-holder element".to_string())?;
        let dropdown = document
            .query_selector("select[name=\"dd\"]")?
            .ok_or_else(|| "Unable to get select[name=\"dd\"] element".to_string())?;
        let dropdown = dropdown.dyn_into::<HtmlSelectElement>().unwrap();

        let selection = Selection::try_new(options.ids.clone())?;

        Ok(ChartSwitcher {
            mount,
            dropdown,
            inner: Arc::new(Mutex::new(Inner {
                options,
                selection,
                charts: Vec::new(),
                titles: Vec::new(),
            })),
            callbacks: CallbackMap::new(),
        })
    }

    fn inner(&self) -> MutexGuard<Inner> {
        self.inner.lock().unwrap()
    }

    /// Creates one container per configured chart hash under the mount
    /// point, hidden for every hash except the first, and embeds the
    /// cloud injection script in each.
    pub fn mount(&self) -> Result<()> {
        let mut inner = self.inner();
        let ids = inner.selection.ids().to_vec();
        let (host, prefix) = (inner.options.host.clone(), inner.options.prefix.clone());
        for (idx, id) in ids.iter().enumerate() {
            let chart = ChartContainer::try_new(&self.mount, &host, &prefix, id, idx > 0)?;
            inner.charts.push(chart);
        }
        log_info!("mounted {} chart containers", ids.len());
        Ok(())
    }

    /// Waits for every mounted chart to render its title node, then
    /// builds the dropdown selector. When the poll budget lapses the
    /// selector is never built and the page stays inert.
    pub async fn activate(&self) -> Result<PollOutcome> {
        let (expected, title_selector, poll_options) = {
            let inner = self.inner();
            (
                inner.selection.len(),
                inner.options.title_selector.clone(),
                inner.options.poll,
            )
        };

        let start = Instant::now();
        let mount = self.mount.clone();
        // A selector that never matches (or a chart that never renders)
        // fails every attempt and consumes the whole budget.
        let outcome = poll(poll_options, move || {
            mount
                .query_selector_all(&title_selector)
                .map(|titles| titles.length() as usize == expected)
                .unwrap_or(false)
        })
        .await;

        match outcome {
            PollOutcome::Ready => {
                log_info!(
                    "{} charts rendered in {} msec",
                    expected,
                    start.elapsed().as_millis()
                );
                self.build_selector()?;
            }
            PollOutcome::Exhausted => {
                log_trace!(
                    "chart readiness poll exhausted after {} attempts",
                    poll_options.attempts
                );
            }
        }

        Ok(outcome)
    }

    /// Builds one dropdown option per mounted chart, in document
    /// order, labeled with the rendered chart titles. Marks the first
    /// option selected, binds the visibility handler and primes the
    /// overlay label. Must only run once readiness is confirmed.
    fn build_selector(&self) -> Result<()> {
        let doc = document();
        let label = doc
            .query_selector(".label")?
            .ok_or_else(|| "Unable to get .label element".to_string())?;

        let first_title = {
            let mut inner = self.inner();
            let title_selector = inner.options.title_selector.clone();
            let mut titles = Vec::with_capacity(inner.charts.len());
            for chart in inner.charts.iter() {
                let title = chart.title(&title_selector)?;
                let option = doc
                    .create_element("option")?
                    .dyn_into::<HtmlOptionElement>()
                    .unwrap();
                option.set_value(chart.id());
                option.set_text(&title);
                self.dropdown.append_child(&option)?;
                titles.push(title);
            }
            let first_title = titles
                .first()
                .cloned()
                .ok_or_else(|| "no mounted chart containers".to_string())?;
            inner.titles = titles;
            first_title
        };

        self.dropdown.set_selected_index(0);

        let that = self.clone();
        let dropdown = self.dropdown.clone();
        // The label element is captured once here, never re-queried
        // per event.
        let label_elem = label.clone();
        let on_change = callback!(move || {
            let value = dropdown.value();
            log_info!("chart-selector:change: {value:?}");
            if let Err(err) = that.set_active(&value, &label_elem) {
                log_error!("{err}");
            }
        });
        self.dropdown
            .add_event_listener_with_callback("change", on_change.get_fn())?;
        self.callbacks.retain(on_change)?;

        label.set_inner_html(&first_title);
        Ok(())
    }

    /// Shows the chart matching `id`, hides all others, asks the
    /// runtime to recompute chart layouts and updates the overlay
    /// label.
    fn set_active(&self, id: &str, label: &Element) -> Result<()> {
        let title = {
            let mut inner = self.inner();
            if !inner.selection.activate(id) {
                return Err(Error::Custom(format!("unknown chart identifier `{id}`")));
            }
            for chart in inner.charts.iter() {
                chart.set_hidden(!inner.selection.is_visible(chart.id()))?;
            }
            inner
                .title_of(id)
                .ok_or_else(|| format!("no title recorded for chart `{id}`"))?
                .to_string()
        };

        // Todo: reflow only the now-visible chart? Hidden charts may
        // not need it.
        runtime::reflow_all()?;

        label.set_inner_html(&title);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_the_cloud_contract() {
        let options = ChartSwitcherOptions::new(["A", "B"]);
        assert_eq!(options.ids, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(options.host, "cloud.highcharts.com");
        assert_eq!(options.prefix, "highcharts-");
        assert_eq!(options.title_selector, "text.highcharts-title");
        assert_eq!(options.poll.attempts, 50);
        assert_eq!(options.poll.interval, Duration::from_millis(100));
    }

    #[test]
    fn options_setters_override_defaults() {
        let options = ChartSwitcherOptions::new(["A"])
            .set_host("charts.example.com")
            .set_prefix("chart-")
            .set_poll(PollOptions::new(3, Duration::from_millis(50)));
        assert_eq!(options.host, "charts.example.com");
        assert_eq!(options.prefix, "chart-");
        assert_eq!(options.poll.attempts, 3);
    }
}
