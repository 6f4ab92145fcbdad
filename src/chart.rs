//!
//! Chart container elements wrapping one externally rendered chart
//! each, plus their visibility state.
//!

use crate::imports::*;
use crate::switch::container_id;
use web_sys::Element;
use workflow_dom::inject::inject_css;

static mut DOM_INIT: bool = false;

/// CSS class carried by hidden chart containers.
pub const HIDDEN_CLASS: &str = "hidden";

const DEFAULT_STYLE: &str = include_str!("switcher.css");

/// Derives the cloud injection script URL for a chart hash.
pub fn inject_url(host: &str, chart_id: &str) -> String {
    format!("https://{host}/inject/{chart_id}/")
}

/// A container `<div>` holding one cloud-rendered chart. The embedded
/// deferred `<script>` asks the cloud host to render the chart into
/// the container; visibility is encoded as presence of the
/// [`HIDDEN_CLASS`] class.
pub struct ChartContainer {
    id: String,
    element: Element,
}

unsafe impl Sync for ChartContainer {}
unsafe impl Send for ChartContainer {}

impl ChartContainer {
    /// Injects the switcher stylesheet (defines the hidden class) once
    /// per page.
    pub async fn try_init() -> Result<()> {
        if !unsafe { DOM_INIT } {
            inject_css(None, DEFAULT_STYLE)?;
            unsafe {
                DOM_INIT = true;
            }
        }

        Ok(())
    }

    /// Creates the container under `parent` and embeds the injection
    /// script for `chart_id`. The chart hash is not validated; an
    /// unknown hash simply never renders.
    pub fn try_new(
        parent: &Element,
        host: &str,
        prefix: &str,
        chart_id: &str,
        hidden: bool,
    ) -> Result<ChartContainer> {
        let doc = document();

        let element = doc.create_element("div")?;
        element.set_id(&container_id(prefix, chart_id));
        if hidden {
            element.class_list().add_1(HIDDEN_CLASS)?;
        }

        let script = doc.create_element("script")?;
        script.set_attribute("src", &inject_url(host, chart_id))?;
        script.set_attribute("defer", "defer")?;
        element.append_child(&script)?;
        parent.append_child(&element)?;

        Ok(ChartContainer {
            id: chart_id.to_string(),
            element,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn is_hidden(&self) -> bool {
        self.element.class_list().contains(HIDDEN_CLASS)
    }

    pub fn set_hidden(&self, hidden: bool) -> Result<()> {
        if hidden {
            self.element.class_list().add_1(HIDDEN_CLASS)?;
        } else {
            self.element.class_list().remove_1(HIDDEN_CLASS)?;
        }
        Ok(())
    }

    /// Reads the rendered chart title. Fails until the cloud script
    /// has rendered the title node, so callers poll for readiness
    /// before extracting titles.
    pub fn title(&self, title_selector: &str) -> Result<String> {
        let node = self
            .element
            .query_selector(title_selector)?
            .ok_or_else(|| {
                format!(
                    "Unable to locate `{title_selector}` in chart container `{}`",
                    self.element.id()
                )
            })?;
        let text = node
            .last_element_child()
            .ok_or_else(|| format!("Chart title node of `{}` has no text child", self.element.id()))?;
        Ok(text.inner_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inject_url_addresses_the_cloud_host() {
        assert_eq!(
            inject_url("cloud.highcharts.com", "zh90QUuF5"),
            "https://cloud.highcharts.com/inject/zh90QUuF5/"
        );
    }
}
