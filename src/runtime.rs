//!
//! Bindings to the global `Highcharts` runtime object populated by the
//! injected cloud scripts.
//!

use crate::imports::*;
use js_sys::{Array, Object, Reflect};

#[wasm_bindgen]
extern "C" {
    /// A chart instance rendered by the Highcharts runtime.
    pub type ChartInstance;

    /// Recomputes the chart layout against its container dimensions.
    #[wasm_bindgen(method)]
    pub fn reflow(this: &ChartInstance);
}

/// Returns the global `Highcharts` runtime object. Fails when the
/// injected scripts have not executed yet.
pub fn runtime() -> Result<Object> {
    let runtime = Reflect::get(&js_sys::global(), &"Highcharts".into())?;
    if runtime.is_undefined() || runtime.is_null() {
        return Err("Highcharts runtime is not loaded".into());
    }
    Ok(runtime.unchecked_into())
}

/// Currently rendered chart instances. The runtime keeps destroyed
/// charts as empty slots in its `charts` array; those are skipped.
pub fn charts() -> Result<Vec<ChartInstance>> {
    let charts = Reflect::get(runtime()?.as_ref(), &"charts".into())?;
    let charts = charts
        .dyn_into::<Array>()
        .map_err(|_| Error::Custom("Highcharts.charts is not an array".to_string()))?;
    Ok(charts
        .iter()
        .filter(|chart| !chart.is_undefined() && !chart.is_null())
        .map(|chart| chart.unchecked_into::<ChartInstance>())
        .collect())
}

/// Asks every rendered chart to recompute its layout.
pub fn reflow_all() -> Result<()> {
    for chart in charts()? {
        chart.reflow();
    }
    Ok(())
}
