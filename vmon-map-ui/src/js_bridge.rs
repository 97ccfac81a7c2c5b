//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet, leaflet-draw and Chart.js are loaded from a CDN at startup. The
//! glue that drives them lives in `assets/js/*.js`; it is evaluated as
//! globals (no ES modules) and exposed via `window.*`. This module provides
//! Rust wrappers that serialize data and call those globals.
//!
//! Payloads (overlay data URLs, chart specs) are handed over through
//! `window.__vmonPending*` properties rather than spliced into the evaluated
//! source, so they never need escaping.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Embed the widget glue at compile time
static MAP_VIEW_JS: &str = include_str!("../assets/js/map-view.js");
static TIME_SERIES_CHART_JS: &str = include_str!("../assets/js/time-series-chart.js");

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_DRAW_CSS: &str = "https://unpkg.com/leaflet-draw@1.0.4/dist/leaflet.draw.css";
const LEAFLET_DRAW_JS: &str = "https://unpkg.com/leaflet-draw@1.0.4/dist/leaflet.draw.js";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('VMON JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Put a string on `window[key]` for the next polled JS call to pick up.
fn stash(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(&window, &JsValue::from_str(key), &JsValue::from_str(value));
    }
}

/// Inject the Leaflet, leaflet-draw and Chart.js tags, then evaluate the
/// widget glue once all three libraries are present.
///
/// The glue files define functions like `renderMap(...)` via `function`
/// declarations. To make them globally accessible (not block-scoped inside
/// the setInterval callback) they are evaluated at global scope via an
/// indirect `eval()` and then promoted to `window.*`. Call once at startup.
pub fn init_widgets() {
    let all_js = [MAP_VIEW_JS, TIME_SERIES_CHART_JS].join("\n");
    let store_js = format!(
        "window.__vmonWidgetScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__vmonWidgetsLoading) return;
            window.__vmonWidgetsLoading = true;
            function css(href) {{
                var link = document.createElement('link');
                link.rel = 'stylesheet';
                link.href = href;
                document.head.appendChild(link);
            }}
            function script(src, onload) {{
                var tag = document.createElement('script');
                tag.src = src;
                tag.onload = onload;
                document.head.appendChild(tag);
            }}
            css('{LEAFLET_CSS}');
            css('{LEAFLET_DRAW_CSS}');
            script('{LEAFLET_JS}', function() {{ script('{LEAFLET_DRAW_JS}'); }});
            script('{CHART_JS}');

            var waitForLibraries = setInterval(function() {{
                if (typeof L !== 'undefined' && L.Control && L.Control.Draw &&
                    typeof Chart !== 'undefined') {{
                    clearInterval(waitForLibraries);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__vmonWidgetScripts);
                    delete window.__vmonWidgetScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderMap !== 'undefined') window.renderMap = renderMap;
                    if (typeof setOverlay !== 'undefined') window.setOverlay = setOverlay;
                    if (typeof clearOverlay !== 'undefined') window.clearOverlay = clearOverlay;
                    if (typeof renderTimeSeriesChart !== 'undefined') window.renderTimeSeriesChart = renderTimeSeriesChart;
                    if (typeof destroyTimeSeriesChart !== 'undefined') window.destroyTimeSeriesChart = destroyTimeSeriesChart;
                    window.__vmonWidgetsReady = true;
                    console.log('VMON widgets initialized');
                }}
            }}, 100);
        }})();
        "#,
    );
    let _ = js_sys::eval(&init_js);
}

/// Create the Leaflet map with tiles and draw controls.
///
/// Uses a polling loop to wait for the libraries, the glue scripts and the
/// container DOM element before rendering.
pub fn render_map(container_id: &str, config_json: &str) {
    stash("__vmonPendingMapConfig", config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__vmonWidgetsReady &&
                    typeof window.renderMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderMap('{container_id}', window.__vmonPendingMapConfig);
                    }} catch(e) {{ console.error('[VMON] renderMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Show (or replace) the index overlay on the map.
pub fn set_overlay(layer_json: &str) {
    stash("__vmonPendingOverlay", layer_json);
    call_js(
        r#"
        (function() {
            var poll = setInterval(function() {
                if (window.__vmonMap && typeof window.setOverlay !== 'undefined') {
                    clearInterval(poll);
                    var pending = window.__vmonPendingOverlay;
                    if (!pending) return;
                    try {
                        window.setOverlay(pending);
                    } catch(e) { console.error('[VMON] setOverlay error:', e); }
                }
            }, 100);
        })();
        "#,
    );
}

/// Remove the index overlay, if any. Also cancels an overlay still waiting
/// for the map to come up.
pub fn clear_overlay() {
    stash("__vmonPendingOverlay", "");
    call_js("if (typeof window.clearOverlay !== 'undefined' && window.__vmonMap) window.clearOverlay();");
}

/// Render the NDVI/SAVI time series chart into `container_id`.
pub fn render_time_series_chart(container_id: &str, spec_json: &str) {
    stash("__vmonPendingChartSpec", spec_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__vmonWidgetsReady &&
                    typeof window.renderTimeSeriesChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderTimeSeriesChart('{container_id}', window.__vmonPendingChartSpec);
                    }} catch(e) {{ console.error('[VMON] renderTimeSeriesChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyTimeSeriesChart !== 'undefined') window.destroyTimeSeriesChart('{}');",
        container_id
    ));
}

/// Call `callback` with the GeoJSON of every polygon or rectangle the user
/// finishes drawing. Registered once for the lifetime of the page.
pub fn on_draw_created(callback: impl FnMut(String) + 'static) {
    let closure = Closure::<dyn FnMut(String)>::new(callback);
    register("__vmonOnDrawCreated", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Call `callback` when the user deletes every drawn shape.
pub fn on_draw_deleted(callback: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(callback);
    register("__vmonOnDrawDeleted", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn register(key: &str, function: &js_sys::Function) {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(&window, &JsValue::from_str(key), function);
    }
}

/// Offer `url` as a file download named `filename`.
pub fn download(url: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;
    let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(url);
    link.set_download(filename);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}
