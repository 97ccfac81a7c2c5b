//! View models derived from the provider state.
//!
//! These hold the decisions the view layer makes (which panel shows what,
//! whether an overlay or export is available, what the chart receives) so
//! they can be tested without a browser.

use crate::result::FetchState;
use serde::Serialize;
use vmon_core::date_range::{format_date, DateRange};
use vmon_core::geometry::Bounds;
use vmon_core::index::IndexType;

/// Overlay opacity on the map.
pub const OVERLAY_OPACITY: f64 = 0.7;

/// Shown in the Time Series panel until an AOI is drawn.
pub const AOI_PROMPT: &str =
    "Please define an Area of Interest (AOI) on the map to view time series data.";

/// Shown in the Layers panel.
pub const DRAW_HINT: &str =
    "Draw a polygon or rectangle on the map to define your Area of Interest (AOI).";

/// Base map tiles.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Which draw tools the map offers. Only areas can become an AOI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawTools {
    pub rectangle: bool,
    pub polygon: bool,
    pub polyline: bool,
    pub circle: bool,
    pub circlemarker: bool,
    pub marker: bool,
}

impl Default for DrawTools {
    fn default() -> Self {
        Self {
            rectangle: true,
            polygon: true,
            polyline: false,
            circle: false,
            circlemarker: false,
            marker: false,
        }
    }
}

/// Static configuration handed to the map widget on creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: &'static str,
    pub attribution: &'static str,
    pub draw: DrawTools,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            zoom: 2,
            tile_url: TILE_URL,
            attribution: TILE_ATTRIBUTION,
            draw: DrawTools::default(),
        }
    }
}

/// Sidebar panels. Any panel can follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Layers,
    TimeSeries,
    Info,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Layers, Panel::TimeSeries, Panel::Info];

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Layers => "Layers",
            Panel::TimeSeries => "Time Series",
            Panel::Info => "Info",
        }
    }
}

/// What the Time Series panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSeriesView {
    Chart,
    Prompt,
}

impl TimeSeriesView {
    pub fn for_aoi(has_aoi: bool) -> Self {
        if has_aoi {
            TimeSeriesView::Chart
        } else {
            TimeSeriesView::Prompt
        }
    }
}

/// An image overlay ready for the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayer {
    pub url: String,
    pub bounds: Bounds,
    pub opacity: f64,
    pub label: String,
}

impl OverlayLayer {
    /// The overlay to draw, present only once a result is ready.
    pub fn from_state(state: &FetchState) -> Option<Self> {
        let result = state.result()?;
        Some(Self {
            url: result.overlay.url.clone(),
            bounds: result.bounds,
            opacity: OVERLAY_OPACITY,
            label: result.overlay.label.clone(),
        })
    }
}

/// Index whose palette the legend shows: the one on screen or on its way,
/// falling back to `selected` when neither exists.
pub fn legend_index(state: &FetchState, selected: IndexType) -> IndexType {
    match state {
        FetchState::Ready(result) => result.index,
        FetchState::Loading { index, .. } => *index,
        FetchState::Idle | FetchState::Failed { .. } => selected,
    }
}

/// `{index}_{start}_{end}.png`
pub fn export_filename(index: IndexType, range: &DateRange) -> String {
    format!(
        "{}_{}_{}.png",
        index.as_str(),
        format_date(&range.start()),
        format_date(&range.end())
    )
}

/// A downloadable overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTarget {
    pub url: String,
    pub filename: String,
}

impl ExportTarget {
    /// Available only when an overlay exists. The file is named after the
    /// index and range the overlay was computed for.
    pub fn from_state(state: &FetchState) -> Option<Self> {
        let result = state.result()?;
        Some(Self {
            url: result.overlay.url.clone(),
            filename: export_filename(result.index, &result.range),
        })
    }
}

/// Y axis range of the time series chart.
pub const CHART_Y_MIN: f64 = -0.2;
pub const CHART_Y_MAX: f64 = 1.0;

/// One line on the time series chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub tension: f64,
}

/// Declarative input for the chart widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_min: f64,
    pub y_max: f64,
}

fn series_colors(index: IndexType) -> (&'static str, &'static str) {
    match index {
        IndexType::Ndvi => ("rgb(34, 197, 94)", "rgba(34, 197, 94, 0.5)"),
        IndexType::Savi => ("rgb(59, 130, 246)", "rgba(59, 130, 246, 0.5)"),
    }
}

impl ChartSpec {
    /// Both index series from the published result. Before a result exists
    /// the datasets are present but empty.
    pub fn from_state(state: &FetchState) -> Self {
        let series = state.result().map(|r| &r.time_series);
        let datasets = IndexType::ALL
            .iter()
            .map(|&index| {
                let (border_color, background_color) = series_colors(index);
                Dataset {
                    label: index.display_name().to_string(),
                    data: series.map(|s| s.values(index).to_vec()).unwrap_or_default(),
                    border_color,
                    background_color,
                    tension: 0.3,
                }
            })
            .collect();
        Self {
            labels: series.map(|s| s.labels()).unwrap_or_default(),
            datasets,
            y_min: CHART_Y_MIN,
            y_max: CHART_Y_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{IndexResult, OverlayImage};
    use crate::series::TimeSeries;
    use std::rc::Rc;

    fn range() -> DateRange {
        DateRange::parse("2024-01-01", "2024-01-12").unwrap()
    }

    fn ready(index: IndexType) -> FetchState {
        let dates = range().sample_dates(2);
        FetchState::Ready(Rc::new(IndexResult {
            index,
            range: range(),
            overlay: OverlayImage {
                url: "data:image/png;base64,AAAA".into(),
                label: format!("{} Visualization", index.display_name()),
                index,
            },
            bounds: Bounds([10.0, 10.0], [20.0, 20.0]),
            time_series: TimeSeries::new(dates, vec![0.3, 0.4], vec![0.2, 0.25]).unwrap(),
        }))
    }

    #[test]
    fn map_config_enables_area_tools_only() {
        let json = serde_json::to_value(MapConfig::default()).unwrap();
        assert_eq!(json["tileUrl"], TILE_URL);
        assert_eq!(json["zoom"], 2);
        assert_eq!(json["draw"]["rectangle"], true);
        assert_eq!(json["draw"]["polygon"], true);
        for tool in ["polyline", "circle", "circlemarker", "marker"] {
            assert_eq!(json["draw"][tool], false, "{} should be disabled", tool);
        }
    }

    #[test]
    fn panels_start_on_layers() {
        assert_eq!(Panel::default(), Panel::Layers);
        let labels: Vec<&str> = Panel::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Layers", "Time Series", "Info"]);
    }

    #[test]
    fn time_series_panel_gates_on_aoi() {
        assert_eq!(TimeSeriesView::for_aoi(false), TimeSeriesView::Prompt);
        assert_eq!(TimeSeriesView::for_aoi(true), TimeSeriesView::Chart);
    }

    #[test]
    fn overlay_only_when_ready() {
        assert_eq!(OverlayLayer::from_state(&FetchState::Idle), None);
        let loading = FetchState::Loading {
            index: IndexType::Ndvi,
            range: range(),
        };
        assert_eq!(OverlayLayer::from_state(&loading), None);
        let failed = FetchState::Failed {
            reason: "boom".into(),
        };
        assert_eq!(OverlayLayer::from_state(&failed), None);

        let layer = OverlayLayer::from_state(&ready(IndexType::Ndvi)).unwrap();
        assert_eq!(layer.opacity, 0.7);
        assert_eq!(layer.bounds, Bounds([10.0, 10.0], [20.0, 20.0]));
        let json = serde_json::to_value(&layer).unwrap();
        assert_eq!(json["bounds"], serde_json::json!([[10.0, 10.0], [20.0, 20.0]]));
    }

    #[test]
    fn legend_follows_the_overlay_not_the_selector() {
        // Selector already moved to SAVI, NDVI overlay still showing
        assert_eq!(legend_index(&ready(IndexType::Ndvi), IndexType::Savi), IndexType::Ndvi);
        let loading = FetchState::Loading {
            index: IndexType::Savi,
            range: range(),
        };
        assert_eq!(legend_index(&loading, IndexType::Ndvi), IndexType::Savi);
        assert_eq!(legend_index(&FetchState::Idle, IndexType::Savi), IndexType::Savi);
        let failed = FetchState::Failed {
            reason: "boom".into(),
        };
        assert_eq!(legend_index(&failed, IndexType::Ndvi), IndexType::Ndvi);
    }

    #[test]
    fn export_uses_result_index_and_range() {
        assert_eq!(ExportTarget::from_state(&FetchState::Idle), None);
        let target = ExportTarget::from_state(&ready(IndexType::Savi)).unwrap();
        assert_eq!(target.filename, "savi_2024-01-01_2024-01-12.png");
        assert_eq!(target.url, "data:image/png;base64,AAAA");
        assert_eq!(
            export_filename(IndexType::Ndvi, &range()),
            "ndvi_2024-01-01_2024-01-12.png"
        );
    }

    #[test]
    fn chart_spec_before_any_result_is_empty() {
        let spec = ChartSpec::from_state(&FetchState::Idle);
        assert!(spec.labels.is_empty());
        assert_eq!(spec.datasets.len(), 2);
        assert!(spec.datasets.iter().all(|d| d.data.is_empty()));
    }

    #[test]
    fn chart_spec_carries_both_series() {
        let spec = ChartSpec::from_state(&ready(IndexType::Ndvi));
        assert_eq!(spec.labels, vec!["2024-01-01", "2024-01-12"]);
        assert_eq!(spec.datasets[0].label, "NDVI");
        assert_eq!(spec.datasets[0].data, vec![0.3, 0.4]);
        assert_eq!(spec.datasets[1].label, "SAVI");
        assert_eq!(spec.datasets[1].data, vec![0.2, 0.25]);

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["yMin"], -0.2);
        assert_eq!(json["yMax"], 1.0);
        assert_eq!(json["datasets"][0]["borderColor"], "rgb(34, 197, 94)");
        assert_eq!(json["datasets"][1]["backgroundColor"], "rgba(59, 130, 246, 0.5)");
    }
}
