//! Dioxus RSX components for the vegetation monitor.

mod chart_container;
mod date_range_picker;
mod error_display;
mod export_button;
mod header;
mod index_selector;
mod info_panel;
mod layers_panel;
mod legend;
mod loading_spinner;
mod map_view;
mod panel_tabs;
mod sidebar;
mod time_series_panel;

pub use chart_container::ChartContainer;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use export_button::ExportButton;
pub use header::Header;
pub use index_selector::IndexSelector;
pub use info_panel::InfoPanel;
pub use layers_panel::LayersPanel;
pub use legend::Legend;
pub use loading_spinner::LoadingSpinner;
pub use map_view::MapView;
pub use panel_tabs::PanelTabs;
pub use sidebar::Sidebar;
pub use time_series_panel::TimeSeriesPanel;
