use crate::color::BadgeColors;
use crate::data::catalog::{self, BUILTIN_SOURCE};
use crate::data::error::FilterError;
use crate::data::filter::{partition, ApplicationFilter, Dimension, FilterState, Range};
use crate::data::model::Product;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Products being browsed; read-only once installed.
    pub catalog: Vec<Product>,

    /// Where `catalog` came from (shown in the top bar).
    pub source: String,

    /// Current slider and radio selections.
    pub filters: FilterState,

    /// Indices of products passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Records skipped because a magnitude could not be parsed.
    pub malformed: Vec<FilterError>,

    /// Badge colour per application.
    pub badge_colors: BadgeColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            catalog: Vec::new(),
            source: String::new(),
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            malformed: Vec::new(),
            badge_colors: BadgeColors::for_catalog(&[]),
            status_message: None,
        };
        state.set_catalog(catalog::builtin(), BUILTIN_SOURCE);
        state
    }
}

impl AppState {
    /// Install a catalog, reset filters and colours.
    pub fn set_catalog(&mut self, products: Vec<Product>, source: &str) {
        self.badge_colors = BadgeColors::for_catalog(&products);
        self.catalog = products;
        self.source = source.to_string();
        self.filters = FilterState::default();
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        let report = partition(&self.catalog, &self.filters);
        for err in &report.malformed {
            log::warn!("Skipping record: {err}");
        }
        log::debug!(
            "{} of {} products match (g {}, bias {}, temp {}, shock {}, application {:?})",
            report.indices.len(),
            self.catalog.len(),
            self.filters.g_range,
            self.filters.bias,
            self.filters.temperature,
            self.filters.shock,
            self.filters.application,
        );
        self.visible_indices = report.indices;
        self.malformed = report.malformed;
    }

    /// Set both ends of one numeric filter. Reversed bounds are swapped.
    pub fn set_range(&mut self, dim: Dimension, low: i64, high: i64) {
        *self.filters.range_mut(dim) = Range::new(low, high);
        self.refilter();
    }

    /// Select a radio choice.
    pub fn set_application(&mut self, filter: ApplicationFilter) {
        if self.filters.application != filter {
            self.filters.application = filter;
            self.refilter();
        }
    }

    /// Back to the defaults ("Reset Filters").
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.refilter();
    }

    /// Products passing the current filters, in catalog order.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        self.visible_indices.iter().map(|&i| &self.catalog[i])
    }

    pub fn match_count(&self) -> usize {
        self.visible_indices.len()
    }
}
