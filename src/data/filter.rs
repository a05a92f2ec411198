use std::fmt;

use super::error::FilterError;
use super::model::{normalize_label, MagnitudeField, Product};

// ---------------------------------------------------------------------------
// Range – a closed interval [low, high]
// ---------------------------------------------------------------------------

/// Closed integer interval. Both ends are part of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    low: i64,
    high: i64,
}

impl Range {
    /// Build a range; reversed bounds are swapped so `low <= high` always holds.
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Move the lower thumb. It stops at the upper one.
    pub fn set_low(&mut self, value: i64) {
        self.low = value.min(self.high);
    }

    /// Move the upper thumb. It stops at the lower one.
    pub fn set_high(&mut self, value: i64) {
        self.high = value.max(self.low);
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// Dimension – the four numeric filter axes and their slider configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    GRange,
    Bias,
    Temperature,
    Shock,
}

impl Dimension {
    /// Sidebar order.
    pub const ALL: [Dimension; 4] = [
        Dimension::GRange,
        Dimension::Bias,
        Dimension::Temperature,
        Dimension::Shock,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::GRange => "G Range",
            Dimension::Bias => "Bias Inrun",
            Dimension::Temperature => "Temperature",
            Dimension::Shock => "Shock",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Dimension::GRange | Dimension::Shock => "g",
            Dimension::Bias => "µg",
            Dimension::Temperature => "°C",
        }
    }

    /// Slider extent; also the default (unfiltered) range.
    pub fn bounds(self) -> Range {
        match self {
            Dimension::GRange => Range::new(0, 500),
            Dimension::Bias => Range::new(0, 100),
            Dimension::Temperature => Range::new(-50, 125),
            Dimension::Shock => Range::new(100, 2000),
        }
    }

    pub fn step(self) -> i64 {
        match self {
            Dimension::GRange | Dimension::Temperature => 5,
            Dimension::Bias => 1,
            Dimension::Shock => 100,
        }
    }

    /// The product's value along this axis.
    pub fn value_of(self, product: &Product) -> Result<i64, FilterError> {
        match self {
            Dimension::GRange => product.magnitude(MagnitudeField::GRange),
            Dimension::Bias => product.magnitude(MagnitudeField::BiasInrun),
            Dimension::Temperature => Ok(product.temperature),
            Dimension::Shock => Ok(product.shock),
        }
    }
}

// ---------------------------------------------------------------------------
// ApplicationFilter – the radio group
// ---------------------------------------------------------------------------

/// Radio choices in sidebar order. "All" maps to [`ApplicationFilter::All`].
pub const APPLICATION_CHOICES: &[&str] = &["All", "Aircraft", "Defense", "Space", "VTOL"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ApplicationFilter {
    #[default]
    All,
    /// Canonical (lower-case) application key.
    Only(String),
}

impl ApplicationFilter {
    /// Restrict to one application; the label is normalized here, once.
    pub fn only(label: &str) -> Self {
        ApplicationFilter::Only(normalize_label(label))
    }

    /// Interpret a radio value, treating "all" (any case) as the sentinel.
    pub fn parse(value: &str) -> Self {
        let key = normalize_label(value);
        if key == "all" {
            ApplicationFilter::All
        } else {
            ApplicationFilter::Only(key)
        }
    }

    pub fn admits(&self, product: &Product) -> bool {
        match self {
            ApplicationFilter::All => true,
            ApplicationFilter::Only(key) => product.has_application(key),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// Everything the user can constrain. Passed by reference into [`apply`];
/// the engine never modifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub g_range: Range,
    pub bias: Range,
    pub temperature: Range,
    pub shock: Range,
    pub application: ApplicationFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            g_range: Dimension::GRange.bounds(),
            bias: Dimension::Bias.bounds(),
            temperature: Dimension::Temperature.bounds(),
            shock: Dimension::Shock.bounds(),
            application: ApplicationFilter::All,
        }
    }
}

impl FilterState {
    pub fn range(&self, dim: Dimension) -> Range {
        match dim {
            Dimension::GRange => self.g_range,
            Dimension::Bias => self.bias,
            Dimension::Temperature => self.temperature,
            Dimension::Shock => self.shock,
        }
    }

    pub fn range_mut(&mut self, dim: Dimension) -> &mut Range {
        match dim {
            Dimension::GRange => &mut self.g_range,
            Dimension::Bias => &mut self.bias,
            Dimension::Temperature => &mut self.temperature,
            Dimension::Shock => &mut self.shock,
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Test one product against every constraint.
///
/// Both magnitude columns are parsed before any range is checked, so a
/// malformed value is reported even when another constraint would already
/// reject the product.
pub fn matches(product: &Product, state: &FilterState) -> Result<bool, FilterError> {
    let g_range = Dimension::GRange.value_of(product)?;
    let bias = Dimension::Bias.value_of(product)?;

    Ok(state.g_range.contains(g_range)
        && state.bias.contains(bias)
        && state.temperature.contains(product.temperature)
        && state.shock.contains(product.shock)
        && state.application.admits(product))
}

/// Return the products that satisfy `state`, in catalog order.
///
/// Strict: the first malformed record (in catalog order) fails the whole
/// call. Use [`partition`] to filter around bad records instead.
pub fn apply<'a>(
    catalog: &'a [Product],
    state: &FilterState,
) -> Result<Vec<&'a Product>, FilterError> {
    catalog
        .iter()
        .filter_map(|product| match matches(product, state) {
            Ok(true) => Some(Ok(product)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}

/// Outcome of a per-record filtering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Catalog indices of matching products, ascending.
    pub indices: Vec<usize>,
    /// One entry per record whose magnitudes could not be parsed.
    pub malformed: Vec<FilterError>,
}

/// Per-record variant of [`apply`]: malformed records are excluded and
/// reported, everything else is filtered normally.
pub fn partition(catalog: &[Product], state: &FilterState) -> FilterReport {
    let mut report = FilterReport::default();
    for (i, product) in catalog.iter().enumerate() {
        match matches(product, state) {
            Ok(true) => report.indices.push(i),
            Ok(false) => {}
            Err(e) => report.malformed.push(e),
        }
    }
    report
}
