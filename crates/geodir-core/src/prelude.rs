//! geodir prelude: bring the common types and traits into scope.

#![allow(unused_imports)]

pub use crate::client::RestCountriesClient;
pub use crate::config::DirectoryConfig;
pub use crate::detail::DetailAggregator;
pub use crate::error::{GeoDirError, LookupError, Result};
pub use crate::model::{
    related_count_label, Coordinates, CountryRecord, CountrySummary, Currency, DetailOutcome,
    DetailView,
};
pub use crate::navigation::{detail_path, Navigator, RecordingNavigator};
pub use crate::session::{Completion, NavDirection, RequestToken, SearchSession, SearchState};
pub use crate::text::title_case;
pub use crate::traits::DirectoryClient;
