// crates/geodir-core/src/lib.rs

pub mod client; // HTTP directory client
pub mod config;
pub mod detail; // Detail page aggregation
pub mod error;
pub mod model;
pub mod navigation;
pub mod prelude;
pub mod session; // Incremental search state machine
pub mod text;
pub mod traits;
// Wire shapes of the directory service (decoded, then converted into model)
#[doc(hidden)]
pub mod raw;

#[cfg(test)]
mod fake;

// Re-exports
pub use crate::error::{GeoDirError, LookupError, Result};
pub use client::RestCountriesClient;
pub use config::DirectoryConfig;
pub use detail::DetailAggregator;
pub use model::{
    related_count_label, Coordinates, CountryRecord, CountrySummary, Currency, DetailOutcome,
    DetailView,
};
pub use navigation::{detail_path, Navigator, RecordingNavigator};
pub use session::{
    Completion, NavDirection, RequestToken, SearchSession, SearchState, MAX_SUGGESTIONS,
};
pub use text::title_case;
// Export the client trait (needed to call lookups directly)
pub use traits::DirectoryClient;
