// crates/geodir-core/src/traits.rs
use crate::model::{CountryRecord, CountrySummary};
use async_trait::async_trait;

/// Typed access to the external country directory.
///
/// Every operation swallows transport, status and parse failures and
/// returns the "no data" sentinel instead: an empty list, or `None` for the
/// exact lookup. Callers only ever branch on present vs. absent.
///
/// Implementations must be cheap to share; the search session clones an
/// `Arc` of the client into every in-flight lookup.
///
/// # Example
///
/// ```no_run
/// use geodir_core::{DirectoryClient, DirectoryConfig, RestCountriesClient};
///
/// # async fn run() -> geodir_core::Result<()> {
/// let client = RestCountriesClient::new(DirectoryConfig::default())?;
///
/// for c in client.lookup_by_name("ger").await {
///     println!("- {} ({})", c.display_name(), c.iso_alpha2());
/// }
///
/// if let Some(record) = client.lookup_exact_by_name("Germany").await {
///     println!("calling code {}", record.calling_code());
/// }
/// # Ok(()) }
/// ```
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Name search (prefix or exact, as the service decides). Empty on failure.
    async fn lookup_by_name(&self, text: &str) -> Vec<CountrySummary>;

    /// Exact-name lookup for the detail page. `None` on failure or no match.
    async fn lookup_exact_by_name(&self, name: &str) -> Option<CountryRecord>;

    /// Countries sharing a calling code, given without the leading `+`.
    async fn lookup_by_calling_code(&self, code: &str) -> Vec<CountrySummary>;

    /// Countries sharing an ISO 4217 currency code (e.g. "EUR").
    async fn lookup_by_currency_code(&self, code: &str) -> Vec<CountrySummary>;
}
