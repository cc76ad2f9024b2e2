// crates/geodir-core/src/detail.rs
use crate::model::{CountrySummary, DetailOutcome, DetailView};
use crate::traits::DirectoryClient;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds the detail page for one navigation.
///
/// 1. exact-name lookup of the primary record (absent → `NotFound`)
/// 2. derive calling code and primary currency from the record
/// 3. fetch both related-country sets concurrently and wait for both
///
/// Related lookups never turn the outcome into `NotFound`; a failure there
/// only empties that list.
pub struct DetailAggregator<C: ?Sized> {
    client: Arc<C>,
}

impl<C: ?Sized> Clone for DetailAggregator<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: DirectoryClient + ?Sized> DetailAggregator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn aggregate(&self, name: &str) -> DetailOutcome {
        let Some(record) = self.client.lookup_exact_by_name(name).await else {
            info!(%name, "country not found");
            return DetailOutcome::NotFound {
                name: name.to_string(),
            };
        };

        let derived_calling_code = record.calling_code();
        let derived_primary_currency_code = record.primary_currency_code().map(str::to_string);

        let dial_key = derived_calling_code.trim_start_matches('+');
        let calling = async {
            if dial_key.is_empty() {
                debug!(%name, "no calling code, related lookup skipped");
                return Vec::new();
            }
            self.client.lookup_by_calling_code(dial_key).await
        };
        let currency = async {
            match derived_primary_currency_code.as_deref() {
                Some(code) => self.client.lookup_by_currency_code(code).await,
                None => {
                    debug!(%name, "no currency, related lookup skipped");
                    Vec::<CountrySummary>::new()
                }
            }
        };
        let (same_calling_code, same_currency) = futures::join!(calling, currency);

        info!(
            %name,
            calling_code = %derived_calling_code,
            currency = ?derived_primary_currency_code,
            same_calling_code = same_calling_code.len(),
            same_currency = same_currency.len(),
            "detail view composed"
        );

        DetailOutcome::Found(Box::new(DetailView {
            record,
            derived_calling_code,
            derived_primary_currency_code,
            same_calling_code,
            same_currency,
        }))
    }
}
