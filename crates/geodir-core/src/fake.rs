// crates/geodir-core/src/fake.rs
//! In-memory directory for unit tests.
//!
//! Unknown keys behave like a failed lookup (empty / `None`). List lookups
//! can be held back with gates to force completion order.
use crate::model::{Coordinates, CountryRecord, CountrySummary, Currency};
use crate::traits::DirectoryClient;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub(crate) fn summaries(names: &[&str]) -> Vec<CountrySummary> {
    names
        .iter()
        .map(|n| {
            let iso: String = n.chars().filter(|c| c.is_alphabetic()).take(2).collect();
            CountrySummary::new(*n, iso.to_uppercase())
        })
        .collect()
}

pub(crate) fn record(name: &str, root: &str, suffixes: &[&str], currencies: &[&str]) -> CountryRecord {
    CountryRecord {
        display_name: name.to_string(),
        flag_image_url: format!("https://flags.example/{}.svg", name.to_lowercase()),
        capitals: vec![format!("{name} City")],
        region: "Testing".to_string(),
        subregion: None,
        coordinates: Coordinates {
            latitude: 1.5,
            longitude: -2.5,
        },
        calling_code_root: root.to_string(),
        calling_code_suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        currencies: currencies
            .iter()
            .map(|code| {
                (
                    code.to_string(),
                    Currency {
                        name: format!("{code} money"),
                        symbol: "¤".to_string(),
                    },
                )
            })
            .collect(),
        alternate_spellings: vec![],
    }
}

/// Releases one held-back name lookup.
pub(crate) struct Gate(oneshot::Sender<()>);

impl Gate {
    pub(crate) fn open(self) {
        let _ = self.0.send(());
    }
}

#[derive(Default)]
pub(crate) struct FakeDirectory {
    names: HashMap<String, Vec<CountrySummary>>,
    records: HashMap<String, CountryRecord>,
    calling_codes: HashMap<String, Vec<CountrySummary>>,
    currencies: HashMap<String, Vec<CountrySummary>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeDirectory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_names(mut self, text: &str, found: Vec<CountrySummary>) -> Self {
        self.names.insert(text.to_string(), found);
        self
    }

    pub(crate) fn with_record(mut self, record: CountryRecord) -> Self {
        self.records.insert(record.display_name.clone(), record);
        self
    }

    pub(crate) fn with_calling_code(mut self, code: &str, found: Vec<CountrySummary>) -> Self {
        self.calling_codes.insert(code.to_string(), found);
        self
    }

    pub(crate) fn with_currency(mut self, code: &str, found: Vec<CountrySummary>) -> Self {
        self.currencies.insert(code.to_string(), found);
        self
    }

    /// Hold back the next `lookup_by_name(text)` until the gate is opened.
    pub(crate) fn gate(&self, text: &str) -> Gate {
        self.gate_op("name", text)
    }

    pub(crate) fn gate_calling_code(&self, code: &str) -> Gate {
        self.gate_op("calling", code)
    }

    pub(crate) fn gate_currency(&self, code: &str) -> Gate {
        self.gate_op("currency", code)
    }

    fn gate_op(&self, op: &str, key: &str) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(format!("{op}:{key}"), rx);
        Gate(tx)
    }

    /// List lookups currently parked on a gate or running.
    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Calls made so far, as `"op:key"`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, op: &str, key: &str) {
        self.calls.lock().unwrap().push(format!("{op}:{key}"));
    }

    /// Record the call and wait on its gate, if one was set.
    async fn enter(&self, op: &str, key: &str) {
        self.record_call(op, key);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let gate = self.gates.lock().unwrap().remove(&format!("{op}:{key}"));
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DirectoryClient for FakeDirectory {
    async fn lookup_by_name(&self, text: &str) -> Vec<CountrySummary> {
        self.enter("name", text).await;
        self.names.get(text).cloned().unwrap_or_default()
    }

    async fn lookup_exact_by_name(&self, name: &str) -> Option<CountryRecord> {
        self.record_call("exact", name);
        self.records.get(name).cloned()
    }

    async fn lookup_by_calling_code(&self, code: &str) -> Vec<CountrySummary> {
        self.enter("calling", code).await;
        self.calling_codes.get(code).cloned().unwrap_or_default()
    }

    async fn lookup_by_currency_code(&self, code: &str) -> Vec<CountrySummary> {
        self.enter("currency", code).await;
        self.currencies.get(code).cloned().unwrap_or_default()
    }
}
