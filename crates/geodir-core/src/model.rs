// crates/geodir-core/src/model.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Minimal country identity used for suggestions and "shares X" lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountrySummary {
    pub display_name: String,
    pub iso_alpha2: String,
}

impl CountrySummary {
    pub fn new(display_name: impl Into<String>, iso_alpha2: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            iso_alpha2: iso_alpha2.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// ISO 3166-1 alpha-2 code (e.g. "US"). May be empty if upstream omitted it.
    pub fn iso_alpha2(&self) -> &str {
        &self.iso_alpha2
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// Full country payload backing the detail view.
///
/// Produced by a single exact-name lookup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub display_name: String,
    pub flag_image_url: String,
    /// Some countries have several capitals, some (Antarctica) none.
    pub capitals: Vec<String>,
    pub region: String,
    pub subregion: Option<String>,
    pub coordinates: Coordinates,
    pub calling_code_root: String, // e.g. "+4"
    pub calling_code_suffixes: Vec<String>, // e.g. ["9"]
    /// Currency code -> details, in the order the service sent them.
    pub currencies: IndexMap<String, Currency>,
    pub alternate_spellings: Vec<String>,
}

impl CountryRecord {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Root plus the first suffix, e.g. `"+4"` + `"9"` = `"+49"`.
    ///
    /// Countries with many suffixes (the NANP members share `"+1"`) only use
    /// the first one.
    pub fn calling_code(&self) -> String {
        let suffix = self
            .calling_code_suffixes
            .first()
            .map(String::as_str)
            .unwrap_or("");
        format!("{}{}", self.calling_code_root, suffix)
    }

    /// First currency key in received order, `None` when the map is empty.
    pub fn primary_currency_code(&self) -> Option<&str> {
        self.currencies.keys().next().map(String::as_str)
    }

    pub fn primary_currency(&self) -> Option<(&str, &Currency)> {
        self.currencies.first().map(|(k, v)| (k.as_str(), v))
    }

    pub fn capitals_label(&self) -> String {
        if self.capitals.is_empty() {
            "N/A".to_string()
        } else {
            self.capitals.join(", ")
        }
    }

    pub fn subregion_label(&self) -> &str {
        self.subregion.as_deref().unwrap_or("N/A")
    }
}

/// Composed detail page: the record plus the two related-country sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub record: CountryRecord,
    pub derived_calling_code: String,
    /// `None` when the record lists no currency; the currency lookup is skipped.
    pub derived_primary_currency_code: Option<String>,
    pub same_calling_code: Vec<CountrySummary>,
    pub same_currency: Vec<CountrySummary>,
}

impl DetailView {
    pub fn calling_code_names(&self) -> Vec<&str> {
        self.same_calling_code
            .iter()
            .map(CountrySummary::display_name)
            .collect()
    }

    pub fn currency_names(&self) -> Vec<&str> {
        self.same_currency
            .iter()
            .map(CountrySummary::display_name)
            .collect()
    }
}

/// "1 country" / "3 countries" / "0 countries".
pub fn related_count_label(count: usize) -> String {
    if count == 1 {
        "1 country".to_string()
    } else {
        format!("{count} countries")
    }
}

/// Outcome of one detail navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailOutcome {
    Found(Box<DetailView>),
    /// Carries the name that was requested, not a normalized one.
    NotFound { name: String },
}

impl DetailOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, DetailOutcome::Found(_))
    }

    pub fn view(&self) -> Option<&DetailView> {
        match self {
            DetailOutcome::Found(view) => Some(view.as_ref()),
            DetailOutcome::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(root: &str, suffixes: &[&str], currencies: &[&str]) -> CountryRecord {
        CountryRecord {
            display_name: "Testland".into(),
            flag_image_url: String::new(),
            capitals: vec![],
            region: "Europe".into(),
            subregion: None,
            coordinates: Coordinates::default(),
            calling_code_root: root.into(),
            calling_code_suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
            currencies: currencies
                .iter()
                .map(|c| (c.to_string(), Currency::default()))
                .collect(),
            alternate_spellings: vec![],
        }
    }

    #[test]
    fn calling_code_uses_first_suffix_only() {
        assert_eq!(record("+4", &["9"], &[]).calling_code(), "+49");
        assert_eq!(record("+1", &["201", "202"], &[]).calling_code(), "+1201");
        assert_eq!(record("+1", &[], &[]).calling_code(), "+1");
        assert_eq!(record("", &[], &[]).calling_code(), "");
    }

    #[test]
    fn primary_currency_is_first_in_received_order() {
        assert_eq!(
            record("", &[], &["ZWL", "BWP", "AUD"]).primary_currency_code(),
            Some("ZWL")
        );
        assert_eq!(record("", &[], &[]).primary_currency_code(), None);
    }

    #[test]
    fn labels_fall_back_to_na() {
        let mut r = record("", &[], &[]);
        assert_eq!(r.capitals_label(), "N/A");
        assert_eq!(r.subregion_label(), "N/A");

        r.capitals = vec!["Pretoria".into(), "Bloemfontein".into(), "Cape Town".into()];
        r.subregion = Some("Southern Africa".into());
        assert_eq!(r.capitals_label(), "Pretoria, Bloemfontein, Cape Town");
        assert_eq!(r.subregion_label(), "Southern Africa");
    }

    #[test]
    fn related_count_pluralizes() {
        assert_eq!(related_count_label(0), "0 countries");
        assert_eq!(related_count_label(1), "1 country");
        assert_eq!(related_count_label(25), "25 countries");
    }
}
