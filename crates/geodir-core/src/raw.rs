// crates/geodir-core/src/raw.rs
//! Raw payloads as they come from the directory service.
//!
//! NOTE: these mirror the external API and are only used for decoding.
//! Everything public is converted into [`crate::model`] types first.
use crate::model::{Coordinates, CountryRecord, CountrySummary, Currency};
use indexmap::IndexMap;
use serde::Deserialize;

/// `name` object of the v3.1 API: `{"common": "Germany", "official": ...}`
#[derive(Debug, Default, Deserialize)]
pub struct NameRaw {
    #[serde(default)]
    pub common: String,
}

/// List entry of either API generation.
///
/// v3.1 (`/name/...`):        `{"name": {"common": "Peru"}, "cca2": "PE"}`
/// v2 (`/callingcode`, `/currency`): `{"name": "Peru", "alpha2Code": "PE"}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SummaryRaw {
    V3 {
        name: NameRaw,
        #[serde(default)]
        cca2: String,
    },
    V2 {
        name: String,
        #[serde(rename = "alpha2Code", default)]
        alpha2_code: String,
    },
}

impl From<SummaryRaw> for CountrySummary {
    fn from(raw: SummaryRaw) -> Self {
        match raw {
            SummaryRaw::V3 { name, cca2 } => CountrySummary::new(name.common, cca2),
            SummaryRaw::V2 { name, alpha2_code } => CountrySummary::new(name, alpha2_code),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

/// International dialling prefix: `{"root": "+4", "suffixes": ["9"]}`
#[derive(Debug, Default, Deserialize)]
pub struct IddRaw {
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrencyRaw {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// Full country entry of the v3.1 API (exact-name lookups).
#[derive(Debug, Deserialize)]
pub struct CountryRecordRaw {
    pub name: NameRaw,
    #[serde(default)]
    pub flags: FlagsRaw,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub latlng: Option<(f64, f64)>,
    #[serde(default)]
    pub idd: IddRaw,
    /// Insertion order is the upstream order; the primary currency depends on it.
    #[serde(default)]
    pub currencies: IndexMap<String, CurrencyRaw>,
    #[serde(rename = "altSpellings", default)]
    pub alt_spellings: Vec<String>,
}

impl From<CountryRecordRaw> for CountryRecord {
    fn from(raw: CountryRecordRaw) -> Self {
        let (latitude, longitude) = raw.latlng.unwrap_or_default();
        let currencies = raw
            .currencies
            .into_iter()
            .map(|(code, c)| {
                (
                    code,
                    Currency {
                        name: c.name,
                        symbol: c.symbol,
                    },
                )
            })
            .collect();

        CountryRecord {
            display_name: raw.name.common,
            flag_image_url: raw.flags.svg.or(raw.flags.png).unwrap_or_default(),
            capitals: raw.capital,
            region: raw.region,
            subregion: raw.subregion.filter(|s| !s.is_empty()),
            coordinates: Coordinates {
                latitude,
                longitude,
            },
            calling_code_root: raw.idd.root,
            calling_code_suffixes: raw.idd.suffixes,
            currencies,
            alternate_spellings: raw.alt_spellings,
        }
    }
}
