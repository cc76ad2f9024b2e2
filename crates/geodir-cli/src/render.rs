//! Plain-text rendering of search state and detail pages.
use geodir_core::model::related_count_label;
use geodir_core::{DetailOutcome, DetailView, SearchState};
use std::fmt::Write;

pub fn search_state(state: &SearchState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "search: {}", state.query_text());

    if state.is_not_found() {
        let _ = writeln!(out, "  Data not found");
        return out;
    }

    for (idx, c) in state.suggestions().iter().enumerate() {
        let marker = if state.active_index() == Some(idx) { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {}. {} ({})", idx + 1, c.display_name(), c.iso_alpha2());
    }
    out
}

fn related_line(label: &str, names: &[&str]) -> String {
    let listed = if names.is_empty() {
        "No countries found".to_string()
    } else {
        names.join(", ")
    };
    format!("  {} {label}: {listed}", related_count_label(names.len()))
}

pub fn detail_view(view: &DetailView) -> String {
    let r = &view.record;
    let mut out = String::new();

    let _ = writeln!(out, "{}  [{}]", r.display_name(), r.flag_image_url);
    if !r.alternate_spellings.is_empty() {
        let _ = writeln!(out, "  aka {}", r.alternate_spellings.join(" · "));
    }
    let _ = writeln!(
        out,
        "LatLong:      {}, {}",
        r.coordinates.latitude, r.coordinates.longitude
    );
    let _ = writeln!(out, "Capital:      {}", r.capitals_label());
    let _ = writeln!(out, "Region:       {}", r.region);
    let _ = writeln!(out, "Subregion:    {}", r.subregion_label());

    let _ = writeln!(out, "Calling Code: {}", view.derived_calling_code);
    let _ = writeln!(out, "{}", related_line("with this calling code", &view.calling_code_names()));

    match r.primary_currency() {
        Some((code, currency)) => {
            let _ = writeln!(out, "Currency:     {code} ({}, {})", currency.name, currency.symbol);
            let _ = writeln!(out, "{}", related_line("with this currency", &view.currency_names()));
        }
        None => {
            let _ = writeln!(out, "Currency:     N/A");
        }
    }
    out
}

pub fn detail_outcome(outcome: &DetailOutcome) -> String {
    match outcome {
        DetailOutcome::Found(view) => detail_view(view),
        DetailOutcome::NotFound { name } => format!("Country not found: {name}\n"),
    }
}
