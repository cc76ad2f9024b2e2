// crates/geodir-core/src/navigation.rs
use url::form_urlencoded;

/// Receives the display name picked in a search session.
///
/// The shell is expected to move the user to the detail view for that
/// name, usually addressed by [`detail_path`].
pub trait Navigator {
    fn navigate(&mut self, name: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, name: &str) {
        self(name)
    }
}

/// Route of the detail view for `name`: `/country/{name}`, URL-encoded.
///
/// ```rust
/// use geodir_core::detail_path;
///
/// assert_eq!(detail_path("United States"), "/country/United%20States");
/// assert_eq!(detail_path("Côte d'Ivoire"), "/country/C%C3%B4te%20d%27Ivoire");
/// ```
pub fn detail_path(name: &str) -> String {
    // form encoding writes spaces as '+' and escapes literal '+' as %2B
    let encoded: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("/country/{}", encoded.replace('+', "%20"))
}

/// Navigator that just remembers where it was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    visited: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }

    pub fn paths(&self) -> Vec<String> {
        self.visited.iter().map(|n| detail_path(n)).collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, name: &str) {
        self.visited.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(detail_path("Peru"), "/country/Peru");
        assert_eq!(detail_path("Bosnia and Herzegovina"), "/country/Bosnia%20and%20Herzegovina");
        assert_eq!(detail_path("a+b/c"), "/country/a%2Bb%2Fc");
        assert_eq!(detail_path("São Tomé"), "/country/S%C3%A3o%20Tom%C3%A9");
    }

    #[test]
    fn recording_navigator_keeps_history() {
        let mut nav = RecordingNavigator::new();
        assert_eq!(nav.last(), None);

        nav.navigate("France");
        nav.navigate("United States");
        assert_eq!(nav.visited(), ["France", "United States"]);
        assert_eq!(nav.last(), Some("United States"));
        assert_eq!(nav.paths()[1], "/country/United%20States");
    }

    #[test]
    fn closures_are_navigators() {
        let mut seen = Vec::new();
        {
            let mut nav = |name: &str| seen.push(name.to_uppercase());
            nav.navigate("chile");
        }
        assert_eq!(seen, ["CHILE"]);
    }
}
