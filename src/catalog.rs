//! The tea catalog: profile types, the built-in list, JSON loading, and
//! selector resolution.
//!
//! A catalog is an ordered list of teas. It is either the built-in list or
//! the contents of a user-supplied JSON file; an external file replaces the
//! built-ins wholesale, there is no merging.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::time::Duration;
use thiserror::Error;

use crate::duration;

// -----------------------------------------------------------------------------
// Errors
// -----------------------------------------------------------------------------

#[derive(Debug, Error)]
#[error("Failed to parse tea file: {0}")]
pub struct CatalogError(#[from] serde_json::Error);

#[derive(Debug, Error)]
#[error("Tea '{selector}' not found (see --list)")]
pub struct ResolveError {
    pub selector: String,
}

// -----------------------------------------------------------------------------
// Types
// -----------------------------------------------------------------------------

/// Steep duration, carried as duration text (`"2m"`, `"90s"`) in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SteepTime(pub Duration);

impl TryFrom<String> for SteepTime {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        duration::parse(&text)
            .map(SteepTime)
            .map_err(|err| err.to_string())
    }
}

impl From<SteepTime> for String {
    fn from(steep: SteepTime) -> Self {
        duration::format_compact(steep.0)
    }
}

/// A single tea: what it is and how to prepare it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tea {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(rename = "steepTime")]
    pub steep_time: SteepTime,
    /// Brewing temperature in degrees
    pub temp: u32,
}

impl Tea {
    pub fn steep_duration(&self) -> Duration {
        self.steep_time.0
    }

    /// The built-in list used when no tea file is given.
    pub fn defaults() -> Vec<Tea> {
        fn tea(id: u32, kind: &str, name: &str, steep_secs: u64, temp: u32) -> Tea {
            Tea {
                id,
                kind: kind.to_string(),
                name: name.to_string(),
                steep_time: SteepTime(Duration::from_secs(steep_secs)),
                temp,
            }
        }

        vec![
            tea(0, "White", "White Dragon", 120, 70),
            tea(1, "Green", "Temple of Heaven", 120, 80),
            tea(2, "Green", "Green Dragon", 120, 80),
            tea(3, "Black", "Lapsang Souchong", 120, 100),
            tea(4, "Black", "Greenfield Magic Yunnan", 420, 100),
        ]
    }
}

// -----------------------------------------------------------------------------
// Loading
// -----------------------------------------------------------------------------

/// Parse a JSON array of tea records.
pub fn from_reader(reader: impl Read) -> Result<Vec<Tea>, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a tea file, falling back to the built-in list when it is
/// malformed. The parse error is returned alongside the catalog so the
/// caller can surface it as a warning; it is never fatal.
pub fn load_with_fallback(reader: impl Read) -> (Vec<Tea>, Option<CatalogError>) {
    match from_reader(reader) {
        Ok(teas) => (teas, None),
        Err(err) => (Tea::defaults(), Some(err)),
    }
}

// -----------------------------------------------------------------------------
// Resolution
// -----------------------------------------------------------------------------

/// Find a tea by selector.
///
/// A selector that parses as a decimal integer picks by id; anything else
/// must match a tea's name exactly, ignoring case and surrounding
/// whitespace. No fuzzy or prefix matching.
pub fn resolve<'a>(selector: &str, teas: &'a [Tea]) -> Result<&'a Tea, ResolveError> {
    let trimmed = selector.trim();
    let not_found = || ResolveError {
        selector: trimmed.to_string(),
    };

    if let Ok(id) = trimmed.parse::<u32>() {
        return teas.iter().find(|tea| tea.id == id).ok_or_else(not_found);
    }

    let wanted = trimmed.to_lowercase();
    teas.iter()
        .find(|tea| tea.name.to_lowercase() == wanted)
        .ok_or_else(not_found)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": 7, "type": "Oolong", "name": "Iron Goddess", "steepTime": "3m", "temp": 90}
    ]"#;

    #[test]
    fn built_in_catalog_has_five_teas() {
        let teas = Tea::defaults();
        assert_eq!(teas.len(), 5);
        assert_eq!(teas[0].name, "White Dragon");
        assert_eq!(teas[4].steep_time, SteepTime(Duration::from_secs(420)));
    }

    #[test]
    fn resolves_every_built_in_id() {
        let teas = Tea::defaults();
        for tea in &teas {
            let found = resolve(&tea.id.to_string(), &teas).unwrap();
            assert_eq!(found.id, tea.id);
        }
    }

    #[test]
    fn resolves_names_ignoring_case_and_whitespace() {
        let teas = Tea::defaults();
        for selector in ["Lapsang Souchong", "LAPSANG SOUCHONG", " lapsang souchong "] {
            assert_eq!(resolve(selector, &teas).unwrap().id, 3, "{selector:?}");
        }
    }

    #[test]
    fn unknown_selectors_are_not_found() {
        let teas = Tea::defaults();
        let err = resolve("doesnotexist", &teas).unwrap_err();
        assert_eq!(err.selector, "doesnotexist");
        assert!(resolve("99", &teas).is_err());
    }

    #[test]
    fn parses_a_tea_file() {
        let teas = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(teas.len(), 1);
        assert_eq!(teas[0].name, "Iron Goddess");
        assert_eq!(teas[0].steep_duration(), Duration::from_secs(180));
    }

    #[test]
    fn malformed_files_fall_back_to_the_built_ins() {
        let (teas, warning) = load_with_fallback(&b"not json"[..]);
        assert_eq!(teas, Tea::defaults());
        assert!(warning.is_some());

        // A well-formed record with an unparseable steep time is also a
        // parse failure, not a panic.
        let bad = r#"[{"id": 1, "type": "Green", "name": "X", "steepTime": "soon", "temp": 80}]"#;
        let (teas, warning) = load_with_fallback(bad.as_bytes());
        assert_eq!(teas.len(), 5);
        assert!(warning.is_some());
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let teas = Tea::defaults();
        let json = serde_json::to_string(&teas).unwrap();
        let reloaded = from_reader(json.as_bytes()).unwrap();
        assert_eq!(reloaded, teas);
    }
}
