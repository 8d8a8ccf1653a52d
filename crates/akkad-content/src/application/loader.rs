//! Catalog loading from JSON or YAML files.
//!
//! The file maps each suit key to an object of cards. Every card has an
//! `up` face (name, legend, index, printed value) and a `down` face
//! (reversed legend):
//!
//! ```json
//! { "red": { "ace": { "up": { "name": "…", "legend": "…", "index": 0, "value": "1" },
//!                     "down": { "legend": "…" } } } }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use akkad_core::error::DomainError;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::cards::{Card, CardIndex};
use crate::domain::catalog::Catalog;
use crate::domain::suits::SuitKey;

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from a file extension; anything but `yaml`/`yml`
    /// is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(u32),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawUpFace {
    name: String,
    legend: String,
    index: CardIndex,
    value: RawValue,
}

#[derive(Debug, Deserialize)]
struct RawDownFace {
    legend: String,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    up: RawUpFace,
    down: RawDownFace,
}

type RawCatalog = BTreeMap<SuitKey, BTreeMap<String, RawCard>>;

fn into_card(suit: SuitKey, raw: RawCard) -> Card {
    // Printed values may be words ("Ace"); fall back to the rank in the suit.
    #[allow(clippy::cast_possible_truncation)]
    let rank = (raw.up.index.as_usize() % SuitKey::CARDS_PER_SUIT + 1) as u32;
    let value = match raw.up.value {
        RawValue::Number(n) => n,
        RawValue::Text(ref s) => s.trim().parse().unwrap_or(rank),
    };
    Card {
        name: raw.up.name,
        suit,
        up_legend: raw.up.legend,
        reversed_legend: raw.down.legend,
        value,
        display_value: raw.up.value.to_string(),
        index: raw.up.index,
    }
}

fn build(raw: RawCatalog) -> Result<Catalog, DomainError> {
    let cards = raw
        .into_iter()
        .flat_map(|(suit, cards)| cards.into_values().map(move |card| into_card(suit, card)))
        .collect();
    Catalog::new(cards)
}

/// Parses a catalog from text in the given format.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the text is malformed or the cards
/// do not cover the deck exactly once.
pub fn parse_catalog(text: &str, format: CatalogFormat) -> Result<Catalog, DomainError> {
    let raw: RawCatalog = match format {
        CatalogFormat::Json => serde_json::from_str(text)
            .map_err(|e| DomainError::Validation(format!("catalog parse failed: {e}")))?,
        CatalogFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| DomainError::Validation(format!("catalog parse failed: {e}")))?,
    };
    build(raw)
}

/// Reads and parses the catalog file at `path`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the file cannot be read and
/// `DomainError::Validation` if its contents are not a valid catalog.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_catalog(path: &Path) -> Result<Catalog, DomainError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Infrastructure(format!("cannot read catalog {}: {e}", path.display()))
    })?;
    let format = CatalogFormat::from_path(path);
    let catalog = parse_catalog(&text, format)?;
    debug!(?format, "catalog loaded");
    Ok(catalog)
}
