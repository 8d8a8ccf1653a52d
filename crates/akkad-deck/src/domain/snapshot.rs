//! Persisted form of a deck.

use std::collections::BTreeSet;

use akkad_content::CardIndex;
use akkad_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::state::{DeckState, unique};

/// The JSON document written after every mutation:
/// `{nextCards, nextUpside, lockedAct, lockedSession, lockedScene}`.
///
/// Every index is range-checked while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSnapshot {
    /// Draw pile, top card last.
    pub next_cards: Vec<CardIndex>,
    /// Orientation of the top card.
    #[serde(default)]
    pub next_upside: bool,
    /// Cards locked for the act.
    pub locked_act: Vec<CardIndex>,
    /// Cards locked for the session.
    pub locked_session: Vec<CardIndex>,
    /// Cards locked for the scene.
    pub locked_scene: Vec<CardIndex>,
}

impl DeckSnapshot {
    /// Parses a persisted document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the document is not JSON, lacks a
    /// field, or holds a non-integer or out-of-range index.
    pub fn parse(document: &str) -> Result<Self, DomainError> {
        serde_json::from_str(document)
            .map_err(|e| DomainError::Validation(format!("invalid deck document: {e}")))
    }

    /// Renders the document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if serialization fails.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::Infrastructure(format!("deck serialization failed: {e}")))
    }
}

impl From<&DeckState> for DeckSnapshot {
    fn from(state: &DeckState) -> Self {
        Self {
            next_cards: state.next_cards.clone(),
            next_upside: state.next_upside,
            locked_act: state.locked_act.iter().copied().collect(),
            locked_session: state.locked_session.iter().copied().collect(),
            locked_scene: state.locked_scene.iter().copied().collect(),
        }
    }
}

impl TryFrom<DeckSnapshot> for DeckState {
    type Error = DomainError;

    fn try_from(snapshot: DeckSnapshot) -> Result<Self, Self::Error> {
        // Checked before the locked lists collapse into sets, so a card
        // repeated inside one list is caught too.
        unique(
            snapshot
                .next_cards
                .iter()
                .chain(&snapshot.locked_act)
                .chain(&snapshot.locked_scene)
                .chain(&snapshot.locked_session),
        )?;
        let state = DeckState {
            next_cards: snapshot.next_cards,
            next_upside: snapshot.next_upside,
            locked_act: snapshot.locked_act.into_iter().collect::<BTreeSet<_>>(),
            locked_session: snapshot.locked_session.into_iter().collect(),
            locked_scene: snapshot.locked_scene.into_iter().collect(),
        };
        state.check(false)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn idx(value: i64) -> CardIndex {
        CardIndex::new(value).unwrap()
    }

    #[test]
    fn test_field_names_are_camel_case() {
        let snapshot = DeckSnapshot {
            next_cards: vec![idx(3), idx(1)],
            next_upside: true,
            locked_act: vec![idx(7)],
            locked_session: vec![],
            locked_scene: vec![idx(0)],
        };
        let value: serde_json::Value =
            serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "nextCards": [3, 1],
                "nextUpside": true,
                "lockedAct": [7],
                "lockedSession": [],
                "lockedScene": [0]
            })
        );
    }

    #[test]
    fn test_valid_document_round_trips() {
        let document = r#"{"nextCards":[10,2,55],"nextUpside":false,"lockedAct":[1],"lockedSession":[80,81],"lockedScene":[89]}"#;
        let state = DeckState::try_from(DeckSnapshot::parse(document).unwrap()).unwrap();
        let again = DeckSnapshot::from(&state).to_json().unwrap();
        assert_eq!(again, document);
    }

    #[test]
    fn test_missing_upside_defaults_to_reversed() {
        let snapshot = DeckSnapshot::parse(
            r#"{"nextCards":[],"lockedAct":[],"lockedSession":[],"lockedScene":[]}"#,
        )
        .unwrap();
        assert!(!snapshot.next_upside);
    }

    #[test]
    fn test_malformed_documents_are_rejected() {
        let documents = [
            "",
            "not json",
            "[]",
            r#"{"nextCards":[1,2],"nextUpside":true}"#,
            r#"{"nextCards":[90],"nextUpside":true,"lockedAct":[],"lockedSession":[],"lockedScene":[]}"#,
            r#"{"nextCards":[-1],"nextUpside":true,"lockedAct":[],"lockedSession":[],"lockedScene":[]}"#,
            r#"{"nextCards":["1"],"nextUpside":true,"lockedAct":[],"lockedSession":[],"lockedScene":[]}"#,
            r#"{"nextCards":[1.5],"nextUpside":true,"lockedAct":[],"lockedSession":[],"lockedScene":[]}"#,
            r#"{"nextCards":null,"nextUpside":true,"lockedAct":[],"lockedSession":[],"lockedScene":[]}"#,
        ];
        for document in documents {
            assert!(
                matches!(DeckSnapshot::parse(document), Err(DomainError::Validation(_))),
                "accepted {document:?}"
            );
        }
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let across = DeckSnapshot::parse(
            r#"{"nextCards":[4],"nextUpside":true,"lockedAct":[],"lockedSession":[],"lockedScene":[4]}"#,
        )
        .unwrap();
        assert_eq!(
            DeckState::try_from(across),
            Err(DomainError::DuplicateCard(4))
        );

        let within = DeckSnapshot::parse(
            r#"{"nextCards":[],"nextUpside":true,"lockedAct":[6,6],"lockedSession":[],"lockedScene":[]}"#,
        )
        .unwrap();
        assert_eq!(
            DeckState::try_from(within),
            Err(DomainError::DuplicateCard(6))
        );
    }
}
