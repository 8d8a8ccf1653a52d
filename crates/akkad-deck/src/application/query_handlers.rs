//! Query handlers for the deck context.
//!
//! Produces the read model a presentation layer renders: the face-up card
//! and the counters shown next to the pile, discard and lock buttons.

use akkad_content::image::image_url;
use akkad_core::error::DomainError;
use serde::Serialize;

use crate::domain::deck::{Deck, Drawn};
use crate::domain::events::LockScope;

/// The face-up card, worded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawnView {
    /// Catalog index.
    pub index: u8,
    /// Card name, suffixed with "(reversed)" when reversed.
    pub name: String,
    /// Suit symbol for the orientation.
    pub symbol: String,
    /// Legend for the orientation.
    pub legend: String,
    /// e.g. "7 of Red: The Dreamers".
    pub value: String,
    /// Whether the card is upright.
    pub upright: bool,
    /// Artwork location.
    pub image_url: String,
}

impl From<&Drawn> for DrawnView {
    fn from(drawn: &Drawn) -> Self {
        let card = &drawn.card;
        let suit = card.suit.info();
        let (name, symbol, legend) = if drawn.upright {
            (card.name.clone(), suit.up_symbol, &card.up_legend)
        } else {
            (
                format!("{} (reversed)", card.name),
                suit.reversed_symbol,
                &card.reversed_legend,
            )
        };
        Self {
            index: card.index.get(),
            name,
            symbol: symbol.to_owned(),
            legend: legend.clone(),
            value: format!("{} of {}", card.display_value, suit.name),
            upright: drawn.upright,
            image_url: image_url(card.index),
        }
    }
}

/// One counter per lock scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeCounts {
    pub scene: usize,
    pub session: usize,
    pub act: usize,
}

/// Everything needed to render the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckView {
    /// The face-up card, or `None` when every card is locked.
    pub top: Option<DrawnView>,
    /// Cards left in the pile.
    pub remaining: usize,
    /// Cards drawn since the last shuffle.
    pub discarded: usize,
    /// Cards locked in each scope.
    pub locked: ScopeCounts,
    /// Cards each refresh would release, nested scopes included.
    pub refreshable: ScopeCounts,
}

/// Builds the view of `deck`. Shuffles first if the pile is empty.
///
/// # Errors
///
/// Returns any error from the implied shuffle, except an exhausted pool,
/// which leaves `top` empty.
pub fn deck_view(deck: &mut Deck) -> Result<DeckView, DomainError> {
    let top = match deck.top() {
        Ok(drawn) => Some(DrawnView::from(&drawn)),
        Err(DomainError::ExhaustedPool) => None,
        Err(error) => return Err(error),
    };
    let scene = deck.locked_count(LockScope::Scene);
    let session = deck.locked_count(LockScope::Session);
    let act = deck.locked_count(LockScope::Act);
    Ok(DeckView {
        top,
        remaining: deck.remaining(),
        discarded: deck.discarded(),
        locked: ScopeCounts {
            scene,
            session,
            act,
        },
        refreshable: ScopeCounts {
            scene,
            session: scene + session,
            act: scene + session + act,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use akkad_test_support::{MemoryStore, MockRng, test_catalog};

    use crate::domain::config::DeckConfig;

    fn deck_from(document: &str) -> Deck {
        Deck::from_serialized(
            Some(document),
            Arc::new(test_catalog()),
            Arc::new(MemoryStore::new()),
            Box::new(MockRng),
            DeckConfig::default(),
        )
    }

    #[test]
    fn test_view_of_upright_card() {
        let pile: Vec<u8> = (0..50).collect();
        let mut deck = deck_from(
            &serde_json::json!({
                "nextCards": pile,
                "nextUpside": true,
                "lockedAct": [60],
                "lockedSession": [61, 62],
                "lockedScene": [63],
            })
            .to_string(),
        );

        let view = deck_view(&mut deck).unwrap();
        let top = view.top.as_ref().unwrap();

        assert_eq!(top.index, 49);
        assert_eq!(top.name, "blue 5");
        assert_eq!(top.symbol, "The Imperial Owl");
        assert_eq!(top.legend, "upright legend 49");
        assert_eq!(top.value, "5 of Blue: The People");
        assert!(top.upright);
        assert!(top.image_url.ends_with("pod-page100.png"));
        assert_eq!(view.remaining, 50);
        assert_eq!(view.discarded, 36);
        assert_eq!(
            view.locked,
            ScopeCounts {
                scene: 1,
                session: 2,
                act: 1
            }
        );
        assert_eq!(
            view.refreshable,
            ScopeCounts {
                scene: 1,
                session: 3,
                act: 4
            }
        );
    }

    #[test]
    fn test_view_of_reversed_card() {
        let mut deck = deck_from(
            r#"{"nextCards":[80],"nextUpside":false,"lockedAct":[],"lockedSession":[],"lockedScene":[]}"#,
        );

        let top = deck_view(&mut deck).unwrap().top.unwrap();

        assert_eq!(top.name, "black 6 (reversed)");
        assert_eq!(top.symbol, "The Wind");
        assert_eq!(top.legend, "reversed legend 80");
        assert!(!top.upright);
    }

    #[test]
    fn test_view_with_everything_locked_has_no_top() {
        let everything: Vec<u8> = (0..90).collect();
        let mut deck = deck_from(
            &serde_json::json!({
                "nextCards": [],
                "nextUpside": true,
                "lockedAct": everything,
                "lockedSession": [],
                "lockedScene": [],
            })
            .to_string(),
        );

        let view = deck_view(&mut deck).unwrap();

        assert_eq!(view.top, None);
        assert_eq!(view.remaining, 0);
        assert_eq!(view.locked.act, 90);
    }

    #[test]
    fn test_view_of_empty_deck_shuffles() {
        let mut deck = deck_from("");
        let view = deck_view(&mut deck).unwrap();
        assert_eq!(view.remaining, 90);
        assert_eq!(view.discarded, 0);
    }
}
