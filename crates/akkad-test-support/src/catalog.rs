//! A generated catalog with the canonical layout: six suits of fifteen
//! cards, Black last.

use akkad_content::{Card, CardIndex, Catalog, NUMBER_OF_CARDS, SuitKey};

/// Builds a full 90-card catalog. Card `i` belongs to suit
/// `SuitKey::ALL[i / 15]` and is named `"{suit} {rank}"`.
///
/// # Panics
///
/// Never in practice; the generated cards always form a valid catalog.
#[must_use]
pub fn test_catalog() -> Catalog {
    let cards = (0..NUMBER_OF_CARDS)
        .map(|i| {
            let suit = SuitKey::ALL[i / SuitKey::CARDS_PER_SUIT];
            let rank = i % SuitKey::CARDS_PER_SUIT + 1;
            Card {
                name: format!("{} {rank}", suit.as_str()),
                suit,
                up_legend: format!("upright legend {i}"),
                reversed_legend: format!("reversed legend {i}"),
                value: u32::try_from(rank).unwrap(),
                display_value: rank.to_string(),
                index: CardIndex::new(i64::try_from(i).unwrap()).unwrap(),
            }
        })
        .collect();
    Catalog::new(cards).unwrap()
}
