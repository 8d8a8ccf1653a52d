//! Card artwork location.

use crate::domain::cards::CardIndex;

/// Relative URL of the artwork for the card at `index`.
///
/// Card faces live on the even pages of the printed deck, so the page
/// number is `(index + 1) * 2`, zero-padded to three digits.
#[must_use]
pub fn image_url(index: CardIndex) -> String {
    let page = (u32::from(index.get()) + 1) * 2;
    format!("./resources/img/deck/Deck of Memories - pod-page{page:03}.png")
}
