use crate::lookup::LookupResult;
use crate::pokemontcg::models::Card;

const NO_RARITY: &str = "N/A";
const UNKNOWN_ARTIST: &str = "Unknown";

/// Records among `cards` printed in a set of exactly `set_total` cards,
/// in upstream order.
pub fn printings_with_total(cards: &[Card], set_total: u32) -> impl Iterator<Item = &Card> {
    cards
        .iter()
        .filter(move |card| card.set.printed_total == Some(set_total))
}

/// Callers only pass cards taken from `printings_with_total`, so the set's
/// printed total is always present here.
pub fn card_to_lookup_result(card: &Card, set_total: u32) -> LookupResult {
    let rarity = card
        .rarity
        .as_deref()
        .filter(|r| !r.is_empty())
        .unwrap_or(NO_RARITY);

    LookupResult {
        name: card.name.clone(),
        set: card.set.name.clone(),
        number: format!("{}/{}", card.number, set_total),
        rarity: rarity.to_string(),
        notes: format!(
            "Illustrator: {}",
            card.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
        ),
    }
}
