use serde::Deserialize;

/// Paging fields are only logged; the first page is all a lookup reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub data: Option<Vec<Card>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub count: Option<u32>,
    pub total_count: Option<u32>,
}

/// Unused fields are omitted
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Collector number as printed, e.g. "58" or "TG12".
    pub number: String,
    pub rarity: Option<String>,
    pub artist: Option<String>,
    pub set: CardSet,
}

/// Unused fields are omitted
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Denominator printed on the cards; excludes secret rares.
    pub printed_total: Option<u32>,
}

impl SearchResult {
    pub fn into_cards(self) -> Vec<Card> {
        self.data.unwrap_or_default()
    }
}
