use lambda_http::tracing;
use serde::{Deserialize, Serialize};
use snafu::{ensure, OptionExt, ResultExt};

use crate::convert;
use crate::error::{LookupError, NoCardsSnafu, SetTotalMismatchSnafu, UpstreamSnafu};
use crate::pokemontcg::api::{CardDatabase, CardQuery};
use crate::request::LookupRequest;

/// The normalized record returned to callers. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub name: String,
    pub set: String,
    pub number: String,
    pub rarity: String,
    pub notes: String,
}

/// Searches by name and collector number, then keeps the printing whose set
/// size matches the requested total.
pub async fn lookup_card<D>(db: &D, request: &LookupRequest) -> Result<LookupResult, LookupError>
where
    D: CardDatabase + ?Sized,
{
    let collector_number = request.number.collector_number;
    let set_total = request.number.set_total;

    let query = CardQuery::new(&request.card_name, collector_number);
    let cards = db.search_cards(&query).await.context(UpstreamSnafu)?;

    ensure!(
        !cards.is_empty(),
        NoCardsSnafu {
            card_name: &request.card_name,
            collector_number,
        }
    );

    let mut printings = convert::printings_with_total(&cards, set_total);
    let card = printings.next().context(SetTotalMismatchSnafu {
        card_name: &request.card_name,
        collector_number,
        set_total,
    })?;

    // Variant printings can share name, number and set size; upstream order decides.
    let others = printings.count();
    if others > 0 {
        tracing::warn!(
            card_name = %request.card_name,
            number = %request.number_string,
            chosen = %card.id,
            candidates = others + 1,
            "multiple printings match the set total, using the first"
        );
    }

    Ok(convert::card_to_lookup_result(card, set_total))
}
