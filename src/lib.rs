//! Pokémon card lookup behind a Lambda HTTP endpoint.
//!
//! A request names a card and its printed "number/total"; the handler asks
//! the Pokémon TCG API for that name and collector number, keeps the printing
//! whose set size matches the total, and answers with a flat record.

pub mod convert;
pub mod error;
pub mod handler;
pub mod lookup;
pub mod platform;
pub mod pokemontcg;
pub mod request;

pub use error::{ErrorKind, LookupError};
pub use lookup::LookupResult;
pub use pokemontcg::api::{CardDatabase, CardQuery, PokemonTcgClient};
