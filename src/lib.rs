pub mod error;
pub mod hash;
pub mod linear;
pub mod lookup;
pub mod sorted;
pub mod strategy;
pub mod util;

pub use error::{LookupError, ParseStrategyError};
pub use hash::HashLookup;
pub use linear::LinearLookup;
pub use lookup::{EntryLookup, KeyedEntry};
pub use sorted::SortedBinaryLookup;
pub use strategy::{AnyLookup, Strategy};

#[cfg(feature = "lookup_stat")]
pub use sorted::SearchStat;
