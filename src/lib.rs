//! translation-table: a bilingual lookup table mapping validated English
//! headwords to ordered sets of translations, backed by a hand-built hash
//! table with separate chaining and incremental growth.
//!
//! Internal Design:
//!
//! Summary
//! - Layers:
//!   - ChainTable<V>: structural table. Buckets hold the key of their chain
//!     head; entries live in a generational arena and link to their
//!     successor by key. No entry is owned by another entry.
//!   - TranslationTable: public API (`insert`, `search`, `remove`) over
//!     `ChainTable<BTreeSet<String>>`; owns validation and output format.
//!
//! Hashing
//! - `h = (h * 31 + byte) mod capacity` over the headword's UTF-8 bytes,
//!   taken as unsigned. Recomputed against the current capacity on every
//!   lookup and during growth; nothing is cached per entry.
//!
//! Growth
//! - Capacity starts at 8 and doubles once `len / capacity > 3/4` after a
//!   new headword is linked. Growth relinks arena keys into a fresh bucket
//!   vector; values and keys stay where they are. Removal never shrinks.
//! - Order within a chain after growth is unspecified.
//!
//! Errors and diagnostics
//! - Empty arguments are caller errors: `Err(TableError::EmptyHeadword)` or
//!   `Err(TableError::EmptyTranslation)`, table untouched.
//! - A non-empty headword of the wrong shape is an ordinary miss:
//!   `Ok(false)`, plus one `log::warn!` for every operation alike.
//! - Growth is logged at debug level. The crate never installs a logger.
//!
//! Notes and non-goals
//! - No internal locking. The table is `Send + Sync`; wrap it in a `Mutex`
//!   to share it across threads.
//! - No persistence, no shrinking, ASCII-only headwords.

pub mod chain_table;
#[cfg(test)]
mod chain_table_proptest;
mod error;
pub mod hashing;
pub mod headword;
mod translation_table;

// Public surface
pub use chain_table::{DEFAULT_CAPACITY, MAX_LOAD_FACTOR_DEN, MAX_LOAD_FACTOR_NUM};
pub use error::TableError;
pub use headword::is_well_formed;
pub use translation_table::TranslationTable;
