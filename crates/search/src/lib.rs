//! Filter engine for community content catalogs.
//!
//! Pure, synchronous selection over immutable record collections: a
//! free-text query is matched case-insensitively against each record's
//! title, body, and tokens, AND-combined with an optional category
//! constraint. Results preserve catalog order; nothing is ranked,
//! cached, or mutated.

mod engine;
mod index;

pub use engine::{filter, CategoryFilter};
pub use index::category_index;
