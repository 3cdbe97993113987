//! # Amani Catalog
//!
//! Typed content records for the Amani Connect community platform.
//!
//! The platform publishes three kinds of community content, each with
//! descriptive text, a classification value, and engagement counters:
//!
//! - **Tips**: practical safety advice, classified by `category`
//! - **Campaigns**: awareness campaigns, classified by `campaignType`
//! - **Sessions**: live Q&A and expert sessions, classified by `topic`
//!
//! ## Architecture
//!
//! ```text
//! JSON content store ──┐
//!                      ├──> ContentStore (one immutable catalog per kind)
//! Built-in samples ────┘          │
//!                                 ├──> Searchable seam (title/body/tokens/class)
//!                                 │        └─> consumed by amani-search
//!                                 └──> validate() (unique ids, parseable dates)
//!
//! Submission drafts ──> Draft::from_value ──> validate() ──> accepted payload
//! ```
//!
//! Catalogs are defined once and never mutated at runtime; every consumer
//! reads them through shared references. Campaigns carry a classification
//! for display but do not participate in category filtering, which is a
//! deliberate platform contract (see [`Searchable::filter_class`]).

mod dates;
mod draft;
mod error;
mod records;
mod sample;
mod searchable;
mod store;

pub use dates::DATE_FORMAT;
pub use draft::{CampaignDraft, Draft, SessionDraft, TipDraft};
pub use error::{CatalogError, Result};
pub use records::{Campaign, Engagement, RecordKind, Session, Tip};
pub use searchable::Searchable;
pub use store::ContentStore;
