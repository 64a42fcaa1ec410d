//! `vitrine-catalog` — category hierarchy resolution.
//!
//! Categories are stored flat, each with an optional parent reference. This
//! crate assembles a point-in-time snapshot into a forest for display and
//! into transitive descendant-id sets for scoping product queries. The
//! transforms are pure; the only IO is the snapshot read behind
//! [`CategoryStore`].

pub mod category;
pub mod service;
pub mod store;
pub mod tree;

pub use category::{Category, CategoryNode};
pub use service::CatalogService;
pub use store::{CategoryStore, CatalogStoreError, InMemoryCategoryStore};
pub use tree::{build_forest, descendant_ids};
