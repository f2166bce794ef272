//! Domain logic for the tradepost listing wizard.
//!
//! Everything here is pure: the category tree, the fixed catalogs, the
//! draft record and its merge rules, field validation, and listing
//! finalization. Persistence lives in `tradepost-db`.

pub mod catalog;
pub mod category;
pub mod draft;
pub mod error;
pub mod listing;
pub mod types;
pub mod validation;
