pub mod catalog;
pub mod categories;
pub mod draft;
pub mod listings;
