//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&dyn KeyValueStore` as the first argument and own one storage
//! key.

pub mod draft_repo;
pub mod listing_repo;

pub use draft_repo::DraftRepo;
pub use listing_repo::ListingRepo;
