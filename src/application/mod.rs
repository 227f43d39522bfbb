//! Application layer - Use cases and orchestration

pub mod filter_catalog;
pub mod filter_ringers;
pub mod init;
pub mod inspect_filter;

pub use filter_catalog::FilterCatalogService;
pub use filter_ringers::{FilterOptions, FilterRingersService};
pub use init::InitService;
pub use inspect_filter::InspectFilterService;
