//! Infrastructure layer - Config and roster files

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{CampaignRepository, FileSystemRepository};
