//! crowdring - Campaign supporter targeting
//!
//! Keeps a roster of ringers (supporters who rang a campaign number), each
//! carrying `type:value` tags, and selects them with grouped tag filters.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CrowdringError;
