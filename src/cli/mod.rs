//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, FilterAction};
pub use output::{format_filter_groups, format_filter_list, format_ringer_list, parse_date};
