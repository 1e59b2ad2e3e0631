//! Command implementations for the CLI.

mod config;
mod generate;
mod list;
mod query;

pub use config::cmd_config;
pub use generate::cmd_generate;
pub use list::{ListArgs, cmd_list};
pub use query::cmd_query;
