//! Command implementations for the tempshift CLI.

mod convert;
mod list;

pub use convert::{cmd_convert, ConvertArgs};
pub use list::cmd_list;
