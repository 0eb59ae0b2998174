//! Input operation model and command-line parsing.

mod command_parser;
mod operations_model;

pub use command_parser::*;
pub use operations_model::*;
