//! AST definitions for the ternlint expression language.

pub mod visitor;

mod nodes;
mod text_size;

pub use nodes::*;
pub use text_size::{Ranged, TextRange};
