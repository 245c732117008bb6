//! Go front-end binding.
//!
//! Parsing is done by tree-sitter's Go grammar; this module only adapts the
//! resulting trees to [`SyntaxNode`](crate::tree::SyntaxNode) so the generic
//! engine can query them.

pub mod errors;
pub mod kind;
pub mod node;
pub mod package;
pub mod parser;

pub use errors::SourceError;
pub use kind::GoKind;
pub use node::{GoNode, Position};
pub use package::{load_file, load_packages, GoPackage, LoadOptions};
pub use parser::{ErrorNode, GoParser, SourceFile};
