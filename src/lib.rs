//! astquery: find nodes in parsed syntax trees by name, pattern or shape.
//!
//! Given one or more tree roots and a [`Filter`], [`find`] returns every
//! node the filter matches, in document order, without descending into a
//! node once it has matched.
//!
//! # Architecture
//!
//! The engine is generic over [`SyntaxNode`], a small capability trait
//! (kind, children, declared name, accessed member, receivers, type shape).
//! Filters are written once against that trait:
//!
//! - [`SetFilter`]: identifier is one of a set of names
//! - [`PatternFilter`]: identifier contains a regex match
//! - [`MethodFilter`]: method whose receiver resolves to a type name
//! - [`PredicateFilter`]: any closure
//!
//! The [`go`] module binds tree-sitter's Go grammar to the trait, and
//! [`config`] loads filter pipelines from TOML query files.
//!
//! # Example
//!
//! ```no_run
//! use astquery::go::{GoKind, GoParser};
//! use astquery::{find, MethodFilter, PatternFilter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut parser = GoParser::new()?;
//! let file = parser.parse_source(
//!     "svc.go",
//!     "package svc\nfunc (s *Svc) Get() { s.auth.Check() }\n".to_string(),
//! )?;
//!
//! let methods = find([file.root()], &MethodFilter::new("Svc", true));
//! let calls = PatternFilter::new("^Check$", GoKind::SelectorExpression)?;
//! for method in methods {
//!     for call in find([method], &calls) {
//!         println!("{:?} calls {:?}", method.name(), call.name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod filter;
pub mod find;
pub mod go;
pub mod ident;
pub mod pool;
pub mod resolve;
pub mod tree;
pub mod walk;

#[cfg(test)]
mod testing;

// Re-exports
pub use config::{load_from_path, load_from_str, ConfigError, ConfigOrigin, Pipeline, QueryConfig};
pub use filter::{
    predicate, Filter, FilterError, MethodFilter, PatternFilter, PredicateFilter, SetFilter,
};
pub use find::find;
pub use ident::{identifier, is_exported};
pub use resolve::{base_type_name, TypeResolveError};
pub use tree::{SyntaxNode, TypeShape};
pub use walk::walk;
