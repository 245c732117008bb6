//! Capabilities the query engine needs from an externally-built syntax tree.
//!
//! The engine never inspects a concrete tree representation. Everything it
//! knows about a node comes through [`SyntaxNode`], which a front-end binding
//! (see [`crate::go`]) implements with an explicit per-kind accessor table.

use std::fmt;

/// Shape of a type reference, as far as receiver resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape<'a, N> {
    /// A single-level indirection such as `*T`, carrying the referenced type.
    Indirection(N),
    /// A plain named type.
    Named(&'a str),
    /// Anything else (qualified, array, generic, function type, ...). The
    /// payload names the shape for error reporting.
    Unsupported(&'static str),
}

/// A read-only handle into a parsed tree.
///
/// Handles are cheap to copy and alias the tree they came from. Every
/// accessor is total: shapes a binding does not recognise report `None` (or
/// [`TypeShape::Unsupported`]) instead of failing.
pub trait SyntaxNode: Copy {
    /// Closed tag distinguishing node shapes.
    type Kind: Copy + Eq + fmt::Debug;

    fn kind(&self) -> Self::Kind;

    /// Children in left-to-right source order.
    fn children(&self) -> Vec<Self>;

    /// Text of the identifier in the node's declared-name position, if the
    /// node has one and it holds an identifier.
    fn primary_identifier(&self) -> Option<&str>;

    /// Text of the identifier in the accessed-member position of a member
    /// access (`x.Member`), if the node is one.
    fn member_identifier(&self) -> Option<&str>;

    /// Type references of each declared receiver parameter.
    ///
    /// `None` when the node is not function-like. Free functions return an
    /// empty list.
    fn receiver_types(&self) -> Option<Vec<Self>>;

    /// Classify this node as a type reference.
    fn type_shape(&self) -> TypeShape<'_, Self>;
}
