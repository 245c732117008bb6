//! Identifier extraction shared by the name-based filters.

use crate::tree::SyntaxNode;

/// Primary identifier of `node`.
///
/// Checks the declared-name position first, then the accessed-member
/// position of member-access nodes. Nodes exposing neither yield `None`.
pub fn identifier<N: SyntaxNode>(node: &N) -> Option<&str> {
    node.primary_identifier().or_else(|| node.member_identifier())
}

/// Whether `name` is visible outside its package (first character is an
/// uppercase letter).
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
