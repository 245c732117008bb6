use crate::filter::Filter;
use crate::ident::identifier;
use crate::tree::SyntaxNode;
use std::collections::HashSet;

/// Matches nodes of one kind whose identifier is in a fixed set of names.
#[derive(Debug, Clone)]
pub struct SetFilter<K> {
    names: HashSet<String>,
    kind: K,
}

impl<K> SetFilter<K> {
    /// Order and duplicates in `names` are irrelevant.
    pub fn new<I, S>(names: I, kind: K) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            kind,
        }
    }

    pub fn names(&self) -> &HashSet<String> {
        &self.names
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }
}

impl<N: SyntaxNode> Filter<N> for SetFilter<N::Kind> {
    fn matches(&self, node: &N) -> bool {
        node.kind() == self.kind && identifier(node).is_some_and(|name| self.names.contains(name))
    }
}
