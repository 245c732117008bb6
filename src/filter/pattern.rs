use crate::filter::{Filter, FilterError};
use crate::ident::identifier;
use crate::tree::SyntaxNode;
use regex::Regex;

/// Matches nodes of one kind whose identifier contains a match of a regular
/// expression.
///
/// The search is unanchored: `Service` matches `MyServiceImpl`. Anchor the
/// pattern (`^Service$`) to require a whole-name match.
#[derive(Debug, Clone)]
pub struct PatternFilter<K> {
    pattern: Regex,
    kind: K,
}

impl<K> PatternFilter<K> {
    /// Compile `pattern`. An invalid expression is rejected here, before any
    /// query runs.
    pub fn new(pattern: &str, kind: K) -> Result<Self, FilterError> {
        let pattern = Regex::new(pattern).map_err(|source| FilterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::from_regex(pattern, kind))
    }

    pub fn from_regex(pattern: Regex, kind: K) -> Self {
        Self { pattern, kind }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }
}

impl<N: SyntaxNode> Filter<N> for PatternFilter<N::Kind> {
    fn matches(&self, node: &N) -> bool {
        node.kind() == self.kind && identifier(node).is_some_and(|name| self.pattern.is_match(name))
    }
}
