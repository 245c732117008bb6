use crate::filter::Filter;
use std::fmt;

/// A closure used as a filter.
#[derive(Clone, Copy)]
pub struct PredicateFilter<F>(F);

impl<F> PredicateFilter<F> {
    pub fn new(predicate: F) -> Self {
        Self(predicate)
    }
}

impl<F> fmt::Debug for PredicateFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PredicateFilter(..)")
    }
}

impl<N, F> Filter<N> for PredicateFilter<F>
where
    F: Fn(&N) -> bool,
{
    fn matches(&self, node: &N) -> bool {
        (self.0)(node)
    }
}

/// Wrap `f` as a filter. The `N` bound lets closure parameters be inferred.
pub fn predicate<N, F>(f: F) -> PredicateFilter<F>
where
    F: Fn(&N) -> bool,
{
    PredicateFilter(f)
}
