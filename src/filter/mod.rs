//! Filters decide which nodes a query returns.
//!
//! Every strategy implements [`Filter`]. Kind-parameterised strategies
//! ([`SetFilter`], [`PatternFilter`]) never match a node of another kind;
//! [`MethodFilter`] only considers function-like nodes. Ad hoc logic goes
//! through [`PredicateFilter`], which can close over other filters.

pub mod errors;
pub mod method;
pub mod pattern;
pub mod predicate;
pub mod set;

pub use errors::FilterError;
pub use method::MethodFilter;
pub use pattern::PatternFilter;
pub use predicate::{predicate, PredicateFilter};
pub use set::SetFilter;

/// Decides whether a node belongs in a query's results.
///
/// Implementations must be pure functions of the node: no dependence on
/// traversal history, siblings or external mutable state.
pub trait Filter<N> {
    fn matches(&self, node: &N) -> bool;
}

impl<N, F> Filter<N> for &F
where
    F: Filter<N> + ?Sized,
{
    fn matches(&self, node: &N) -> bool {
        (**self).matches(node)
    }
}

impl<N, F> Filter<N> for Box<F>
where
    F: Filter<N> + ?Sized,
{
    fn matches(&self, node: &N) -> bool {
        (**self).matches(node)
    }
}
