use crate::filter::Filter;
use crate::tree::SyntaxNode;
use crate::walk::walk;

/// Every node under `roots` that `filter` matches, in document order.
///
/// Roots are searched in the order given and their results concatenated.
/// Descent stops at a matching node, so a match never contains another match
/// from the same call.
pub fn find<N, F, I>(roots: I, filter: &F) -> Vec<N>
where
    N: SyntaxNode,
    F: Filter<N> + ?Sized,
    I: IntoIterator<Item = N>,
{
    let mut found = Vec::new();
    let mut root_count = 0usize;

    for root in roots {
        root_count += 1;
        walk(root, |node| {
            if filter.matches(&node) {
                found.push(node);
                return false;
            }
            true
        });
    }

    tracing::debug!(roots = root_count, matches = found.len(), "find complete");
    found
}
