use crate::tree::SyntaxNode;

/// Pre-order depth-first walk starting at `root`.
///
/// `visit` is called on every reached node; the walk descends into a node's
/// children (left to right) only when `visit` returns `true`. An explicit
/// stack keeps deep trees off the call stack while producing the same order
/// as the recursive definition.
pub fn walk<N, V>(root: N, mut visit: V)
where
    N: SyntaxNode,
    V: FnMut(N) -> bool,
{
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !visit(node) {
            continue;
        }
        // Reversed so the leftmost child is popped first.
        stack.extend(node.children().into_iter().rev());
    }
}
