use crate::ast::AstNode;
use crate::visitor::Visitor;
use std::ops::ControlFlow;

/// Signal raised to abandon a traversal.
///
/// Once a hook returns `ControlFlow::Break(VisitBreak)`, no further hooks
/// run; the break propagates through every enclosing call with `?`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VisitBreak;

/// Outcome of a traversal step: `Continue` with a result or `Break`.
pub type VisitFlow<T = ()> = ControlFlow<VisitBreak, T>;

/// Runs `visitor` over `node` and maps an early exit to `T::default()`.
pub fn visit_with_break<N, V, T>(node: &N, visitor: &mut V) -> T
where
    N: AstNode,
    V: Visitor<Output = VisitFlow<T>> + ?Sized,
    T: Default,
{
    match node.accept(visitor) {
        ControlFlow::Continue(result) => result,
        ControlFlow::Break(VisitBreak) => T::default(),
    }
}
