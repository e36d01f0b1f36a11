//! Traversal of syntax trees.
//!
//! - [`Visitor`] is plain double dispatch: one method per node kind with a
//!   catch-all default.
//! - [`Walker`] visits every node of a tree with `enter`/`leave` hooks.
//! - [`Rewriter`] produces a new tree, sharing every subtree it leaves
//!   untouched with the input.
//!
//! Walkers and rewriters stop early by returning
//! `ControlFlow::Break(VisitBreak)` from any hook.

mod rewriter;
mod visit_flow;
mod visitor;
mod walker;

pub use rewriter::Rewrite;
pub use rewriter::Rewriter;
pub use rewriter::rewrite;
pub use rewriter::rewrite_document;
pub use rewriter::rewrite_schema_document;
pub use visit_flow::VisitBreak;
pub use visit_flow::VisitFlow;
pub use visit_flow::visit_with_break;
pub use visitor::Visitor;
pub use walker::Walk;
pub use walker::Walker;
pub use walker::walk;
