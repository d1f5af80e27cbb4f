//! The component tree: nodes carrying props, state, and owned children,
//! updated through a gated state-merge protocol.
//!
//! A node is any type implementing [`Component`]; the tree is just the
//! transitive closure of shared handles connected by child lists and weak
//! parent back-references. Child mutation lives on [`ComponentExt`] because
//! linking a child's parent requires the node's own shared handle.

mod base;
mod traits;
mod tree;

pub use base::ComponentBase;
pub use traits::Component;
pub use tree::{mount, ComponentExt};
