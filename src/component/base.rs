use crate::types::{NodeList, Props, SharedComponent, State, WeakComponent};

/// Per-node storage: identity, documents, and tree links.
///
/// Concrete component types embed one of these and hand it back through
/// [`Component::base`](crate::Component::base); the update protocol and the
/// tree operations go through it. Fields are private so that state is only
/// ever replaced by the `set_state` path and the parent link is only ever
/// written by an adding parent.
#[derive(Default)]
pub struct ComponentBase {
    key: String,
    props: Props,
    state: State,
    children: NodeList,
    parent: Option<WeakComponent>,
}

impl ComponentBase {
    /// Create storage with the given key and props, empty state, and no
    /// children. Initial children are attached afterwards via
    /// [`mount`](crate::mount) or [`ComponentExt::add_children`](crate::ComponentExt::add_children).
    pub fn new(key: impl Into<String>, props: Props) -> Self {
        Self {
            key: key.into(),
            props,
            ..Default::default()
        }
    }

    /// Identity key, unique among siblings under the same parent.
    pub fn key(&self) -> &str {
        &self.key
    }

    // Props shouldn't be modified through this.
    pub fn props(&self) -> &Props {
        &self.props
    }

    // State shouldn't be modified through this; use set_state.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn children(&self) -> &NodeList {
        &self.children
    }

    /// Upgraded parent handle, or `None` for a root (or a node whose old
    /// parent has been dropped).
    pub fn parent(&self) -> Option<SharedComponent> {
        self.parent.as_ref().and_then(WeakComponent::upgrade)
    }

    pub(crate) fn replace_state(&mut self, state: State) {
        self.state = state;
    }

    pub(crate) fn set_parent(&mut self, parent: WeakComponent) {
        self.parent = Some(parent);
    }

    pub(crate) fn children_mut(&mut self) -> &mut NodeList {
        &mut self.children
    }
}
