use log::trace;

use super::ComponentBase;
use crate::types::{shallow_merge, NodeList, Props, SharedComponent, State, UpdateCallback};

/// A node in the component tree.
///
/// Concrete node types embed a [`ComponentBase`] for storage and supply a
/// [`render`](Component::render) implementation; everything else — the
/// accessors, the lifecycle hooks, and the whole `set_state` protocol —
/// comes as provided methods. The hook names deliberately mirror React's
/// class-component lifecycle, since this is the same model: an update gate, a
/// pre-update hook, and a post-update hook around each gated render.
///
/// The trait is object safe; the usual way to hold nodes is through
/// [`SharedComponent`] handles (`Rc<RefCell<dyn Component>>`).
pub trait Component {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Access the node's storage.
    fn base(&self) -> &ComponentBase;

    /// Mutable access to the node's storage.
    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Project current props and state to whatever this node renders to.
    ///
    /// Render functions need to be pure: they must not mutate the node's own
    /// props or state. The core does not enforce this, it only guarantees
    /// when render is invoked and with what `force` flag.
    fn render(&self, force: bool);

    // =========================================================================
    // Overridable Hooks
    // =========================================================================

    /// Update gate. Called from `set_state` with the current props and the
    /// already-merged next state; returning `false` skips the pre/post hooks
    /// and the render for that update (the merged state is still stored and
    /// the completion callback still runs).
    ///
    /// Defaults to `true`. Override it to short-circuit rendering work when
    /// the transition cannot require one. Never called for construction or
    /// `force_update`.
    fn should_component_update(&self, _next_props: &Props, _next_state: &State) -> bool {
        true
    }

    /// Called immediately before a gated render, with the current props and
    /// the merged next state. Default no-op.
    fn component_will_update(&self, _next_props: &Props, _next_state: &State) {}

    /// Called immediately after a gated render, with the current props and
    /// the pre-merge state. Default no-op.
    fn component_did_update(&self, _prev_props: &Props, _prev_state: &State) {}

    // =========================================================================
    // Provided Methods - Accessors
    // =========================================================================

    /// Identity key, unique among siblings under the same parent.
    fn key(&self) -> &str {
        self.base().key()
    }

    /// Input document. Read-only by convention; it is never touched after
    /// construction.
    fn props(&self) -> &Props {
        self.base().props()
    }

    /// Owned state document. Mutate it only through [`set_state`](Component::set_state).
    fn state(&self) -> &State {
        self.base().state()
    }

    /// Owned child nodes, in insertion order.
    fn children(&self) -> &NodeList {
        self.base().children()
    }

    /// Containing node, or `None` for a root.
    fn parent(&self) -> Option<SharedComponent> {
        self.base().parent()
    }

    // =========================================================================
    // Provided Methods - Updating
    // =========================================================================

    /// Render immediately with `force = true`, bypassing the gate and both
    /// update hooks. Escape hatch; state is left untouched.
    fn force_update(&self) {
        self.render(true);
    }

    /// Shallow-merge `partial` into state and run the update protocol.
    /// Same as [`set_state_with`](Component::set_state_with) without a
    /// completion callback.
    fn set_state(&mut self, partial: State) {
        self.set_state_with(partial, Box::new(|_, _| {}));
    }

    /// Shallow-merge `partial` into state, consult the gate, and on a pass
    /// run `component_will_update`, a forced render, then
    /// `component_did_update`. `on_complete` runs last with
    /// `(prev_state, current_props)` whether or not the gate passed.
    ///
    /// State is assigned only after the hook/render block: a render driven
    /// by this call reads the pre-merge document through
    /// [`state`](Component::state). Long-standing protocol behavior that
    /// callers rely on; do not reorder.
    fn set_state_with(&mut self, partial: State, on_complete: UpdateCallback) {
        let prev_state = self.state().clone();
        let mut new_state = prev_state.clone();
        shallow_merge(&mut new_state, &partial);

        if self.should_component_update(self.props(), &new_state) {
            trace!("[component] set_state on {:?}: rendering", self.key());
            self.component_will_update(self.props(), &new_state);
            self.render(true);
            self.component_did_update(self.props(), &prev_state);
        } else {
            trace!("[component] set_state on {:?}: gated off", self.key());
        }

        self.base_mut().replace_state(new_state);
        on_complete(&prev_state, self.props());
    }

    /// Compute a partial state from the current state and props, then
    /// forward to [`set_state`](Component::set_state). Same merge and hook
    /// sequencing as a literal partial.
    fn set_state_from(&mut self, updater: &dyn Fn(&State, &Props) -> State) {
        let partial = updater(self.state(), self.props());
        self.set_state(partial);
    }
}
