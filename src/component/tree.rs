use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use super::Component;
use crate::types::{NodeList, SharedComponent};

/// Tree mutation on shared component handles.
///
/// Linking a child back to its parent needs the parent's own shared handle
/// (to downgrade into the child's back-reference), so these operations live
/// on [`SharedComponent`] rather than on [`Component`] itself.
///
/// Every misuse path is a silent no-op: duplicate keys, missing keys, and
/// removals from an empty list never fail and never report.
pub trait ComponentExt {
    /// Append `child` and point its parent link at this node. If an existing
    /// child already carries the same key, the call is ignored and the
    /// existing child is kept.
    fn add_child(&self, child: SharedComponent);

    /// `add_child` for each element in order; de-duplication applies
    /// incrementally, exactly as with repeated single calls.
    fn add_children(&self, children: NodeList);

    /// Remove the first child sharing `child`'s key. No-op if none matches.
    fn remove_child(&self, child: &SharedComponent);

    /// Remove the first child with the given key. No-op if the list is empty
    /// or no key matches. The removed child's parent link is left in place;
    /// it stays stale until the child is added to a new parent.
    fn remove_child_by_key(&self, key: &str);

    /// Drop every child unconditionally. No hooks fire.
    fn remove_children(&self);
}

impl ComponentExt for SharedComponent {
    fn add_child(&self, child: SharedComponent) {
        let key = child.borrow().key().to_string();
        let duplicate = self
            .borrow()
            .children()
            .iter()
            .any(|c| c.borrow().key() == key);
        if duplicate {
            trace!("[component] add_child: duplicate key {key:?} ignored");
            return;
        }
        child.borrow_mut().base_mut().set_parent(Rc::downgrade(self));
        self.borrow_mut().base_mut().children_mut().push(child);
    }

    fn add_children(&self, children: NodeList) {
        for child in children {
            self.add_child(child);
        }
    }

    fn remove_child(&self, child: &SharedComponent) {
        let key = child.borrow().key().to_string();
        self.remove_child_by_key(&key);
    }

    fn remove_child_by_key(&self, key: &str) {
        let mut this = self.borrow_mut();
        let children = this.base_mut().children_mut();
        if children.is_empty() {
            return;
        }
        if let Some(index) = children.iter().position(|c| c.borrow().key() == key) {
            children.remove(index);
        }
    }

    fn remove_children(&self) {
        self.borrow_mut().base_mut().children_mut().clear();
    }
}

/// Wrap a concrete node into a shared handle and attach its initial child
/// list. Initial children go through the same de-duplicating, parent-linking
/// `add_child` path as runtime additions; no update hooks fire here — the
/// mount analog is this call completing.
pub fn mount<C>(component: C, children: NodeList) -> SharedComponent
where
    C: Component + 'static,
{
    let shared: SharedComponent = Rc::new(RefCell::new(component));
    shared.add_children(children);
    shared
}
