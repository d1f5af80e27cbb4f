use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde_json::{Map, Value};

use crate::component::Component;

/// Generic JSON-like document: string keys mapped to arbitrary values.
///
/// Props and state are both documents. The core never interprets their
/// contents; it only needs keyed lookup, (key, value) iteration, insertion,
/// and equality on leaf values, all of which `serde_json::Map` provides.
pub type Document = Map<String, Value>;

/// Externally supplied, read-only (by convention) input document for a node.
pub type Props = Document;

/// Internally owned document, merged shallowly on each update.
pub type State = Document;

/// Shared handle to a node. Parents own their children through these;
/// dropping the last handle releases the node and, transitively, any
/// children it was the sole owner of.
pub type SharedComponent = Rc<RefCell<dyn Component>>;

/// Non-owning back-reference from a child to its parent.
pub type WeakComponent = Weak<RefCell<dyn Component>>;

/// Ordered list of owned child nodes.
pub type NodeList = Vec<SharedComponent>;

/// Completion callback for `set_state_with`, invoked with
/// `(prev_state, current_props)` whether or not an update was rendered.
pub type UpdateCallback = Box<dyn FnOnce(&State, &Props)>;

/// Shallow-merge `partial` into `target`: every top-level key present in
/// `partial` overwrites the corresponding key in `target`, all other keys
/// are left untouched. Nested documents are replaced wholesale, never
/// merged recursively.
pub fn shallow_merge(target: &mut Document, partial: &Document) {
    for (key, value) in partial {
        target.insert(key.clone(), value.clone());
    }
}
