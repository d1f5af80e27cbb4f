use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};
use trellis::{mount, Component, ComponentBase, Document, NodeList, Props, State};

fn doc(value: Value) -> Document {
    value.as_object().cloned().unwrap_or_default()
}

type EventLog = Rc<RefCell<Vec<String>>>;

/// Component that records every hook invocation, tagged with the value of
/// the state key `"key"` visible at that moment.
struct Recorder {
    base: ComponentBase,
    events: EventLog,
    gate: bool,
}

impl Recorder {
    fn new(events: EventLog, gate: bool) -> Self {
        Self {
            base: ComponentBase::new("recorder", doc(json!({"source": "props"}))),
            events,
            gate,
        }
    }

    fn log(&self, entry: String) {
        self.events.borrow_mut().push(entry);
    }
}

fn key_of(state: &State) -> &str {
    state.get("key").and_then(Value::as_str).unwrap_or("-")
}

impl Component for Recorder {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&self, force: bool) {
        self.log(format!("render:{}:{}", force, key_of(self.state())));
    }

    fn should_component_update(&self, _next_props: &Props, next_state: &State) -> bool {
        self.log(format!("gate:{}", key_of(next_state)));
        self.gate
    }

    fn component_will_update(&self, _next_props: &Props, next_state: &State) {
        self.log(format!("will:{}", key_of(next_state)));
    }

    fn component_did_update(&self, _prev_props: &Props, prev_state: &State) {
        self.log(format!("did:{}", key_of(prev_state)));
    }
}

// ============================================================================
// Shallow Merge
// ============================================================================

#[test]
fn test_set_state_stores_value() {
    let events: EventLog = EventLog::default();
    let mut component = Recorder::new(events, true);

    component.set_state(doc(json!({"key": "value"})));

    assert_eq!(component.state()["key"], "value");
}

#[test]
fn test_set_state_merges_shallowly() {
    let events: EventLog = EventLog::default();
    let mut component = Recorder::new(events, true);

    component.set_state(doc(json!({"a": 1, "b": 2})));
    component.set_state(doc(json!({"b": 3, "c": 4})));

    assert_eq!(*component.state(), doc(json!({"a": 1, "b": 3, "c": 4})));
}

#[test]
fn test_set_state_replaces_nested_documents_wholesale() {
    let events: EventLog = EventLog::default();
    let mut component = Recorder::new(events, true);

    component.set_state(doc(json!({"nested": {"x": 1, "y": 2}})));
    component.set_state(doc(json!({"nested": {"z": 3}})));

    assert_eq!(component.state()["nested"], json!({"z": 3}));
}

// ============================================================================
// Hook Ordering
// ============================================================================

#[test]
fn test_update_hook_ordering() {
    let events: EventLog = EventLog::default();
    let mut component = Recorder::new(events.clone(), true);

    let log = events.clone();
    component.set_state_with(
        doc(json!({"key": "value"})),
        Box::new(move |prev_state, _props| {
            log.borrow_mut().push(format!("complete:{}", key_of(prev_state)));
        }),
    );

    // Gate and will see the merged state; render and did still see the
    // pre-merge state, because assignment happens after the hook block.
    assert_eq!(
        *events.borrow(),
        vec![
            "gate:value",
            "will:value",
            "render:true:-",
            "did:-",
            "complete:-",
        ]
    );
    assert_eq!(component.state()["key"], "value");
}

#[test]
fn test_render_sees_pre_merge_state() {
    let events: EventLog = EventLog::default();
    let mut component = Recorder::new(events.clone(), true);
    component.set_state(doc(json!({"key": "first"})));
    events.borrow_mut().clear();

    component.set_state(doc(json!({"key": "second"})));

    assert_eq!(
        *events.borrow(),
        vec!["gate:second", "will:second", "render:true:first", "did:first"]
    );
    assert_eq!(component.state()["key"], "second");
}

// ============================================================================
// Update Gate
// ============================================================================

#[test]
fn test_gate_skips_hooks_but_still_merges() {
    let events: EventLog = EventLog::default();
    let mut component = Recorder::new(events.clone(), false);

    let log = events.clone();
    component.set_state_with(
        doc(json!({"key": "value"})),
        Box::new(move |prev_state, _props| {
            log.borrow_mut().push(format!("complete:{}", key_of(prev_state)));
        }),
    );

    // No will/render/did, but the completion callback still runs and the
    // merged state is still stored.
    assert_eq!(*events.borrow(), vec!["gate:value", "complete:-"]);
    assert_eq!(component.state()["key"], "value");
}

#[test]
fn test_force_update_bypasses_gate_and_hooks() {
    let events: EventLog = EventLog::default();
    let mut component = Recorder::new(events.clone(), false);
    component.set_state(doc(json!({"key": "value"})));
    events.borrow_mut().clear();

    component.force_update();

    assert_eq!(*events.borrow(), vec!["render:true:value"]);
    assert_eq!(component.state()["key"], "value");
}

// ============================================================================
// Completion Callback
// ============================================================================

#[test]
fn test_completion_receives_prev_state_and_props() {
    let events: EventLog = EventLog::default();
    let mut component = Recorder::new(events, true);
    component.set_state(doc(json!({"key": "before"})));

    let observed = Rc::new(RefCell::new(Vec::new()));
    let sink = observed.clone();
    component.set_state_with(
        doc(json!({"key": "after"})),
        Box::new(move |prev_state, props| {
            sink.borrow_mut().push(key_of(prev_state).to_string());
            sink.borrow_mut()
                .push(props["source"].as_str().unwrap_or("-").to_string());
        }),
    );

    assert_eq!(*observed.borrow(), vec!["before", "props"]);
}

// ============================================================================
// Updater Function
// ============================================================================

#[test]
fn test_set_state_from_computes_partial() {
    let events: EventLog = EventLog::default();
    let mut component = Recorder::new(events, true);
    component.set_state(doc(json!({"count": 1, "keep": true})));

    component.set_state_from(&|state, props| {
        let count = state["count"].as_i64().unwrap_or(0);
        assert_eq!(props["source"], "props");
        doc(json!({"count": count + 1}))
    });

    // The returned document is shallow-merged like a literal partial.
    assert_eq!(*component.state(), doc(json!({"count": 2, "keep": true})));
}

// ============================================================================
// Shared Handles
// ============================================================================

#[test]
fn test_set_state_through_shared_handle() {
    let events: EventLog = EventLog::default();
    let component = mount(Recorder::new(events.clone(), true), NodeList::new());

    component
        .borrow_mut()
        .set_state(doc(json!({"key": "value"})));

    assert_eq!(component.borrow().state()["key"], "value");
    assert_eq!(
        *events.borrow(),
        vec!["gate:value", "will:value", "render:true:-", "did:-"]
    );
}
