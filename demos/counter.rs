// Example: Counter
//
// A minimal component driving its own updates:
// - set_state with a literal partial and with an updater function
// - an overridden update gate that drops redundant updates
// - force_update as the escape hatch

use serde_json::{json, Value};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use trellis::{Component, ComponentBase, Document, Props, State};

struct Counter {
    base: ComponentBase,
}

impl Counter {
    fn new() -> Self {
        Self {
            base: ComponentBase::new("counter", Props::new()),
        }
    }

    fn count(state: &State) -> i64 {
        state.get("count").and_then(Value::as_i64).unwrap_or(0)
    }
}

impl Component for Counter {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&self, force: bool) {
        // A set_state-driven render still sees the pre-merge state here.
        println!("count = {} (forced: {force})", Self::count(self.state()));
    }

    // Only re-render when the count actually changes.
    fn should_component_update(&self, _next_props: &Props, next_state: &State) -> bool {
        Self::count(self.state()) != Self::count(next_state)
    }
}

fn doc(value: Value) -> Document {
    value.as_object().cloned().unwrap_or_default()
}

fn main() {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let mut counter = Counter::new();

    counter.set_state(doc(json!({"count": 1})));

    // Same value again: the gate returns false, so no render happens.
    counter.set_state(doc(json!({"count": 1})));

    counter.set_state_from(&|state, _props| doc(json!({"count": Counter::count(state) + 1})));

    // Render the settled state directly, bypassing the protocol.
    counter.force_update();
}
