// Example: Outline
//
// A small component tree rendered as an indented outline:
// - mounting with an initial child list
// - runtime add/remove, including a silently-dropped duplicate key
// - indentation derived from parent back-references

use serde_json::Value;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use trellis::{mount, Component, ComponentBase, ComponentExt, NodeList, Props, SharedComponent};

struct Section {
    base: ComponentBase,
}

impl Section {
    fn new(key: &str, title: &str) -> Self {
        let mut props = Props::new();
        props.insert("title".into(), title.into());
        Self {
            base: ComponentBase::new(key, props),
        }
    }
}

fn depth(component: &dyn Component) -> usize {
    let mut depth = 0;
    let mut parent = component.parent();
    while let Some(node) = parent {
        depth += 1;
        parent = node.borrow().parent();
    }
    depth
}

impl Component for Section {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&self, force: bool) {
        let title = self
            .props()
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("?");
        println!("{}- {title}", "  ".repeat(depth(self)));
        for child in self.children() {
            child.borrow().render(force);
        }
    }
}

fn section(key: &str, title: &str) -> SharedComponent {
    mount(Section::new(key, title), NodeList::new())
}

fn main() {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let usage = section("usage", "Usage");
    let root = mount(
        Section::new("doc", "Trellis"),
        vec![section("intro", "Introduction"), usage.clone()],
    );
    usage.add_children(vec![
        section("basics", "Basics"),
        section("advanced", "Advanced"),
    ]);

    // Duplicate key: silently dropped, the original section stays.
    root.add_child(section("usage", "Usage (again)"));

    root.borrow().force_update();

    root.remove_child_by_key("intro");
    println!("--- after removing intro ---");
    root.borrow().force_update();
}
