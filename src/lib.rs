pub mod component;
pub mod types;

pub use component::{mount, Component, ComponentBase, ComponentExt};
pub use types::{
    shallow_merge, Document, NodeList, Props, SharedComponent, State, UpdateCallback,
    WeakComponent,
};
