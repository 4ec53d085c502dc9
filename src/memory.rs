//! In-memory document used by native tests and non-browser hosts.
//!
//! Elements are indexes into a shared node table, so handles stay cheap to
//! clone and see each other's mutations the way DOM references do. Slots are
//! never reused or shifted: removing an element detaches it from the document
//! but leaves every existing handle pointing at the same node.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::ControllerConfig;
use crate::dom::{Document, Element, UiEvent};

#[derive(Clone, Debug)]
enum NodeKind {
    Plain,
    Input { value: String, initial: String },
    Form { fields: Vec<String> },
}

#[derive(Clone, Debug)]
struct Node {
    id: String,
    classes: Vec<String>,
    text: String,
    kind: NodeKind,
    detached: bool,
}

/// A flat, id-addressed element tree.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    nodes: Rc<RefCell<Vec<Node>>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document carrying every element the default configuration expects.
    #[must_use]
    pub fn login_page() -> Self {
        let config = ControllerConfig::default();
        let ids = &config.ids;
        Self::new()
            .with_view(&ids.login_view, &config.view_class)
            .with_view(&ids.admin_view, &config.view_class)
            .with_view(&ids.customer_view, &config.view_class)
            .with_input(&ids.username)
            .with_input(&ids.password)
            .with_form(&ids.login_form, &[&ids.username, &ids.password])
            .with_element(&ids.login_button)
            .with_element(&ids.login_error)
            .with_element(&ids.admin_username)
            .with_element(&ids.customer_username)
            .with_element(&ids.logout_admin)
            .with_element(&ids.logout_customer)
    }

    fn attach(&self, id: &str, classes: Vec<String>, kind: NodeKind) {
        self.nodes.borrow_mut().push(Node { id: id.to_owned(), classes, text: String::new(), kind, detached: false });
    }

    fn push(self, id: &str, classes: Vec<String>, kind: NodeKind) -> Self {
        self.attach(id, classes, kind);
        self
    }

    /// Add a plain element.
    #[must_use]
    pub fn with_element(self, id: &str) -> Self {
        self.push(id, Vec::new(), NodeKind::Plain)
    }

    /// Add a view container carrying the marker class.
    #[must_use]
    pub fn with_view(self, id: &str, marker: &str) -> Self {
        self.push(id, vec![marker.to_owned()], NodeKind::Plain)
    }

    /// Add an empty text input.
    #[must_use]
    pub fn with_input(self, id: &str) -> Self {
        self.push(id, Vec::new(), NodeKind::Input { value: String::new(), initial: String::new() })
    }

    /// Add a form whose reset restores the listed inputs.
    #[must_use]
    pub fn with_form(self, id: &str, fields: &[&str]) -> Self {
        let fields = fields.iter().map(|f| (*f).to_owned()).collect();
        self.push(id, Vec::new(), NodeKind::Form { fields })
    }

    /// Detach the element with `id`, if present.
    #[must_use]
    pub fn without(self, id: &str) -> Self {
        self.remove(id);
        self
    }

    /// Detach the element with `id` from the document. Handles already held
    /// keep pointing at it. Returns `false` if no attached element matched.
    pub fn remove(&self, id: &str) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        match nodes.iter_mut().find(|n| !n.detached && n.id == id) {
            Some(node) => {
                node.detached = true;
                true
            }
            None => false,
        }
    }

    /// Attach a new view container to an existing document.
    pub fn append_view(&self, id: &str, marker: &str) {
        self.attach(id, vec![marker.to_owned()], NodeKind::Plain);
    }

    /// Type into an input. Returns `false` if `id` is not an input.
    pub fn set_value(&self, id: &str, value: &str) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        match nodes.iter_mut().find(|n| !n.detached && n.id == id).map(|n| &mut n.kind) {
            Some(NodeKind::Input { value: current, .. }) => {
                value.clone_into(current);
                true
            }
            _ => false,
        }
    }

    /// Ids of all elements currently carrying `class`, in document order.
    #[must_use]
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.nodes
            .borrow()
            .iter()
            .filter(|n| !n.detached && n.classes.iter().any(|c| c == class))
            .map(|n| n.id.clone())
            .collect()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.borrow().iter().position(|n| !n.detached && n.id == id)
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let index = self.index_of(id)?;
        Some(MemoryElement { nodes: Rc::clone(&self.nodes), index })
    }

    fn elements_by_class(&self, class: &str) -> Vec<MemoryElement> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| !n.detached && n.classes.iter().any(|c| c == class))
            .map(|(index, _)| MemoryElement { nodes: Rc::clone(&self.nodes), index })
            .collect()
    }
}

/// Handle to one node of a [`MemoryDocument`].
#[derive(Clone, Debug)]
pub struct MemoryElement {
    nodes: Rc<RefCell<Vec<Node>>>,
    index: usize,
}

impl MemoryElement {
    fn with_node<R>(&self, f: impl FnOnce(&mut Node) -> R) -> Option<R> {
        self.nodes.borrow_mut().get_mut(self.index).map(f)
    }
}

impl Element for MemoryElement {
    fn id(&self) -> String {
        self.with_node(|n| n.id.clone()).unwrap_or_default()
    }

    fn add_class(&self, class: &str) {
        self.with_node(|n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_owned());
            }
        });
    }

    fn remove_class(&self, class: &str) {
        self.with_node(|n| n.classes.retain(|c| c != class));
    }

    fn has_class(&self, class: &str) -> bool {
        self.with_node(|n| n.classes.iter().any(|c| c == class)).unwrap_or(false)
    }

    fn value(&self) -> Option<String> {
        self.with_node(|n| match &n.kind {
            NodeKind::Input { value, .. } => Some(value.clone()),
            _ => None,
        })
        .flatten()
    }

    fn set_text(&self, text: &str) {
        self.with_node(|n| text.clone_into(&mut n.text));
    }

    fn text(&self) -> String {
        self.with_node(|n| n.text.clone()).unwrap_or_default()
    }

    fn reset(&self) {
        let Some(NodeKind::Form { fields }) = self.with_node(|n| n.kind.clone()) else {
            return;
        };
        for node in self.nodes.borrow_mut().iter_mut() {
            if node.detached || !fields.contains(&node.id) {
                continue;
            }
            if let NodeKind::Input { value, initial } = &mut node.kind {
                initial.clone_into(value);
            }
        }
    }
}

/// Event stand-in that records whether its default action was suppressed.
#[derive(Debug, Default)]
pub struct MemoryEvent {
    prevented: Cell<bool>,
}

impl MemoryEvent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl UiEvent for MemoryEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}
