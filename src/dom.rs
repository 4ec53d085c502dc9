//! Host element-tree abstraction.
//!
//! DESIGN
//! ======
//! The controller only needs a handful of element operations, so it is
//! generic over these traits. [`crate::memory`] provides an in-memory tree
//! for native tests; the `web` module (feature `browser`) wraps `web-sys`.

/// A single element in the host document.
pub trait Element: Clone {
    fn id(&self) -> String;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Current value if this element is a text input, otherwise `None`.
    fn value(&self) -> Option<String>;
    fn set_text(&self, text: &str);
    fn text(&self) -> String;
    /// Restore form controls to their initial values. No-op for non-forms.
    fn reset(&self);
}

/// The host document.
pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;
}

/// An event delivered to a command handler.
pub trait UiEvent {
    fn prevent_default(&self);
}
