use std::time::Duration;

// Structural view of a rendered element. Text accessors return what the page
// presents: the backend is expected to collapse whitespace the way a browser
// renders it, nothing more.
pub trait Element: Clone + PartialEq {
    fn tag_name(&self) -> String;

    // Text of the element including its descendants.
    fn text(&self) -> String;

    // Text contributed by the element's direct text nodes only.
    fn own_text(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn parent(&self) -> Option<Self>;

    fn children(&self) -> Vec<Self>;

    // All element descendants, document order.
    fn descendants(&self) -> Vec<Self>;

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|candidate| candidate == class))
    }
}

pub trait Document {
    type Elem: Element;

    fn elements_by_id(&self, id: &str) -> Vec<Self::Elem>;

    // Table-like elements matched by visible caption text or accessible label.
    fn tables_by_label(&self, label: &str) -> Vec<Self::Elem>;

    // Invoke check immediately, then repeatedly until it returns true or the
    // timeout elapses. Returns whether check succeeded before the timeout.
    fn poll_until(&self, timeout: Duration, check: &mut dyn FnMut() -> bool) -> bool;
}
