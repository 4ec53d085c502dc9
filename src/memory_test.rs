use super::*;

// =============================================================
// Lookup
// =============================================================

#[test]
fn login_page_has_all_views() {
    let doc = MemoryDocument::login_page();
    assert_eq!(doc.ids_with_class("view"), vec!["login-view", "admin-view", "customer-view"]);
}

#[test]
fn element_by_id_missing_returns_none() {
    let doc = MemoryDocument::login_page();
    assert!(doc.element_by_id("nope").is_none());
}

#[test]
fn without_removes_element() {
    let doc = MemoryDocument::login_page().without("login-button");
    assert!(doc.element_by_id("login-button").is_none());
    assert!(doc.element_by_id("login-form").is_some());
}

// =============================================================
// Element behavior
// =============================================================

#[test]
fn classes_are_shared_between_handles() {
    let doc = MemoryDocument::login_page();
    let a = doc.element_by_id("admin-view").unwrap();
    let b = doc.element_by_id("admin-view").unwrap();
    a.add_class("active");
    assert!(b.has_class("active"));
    b.remove_class("active");
    assert!(!a.has_class("active"));
}

#[test]
fn add_class_does_not_duplicate() {
    let doc = MemoryDocument::login_page();
    let el = doc.element_by_id("login-view").unwrap();
    el.add_class("active");
    el.add_class("active");
    el.remove_class("active");
    assert!(!el.has_class("active"));
}

#[test]
fn value_only_for_inputs() {
    let doc = MemoryDocument::login_page();
    assert!(doc.set_value("username", "ti"));
    assert_eq!(doc.element_by_id("username").unwrap().value().as_deref(), Some("ti"));
    assert!(!doc.set_value("login-error", "x"));
    assert_eq!(doc.element_by_id("login-error").unwrap().value(), None);
}

#[test]
fn form_reset_clears_its_inputs() {
    let doc = MemoryDocument::login_page();
    doc.set_value("username", "admin");
    doc.set_value("password", "secret");
    doc.element_by_id("login-form").unwrap().reset();
    assert_eq!(doc.element_by_id("username").unwrap().value().as_deref(), Some(""));
    assert_eq!(doc.element_by_id("password").unwrap().value().as_deref(), Some(""));
}

#[test]
fn reset_on_plain_element_is_noop() {
    let doc = MemoryDocument::login_page();
    doc.set_value("username", "admin");
    doc.element_by_id("login-error").unwrap().reset();
    assert_eq!(doc.element_by_id("username").unwrap().value().as_deref(), Some("admin"));
}

#[test]
fn memory_event_records_prevent_default() {
    let event = MemoryEvent::new();
    assert!(!event.default_prevented());
    event.prevent_default();
    assert!(event.default_prevented());
}

// =============================================================
// Detaching
// =============================================================

#[test]
fn handles_survive_removal_of_earlier_element() {
    let doc = MemoryDocument::login_page();
    let admin_username = doc.element_by_id("admin-username").unwrap();
    let error = doc.element_by_id("login-error").unwrap();
    assert!(doc.remove("login-view"));

    admin_username.set_text("admin");
    assert_eq!(admin_username.id(), "admin-username");
    assert_eq!(error.text(), "");
    assert_eq!(doc.element_by_id("admin-username").unwrap().text(), "admin");
}

#[test]
fn removed_element_leaves_queries() {
    let doc = MemoryDocument::login_page();
    assert!(doc.remove("admin-view"));
    assert!(doc.element_by_id("admin-view").is_none());
    assert_eq!(doc.ids_with_class("view"), vec!["login-view", "customer-view"]);
    assert!(!doc.remove("admin-view"));
}

#[test]
fn removed_input_is_not_typed_into() {
    let doc = MemoryDocument::login_page();
    let password = doc.element_by_id("password").unwrap();
    assert!(doc.remove("password"));
    assert!(!doc.set_value("password", "admin"));
    assert_eq!(password.value().as_deref(), Some(""));
}

#[test]
fn appended_view_joins_class_query() {
    let doc = MemoryDocument::login_page();
    doc.append_view("extra-view", "view");
    assert_eq!(doc.ids_with_class("view"), vec!["login-view", "admin-view", "customer-view", "extra-view"]);
}
