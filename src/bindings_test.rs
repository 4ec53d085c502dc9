use super::*;
use crate::dom::Element;
use crate::memory::MemoryDocument;

#[test]
fn bind_full_page_reports_nothing_missing() {
    let config = ControllerConfig::default();
    let (handles, missing) = Handles::bind(&MemoryDocument::login_page(), &config);
    assert!(missing.is_empty());
    assert!(handles.validate(&config).is_ok());
    assert_eq!(handles.login_button.unwrap().id(), "login-button");
}

#[test]
fn bind_reports_each_missing_element() {
    let config = ControllerConfig::default();
    let doc = MemoryDocument::login_page().without("login-button").without("logout-customer");
    let (handles, missing) = Handles::bind(&doc, &config);

    assert!(handles.login_button.is_none());
    assert!(handles.logout_customer.is_none());
    assert!(handles.login_form.is_some());

    let ids: Vec<String> = missing
        .iter()
        .map(|e| match e {
            ControllerError::MissingElement { id, .. } => id.clone(),
            other => panic!("unexpected error: {other}"),
        })
        .collect();
    assert_eq!(ids, vec!["login-button", "logout-customer"]);
}

#[test]
fn validate_names_first_missing_element() {
    let config = ControllerConfig::default();
    let doc = MemoryDocument::login_page().without("password");
    let (handles, _) = Handles::bind(&doc, &config);
    let err = handles.validate(&config).unwrap_err();
    assert_eq!(err.to_string(), "element #password (password input) not found");
}
