//! Browser host: `web-sys` document adapter, listener wiring, WASM entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller lives in an `Rc<RefCell<..>>` shared by every listener.
//! Listeners are leaked with `Closure::forget` since they live as long as the
//! page. The event loop is single-threaded, so a listener only ever finds the
//! controller borrowed if a handler re-enters it synchronously.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::config::ControllerConfig;
use crate::consts::CONFIG_SCRIPT;
use crate::controller::ViewController;
use crate::dom::{Document, Element, UiEvent};
use crate::error::ControllerError;

/// The page's `document`.
#[derive(Clone, Debug)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
    /// The document of the current window.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Host`] outside a browser window.
    pub fn current() -> Result<Self, ControllerError> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self)
            .ok_or_else(|| ControllerError::Host("no window.document".to_owned()))
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        let collection = self.0.get_elements_by_class_name(class);
        (0..collection.length()).filter_map(|i| collection.item(i)).map(WebElement).collect()
    }
}

/// A DOM element handle.
#[derive(Clone, Debug)]
pub struct WebElement(web_sys::Element);

impl Element for WebElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("could not add .{class} to #{}: {err:?}", self.0.id());
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log::warn!("could not remove .{class} from #{}: {err:?}", self.0.id());
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn value(&self) -> Option<String> {
        self.0.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn reset(&self) {
        if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

impl UiEvent for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

fn host_error(err: JsValue) -> ControllerError {
    ControllerError::Host(format!("{err:?}"))
}

/// Attach one DOM listener per dispatcher registration.
///
/// # Errors
///
/// Returns [`ControllerError::Host`] if the browser rejects a listener.
pub fn install_listeners(controller: &Rc<RefCell<ViewController<WebDocument>>>) -> Result<(), ControllerError> {
    let registrations = controller.borrow().registrations().to_vec();
    for registration in registrations {
        let Some(target) = controller.borrow().document().element_by_id(&registration.target) else {
            log::warn!("#{} disappeared before its listener was attached", registration.target);
            continue;
        };
        let handler = Rc::clone(controller);
        let command = registration.command;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            match handler.try_borrow_mut() {
                Ok(mut controller) => controller.dispatch(command, Some(&event)),
                Err(err) => log::warn!("controller busy ({err}); dropped {command:?}"),
            }
        });
        target
            .0
            .add_event_listener_with_callback(registration.kind.as_str(), closure.as_ref().unchecked_ref())
            .map_err(host_error)?;
        closure.forget();
    }
    Ok(())
}

/// Read the optional JSON config override embedded in the page.
fn embedded_config(doc: &WebDocument) -> Result<ControllerConfig, ControllerError> {
    match doc.element_by_id(CONFIG_SCRIPT) {
        Some(script) => ControllerConfig::from_json(&script.text()),
        None => Ok(ControllerConfig::default()),
    }
}

fn boot(doc: WebDocument, config: ControllerConfig) -> Result<(), ControllerError> {
    let mut controller = ViewController::try_new(doc, config)?;
    controller.init();
    let controller = Rc::new(RefCell::new(controller));
    install_listeners(&controller)
}

/// WASM entry point: install logging, then wire the controller once the DOM
/// is parsed.
///
/// # Errors
///
/// Returns a `JsValue` error if the page has no document or the ready
/// listener cannot be attached.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let doc = WebDocument::current().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (config, config_error) = match embedded_config(&doc) {
        Ok(config) => (config, None),
        Err(err) => (ControllerConfig::default(), Some(err)),
    };

    if let Err(err) = console_log::init_with_level(config.log_level) {
        log::debug!("logger already installed: {err}");
    }
    if let Some(err) = config_error {
        log::error!("{err}; falling back to defaults");
    }

    let ready = doc.0.ready_state() != "loading";
    let run = {
        let doc = doc.clone();
        move || {
            if let Err(err) = boot(doc, config) {
                log::error!("view controller startup failed: {err}");
            }
        }
    };

    if ready {
        run();
        return Ok(());
    }
    let closure = Closure::<dyn FnMut()>::once(run);
    doc.0
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .map_err(|e| JsValue::from_str(&host_error(e).to_string()))?;
    closure.forget();
    Ok(())
}
