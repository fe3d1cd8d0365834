use crate::dom;
use crate::sync::Synchronizer;
use hub_core::view::{control_label, label_id};
use hub_core::{ParamKey, Parameters};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Latest parameter snapshot, owned by the input listeners.
pub type Store = Rc<RefCell<Parameters>>;

/// Bind every geometry slider found in the page to the store.
///
/// Sliders that are not in the markup are skipped; the page still renders
/// with their default values.
pub fn wire_parameter_inputs(
    document: &web::Document,
    store: Store,
    synchronizer: Rc<RefCell<Synchronizer>>,
) {
    for key in ParamKey::ALL {
        let store = store.clone();
        let synchronizer = synchronizer.clone();
        let doc = document.clone();
        let wired = dom::add_input_listener(document, key.control_id(), move |raw| {
            handle_input(&doc, key, &raw, &store, &synchronizer);
        });
        if !wired {
            log::warn!("[params] no slider for {}", key);
        }
    }
}

fn handle_input(
    document: &web::Document,
    key: ParamKey,
    raw: &str,
    store: &Store,
    synchronizer: &Rc<RefCell<Synchronizer>>,
) {
    let value = match key.parse_value(raw) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[params] {}", e);
            return;
        }
    };
    let next = store.borrow().with(key, value);
    *store.borrow_mut() = next;
    log::debug!("[params] {}={}", key, value);

    dom::set_text(
        document,
        &label_id(key.control_id()),
        &control_label(key.spec().label, value),
    );
    if let Err(e) = synchronizer.borrow_mut().apply(&next) {
        log::error!("[sync] {:?}", e);
    }
}
