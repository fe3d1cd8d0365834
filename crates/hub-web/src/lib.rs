#![cfg(target_arch = "wasm32")]
use anyhow::{anyhow, bail};
use hub_core::view::parameter_panel;
use hub_core::{Layout, Parameters};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod compact;
mod config;
mod constants;
mod dom;
mod events;
mod sync;

use config::{detect_variant, SyncStrategy, Variant};
use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hub-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&format!("{:#}", e)));
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let has_root = document.get_element_by_id(ROOT_ID).is_some();
    let has_main = document.get_element_by_id(MAIN_CONTAINER_ID).is_some();
    match detect_variant(has_root, has_main) {
        Some(Variant::Compact) => {
            let root = dom::require_element(&document, ROOT_ID)?;
            compact::mount(&document, &root)?;
        }
        Some(Variant::Full) => init_full(&document)?,
        None => bail!("missing #{} or #{}", ROOT_ID, MAIN_CONTAINER_ID),
    }

    events::wire_parallax(&document);
    Ok(())
}

fn init_full(document: &web::Document) -> anyhow::Result<()> {
    let mounts = sync::Mounts::lookup(document)?;
    let sync_attr = mounts.main_container.get_attribute(SYNC_ATTR);
    let strategy = SyncStrategy::from_attr(sync_attr.as_deref());
    let params = Parameters::default();

    if let Some(panel) = document.get_element_by_id(PARAMETER_PANEL_ID) {
        if panel.child_element_count() == 0 {
            let sliders = dom::materialize(document, &parameter_panel(&params).into())?;
            panel.append_child(&sliders).map_err(dom::js_err)?;
        }
    }

    let mut synchronizer =
        sync::Synchronizer::new(document.clone(), mounts, Layout::default(), strategy);
    synchronizer.apply(&params)?;
    log::info!("[sync] initial render done ({:?})", strategy);

    events::wire_parameter_inputs(
        document,
        Rc::new(RefCell::new(params)),
        Rc::new(RefCell::new(synchronizer)),
    );
    Ok(())
}
