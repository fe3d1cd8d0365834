use crate::constants::PARALLAX_SELECTORS;
use hub_core::parallax::{style_for_scroll, ParallaxStyle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(document: &web::Document, style: ParallaxStyle) {
    for selector in PARALLAX_SELECTORS {
        let Ok(Some(el)) = document.query_selector(selector) else {
            continue;
        };
        if let Some(img) = el.dyn_ref::<web::HtmlElement>() {
            let css = img.style();
            _ = css.set_property("transition", style.transition);
            _ = css.set_property("transform", style.transform);
        }
    }
}

/// One window scroll listener drives every parallax image.
pub fn wire_parallax(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let y = win.scroll_y().unwrap_or(0.0);
        apply(&doc, style_for_scroll(y));
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
    log::debug!("[scroll] parallax wired for {:?}", PARALLAX_SELECTORS);
}
