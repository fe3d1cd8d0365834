//! Component-tree page: the whole layout is generated into `#root` and the
//! two line-height sliders update the connector SVG in place.

use crate::dom;
use anyhow::Result;
use hub_core::view::{
    self, control_label, label_id, ANIMATED_PATH_CLASS, BOTTOM_LINES_ID, BOTTOM_LINES_TITLE,
    CONNECTING_LINES_ID, TOP_LINES_ID, TOP_LINES_TITLE,
};
use hub_core::{parse_slider_value, CompactParams, LineTiming, Node};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy)]
enum Handle {
    Top,
    Bottom,
}

pub fn mount(document: &web::Document, root: &web::Element) -> Result<()> {
    let params = Rc::new(RefCell::new(CompactParams::default()));
    // Sampled once; slider moves patch the existing paths, so running dash
    // animations keep their timing and position.
    let timings: Rc<[LineTiming; 6]> = Rc::new(std::array::from_fn(|_| {
        LineTiming::from_unit(js_sys::Math::random(), js_sys::Math::random())
    }));

    let tree = view::app(&params.borrow(), &timings);
    // Description of the live `#connecting-lines` nodes; `None` forces a rebuild.
    let lines: Rc<RefCell<Option<Node>>> = Rc::new(RefCell::new(Some(
        view::connecting_lines(&params.borrow(), &timings).into(),
    )));
    root.set_inner_html("");
    root.append_child(&dom::materialize(document, &tree.into())?)
        .map_err(dom::js_err)?;
    measure_dashes(document, &timings)?;

    for (id, handle) in [(TOP_LINES_ID, Handle::Top), (BOTTOM_LINES_ID, Handle::Bottom)] {
        let doc = document.clone();
        let params = params.clone();
        let timings = timings.clone();
        let lines = lines.clone();
        let wired = dom::add_input_listener(document, id, move |raw| {
            let Some(value) = parse_slider_value(&raw) else {
                log::warn!("[params] invalid value `{}` for {}", raw, id);
                return;
            };
            {
                let mut p = params.borrow_mut();
                *p = match handle {
                    Handle::Top => CompactParams { top_y: value, ..*p },
                    Handle::Bottom => CompactParams { bottom_y: value, ..*p },
                };
            }
            let snapshot = *params.borrow();
            if let Err(e) = redraw(&doc, &lines, &snapshot, &timings) {
                log::error!("[sync] {:?}", e);
            }
        });
        if !wired {
            log::warn!("[params] no slider #{}", id);
        }
    }
    log::info!("[compact] mounted into #{}", root.id());
    Ok(())
}

fn redraw(
    document: &web::Document,
    lines: &RefCell<Option<Node>>,
    params: &CompactParams,
    timings: &[LineTiming; 6],
) -> Result<()> {
    let live = dom::require_element(document, CONNECTING_LINES_ID)?;
    let next: Node = view::connecting_lines(params, timings).into();
    // Taken up front so a failed patch leaves no stale description behind.
    let prev = lines.borrow_mut().take();
    let patchable = prev.as_ref().is_some_and(|p| p.same_shape(&next));
    match (&prev, &next) {
        (Some(Node::Element(old)), Node::Element(new)) if patchable => {
            dom::patch_element(&live, old, new)?;
        }
        _ => {
            log::debug!("[compact] rebuilding #{}", CONNECTING_LINES_ID);
            let fresh = dom::materialize(document, &next)?;
            live.replace_with_with_node_1(&fresh).map_err(dom::js_err)?;
        }
    }
    *lines.borrow_mut() = Some(next);

    dom::set_text(
        document,
        &label_id(TOP_LINES_ID),
        &control_label(TOP_LINES_TITLE, params.top_y),
    );
    dom::set_text(
        document,
        &label_id(BOTTOM_LINES_ID),
        &control_label(BOTTOM_LINES_TITLE, params.bottom_y),
    );
    log::debug!("[compact] top={} bottom={}", params.top_y, params.bottom_y);
    measure_dashes(document, timings)
}

/// Dash length depends on the rendered path, so it is set after mounting.
fn measure_dashes(document: &web::Document, timings: &[LineTiming; 6]) -> Result<()> {
    let selector = format!("#{} .{}", CONNECTING_LINES_ID, ANIMATED_PATH_CLASS);
    let paths = document.query_selector_all(&selector).map_err(dom::js_err)?;
    for (i, timing) in timings.iter().enumerate() {
        let Some(path) = paths
            .item(i as u32)
            .and_then(|n| n.dyn_into::<web::SvgPathElement>().ok())
        else {
            continue;
        };
        let length = path.get_total_length() as f64;
        path.set_attribute("style", &view::animated_line_style(timing, length))
            .map_err(dom::js_err)?;
    }
    Ok(())
}
