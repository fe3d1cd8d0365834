use crate::constants::SVG_NS;
use anyhow::{anyhow, Result};
use hub_core::{Element, Namespace, Node};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Look up a mount point; absence is fatal for the caller.
pub fn require_element(document: &web::Document, id: &str) -> Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))
}

pub fn require_html_element(document: &web::Document, id: &str) -> Result<web::HtmlElement> {
    require_element(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HTML element: {:?}", id, e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) -> Result<()> {
    el.style().set_property(property, value).map_err(js_err)
}

/// Create real DOM nodes for a description.
pub fn materialize(document: &web::Document, node: &Node) -> Result<web::Node> {
    match node {
        Node::Text(text) => Ok(document.create_text_node(text).into()),
        Node::Element(el) => {
            let dom_el = match el.ns {
                Namespace::Html => document.create_element(el.tag),
                Namespace::Svg => document.create_element_ns(Some(SVG_NS), el.tag),
            }
            .map_err(js_err)?;
            for (name, value) in &el.attrs {
                dom_el.set_attribute(name, value).map_err(js_err)?;
            }
            for child in &el.children {
                let child_node = materialize(document, child)?;
                dom_el.append_child(&child_node).map_err(js_err)?;
            }
            Ok(dom_el.into())
        }
    }
}

/// Clear `parent` and append fresh nodes for every description.
pub fn replace_children(
    document: &web::Document,
    parent: &web::Element,
    nodes: &[Node],
) -> Result<()> {
    parent.set_inner_html("");
    for node in nodes {
        let child = materialize(document, node)?;
        parent.append_child(&child).map_err(js_err)?;
    }
    Ok(())
}

/// Rewrite changed attributes and text of `dom` so it matches `new`.
///
/// `old` must be the description `dom` was built from and have the same shape
/// as `new`; see [`Node::same_shape`].
pub fn patch_element(dom: &web::Element, old: &Element, new: &Element) -> Result<()> {
    for ((name, old_value), (_, new_value)) in old.attrs.iter().zip(&new.attrs) {
        if old_value != new_value {
            dom.set_attribute(name, new_value).map_err(js_err)?;
        }
    }
    let kids = dom.child_nodes();
    for (i, (old_child, new_child)) in old.children.iter().zip(&new.children).enumerate() {
        let Some(dom_child) = kids.item(i as u32) else {
            return Err(anyhow!("<{}> lost child {}", new.tag, i));
        };
        match (old_child, new_child) {
            (Node::Element(o), Node::Element(n)) => {
                let child_el = dom_child
                    .dyn_into::<web::Element>()
                    .map_err(|e| anyhow!("expected element: {:?}", e))?;
                patch_element(&child_el, o, n)?;
            }
            (Node::Text(o), Node::Text(n)) if o != n => {
                dom_child.set_text_content(Some(n.as_str()));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Patch the children of `parent` in place, index by index.
pub fn patch_children(parent: &web::Element, old: &[Node], new: &[Node]) -> Result<()> {
    let kids = parent.child_nodes();
    if kids.length() as usize != new.len() {
        return Err(anyhow!("child count changed: {} -> {}", kids.length(), new.len()));
    }
    for (i, (o, n)) in old.iter().zip(new).enumerate() {
        if let (Node::Element(o), Node::Element(n)) = (o, n) {
            let dom_child = kids
                .item(i as u32)
                .and_then(|c| c.dyn_into::<web::Element>().ok())
                .ok_or_else(|| anyhow!("child {} is not an element", i))?;
            patch_element(&dom_child, o, n)?;
        }
    }
    Ok(())
}

/// Call `handler` with the current value each time a range input moves.
///
/// Returns false when no `<input>` with that id exists.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) -> bool {
    let Some(input) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return false;
    };
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || handler(source.value())) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}
