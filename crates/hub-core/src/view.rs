//! Component tree of the landing page as pure functions.
//!
//! Each function takes plain values and returns an [`Element`]; nothing here
//! touches the DOM. The compact page is rendered whole by [`app`]; the full
//! page only borrows [`parameter_panel`] for its slider block.

use crate::compact::{compact_paths, CompactParams, LineTiming};
use crate::constants::*;
use crate::node::Element;
use crate::params::{Parameters, CONTROL_SPECS};

pub const LEFT_FEATURES: [&str; 3] = ["Instant Insights", "Smart Visuals", "Ask Anything"];
pub const RIGHT_FEATURES: [&str; 3] = ["Predictive Power", "Plug & Play", "Always On"];

pub const TOP_LINES_ID: &str = "top-lines";
pub const BOTTOM_LINES_ID: &str = "bottom-lines";
pub const TOP_LINES_TITLE: &str = "Top Lines Height";
pub const BOTTOM_LINES_TITLE: &str = "Bottom Lines Height";
pub const CONNECTING_LINES_ID: &str = "connecting-lines";
pub const ANIMATED_PATH_CLASS: &str = "animated-path";

pub fn feature_box(text: &str) -> Element {
    Element::html("div")
        .class("bg-zinc-900 border border-teal-500/30 rounded-2xl shadow-[0_0_20px_rgba(34,211,238,0.15)] w-52 h-20 flex items-center justify-center text-center px-4 transition-all duration-300 hover:border-teal-400/50 hover:shadow-[0_0_30px_rgba(34,211,238,0.25)]")
        .child(
            Element::html("span")
                .class("text-gray-200 tracking-wide")
                .text(text),
        )
}

pub fn connection_point() -> Element {
    Element::html("div").class("w-4 h-6 bg-zinc-950/70 border border-zinc-700/50 rounded-md")
}

/// The "AI" box with three connection points on each edge.
pub fn central_hub() -> Element {
    let slot = |edge: &str, height: &str| {
        Element::html("div")
            .class(&format!("absolute {edge} {height} -translate-y-1/2"))
            .child(connection_point())
    };
    let mut hub = Element::html("div")
        .class("relative bg-zinc-900 border border-teal-500/40 rounded-3xl shadow-[0_0_40px_rgba(34,211,238,0.25)] w-48 h-48 flex items-center justify-center")
        .child(
            Element::html("span")
                .class("text-gray-100 text-6xl font-bold tracking-wider")
                .text("AI"),
        );
    for edge in ["left-0 -translate-x-1/2", "right-0 translate-x-1/2"] {
        for height in ["top-1/4", "top-1/2", "top-3/4"] {
            hub = hub.child(slot(edge, height));
        }
    }
    hub
}

pub fn header() -> Element {
    Element::html("header")
        .class("absolute top-4 left-1/2 -translate-x-1/2 flex items-center justify-center gap-x-4 py-8 z-20")
        .child(
            Element::html("button")
                .class("px-6 py-2 rounded-full bg-[#2a6b63] text-gray-100 shadow-[0_0_20px_rgba(42,107,99,0.8)] transition-all hover:shadow-[0_0_30px_rgba(42,107,99,1)] hover:bg-[#317c72]")
                .text("Get Started"),
        )
        .child(
            Element::html("button")
                .class("px-6 py-2 rounded-full bg-black border border-gray-700 text-gray-300 transition-all hover:border-gray-500 hover:text-white")
                .text("Book A Demo"),
        )
}

/// Label text shown above a slider, e.g. `Top Lines Height (40)`.
#[inline]
pub fn control_label(title: &str, value: f64) -> String {
    format!("{title} ({value})")
}

#[inline]
pub fn label_id(input_id: &str) -> String {
    format!("{input_id}-label")
}

fn range_control(id: &str, title: &str, min: f64, max: f64, step: f64, value: f64) -> Element {
    Element::html("div")
        .child(
            Element::html("label")
                .attr("id", label_id(id))
                .attr("for", id)
                .class("block text-sm font-medium text-gray-300 mb-1")
                .text(control_label(title, value)),
        )
        .child(
            Element::html("input")
                .attr("id", id)
                .attr("type", "range")
                .attr("min", min)
                .attr("max", max)
                .attr("step", step)
                .attr("value", value)
                .class("w-full h-2 rounded-lg cursor-pointer"),
        )
}

fn panel_shell(title: &str) -> Element {
    Element::html("h3")
        .class("text-lg font-semibold text-teal-400 mb-4 text-center")
        .text(title)
}

/// Two-slider panel of the compact page.
pub fn control_panel(params: &CompactParams) -> Element {
    Element::html("div")
        .class("absolute bottom-4 right-4 bg-zinc-900/80 border border-teal-500/30 backdrop-blur-sm rounded-lg p-4 z-30 shadow-lg w-64")
        .child(panel_shell("Line Controls"))
        .child(
            Element::html("div")
                .class("space-y-4")
                .child(range_control(
                    TOP_LINES_ID,
                    TOP_LINES_TITLE,
                    TOP_LINES_MIN,
                    TOP_LINES_MAX,
                    1.0,
                    params.top_y,
                ))
                .child(range_control(
                    BOTTOM_LINES_ID,
                    BOTTOM_LINES_TITLE,
                    BOTTOM_LINES_MIN,
                    BOTTOM_LINES_MAX,
                    1.0,
                    params.bottom_y,
                )),
        )
}

/// One slider per geometry parameter, ids matching the parameter keys.
pub fn parameter_panel(params: &Parameters) -> Element {
    Element::html("div")
        .class("space-y-4")
        .child(panel_shell("Line Controls"))
        .children(CONTROL_SPECS.iter().map(|spec| {
            range_control(
                spec.key.control_id(),
                spec.label,
                spec.min,
                spec.max,
                spec.step,
                params.get(spec.key),
            )
        }))
}

/// Inline style of an animated dash once the path length is known.
pub fn animated_line_style(timing: &LineTiming, path_length: f64) -> String {
    let visibility = if path_length > 0.0 { "visible" } else { "hidden" };
    format!(
        "--path-length: {len}; --dot-length: {dot}px; animation-duration: {dur}s; animation-delay: {delay}s; stroke-dasharray: {dot} {len}; visibility: {visibility}",
        len = path_length,
        dot = DASH_LENGTH_PX,
        dur = timing.duration_sec,
        delay = timing.delay_sec,
    )
}

fn animated_line(d: String, timing: &LineTiming) -> Element {
    Element::svg("g")
        .child(
            Element::svg("path")
                .attr("d", d.clone())
                .attr("stroke", BASE_LINE_STROKE)
                .attr("stroke-width", 1)
                .attr("fill", "none"),
        )
        .child(
            Element::svg("path")
                .attr("d", d)
                .attr("stroke", DASH_STROKE)
                .attr("stroke-width", 2.5)
                .attr("fill", "none")
                .attr("stroke-linecap", "round")
                .class(ANIMATED_PATH_CLASS)
                .attr("style", animated_line_style(timing, 0.0)),
        )
}

/// Compact-page SVG: six animated lines and a dot at each card end.
pub fn connecting_lines(params: &CompactParams, timings: &[LineTiming; 6]) -> Element {
    let paths = compact_paths(params);
    let dots = params.endpoint_dots();
    let mut svg = Element::svg("svg")
        .attr("id", CONNECTING_LINES_ID)
        .attr("width", "100%")
        .attr("height", "100%")
        .attr(
            "viewBox",
            format!("0 0 {COMPACT_VIEWBOX_WIDTH} {COMPACT_VIEWBOX_HEIGHT}"),
        )
        .attr("preserveAspectRatio", "none")
        .class("absolute inset-0");
    // each side: its three lines first, then the three card-end dots
    for first in [0usize, 3] {
        for i in first..first + 3 {
            svg = svg.child(animated_line(paths[i].to_svg_d(), &timings[i]));
        }
        for i in first..first + 3 {
            svg = svg.child(
                Element::svg("circle")
                    .attr("cx", dots[i].x)
                    .attr("cy", dots[i].y)
                    .attr("r", ENDPOINT_DOT_RADIUS)
                    .attr("fill", BASE_LINE_STROKE),
            );
        }
    }
    svg
}

fn feature_column(features: &[&str]) -> Element {
    Element::html("div")
        .class("flex flex-col justify-between h-full items-center z-10")
        .children(features.iter().map(|f| feature_box(f)))
}

/// The whole compact page.
pub fn app(params: &CompactParams, timings: &[LineTiming; 6]) -> Element {
    let grid = Element::html("div")
        .class("grid grid-cols-[1fr_auto_1fr] items-center gap-x-24 w-full h-full relative")
        .child(feature_column(&LEFT_FEATURES))
        .child(
            Element::html("div")
                .class("flex justify-center items-center z-10")
                .child(central_hub()),
        )
        .child(feature_column(&RIGHT_FEATURES))
        .child(connecting_lines(params, timings));
    Element::html("main")
        .class("bg-black min-h-screen w-full flex flex-col items-center justify-center p-8 text-gray-200 relative overflow-hidden")
        .child(header())
        .child(
            Element::html("div")
                .class("w-full max-w-6xl mx-auto h-[500px] mt-16")
                .child(grid),
        )
        .child(control_panel(params))
}
