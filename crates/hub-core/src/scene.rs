//! SVG content of the full control-panel page.
//!
//! [`build_scene`] turns a parameter snapshot into the container styles and
//! the children of the two SVG groups: static connector paths and glowing
//! orbs that ride the reversed paths from hub to card.

use crate::constants::*;
use crate::geometry::{compute_paths, Layout, PathSet};
use crate::node::{Element, Node};
use crate::params::Parameters;

/// Inline styles applied to the layout containers.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerStyle {
    /// `transform` of the main container.
    pub transform: String,
    /// `padding-left` / `padding-right` of the cards-and-hub row.
    pub padding_x: String,
    /// `padding-top` / `padding-bottom` of both card columns.
    pub padding_y: String,
}

pub fn container_style(params: &Parameters, horizontal_padding: f64) -> ContainerStyle {
    ContainerStyle {
        transform: format!("rotateY({}deg)", params.perspective),
        padding_x: format!("{}px", horizontal_padding),
        padding_y: format!("{}px", params.vertical_padding),
    }
}

/// Duration and start offset of one orb, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbTiming {
    pub dur_sec: f64,
    pub begin_sec: f64,
}

#[inline]
pub fn orb_timing(glow_speed: f64, index: usize) -> OrbTiming {
    OrbTiming {
        dur_sec: glow_speed,
        begin_sec: glow_speed / ORB_STAGGER_DIVISOR * index as f64,
    }
}

pub fn static_path_nodes(paths: &PathSet, thickness: f64) -> Vec<Node> {
    paths
        .static_paths
        .iter()
        .map(|p| {
            Element::svg("path")
                .attr("d", p.to_svg_d())
                .attr("stroke", STATIC_STROKE)
                .attr("stroke-width", thickness)
                .attr("fill", "none")
                .into()
        })
        .collect()
}

fn animate(attribute: &str, values: &str, timing: OrbTiming) -> Element {
    Element::svg("animate")
        .attr("attributeName", attribute)
        .attr("values", values)
        .attr("keyTimes", ORB_KEY_TIMES)
        .attr("dur", format!("{}s", timing.dur_sec))
        .attr("begin", format!("{}s", timing.begin_sec))
        .attr("repeatCount", "indefinite")
}

pub fn orb_nodes(paths: &PathSet, glow_speed: f64) -> Vec<Node> {
    paths
        .animated_paths
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let timing = orb_timing(glow_speed, i);
            let motion = Element::svg("animateMotion")
                .attr("dur", format!("{}s", timing.dur_sec))
                .attr("begin", format!("{}s", timing.begin_sec))
                .attr("repeatCount", "indefinite")
                .attr("path", p.to_svg_d());
            Element::svg("circle")
                .attr("r", ORB_RADIUS)
                .attr("fill", ORB_FILL)
                .attr("opacity", "0")
                .child(motion)
                .child(animate("r", ORB_RADIUS_VALUES, timing))
                .child(animate("opacity", ORB_OPACITY_VALUES, timing))
                .into()
        })
        .collect()
}

/// Everything the synchroniser writes for one parameter snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub paths: PathSet,
    pub container: ContainerStyle,
    pub static_paths: Vec<Node>,
    pub orbs: Vec<Node>,
}

pub fn build_scene(params: &Parameters, layout: &Layout) -> Scene {
    let paths = compute_paths(params, layout);
    log::debug!(
        "[scene] padding_x={:.2} curvature={} skew={}",
        paths.horizontal_padding,
        params.curvature,
        params.skew
    );
    Scene {
        container: container_style(params, paths.horizontal_padding),
        static_paths: static_path_nodes(&paths, params.thickness),
        orbs: orb_nodes(&paths, params.glow_speed),
        paths,
    }
}
