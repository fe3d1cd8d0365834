//! Keeps the control-panel page's containers and SVG groups in step with the
//! latest parameter snapshot.

use crate::config::{missing_mounts, SyncPass, SyncStrategy};
use crate::constants::*;
use crate::dom;
use anyhow::{bail, Result};
use hub_core::{build_scene, ContainerStyle, Layout, Parameters, Scene};
use instant::Instant;
use web_sys as web;

/// The six externally owned elements the synchroniser writes into.
pub struct Mounts {
    pub main_container: web::HtmlElement,
    pub cards_and_hub: web::HtmlElement,
    pub left_cards: web::HtmlElement,
    pub right_cards: web::HtmlElement,
    pub static_group: web::Element,
    pub orbs_group: web::Element,
}

impl Mounts {
    /// Fails naming every missing id; no partial page is rendered.
    pub fn lookup(document: &web::Document) -> Result<Self> {
        let missing = missing_mounts(|id| document.get_element_by_id(id).is_some());
        if !missing.is_empty() {
            bail!("missing mount points: #{}", missing.join(", #"));
        }
        Ok(Self {
            main_container: dom::require_html_element(document, MAIN_CONTAINER_ID)?,
            cards_and_hub: dom::require_html_element(document, CARDS_AND_HUB_ID)?,
            left_cards: dom::require_html_element(document, LEFT_CARDS_ID)?,
            right_cards: dom::require_html_element(document, RIGHT_CARDS_ID)?,
            static_group: dom::require_element(document, STATIC_PATHS_GROUP_ID)?,
            orbs_group: dom::require_element(document, ANIMATED_ORBS_GROUP_ID)?,
        })
    }
}

pub struct Synchronizer {
    document: web::Document,
    mounts: Mounts,
    layout: Layout,
    strategy: SyncStrategy,
    last: Option<Scene>,
}

impl Synchronizer {
    pub fn new(
        document: web::Document,
        mounts: Mounts,
        layout: Layout,
        strategy: SyncStrategy,
    ) -> Self {
        Self {
            document,
            mounts,
            layout,
            strategy,
            last: None,
        }
    }

    pub fn apply(&mut self, params: &Parameters) -> Result<()> {
        let started = Instant::now();
        let scene = build_scene(params, &self.layout);
        self.apply_container(&scene.container)?;

        // Taken up front: if a patch fails halfway the live nodes no longer
        // match `prev`, so the next pass must rebuild.
        let prev = self.last.take();
        let pass = SyncPass::choose(
            self.strategy,
            prev.as_ref().map(|p| same_shape(p, &scene)),
        );
        let m = &self.mounts;
        match (pass, &prev) {
            (SyncPass::Patch, Some(prev)) => {
                dom::patch_children(&m.static_group, &prev.static_paths, &scene.static_paths)?;
                dom::patch_children(&m.orbs_group, &prev.orbs, &scene.orbs)?;
            }
            _ => {
                dom::replace_children(&self.document, &m.static_group, &scene.static_paths)?;
                dom::replace_children(&self.document, &m.orbs_group, &scene.orbs)?;
            }
        }

        log::debug!(
            "[sync] {} {} paths, {} orbs in {:.2}ms",
            if pass == SyncPass::Patch { "patched" } else { "rebuilt" },
            scene.static_paths.len(),
            scene.orbs.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        self.last = Some(scene);
        Ok(())
    }

    fn apply_container(&self, style: &ContainerStyle) -> Result<()> {
        let m = &self.mounts;
        dom::set_style(&m.main_container, "transform", &style.transform)?;
        dom::set_style(&m.cards_and_hub, "padding-left", &style.padding_x)?;
        dom::set_style(&m.cards_and_hub, "padding-right", &style.padding_x)?;
        for column in [&m.left_cards, &m.right_cards] {
            dom::set_style(column, "padding-top", &style.padding_y)?;
            dom::set_style(column, "padding-bottom", &style.padding_y)?;
        }
        Ok(())
    }
}

fn same_shape(a: &Scene, b: &Scene) -> bool {
    let groups_match = |x: &[hub_core::Node], y: &[hub_core::Node]| {
        x.len() == y.len() && x.iter().zip(y).all(|(p, q)| p.same_shape(q))
    };
    groups_match(&a.static_paths, &b.static_paths) && groups_match(&a.orbs, &b.orbs)
}
