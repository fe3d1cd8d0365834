// Host-side tests for the web front-end's constants and page switches.
// The crate itself is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use constants::*;

#[test]
fn mount_ids_are_distinct_and_non_empty() {
    let mut ids: Vec<&str> = REQUIRED_MOUNT_IDS.to_vec();
    ids.push(ROOT_ID);
    ids.push(PARAMETER_PANEL_ID);
    for id in &ids {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "ids are looked up without the hash: {id}");
    }
    let count = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), count);
}

#[test]
fn required_mounts_cover_containers_and_groups() {
    for id in [
        "main-content-container",
        "cards-and-hub-container",
        "left-cards",
        "right-cards",
        "static-paths-group",
        "animated-orbs-group",
    ] {
        assert!(REQUIRED_MOUNT_IDS.contains(&id), "{id} missing");
    }
}

#[test]
fn parallax_selectors_are_class_selectors() {
    assert_eq!(PARALLAX_SELECTORS, [".png2", ".png3"]);
}

#[test]
fn svg_namespace() {
    assert_eq!(SVG_NS, "http://www.w3.org/2000/svg");
}

#[test]
fn sync_strategy_from_attr() {
    assert_eq!(SyncStrategy::from_attr(None), SyncStrategy::Rebuild);
    assert_eq!(SyncStrategy::from_attr(Some("rebuild")), SyncStrategy::Rebuild);
    assert_eq!(SyncStrategy::from_attr(Some("patch")), SyncStrategy::Patch);
    assert_eq!(SyncStrategy::from_attr(Some(" Patch ")), SyncStrategy::Patch);
    assert_eq!(SyncStrategy::from_attr(Some("diff")), SyncStrategy::Rebuild);
    assert_eq!(SyncStrategy::default(), SyncStrategy::Rebuild);
}

#[test]
fn variant_detection_prefers_root() {
    assert_eq!(detect_variant(true, false), Some(Variant::Compact));
    assert_eq!(detect_variant(true, true), Some(Variant::Compact));
    assert_eq!(detect_variant(false, true), Some(Variant::Full));
    assert_eq!(detect_variant(false, false), None);
}

#[test]
fn patch_pass_needs_a_trusted_matching_previous() {
    use config::SyncStrategy::{Patch, Rebuild};
    assert_eq!(SyncPass::choose(Patch, Some(true)), SyncPass::Patch);
    assert_eq!(SyncPass::choose(Patch, Some(false)), SyncPass::Rebuild);
    // first render, or the previous description was dropped after a failed patch
    assert_eq!(SyncPass::choose(Patch, None), SyncPass::Rebuild);
    assert_eq!(SyncPass::choose(Rebuild, Some(true)), SyncPass::Rebuild);
}

#[test]
fn missing_mounts_lists_every_absent_id_in_order() {
    assert!(missing_mounts(|_| true).is_empty());
    assert_eq!(missing_mounts(|_| false), REQUIRED_MOUNT_IDS.to_vec());
    let present = [MAIN_CONTAINER_ID, LEFT_CARDS_ID, ANIMATED_ORBS_GROUP_ID];
    assert_eq!(
        missing_mounts(|id| present.iter().any(|p| *p == id)),
        vec![CARDS_AND_HUB_ID, RIGHT_CARDS_ID, STATIC_PATHS_GROUP_ID]
    );
}
