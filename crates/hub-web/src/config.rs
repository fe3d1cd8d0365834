// Page-level switches read from the host document at start-up.

use crate::constants::REQUIRED_MOUNT_IDS;

/// How the synchroniser updates the two SVG groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Drop and recreate every child; running animations restart.
    #[default]
    Rebuild,
    /// Update attributes of existing children in place when the shape matches.
    Patch,
}

impl SyncStrategy {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("patch") => SyncStrategy::Patch,
            _ => SyncStrategy::Rebuild,
        }
    }
}

/// What a single synchroniser pass does to the two SVG groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPass {
    Rebuild,
    Patch,
}

impl SyncPass {
    /// `previous_matches` is `None` when no trusted description of the live
    /// nodes exists, e.g. on first render or after a failed patch.
    pub fn choose(strategy: SyncStrategy, previous_matches: Option<bool>) -> Self {
        match (strategy, previous_matches) {
            (SyncStrategy::Patch, Some(true)) => SyncPass::Patch,
            _ => SyncPass::Rebuild,
        }
    }
}

/// Required mount ids for which `present` returns false, in lookup order.
pub fn missing_mounts(present: impl Fn(&str) -> bool) -> Vec<&'static str> {
    REQUIRED_MOUNT_IDS
        .into_iter()
        .filter(|id| !present(*id))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Component tree rendered into `#root`, two line-height sliders.
    Compact,
    /// Static page with the six mount ids, seven geometry sliders.
    Full,
}

/// `#root` wins when a page carries both mount styles.
#[inline]
pub fn detect_variant(has_root: bool, has_main_container: bool) -> Option<Variant> {
    match (has_root, has_main_container) {
        (true, _) => Some(Variant::Compact),
        (false, true) => Some(Variant::Full),
        (false, false) => None,
    }
}
