// Mount points, selectors and attribute names the web front-end relies on.

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Component-tree page
pub const ROOT_ID: &str = "root";

// Control-panel page: externally owned mount points
pub const MAIN_CONTAINER_ID: &str = "main-content-container";
pub const CARDS_AND_HUB_ID: &str = "cards-and-hub-container";
pub const LEFT_CARDS_ID: &str = "left-cards";
pub const RIGHT_CARDS_ID: &str = "right-cards";
pub const STATIC_PATHS_GROUP_ID: &str = "static-paths-group";
pub const ANIMATED_ORBS_GROUP_ID: &str = "animated-orbs-group";

// Optional: filled with generated sliders when present and empty
pub const PARAMETER_PANEL_ID: &str = "parameter-panel";

// `data-sync="patch"` on the main container keeps SVG nodes across changes
pub const SYNC_ATTR: &str = "data-sync";

pub const REQUIRED_MOUNT_IDS: [&str; 6] = [
    MAIN_CONTAINER_ID,
    CARDS_AND_HUB_ID,
    LEFT_CARDS_ID,
    RIGHT_CARDS_ID,
    STATIC_PATHS_GROUP_ID,
    ANIMATED_ORBS_GROUP_ID,
];

// Decorative images that follow the scroll position
pub const PARALLAX_SELECTORS: [&str; 2] = [".png2", ".png3"];
