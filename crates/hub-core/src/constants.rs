// Layout and tuning constants shared by the geometry, scene and view modules.

// Outer container, in page pixels
pub const CONTAINER_WIDTH_PX: f64 = 3800.0;
pub const CONTAINER_HEIGHT_PX: f64 = 615.0;
pub const CARD_WIDTH_PX: f64 = 270.0;
pub const HALF_CARD_HEIGHT_PX: f64 = 48.0; // card height (96px) / 2

// SVG viewport the connector lines are drawn in
pub const SVG_VIEWBOX_WIDTH: f64 = 1200.0;

// Horizontal padding range driven by line length
pub const MIN_PADDING: f64 = 4.0;
pub const MAX_PADDING: f64 = 100.0;

// Hub connector points (viewport units)
pub const HUB_X_LEFT: f64 = 504.0;
pub const HUB_X_RIGHT: f64 = 696.0;
pub const HUB_Y_TOP: f64 = 266.0;
pub const HUB_Y_MIDDLE: f64 = 300.0;
pub const HUB_Y_BOTTOM: f64 = 334.0;

// The middle card anchor never moves vertically
pub const ANCHOR_Y_MIDDLE: f64 = 300.0;

// Static line look
pub const STATIC_STROKE: &str = "#4b5563";

// Orb look and animation
pub const ORB_RADIUS: f64 = 8.0;
pub const ORB_FILL: &str = "url(#glow)";
pub const ORB_KEY_TIMES: &str = "0; 0.1; 0.9; 1";
pub const ORB_RADIUS_VALUES: &str = "0;8;8;0";
pub const ORB_OPACITY_VALUES: &str = "0;1;1;0";
pub const ORB_STAGGER_DIVISOR: f64 = 6.0; // one cycle is split evenly over six orbs

// Default slider values
pub const DEFAULT_CURVATURE: f64 = 20.0;
pub const DEFAULT_THICKNESS: f64 = 1.5;
pub const DEFAULT_SKEW: f64 = 0.0;
pub const DEFAULT_VERTICAL_PADDING: f64 = 40.0;
pub const DEFAULT_LINE_LENGTH: f64 = 54.0;
pub const DEFAULT_GLOW_SPEED: f64 = 4.0;
pub const DEFAULT_PERSPECTIVE: f64 = 0.0;

// Compact variant (component tree): viewport and hub anchors
pub const COMPACT_VIEWBOX_WIDTH: f64 = 1152.0;
pub const COMPACT_VIEWBOX_HEIGHT: f64 = 500.0;
pub const COMPACT_HUB_X_LEFT: f64 = 472.0;
pub const COMPACT_HUB_X_RIGHT: f64 = 680.0;
pub const COMPACT_HUB_Y_TOP: f64 = 202.0;
pub const COMPACT_HUB_Y_MIDDLE: f64 = 250.0;
pub const COMPACT_HUB_Y_BOTTOM: f64 = 298.0;
pub const COMPACT_CARD_X_LEFT: f64 = 296.0;
pub const COMPACT_CARD_X_RIGHT: f64 = 856.0;
pub const COMPACT_NEAR_CONTROL_DX: f64 = 72.0; // first control point, measured from the hub
pub const COMPACT_FAR_CONTROL_DX: f64 = 92.0; // second control point, measured from the hub

// Compact variant line heights
pub const TOP_LINES_MIN: f64 = 0.0;
pub const TOP_LINES_MAX: f64 = 150.0;
pub const TOP_LINES_DEFAULT: f64 = 40.0;
pub const BOTTOM_LINES_MIN: f64 = 350.0;
pub const BOTTOM_LINES_MAX: f64 = 500.0;
pub const BOTTOM_LINES_DEFAULT: f64 = 460.0;

// Compact variant dash animation
pub const DASH_LENGTH_PX: f64 = 8.0;
pub const DASH_DURATION_BASE_SEC: f64 = 2.5;
pub const DASH_DURATION_SPAN_SEC: f64 = 2.0;
pub const DASH_DELAY_SPAN_SEC: f64 = 2.0;
pub const BASE_LINE_STROKE: &str = "#6B7280";
pub const DASH_STROKE: &str = "#2dd4bf";
pub const ENDPOINT_DOT_RADIUS: f64 = 3.0;

// Scroll parallax
pub const PARALLAX_SCROLL_THRESHOLD_PX: f64 = 200.0;
