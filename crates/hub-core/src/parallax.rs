// Scroll-driven transform for the decorative hero images.

use crate::constants::PARALLAX_SCROLL_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallaxStyle {
    pub transition: &'static str,
    pub transform: &'static str,
}

// Past the threshold the image settles slowly; scrolling back snaps it out fast.
pub const SETTLED: ParallaxStyle = ParallaxStyle {
    transition: "transform 2s ease",
    transform: "translate(-50%, -10%) rotate(0deg)",
};

pub const TILTED: ParallaxStyle = ParallaxStyle {
    transition: "transform 0.1s ease",
    transform: "translate(-60%, -30%) rotate(-10deg)",
};

#[inline]
pub fn style_for_scroll(scroll_y: f64) -> ParallaxStyle {
    if scroll_y > PARALLAX_SCROLL_THRESHOLD_PX {
        SETTLED
    } else {
        TILTED
    }
}
