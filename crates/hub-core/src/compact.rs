//! Curved connector lines for the compact, component-tree page.
//!
//! Here only the card-side heights of the top and bottom rows are adjustable.
//! Lines start at the hub and bend towards the cards with a cubic curve.

use crate::constants::*;
use crate::geometry::{PathDescriptor, Row, Segment, Side};
use glam::DVec2;
use smallvec::smallvec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompactParams {
    pub top_y: f64,
    pub bottom_y: f64,
}

impl Default for CompactParams {
    fn default() -> Self {
        Self {
            top_y: TOP_LINES_DEFAULT,
            bottom_y: BOTTOM_LINES_DEFAULT,
        }
    }
}

#[inline]
fn hub_x(side: Side) -> f64 {
    match side {
        Side::Left => COMPACT_HUB_X_LEFT,
        Side::Right => COMPACT_HUB_X_RIGHT,
    }
}

#[inline]
fn card_x(side: Side) -> f64 {
    match side {
        Side::Left => COMPACT_CARD_X_LEFT,
        Side::Right => COMPACT_CARD_X_RIGHT,
    }
}

#[inline]
fn hub_y(row: Row) -> f64 {
    match row {
        Row::Top => COMPACT_HUB_Y_TOP,
        Row::Middle => COMPACT_HUB_Y_MIDDLE,
        Row::Bottom => COMPACT_HUB_Y_BOTTOM,
    }
}

impl CompactParams {
    /// Card-side y of a row; the middle row stays level with the hub.
    #[inline]
    pub fn card_y(&self, row: Row) -> f64 {
        match row {
            Row::Top => self.top_y,
            Row::Middle => COMPACT_HUB_Y_MIDDLE,
            Row::Bottom => self.bottom_y,
        }
    }

    /// Where each line meets its card, in left-then-right, top-to-bottom order.
    pub fn endpoint_dots(&self) -> [DVec2; 6] {
        let mut out = [DVec2::ZERO; 6];
        for (i, (side, row)) in slots().enumerate() {
            out[i] = DVec2::new(card_x(side), self.card_y(row));
        }
        out
    }
}

fn slots() -> impl Iterator<Item = (Side, Row)> {
    Side::BOTH
        .into_iter()
        .flat_map(|side| Row::ALL.into_iter().map(move |row| (side, row)))
}

pub fn compact_path(params: &CompactParams, side: Side, row: Row) -> PathDescriptor {
    let hx = hub_x(side);
    let start = DVec2::new(hx, hub_y(row));
    let segment = match row {
        Row::Middle => Segment::HorizontalTo(card_x(side)),
        Row::Top | Row::Bottom => {
            let y = params.card_y(row);
            let out = side.outward();
            Segment::CubicTo {
                c1: DVec2::new(hx + out * COMPACT_NEAR_CONTROL_DX, start.y),
                c2: DVec2::new(hx + out * COMPACT_FAR_CONTROL_DX, y),
                to: DVec2::new(card_x(side), y),
            }
        }
    };
    PathDescriptor {
        side,
        row,
        start,
        segments: smallvec![segment],
    }
}

pub fn compact_paths(params: &CompactParams) -> [PathDescriptor; 6] {
    [
        compact_path(params, Side::Left, Row::Top),
        compact_path(params, Side::Left, Row::Middle),
        compact_path(params, Side::Left, Row::Bottom),
        compact_path(params, Side::Right, Row::Top),
        compact_path(params, Side::Right, Row::Middle),
        compact_path(params, Side::Right, Row::Bottom),
    ]
}

/// Dash animation timing for one line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineTiming {
    pub duration_sec: f64,
    pub delay_sec: f64,
}

impl LineTiming {
    /// Build from two uniform samples in `[0, 1)`.
    pub fn from_unit(duration_sample: f64, delay_sample: f64) -> Self {
        Self {
            duration_sec: DASH_DURATION_BASE_SEC + duration_sample * DASH_DURATION_SPAN_SEC,
            delay_sec: delay_sample * DASH_DELAY_SPAN_SEC,
        }
    }
}
