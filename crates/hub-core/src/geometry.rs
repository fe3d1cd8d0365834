//! Connector-line geometry.
//!
//! [`compute_paths`] maps a [`Parameters`] snapshot to the six lines joining
//! the feature cards to the hub. It is a pure function: the same parameters
//! and layout always produce the same [`PathSet`].

use crate::constants::*;
use crate::params::Parameters;
use glam::DVec2;
use smallvec::SmallVec;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Direction that points from the hub towards this side's cards.
    #[inline]
    pub fn outward(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

impl Row {
    pub const ALL: [Row; 3] = [Row::Top, Row::Middle, Row::Bottom];
}

/// One drawing command after the initial move-to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    LineTo(DVec2),
    /// Horizontal line to the given x, keeping the current y.
    HorizontalTo(f64),
    CubicTo { c1: DVec2, c2: DVec2, to: DVec2 },
}

/// A move-to followed by one or two segments, tagged with where it sits.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDescriptor {
    pub side: Side,
    pub row: Row,
    pub start: DVec2,
    pub segments: SmallVec<[Segment; 2]>,
}

impl PathDescriptor {
    pub fn polyline(side: Side, row: Row, points: &[DVec2]) -> Self {
        let (start, rest): (DVec2, &[DVec2]) = match points.split_first() {
            Some((s, r)) => (*s, r),
            None => (DVec2::ZERO, &[]),
        };
        Self {
            side,
            row,
            start,
            segments: rest.iter().map(|p| Segment::LineTo(*p)).collect(),
        }
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Start point followed by the end point of every segment.
    pub fn points(&self) -> SmallVec<[DVec2; 3]> {
        let mut out = SmallVec::new();
        out.push(self.start);
        let mut cur = self.start;
        for seg in &self.segments {
            cur = match *seg {
                Segment::LineTo(p) => p,
                Segment::HorizontalTo(x) => DVec2::new(x, cur.y),
                Segment::CubicTo { to, .. } => to,
            };
            out.push(cur);
        }
        out
    }

    #[inline]
    pub fn end(&self) -> DVec2 {
        self.points().last().copied().unwrap_or(self.start)
    }

    /// Same curve traversed from its end back to its start.
    pub fn reversed(&self) -> Self {
        let pts = self.points();
        let mut segments = SmallVec::new();
        for (i, seg) in self.segments.iter().enumerate().rev() {
            let back_to = pts[i];
            segments.push(match *seg {
                Segment::LineTo(_) => Segment::LineTo(back_to),
                Segment::HorizontalTo(_) => Segment::HorizontalTo(back_to.x),
                Segment::CubicTo { c1, c2, .. } => Segment::CubicTo {
                    c1: c2,
                    c2: c1,
                    to: back_to,
                },
            });
        }
        Self {
            side: self.side,
            row: self.row,
            start: pts[pts.len() - 1],
            segments,
        }
    }

    /// SVG `d` attribute, e.g. `M 100 88 L 484 266 L 504 266`.
    pub fn to_svg_d(&self) -> String {
        let mut d = format!("M {} {}", self.start.x, self.start.y);
        for seg in &self.segments {
            _ = match seg {
                Segment::LineTo(p) => write!(d, " L {} {}", p.x, p.y),
                Segment::HorizontalTo(x) => write!(d, " H {}", x),
                Segment::CubicTo { c1, c2, to } => write!(
                    d,
                    " C {} {}, {} {}, {} {}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                ),
            };
        }
        d
    }
}

/// Fixed page measurements the geometry depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub container_width_px: f64,
    pub container_height_px: f64,
    pub card_width_px: f64,
    pub half_card_height_px: f64,
    pub svg_viewbox_width: f64,
    pub min_padding: f64,
    pub max_padding: f64,
    pub hub_x_left: f64,
    pub hub_x_right: f64,
    pub hub_y: [f64; 3],
    pub anchor_y_middle: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            container_width_px: CONTAINER_WIDTH_PX,
            container_height_px: CONTAINER_HEIGHT_PX,
            card_width_px: CARD_WIDTH_PX,
            half_card_height_px: HALF_CARD_HEIGHT_PX,
            svg_viewbox_width: SVG_VIEWBOX_WIDTH,
            min_padding: MIN_PADDING,
            max_padding: MAX_PADDING,
            hub_x_left: HUB_X_LEFT,
            hub_x_right: HUB_X_RIGHT,
            hub_y: [HUB_Y_TOP, HUB_Y_MIDDLE, HUB_Y_BOTTOM],
            anchor_y_middle: ANCHOR_Y_MIDDLE,
        }
    }
}

impl Layout {
    /// Map `line_length` in 0..=100 onto the padding range, inverted.
    #[inline]
    pub fn horizontal_padding(&self, line_length: f64) -> f64 {
        self.max_padding - (line_length / 100.0) * (self.max_padding - self.min_padding)
    }

    /// Card-side anchor y for the top and bottom rows.
    #[inline]
    pub fn anchor_rows_y(&self, vertical_padding: f64) -> (f64, f64) {
        let top = vertical_padding + self.half_card_height_px;
        let bottom = self.container_height_px - vertical_padding - self.half_card_height_px;
        (top, bottom)
    }

    /// Card-side anchor x for both sides before skew, in viewport units.
    #[inline]
    pub fn anchor_x_unskewed(&self, horizontal_padding: f64) -> (f64, f64) {
        let ratio = self.svg_viewbox_width / self.container_width_px;
        let left_px = horizontal_padding + self.card_width_px;
        let right_px = self.container_width_px - horizontal_padding - self.card_width_px;
        (left_px * ratio, right_px * ratio)
    }

    #[inline]
    pub fn hub_point(&self, side: Side, row: Row) -> DVec2 {
        let x = match side {
            Side::Left => self.hub_x_left,
            Side::Right => self.hub_x_right,
        };
        DVec2::new(x, self.hub_y[row as usize])
    }
}

/// Output of one geometry pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSet {
    /// Card → hub, ordered left top/middle/bottom then right top/middle/bottom.
    pub static_paths: [PathDescriptor; 6],
    /// Hub → card, same order.
    pub animated_paths: [PathDescriptor; 6],
    pub horizontal_padding: f64,
}

impl PathSet {
    pub fn get(&self, side: Side, row: Row) -> (&PathDescriptor, &PathDescriptor) {
        let i = path_index(side, row);
        (&self.static_paths[i], &self.animated_paths[i])
    }
}

#[inline]
pub fn path_index(side: Side, row: Row) -> usize {
    side as usize * 3 + row as usize
}

pub fn compute_paths(params: &Parameters, layout: &Layout) -> PathSet {
    let horizontal_padding = layout.horizontal_padding(params.line_length);
    let (top_y, bottom_y) = layout.anchor_rows_y(params.vertical_padding);
    let (left_x, right_x) = layout.anchor_x_unskewed(horizontal_padding);

    let build = |side: Side, row: Row| -> PathDescriptor {
        let anchor_x = match side {
            Side::Left => left_x + params.skew,
            Side::Right => right_x - params.skew,
        };
        let anchor_y = match row {
            Row::Top => top_y,
            Row::Middle => layout.anchor_y_middle,
            Row::Bottom => bottom_y,
        };
        let anchor = DVec2::new(anchor_x, anchor_y);
        let hub = layout.hub_point(side, row);
        match row {
            Row::Middle => PathDescriptor::polyline(side, row, &[anchor, hub]),
            Row::Top | Row::Bottom => {
                let elbow = DVec2::new(hub.x + side.outward() * params.curvature, hub.y);
                PathDescriptor::polyline(side, row, &[anchor, elbow, hub])
            }
        }
    };

    let static_paths = [
        build(Side::Left, Row::Top),
        build(Side::Left, Row::Middle),
        build(Side::Left, Row::Bottom),
        build(Side::Right, Row::Top),
        build(Side::Right, Row::Middle),
        build(Side::Right, Row::Bottom),
    ];
    let animated_paths = static_paths.clone().map(|p| p.reversed());

    PathSet {
        static_paths,
        animated_paths,
        horizontal_padding,
    }
}
