// Host-side tests for the connector-line geometry.

use glam::DVec2;
use hub_core::constants::{MAX_PADDING, MIN_PADDING};
use hub_core::{compute_paths, path_index, Layout, ParamKey, Parameters, Row, Side};

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn default_scenario_derived_numbers() {
    let params = Parameters {
        curvature: 20.0,
        skew: 0.0,
        vertical_padding: 40.0,
        line_length: 54.0,
        ..Parameters::default()
    };
    let layout = Layout::default();
    let set = compute_paths(&params, &layout);

    assert!(close(set.horizontal_padding, 48.16), "{}", set.horizontal_padding);

    let (left_top, _) = set.get(Side::Left, Row::Top);
    let (left_bottom, _) = set.get(Side::Left, Row::Bottom);
    assert_eq!(left_top.start.y, 88.0);
    assert_eq!(left_bottom.start.y, 527.0);

    // anchor x in viewport units: (48.16 + 270) * 1200 / 3800
    let expected_left = (48.16 + 270.0) * 1200.0 / 3800.0;
    assert!(close(left_top.start.x, expected_left));
    let (right_mid, _) = set.get(Side::Right, Row::Middle);
    let expected_right = (3800.0 - 48.16 - 270.0) * 1200.0 / 3800.0;
    assert!(close(right_mid.start.x, expected_right));
    assert_eq!(right_mid.start.y, 300.0);
}

#[test]
fn top_path_elbow_and_hub() {
    let set = compute_paths(&Parameters::default(), &Layout::default());
    let (left_top, _) = set.get(Side::Left, Row::Top);
    let pts = left_top.points();
    assert_eq!(pts[1], DVec2::new(484.0, 266.0));
    assert_eq!(pts[2], DVec2::new(504.0, 266.0));

    let (right_bottom, _) = set.get(Side::Right, Row::Bottom);
    let pts = right_bottom.points();
    assert_eq!(pts[1], DVec2::new(716.0, 334.0));
    assert_eq!(pts[2], DVec2::new(696.0, 334.0));

    let d = right_bottom.to_svg_d();
    assert!(d.ends_with(" L 716 334 L 696 334"), "{d}");
}

#[test]
fn compute_paths_is_deterministic() {
    let layout = Layout::default();
    let params = Parameters {
        curvature: 37.0,
        thickness: 2.0,
        skew: -13.0,
        vertical_padding: 120.0,
        line_length: 7.0,
        glow_speed: 3.5,
        perspective: 15.0,
    };
    assert_eq!(compute_paths(&params, &layout), compute_paths(&params, &layout));
}

#[test]
fn padding_monotonic_and_bounded() {
    let layout = Layout::default();
    let mut prev = f64::INFINITY;
    for step in 0..=200 {
        let line_length = step as f64 * 0.5;
        let params = Parameters::default().with(ParamKey::LineLength, line_length);
        let pad = compute_paths(&params, &layout).horizontal_padding;
        assert!(pad <= prev, "padding grew at line_length={line_length}");
        assert!(
            (MIN_PADDING - EPS..=MAX_PADDING + EPS).contains(&pad),
            "padding {pad} out of range"
        );
        prev = pad;
    }
    assert!(close(layout.horizontal_padding(0.0), MAX_PADDING));
    assert!(close(layout.horizontal_padding(100.0), MIN_PADDING));
}

#[test]
fn animated_paths_are_reversed_static_paths() {
    let params = Parameters {
        curvature: 55.0,
        skew: 9.0,
        ..Parameters::default()
    };
    let set = compute_paths(&params, &Layout::default());
    for side in Side::BOTH {
        for row in Row::ALL {
            let (stat, anim) = set.get(side, row);
            let mut forward: Vec<DVec2> = stat.points().into_iter().collect();
            forward.reverse();
            let backward: Vec<DVec2> = anim.points().into_iter().collect();
            assert_eq!(forward, backward, "{side:?} {row:?}");
            assert_eq!(anim.side, side);
            assert_eq!(anim.row, row);
        }
    }
}

#[test]
fn segment_counts_per_row() {
    let set = compute_paths(&Parameters::default(), &Layout::default());
    for side in Side::BOTH {
        for row in Row::ALL {
            let (stat, anim) = set.get(side, row);
            let expected = if row == Row::Middle { 1 } else { 2 };
            assert_eq!(stat.segment_count(), expected);
            assert_eq!(anim.segment_count(), expected);
        }
        let (mid, _) = set.get(side, Row::Middle);
        let pts = mid.points();
        assert_eq!(pts[0].y, pts[1].y, "middle line must be horizontal");
    }
}

#[test]
fn skew_is_mirrored() {
    let layout = Layout::default();
    let base = compute_paths(&Parameters::default(), &layout);
    let skewed = compute_paths(&Parameters::default().with(ParamKey::Skew, 17.0), &layout);
    for row in Row::ALL {
        let l = path_index(Side::Left, row);
        let r = path_index(Side::Right, row);
        assert!(close(
            skewed.static_paths[l].start.x - base.static_paths[l].start.x,
            17.0
        ));
        assert!(close(
            skewed.static_paths[r].start.x - base.static_paths[r].start.x,
            -17.0
        ));
        // hub ends do not move
        assert_eq!(skewed.static_paths[l].end(), base.static_paths[l].end());
    }
}

#[test]
fn glow_speed_leaves_geometry_untouched() {
    let layout = Layout::default();
    let slow = compute_paths(&Parameters::default().with(ParamKey::GlowSpeed, 4.0), &layout);
    let fast = compute_paths(&Parameters::default().with(ParamKey::GlowSpeed, 2.0), &layout);
    assert_eq!(slow, fast);
}
