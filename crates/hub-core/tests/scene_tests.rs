// Host-side tests for the SVG scene description.

use hub_core::{build_scene, Element, Layout, Node, ParamKey, Parameters};

fn elements(nodes: &[Node]) -> Vec<&Element> {
    nodes.iter().filter_map(Node::as_element).collect()
}

fn secs(value: &str) -> f64 {
    value
        .strip_suffix('s')
        .and_then(|v| v.parse().ok())
        .expect("seconds value")
}

#[test]
fn static_paths_carry_thickness() {
    let params = Parameters::default().with(ParamKey::Thickness, 3.5);
    let scene = build_scene(&params, &Layout::default());
    let paths = elements(&scene.static_paths);
    assert_eq!(paths.len(), 6);
    for (el, desc) in paths.iter().zip(scene.paths.static_paths.iter()) {
        assert_eq!(el.tag, "path");
        assert_eq!(el.get_attr("stroke-width"), Some("3.5"));
        assert_eq!(el.get_attr("stroke"), Some("#4b5563"));
        assert_eq!(el.get_attr("fill"), Some("none"));
        assert_eq!(el.get_attr("d"), Some(desc.to_svg_d().as_str()));
    }
}

#[test]
fn orbs_ride_animated_paths() {
    let scene = build_scene(&Parameters::default(), &Layout::default());
    let orbs = elements(&scene.orbs);
    assert_eq!(orbs.len(), 6);
    for (i, orb) in orbs.iter().enumerate() {
        assert_eq!(orb.tag, "circle");
        assert_eq!(orb.get_attr("r"), Some("8"));
        assert_eq!(orb.get_attr("fill"), Some("url(#glow)"));
        assert_eq!(orb.get_attr("opacity"), Some("0"));

        let kids = elements(&orb.children);
        let tags: Vec<&str> = kids.iter().map(|k| k.tag).collect();
        assert_eq!(tags, vec!["animateMotion", "animate", "animate"]);

        let motion = kids[0];
        let expected_path = scene.paths.animated_paths[i].to_svg_d();
        assert_eq!(motion.get_attr("path"), Some(expected_path.as_str()));
        assert_eq!(motion.get_attr("repeatCount"), Some("indefinite"));

        assert_eq!(kids[1].get_attr("attributeName"), Some("r"));
        assert_eq!(kids[1].get_attr("values"), Some("0;8;8;0"));
        assert_eq!(kids[2].get_attr("attributeName"), Some("opacity"));
        assert_eq!(kids[2].get_attr("values"), Some("0;1;1;0"));
        for anim in &kids[1..] {
            assert_eq!(anim.get_attr("keyTimes"), Some("0; 0.1; 0.9; 1"));
        }
    }
}

#[test]
fn halving_glow_speed_halves_timing_only() {
    let layout = Layout::default();
    let slow = build_scene(&Parameters::default().with(ParamKey::GlowSpeed, 4.0), &layout);
    let fast = build_scene(&Parameters::default().with(ParamKey::GlowSpeed, 2.0), &layout);

    assert_eq!(slow.paths, fast.paths);
    assert_eq!(slow.static_paths, fast.static_paths);

    for (s, f) in elements(&slow.orbs).iter().zip(elements(&fast.orbs).iter()) {
        for (sk, fk) in elements(&s.children).iter().zip(elements(&f.children).iter()) {
            let s_dur = secs(sk.get_attr("dur").unwrap());
            let f_dur = secs(fk.get_attr("dur").unwrap());
            assert!((s_dur / 2.0 - f_dur).abs() < 1e-12);
            let s_begin = secs(sk.get_attr("begin").unwrap());
            let f_begin = secs(fk.get_attr("begin").unwrap());
            assert!((s_begin / 2.0 - f_begin).abs() < 1e-12);
        }
    }

    let begins: Vec<f64> = elements(&fast.orbs)
        .iter()
        .map(|o| secs(elements(&o.children)[0].get_attr("begin").unwrap()))
        .collect();
    for pair in begins.windows(2) {
        assert!((pair[1] - pair[0] - 2.0 / 6.0).abs() < 1e-12);
    }
}

#[test]
fn rebuilding_with_same_parameters_is_identical() {
    let params = Parameters {
        curvature: 44.0,
        skew: -5.0,
        perspective: 20.0,
        ..Parameters::default()
    };
    let layout = Layout::default();
    let a = build_scene(&params, &layout);
    let b = build_scene(&params, &layout);
    assert_eq!(a, b);
}

#[test]
fn parameter_change_keeps_node_shape() {
    let layout = Layout::default();
    let a = build_scene(&Parameters::default(), &layout);
    let b = build_scene(&Parameters::default().with(ParamKey::Curvature, 80.0), &layout);
    assert_ne!(a.static_paths, b.static_paths);
    for (x, y) in a.static_paths.iter().zip(&b.static_paths) {
        assert!(x.same_shape(y));
    }
    for (x, y) in a.orbs.iter().zip(&b.orbs) {
        assert!(x.same_shape(y));
    }
}

#[test]
fn container_style_follows_parameters() {
    let params = Parameters::default()
        .with(ParamKey::Perspective, 30.0)
        .with(ParamKey::VerticalPadding, 100.0)
        .with(ParamKey::LineLength, 100.0);
    let scene = build_scene(&params, &Layout::default());
    assert_eq!(scene.container.transform, "rotateY(30deg)");
    assert_eq!(scene.container.padding_x, "4px");
    assert_eq!(scene.container.padding_y, "100px");
}
