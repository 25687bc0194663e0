use super::*;
use crate::model::theme::Theme;

fn chain_spec(labels: &[&str]) -> FlowChainSpec {
    let theme = Theme::midnight();
    FlowChainSpec::new(
        labels.iter().copied(),
        Point::new(0.4, 1.82),
        Size::new(2.2, 1.0),
        0.3,
        theme.accent,
        theme.text,
    )
}

#[test]
fn five_nodes_interleave_with_four_arrows() {
    let shapes = flow_chain(&chain_spec(&["a", "b", "c", "d", "e"])).unwrap();
    assert_eq!(shapes.len(), 9);
    for (i, shape) in shapes.iter().enumerate() {
        match shape {
            Shape::FlowNode { .. } => assert_eq!(i % 2, 0, "node at odd position {i}"),
            Shape::Arrow { label, .. } => {
                assert_eq!(i % 2, 1, "arrow at even position {i}");
                assert_eq!(label, ARROW_GLYPH);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }
    assert_eq!(
        shapes
            .iter()
            .filter(|s| matches!(s, Shape::Arrow { .. }))
            .count(),
        4
    );
}

#[test]
fn arrows_sit_strictly_between_consecutive_nodes() {
    let shapes = flow_chain(&chain_spec(&["a", "b", "c"])).unwrap();
    for pair in shapes.chunks(2).collect::<Vec<_>>().windows(2) {
        let node = pair[0][0].bounds();
        let arrow = pair[0][1].bounds();
        let next = pair[1][0].bounds();
        let mid = (arrow.x0 + arrow.x1) / 2.0;
        assert!(node.x1 < mid && mid < next.x0);
    }
}

#[test]
fn single_node_emits_no_arrow() {
    let shapes = flow_chain(&chain_spec(&["only"])).unwrap();
    assert_eq!(shapes.len(), 1);
    assert!(matches!(shapes[0], Shape::FlowNode { .. }));
}

#[test]
fn nodes_advance_at_a_fixed_pitch() {
    let spec = chain_spec(&["a", "b", "c"]);
    let shapes = flow_chain(&spec).unwrap();
    let xs: Vec<f64> = shapes
        .iter()
        .filter(|s| matches!(s, Shape::FlowNode { .. }))
        .map(|s| s.bounds().x0)
        .collect();
    let pitch = spec.node_size.width + spec.gap;
    assert_eq!(xs, vec![0.4, 0.4 + pitch, 0.4 + 2.0 * pitch]);
}

#[test]
fn fill_override_recolors_one_node() {
    let theme = Theme::midnight();
    let spec = chain_spec(&["a", "b", "c"]).fill_override(2, theme.success);
    let shapes = flow_chain(&spec).unwrap();
    let fills: Vec<Color> = shapes
        .iter()
        .filter_map(|s| match s {
            Shape::FlowNode { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec![theme.accent, theme.accent, theme.success]);
}

#[test]
fn empty_chain_and_bad_dimensions_are_rejected() {
    assert!(flow_chain(&chain_spec(&[])).is_err());

    let mut spec = chain_spec(&["a"]);
    spec.node_size = Size::new(0.0, 1.0);
    assert!(flow_chain(&spec).is_err());

    let mut spec = chain_spec(&["a", "b"]);
    spec.gap = -0.1;
    assert!(flow_chain(&spec).is_err());
}

#[test]
fn zero_gap_is_rejected_for_multi_node_chains_only() {
    let mut spec = chain_spec(&["a", "b"]);
    spec.gap = 0.0;
    assert!(flow_chain(&spec).is_err());

    let mut spec = chain_spec(&["a"]);
    spec.gap = 0.0;
    assert_eq!(flow_chain(&spec).unwrap().len(), 1);
}
