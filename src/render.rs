use eframe::egui::{Pos2, pos2};

use crate::graph::GraphModel;
use crate::view::ViewportTransform;

pub const NODE_RADIUS: f32 = 12.0;
pub const LABEL_PADDING: f32 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
    pub node: usize,
    pub center: Pos2,
    pub label: Pos2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkShape {
    pub link: usize,
    pub start: Pos2,
    pub end: Pos2,
    pub label: Pos2,
}

#[derive(Clone, Debug, Default)]
pub struct FrameShapes {
    pub nodes: Vec<NodeShape>,
    pub links: Vec<LinkShape>,
}

/// One presentation pass over the current simulation state: maps every
/// engine-owned node position through the viewport transform, writes the
/// screen position back onto the node, and rebuilds the shape list the
/// painter draws from. Simulation-owned `(x, y)` is only ever read here.
pub fn tick(model: &mut GraphModel, transform: &ViewportTransform, shapes: &mut FrameShapes) {
    shapes.nodes.clear();
    shapes.links.clear();

    for (index, node) in model.nodes.iter_mut().enumerate() {
        node.scaled_x = transform.map_x(node.x);
        node.scaled_y = transform.map_y(node.y);
        shapes.nodes.push(NodeShape {
            node: index,
            center: pos2(node.scaled_x, node.scaled_y),
            label: pos2(
                node.scaled_x + NODE_RADIUS + LABEL_PADDING,
                node.scaled_y,
            ),
        });
    }

    for (index, link) in model.links.iter().enumerate() {
        let (Some(source), Some(target)) =
            (model.nodes.get(link.source), model.nodes.get(link.target))
        else {
            continue;
        };

        let start = pos2(source.scaled_x, source.scaled_y);
        let end = pos2(target.scaled_x, target.scaled_y);
        shapes.links.push(LinkShape {
            link: index,
            start,
            end,
            label: pos2(
                axis_midpoint(start.x, end.x),
                axis_midpoint(start.y, end.y),
            ),
        });
    }
}

/// Midpoint of one axis, stepped from the source coordinate towards the
/// target so the label lands between the endpoints whichever way the link
/// was drawn.
fn axis_midpoint(source: f32, target: f32) -> f32 {
    let half = (source - target).abs() / 2.0;
    if source < target { source + half } else { source - half }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphModel, Node, RawEdge};

    fn model() -> GraphModel {
        let mut nodes = vec![
            Node::new("a", "library"),
            Node::new("b", "category"),
        ];
        nodes[0].x = 100.0;
        nodes[0].y = 200.0;
        nodes[1].x = 500.0;
        nodes[1].y = 200.0;

        GraphModel::build(
            nodes,
            &[RawEdge {
                from: "a".to_string(),
                to: "b".to_string(),
                kind: "depends_on".to_string(),
            }],
        )
        .unwrap()
    }

    #[test]
    fn writes_scaled_positions_without_touching_simulation_state() {
        let mut model = model();
        let transform = ViewportTransform::compute(50.0, 0.0, 960.0, 500.0, 0.5).unwrap();
        let mut shapes = FrameShapes::default();

        tick(&mut model, &transform, &mut shapes);

        assert_eq!(model.nodes[0].x, 100.0);
        assert_eq!(model.nodes[0].y, 200.0);
        assert_eq!(model.nodes[0].scaled_x, (100.0 - 50.0) * 2.0);
        assert_eq!(model.nodes[0].scaled_y, 400.0);
        assert_eq!(shapes.nodes[0].center, pos2(100.0, 400.0));
    }

    #[test]
    fn node_label_sits_right_of_the_circle() {
        let mut model = model();
        let transform = ViewportTransform::compute(0.0, 0.0, 960.0, 500.0, 1.0).unwrap();
        let mut shapes = FrameShapes::default();

        tick(&mut model, &transform, &mut shapes);

        let shape = &shapes.nodes[0];
        assert_eq!(shape.label.x, shape.center.x + NODE_RADIUS + LABEL_PADDING);
        assert_eq!(shape.label.y, shape.center.y);
    }

    #[test]
    fn link_label_lands_at_the_segment_midpoint() {
        assert_eq!(axis_midpoint(10.0, 50.0), 30.0);
        assert_eq!(axis_midpoint(50.0, 10.0), 30.0);
        assert_eq!(axis_midpoint(10.0, 10.0), 10.0);
    }

    #[test]
    fn link_endpoints_follow_the_scaled_node_positions() {
        let mut model = model();
        let transform = ViewportTransform::compute(0.0, 0.0, 960.0, 500.0, 1.0).unwrap();
        let mut shapes = FrameShapes::default();

        tick(&mut model, &transform, &mut shapes);

        let link = &shapes.links[0];
        assert_eq!(link.start, pos2(100.0, 200.0));
        assert_eq!(link.end, pos2(500.0, 200.0));
        assert_eq!(link.label, pos2(300.0, 200.0));
    }
}
