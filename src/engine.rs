use std::f32::consts::TAU;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::GraphModel;
use crate::util::stable_pair;

const MOVEMENT_EPSILON: f32 = 0.08;
const STILL_STEPS_BEFORE_SETTLE: u32 = 12;

/// The force simulation as the viewer sees it: it owns the authoritative
/// graph-space `(x, y)` of every node and is the only writer of those
/// fields. `step` copies the simulated positions back into the model.
pub trait LayoutEngine {
    fn load(&mut self, model: &GraphModel, width: f32, height: f32);
    fn resize(&mut self, width: f32, height: f32);
    /// Restart physics after an external parameter change, even if the
    /// simulation had settled.
    fn resume(&mut self);
    /// Advance one simulation step and write positions into the model.
    /// Returns false once the layout has settled.
    fn step(&mut self, dt: f32, model: &mut GraphModel) -> bool;
    fn set_fixed(&mut self, node: usize, fixed: bool);
    fn set_position(&mut self, node: usize, x: f32, y: f32);
}

pub struct ForceLayout {
    graph: ForceGraph<usize, ()>,
    handles: Vec<DefaultNodeIdx>,
    width: f32,
    height: f32,
    still_steps: u32,
    settled: bool,
}

impl ForceLayout {
    pub fn new() -> Self {
        Self {
            graph: Self::empty_graph(),
            handles: Vec::new(),
            width: 0.0,
            height: 0.0,
            still_steps: 0,
            settled: false,
        }
    }

    fn empty_graph() -> ForceGraph<usize, ()> {
        ForceGraph::new(SimulationParameters {
            force_charge: 160.0,
            force_spring: 0.04,
            force_max: 110.0,
            node_speed: 2400.0,
            damping_factor: 0.92,
        })
    }
}

impl LayoutEngine for ForceLayout {
    fn load(&mut self, model: &GraphModel, width: f32, height: f32) {
        self.graph = Self::empty_graph();
        self.handles.clear();
        self.width = width;
        self.height = height;

        let count = model.nodes.len().max(1);
        let ring = (width.min(height) * 0.3).max(40.0);
        for (index, node) in model.nodes.iter().enumerate() {
            let angle = (index as f32 / count as f32) * TAU;
            let (jx, jy) = stable_pair(&node.id);
            let handle = self.graph.add_node(NodeData {
                x: width / 2.0 + ring * angle.cos() + jx * 24.0,
                y: height / 2.0 + ring * angle.sin() + jy * 24.0,
                mass: 10.0,
                is_anchor: node.fixed,
                user_data: index,
            });
            self.handles.push(handle);
        }

        for link in &model.links {
            if link.source == link.target {
                continue;
            }
            if let (Some(&source), Some(&target)) = (
                self.handles.get(link.source),
                self.handles.get(link.target),
            ) {
                self.graph.add_edge(source, target, EdgeData::default());
            }
        }

        self.still_steps = 0;
        self.settled = false;
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        let (max_x, max_y) = (width.max(1.0), height.max(1.0));
        self.graph.visit_nodes_mut(|node| {
            node.data.x = node.data.x.clamp(0.0, max_x);
            node.data.y = node.data.y.clamp(0.0, max_y);
        });
    }

    fn resume(&mut self) {
        self.still_steps = 0;
        self.settled = false;
    }

    fn step(&mut self, dt: f32, model: &mut GraphModel) -> bool {
        if self.settled || self.handles.is_empty() {
            return false;
        }

        self.graph.update(dt);

        let (max_x, max_y) = (self.width.max(1.0), self.height.max(1.0));
        let mut max_movement = 0.0f32;
        self.graph.visit_nodes_mut(|node| {
            node.data.x = node.data.x.clamp(0.0, max_x);
            node.data.y = node.data.y.clamp(0.0, max_y);

            let Some(record) = model.nodes.get_mut(node.data.user_data) else {
                return;
            };
            let movement =
                (node.data.x - record.x).abs() + (node.data.y - record.y).abs();
            max_movement = max_movement.max(movement);
            record.x = node.data.x;
            record.y = node.data.y;
        });

        if max_movement < MOVEMENT_EPSILON {
            self.still_steps += 1;
            if self.still_steps >= STILL_STEPS_BEFORE_SETTLE {
                self.settled = true;
                return false;
            }
        } else {
            self.still_steps = 0;
        }

        true
    }

    fn set_fixed(&mut self, node: usize, fixed: bool) {
        let Some(&handle) = self.handles.get(node) else {
            return;
        };
        self.graph.visit_nodes_mut(|candidate| {
            if candidate.index() == handle {
                candidate.data.is_anchor = fixed;
            }
        });
    }

    fn set_position(&mut self, node: usize, x: f32, y: f32) {
        let Some(&handle) = self.handles.get(node) else {
            return;
        };
        let (max_x, max_y) = (self.width.max(1.0), self.height.max(1.0));
        self.graph.visit_nodes_mut(|candidate| {
            if candidate.index() == handle {
                candidate.data.x = x.clamp(0.0, max_x);
                candidate.data.y = y.clamp(0.0, max_y);
            }
        });
    }
}
