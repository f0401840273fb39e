use anyhow::{Result, ensure};
use eframe::egui::{Vec2, vec2};
use rand::Rng;

pub(crate) const MIN_NODE_RADIUS: i32 = 4;
pub(crate) const MAX_NODE_RADIUS: i32 = 8;

const MIN_AXIS_SPEED: i32 = 1;
const MAX_AXIS_SPEED: i32 = 7;

/// One moving point in the network. Radius and per-axis speed are drawn once
/// at construction; afterwards only the position and the velocity signs change.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node {
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    pub(crate) radius: f32,
}

impl Node {
    pub(crate) fn new(rng: &mut impl Rng, bounds: Vec2) -> Result<Self> {
        ensure!(
            bounds.x >= (2 * MAX_NODE_RADIUS) as f32 && bounds.y >= (2 * MAX_NODE_RADIUS) as f32,
            "canvas {}x{} cannot fit a node of radius {MAX_NODE_RADIUS} inside its margin",
            bounds.x,
            bounds.y,
        );

        let radius = rng.gen_range(MIN_NODE_RADIUS..=MAX_NODE_RADIUS);
        let pos = vec2(
            rng.gen_range(radius..=bounds.x as i32 - radius) as f32,
            rng.gen_range(radius..=bounds.y as i32 - radius) as f32,
        );
        let vel = vec2(
            rng.gen_range(MIN_AXIS_SPEED..=MAX_AXIS_SPEED) as f32,
            rng.gen_range(MIN_AXIS_SPEED..=MAX_AXIS_SPEED) as f32,
        );

        Ok(Self {
            pos,
            vel,
            radius: radius as f32,
        })
    }

    /// Reflects off the canvas edges, then advances one step. The reflection
    /// test runs before the positional update, so a node may overshoot the
    /// margin by at most one step before turning around.
    pub(crate) fn step_motion(&mut self, bounds: Vec2) {
        if self.pos.x > bounds.x - self.radius || self.pos.x < self.radius {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > bounds.y - self.radius || self.pos.y < self.radius {
            self.vel.y = -self.vel.y;
        }
        self.pos += self.vel;
    }
}

/// The fixed collection of nodes. Owns them exclusively; iteration order is
/// construction order.
pub(crate) struct NodeSet {
    nodes: Vec<Node>,
}

impl NodeSet {
    pub(crate) fn generate(rng: &mut impl Rng, count: usize, bounds: Vec2) -> Result<Self> {
        let mut nodes = Vec::with_capacity(count);
        for _ in 0..count {
            nodes.push(Node::new(rng, bounds)?);
        }
        Ok(Self { nodes })
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Collects line endpoints from the node at `index` to every node of the
    /// set within `threshold`, including the zero-length self link. The
    /// comparison is strict and runs in double precision so positions right at
    /// the threshold do not flicker in and out.
    pub(crate) fn link_endpoints(&self, index: usize, threshold: f32, out: &mut Vec<(Vec2, Vec2)>) {
        out.clear();
        let origin = self.nodes[index].pos;
        for node in &self.nodes {
            let dx = (origin.x - node.pos.x) as f64;
            let dy = (origin.y - node.pos.y) as f64;
            if (dx * dx + dy * dy).sqrt() < threshold as f64 {
                out.push((origin, node.pos));
            }
        }
    }

    pub(crate) fn step_node(&mut self, index: usize, bounds: Vec2) {
        self.nodes[index].step_motion(bounds);
    }
}
