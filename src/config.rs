use std::time::Duration;

use anyhow::{Result, ensure};
use eframe::egui::{Vec2, vec2};

use crate::app::node::MAX_NODE_RADIUS;

/// Process-wide simulation parameters, fixed at startup.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub node_count: usize,
    pub link_threshold: f32,
    pub target_fps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            node_count: 50,
            link_threshold: 150.0,
            target_fps: 60,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        let min_side = 2 * MAX_NODE_RADIUS as u32;
        ensure!(
            self.width >= min_side && self.height >= min_side,
            "canvas {}x{} is too small: both sides must be at least {min_side} pixels \
             to fit a node of radius {MAX_NODE_RADIUS} inside its margin",
            self.width,
            self.height,
        );
        ensure!(self.node_count > 0, "node count must be at least 1");
        ensure!(
            self.link_threshold > 0.0,
            "link threshold must be positive, got {}",
            self.link_threshold
        );
        ensure!(self.target_fps > 0, "target frame rate must be at least 1");
        Ok(())
    }

    pub fn bounds(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_canvas_smaller_than_node_margin() {
        let config = SimConfig {
            width: 10,
            height: 10,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let no_nodes = SimConfig {
            node_count: 0,
            ..SimConfig::default()
        };
        assert!(no_nodes.validate().is_err());

        let no_threshold = SimConfig {
            link_threshold: 0.0,
            ..SimConfig::default()
        };
        assert!(no_threshold.validate().is_err());

        let no_fps = SimConfig {
            target_fps: 0,
            ..SimConfig::default()
        };
        assert!(no_fps.validate().is_err());
    }

    #[test]
    fn frame_interval_matches_target_rate() {
        let config = SimConfig::default();
        let interval = config.frame_interval();
        assert!((interval.as_secs_f64() - (1.0 / 60.0)).abs() < 1e-9);
    }
}
