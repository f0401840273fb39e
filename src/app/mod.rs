use std::collections::VecDeque;

use eframe::egui::{self, Context, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SimConfig;

pub(crate) mod node;
mod view;

use node::NodeSet;

/// Everything the frame loop owns: the parameters, the node set, a scratch
/// buffer for link endpoints, and frame-rate bookkeeping.
pub struct NetAnimApp {
    config: SimConfig,
    nodes: NodeSet,
    link_scratch: Vec<(Vec2, Vec2)>,
    show_fps: bool,
    fps_current: f32,
    fps_samples: VecDeque<f32>,
}

impl NetAnimApp {
    pub fn new(config: SimConfig, seed: u64, show_fps: bool) -> anyhow::Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = NodeSet::generate(&mut rng, config.node_count, config.bounds())?;

        Ok(Self {
            config,
            nodes,
            link_scratch: Vec::new(),
            show_fps,
            fps_current: 0.0,
            fps_samples: VecDeque::new(),
        })
    }

    fn update_fps_counter(&mut self, ctx: &Context) {
        const FPS_SAMPLE_WINDOW: usize = 180;

        let dt = ctx.input(|input| input.stable_dt);
        if dt <= f32::EPSILON {
            return;
        }

        self.fps_current = (1.0 / dt).clamp(0.0, 1000.0);
        self.fps_samples.push_back(self.fps_current);
        while self.fps_samples.len() > FPS_SAMPLE_WINDOW {
            self.fps_samples.pop_front();
        }
    }

    fn fps_display_text(&self) -> Option<String> {
        if !self.show_fps || self.fps_samples.is_empty() {
            return None;
        }

        let average = self.fps_samples.iter().sum::<f32>() / self.fps_samples.len() as f32;
        Some(format!("FPS {:.0} | avg {average:.1}", self.fps_current))
    }
}

impl eframe::App for NetAnimApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.update_fps_counter(ctx);

        if ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Motion runs only while Space is held.
        let motion_enabled = ctx.input(|input| input.key_down(egui::Key::Space));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_scene(ui, motion_enabled));

        ctx.request_repaint_after(self.config.frame_interval());
    }
}
