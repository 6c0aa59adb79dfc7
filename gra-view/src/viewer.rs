//! Interactive graph rewriting automaton viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Automaton`] engine
//! and implements [`eframe::App`] to render and control it through an
//! egui UI.
//!
//! The typical per-frame update is:
//! 1. Handle UI interactions / input.
//! 2. If `running`, advance one physics tick every frame and one
//!    discrete automaton tick whenever `step_interval` has elapsed.
//! 3. Render edges, nodes and dying-node fades.

use eframe::App;
use glam::Vec2;
use gra_core::{config::Config, engine::Automaton, seeds::SeedKind, types::NodeId};
use rand::rng;

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The engine: [`Automaton`] (graph, rule, counters) and its config.
/// - UI state (pan/zoom, selected seed, stimulus settings, timing).
/// - eframe/egui callbacks for drawing and user interaction.
pub struct Viewer {
    auto: Automaton,

    rng: rand::rngs::ThreadRng,

    seed_kind: SeedKind,
    running: bool,
    zoom: f32,
    pan: egui::Vec2,

    last_new_ids: Vec<NodeId>,

    step_interval: f64,
    last_step_time: f64,
    impulse_strength: f32,
}

impl Viewer {
    /// Creates a new viewer seeded with the Petersen graph.
    pub fn new() -> Self {
        let mut rng = rng();
        let mut auto = Automaton::new();
        auto.seed(SeedKind::Petersen, &mut rng);

        Self {
            auto,
            rng,
            seed_kind: SeedKind::Petersen,
            running: false,
            zoom: 2.0,
            pan: egui::vec2(0.0, 0.0),
            last_new_ids: Vec::with_capacity(8),
            step_interval: 0.25,
            last_step_time: 0.0,
            impulse_strength: 4.0,
        }
    }

    /// Replaces the graph with a fresh seed of the selected kind,
    /// resetting the engine counters but keeping tunables and camera.
    fn reseed(&mut self) {
        self.auto.seed(self.seed_kind, &mut self.rng);
        self.last_new_ids.clear();
    }

    /// Advances the automaton by one discrete tick and remembers any
    /// nodes born from division, for highlighting.
    fn step_once(&mut self) {
        self.last_new_ids = self.auto.step(&mut self.rng);
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and then
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y goes up in world space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Viewer::world_to_screen`] (up to rounding).
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.step_interval)
                        .prefix("tick every ")
                        .suffix(" s")
                        .range(0.02..=2.0)
                        .speed(0.01),
                );

                if ui.button("Step").clicked() {
                    self.step_once();
                    self.last_step_time = ctx.input(|i| i.time);
                }

                if ui.button("Reseed").clicked() {
                    self.reseed();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.2..=8.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar from the engine's stats query.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let stats = self.auto.stats();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("t = {}", stats.time));
                ui.separator();
                ui.label(format!("nodes = {}", stats.nodes));
                ui.label(format!("edges = {}", stats.edges));
                ui.label(format!("alive = {}", stats.alive));
                ui.label(format!("divisions = {}", stats.divisions));
            });
        });
    }

    /// Builds the right-hand panel: rule, physics tunables, seed
    /// selection and the two external stimuli.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(230.0)
            .show(ctx, |ui| {
                ui.heading("Engine");

                ui.separator();
                ui.label("Rule");
                ui.horizontal(|ui| {
                    ui.label("rule:");
                    ui.add(egui::DragValue::new(&mut self.auto.cfg.rule).speed(1.0));
                });
                ui.horizontal(|ui| {
                    ui.label("fanout:");
                    ui.add(
                        egui::DragValue::new(&mut self.auto.cfg.fanout)
                            .range(2..=6)
                            .speed(1.0),
                    );
                });

                ui.separator();
                ui.label("Physics");
                Self::labeled_drag_f32(
                    ui,
                    "repulsion:",
                    &mut self.auto.cfg.repulsion,
                    0.0..=3000.0,
                    5.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "spring_k:",
                    &mut self.auto.cfg.spring_k,
                    0.0..=0.2,
                    0.001,
                );
                Self::labeled_drag_f32(
                    ui,
                    "spring_rest:",
                    &mut self.auto.cfg.spring_rest,
                    5.0..=120.0,
                    0.5,
                );
                Self::labeled_drag_f32(
                    ui,
                    "center_pull:",
                    &mut self.auto.cfg.center_pull,
                    0.0..=0.01,
                    0.0001,
                );
                Self::labeled_drag_f32(
                    ui,
                    "damping:",
                    &mut self.auto.cfg.damping,
                    0.5..=0.99,
                    0.005,
                );

                ui.separator();
                ui.label("Seed");
                for kind in SeedKind::ALL {
                    if ui
                        .selectable_label(self.seed_kind == kind, kind.label())
                        .clicked()
                    {
                        self.seed_kind = kind;
                        self.reseed();
                    }
                }

                ui.separator();
                ui.label("Stimuli");
                Self::labeled_drag_f32(
                    ui,
                    "impulse:",
                    &mut self.impulse_strength,
                    0.0..=20.0,
                    0.1,
                );
                if ui.button("Kick all nodes").clicked() {
                    let strength = self.impulse_strength;
                    self.auto.impulse(strength, &mut self.rng);
                }

                ui.label("Pitch class flip");
                ui.horizontal_wrapped(|ui| {
                    for pc in 0..12u8 {
                        if ui.button(format!("{pc}")).clicked() {
                            self.auto.flip_by_pitch_class(pc, &mut self.rng);
                        }
                    }
                });

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.auto.cfg = Config::default();
                }
            });
    }

    /// Builds the central panel where the graph is drawn and the camera
    /// is controlled.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(0.2, 8.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            // Draw edges, faded by the dimmer endpoint while dying.
            for (i, node) in self.auto.graph.nodes.iter().enumerate() {
                for &nb in &node.neighbors {
                    if nb <= i {
                        continue;
                    }
                    let other = &self.auto.graph.nodes[nb];
                    let alpha = node.alpha.min(other.alpha).clamp(0.0, 1.0);
                    let a = self.world_to_screen(node.pos, rect);
                    let b = self.world_to_screen(other.pos, rect);
                    let color = egui::Color32::from_rgba_unmultiplied(
                        120,
                        200,
                        160,
                        (alpha * 160.0) as u8,
                    );
                    painter.line_segment([a, b], egui::Stroke::new(1.0, color));
                }
            }

            // Draw nodes: state 1 bright, state 0 dim, newborns red.
            for (i, node) in self.auto.graph.nodes.iter().enumerate() {
                let p = self.world_to_screen(node.pos, rect);
                let r = (3.0 * self.zoom).clamp(2.0, 9.0);
                let alpha = (node.alpha.clamp(0.0, 1.0) * 255.0) as u8;

                let color = if self.last_new_ids.contains(&i) {
                    egui::Color32::from_rgba_unmultiplied(255, 80, 80, alpha)
                } else if node.state == 1 {
                    egui::Color32::from_rgba_unmultiplied(255, 220, 90, alpha)
                } else {
                    egui::Color32::from_rgba_unmultiplied(110, 130, 170, alpha)
                };

                painter.circle_filled(p, r, color);
            }

            // Auto-run: physics every frame, discrete ticks on a timer.
            if self.running {
                let damping = self.auto.cfg.damping;
                self.auto.physics(damping);

                let now = ctx.input(|i| i.time);
                if now - self.last_step_time >= self.step_interval {
                    self.step_once();
                    self.last_step_time = now;
                }

                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
