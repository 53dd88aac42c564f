// app.rs - eframe shell: event batching, pacing, drawing

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use conway::{FrameStatus, GridController, GridModel, GridView, KeyboardInfo, MouseInfo};
use egui::Color32;
use tracing::info;

use crate::bridge::EventBridge;
use crate::config::Config;
use crate::console::Console;
use crate::pacing::FrameLimiter;
use crate::surface::PainterSurface;

const SCREEN_COLOR: Color32 = Color32::from_rgb(225, 225, 225);

pub struct SandboxApp {
    bridge: EventBridge,
    mouse_info: MouseInfo,
    keyboard_info: KeyboardInfo,
    limiter: FrameLimiter,
    controller: GridController,
    console: Console,
    title: String,
}

impl SandboxApp {
    pub fn new(config: &Config) -> Self {
        let model = GridModel::new(config.width as usize, config.height as usize, config.history_limit)
            .into_shared();
        let fps = Rc::new(Cell::new(config.fps));

        let view = GridView::default();
        let controller = GridController::new(Rc::clone(&model), view);
        let console = Console::new(model, Rc::clone(&fps), config.console_history);

        info!(
            width = config.width,
            height = config.height,
            fps = config.fps,
            history_limit = config.history_limit,
            "sandbox ready"
        );

        Self {
            bridge: EventBridge::default(),
            mouse_info: MouseInfo::default(),
            keyboard_info: KeyboardInfo::default(),
            limiter: FrameLimiter::new(fps),
            controller,
            console,
            title: String::new(),
        }
    }

    /// One logical frame: drain the batch, aggregate, then let either the
    /// grid or the console consume it.
    fn run_frame(&mut self, ctx: &egui::Context, now: Instant) {
        let events = self.bridge.drain();
        self.mouse_info.update(&events);
        self.keyboard_info.update(&events, now);

        if !self.console.is_active() {
            let status = self.controller.handle_event(&self.mouse_info, &self.keyboard_info);
            self.update_title(ctx, status);
        }

        self.console.handle_event(&self.keyboard_info, &events);
    }

    fn update_title(&mut self, ctx: &egui::Context, status: FrameStatus) {
        let title = status.to_string();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl eframe::App for SandboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(|i| i.events.clone());
        for event in &events {
            self.bridge.translate(event);
        }

        let now = Instant::now();
        if self.limiter.tick(now) {
            self.run_frame(ctx, now);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SCREEN_COLOR))
            .show(ctx, |ui| {
                let region = ui.max_rect();
                self.controller.view_mut().set_region(region);

                let painter = ui.painter();
                self.controller.draw(&mut PainterSurface::new(painter));
                self.console.draw(painter, region);
            });

        // Keep frames coming at the paced rate even without input.
        ctx.request_repaint_after(self.limiter.remaining(Instant::now()));
    }
}
