//! Spline Reveal.
//!
//! Kontrollpunkte per Mausklick setzen, die Kurve wird Tick für Tick aufgedeckt.
//! egui + wgpu, Punkte per GPU-Instancing.

use eframe::egui;
use eframe::egui_wgpu;
use spline_reveal::shared::options::WINDOW_TITLE;
use spline_reveal::{render, ui, AppController, AppIntent, AppState, DemoOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Spline Reveal v{} startet...", env!("CARGO_PKG_VERSION"));

        let demo_options = DemoOptions::load_from_file(&DemoOptions::config_path()).validated();

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(demo_options.window_size)
                .with_title(WINDOW_TITLE),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(DemoApp::new(render_state, demo_options)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
}

impl DemoApp {
    fn new(render_state: &egui_wgpu::RenderState, options: DemoOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            renderer: std::sync::Arc::new(std::sync::Mutex::new(render::Renderer::new(
                render_state,
            ))),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
        self.schedule_repaint(ctx);
    }
}

impl DemoApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);

        let [r, g, b, a] = self.state.options.background_color;
        let background: egui::Color32 = egui::Rgba::from_rgba_unmultiplied(r, g, b, a).into();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(ui::collect_viewport_intents(ui, &response));

                let render_data = render::WgpuRenderData {
                    scene: self
                        .controller
                        .build_render_scene(&self.state, viewport_size),
                };

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        render_data,
                        device: self.device.clone(),
                        queue: self.queue.clone(),
                    },
                );

                ui.painter().add(callback);
            });

        // Zeitfortschritt immer zuletzt, damit Klicks desselben Frames schon mitlaufen
        events.push(AppIntent::FrameAdvanced {
            dt_seconds: ctx.input(|i| i.stable_dt),
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context) {
        if self.state.should_exit || self.state.interaction.is_busy() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_secs_f32(
                self.state.clock.interval_secs(),
            ));
        }
    }
}
