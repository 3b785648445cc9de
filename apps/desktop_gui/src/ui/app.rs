use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{AlgorithmKind, RunPhase, SessionId, VisualState, MAX_SPEED_MS, MIN_SPEED_MS},
    protocol::{DriverCommand, RunOutcome},
};
use step_driver::{listing, ArrayGenerator};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::PageState;
use crate::ui::{pages, routes::Route, theme, widgets};

const CHART_HEIGHT: f32 = 320.0;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub route: Route,
    pub speed_ms: u64,
}

/// What a click on the visualizer page asks for.
enum PageAction {
    Driver(DriverCommand),
    NewArray,
}

pub struct VisualizerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    route: Route,
    page: Option<PageState>,
    generator: ArrayGenerator,
    next_session: SessionId,
    speed_ms: u64,

    status: String,
    banner: Option<UiError>,
}

impl VisualizerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        generator: ArrayGenerator,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            route: Route::Home,
            page: None,
            generator,
            next_session: SessionId(1),
            speed_ms: startup.speed_ms,
            status: "Starting visualizer worker".to_string(),
            banner: None,
        };
        app.navigate(startup.route);
        app
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route && (self.page.is_some() || route.algorithm().is_none()) {
            return;
        }
        if let Some(page) = self.page.take() {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::Close {
                    session: page.session(),
                },
                &mut self.status,
            );
        }
        tracing::info!(path = %route.path(), "navigate");
        self.banner = None;
        if let Some(algorithm) = route.algorithm() {
            self.open_page(algorithm);
        }
        self.route = route;
    }

    fn open_page(&mut self, algorithm: AlgorithmKind) {
        let session = self.next_session;
        self.next_session = session.next();
        let values = self.generator.next_values();
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Open {
                session,
                algorithm,
                values,
                speed_ms: self.speed_ms,
            },
            &mut self.status,
        );
        self.page = Some(PageState::new(session, algorithm));
    }

    fn send_control(&mut self, command: DriverCommand) {
        let Some(session) = self.page.as_ref().map(PageState::session) else {
            return;
        };
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Control { session, command },
            &mut self.status,
        );
    }

    fn handle_action(&mut self, action: PageAction) {
        match action {
            PageAction::Driver(command) => self.send_control(command),
            PageAction::NewArray => {
                let values = self.generator.next_values();
                if let Some(page) = self.page.as_mut() {
                    page.prepare_reset();
                }
                self.send_control(DriverCommand::Reset { values });
            }
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    tracing::warn!(
                        category = ?err.category(),
                        context = ?err.context(),
                        "{}",
                        err.message()
                    );
                    self.status = err.message().to_string();
                    self.banner = Some(err);
                }
                UiEvent::Driver { session, event } => {
                    if let Some(page) = self.page.as_mut() {
                        page.apply(session, event);
                    }
                }
            }
        }
    }

    fn show_nav_bar(&self, ctx: &egui::Context) -> Option<Route> {
        let mut next = None;
        egui::TopBottomPanel::top("nav_bar")
            .resizable(false)
            .exact_height(44.0)
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = egui::RichText::new(pages::BRAND)
                        .size(22.0)
                        .strong()
                        .color(theme::ACCENT);
                    if ui.add(egui::Label::new(brand).sense(egui::Sense::click())).clicked() {
                        next = Some(Route::Home);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.link("Interview Prep").clicked() {
                            next = Some(Route::parse("/interview-prep"));
                        }
                        if ui.link("About").clicked() {
                            next = Some(Route::About);
                        }
                        if ui.link("Home").clicked() {
                            next = Some(Route::Home);
                        }
                    });
                });
            });
        next
    }

    fn show_footer(&self, ctx: &egui::Context) -> Option<Route> {
        let mut next = None;
        egui::TopBottomPanel::bottom("footer")
            .resizable(false)
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(egui::RichText::new(pages::FOOTER_TEXT).color(theme::MUTED_TEXT));
                    ui.separator();
                    ui.label(egui::RichText::new(&self.status).small().color(theme::MUTED_TEXT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for (label, route) in [
                            ("Terms", Route::Terms),
                            ("Contact", Route::Contact),
                            ("About", Route::About),
                        ] {
                            if ui.link(label).clicked() {
                                next = Some(route);
                            }
                        }
                    });
                });
            });
        next
    }

    fn show_visualizer(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        let Some(page) = self.page.as_mut() else {
            return pages::algorithm_not_found(ui);
        };

        let mut actions = Vec::new();
        let algorithm = page.algorithm();

        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(page.heading())
                    .size(28.0)
                    .strong()
                    .color(theme::ACCENT),
            );
        });
        ui.add_space(12.0);

        if let Some(err) = page.error() {
            ui.label(egui::RichText::new(err.message()).color(theme::ERROR_TEXT));
        }
        if let Some(err) = self.banner.as_ref() {
            ui.label(egui::RichText::new(err.message()).color(theme::ERROR_TEXT));
        }

        if algorithm.is_search() {
            search_bar(ui, page, &mut actions);
        }

        ui.columns(2, |columns| {
            let bars = page
                .snapshot()
                .map(|snapshot| snapshot.bars.as_slice())
                .unwrap_or_default();
            widgets::bar_chart(&mut columns[0], bars, CHART_HEIGHT);
            widgets::legend(&mut columns[0], algorithm);

            let highlight = page.snapshot().and_then(|snapshot| snapshot.highlight_line);
            widgets::code_listing(&mut columns[1], listing::lines(algorithm), highlight);
        });

        ui.add_space(12.0);
        control_row(ui, page, &mut self.speed_ms, &mut actions);

        if let Some(RunOutcome::Sorted { .. }) = page.outcome() {
            ui.label(egui::RichText::new("Sorted").strong().color(theme::bar_color(VisualState::Sorted)));
        }
        if let Some(snapshot) = page.snapshot() {
            ui.add_space(8.0);
            widgets::stats_row(ui, algorithm, &snapshot.stats);
            ui.label(
                egui::RichText::new(format!("{} · {} steps", snapshot.phase.label(), snapshot.units))
                    .color(theme::MUTED_TEXT),
            );
        }

        for action in actions {
            self.handle_action(action);
        }
        None
    }

    fn repaint_interval(&self) -> std::time::Duration {
        let animating = self
            .page
            .as_ref()
            .is_some_and(|page| page.phase() == RunPhase::Running);
        if animating {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(100)
        }
    }
}

fn search_bar(ui: &mut egui::Ui, page: &mut PageState, actions: &mut Vec<PageAction>) {
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut page.target_input)
                .hint_text("Enter target")
                .desired_width(140.0),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let running = page.flags().is_running;
        if ui
            .add_enabled(!running, egui::Button::new("Start Search"))
            .clicked()
            || (submitted && !running)
        {
            if let Ok(commands) = page.submit_target() {
                actions.extend(commands.into_iter().map(PageAction::Driver));
            }
        }
    });
    if let Some(message) = page.search_message() {
        ui.label(egui::RichText::new(message).strong());
    }
    ui.add_space(8.0);
}

fn control_row(
    ui: &mut egui::Ui,
    page: &PageState,
    speed_ms: &mut u64,
    actions: &mut Vec<PageAction>,
) {
    let controls = page.controls();
    ui.horizontal(|ui| {
        if ui.add_enabled(controls.play, egui::Button::new("Play")).clicked() {
            actions.push(PageAction::Driver(DriverCommand::Start));
        }
        if ui
            .add_enabled(controls.pause, egui::Button::new(controls.pause_label))
            .clicked()
        {
            actions.push(PageAction::Driver(DriverCommand::PauseOrResume));
        }
        if ui
            .add_enabled(controls.step_mode, egui::Button::new("Step Mode"))
            .clicked()
        {
            actions.push(PageAction::Driver(DriverCommand::EnterStepMode));
        }
        if ui.add_enabled(controls.step, egui::Button::new("Step")).clicked() {
            actions.push(PageAction::Driver(DriverCommand::Step));
        }
        if ui.button("Reset").clicked() {
            actions.push(PageAction::NewArray);
        }

        ui.add_space(16.0);
        let slider = ui.add(
            egui::Slider::new(speed_ms, MIN_SPEED_MS..=MAX_SPEED_MS)
                .text("Speed (ms)")
                .step_by(10.0),
        );
        if slider.changed() {
            actions.push(PageAction::Driver(DriverCommand::SetSpeed {
                speed_ms: *speed_ms,
            }));
        }
    });
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut next = self.show_nav_bar(ctx);
        next = self.show_footer(ctx).or(next);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let clicked = match self.route.clone() {
                    Route::Home => pages::home(ui),
                    Route::Visualizer(_) => self.show_visualizer(ui),
                    Route::About => pages::about(ui),
                    Route::Contact => pages::contact(ui),
                    Route::Terms => pages::terms(ui),
                    Route::NotFound(path) => pages::not_found(ui, &path),
                };
                if clicked.is_some() {
                    next = clicked;
                }
            });
        });

        if let Some(route) = next {
            self.navigate(route);
        }

        ctx.request_repaint_after(self.repaint_interval());
    }
}
