//! Static pages. Each returns the route to navigate to when a link is clicked.

use eframe::egui;
use shared::domain::AlgorithmKind;

use crate::ui::{routes::Route, theme};

pub const BRAND: &str = "ThinkPixel";
pub const TAGLINE: &str = "See it. Solve it. Master it.";
pub const SUPPORT_EMAIL: &str = "support@thinkpixel.dev";
pub const FOOTER_TEXT: &str = "© 2025 ThinkPixel";

const ABOUT: &[&str] = &[
    "ThinkPixel is a modern, interactive platform designed to help developers and learners \
     visualize algorithms, understand complex coding concepts through animations, and prepare \
     for technical interviews. Our goal is to make computer science concepts more intuitive, \
     accessible, and engaging through dynamic simulations.",
    "Future expansions will include visualizing data structures, graph algorithms, dynamic \
     programming, and providing real-world coding challenges in a highly interactive environment.",
];

const TERMS: &[&str] = &[
    "By using ThinkPixel, you agree to the following basic terms:",
    "- This platform is for educational purposes only.",
    "- Content and algorithms are subject to improvements and updates.",
    "Full legal terms will be published soon as part of the public release.",
];

fn back_home(ui: &mut egui::Ui) -> Option<Route> {
    ui.add_space(16.0);
    ui.link("← Back to Home").clicked().then_some(Route::Home)
}

fn page_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new(title).size(28.0).strong().color(theme::ACCENT));
    ui.add_space(12.0);
}

pub fn home(ui: &mut egui::Ui) -> Option<Route> {
    let mut next = None;
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(egui::RichText::new(BRAND).size(44.0).strong().color(theme::ACCENT));
        ui.label(egui::RichText::new(TAGLINE).size(18.0).color(theme::MUTED_TEXT));
        ui.add_space(32.0);
        ui.label(egui::RichText::new("Explore Algorithms").size(22.0).strong());
        ui.add_space(12.0);
    });

    egui::Grid::new("algorithm_grid")
        .num_columns(3)
        .spacing([16.0, 16.0])
        .show(ui, |ui| {
            for (index, kind) in AlgorithmKind::ALL.into_iter().enumerate() {
                if algorithm_card(ui, kind) {
                    next = Some(Route::visualizer(kind));
                }
                if index % 3 == 2 {
                    ui.end_row();
                }
            }
        });
    next
}

fn algorithm_card(ui: &mut egui::Ui, kind: AlgorithmKind) -> bool {
    let response = egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(240.0);
            ui.label(egui::RichText::new(kind.label()).size(18.0).strong().color(theme::ACCENT));
            ui.label(egui::RichText::new(kind.description()).color(theme::MUTED_TEXT));
        })
        .response;
    ui.interact(response.rect, response.id.with(kind.slug()), egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

pub fn about(ui: &mut egui::Ui) -> Option<Route> {
    page_title(ui, "About ThinkPixel");
    for paragraph in ABOUT {
        ui.label(*paragraph);
        ui.add_space(8.0);
    }
    back_home(ui)
}

pub fn contact(ui: &mut egui::Ui) -> Option<Route> {
    page_title(ui, "Contact Us");
    ui.label("We'd love to hear from you!");
    ui.label("For feedback, inquiries, or support, please contact our team at:");
    ui.hyperlink_to(SUPPORT_EMAIL, format!("mailto:{SUPPORT_EMAIL}"));
    back_home(ui)
}

pub fn terms(ui: &mut egui::Ui) -> Option<Route> {
    page_title(ui, "Terms of Service");
    for line in TERMS {
        ui.label(*line);
    }
    back_home(ui)
}

pub fn not_found(ui: &mut egui::Ui, path: &str) -> Option<Route> {
    page_title(ui, "Page not found");
    ui.label(format!("Nothing lives at {path}."));
    back_home(ui)
}

pub fn algorithm_not_found(ui: &mut egui::Ui) -> Option<Route> {
    page_title(ui, "Algorithm not found");
    back_home(ui)
}
