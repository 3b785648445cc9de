//! Visualizer widgets: bar chart, legend, statistics row, and code listing.

use eframe::egui;
use shared::domain::{AlgorithmKind, Element, Stats, VisualState};

use crate::ui::theme;

const MIN_LABEL_WIDTH: f32 = 18.0;

pub fn bar_chart(ui: &mut egui::Ui, bars: &[Element], height: f32) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    if bars.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No data",
            egui::FontId::proportional(14.0),
            theme::MUTED_TEXT,
        );
        return;
    }

    let (low, high) = value_span(bars);
    let span = span_height(low, high);
    let label_room = 16.0;
    let plot_height = rect.height() - label_room;
    let baseline = rect.top() + label_room + plot_height * (high as f32 / span);

    let slot = rect.width() / bars.len() as f32;
    let gap = (slot * 0.15).min(4.0);

    for (index, bar) in bars.iter().enumerate() {
        let left = rect.left() + slot * index as f32 + gap * 0.5;
        let top = baseline - plot_height * (bar.value as f32 / span);
        let (y0, y1) = if top < baseline {
            (top, baseline)
        } else {
            (baseline, top)
        };
        // zero-valued bars still get a sliver
        let bar_rect = egui::Rect::from_min_max(
            egui::pos2(left, y0.min(y1 - 2.0)),
            egui::pos2(left + slot - gap, y1),
        );
        painter.rect_filled(bar_rect, egui::CornerRadius::same(2), theme::bar_color(bar.state));

        if slot >= MIN_LABEL_WIDTH {
            painter.text(
                egui::pos2(bar_rect.center().x, bar_rect.top() - 2.0),
                egui::Align2::CENTER_BOTTOM,
                bar.value.to_string(),
                egui::FontId::proportional(11.0),
                theme::MUTED_TEXT,
            );
        }
    }
}

/// Value range the chart must cover; always includes zero.
fn value_span(bars: &[Element]) -> (i64, i64) {
    bars.iter().fold((0, 0), |(low, high), bar| {
        (low.min(bar.value), high.max(bar.value))
    })
}

/// Height of the value range in value units, never below one.
fn span_height(low: i64, high: i64) -> f32 {
    (i128::from(high) - i128::from(low)).max(1) as f32
}

pub fn legend_states(kind: AlgorithmKind) -> &'static [VisualState] {
    match kind {
        AlgorithmKind::BubbleSort => &[
            VisualState::Default,
            VisualState::Comparing,
            VisualState::Swapping,
            VisualState::Sorted,
        ],
        AlgorithmKind::SelectionSort => &[
            VisualState::Default,
            VisualState::Comparing,
            VisualState::HighlightedMin,
            VisualState::Swapping,
            VisualState::Sorted,
        ],
        AlgorithmKind::InsertionSort => &[
            VisualState::Default,
            VisualState::HighlightedCurrent,
            VisualState::Comparing,
            VisualState::Overwriting,
            VisualState::Sorted,
        ],
        AlgorithmKind::MergeSort => &[
            VisualState::Default,
            VisualState::Overwriting,
            VisualState::Sorted,
        ],
        AlgorithmKind::QuickSort => &[
            VisualState::Default,
            VisualState::Pivot,
            VisualState::Comparing,
            VisualState::Swapping,
            VisualState::Sorted,
        ],
        AlgorithmKind::BinarySearch => &[
            VisualState::Default,
            VisualState::Comparing,
            VisualState::Discarded,
            VisualState::Found,
        ],
    }
}

pub fn legend(ui: &mut egui::Ui, kind: AlgorithmKind) {
    ui.horizontal_wrapped(|ui| {
        for state in legend_states(kind) {
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(swatch, egui::CornerRadius::same(2), theme::bar_color(*state));
            ui.label(egui::RichText::new(theme::state_label(*state)).size(12.0));
            ui.add_space(8.0);
        }
    });
}

pub fn stats_row(ui: &mut egui::Ui, kind: AlgorithmKind, stats: &Stats) {
    ui.horizontal(|ui| {
        for column in kind.stat_columns() {
            ui.label(
                egui::RichText::new(format!("{}: {}", column.label(), stats.get(*column))).strong(),
            );
            ui.add_space(12.0);
        }
    });
}

pub fn code_listing(ui: &mut egui::Ui, lines: &[&str], highlight_line: Option<usize>) {
    egui::Frame::new()
        .fill(theme::CODE_BACKGROUND)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            for (index, line) in lines.iter().enumerate() {
                let number = index + 1;
                let mut text = egui::RichText::new(format!("{number:>2}  {line}"))
                    .monospace()
                    .color(theme::CODE_TEXT);
                if highlight_line == Some(number) {
                    text = text.background_color(theme::CODE_HIGHLIGHT);
                }
                ui.add(egui::Label::new(text).extend());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_span_includes_zero() {
        let bars = [Element::new(5), Element::new(12)];
        assert_eq!(value_span(&bars), (0, 12));
        let mixed = [Element::new(-4), Element::new(3)];
        assert_eq!(value_span(&mixed), (-4, 3));
    }

    #[test]
    fn span_height_survives_extreme_ranges() {
        assert_eq!(span_height(0, 0), 1.0);
        assert_eq!(span_height(-4, 3), 7.0);
        let full = span_height(i64::MIN, i64::MAX);
        assert!(full.is_finite() && full > 1.8e19);
    }

    #[test]
    fn legend_covers_every_state_an_algorithm_uses_at_rest() {
        for kind in AlgorithmKind::ALL {
            assert!(legend_states(kind).contains(&VisualState::Default));
        }
        assert!(legend_states(AlgorithmKind::BinarySearch).contains(&VisualState::Found));
        assert!(legend_states(AlgorithmKind::QuickSort).contains(&VisualState::Pivot));
    }
}
