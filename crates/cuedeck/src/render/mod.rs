pub mod text;

use eframe::egui;

use crate::nav::view::overview::OverviewCard;
use crate::parser::{Block, Slide};
use crate::theme::Theme;

/// Paint one slide into `rect`. `reveal_step` dims reveal items past the
/// cursor; `active_step` highlights the most recently revealed one.
#[allow(clippy::too_many_arguments)]
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    reveal_step: usize,
    active_step: Option<usize>,
    opacity: f32,
    scale: f32,
) {
    let padding = 80.0 * scale;
    let max_width = rect.width() - padding * 2.0;
    let mut y = rect.top() + padding;
    // Reveal steps are numbered across all lists of the slide.
    let mut step_base = 0usize;

    for block in &slide.blocks {
        let pos = egui::pos2(rect.left() + padding, y);
        let height = match block {
            Block::Heading { level, inlines } => {
                text::draw_heading(ui, inlines, *level, theme, pos, max_width, opacity, scale)
                    + 24.0 * scale
            }
            Block::Paragraph { inlines } => {
                text::draw_paragraph(ui, inlines, theme, pos, max_width, opacity, scale)
                    + 16.0 * scale
            }
            Block::List { ordered, items } => {
                let local_reveal = reveal_step.saturating_sub(step_base);
                let local_active =
                    active_step.and_then(|s| s.checked_sub(step_base)).filter(|&s| s > 0);
                let h = text::draw_list(
                    ui,
                    items,
                    *ordered,
                    theme,
                    pos,
                    max_width,
                    opacity,
                    local_reveal,
                    local_active,
                    scale,
                );
                step_base += crate::parser::count_reveal_steps(std::slice::from_ref(block));
                h + 16.0 * scale
            }
            Block::CodeBlock { code, .. } => {
                text::draw_code_block(ui, code, theme, pos, max_width, opacity, scale) + 16.0 * scale
            }
        };
        y += height;
    }
}

pub fn grid_columns(count: usize) -> usize {
    if count <= 4 {
        2
    } else if count <= 9 {
        3
    } else {
        4
    }
}

/// Rect of one overview card in a grid laid out inside `rect`.
pub fn grid_cell_rect(count: usize, index: usize, rect: egui::Rect, scale: f32) -> egui::Rect {
    let cols = grid_columns(count);
    let rows = count.div_ceil(cols).max(1);

    let padding = 24.0 * scale;
    let gap = 12.0 * scale;

    let grid_top = rect.top() + padding + 40.0 * scale;
    let grid_width = rect.width() - padding * 2.0;
    let grid_height = rect.bottom() - grid_top - padding;

    let cell_width = (grid_width - gap * (cols as f32 - 1.0)) / cols as f32;
    let natural_height = cell_width * 9.0 / 16.0;
    let cell_height_max = (grid_height - gap * (rows as f32 - 1.0)) / rows as f32;
    let cell_height = cell_height_max.min(natural_height);

    let col = index % cols;
    let row = index / cols;
    let x = rect.left() + padding + col as f32 * (cell_width + gap);
    let y = grid_top + row as f32 * (cell_height + gap);

    egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(cell_width, cell_height))
}

/// Paint one overview card: clone content, ordinal badge, borders for the
/// current cursor position and the hovered cell.
pub fn render_card(
    ui: &mut egui::Ui,
    card: &OverviewCard,
    theme: &Theme,
    cell_rect: egui::Rect,
    current: bool,
    hovered: bool,
    scale: f32,
) {
    let cell_scale = (cell_rect.width() / 1920.0).min(cell_rect.height() / 1080.0);

    ui.painter()
        .rect_filled(cell_rect, 4.0 * scale, theme.background);

    let child_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(cell_rect)
            .id_salt(("overview_card", card.ordinal)),
    );
    let clone = Slide {
        directives: Vec::new(),
        blocks: card.blocks.clone(),
        media: None,
        raw_source: String::new(),
    };
    render_slide(&child_ui, &clone, theme, cell_rect, usize::MAX, None, 1.0, cell_scale);

    // Ordinal badge
    let badge_bg = Theme::with_opacity(theme.code_background, 0.7);
    let badge_color = Theme::with_opacity(theme.foreground, 0.9);
    let badge_galley = ui.painter().layout_no_wrap(
        format!(" {} ", card.ordinal),
        egui::FontId::monospace(12.0 * scale),
        badge_color,
    );
    let badge_rect = egui::Rect::from_min_size(
        cell_rect.min + egui::vec2(4.0 * scale, 4.0 * scale),
        badge_galley.rect.size() + egui::vec2(4.0 * scale, 2.0 * scale),
    );
    ui.painter().rect_filled(badge_rect, 3.0 * scale, badge_bg);
    ui.painter().galley(
        badge_rect.min + egui::vec2(2.0 * scale, 1.0 * scale),
        badge_galley,
        badge_color,
    );

    if hovered && !current {
        ui.painter().rect_stroke(
            cell_rect.expand(2.0 * scale),
            4.0 * scale,
            egui::Stroke::new(2.0 * scale, Theme::with_opacity(theme.accent, 0.5)),
            egui::StrokeKind::Outside,
        );
    }
    if current {
        ui.painter().rect_stroke(
            cell_rect,
            4.0 * scale,
            egui::Stroke::new(3.0 * scale, theme.accent),
            egui::StrokeKind::Outside,
        );
    }
}

/// Paint the progress bar along the bottom edge as a width percentage.
pub fn render_progress_bar(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    percent: f32,
    scale: f32,
) {
    let height = 4.0 * scale;
    let track = egui::Rect::from_min_max(
        egui::pos2(rect.left(), rect.bottom() - height),
        rect.right_bottom(),
    );
    ui.painter()
        .rect_filled(track, 0.0, Theme::with_opacity(theme.foreground, 0.1));
    let width = track.width() * (percent / 100.0).clamp(0.0, 1.0);
    let bar = egui::Rect::from_min_size(track.min, egui::vec2(width, height));
    ui.painter().rect_filled(bar, 0.0, theme.accent);
}
