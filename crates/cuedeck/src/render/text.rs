use crate::parser::{Inline, ListItem, ListMarker};
use crate::theme::Theme;
use eframe::egui::{self, Color32, FontFamily, FontId, Pos2};

/// Create a LayoutJob from inline elements.
pub fn inlines_to_job(
    inlines: &[Inline],
    font_size: f32,
    color: Color32,
    accent: Color32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    append_inlines(&mut job, inlines, font_size, color, accent, false, false);
    job
}

#[allow(clippy::too_many_arguments)]
fn append_inlines(
    job: &mut egui::text::LayoutJob,
    inlines: &[Inline],
    font_size: f32,
    color: Color32,
    accent: Color32,
    bold: bool,
    italic: bool,
) {
    for inline in inlines {
        match inline {
            Inline::Text(s) => {
                let size = if bold { font_size + 1.0 } else { font_size };
                let format = egui::text::TextFormat {
                    font_id: FontId::new(size, FontFamily::Proportional),
                    color,
                    italics: italic,
                    ..Default::default()
                };
                job.append(s, 0.0, format);
            }
            Inline::Bold(children) => {
                append_inlines(job, children, font_size, color, accent, true, italic);
            }
            Inline::Italic(children) => {
                append_inlines(job, children, font_size, color, accent, bold, true);
            }
            Inline::Code(s) => {
                let format = egui::text::TextFormat {
                    font_id: FontId::new(font_size * 0.85, FontFamily::Monospace),
                    color,
                    background: Color32::from_rgba_unmultiplied(128, 128, 128, 30),
                    ..Default::default()
                };
                job.append(s, 0.0, format);
            }
            Inline::Link { text, .. } => {
                // Render link text in accent color
                append_inlines(job, text, font_size, accent, accent, bold, italic);
            }
        }
    }
}

/// Layout and paint inlines, returning the height used.
pub fn draw_inlines(
    ui: &egui::Ui,
    inlines: &[Inline],
    pos: Pos2,
    font_size: f32,
    color: Color32,
    accent: Color32,
    max_width: f32,
) -> f32 {
    let job = inlines_to_job(inlines, font_size, color, accent, max_width);
    let galley = ui.painter().layout_job(job);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Draw a heading block. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_heading(
    ui: &egui::Ui,
    inlines: &[Inline],
    level: u8,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let size = Theme::heading_size(level) * scale;
    let color = Theme::with_opacity(theme.heading_color, opacity);
    let accent = Theme::with_opacity(theme.accent, opacity);
    draw_inlines(ui, inlines, pos, size, color, accent, max_width)
}

/// Draw a paragraph. Returns height used.
pub fn draw_paragraph(
    ui: &egui::Ui,
    inlines: &[Inline],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let color = Theme::with_opacity(theme.foreground, opacity);
    let accent = Theme::with_opacity(theme.accent, opacity);
    draw_inlines(
        ui,
        inlines,
        pos,
        Theme::BODY_SIZE * scale,
        color,
        accent,
        max_width,
    )
}

/// Draw a list with reveal support. Reveal items past `reveal_step` are
/// dimmed; the item at `active_step` is highlighted. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_list(
    ui: &egui::Ui,
    items: &[ListItem],
    ordered: bool,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    reveal_step: usize,
    active_step: Option<usize>,
    scale: f32,
) -> f32 {
    let mut step_counter = 0usize;
    draw_list_inner(
        ui,
        items,
        ordered,
        theme,
        pos,
        max_width,
        opacity,
        0,
        reveal_step,
        active_step,
        &mut step_counter,
        scale,
    )
}

#[allow(clippy::too_many_arguments)]
fn draw_list_inner(
    ui: &egui::Ui,
    items: &[ListItem],
    ordered: bool,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    indent_level: usize,
    reveal_step: usize,
    active_step: Option<usize>,
    step_counter: &mut usize,
    scale: f32,
) -> f32 {
    let indent = 30.0 * scale * indent_level as f32;
    let marker_width = 45.0 * scale;
    let item_spacing = 8.0 * scale;
    let font_size = Theme::BODY_SIZE * scale;
    let mut y_offset = 0.0;

    for (idx, item) in items.iter().enumerate() {
        let item_step = match item.marker {
            ListMarker::Static | ListMarker::Ordered => 0,
            ListMarker::Reveal => {
                *step_counter += 1;
                *step_counter
            }
        };

        // Items past the reveal step are dimmed, not removed, so the
        // slide keeps its layout as steps advance
        let revealed = item_step <= reveal_step;
        let item_opacity = if revealed { opacity } else { opacity * 0.15 };

        let active = revealed && item_step > 0 && active_step == Some(item_step);
        let color = if active {
            Theme::with_opacity(theme.accent, item_opacity)
        } else {
            Theme::with_opacity(theme.foreground, item_opacity)
        };
        let accent = Theme::with_opacity(theme.accent, item_opacity);

        let marker_text = if ordered || item.marker == ListMarker::Ordered {
            format!("{}.", idx + 1)
        } else {
            "\u{2022}".to_string()
        };

        let marker_pos = Pos2::new(pos.x + indent, pos.y + y_offset);
        let marker_galley =
            ui.painter()
                .layout_no_wrap(marker_text, FontId::proportional(font_size), color);
        ui.painter().galley(marker_pos, marker_galley, color);

        let text_pos = Pos2::new(pos.x + indent + marker_width, pos.y + y_offset);
        let text_width = max_width - indent - marker_width;
        let text_height = draw_inlines(
            ui,
            &item.inlines,
            text_pos,
            font_size,
            color,
            accent,
            text_width,
        );

        y_offset += text_height + item_spacing;

        if !item.children.is_empty() {
            let children_ordered = item
                .children
                .first()
                .is_some_and(|c| c.marker == ListMarker::Ordered);
            let child_height = draw_list_inner(
                ui,
                &item.children,
                children_ordered,
                theme,
                Pos2::new(pos.x, pos.y + y_offset),
                max_width,
                item_opacity,
                indent_level + 1,
                reveal_step,
                active_step,
                step_counter,
                scale,
            );
            y_offset += child_height;
        }
    }

    y_offset
}

/// Draw a fenced code block as verbatim monospace text on a filled
/// background. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_code_block(
    ui: &egui::Ui,
    code: &str,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let padding = 20.0 * scale;
    let font = FontId::monospace(Theme::CODE_SIZE * scale);
    let color = Theme::with_opacity(theme.code_foreground, opacity);
    let bg = Theme::with_opacity(theme.code_background, opacity);

    let galley = ui
        .painter()
        .layout(code.to_string(), font, color, max_width - padding * 2.0);
    let block_rect = egui::Rect::from_min_size(
        pos,
        egui::vec2(max_width, galley.rect.height() + padding * 2.0),
    );
    ui.painter().rect_filled(block_rect, 6.0 * scale, bg);
    ui.painter()
        .galley(pos + egui::vec2(padding, padding), galley, color);

    block_rect.height()
}
