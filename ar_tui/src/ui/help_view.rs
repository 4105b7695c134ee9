//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        heading("═══ Navigation ═══"),
        key_line("1-3", "Jump to tab (AR/Scaling/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        heading("═══ Calculator ═══"),
        key_line("↑/k  ↓/j", "Select input field"),
        key_line("←/h  →/l", "Decrease / increase (cycles weapon and affinity)"),
        key_line("PgDn / PgUp", "Decrease / increase by 10"),
        key_line("Space", "Toggle two-handing"),
        key_line("r", "Reset stats, upgrade and affinity"),
        Line::from(""),
        heading("═══ Mechanics ═══"),
        Line::from(""),
        Line::from(Span::styled(
            "Two-handing:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Strength counts as floor(str × 1.5) for requirements and scaling"),
        Line::from(""),
        Line::from(Span::styled(
            "Requirements:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  A stat below its requirement scales at most half as well"),
        Line::from(""),
        Line::from(Span::styled(
            "Rounding:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Total is rounded from the unrounded scaling; at extreme"),
        Line::from("  magnitudes it can differ by 1 from base + displayed scaling"),
    ];

    if let Some(meta) = app.dataset.meta.as_ref() {
        lines.push(Line::from(""));
        lines.push(heading("═══ Dataset ═══"));
        if let Some(ref schema) = meta.schema {
            lines.push(Line::from(format!("  Schema: {}", schema)));
        }
        if let Some(ref generated_at) = meta.generated_at {
            lines.push(Line::from(format!("  Generated: {}", generated_at)));
        }
        if let Some(ref note) = meta.note {
            lines.push(Line::from(format!("  {}", note)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Green)),
        Span::raw(desc),
    ])
}
