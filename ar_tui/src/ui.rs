//! UI rendering

mod breakdown_view;
mod calc_view;
mod help_view;

use crate::app::{App, Tab};
use ar_core::{DamageChannel, DamageVector};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    if let Some(ref message) = app.load_error {
        draw_load_error(f, message, chunks[1]);
    } else if app.show_help {
        help_view::draw(f, app, chunks[1]);
    } else {
        match app.current_tab {
            Tab::Calculator => calc_view::draw(f, app, chunks[1]),
            Tab::Breakdown => breakdown_view::draw(f, app, chunks[1]),
            Tab::Help => help_view::draw(f, app, chunks[1]),
        }
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("{} {}", i + 1, t.name())))
        .collect();

    let selected = Tab::all()
        .iter()
        .position(|t| *t == app.current_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Attack Rating "))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_load_error(f: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "Load error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
    ])
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title(" Dataset "));

    f.render_widget(paragraph, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("?", "Help"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Calculator => vec![
            ("↑/↓", "Field"),
            ("←/→", "Change"),
            ("PgUp/PgDn", "±10"),
            ("Space", "Two-hand"),
            ("r", "Reset"),
        ],
        Tab::Breakdown => vec![("Space", "Two-hand")],
        Tab::Help => vec![],
    };

    let mut spans = Vec::new();
    for (key, desc) in tab_keys.iter().chain(common_keys.iter()) {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(" {}  ", desc)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// `Phys 120 | Mag 0 | Fire 0 | Ligh 0 | Holy 0`
pub(crate) fn damage_line(damage: &DamageVector) -> String {
    DamageChannel::all()
        .iter()
        .map(|c| format!("{} {}", c.label(), damage[*c]))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub(crate) fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("── {} ──", title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}
