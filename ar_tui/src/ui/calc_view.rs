//! Calculator tab - inputs, weapon details and the AR result

use super::{damage_line, section_header};
use crate::app::{App, Field};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(area);

    draw_weapon_list(f, app, chunks[0]);
    draw_inputs(f, app, chunks[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(chunks[2]);

    draw_details(f, app, right[0]);
    draw_result(f, app, right[1]);
}

fn draw_weapon_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .dataset
        .weapons
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let style = if i == app.selected_weapon {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{} ({})", w.name, w.weapon_class),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Weapons "));
    f.render_widget(list, area);
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Field::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let value = match field {
                Field::Weapon => app.weapon().map(|w| w.name.clone()).unwrap_or_default(),
                Field::Stat(key) => app.stats.get(*key).to_string(),
                Field::TwoHand => (if app.two_handed { "yes" } else { "no" }).to_string(),
                Field::Upgrade => format!("+{} / +{}", app.upgrade_level, app.max_upgrade()),
                Field::Affinity => app.affinity().to_string(),
            };

            let focused = i == app.focus;
            let marker = if focused { "▶ " } else { "  " };
            let style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(format!("{}{:<13}", marker, field.label()), style),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Inputs "));
    f.render_widget(paragraph, area);
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let Some(weapon) = app.weapon() else {
        let empty = Paragraph::new("No weapons in dataset")
            .block(Block::default().borders(Borders::ALL).title(" Details "));
        f.render_widget(empty, area);
        return;
    };

    let met = app.result.as_ref().map(|r| r.requirements_met).unwrap_or(false);
    let status = if met {
        Span::styled("Requirements met", Style::default().fg(Color::Green))
    } else {
        let unmet = app
            .result
            .as_ref()
            .map(|r| r.unmet.iter().map(|k| k.label()).collect::<Vec<_>>().join(", "))
            .unwrap_or_default();
        Span::styled(
            format!("Requirements NOT met ({})", unmet),
            Style::default().fg(Color::Red),
        )
    };

    let lines = vec![
        Line::from(Span::styled(
            weapon.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} • {} • Weight {}", weapon.weapon_class, weapon.upgrade_path, weapon.weight),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(weapon.requirement_line()),
        Line::from(weapon.grade_line()),
        Line::from(status),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    f.render_widget(paragraph, area);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    if let Some(ref result) = app.result {
        lines.push(Line::from(format!(
            "Upgrade: +{} (path: {}) • Affinity: {}{}",
            result.upgrade_level,
            result.upgrade_path,
            result.affinity,
            if result.two_handed { " • Two-handed" } else { "" },
        )));
        lines.push(Line::from(""));

        lines.push(section_header("Base (reinforce + affinity)"));
        lines.push(Line::from(damage_line(&result.base)));
        lines.push(Line::from(""));

        lines.push(section_header("Scaling (curves + affinity + upgrade)"));
        if app.dataset.has_scaling_curves() {
            lines.push(Line::from(damage_line(&result.scaling)));
        } else {
            lines.push(Line::from(Span::styled(
                "No scaling curves in dataset",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));

        lines.push(section_header("Total AR"));
        lines.push(Line::from(damage_line(&result.total)));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Sum: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{}", result.total_sum()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from("Select a weapon"));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Attack Rating "));
    f.render_widget(paragraph, area);
}
