//! Scaling breakdown tab - shows how each stat feeds into the AR

use super::section_header;
use crate::app::App;
use ar_core::scaling::StatContribution;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_contributions(f, app, chunks[0]);
    draw_formulas(f, chunks[1]);
}

fn draw_contributions(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![section_header("Per-stat scaling")];

    match app.result {
        Some(ref result) if !result.contributions.is_empty() => {
            lines.push(Line::from(Span::styled(
                format!(
                    "{:<4} {:>5} {:>5} {:>7} {:>7} {:>7} {:>7}",
                    "Stat", "Grade", "Value", "Curve", "Mult", "Penalty", "Scale"
                ),
                Style::default().fg(Color::DarkGray),
            )));
            for contribution in &result.contributions {
                lines.push(contribution_line(contribution));
            }
        }
        Some(_) => lines.push(Line::from("No stat scales this weapon")),
        None => lines.push(Line::from("Select a weapon")),
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Scaling "));
    f.render_widget(paragraph, area);
}

fn contribution_line(c: &StatContribution) -> Line<'static> {
    let penalty_style = if c.penalty < 1.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    Line::from(vec![
        Span::raw(format!(
            "{:<4} {:>5} {:>5} {:>7.3} {:>7.3} ",
            c.stat.label(),
            c.grade.letter(),
            c.effective_stat,
            c.curve_mult,
            c.combined_mult,
        )),
        Span::styled(format!("{:>7.3}", c.penalty), penalty_style),
        Span::styled(
            format!(" {:>7.3}", c.stat_scale),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
}

fn draw_formulas(f: &mut Frame, area: Rect) {
    let lines = vec![
        section_header("Formulas"),
        Line::from("Base = round(base₀ × reinforce × affinity)"),
        Line::from(""),
        Line::from("Scale = grade × curve(stat)"),
        Line::from("        × affinity × reinforce × penalty"),
        Line::from(""),
        Line::from("Scaling = Σ base × Scale"),
        Line::from("Total = round(base + unrounded scaling)"),
        Line::from(""),
        section_header("Grades"),
        Line::from("S 1.1  A 1.0  B 0.9  C 0.75  D 0.55  E 0.4"),
        Line::from(""),
        section_header("Penalty"),
        Line::from("Requirement met: 1.0"),
        Line::from("Otherwise: stat / requirement × 0.5"),
        Line::from("Two-handed strength: floor(str × 1.5)"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" How it works "));
    f.render_widget(paragraph, area);
}
