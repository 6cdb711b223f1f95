//! TUI views and rendering

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::state::AppState;
use crate::wizard::{AssessmentPlan, GenerationOutcome, WizardPhase};

/// Palette used across the wizard views
mod colors {
    use ratatui::style::Color;

    pub const ACCENT: Color = Color::Cyan;
    pub const DONE: Color = Color::Green;
    pub const PENDING: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Red;
    pub const HINT: Color = Color::DarkGray;
}

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step indicator
            Constraint::Min(0),    // Step body
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    if state.controller.is_in_flight() {
        render_spinner(state, frame, chunks[1]);
    } else if let GenerationOutcome::Failed(message) = state.controller.outcome() {
        render_error(message, frame, chunks[1]);
    } else {
        match state.controller.phase() {
            WizardPhase::CollectingField => render_field(state, frame, chunks[1]),
            WizardPhase::CollectingLevel => render_level(state, frame, chunks[1]),
            WizardPhase::CollectingOutcomes => render_outcomes(state, frame, chunks[1]),
            WizardPhase::PresentingOptions => render_options(state, frame, chunks[1]),
            WizardPhase::PresentingPlan => render_plan(state, frame, chunks[1]),
        }
    }

    render_footer(state, frame, chunks[2]);
}

/// Render the step indicator across the top
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let current = state.controller.phase();
    let mut spans = vec![Span::styled(
        "AssessCraft ",
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
    )];

    for phase in WizardPhase::ALL {
        spans.push(Span::raw("│ "));
        let label = format!("{} {} ", phase.step_number(), phase.display_name());
        let style = if phase == current {
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
        } else if phase < current {
            Style::default().fg(colors::DONE)
        } else {
            Style::default().fg(colors::PENDING)
        };
        if phase < current {
            spans.push(Span::styled("✓ ", Style::default().fg(colors::DONE)));
        }
        spans.push(Span::styled(label, style));
    }

    let header =
        Paragraph::new(vec![Line::from(spans)]).block(Block::default().borders(Borders::ALL).title(" Steps "));
    frame.render_widget(header, area);
}

/// Step 1: field of study input
fn render_field(state: &AppState, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("What field of study is this assessment for?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(colors::ACCENT)),
            Span::raw(state.field_input.as_str()),
            Span::styled("█", Style::default().fg(colors::ACCENT)),
        ]),
    ];

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Field of Study "));
    frame.render_widget(body, area);
}

/// Step 2: level picker
fn render_level(state: &AppState, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = state
        .levels
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let line = Line::from(vec![
                Span::styled(
                    if i == state.level_index { "> " } else { "  " },
                    Style::default().fg(colors::ACCENT),
                ),
                Span::raw(level.as_str()),
            ]);
            if i == state.level_index {
                ListItem::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White))
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Student Level "));
    frame.render_widget(list, area);
}

/// Step 3: outcome slot inputs
fn render_outcomes(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from("Enter the course learning outcomes (blank slots are fine):"),
        Line::from(""),
    ];

    for (i, outcome) in state.outcome_inputs.iter().enumerate() {
        let focused = i == state.outcome_focus;
        let marker = if focused {
            Span::styled("> ", Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD))
        } else {
            Span::styled("  ", Style::default())
        };
        let mut spans = vec![
            marker,
            Span::styled(format!("CLO {}: ", i + 1), Style::default().fg(colors::HINT)),
            Span::raw(outcome.as_str()),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(colors::ACCENT)));
        }
        lines.push(Line::from(spans));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Learning Outcomes "));
    frame.render_widget(body, area);
}

/// Step 4: suggested assessment types
fn render_options(state: &AppState, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = state
        .controller
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(colors::HINT)),
                Span::raw(option.as_str()),
            ]);
            if i == state.option_index {
                ListItem::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White))
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Suggested Assessments "));
    frame.render_widget(list, area);
}

/// Step 5: the generated plan
fn render_plan(state: &AppState, frame: &mut Frame, area: Rect) {
    let lines = match state.controller.plan() {
        Some(plan) => plan_lines(plan),
        None => vec![Line::from("No plan generated yet.")],
    };

    let title = format!(" Assessment Plan: {} ", state.controller.chosen().unwrap_or("?"));
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.plan_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(body, area);
}

/// Flatten a plan into display lines
fn plan_lines(plan: &AssessmentPlan) -> Vec<Line<'_>> {
    match plan {
        AssessmentPlan::Text { details, .. } => details.lines().map(Line::from).collect(),
        AssessmentPlan::Structured(plan) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    plan.title.as_str(),
                    Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(plan.description.as_str()),
                Line::from(""),
                Line::from(Span::styled("Design steps:", Style::default().add_modifier(Modifier::BOLD))),
            ];
            for (i, step) in plan.design_steps.iter().enumerate() {
                lines.push(Line::from(format!("  {}. {}", i + 1, step)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Tips:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for tip in &plan.tips {
                lines.push(Line::from(format!("  - {}", tip)));
            }
            if !plan.suggested_ai_tools.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Suggested AI tools:",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for tool in &plan.suggested_ai_tools {
                    lines.push(Line::from(format!("  - {}: {}", tool.tool_name, tool.description)));
                }
            }
            lines
        }
    }
}

/// Render the in-flight spinner panel
fn render_spinner(state: &AppState, frame: &mut Frame, area: Rect) {
    let message = match state.controller.phase() {
        WizardPhase::CollectingOutcomes => "Generating assessment ideas...",
        _ => "Crafting your detailed plan...",
    };

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(state.spinner(), Style::default().fg(colors::ACCENT)),
            Span::raw(" "),
            Span::raw(message),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Working "));
    frame.render_widget(body, area);
}

/// Render the generation error panel
fn render_error(message: &str, frame: &mut Frame, area: Rect) {
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            "Generation failed",
            Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled("r retry │ Esc back", Style::default().fg(colors::HINT))),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ERROR))
            .title(" Error "),
    );
    frame.render_widget(body, area);
}

/// Render the keybind footer
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let hints = if state.controller.is_in_flight() {
        "q quit"
    } else if matches!(state.controller.outcome(), GenerationOutcome::Failed(_)) {
        "r retry │ Esc back │ q quit"
    } else {
        match state.controller.phase() {
            WizardPhase::CollectingField => "Enter next │ Esc quit",
            WizardPhase::CollectingLevel => "↑/↓ select │ Enter next │ Esc back │ q quit",
            WizardPhase::CollectingOutcomes => "Tab next slot │ Enter generate │ Esc back",
            WizardPhase::PresentingOptions => "↑/↓ select │ Enter plan │ Esc back │ q quit",
            WizardPhase::PresentingPlan => "↑/↓ scroll │ r restart │ Esc back │ q quit",
        }
    };

    let footer = Paragraph::new(vec![Line::from(Span::styled(hints, Style::default().fg(colors::HINT)))])
        .block(Block::default().borders(Borders::ALL).title(" Keys "));
    frame.render_widget(footer, area);
}
