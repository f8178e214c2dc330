use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::flow::{FlowState, GameFlow};
use crate::games::{
    aim::TARGET_RADIUS, GameKind, Mark, NumberPhase, NumberSession, ReactionPhase, Session,
};
use crate::layout::{contains, Regions};

pub const TITLE: &str = "brainmark";
const TAGLINE: &str = "Measure your abilities with brain games and cognitive tests.";
const SAVE_HINT: &str = "Save your score to see how you compare.";

/// Render the whole frame for the current flow state. The pointer is only
/// used for hover highlights; all real input handling happens in the flow.
pub fn draw(flow: &GameFlow, pointer: (u16, u16), f: &mut Frame) {
    let area = f.area();
    let regions = Regions::compute(area);

    match flow.state {
        FlowState::Menu => draw_menu(flow, pointer, &regions, f),
        FlowState::Pregame => draw_pregame(flow, pointer, &regions, f),
        FlowState::Game => draw_game(flow, f),
        FlowState::Endgame => draw_endgame(flow, pointer, &regions, f),
    }
}

fn draw_menu(flow: &GameFlow, pointer: (u16, u16), regions: &Regions, f: &mut Frame) {
    let area = f.area();

    text_row(TITLE, 1, Style::default().add_modifier(Modifier::BOLD), f);
    text_row(TAGLINE, 3, Style::default(), f);

    let buttons = [
        (regions.reaction_select, GameKind::Reaction),
        (regions.aim_select, GameKind::Aim),
        (regions.number_select, GameKind::Number),
        (regions.sequence_select, GameKind::Sequence),
    ];

    for (rect, kind) in buttons {
        button(&kind.to_string(), rect, contains(rect, pointer), f);

        let label_rect = Rect {
            x: rect.x + rect.width + 2,
            y: rect.y + 1,
            width: 10,
            height: 1,
        }
        .intersection(area);
        let label = Paragraph::new(flow.scores.menu_label(kind))
            .style(Style::default().add_modifier(Modifier::DIM));
        f.render_widget(label, label_rect);
    }
}

fn draw_pregame(flow: &GameFlow, pointer: (u16, u16), regions: &Regions, f: &mut Frame) {
    let area = f.area();
    let Some(kind) = flow.selected else {
        return;
    };

    let title_y = area.height / 3;
    text_row(
        &kind.to_string(),
        title_y,
        Style::default().add_modifier(Modifier::BOLD),
        f,
    );
    text_row(kind.instructions(), title_y + 2, Style::default(), f);

    button("Start", regions.start, contains(regions.start, pointer), f);
}

fn draw_game(flow: &GameFlow, f: &mut Frame) {
    match flow.session {
        Some(Session::Reaction(ref session)) => {
            let (bg, message, hint) = match session.phase {
                ReactionPhase::Waiting => (Some(Color::Red), "Wait for green".to_string(), ""),
                ReactionPhase::Go => (Some(Color::Green), "Click!".to_string(), ""),
                ReactionPhase::Scored => (
                    None,
                    format!("{} ms", session.last_sample_ms()),
                    "Click to keep going",
                ),
                ReactionPhase::TooEarly => {
                    (None, "Too soon!".to_string(), "Click to try again.")
                }
            };

            let area = f.area();
            if let Some(color) = bg {
                f.render_widget(Block::default().style(Style::default().bg(color)), area);
            }
            text_row(
                &message,
                area.height / 2,
                Style::default().add_modifier(Modifier::BOLD),
                f,
            );
            if !hint.is_empty() {
                text_row(hint, area.height / 2 + 2, Style::default(), f);
            }
        }
        Some(Session::Aim(ref session)) => {
            text_row(
                &format!("Remaining {}", session.remaining),
                1,
                Style::default().add_modifier(Modifier::BOLD),
                f,
            );

            let (tx, ty) = session.target;
            let target = Rect {
                x: tx.saturating_sub(TARGET_RADIUS),
                y: ty.saturating_sub(TARGET_RADIUS),
                width: TARGET_RADIUS * 2 + 1,
                height: TARGET_RADIUS * 2 + 1,
            }
            .intersection(f.area());
            f.render_widget(Block::default().style(Style::default().bg(Color::Red)), target);
        }
        Some(Session::Number(ref session)) => draw_number_game(session, f),
        Some(Session::Sequence(_)) | None => {}
    }
}

fn draw_number_game(session: &NumberSession, f: &mut Frame) {
    let area = f.area();
    let middle = area.height / 2;

    match session.phase {
        NumberPhase::Memorizing => {
            text_row(
                &session.secret(),
                middle.saturating_sub(2),
                Style::default().add_modifier(Modifier::BOLD),
                f,
            );

            let bar = centered_box(area, 30, 1, middle);
            let gauge = Gauge::default()
                .ratio(session.memorize_progress().clamp(0.0, 1.0))
                .use_unicode(true)
                .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray));
            f.render_widget(gauge, bar);
        }
        NumberPhase::Typing => {
            text_row("What was the number?", middle.saturating_sub(4), Style::default(), f);
            text_row("Press enter to submit", middle.saturating_sub(2), Style::default(), f);

            let box_width = (session.answer.width() as u16 + 4).max(20);
            let answer_box = centered_box(area, box_width, 3, middle);
            f.render_widget(Block::default().borders(Borders::ALL), answer_box);
            text_row(
                &session.answer,
                middle + 1,
                Style::default().add_modifier(Modifier::BOLD),
                f,
            );
        }
    }
}

fn draw_endgame(flow: &GameFlow, pointer: (u16, u16), regions: &Regions, f: &mut Frame) {
    let area = f.area();
    let Some(kind) = flow.selected else {
        return;
    };

    if let Some(Session::Number(ref session)) = flow.session {
        // The number game reviews the answer instead of showing its icon.
        text_row("Number", 1, Style::default(), f);
        text_row(&session.secret(), 2, Style::default().add_modifier(Modifier::BOLD), f);
        text_row("Your answer", 4, Style::default(), f);

        let digits: Vec<Span> = session
            .answer
            .chars()
            .enumerate()
            .map(|(i, c)| match session.mark(i) {
                Mark::Correct => Span::raw(c.to_string()),
                Mark::Wrong => Span::styled(
                    c.to_string(),
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::CROSSED_OUT),
                ),
            })
            .collect();
        let row = Rect {
            x: area.x,
            y: 5,
            width: area.width,
            height: 1,
        }
        .intersection(area);
        f.render_widget(
            Paragraph::new(Line::from(digits)).alignment(Alignment::Center),
            row,
        );
    } else {
        text_row(
            &kind.to_string(),
            2,
            Style::default().add_modifier(Modifier::BOLD),
            f,
        );
    }

    let score_msg = flow
        .final_score
        .map(|score| score.to_string())
        .unwrap_or_default();
    text_row(
        &score_msg,
        area.height / 2,
        Style::default().add_modifier(Modifier::BOLD),
        f,
    );

    text_row(
        SAVE_HINT,
        (area.y + area.height).saturating_sub(6),
        Style::default(),
        f,
    );
    button("Save", regions.save, contains(regions.save, pointer), f);
    button(
        "Try again",
        regions.try_again,
        contains(regions.try_again, pointer),
        f,
    );
}

/// A bordered, center-labelled button; hovering reverses the style.
fn button(label: &str, rect: Rect, hovered: bool, f: &mut Frame) {
    let style = if hovered {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let widget = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, rect);
}

/// One centered line of text across the full frame width at row `y`.
fn text_row(text: &str, y: u16, style: Style, f: &mut Frame) {
    let area = f.area();
    let row = Rect {
        x: area.x,
        y: area.y + y,
        width: area.width,
        height: 1,
    }
    .intersection(area);

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(widget, row);
}

/// A `width` x `height` box horizontally centered at row `y`.
fn centered_box(area: Rect, width: u16, height: u16, y: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + y,
        width,
        height,
    }
    .intersection(area)
}
