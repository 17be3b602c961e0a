use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::form::{FormField, WorkoutForm};
use crate::store::KeyValueStore;
use crate::workout::PopupStyle;

const LABEL_WIDTH: usize = 10;

fn row<'a>(label: &str, value: &str, placeholder: &str, unit: &str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let value_span = if value.is_empty() {
        Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw(value.to_string())
    };
    let cursor = if focused { "▏" } else { " " };

    Line::from(vec![
        Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), label_style),
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
        Span::styled(format!(" {unit}"), Style::default().fg(Color::Gray)),
    ])
}

/// Lines of the open form, one per input row plus the hint
pub fn present_form(form: &WorkoutForm) -> Vec<Line<'static>> {
    let kind_focused = form.focus == FormField::Kind;
    let kind_style = if kind_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    vec![
        Line::from(vec![
            Span::styled(format!("{:<width$}", "Type", width = LABEL_WIDTH), kind_style),
            Span::styled(
                format!("‹ {} {} ›", form.kind.emoji(), form.kind),
                kind_style,
            ),
        ]),
        row(
            "Distance",
            &form.distance,
            "km",
            "km",
            form.focus == FormField::Distance,
        ),
        row(
            "Duration",
            &form.duration,
            "min",
            "min",
            form.focus == FormField::Duration,
        ),
        row(
            form.extra_label(),
            form.extra(),
            form.extra_placeholder(),
            "",
            form.focus == FormField::Extra,
        ),
        Line::from(Span::styled(
            "Enter save · Esc cancel · Tab next",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
    ]
}

pub fn render_form<S: KeyValueStore>(app: &App<S>, f: &mut Frame, area: Rect) {
    let title = match app.pending {
        Some(at) => format!(" New workout at {at} "),
        None => " New workout ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PopupStyle::from(app.form.kind).color()))
        .title(title);

    f.render_widget(Paragraph::new(present_form(&app.form)).block(block), area);
}
