use itertools::Itertools;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, ListState};
use crate::store::KeyValueStore;
use crate::ui::ScreenLayout;
use crate::workout::{Activity, Workout};

/// Rows per list entry: label, then two metric lines
pub const ITEM_HEIGHT: u16 = 3;

/// Whole numbers print without decimals, everything else with one
pub fn format_number(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.1}")
    }
}

/// The two metric lines of a list entry, chosen by the workout's kind
pub fn metric_lines(w: &Workout) -> [String; 2] {
    let metric = format!("⚡️ {:.1} {}", w.derived_metric(), w.metric_unit());
    let (basics, details) = match w.activity() {
        Activity::Running { cadence_spm } => (
            [
                format!("{} {} km", w.kind().emoji(), format_number(w.distance_km())),
                format!("⏱ {} min", format_number(w.duration_min())),
            ],
            [metric, format!("🦶🏼 {} spm", format_number(cadence_spm))],
        ),
        Activity::Cycling { elevation_gain_m } => (
            [
                format!("{} {} km", w.kind().emoji(), format_number(w.distance_km())),
                format!("⏱ {} min", format_number(w.duration_min())),
            ],
            [metric, format!("⛰ {} m", format_number(elevation_gain_m))],
        ),
    };
    [basics.iter().join("   "), details.iter().join("   ")]
}

/// Pure presenter for one list entry
pub fn present_item(w: &Workout, selected: bool) -> Vec<Line<'static>> {
    let accent = w.popup_style().color();
    let mut title_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let mut body_style = Style::default();
    if selected {
        title_style = title_style.add_modifier(Modifier::REVERSED);
        body_style = body_style.bg(Color::DarkGray);
    }

    let [basics, details] = metric_lines(w);
    vec![
        Line::from(vec![
            Span::styled("▌", Style::default().fg(accent)),
            Span::styled(w.display_label(), title_style),
        ]),
        Line::from(vec![
            Span::styled("▌", Style::default().fg(accent)),
            Span::styled(format!(" {basics}"), body_style),
        ]),
        Line::from(vec![
            Span::styled("▌", Style::default().fg(accent)),
            Span::styled(format!(" {details}"), body_style),
        ]),
    ]
}

/// Keep the selection on screen and the offset within the list
pub fn clamp_scroll(list: &mut ListState, len: usize, visible: usize) {
    let visible = visible.max(1);
    if let Some(selected) = list.selected {
        if selected < list.scroll_offset {
            list.scroll_offset = selected;
        } else if selected >= list.scroll_offset + visible {
            list.scroll_offset = selected + 1 - visible;
        }
    }
    list.scroll_offset = list.scroll_offset.min(len.saturating_sub(visible));
}

pub fn render_list<S: KeyValueStore>(app: &mut App<S>, f: &mut Frame, layout: &ScreenLayout) {
    let visible = (layout.list.height / ITEM_HEIGHT) as usize;
    clamp_scroll(&mut app.list, app.workouts.len(), visible);

    let title = if app.workouts.len() > visible && visible > 0 {
        format!(
            " Workouts ({}-{}/{}) ",
            app.list.scroll_offset + 1,
            (app.list.scroll_offset + visible).min(app.workouts.len()),
            app.workouts.len()
        )
    } else {
        format!(" Workouts ({}) ", app.workouts.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if app.workouts.is_empty() {
        let empty = Paragraph::new("No workouts yet.\nClick the map to add one!")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, layout.list_block);
        return;
    }

    let lines: Vec<Line> = app
        .workouts
        .iter()
        .enumerate()
        .skip(app.list.scroll_offset)
        .take(visible)
        .flat_map(|(i, w)| present_item(w, app.list.selected == Some(i)))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), layout.list_block);
}
