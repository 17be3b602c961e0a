pub mod alert;
pub mod form;
pub mod list;
pub mod map;

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, AppState};
use crate::store::KeyValueStore;

pub const SIDEBAR_WIDTH: u16 = 44;
/// Border, four input rows and the hint line
pub const FORM_HEIGHT: u16 = 7;

/// Screen regions, shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub map_block: Rect,
    /// Canvas area inside the map border
    pub map: Rect,
    pub form: Option<Rect>,
    pub list_block: Rect,
    /// Entry area inside the list border
    pub list: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect, form_visible: bool) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    let form_height = if form_visible { FORM_HEIGHT } else { 0 };
    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form_height), Constraint::Min(0)])
        .split(columns[0]);

    let inner = Margin {
        horizontal: 1,
        vertical: 1,
    };

    ScreenLayout {
        map_block: columns[1],
        map: columns[1].inner(inner),
        form: form_visible.then_some(sidebar[0]),
        list_block: sidebar[1],
        list: sidebar[1].inner(inner),
        status: rows[1],
    }
}

fn status_hints(state: AppState) -> &'static [(&'static str, &'static str)] {
    match state {
        AppState::AwaitingLocation => &[("q", "quit"), ("R", "reset")],
        AppState::FormShown => &[
            ("Enter", "save"),
            ("Esc", "cancel"),
            ("Tab", "next field"),
            ("Space", "toggle type"),
        ],
        AppState::FormHidden => &[
            ("click/n", "add"),
            ("↑↓", "select"),
            ("Enter", "go to"),
            ("o", "open in browser"),
            ("+-", "zoom"),
            ("hjkl", "pan"),
            ("R", "reset"),
            ("q", "quit"),
        ],
    }
}

fn render_status(state: AppState, f: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(Color::Gray);

    let spans: Vec<Span> = status_hints(state)
        .iter()
        .flat_map(|(key, hint)| {
            [
                Span::styled(format!(" {key} "), key_style),
                Span::styled(format!("{hint}  "), hint_style),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render<S: KeyValueStore>(app: &mut App<S>, f: &mut Frame) {
    let layout = screen_layout(f.area(), app.state == AppState::FormShown);

    map::render_map(app, f, &layout);
    if let Some(area) = layout.form {
        form::render_form(app, f, area);
    }
    list::render_list(app, f, &layout);
    render_status(app.state, f, layout.status);

    if let Some(alert) = &app.alert {
        alert::render_alert(alert, f, f.area());
    }
}
