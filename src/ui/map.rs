use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map as WorldMap, MapResolution, Points},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use crate::app::App;
use crate::store::KeyValueStore;
use crate::ui::ScreenLayout;

const PENDING_SYMBOL: &str = "✚";
const MARKER_SYMBOL: &str = "◆";

fn render_placeholder<S: KeyValueStore>(app: &App<S>, f: &mut Frame, layout: &ScreenLayout) {
    let (text, style) = match &app.location_error {
        Some(e) => (
            format!("Can not get your current position.\n\n{e}"),
            Style::default().fg(Color::Yellow),
        ),
        None => (
            "Locating…".to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ),
    };

    let placeholder = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Map "));
    f.render_widget(placeholder, layout.map_block);
}

pub fn render_map<S: KeyValueStore>(app: &App<S>, f: &mut Frame, layout: &ScreenLayout) {
    let Some(map) = app.map.as_ref() else {
        render_placeholder(app, f, layout);
        return;
    };

    let bounds = map.bounds(layout.map);
    let selected = app.selected_workout().map(|w| w.coordinates());
    let pending = app.pending;
    let title = format!(" Map · {} · zoom {} ", map.center(), map.zoom());

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .marker(Marker::Braille)
        .x_bounds(bounds.lng)
        .y_bounds(bounds.lat)
        .paint(|ctx| {
            ctx.draw(&WorldMap {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();

            for marker in map.markers() {
                ctx.draw(&Points {
                    coords: &[(marker.coordinates.lng, marker.coordinates.lat)],
                    color: marker.popup_style.color(),
                });
            }
            ctx.layer();

            for marker in map.markers() {
                let mut style = Style::default()
                    .fg(marker.popup_style.color())
                    .add_modifier(Modifier::BOLD);
                if selected == Some(marker.coordinates) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ctx.print(
                    marker.coordinates.lng,
                    marker.coordinates.lat,
                    Line::from(vec![
                        Span::styled(MARKER_SYMBOL, style),
                        Span::styled(format!(" {}", marker.popup_text), style),
                    ]),
                );
            }

            if let Some(p) = pending {
                ctx.print(
                    p.lng,
                    p.lat,
                    Span::styled(
                        PENDING_SYMBOL,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
                    ),
                );
            }
        });

    f.render_widget(canvas, layout.map_block);
}
