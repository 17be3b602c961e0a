use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::Alert;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 60;

/// Box size for a message: wide enough for the title and the longest line,
/// tall enough for the wrapped message plus the dismiss hint.
fn alert_size(alert: &Alert, area: Rect) -> (u16, u16) {
    let longest = alert
        .message
        .lines()
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(alert.title.width() + 2))
        .max()
        .unwrap_or(0) as u16;
    let width = (longest + 4).clamp(MIN_WIDTH, MAX_WIDTH).min(area.width);

    let text_width = width.saturating_sub(4).max(1) as usize;
    let message_rows: usize = alert
        .message
        .lines()
        .map(|l| l.width().div_ceil(text_width).max(1))
        .sum();
    let height = (message_rows as u16 + 4).min(area.height);
    (width, height)
}

fn centered(width: u16, height: u16, area: Rect) -> Rect {
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_alert(alert: &Alert, f: &mut Frame, area: Rect) {
    let (width, height) = alert_size(alert, area);
    let popup = centered(width, height, area);

    let mut lines: Vec<Line> = alert.message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "press any key",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            format!(" {} ", alert.title),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(message: &str) -> Alert {
        Alert {
            title: "Invalid input".into(),
            message: message.into(),
        }
    }

    #[test]
    fn short_message_gets_minimum_width() {
        let (w, h) = alert_size(&alert("Distance must be a number"), Rect::new(0, 0, 120, 40));
        assert_eq!(w, MIN_WIDTH);
        assert_eq!(h, 5);
    }

    #[test]
    fn long_message_wraps_within_max_width() {
        let message = "x".repeat(200);
        let (w, h) = alert_size(&alert(&message), Rect::new(0, 0, 120, 40));
        assert_eq!(w, MAX_WIDTH);
        assert_eq!(h, 200usize.div_ceil(56) as u16 + 4);
    }

    #[test]
    fn size_never_exceeds_area() {
        let area = Rect::new(0, 0, 10, 4);
        let (w, h) = alert_size(&alert(&"y".repeat(80)), area);
        assert!(w <= area.width && h <= area.height);
        let r = centered(w, h, area);
        assert!(r.right() <= area.right() && r.bottom() <= area.bottom());
    }
}
