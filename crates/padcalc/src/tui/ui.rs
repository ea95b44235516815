//! Ratatui rendering for the calculator.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout as RectLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "enter number"),
    ("+-*/", "operator"),
    ("Enter", "equals"),
    ("Esc c", "reset"),
    ("n", "negate"),
    ("%", "percent"),
    ("s o t", "sin cos tan"),
    ("g l", "log10 ln"),
    ("Tab", "layout"),
    ("q", "quit"),
];

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Returns the keypad pane within the overall layout.
///
/// The event loop uses this to route mouse clicks through the same
/// geometry the renderer draws with.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    panes(area)[1]
}

fn panes(area: Rect) -> Vec<Rect> {
    RectLayout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),    // Display and status
            Constraint::Length(44), // Keypad
            Constraint::Length(22), // Help sidebar
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = Paragraph::new(Span::styled(
            self.app.display(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        display.render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let text = match engine.pending_op() {
            Some(op) => format!("{} {}", engine.stored_value(), op.symbol()),
            None => "Ready".to_string(),
        };
        let status = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Pending ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        status.render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panes = panes(area);

        let main = RectLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(3), // Pending status
                Constraint::Min(0),
            ])
            .split(panes[0]);

        self.render_display(main[0], buf);
        self.render_status(main[1], buf);
        KeypadWidget::new(self.app.keypad()).render(panes[1], buf);
        Self::render_help(panes[2], buf);
    }
}
