use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::render::{BoardView, Figure, GALLOWS_STAGES};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;
const EMPTY_SLOT: char = '·';

/// ASCII gallows with `stage` parts drawn (0 draws nothing).
pub fn gallows_lines(stage: usize) -> Vec<String> {
    if stage == 0 {
        return vec![String::new(); 7];
    }
    let part = |min: usize, c: char| if stage >= min { c } else { ' ' };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(2, 'O')),
        format!(" {}{}{}  |", part(4, '/'), part(3, '|'), part(5, '\\')),
        format!(" {} {}  |", part(6, '/'), part(7, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Empty gallows with the figure standing beside it, arms up.
pub fn freed_lines() -> Vec<String> {
    vec![
        "  +---+     ".to_string(),
        "  |   |     ".to_string(),
        "      |  \\O/".to_string(),
        "      |   | ".to_string(),
        "      |  / \\".to_string(),
        "      |     ".to_string(),
        "=========   ".to_string(),
    ]
}

pub fn figure_lines(figure: Figure) -> Vec<String> {
    match figure {
        Figure::Gallows(stage) => gallows_lines(stage.min(GALLOWS_STAGES)),
        Figure::Freed => freed_lines(),
    }
}

fn wrong_letter_slots(board: &BoardView) -> String {
    let slots = (0..board.max_wrong_guesses)
        .map(|idx| board.wrong_letters.get(idx).copied().unwrap_or(EMPTY_SLOT))
        .join(" ");
    format!("{{ {slots} }}")
}

impl Widget for &BoardView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let title_style = Style::default().patch(bold_style).fg(Color::Cyan);
        let label_style = Style::default().add_modifier(Modifier::DIM);
        let word_style = Style::default().patch(bold_style).fg(Color::Green);
        let wrong_style = Style::default().patch(bold_style).fg(Color::Red);
        let message_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let message = self
            .message
            .as_ref()
            .map(|m| m.text.as_str())
            .unwrap_or(self.labels.start_message.as_str());

        Paragraph::new(vec![
            Line::from(Span::styled(self.labels.title.as_str(), title_style)),
            Line::from(Span::styled(message, message_style)),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM))
        .render(chunks[0], buf);

        let masked = self.masked_word();
        let wrong = wrong_letter_slots(self);

        let sidebar_width = [
            self.labels.wins.width() + 6,
            self.labels.current_word.width(),
            self.labels.wrong_letters.width(),
            self.labels.guesses_remaining.width() + 4,
            masked.width(),
            wrong.width(),
        ]
        .into_iter()
        .max()
        .unwrap_or_default() as u16
            + 2;

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(chunks[1]);

        let sidebar = vec![
            Line::from(vec![
                Span::styled(format!("{} ", self.labels.wins), label_style),
                Span::styled(self.total_wins.to_string(), bold_style),
            ]),
            Line::default(),
            Line::from(Span::styled(self.labels.current_word.as_str(), label_style)),
            Line::from(Span::styled(masked, word_style)),
            Line::default(),
            Line::from(Span::styled(self.labels.wrong_letters.as_str(), label_style)),
            Line::from(Span::styled(wrong, wrong_style)),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{} ", self.labels.guesses_remaining), label_style),
                Span::styled(self.guesses_remaining.to_string(), bold_style),
            ]),
        ];

        Paragraph::new(sidebar)
            .wrap(Wrap { trim: false })
            .render(body[0], buf);

        let drawing = figure_lines(self.figure())
            .into_iter()
            .map(Line::from)
            .collect::<Vec<Line>>();

        Paragraph::new(drawing)
            .alignment(Alignment::Center)
            .render(body[1], buf);
    }
}
