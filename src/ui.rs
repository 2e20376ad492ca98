use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::classify::{classify, CharClass};
use crate::session::{Snapshot, Status};
use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.session.snapshot();
        match snapshot.status {
            Status::Waiting => render_waiting(&snapshot, area, buf),
            Status::Started => render_typing(&snapshot, area, buf),
            Status::Finished => render_results(&snapshot, area, buf),
        }
    }
}

fn render_waiting(snapshot: &Snapshot, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Length(area.height.saturating_sub(4) / 2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    let countdown = Paragraph::new(Span::styled(format!("{}", snapshot.countdown), bold_style))
        .alignment(Alignment::Center);
    countdown.render(chunks[1], buf);

    let legend = Paragraph::new(Span::styled("(enter) start / (esc) quit", italic_style))
        .alignment(Alignment::Center);
    legend.render(chunks[2], buf);
}

fn render_typing(snapshot: &Snapshot, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);
    let underlined_dim_style = Style::default()
        .patch(dim_bold_style)
        .add_modifier(Modifier::UNDERLINED);
    let match_style = Style::default().bg(Color::Green).fg(Color::Black);
    let mismatch_style = Style::default().bg(Color::Red).fg(Color::Black);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let grid_width = snapshot.words.iter().join(" ").width();
    let mut grid_lines = ((grid_width as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;
    if grid_width <= max_chars_per_line as usize {
        grid_lines = 1;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Length(area.height.saturating_sub(grid_lines + 4) / 2),
                Constraint::Length(2),
                Constraint::Length(grid_lines),
                Constraint::Length(2),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    let timer = Paragraph::new(Span::styled(
        format!("{}", snapshot.countdown),
        dim_bold_style,
    ))
    .alignment(Alignment::Center);
    timer.render(chunks[1], buf);

    let mut spans: Vec<Span> = Vec::new();
    for (word_idx, word) in snapshot.words.iter().enumerate() {
        for (char_idx, ch) in word.chars().enumerate() {
            let style = match classify(word_idx, char_idx, ch, word, &snapshot.cursor, snapshot.status)
            {
                CharClass::Match => match_style,
                CharClass::Mismatch => mismatch_style,
                CharClass::Neutral => Style::default(),
            };
            spans.push(Span::styled(ch.to_string(), style));
        }
        spans.push(Span::raw(" "));
    }

    let grid = Paragraph::new(Line::from(spans))
        .alignment(if grid_lines == 1 {
            // when the word grid fits on one line, centering the text gives
            // a nice zen feeling
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true });
    grid.render(chunks[2], buf);

    let input = Paragraph::new(Line::from(vec![
        Span::styled(snapshot.input.to_string(), bold_style),
        Span::styled(" ", underlined_dim_style),
    ]))
    .alignment(Alignment::Center);
    input.render(chunks[3], buf);
}

fn render_results(snapshot: &Snapshot, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);
    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let cyan_bold_style = Style::default().patch(bold_style).fg(Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints(
            [
                Constraint::Length(area.height.saturating_sub(9) / 2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[1]);

    let tally = snapshot.tally;

    // The classic score card: the left column is labeled in minutes but
    // shows the raw count of correctly typed words.
    let wpm = Paragraph::new(vec![
        Line::from(Span::styled("words per minute", dim_style)),
        Line::from(Span::styled(
            format!("{}", tally.correct()),
            green_bold_style,
        )),
    ])
    .alignment(Alignment::Center);
    wpm.render(columns[0], buf);

    let accuracy = Paragraph::new(vec![
        Line::from(Span::styled("accuracy", dim_style)),
        Line::from(Span::styled(
            format!("{:.0} %", tally.accuracy()),
            cyan_bold_style,
        )),
    ])
    .alignment(Alignment::Center);
    accuracy.render(columns[1], buf);

    let legend = Paragraph::new(Span::styled("(enter) restart / (esc) quit", italic_style))
        .alignment(Alignment::Center);
    legend.render(chunks[3], buf);
}
