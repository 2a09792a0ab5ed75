use crate::models::{GamePhase, QuizSession};
use crate::ui::layout::calculate_drill_chunks;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_drill(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_drill_chunks(f.area());

    let mut progress = format!(
        "Round {} / {} - Score: {}",
        session.rounds_played, session.target_rounds, session.score
    );
    if session.next_target_rounds != session.target_rounds {
        progress.push_str(&format!(" (next game: {} rounds)", session.next_target_rounds));
    }

    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let equation = format!(
        "{} x {} = ?",
        session.left_factor, session.right_factor
    );
    let question = Paragraph::new(equation)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let evaluated = session.phase == GamePhase::Evaluated;
    let answer_title = if evaluated {
        "Result (Press Enter to continue)"
    } else {
        "Your Answer (Press Enter to verify)"
    };

    let answer_content = if let Some(result) = &session.last_result {
        let mut text = Text::default();
        if result.is_correct {
            text.push_line(Line::from(Span::styled(
                "Good",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(""));
            text.push_line(Line::from(format!(
                "{} x {} = {}",
                session.left_factor, session.right_factor, result.expected
            )));
        } else {
            text.push_line(Line::from(Span::styled(
                "Bad answer",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(""));
            text.push_line(Line::from(format!(
                "The right answer is {}",
                result.expected
            )));
        }
        text
    } else {
        Text::from(if session.input_buffer.is_empty() {
            "?"
        } else {
            session.input_buffer.as_str()
        })
    };

    let answer = Paragraph::new(answer_content)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(answer_title));
    f.render_widget(answer, layout.answer_area);

    if !evaluated {
        let cursor_x = layout.answer_area.x + 1 + session.input_buffer.len() as u16;
        let cursor_y = layout.answer_area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let mut help_spans = Vec::new();
    if evaluated {
        help_spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Next  "),
        ]);
    } else {
        help_spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Verify  "),
            Span::styled(
                "+/-",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Rounds per Game  "),
        ]);
    }
    help_spans.extend([
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ]);

    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the game?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep Playing)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
