use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{FrameView, Renderer};
use crate::game::{CollisionType, Status};

/// Renders frames into a ratatui terminal; one board cell is two columns
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw_frame(&mut self, view: &FrameView<'_>) -> Result<()> {
        self.terminal
            .draw(|frame| render(frame, view))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

fn render(frame: &mut Frame, view: &FrameView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    frame.render_widget(render_stats(view), chunks[0]);

    // Board width in columns, including the border
    let board_width = (view.grid.columns() as u16).saturating_mul(2).saturating_add(2);
    let game_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(board_width),
            Constraint::Fill(1),
        ])
        .split(chunks[1])[1];

    match view.status {
        Status::GameOver(cause) => frame.render_widget(render_game_over(view, cause), game_area),
        Status::Running | Status::Paused => frame.render_widget(render_grid(view), game_area),
    }

    frame.render_widget(render_controls(view.status), chunks[2]);
}

fn render_grid<'a>(view: &FrameView<'_>) -> Paragraph<'a> {
    let grid = view.grid;
    let head = view.segments[0];
    let body = &view.segments[1..];

    let lines: Vec<Line> = (0..grid.rows())
        .map(|row| {
            let spans: Vec<Span> = (0..grid.columns())
                .map(|col| {
                    let pos = grid.cell(col, row);
                    if pos == head {
                        Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if body.contains(&pos) {
                        Span::styled("□ ", Style::default().fg(Color::Green))
                    } else if pos == view.apple {
                        Span::styled(
                            "● ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(". ", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = if view.status == Status::Paused {
        " Snake - PAUSED "
    } else {
        " Snake "
    };

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    )
}

fn render_stats<'a>(view: &FrameView<'_>) -> Paragraph<'a> {
    let label = Style::default().fg(Color::Yellow);
    let value = Style::default().fg(Color::White);

    let text = vec![Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(view.score.to_string(), value.add_modifier(Modifier::BOLD)),
        Span::raw("    "),
        Span::styled("Best: ", label),
        Span::styled(view.high_score.to_string(), value),
        Span::raw("    "),
        Span::styled("Time: ", label),
        Span::styled(view.elapsed.clone(), value),
    ])];

    Paragraph::new(text).alignment(Alignment::Center)
}

fn render_game_over<'a>(view: &FrameView<'_>, cause: CollisionType) -> Paragraph<'a> {
    let reason = match cause {
        CollisionType::Wall => "You hit the wall",
        CollisionType::SelfCollision => "You ran into yourself",
    };

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )]),
        Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Esc",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]),
    ];

    Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
}

fn render_controls<'a>(status: Status) -> Paragraph<'a> {
    let pause = if status == Status::Paused { " to resume | " } else { " to pause | " };
    let text = vec![Line::from(vec![
        Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
        Span::raw(" or "),
        Span::styled("WASD", Style::default().fg(Color::Cyan)),
        Span::raw(" to move | "),
        Span::styled("P", Style::default().fg(Color::Cyan)),
        Span::raw(pause),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" to quit"),
    ])];

    Paragraph::new(text).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameState};
    use crate::metrics::GameMetrics;
    use crate::render::FrameView;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;

    fn screen(renderer: &TerminalRenderer<TestBackend>) -> String {
        renderer
            .terminal()
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn renderer() -> TerminalRenderer<TestBackend> {
        TerminalRenderer::new(Terminal::new(TestBackend::new(80, 30)).unwrap())
    }

    #[test]
    fn test_draws_board_and_score() {
        let state = GameState::new(GameConfig::small());
        let metrics = GameMetrics::new();
        let mut renderer = renderer();

        renderer.draw_frame(&FrameView::new(&state, &metrics)).unwrap();

        let text = screen(&renderer);
        assert!(text.contains("Score: 0"));
        assert!(text.contains(" Snake "));
        assert!(text.contains('■'));
        assert!(text.contains('●'));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_draws_pause_title() {
        let mut state = GameState::new(GameConfig::small());
        state.toggle_pause();
        let metrics = GameMetrics::new();
        let mut renderer = renderer();

        renderer.draw_frame(&FrameView::new(&state, &metrics)).unwrap();

        assert!(screen(&renderer).contains("PAUSED"));
    }

    #[test]
    fn test_draws_game_over() {
        let mut state = GameState::new(GameConfig::small());
        let mut rng = StdRng::seed_from_u64(5);
        // Heading down from (40, 40) on a 10-row board reaches the wall
        while !state.is_over() {
            state.tick(&mut rng);
        }
        let metrics = GameMetrics::new();
        let mut renderer = renderer();

        renderer
            .draw_frame(&FrameView::new(&state, &metrics))
            .unwrap();

        let text = screen(&renderer);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("You hit the wall"));
    }
}
