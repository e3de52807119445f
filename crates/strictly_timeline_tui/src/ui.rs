//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_timeline::{CellView, GameView, Mark, Status};

use crate::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Timeline - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_board(frame, body[0], &view, app);
    draw_history(frame, body[1], &view, app);
    draw_status(frame, chunks[2], &view, app.message());

    let help = Paragraph::new(format!(
        "arrows move  enter play/jump  1-9 play  tab focus  s sort ({})  q quit",
        view.sort_label
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let border_style = focus_style(app.focus() == Focus::Board);
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = view.rows.first().map_or(0, Vec::len) as u16 * CELL_WIDTH;
    let height = view.rows.len() as u16 * CELL_HEIGHT;
    let board_area = center_rect(inner, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(view.rows.iter().map(|_| Constraint::Length(CELL_HEIGHT)))
        .split(board_area);

    for (display_row, (cells, row_area)) in view.rows.iter().zip(rows.iter()).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(cells.iter().map(|_| Constraint::Length(CELL_WIDTH)))
            .split(*row_area);

        for (display_column, (cell, cell_area)) in cells.iter().zip(cols.iter()).enumerate() {
            let under_cursor =
                app.focus() == Focus::Board && app.cursor() == (display_row, display_column);
            draw_cell(frame, *cell_area, cell, under_cursor);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let mut style = match cell.cell.mark() {
        None => Style::default().fg(Color::DarkGray),
        Some(Mark::X) => Style::default().fg(Color::Blue),
        Some(Mark::O) => Style::default().fg(Color::Red),
    };
    if cell.emphasized {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if cell.highlighted {
        style = style.bg(Color::Green);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(cell.cell.symbol(), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", entry.step + 1, entry.label),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("History ({})", view.sort_label))
                .borders(Borders::ALL)
                .border_style(focus_style(app.focus() == Focus::History)),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView, message: Option<&str>) {
    let color = match view.status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let text = match message {
        Some(msg) => format!("{}  |  {}", view.status, msg),
        None => view.status.to_string(),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_timeline::GameState;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_start_screen() {
        let screen = render(&App::new(GameState::new()));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("History (asc)"));
    }

    #[test]
    fn test_renders_winner_and_move_list() {
        let mut app = App::new(GameState::new());
        // Ascending order shows cell 8 top-left, so X takes the bottom row.
        for position in [0, 3, 1, 4, 2] {
            app.handle(Action::Select(position));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5 (x: 2 y: 0)"));
    }

    #[test]
    fn test_renders_ignored_click_message() {
        let mut app = App::new(GameState::new());
        app.handle(Action::Select(4));
        app.handle(Action::Select(4));
        let screen = render(&app);
        assert!(screen.contains("Ignored: cell 4 is occupied"));
    }
}
