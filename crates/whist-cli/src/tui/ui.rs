//! Renders the scoresheet and standings with ratatui.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use whist_core::{EntryField, Player, RoundIndex, PLAYER_COUNT};

use crate::tui::app::{App, Screen};

/// Background of the seat that starts each round.
const LEADER_BG: Color = Color::Rgb(188, 210, 238);
const ENTRY_WIDTH: u16 = 6;
const SCORE_WIDTH: u16 = 7;

pub fn render(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(frame.area());

    render_header(frame, app, main_layout[0]);
    match app.current_screen {
        Screen::Sheet => render_sheet(frame, app, main_layout[1]),
        Screen::Standings => render_standings(frame, app, main_layout[1]),
    }
    render_footer(frame, app, main_layout[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .map(|screen| {
            let style = if *screen == app.current_screen {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!(" {} ", screen.title()), style))
        })
        .collect();

    let selected = Screen::ALL
        .iter()
        .position(|screen| *screen == app.current_screen)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Whist Score Board ")
                .title_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .highlight_style(Style::default().fg(Color::Green))
        .select(selected);

    frame.render_widget(tabs, area);
}

fn render_sheet(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Modifier::BOLD;
    let mut header_cells = vec![Cell::from(Text::from(vec![Line::from(""), Line::from("round")]))
        .style(Style::default().fg(Color::Green).add_modifier(bold))];
    for player in Player::all() {
        let mut name = app.sheet.names().display(player);
        if app.editing_name == Some(player) {
            name = format!("{}_", app.sheet.names().raw(player));
        }
        let name_style = Style::default().fg(Color::Blue).add_modifier(bold);
        header_cells.push(
            Cell::from(Text::from(vec![
                Line::from(Span::styled(name, name_style)),
                Line::from("bid"),
            ]))
            .style(Style::default().fg(Color::Blue)),
        );
        header_cells.push(Cell::from(Text::from(vec![Line::from(""), Line::from("tricks")])).style(Style::default().fg(Color::Blue)));
        header_cells.push(Cell::from(Text::from(vec![Line::from(""), Line::from("score")])).style(Style::default().fg(Color::Blue)));
    }
    let header = Row::new(header_cells).height(2);

    let mut rows: Vec<Row> = RoundIndex::all().map(|round| sheet_row(app, round)).collect();

    let mut total_cells = vec![Cell::from("total").style(Style::default().fg(Color::Red).add_modifier(bold))];
    for player in Player::all() {
        total_cells.push(Cell::from(""));
        total_cells.push(Cell::from(""));
        total_cells.push(
            Cell::from(Line::from(app.sheet.total_for(player).to_string()).alignment(Alignment::Right))
                .style(Style::default().fg(Color::Red).add_modifier(bold)),
        );
    }
    rows.push(Row::new(total_cells).top_margin(1));

    let mut widths = vec![Constraint::Length(6)];
    for _ in 0..PLAYER_COUNT {
        widths.push(Constraint::Length(ENTRY_WIDTH));
        widths.push(Constraint::Length(ENTRY_WIDTH));
        widths.push(Constraint::Length(SCORE_WIDTH));
    }

    let title = if app.dirty {
        " Scoresheet (changed, press c to calculate) ".to_string()
    } else {
        format!(" Scoresheet (grand total {}) ", app.grand_total())
    };

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

fn sheet_row<'a>(app: &'a App, round: RoundIndex) -> Row<'a> {
    let info = round.info();
    let mut cells = vec![Cell::from(info.label).style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];

    for player in Player::all() {
        let base = if app.highlight_leader && info.leader() == player {
            Style::default().bg(LEADER_BG).fg(Color::Black)
        } else {
            Style::default()
        };
        let cell = app.sheet.cell(player, round);
        for field in [EntryField::Bid, EntryField::Tricks] {
            let selected = app.cursor.player == player
                && app.cursor.round == round
                && app.cursor.field == field
                && app.editing_name.is_none();
            let style = if selected {
                base.add_modifier(Modifier::REVERSED)
            } else {
                base
            };
            cells.push(Cell::from(cell.entry(field).to_string()).style(style));
        }
        cells.push(
            Cell::from(Line::from(app.sheet.score_at(player, round).to_string()).alignment(Alignment::Right))
                .style(base.fg(Color::Green).add_modifier(Modifier::BOLD)),
        );
    }

    Row::new(cells)
}

fn render_standings(frame: &mut Frame, app: &App, area: Rect) {
    if app.calculations == 0 {
        let empty = Paragraph::new("No calculation yet. Press c to calculate the sheet.")
            .block(Block::default().borders(Borders::ALL).title(" Standings "))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Rank", "Seat", "Player", "Total"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .standings()
        .into_iter()
        .map(|standing| {
            let style = if standing.rank == 1 {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(standing.rank.to_string()),
                Cell::from(standing.seat.to_string()),
                Cell::from(standing.name),
                Cell::from(standing.total.to_string()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Percentage(50),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(format!(
        " Standings (grand total {}) ",
        app.grand_total()
    )));
    frame.render_widget(table, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.editing_name.is_some() {
        "Type name | Enter/Esc:Done"
    } else {
        "←↑↓→:Move | 0-9:Enter | +/-:Step | X:Clear | N:Name | C/Enter:Calculate | Tab:Screen | Q:Quit"
    };
    let mut lines = vec![Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::Gray),
    ))];
    if app.current_screen == Screen::Sheet && app.editing_name.is_none() {
        let field = match app.cursor.field {
            EntryField::Bid => "bid",
            EntryField::Tricks => "tricks",
        };
        lines.push(Line::from(format!(
            "Round {} | {} | {}: {}",
            app.cursor.round,
            app.sheet.names().display(app.cursor.player),
            field,
            app.current_entry()
        )));
    }
    if let Some(status) = app.status() {
        lines.push(Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Magenta),
        )));
    }
    let help = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}
