//! TUI rendering with ratatui
//!
//! The tree is drawn as an indented in-order list; the selected node's
//! details and root path sit beside it.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::format_path;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_tree(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌳 DICTIONARY TREE - DLS / IDDFS")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tree(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .map(|&(node, depth)| {
            let branch = if depth == 0 { "● " } else { "└ " };
            ListItem::new(Line::from(vec![
                Span::raw("  ".repeat(depth)),
                Span::styled(branch, Style::default().fg(Color::DarkGray)),
                Span::raw(node.word().to_string()),
                Span::styled(
                    format!(" ({})", node.sum()),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Tree (in order) ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_details(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_details(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Node ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(node) = app.selected_node() else {
        f.render_widget(Paragraph::new("Empty tree").block(block), area);
        return;
    };

    let children: Vec<&str> = [node.left(), node.right()]
        .into_iter()
        .flatten()
        .map(|child| child.word())
        .collect();

    let content = vec![
        Line::from(vec![
            Span::raw("Word:       "),
            Span::styled(
                node.word().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Sum:        {}", node.sum())),
        Line::from(format!("Level:      {}", app.selected_depth().unwrap_or(0))),
        Line::from(format!(
            "Children:   {}",
            if children.is_empty() {
                "(leaf)".to_string()
            } else {
                children.join(", ")
            }
        )),
        Line::from(format!("Definition: {}", node.definition().unwrap_or("-"))),
        Line::from(""),
        Line::from(Span::styled(
            "Path from root:",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(format_path(&app.selected_path())),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Browse => (" Press '/' to search a word ", "", Color::DarkGray),
        InputMode::Search => (
            " Search (iterative deepening) | Enter to run, ESC to cancel ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats = Paragraph::new(format!(
        "Nodes: {} | Height: {}",
        app.tree.len(),
        app.tree.height()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("q: Quit | ↑/↓: Move | r: Root | g/G: First/Last | /: Search")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
