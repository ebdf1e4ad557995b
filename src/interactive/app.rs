//! Tree viewer state and event loop

use crate::commands::search_deepening;
use crate::search::{PathStep, SearchTarget, depth_limited_search};
use crate::tree::{Node, WordTree};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Viewer state over a fully built, read-only tree
pub struct App<'t> {
    pub tree: &'t WordTree,
    /// Nodes in key order with their depth; one row each
    pub rows: Vec<(&'t Node, usize)>,
    pub selected: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'t> App<'t> {
    #[must_use]
    pub fn new(tree: &'t WordTree) -> Self {
        let rows = tree.in_order_with_depth();
        let selected = rows.iter().position(|&(_, depth)| depth == 0).unwrap_or(0);

        Self {
            tree,
            rows,
            selected,
            input_mode: InputMode::Browse,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "{} words, height {}. Press '/' to search.",
                    tree.len(),
                    tree.height()
                ),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    #[must_use]
    pub fn selected_node(&self) -> Option<&'t Node> {
        self.rows.get(self.selected).map(|&(node, _)| node)
    }

    #[must_use]
    pub fn selected_depth(&self) -> Option<usize> {
        self.rows.get(self.selected).map(|&(_, depth)| depth)
    }

    /// Root-to-node path of the selection
    #[must_use]
    pub fn selected_path(&self) -> Vec<PathStep> {
        self.selected_node().map_or_else(Vec::new, |node| {
            let target = SearchTarget::new(node.sum(), Some(node.word()));
            depth_limited_search(self.tree, &target, self.tree.height()).path
        })
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub const fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub const fn select_first(&mut self) {
        self.selected = 0;
    }

    pub const fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    pub fn select_root(&mut self) {
        if let Some(index) = self.rows.iter().position(|&(_, depth)| depth == 0) {
            self.selected = index;
        }
    }

    /// Run iterative deepening for the typed word and select it if found
    pub fn submit_search(&mut self) {
        let word = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        self.input_mode = InputMode::Browse;

        if word.is_empty() {
            self.add_message("Enter a non-empty word", MessageStyle::Error);
            return;
        }

        let outcome = search_deepening(self.tree, &word, 0);
        match outcome.found {
            Some(found) => {
                if let Some(index) = self.rows.iter().position(|&(n, _)| std::ptr::eq(n, found)) {
                    self.selected = index;
                }
                self.add_message(
                    &format!(
                        "Found '{}' at limit {} after {} rounds ({} visits)",
                        found.word(),
                        outcome.limit.unwrap_or_default(),
                        outcome.rounds,
                        outcome.trace.len()
                    ),
                    MessageStyle::Success,
                );
            }
            None => self.add_message(
                &format!(
                    "'{word}' not found ({} rounds, {} visits)",
                    outcome.rounds,
                    outcome.trace.len()
                ),
                MessageStyle::Error,
            ),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Show the tree in a full-screen terminal view
///
/// An empty tree is a no-op.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_viewer(tree: &WordTree) -> Result<()> {
    if tree.is_empty() {
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(tree));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Browse => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                    KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                    KeyCode::Home | KeyCode::Char('g') => app.select_first(),
                    KeyCode::End | KeyCode::Char('G') => app.select_last(),
                    KeyCode::Char('r') => app.select_root(),
                    KeyCode::Char('/') => app.input_mode = InputMode::Search,
                    _ => {}
                },
                InputMode::Search => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Browse;
                        app.input_buffer.clear();
                    }
                    KeyCode::Enter => app.submit_search(),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::sample_entries;
    use crate::tree::build_tree;

    #[test]
    fn starts_on_root() {
        let tree = build_tree(&sample_entries());
        let app = App::new(&tree);
        assert_eq!(app.selected_depth(), Some(0));
        assert_eq!(
            app.selected_node().map(Node::word),
            tree.root().map(Node::word)
        );
        assert_eq!(app.rows.len(), tree.len());
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let tree = build_tree(&sample_entries());
        let mut app = App::new(&tree);

        app.select_first();
        app.select_previous();
        assert_eq!(app.selected, 0);

        app.select_last();
        app.select_next();
        assert_eq!(app.selected, tree.len() - 1);

        app.select_root();
        assert_eq!(app.selected_depth(), Some(0));
    }

    #[test]
    fn selected_path_ends_at_selection() {
        let tree = build_tree(&sample_entries());
        let mut app = App::new(&tree);
        app.select_last();

        let path = app.selected_path();
        let node = app.selected_node().unwrap();
        assert_eq!(path.len(), app.selected_depth().unwrap() + 1);
        assert_eq!(path.first().map(|s| s.word.as_str()), tree.root().map(Node::word));
        assert_eq!(path.last().map(|s| s.word.as_str()), Some(node.word()));
    }

    #[test]
    fn search_selects_found_word() {
        let tree = build_tree(&sample_entries());
        let mut app = App::new(&tree);
        app.input_mode = InputMode::Search;
        app.input_buffer = "quartz".to_string();

        app.submit_search();
        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.selected_node().map(Node::word), Some("quartz"));
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Success)
        ));
    }

    #[test]
    fn search_miss_keeps_selection() {
        let tree = build_tree(&sample_entries());
        let mut app = App::new(&tree);
        let before = app.selected;
        app.input_buffer = "xylophone".to_string();

        app.submit_search();
        assert_eq!(app.selected, before);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn messages_are_capped() {
        let tree = build_tree(&sample_entries());
        let mut app = App::new(&tree);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }

    #[test]
    fn empty_tree_viewer_is_noop() {
        let tree = WordTree::new();
        assert!(run_viewer(&tree).is_ok());
    }
}
