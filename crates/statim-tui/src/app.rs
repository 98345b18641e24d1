use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use statim_core::{DashboardSnapshot, FetchError, ViewState};

pub struct App {
    pub view: ViewState,
    pub should_quit: bool,
    pub show_help: bool,
    /// First journal entry shown in the log card.
    pub journal_offset: usize,
    /// Set by `r`; the run loop forwards it to the loader and clears it.
    pub reload_requested: bool,
    /// Last fetch failure. Kept for logs and headless output, never drawn.
    pub last_error: Option<String>,
    /// Where snapshots come from, shown in the status bar.
    pub source_label: String,
}

impl App {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            view: ViewState::new(),
            should_quit: false,
            show_help: false,
            journal_offset: 0,
            reload_requested: false,
            last_error: None,
            source_label: source_label.into(),
        }
    }

    /// Fold one fetch outcome into the view.
    pub fn apply_result(&mut self, result: Result<DashboardSnapshot, FetchError>) {
        match &result {
            Ok(_) => {
                self.last_error = None;
                self.journal_offset = 0;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
        self.view.apply(result);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Help modal intercepts Esc and ?
        if self.show_help {
            match key.code {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }

            // Journal scrolling
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.journal_len();
                if len > 0 && self.journal_offset < len - 1 {
                    self.journal_offset += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.journal_offset = self.journal_offset.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.journal_offset = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.journal_offset = self.journal_len().saturating_sub(1);
            }

            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') => self.reload_requested = true,

            _ => {}
        }
    }

    fn journal_len(&self) -> usize {
        self.view.snapshot().map_or(0, |s| s.journal.len())
    }
}
