use crate::clipboard;
use crate::dialog::{handle_dialog_input, DialogAction};
use crate::events::{Event, EventHandler};
use crate::selection::SelectionState;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use snip_core::{AppConfig, InputState, SnipError, SnipResult};
use snip_domain::ItemList;
use snip_persistence::{persist_or_delete, ListStore, TextFileStore, DEFAULT_LIST_FILE};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    AddItem,
    EditItem,
    ConfirmClear,
    OpenList,
    SaveListAs,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub list: ItemList,
    pub selection: SelectionState,
    pub status_message: Option<String>,
    config: AppConfig,
    store: TextFileStore,
}

impl App {
    /// `file` replaces the default autosave path for this run; without it
    /// the fixed default file name in the working directory is used.
    pub fn new(file: Option<String>) -> Self {
        let path = file.unwrap_or_else(|| DEFAULT_LIST_FILE.to_string());
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            list: ItemList::new(),
            selection: SelectionState::new(),
            status_message: None,
            config: AppConfig::load(),
            store: TextFileStore::new(path),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn list_path(&self) -> &Path {
        self.store.path()
    }

    pub async fn run(&mut self) -> SnipResult<()> {
        self.startup_load().await;

        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key_event(key).await,
                    Event::Tick => {}
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        self.shutdown_persist().await;
        Ok(())
    }

    /// Implicit load of a previously-saved list. Best effort: a read
    /// failure is surfaced in the status line and the app keeps running.
    pub async fn startup_load(&mut self) {
        if !self.store.exists().await {
            return;
        }
        match self.store.load_into(&mut self.list).await {
            Ok(_) => {
                if !self.list.is_empty() {
                    self.selection.set(Some(0));
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", self.store.path().display(), e);
                self.status_message = Some(format!(
                    "Error when opening \"{}\": {}",
                    self.store.path().display(),
                    e
                ));
            }
        }
    }

    /// Implicit save-or-delete on exit. Best effort: a failure is logged
    /// and never blocks shutdown.
    pub async fn shutdown_persist(&mut self) {
        if let Err(e) = persist_or_delete(&self.store, &self.list).await {
            tracing::warn!("Failed to persist {}: {}", self.store.path().display(), e);
        }
    }

    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
                KeyCode::Char('a') => {
                    self.mode = AppMode::AddItem;
                    self.input.clear();
                }
                KeyCode::Char('e') => self.open_edit_prompt(),
                KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
                KeyCode::Enter | KeyCode::Char('c') => self.copy_selected(),
                KeyCode::Char('x') => {
                    if self.list.is_empty() {
                        self.status_message = Some("No items to clear".to_string());
                    } else if self.config.effective_confirm_clear() {
                        self.mode = AppMode::ConfirmClear;
                    } else {
                        self.clear_list();
                    }
                }
                // New list: clears without asking.
                KeyCode::Char('n') => self.clear_list(),
                KeyCode::Char('o') => {
                    self.mode = AppMode::OpenList;
                    self.input.clear();
                }
                KeyCode::Char('s') => {
                    self.mode = AppMode::SaveListAs;
                    self.input.clear();
                }
                KeyCode::Char('j') | KeyCode::Down => self.selection.next(self.list.len()),
                KeyCode::Char('k') | KeyCode::Up => self.selection.prev(),
                _ => {}
            },
            AppMode::AddItem => match handle_dialog_input(&mut self.input, key.code) {
                DialogAction::Confirm => self.add_from_input(),
                DialogAction::Cancel => self.close_prompt(),
                DialogAction::None => {}
            },
            AppMode::EditItem => match handle_dialog_input(&mut self.input, key.code) {
                DialogAction::Confirm => self.edit_from_input(),
                DialogAction::Cancel => self.close_prompt(),
                DialogAction::None => {}
            },
            AppMode::OpenList => match handle_dialog_input(&mut self.input, key.code) {
                DialogAction::Confirm => self.open_from_input().await,
                DialogAction::Cancel => self.close_prompt(),
                DialogAction::None => {}
            },
            AppMode::SaveListAs => match handle_dialog_input(&mut self.input, key.code) {
                DialogAction::Confirm => self.save_as_from_input().await,
                DialogAction::Cancel => self.close_prompt(),
                DialogAction::None => {}
            },
            AppMode::ConfirmClear => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => self.clear_list(),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.mode = AppMode::Normal;
                }
                _ => {}
            },
        }
    }

    fn open_edit_prompt(&mut self) {
        let selected = self
            .selection
            .get()
            .and_then(|idx| self.list.get(idx))
            .map(str::to_string);
        match selected {
            Some(text) => {
                // Prompt starts from the item's current text.
                self.input.set(&text);
                self.mode = AppMode::EditItem;
            }
            None => self.status_message = Some("Please select an item to edit".to_string()),
        }
    }

    fn add_from_input(&mut self) {
        let text = self.input.text();
        match self.list.add(&text) {
            Ok(()) => {
                self.selection.set(Some(self.list.len() - 1));
                self.close_prompt();
                self.status_message = None;
            }
            // Keep the prompt open with its text so the user can fix it.
            Err(SnipError::EmptyText) => {
                self.status_message = Some("Please add item text".to_string());
            }
            Err(SnipError::Duplicate(_)) => {
                self.status_message = Some("Item already exists".to_string());
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn edit_from_input(&mut self) {
        let text = self.input.text();
        match self.list.edit(self.selection.get(), &text) {
            Ok(()) => {
                self.close_prompt();
                self.status_message = None;
            }
            Err(SnipError::EmptyText) => {
                self.status_message = Some("Please add item text to edit".to_string());
            }
            Err(_) => {
                self.close_prompt();
                self.status_message = Some("Please select an item to edit".to_string());
            }
        }
    }

    fn remove_selected(&mut self) {
        match self.list.remove(self.selection.get()) {
            Ok(()) => {
                self.selection.clamp_to(self.list.len());
                self.status_message = None;
            }
            Err(_) => self.status_message = Some("Please select an item to delete".to_string()),
        }
    }

    fn copy_selected(&mut self) {
        match self.list.copy(self.selection.get()) {
            Ok(text) => {
                let text = text.to_string();
                match clipboard::copy_to_clipboard(&text) {
                    Ok(()) => self.status_message = Some("Copied to clipboard".to_string()),
                    Err(e) => self.status_message = Some(e.to_string()),
                }
            }
            Err(SnipError::EmptyList) => {
                self.status_message = Some("Please add items to copy".to_string());
            }
            Err(_) => self.status_message = Some("Please select an item to copy".to_string()),
        }
    }

    fn clear_list(&mut self) {
        let cleared = self.list.len();
        self.list.clear();
        self.selection.clear();
        self.mode = AppMode::Normal;
        self.status_message = Some(format!("Cleared {} item{}", cleared, plural(cleared)));
    }

    fn close_prompt(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
    }

    /// Loads a user-chosen file, appending onto the current list. The
    /// session's autosave path is untouched.
    async fn open_from_input(&mut self) {
        let path = self.input.text();
        if path.is_empty() {
            return;
        }
        let store = TextFileStore::new(&path);
        let result = store.load_into(&mut self.list).await;
        if self.selection.get().is_none() && !self.list.is_empty() {
            self.selection.set(Some(0));
        }
        self.status_message = Some(match result {
            Ok(count) => format!("Loaded {} item{} from \"{}\"", count, plural(count), path),
            Err(e) => format!("Error when opening \"{}\": {}", path, e),
        });
        self.close_prompt();
    }

    /// Saves to a user-chosen file. The session's autosave path is
    /// untouched.
    async fn save_as_from_input(&mut self) {
        let path = self.input.text();
        if path.is_empty() {
            return;
        }
        let store = TextFileStore::new(&path);
        self.status_message = Some(match store.save(&self.list).await {
            Ok(()) => format!(
                "Saved {} item{} to \"{}\"",
                self.list.len(),
                plural(self.list.len()),
                path
            ),
            Err(e) => format!("Error when saving to \"{}\": {}", path, e),
        });
        self.close_prompt();
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
