//! Keyboard handling, dispatched by the current screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Screen};

impl App {
    /// Handle a key event for the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // Ctrl+C quits from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Register => self.handle_register_key(key),
            Screen::Books => self.handle_books_key(key),
            Screen::BookDetail => self.handle_book_detail_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('r') {
                self.screen = Screen::Register;
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => self.login_form.focus_next(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => self.login_form.backspace(),
            KeyCode::Char(c) => self.login_form.push_char(c),
            _ => {}
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('l') {
                self.screen = Screen::Login;
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.screen = Screen::Login,
            KeyCode::Tab | KeyCode::Down => self.register_form.focus_next(),
            KeyCode::Enter => self.submit_register(),
            KeyCode::Backspace => self.register_form.backspace(),
            KeyCode::Char(c) => self.register_form.push_char(c),
            _ => {}
        }
    }

    fn handle_books_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => self.fetch_books(self.books.page.max(1)),
            KeyCode::Char('d') => self.open_dashboard(),
            KeyCode::Char('l') => self.logout(),
            KeyCode::Left => {
                if self.books.page > 1 && !self.books.loading {
                    self.fetch_books(self.books.page - 1);
                }
            }
            KeyCode::Right => {
                let total = self.books.meta.map(|m| m.last_page).unwrap_or(1);
                if self.books.page < total && !self.books.loading {
                    self.fetch_books(self.books.page + 1);
                }
            }
            KeyCode::Up => self.books.selected_key = self.books.step_selection(-1),
            KeyCode::Down => self.books.selected_key = self.books.step_selection(1),
            KeyCode::Enter => {
                if let Some(id) = self.books.selected_key {
                    self.open_book(id);
                }
            }
            _ => {}
        }
    }

    fn handle_book_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => {
                self.detail = Default::default();
                self.screen = Screen::Books;
            }
            KeyCode::Char('r') => {
                if let Some(id) = self.detail.id {
                    self.open_book(id);
                }
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') | KeyCode::Esc => self.screen = Screen::Books,
            KeyCode::Char('r') => self.fetch_dashboard(),
            KeyCode::Char('l') => self.logout(),
            _ => {}
        }
    }
}
