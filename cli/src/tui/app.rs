use std::fs;
use std::path::PathBuf;

use ratatui::widgets::TableState;
use remunera_core::{parse_benefit_input, AddBenefitOutcome, ConfigurationStore};
use tracing::{info, warn};

use crate::statement::render_text;

pub enum InputMode {
    Normal,
    AddingBenefit,
    EditingDays,
}

pub struct App {
    pub store: ConfigurationStore,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub status: Option<String>,
    export_dir: PathBuf,
}

impl App {
    pub fn new(store: ConfigurationStore, export_dir: PathBuf) -> App {
        let mut state = TableState::default();
        if !store.config().others.is_empty() {
            state.select(Some(0));
        }
        App {
            store,
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            status: None,
            export_dir,
        }
    }

    fn benefit_count(&self) -> usize {
        self.store.config().others.len()
    }

    pub fn next(&mut self) {
        let len = self.benefit_count();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.benefit_count();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn next_month(&mut self) {
        let date = self.store.date().next_month();
        self.store.set_date(date);
    }

    pub fn previous_month(&mut self) {
        let date = self.store.date().previous_month();
        self.store.set_date(date);
    }

    pub fn next_year(&mut self) {
        let date = self.store.date().next_year();
        self.store.set_date(date);
    }

    pub fn previous_year(&mut self) {
        let date = self.store.date().previous_year();
        self.store.set_date(date);
    }

    pub fn toggle_plr(&mut self) {
        let enabled = !self.store.config().plr.enabled;
        self.store.set_plr_enabled(enabled);
    }

    pub fn toggle_va(&mut self) {
        let enabled = !self.store.config().va.enabled;
        self.store.set_va_enabled(enabled);
    }

    pub fn use_calculated_days(&mut self) {
        self.store.use_calculated_days();
        self.status = Some(format!("Usando dias úteis ({})", self.store.business_days()));
    }

    pub fn increment_days(&mut self) {
        let days = self.store.config().refectory_days.saturating_add(1);
        self.store.set_refectory_days(days);
    }

    pub fn decrement_days(&mut self) {
        let days = self.store.config().refectory_days.saturating_sub(1);
        self.store.set_refectory_days(days);
    }

    pub fn remove_selected(&mut self) {
        let Some(i) = self.state.selected() else { return; };
        let Some(id) = self.store.config().others.get(i).map(|b| b.id.clone()) else { return; };

        match self.store.remove_benefit(&id) {
            Ok(Some(removed)) => {
                self.status = Some(format!("Removido: {}", removed.name));
                let len = self.benefit_count();
                if len == 0 {
                    self.state.select(None);
                } else if i >= len {
                    self.state.select(Some(len - 1));
                }
            }
            Ok(None) => {}
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn reset(&mut self) {
        self.store.reset();
        let len = self.benefit_count();
        self.state.select(if len == 0 { None } else { Some(0) });
        self.status = Some("Parâmetros restaurados para os padrões".to_string());
    }

    pub fn export(&mut self) {
        let date = self.store.date();
        let path = self.export_dir.join(format!("extrato_{:04}_{:02}.txt", date.year, date.month + 1));
        match fs::write(&path, render_text(&self.store.statement())) {
            Ok(()) => {
                info!("Statement exported to {}", path.display());
                self.status = Some(format!("Exportado para {}", path.display()));
            }
            Err(e) => {
                warn!("Export to {} failed: {}", path.display(), e);
                self.status = Some(format!("Falha ao exportar: {}", e));
            }
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::AddingBenefit;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn enter_days_mode(&mut self) {
        self.input_mode = InputMode::EditingDays;
        self.input = self.store.config().refectory_days.to_string();
        self.cursor_position = self.input.chars().count();
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        match self.input_mode {
            InputMode::AddingBenefit => self.submit_add(),
            InputMode::EditingDays => self.submit_days(),
            InputMode::Normal => {},
        }

        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }

    fn submit_add(&mut self) {
        let Some(parsed) = parse_benefit_input(&self.input) else {
            self.status = Some("Use: Nome valor (ex.: Auxílio Creche 150)".to_string());
            return;
        };

        match self.store.add_benefit(&parsed.name, &parsed.value) {
            AddBenefitOutcome::Added(_) => {
                self.state.select(Some(self.benefit_count() - 1));
                self.status = Some(format!("Adicionado: {}", parsed.name));
            }
            AddBenefitOutcome::Rejected(reason) => {
                self.status = Some(format!("Ignorado: {}", reason));
            }
        }
    }

    fn submit_days(&mut self) {
        match self.input.trim().parse::<u32>() {
            Ok(days) => self.store.set_refectory_days(days),
            Err(_) => self.status = Some(format!("Número de dias inválido: {}", self.input.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remunera_core::DateSelection;

    fn app() -> App {
        let store = ConfigurationStore::new(DateSelection::new(2024, 1));
        App::new(store, std::env::temp_dir())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.input_char(c);
        }
    }

    #[test]
    fn test_add_and_remove_benefit() {
        let mut app = app();
        app.enter_add_mode();
        type_text(&mut app, "Auxílio Creche 150");
        app.submit_command();

        assert_eq!(app.store.config().others.len(), 3);
        assert_eq!(app.state.selected(), Some(2));

        app.remove_selected();
        assert_eq!(app.store.config().others.len(), 2);
        assert_eq!(app.state.selected(), Some(1));
    }

    #[test]
    fn test_fixed_benefit_removal_is_refused() {
        let mut app = app();
        app.remove_selected();
        assert_eq!(app.store.config().others.len(), 2);
        assert!(app.status.as_deref().unwrap_or_default().contains("fixed"));
    }

    #[test]
    fn test_manual_days_then_calculated() {
        let mut app = app();
        app.enter_days_mode();
        app.delete_char();
        app.delete_char();
        type_text(&mut app, "10");
        app.submit_command();
        assert_eq!(app.store.config().refectory_days, 10);
        assert!(!app.store.config().use_calculated_days);

        app.next_month();
        assert_eq!(app.store.config().refectory_days, 10);

        app.use_calculated_days();
        assert_eq!(app.store.config().refectory_days, app.store.business_days());
    }

    #[test]
    fn test_month_navigation_wraps_year() {
        let mut app = app();
        app.previous_month();
        app.previous_month();
        assert_eq!(app.store.date(), DateSelection::new(2023, 11));
        assert_eq!(app.store.config().refectory_days, 21);
    }
}
