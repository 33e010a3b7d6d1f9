//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::has_shortcut_modifier;
use crate::state::{field_at_row, form_columns, AppState, SignupField};
use crate::validation::{EmailValidator, RegexEmailValidator};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Email collaborator consulted by the validity predicate
    validator: Box<dyn EmailValidator>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance with the regex email validator
    pub fn new(config: TuiConfig) -> Self {
        Self::with_validator(config, Box::new(RegexEmailValidator))
    }

    /// Create a new App instance with a custom email validator
    pub fn with_validator(config: TuiConfig, validator: Box<dyn EmailValidator>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            config,
            validator,
            quit: false,
            terminal_size: None,
        };
        app.refresh();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the password is drawn masked
    pub fn mask_password(&self) -> bool {
        self.config.mask_password() && !self.state.reveal_password
    }

    /// Recompute derived state after a mutation
    pub fn refresh(&mut self) {
        self.state.refresh_validity(self.validator.as_ref());
    }

    /// Submit the form through the validity check
    fn submit(&mut self) {
        self.state.submit_form(self.validator.as_ref());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            tracing::info!("Quit requested");
            self.quit = true;
            return Ok(());
        }

        // Alert is modal: only dismissal gets through
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.alerts.dismiss();
            }
            return Ok(());
        }

        self.handle_form_key(key)?;
        self.refresh();
        Ok(())
    }

    /// Handle keys in the sign-up form
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_role = self.state.form.focus == SignupField::Role;
        let shortcut = has_shortcut_modifier(key.modifiers);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('r') if shortcut => {
                self.state.reveal_password = !self.state.reveal_password;
            }
            // Enter submits from any field, like an HTML form
            KeyCode::Enter => self.submit(),
            // Role selection
            KeyCode::Right | KeyCode::Char(' ') if on_role => self.state.form.select_next_role(),
            KeyCode::Left if on_role => self.state.form.select_prev_role(),
            // Field input
            KeyCode::Char(c) if !shortcut => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_alert() {
            return Ok(());
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
            let (form_x, form_width) = form_columns(width);
            let in_form = mouse.column >= form_x && mouse.column < form_x + form_width;

            if let Some(target) = field_at_row(mouse.row).filter(|_| in_form) {
                self.state.form.focus_field(target);
                if target == SignupField::SubmitButton {
                    self.submit();
                }
            }
        }

        self.refresh();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Role, SignupForm};
    use crate::validation::MockEmailValidator;

    fn app_with(valid_email: bool) -> App {
        let mut validator = MockEmailValidator::new();
        validator.expect_validate().returning(move |_| valid_email);
        App::with_validator(TuiConfig::default(), Box::new(validator))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
        .unwrap();
    }

    /// Fill every field through the keyboard, ending on the button
    fn fill_form(app: &mut App, email: &str, password: &str) {
        type_text(app, "John");
        press(app, KeyCode::Tab);
        type_text(app, "Doe");
        press(app, KeyCode::Tab);
        type_text(app, email);
        press(app, KeyCode::Tab);
        type_text(app, password);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Char('i'));
        press(app, KeyCode::Tab);
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            let app = app_with(true);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = app_with(true);
            press_ctrl(&mut app, 'c');
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits_while_alert_open() {
            let mut app = app_with(true);
            fill_form(&mut app, "john.doe@example.com", "password123");
            press(&mut app, KeyCode::Enter);
            assert!(app.state.has_alert());
            press_ctrl(&mut app, 'c');
            assert!(app.should_quit());
        }

        #[test]
        fn test_starts_unable_to_submit() {
            let app = app_with(true);
            assert!(!app.state.can_submit);
        }

        #[test]
        fn test_new_uses_regex_validator() {
            let mut app = App::new(TuiConfig::default());
            fill_form(&mut app, "john.doe@example.com", "password123");
            assert!(app.state.can_submit);

            let mut app = App::new(TuiConfig::default());
            fill_form(&mut app, "not-an-email", "password123");
            assert!(!app.state.can_submit);
        }
    }

    mod keyboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = app_with(true);
            type_text(&mut app, "John");
            assert_eq!(app.state.form.first_name.as_text(), "John");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.first_name.as_text(), "Joh");
        }

        #[test]
        fn test_tab_and_backtab_move_focus() {
            let mut app = app_with(true);
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.form.focus, SignupField::LastName);
            press(&mut app, KeyCode::BackTab);
            assert_eq!(app.state.form.focus, SignupField::FirstName);
            press(&mut app, KeyCode::Up);
            assert_eq!(app.state.form.focus, SignupField::SubmitButton);
            press(&mut app, KeyCode::Down);
            assert_eq!(app.state.form.focus, SignupField::FirstName);
        }

        #[test]
        fn test_blurring_short_password_shows_error() {
            let mut app = app_with(true);
            app.state.form.focus_field(SignupField::Password);
            type_text(&mut app, "short");
            assert!(app.state.form.password_error().is_none());
            press(&mut app, KeyCode::Tab);
            assert!(app.state.form.password_error().is_some());
        }

        #[test]
        fn test_lengthening_password_hides_error() {
            let mut app = app_with(true);
            app.state.form.focus_field(SignupField::Password);
            type_text(&mut app, "short");
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::BackTab);
            type_text(&mut app, "er123");
            assert!(app.state.form.password.touched);
            assert!(app.state.form.password_error().is_none());
        }

        #[test]
        fn test_role_keys() {
            let mut app = app_with(true);
            app.state.form.focus_field(SignupField::Role);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.form.selected_role(), Role::Individual);
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(app.state.form.selected_role(), Role::Business);
            press(&mut app, KeyCode::Left);
            assert_eq!(app.state.form.selected_role(), Role::Individual);
            press(&mut app, KeyCode::Char('b'));
            assert_eq!(app.state.form.selected_role(), Role::Business);
        }

        #[test]
        fn test_space_is_text_outside_role() {
            let mut app = app_with(true);
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(app.state.form.first_name.as_text(), " ");
            assert_eq!(app.state.form.selected_role(), Role::Unselected);
        }

        #[test]
        fn test_shortcut_chars_are_not_typed() {
            let mut app = app_with(true);
            press_ctrl(&mut app, 'r');
            assert!(app.state.reveal_password);
            assert_eq!(app.state.form.first_name.as_text(), "");
            press_ctrl(&mut app, 'r');
            assert!(!app.state.reveal_password);
        }

        #[test]
        fn test_mask_follows_config_and_reveal() {
            let mut app = app_with(true);
            assert!(app.mask_password());
            app.state.reveal_password = true;
            assert!(!app.mask_password());

            let config = TuiConfig {
                mask_password: Some(false),
                ..Default::default()
            };
            let mut validator = MockEmailValidator::new();
            validator.expect_validate().returning(|_| false);
            let app = App::with_validator(config, Box::new(validator));
            assert!(!app.mask_password());
        }

        #[test]
        fn test_can_submit_tracks_every_change() {
            let mut app = app_with(true);
            fill_form(&mut app, "john.doe@example.com", "password123");
            assert!(app.state.can_submit);
            app.state.form.focus_field(SignupField::Password);
            press(&mut app, KeyCode::Backspace);
            press(&mut app, KeyCode::Backspace);
            press(&mut app, KeyCode::Backspace);
            press(&mut app, KeyCode::Backspace);
            assert!(!app.state.can_submit);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submission_alerts_once_and_resets() {
            let mut app = app_with(true);
            fill_form(&mut app, "john.doe@example.com", "password123");
            assert!(app.state.form.is_button_focused());

            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.alerts.len(), 1);
            assert_eq!(app.state.alerts.current(), Some("Account created!"));
            assert_eq!(app.state.form, SignupForm::new());
            assert!(!app.state.can_submit);
        }

        #[test]
        fn test_invalid_email_is_not_submitted() {
            let mut app = app_with(false);
            fill_form(&mut app, "invalid-email", "short");
            let before = app.state.form.clone();

            press(&mut app, KeyCode::Enter);

            assert!(app.state.alerts.is_empty());
            assert_eq!(app.state.form, before);
        }

        #[test]
        fn test_ctrl_s_submits_from_any_field() {
            let mut app = app_with(true);
            fill_form(&mut app, "john.doe@example.com", "password123");
            app.state.form.focus_field(SignupField::Email);
            press_ctrl(&mut app, 's');
            assert_eq!(app.state.alerts.len(), 1);
        }

        #[test]
        fn test_alert_blocks_input_until_dismissed() {
            let mut app = app_with(true);
            fill_form(&mut app, "john.doe@example.com", "password123");
            press(&mut app, KeyCode::Enter);

            type_text(&mut app, "ignored");
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.form, SignupForm::new());

            press(&mut app, KeyCode::Esc);
            assert!(!app.state.has_alert());
            type_text(&mut app, "Jane");
            assert_eq!(app.state.form.first_name.as_text(), "Jane");
        }

        #[test]
        fn test_enter_dismisses_alert_without_resubmitting() {
            let mut app = app_with(true);
            fill_form(&mut app, "john.doe@example.com", "password123");
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
            assert!(app.state.alerts.is_empty());
        }
    }

    mod mouse {
        use super::*;
        use pretty_assertions::assert_eq;

        // Default terminal width 80 puts the form in columns 10..70

        #[test]
        fn test_click_focuses_field() {
            let mut app = app_with(true);
            click(&mut app, 30, 9);
            assert_eq!(app.state.form.focus, SignupField::Email);
        }

        #[test]
        fn test_click_away_from_password_touches_it() {
            let mut app = app_with(true);
            click(&mut app, 30, 12);
            assert_eq!(app.state.form.focus, SignupField::Password);
            assert!(!app.state.form.password.touched);
            click(&mut app, 30, 16);
            assert_eq!(app.state.form.focus, SignupField::Role);
            assert!(app.state.form.password.touched);
        }

        #[test]
        fn test_click_outside_form_is_ignored() {
            let mut app = app_with(true);
            click(&mut app, 2, 9);
            click(&mut app, 30, 0);
            click(&mut app, 30, 1);
            click(&mut app, 30, 14);
            assert_eq!(app.state.form.focus, SignupField::FirstName);
        }

        #[test]
        fn test_click_on_button_submits() {
            let mut app = app_with(true);
            fill_form(&mut app, "john.doe@example.com", "password123");
            app.state.form.focus_field(SignupField::FirstName);
            click(&mut app, 30, 19);
            assert_eq!(app.state.alerts.current(), Some("Account created!"));
        }

        #[test]
        fn test_click_on_button_submits_on_standard_terminal() {
            let mut app = app_with(true);
            app.terminal_size = Some((24, 80));
            fill_form(&mut app, "john.doe@example.com", "password123");
            app.state.form.focus_field(SignupField::Email);
            click(&mut app, 30, 20);
            assert_eq!(app.state.alerts.len(), 1);
        }

        #[test]
        fn test_click_on_disabled_button_does_nothing() {
            let mut app = app_with(true);
            click(&mut app, 30, 19);
            assert!(app.state.alerts.is_empty());
            assert_eq!(app.state.form.focus, SignupField::SubmitButton);
        }

        #[test]
        fn test_clicks_ignored_while_alert_open() {
            let mut app = app_with(true);
            fill_form(&mut app, "john.doe@example.com", "password123");
            press(&mut app, KeyCode::Enter);
            click(&mut app, 30, 9);
            assert_eq!(app.state.form.focus, SignupField::FirstName);
        }

        #[test]
        fn test_terminal_width_shifts_form() {
            let mut app = app_with(true);
            app.terminal_size = Some((30, 120));
            click(&mut app, 20, 9);
            assert_eq!(app.state.form.focus, SignupField::FirstName);
            click(&mut app, 40, 9);
            assert_eq!(app.state.form.focus, SignupField::Email);
        }
    }
}
