//! Keyboard input dispatch — global keys, then pane-specific handlers.
//!
//! Text fields are always live while focused, so field navigation uses
//! Up/Down/Tab rather than vim letters; j/k scroll only on the plan page.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Field, Pane};

const MAX_DIFF_MIN: f64 = 1.0;
const MAX_DIFF_MAX: f64 = 100.0;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global keys.
    match key.code {
        KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Enter => {
            app.run_plan();
            return;
        }
        KeyCode::Tab => {
            app.active_pane = match app.active_pane {
                Pane::Sidebar => Pane::Page,
                Pane::Page => Pane::Sidebar,
            };
            return;
        }
        _ => {}
    }

    match app.active_pane {
        Pane::Sidebar => handle_sidebar_key(app, key),
        Pane::Page => handle_page_key(app, key),
    }
}

fn handle_sidebar_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Down => {
            app.active_field = app.active_field.next();
            return;
        }
        KeyCode::Up => {
            app.active_field = app.active_field.prev();
            return;
        }
        _ => {}
    }

    match app.active_field {
        Field::Coin => match key.code {
            KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                app.form.coin.push(c);
            }
            KeyCode::Backspace => {
                app.form.coin.pop();
            }
            _ => {}
        },
        Field::Portfolio => edit_numeric(&mut app.form.portfolio_input, key),
        Field::Price => edit_numeric(&mut app.form.price_input, key),
        Field::Side => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('h') | KeyCode::Char('l')
            | KeyCode::Left | KeyCode::Right => {
                app.form.side = app.form.side.toggled();
            }
            _ => {}
        },
        Field::MaxDiff => {
            let step = if key.modifiers.contains(KeyModifiers::SHIFT) { 5.0 } else { 1.0 };
            match key.code {
                KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Left => {
                    app.form.max_percent_diff =
                        (app.form.max_percent_diff - step).max(MAX_DIFF_MIN);
                }
                KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Right => {
                    app.form.max_percent_diff =
                        (app.form.max_percent_diff + step).min(MAX_DIFF_MAX);
                }
                _ => {}
            }
        }
    }
}

fn edit_numeric(buffer: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => buffer.push(c),
        KeyCode::Char('.') if !buffer.contains('.') => buffer.push('.'),
        KeyCode::Backspace => {
            buffer.pop();
        }
        _ => {}
    }
}

fn handle_page_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.page_scroll = app.page_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.page_scroll = app.page_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.page_scroll = 0;
        }
        KeyCode::PageDown => {
            app.page_scroll = app.page_scroll.saturating_add(10);
        }
        KeyCode::PageUp => {
            app.page_scroll = app.page_scroll.saturating_sub(10);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcaplan_core::Side;
    use std::path::PathBuf;

    fn app() -> AppState {
        AppState::new(PathBuf::from("/tmp/dcaplan-input-test.json"))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    #[test]
    fn esc_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn down_moves_field_focus() {
        let mut app = app();
        assert_eq!(app.active_field, Field::Coin);
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.active_field, Field::Portfolio);
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.active_field, Field::Coin);
    }

    #[test]
    fn coin_field_accepts_alphanumerics_only() {
        let mut app = app();
        app.form.coin.clear();
        handle_key(&mut app, press(KeyCode::Char('e')));
        handle_key(&mut app, press(KeyCode::Char('t')));
        handle_key(&mut app, press(KeyCode::Char('h')));
        handle_key(&mut app, press(KeyCode::Char('!')));
        assert_eq!(app.form.coin, "eth");
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.form.coin, "et");
    }

    #[test]
    fn numeric_field_rejects_second_decimal_point() {
        let mut app = app();
        app.active_field = Field::Price;
        app.form.price_input.clear();
        for c in ['3', '0', '.', '5', '.'] {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.form.price_input, "30.5");
    }

    #[test]
    fn side_toggles_with_space() {
        let mut app = app();
        app.active_field = Field::Side;
        assert_eq!(app.form.side, Side::Long);
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.form.side, Side::Short);
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.form.side, Side::Long);
    }

    #[test]
    fn slider_clamps_to_range() {
        let mut app = app();
        app.active_field = Field::MaxDiff;
        app.form.max_percent_diff = 2.0;
        for _ in 0..5 {
            handle_key(&mut app, press(KeyCode::Left));
        }
        assert_eq!(app.form.max_percent_diff, 1.0);

        app.form.max_percent_diff = 99.0;
        for _ in 0..5 {
            handle_key(&mut app, shift(KeyCode::Char('L')));
        }
        assert_eq!(app.form.max_percent_diff, 100.0);
    }

    #[test]
    fn enter_computes_from_any_pane() {
        let mut app = app();
        app.active_pane = Pane::Page;
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.plan.is_some());
    }

    #[test]
    fn page_scroll_keys() {
        let mut app = app();
        app.active_pane = Pane::Page;
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.page_scroll, 2);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.page_scroll, 0);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.page_scroll, 0);
    }

    #[test]
    fn typing_q_in_coin_field_does_not_quit() {
        let mut app = app();
        app.form.coin.clear();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.form.coin, "q");
    }
}
