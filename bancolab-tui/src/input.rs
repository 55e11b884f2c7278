//! Keyboard input dispatch — global keys first, then section selectors.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Section};

/// Handle a key event by mutating the app state.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('1') => app.section = Section::Prices,
        KeyCode::Char('2') => app.section = Section::Financials,
        KeyCode::Char('3') => app.section = Section::Esg,
        KeyCode::Char('4') => app.section = Section::Comparison,
        KeyCode::Char('5') => app.section = Section::Risks,
        KeyCode::Char('6') | KeyCode::Char('?') => app.section = Section::Help,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.section = app.section.prev();
            } else {
                app.section = app.section.next();
            }
        }
        KeyCode::BackTab => app.section = app.section.prev(),
        KeyCode::Char('j') | KeyCode::Down => {
            app.next_bank();
            app.status_message = None;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.prev_bank();
            app.status_message = None;
        }
        KeyCode::Char('p') => {
            app.next_provider();
            if let Some(provider) = app.selected_provider() {
                app.set_status(format!("Rating provider: {provider}"));
            }
        }
        KeyCode::Char('t') => {
            app.next_horizon();
            app.set_status(format!(
                "Horizonte: {} ({})",
                app.horizon.label(),
                app.horizon.description()
            ));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixture_store;
    use bancolab_core::domain::Horizon;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let mut app = AppState::new(fixture_store());
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn number_keys_jump_to_sections() {
        let mut app = AppState::new(fixture_store());
        handle_key(&mut app, press(KeyCode::Char('5')));
        assert_eq!(app.section, Section::Risks);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.section, Section::Prices);
    }

    #[test]
    fn tab_cycles_sections() {
        let mut app = AppState::new(fixture_store());
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.section, Section::Financials);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.section, Section::Prices);
    }

    #[test]
    fn j_and_k_change_the_bank() {
        let mut app = AppState::new(fixture_store());
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.selected_bank(), "BBVA");
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.selected_bank(), "Santander");
    }

    #[test]
    fn t_cycles_the_horizon_and_reports_it() {
        let mut app = AppState::new(fixture_store());
        handle_key(&mut app, press(KeyCode::Char('t')));
        assert_eq!(app.horizon, Horizon::Mp);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = AppState::new(fixture_store());
        let mut release = press(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert!(app.running);
    }

    proptest::proptest! {
        /// Mashing arbitrary keys never drives a selector out of range.
        #[test]
        fn arbitrary_key_mashing_keeps_selectors_in_range(
            chars in proptest::collection::vec(proptest::char::range(' ', '~'), 0..64),
        ) {
            let mut app = AppState::new(fixture_store());
            for c in chars {
                handle_key(&mut app, press(KeyCode::Char(c)));
            }
            proptest::prop_assert!(app.bank_idx < app.store.banks().len());
            proptest::prop_assert!(app.provider_idx < app.store.rating_providers().len());
        }
    }
}
