//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use leadform::{FieldId, Phase};

/// What a key press asks the kiosk to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Advance,
    Retreat,
    Input(char),
    Backspace,
    ToggleConsent,
    ToggleAdmin,
    ExportCsv,
    ExportTxt,
    DismissThankYou,
    Quit,
}

/// Ctrl+Shift+A. Terminals that fold Shift into the character report it as
/// an uppercase `A` with only Control set.
pub fn is_admin_chord(key: &KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('A') => ctrl,
        KeyCode::Char('a') => ctrl && shift,
        _ => false,
    }
}

/// Map a key press to an action for the given phase.
pub fn map_key(key: &KeyEvent, phase: Phase) -> Option<Action> {
    if is_admin_chord(key) {
        return Some(Action::ToggleAdmin);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::F(2) => return Some(Action::ExportCsv),
        KeyCode::F(3) => return Some(Action::ExportTxt),
        _ => {}
    }

    match phase {
        Phase::NotStarted => matches!(key.code, KeyCode::Enter).then_some(Action::Start),
        Phase::ShowingThankYou { .. } => {
            matches!(key.code, KeyCode::Enter).then_some(Action::DismissThankYou)
        }
        Phase::OnStep(step) => match key.code {
            KeyCode::Enter | KeyCode::Down => Some(Action::Advance),
            KeyCode::Up => Some(Action::Retreat),
            KeyCode::Backspace if step.is_text() => Some(Action::Backspace),
            KeyCode::Char(' ') if step == FieldId::Consent => Some(Action::ToggleConsent),
            KeyCode::Char(c) if step.is_text() && !ctrl && !alt => Some(Action::Input(c)),
            _ => None,
        },
    }
}
