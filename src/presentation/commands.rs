use crate::domain::entities::ViewMode;
use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

/// Key to action lookup, plus the keys shown in the footer.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(Action::Quit, key(KeyCode::Char('q')), true);
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );
        register(Action::ToggleSummary, key(KeyCode::Char('d')), true);
        register(Action::ToggleSummary, key(KeyCode::F(2)), false);

        register(Action::JumpToVenue, key(KeyCode::Char('1')), true);
        register(Action::JumpToAddons, key(KeyCode::Char('2')), true);
        register(Action::JumpToMeals, key(KeyCode::Char('3')), true);
        register(Action::NextSection, key(KeyCode::Tab), true);
        register(
            Action::PreviousSection,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(Action::PreviousSection, key(KeyCode::BackTab), false);

        register(Action::NavigateUp, key(KeyCode::Up), true);
        register(Action::NavigateUp, key(KeyCode::Char('k')), false);
        register(Action::NavigateDown, key(KeyCode::Down), true);
        register(Action::NavigateDown, key(KeyCode::Char('j')), false);

        register(Action::Increment, key(KeyCode::Char('+')), true);
        register(
            Action::Increment,
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT),
            false,
        );
        register(Action::Increment, key(KeyCode::Char('=')), false);
        register(Action::Increment, key(KeyCode::Right), false);
        register(Action::Increment, key(KeyCode::Char('l')), false);
        register(Action::Decrement, key(KeyCode::Char('-')), true);
        register(Action::Decrement, key(KeyCode::Left), false);
        register(Action::Decrement, key(KeyCode::Char('h')), false);
        register(Action::ToggleMeal, key(KeyCode::Char(' ')), true);
        register(Action::ToggleMeal, key(KeyCode::Enter), false);

        register(Action::IncreasePeople, key(KeyCode::Char('>')), true);
        register(
            Action::IncreasePeople,
            KeyEvent::new(KeyCode::Char('>'), KeyModifiers::SHIFT),
            false,
        );
        register(Action::DecreasePeople, key(KeyCode::Char('<')), true);
        register(
            Action::DecreasePeople,
            KeyEvent::new(KeyCode::Char('<'), KeyModifiers::SHIFT),
            false,
        );
        register(Action::EditPeople, key(KeyCode::Char('p')), true);
        register(Action::Cancel, key(KeyCode::Esc), true);

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[allow(missing_docs)]
impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default bindings with user overrides such as `"Ctrl+s" = "ToggleSummary"`.
    ///
    /// Overrides take precedence; unparsable key specs are skipped.
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();
        for (spec, action) in overrides {
            let Some(key) = parse_key_spec(spec) else {
                warn!(key = %spec, "Ignoring unparsable keybinding");
                continue;
            };
            registry.input_bindings.insert(0, (key, *action));
            registry.display_bindings.insert(*action, key);
        }
        registry
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Bindings shown in the footer for the current screen.
    pub fn footer_bindings(&self, mode: ViewMode) -> Vec<Keybind> {
        let visible: &[(Action, &'static str)] = match mode {
            ViewMode::Selecting => &[
                (Action::NextSection, "Section"),
                (Action::Increment, "Add"),
                (Action::Decrement, "Remove"),
                (Action::ToggleMeal, "Meal"),
                (Action::EditPeople, "People"),
                (Action::ToggleSummary, "Show Details"),
                (Action::Quit, "Quit"),
            ],
            ViewMode::Summarizing => &[
                (Action::ToggleSummary, "Back"),
                (Action::JumpToVenue, "Venue"),
                (Action::JumpToAddons, "Add-ons"),
                (Action::JumpToMeals, "Meals"),
                (Action::Quit, "Quit"),
            ],
        };

        visible
            .iter()
            .filter_map(|(action, label)| {
                self.get(*action)
                    .map(|key| Keybind::new(key, *action, *label))
            })
            .collect()
    }
}

/// Parses a key spec like `q`, `Ctrl+q`, `Alt+Enter` or `F2`.
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = spec.split('+').collect();
    // a lone "+" or a trailing "Ctrl++" names the plus key itself
    if spec.ends_with("++") || spec == "+" {
        parts.retain(|p| !p.is_empty());
        parts.push("+");
    }
    let (last, prefixes) = parts.split_last()?;

    for prefix in prefixes {
        match prefix.to_lowercase().as_str() {
            "ctrl" | "c" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "a" => modifiers |= KeyModifiers::ALT,
            "shift" | "s" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match last.to_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        lower => {
            let mut chars = last.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    let n = lower.strip_prefix('f')?.parse().ok()?;
                    KeyCode::F(n)
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("q", KeyCode::Char('q'), KeyModifiers::NONE ; "plain_char")]
    #[test_case("Ctrl+q", KeyCode::Char('q'), KeyModifiers::CONTROL ; "ctrl")]
    #[test_case("Alt+Enter", KeyCode::Enter, KeyModifiers::ALT ; "alt_enter")]
    #[test_case("F2", KeyCode::F(2), KeyModifiers::NONE ; "function_key")]
    #[test_case("+", KeyCode::Char('+'), KeyModifiers::NONE ; "plus")]
    #[test_case("Ctrl++", KeyCode::Char('+'), KeyModifiers::CONTROL ; "ctrl_plus")]
    #[test_case("space", KeyCode::Char(' '), KeyModifiers::NONE ; "space")]
    fn test_parse_key_spec(spec: &str, code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(parse_key_spec(spec), Some(KeyEvent::new(code, modifiers)));
    }

    #[test_case("Hyper+q" ; "unknown_modifier")]
    #[test_case("Fx" ; "bad_function_key")]
    #[test_case("" ; "empty")]
    fn test_parse_key_spec_rejects(spec: &str) {
        assert_eq!(parse_key_spec(spec), None);
    }

    #[test]
    fn test_default_lookup() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.find_action(KeyEvent::from(KeyCode::Char('+'))),
            Some(Action::Increment)
        );
        assert_eq!(
            registry.find_action(KeyEvent::from(KeyCode::Char('z'))),
            None
        );
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = HashMap::new();
        overrides.insert("Ctrl+s".to_string(), Action::ToggleSummary);
        overrides.insert("q".to_string(), Action::Cancel);
        overrides.insert("Nope+x".to_string(), Action::Quit);

        let registry = CommandRegistry::with_overrides(&overrides);

        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Action::ToggleSummary)
        );
        assert_eq!(
            registry.find_action(KeyEvent::from(KeyCode::Char('q'))),
            Some(Action::Cancel)
        );
        assert_eq!(
            registry.get(Action::ToggleSummary),
            Some(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
        );
    }

    #[test]
    fn test_footer_bindings_follow_mode() {
        let registry = CommandRegistry::new();
        let selecting = registry.footer_bindings(ViewMode::Selecting);
        let summarizing = registry.footer_bindings(ViewMode::Summarizing);

        assert!(selecting.iter().any(|k| k.label == "Show Details"));
        assert!(summarizing.iter().any(|k| k.label == "Back"));
        assert!(!summarizing.iter().any(|k| k.action == Action::Increment));
    }
}
