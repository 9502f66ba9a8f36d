//! Menu actions

use core::fmt;

/// What a menu choice does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Text → Morse, then optionally play it
    EncodeText,
    /// Morse → text, then optionally play the Morse input
    DecodeMorse,
    /// Play Morse without converting
    PlayMorse,
    Exit,
}

/// Action descriptor
pub struct ActionDescriptor {
    pub choice: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

/// All menu entries, in display order
pub static ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        choice: "1",
        label: "Convert Text to Morse Code and Optionally Play Sound",
        action: MenuAction::EncodeText,
    },
    ActionDescriptor {
        choice: "2",
        label: "Convert Morse Code to Text and Optionally Play Sound",
        action: MenuAction::DecodeMorse,
    },
    ActionDescriptor {
        choice: "3",
        label: "Play Morse Code Sound",
        action: MenuAction::PlayMorse,
    },
    ActionDescriptor {
        choice: "4",
        label: "Exit",
        action: MenuAction::Exit,
    },
];

/// Look up the action for a typed choice
pub fn find_action(choice: &str) -> Option<MenuAction> {
    ACTIONS.iter().find(|a| a.choice == choice).map(|a| a.action)
}

/// Valid choices, in display order
pub fn action_choices() -> impl Iterator<Item = &'static str> {
    ACTIONS.iter().map(|a| a.choice)
}

impl fmt::Display for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.choice, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_choices_in_order() {
        assert_eq!(action_choices().collect::<Vec<_>>(), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_find_action() {
        assert_eq!(find_action("3"), Some(MenuAction::PlayMorse));
        assert_eq!(find_action("4"), Some(MenuAction::Exit));
        assert_eq!(find_action("5"), None);
        assert_eq!(find_action(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ACTIONS[3].to_string(), "4. Exit");
    }
}
