//! Top-level menu of the interactive session.

/// One entry of the menu, decoded from the number the user types.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuOption {
    Receive,
    Stage,
    Dispatch,
    ShowInventory,
    Exit,
}

/// Menu text shown before every selection.
pub const MENU: &str = "\n--- Inventory Menu ---\n\
1. Receive lot\n\
2. Stage for outbound\n\
3. Dispatch outbound\n\
4. Show inventory\n\
5. Exit";

impl MenuOption {
    /// Decode a typed code; `None` is the caller's invalid-selection branch.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Receive),
            2 => Some(Self::Stage),
            3 => Some(Self::Dispatch),
            4 => Some(Self::ShowInventory),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_decode_to_menu_entries() {
        assert_eq!(MenuOption::from_code(1), Some(MenuOption::Receive));
        assert_eq!(MenuOption::from_code(2), Some(MenuOption::Stage));
        assert_eq!(MenuOption::from_code(3), Some(MenuOption::Dispatch));
        assert_eq!(MenuOption::from_code(4), Some(MenuOption::ShowInventory));
        assert_eq!(MenuOption::from_code(5), Some(MenuOption::Exit));
    }

    #[test]
    fn unknown_codes_decode_to_none() {
        assert_eq!(MenuOption::from_code(0), None);
        assert_eq!(MenuOption::from_code(6), None);
        assert_eq!(MenuOption::from_code(-1), None);
    }
}
