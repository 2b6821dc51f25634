//! Menu choices

use std::fmt;
use std::str::FromStr;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    List,
    View,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::List,
        MenuChoice::View,
        MenuChoice::Exit,
    ];

    /// Number typed to pick this entry
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Update => 2,
            MenuChoice::Delete => 3,
            MenuChoice::List => 4,
            MenuChoice::View => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add New Recipe",
            MenuChoice::Update => "Update Recipe",
            MenuChoice::Delete => "Delete Recipe",
            MenuChoice::List => "List Recipes",
            MenuChoice::View => "View Recipe",
            MenuChoice::Exit => "Exit",
        }
    }

    /// What the action was doing, for "Error while ..." messages
    pub fn activity(self) -> &'static str {
        match self {
            MenuChoice::Add => "adding recipe",
            MenuChoice::Update => "updating recipe",
            MenuChoice::Delete => "deleting recipe",
            MenuChoice::List => "listing recipes",
            MenuChoice::View => "viewing recipe",
            MenuChoice::Exit => "exiting",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    /// Accepts the entry number or its action word, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "add" => Ok(MenuChoice::Add),
            "2" | "update" => Ok(MenuChoice::Update),
            "3" | "delete" => Ok(MenuChoice::Delete),
            "4" | "list" => Ok(MenuChoice::List),
            "5" | "view" => Ok(MenuChoice::View),
            "6" | "exit" => Ok(MenuChoice::Exit),
            other => Err(other.to_string()),
        }
    }
}
