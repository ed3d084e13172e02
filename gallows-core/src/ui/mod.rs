//! UI state machine and screen renderer
//!
//! A [`Session`] owns every piece of UI and game state. Each poll cycle the
//! firmware feeds it at most one debounced button with
//! [`Session::handle`], lets it resolve game logic with
//! [`Session::update`], then calls [`Session::render`], which redraws the
//! whole screen only when something changed.

mod render;
pub mod session;

pub use session::{Session, Update};

/// Text lines a scrolling page shows at once; the last row holds the
/// key hints
pub const VISIBLE_LINES: u8 = 5;

/// Number of entries on the main menu
pub const MENU_ITEMS: u8 = 3;

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Main menu, initial page
    Menu,
    /// Letter carousel and round progress
    Play,
    /// "How To Play" text
    Help,
    /// Credits text
    About,
    Win,
    Lose,
}

impl Page {
    /// Page entered by confirming menu item `selection`
    pub fn from_menu(selection: u8) -> Option<Page> {
        match selection {
            0 => Some(Page::Play),
            1 => Some(Page::Help),
            2 => Some(Page::About),
            _ => None,
        }
    }

    /// Lines of scrollable text shown on this page
    pub fn text(&self) -> &'static [&'static str] {
        match self {
            Page::Help => &crate::content::HELP,
            Page::About => &crate::content::ABOUT,
            _ => &[],
        }
    }

    /// Key-hint bar drawn on the bottom row
    pub fn hints(&self) -> &'static str {
        match self {
            Page::Menu => "        ^    v    >",
            Page::Play | Page::Help | Page::About => "   <    ^    v    >",
            Page::Win | Page::Lose => "   <",
        }
    }
}
