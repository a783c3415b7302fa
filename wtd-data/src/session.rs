use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    History,
    Alerts,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::History, Tab::Alerts, Tab::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::History => "History",
            Tab::Alerts => "Alerts",
            Tab::Settings => "Settings",
        }
    }
}

/// Overlays that slide over the page. At most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    MobileMenu,
    Alerts,
    PondMenu,
}

/// A monitored pond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pond(pub u8);

impl Pond {
    pub const ALL: [Pond; 4] = [Pond(1), Pond(2), Pond(3), Pond(4)];

    /// Seed for this pond's simulated history, so switching back to a pond
    /// shows the same past.
    pub fn seed(&self, base: u64) -> u64 {
        base ^ (self.0 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

impl Default for Pond {
    fn default() -> Self {
        Pond(3)
    }
}

impl fmt::Display for Pond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pond #{}", self.0)
    }
}

/// Navigation and overlay state for one browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    tab: Tab,
    open: Option<Panel>,
    pond: Pond,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn pond(&self) -> Pond {
        self.pond
    }

    pub fn open_panel(&self) -> Option<Panel> {
        self.open
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.open == Some(panel)
    }

    /// Open `panel`, closing whichever other one was open, or close it if it
    /// was already open.
    pub fn toggle(&mut self, panel: Panel) {
        self.open = if self.is_open(panel) { None } else { Some(panel) };
    }

    pub fn close(&mut self, panel: Panel) {
        if self.is_open(panel) {
            self.open = None;
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Switch tabs. Choosing a tab from the mobile menu also closes it.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.close(Panel::MobileMenu);
    }

    /// Switch ponds and close the pond menu. Returns whether the pond
    /// actually changed, in which case the caller regenerates history.
    pub fn select_pond(&mut self, pond: Pond) -> bool {
        self.close(Panel::PondMenu);
        if pond == self.pond {
            return false;
        }
        self.pond = pond;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_are_mutually_exclusive() {
        let mut session = Session::new();
        session.toggle(Panel::MobileMenu);
        assert!(session.is_open(Panel::MobileMenu));

        session.toggle(Panel::Alerts);
        assert_eq!(session.open_panel(), Some(Panel::Alerts));
        assert!(!session.is_open(Panel::MobileMenu));

        session.toggle(Panel::PondMenu);
        assert_eq!(session.open_panel(), Some(Panel::PondMenu));

        session.toggle(Panel::PondMenu);
        assert_eq!(session.open_panel(), None);
    }

    #[test]
    fn selecting_a_tab_closes_the_menu() {
        let mut session = Session::new();
        session.toggle(Panel::MobileMenu);
        session.select_tab(Tab::History);
        assert_eq!(session.tab(), Tab::History);
        assert_eq!(session.open_panel(), None);

        session.toggle(Panel::Alerts);
        session.select_tab(Tab::Settings);
        assert!(session.is_open(Panel::Alerts));
    }

    #[test]
    fn pond_selection() {
        let mut session = Session::new();
        assert_eq!(session.pond().to_string(), "Pond #3");
        session.toggle(Panel::PondMenu);
        assert!(!session.select_pond(Pond(3)));
        assert_eq!(session.open_panel(), None);
        assert!(session.select_pond(Pond(1)));
        assert_eq!(session.pond(), Pond(1));
    }

    #[test]
    fn pond_seeds_differ() {
        let seeds: Vec<u64> = Pond::ALL.iter().map(|p| p.seed(42)).collect();
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Pond(2).seed(42), Pond(2).seed(42));
    }
}
