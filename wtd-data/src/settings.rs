use crate::simulator::DEFAULT_TICK_SECS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_REFRESH_SECS: u32 = 1;
pub const MAX_REFRESH_SECS: u32 = 10;

/// Retention choices offered in the settings panel, in days.
pub const RETENTION_CHOICES: [u32; 4] = [7, 30, 90, 365];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Whether the dark palette applies, given the OS preference.
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
            ThemePreference::System => system_prefers_dark,
        }
    }

    /// The header toggle flips between explicit light and dark.
    pub fn toggled(&self, system_prefers_dark: bool) -> ThemePreference {
        if self.is_dark(system_prefers_dark) {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        };
        f.write_str(label)
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemePreference::ALL
            .into_iter()
            .find(|t| t.key() == s.trim())
            .ok_or_else(|| format!("unknown theme: {}", s))
    }
}

pub fn retention_label(days: u32) -> String {
    if days == 365 {
        "1 year".to_string()
    } else {
        format!("{} days", days)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub email_alerts: bool,
    pub push_notifications: bool,
    /// Restrict the alerts panel and bell badge to critical entries.
    pub critical_only: bool,
    pub theme: ThemePreference,
    refresh_secs: u32,
    retention_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_alerts: true,
            push_notifications: true,
            critical_only: false,
            theme: ThemePreference::default(),
            refresh_secs: DEFAULT_TICK_SECS,
            retention_days: 30,
        }
    }
}

impl Settings {
    pub fn refresh_secs(&self) -> u32 {
        self.refresh_secs
    }

    /// Set the tick interval, clamped to the slider range.
    pub fn set_refresh_secs(&mut self, secs: u32) {
        self.refresh_secs = secs.clamp(MIN_REFRESH_SECS, MAX_REFRESH_SECS);
    }

    pub fn refresh_millis(&self) -> u32 {
        self.refresh_secs * 1000
    }

    pub fn retention_days(&self) -> u32 {
        self.retention_days
    }

    /// Accepts only one of [`RETENTION_CHOICES`]; other values are ignored.
    pub fn set_retention_days(&mut self, days: u32) -> bool {
        if RETENTION_CHOICES.contains(&days) {
            self.retention_days = days;
            true
        } else {
            log::warn!("Ignoring unsupported retention of {} days", days);
            false
        }
    }

    /// Restore every setting to its default.
    pub fn reset(&mut self) {
        *self = Settings::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.email_alerts && s.push_notifications);
        assert!(!s.critical_only);
        assert_eq!(s.theme, ThemePreference::Dark);
        assert_eq!(s.refresh_secs(), 3);
        assert_eq!(s.refresh_millis(), 3000);
        assert_eq!(s.retention_days(), 30);
    }

    #[test]
    fn refresh_is_clamped() {
        let mut s = Settings::default();
        s.set_refresh_secs(0);
        assert_eq!(s.refresh_secs(), 1);
        s.set_refresh_secs(25);
        assert_eq!(s.refresh_secs(), 10);
        s.set_refresh_secs(6);
        assert_eq!(s.refresh_secs(), 6);
    }

    #[test]
    fn retention_only_accepts_choices() {
        let mut s = Settings::default();
        assert!(s.set_retention_days(365));
        assert!(!s.set_retention_days(14));
        assert_eq!(s.retention_days(), 365);
        assert_eq!(retention_label(365), "1 year");
        assert_eq!(retention_label(90), "90 days");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = Settings::default();
        s.email_alerts = false;
        s.critical_only = true;
        s.theme = ThemePreference::Light;
        s.set_refresh_secs(9);
        s.set_retention_days(7);
        s.reset();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn theme_resolution() {
        assert!(ThemePreference::System.is_dark(true));
        assert!(!ThemePreference::System.is_dark(false));
        assert_eq!(ThemePreference::Dark.toggled(false), ThemePreference::Light);
        assert_eq!(ThemePreference::System.toggled(false), ThemePreference::Dark);
        assert_eq!("system".parse::<ThemePreference>(), Ok(ThemePreference::System));
        assert!("sepia".parse::<ThemePreference>().is_err());
    }
}
