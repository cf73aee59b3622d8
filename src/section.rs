use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::LINKS;

/// Window after a nav click during which scroll observations are ignored,
/// so smooth scrolling past other sections does not steal the highlight.
pub const CLICK_COOLDOWN_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SectionName {
    #[default]
    Home,
    About,
    Certificate,
    Projects,
    Skills,
    Experience,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl SectionName {
    pub const ALL: [SectionName; 7] = [
        Self::Home,
        Self::About,
        Self::Certificate,
        Self::Projects,
        Self::Skills,
        Self::Experience,
        Self::Contact,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Certificate => "Certificate",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    /// Element id of the section on the home page.
    pub fn id(&self) -> &'static str {
        &self.hash()[1..]
    }

    pub fn hash(&self) -> &'static str {
        LINKS
            .iter()
            .find(|l| l.name == self.name())
            .map(|l| l.hash)
            .unwrap_or("#home")
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionName {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Decides which section the navigation highlights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTracker {
    active: SectionName,
    last_click_ms: Option<f64>,
    cooldown_ms: f64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(CLICK_COOLDOWN_MS)
    }
}

impl SectionTracker {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            active: SectionName::Home,
            last_click_ms: None,
            cooldown_ms,
        }
    }

    pub fn active(&self) -> SectionName {
        self.active
    }

    pub fn last_click_ms(&self) -> Option<f64> {
        self.last_click_ms
    }

    /// Explicit navigation wins immediately and opens the cooldown window.
    pub fn click(&mut self, section: SectionName, now_ms: f64) {
        self.active = section;
        self.last_click_ms = Some(now_ms);
    }

    /// A section crossed its visibility threshold. Returns true if the
    /// highlight moved.
    pub fn observe_visible(&mut self, section: SectionName, now_ms: f64) -> bool {
        if self.in_cooldown(now_ms) {
            return false;
        }
        if self.active == section {
            return false;
        }
        self.active = section;
        true
    }

    fn in_cooldown(&self, now_ms: f64) -> bool {
        match self.last_click_ms {
            Some(clicked) => now_ms - clicked <= self.cooldown_ms,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), SectionName::Home);
        assert!(tracker.last_click_ms().is_none());
    }

    #[test]
    fn test_observation_moves_highlight() {
        let mut tracker = SectionTracker::default();
        assert!(tracker.observe_visible(SectionName::About, 10.0));
        assert_eq!(tracker.active(), SectionName::About);
        // same section again is not a change
        assert!(!tracker.observe_visible(SectionName::About, 20.0));
    }

    #[test]
    fn test_click_suppresses_observations_during_cooldown() {
        let mut tracker = SectionTracker::new(1000.0);
        tracker.click(SectionName::Contact, 5_000.0);
        assert_eq!(tracker.active(), SectionName::Contact);

        // smooth scroll passes over Projects
        assert!(!tracker.observe_visible(SectionName::Projects, 5_400.0));
        assert_eq!(tracker.active(), SectionName::Contact);

        // after the cooldown the observer is trusted again
        assert!(tracker.observe_visible(SectionName::Skills, 6_001.0));
        assert_eq!(tracker.active(), SectionName::Skills);
    }

    #[test]
    fn test_last_observation_wins() {
        let mut tracker = SectionTracker::default();
        tracker.observe_visible(SectionName::Projects, 1.0);
        tracker.observe_visible(SectionName::Skills, 1.0);
        assert_eq!(tracker.active(), SectionName::Skills);
    }

    #[test]
    fn test_section_names_round_trip_nav_links() {
        for link in LINKS {
            let section: SectionName = link.name.parse().expect("nav link is a section");
            assert_eq!(section.hash(), link.hash);
            assert_eq!(section.id(), &link.hash[1..]);
        }
        assert_eq!(
            "Blog".parse::<SectionName>(),
            Err(UnknownSection("Blog".to_string()))
        );
    }
}
