//! The closed set of triage actions that can be bound to a key combo

use std::fmt;
use std::str::FromStr;

use super::error::SettingsError;
use super::TriageMode;

/// A named triage command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Keep,
    Delete,
    Undo,
    Preview,
    ExploreNext,
    ExplorePrevious,
    ExploreDelete,
}

impl Action {
    /// Every recognized action, in lookup priority order
    pub const ALL: [Action; 7] = [
        Action::Keep,
        Action::Delete,
        Action::Undo,
        Action::Preview,
        Action::ExploreNext,
        Action::ExplorePrevious,
        Action::ExploreDelete,
    ];

    /// Name used in the persisted document and on the command line
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Keep => "keep",
            Action::Delete => "delete",
            Action::Undo => "undo",
            Action::Preview => "preview",
            Action::ExploreNext => "exploreNext",
            Action::ExplorePrevious => "explorePrevious",
            Action::ExploreDelete => "exploreDelete",
        }
    }

    /// The mode this action belongs to, or None if it is shared by both
    pub const fn mode(self) -> Option<TriageMode> {
        match self {
            Action::Keep | Action::Delete => Some(TriageMode::Classic),
            Action::Undo | Action::Preview => None,
            Action::ExploreNext | Action::ExplorePrevious | Action::ExploreDelete => {
                Some(TriageMode::Explore)
            }
        }
    }

    pub fn is_active_in(self, mode: TriageMode) -> bool {
        match self.mode() {
            Some(m) => m == mode,
            None => true,
        }
    }

    /// Actions a triage screen in `mode` listens for
    pub fn active_in(mode: TriageMode) -> impl Iterator<Item = Action> {
        Self::ALL.into_iter().filter(move |a| a.is_active_in(mode))
    }

    /// Short description for settings screens
    pub const fn description(self) -> &'static str {
        match self {
            Action::Keep => "Keep file",
            Action::Delete => "Mark file for deletion",
            Action::Undo => "Undo last decision",
            Action::Preview => "Toggle preview",
            Action::ExploreNext => "Next item",
            Action::ExplorePrevious => "Previous item",
            Action::ExploreDelete => "Mark item for deletion",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| SettingsError::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "archive".parse::<Action>().unwrap_err();
        assert!(matches!(err, SettingsError::UnknownAction(ref name) if name == "archive"));
        // Names are exact, not case-folded
        assert!("Keep".parse::<Action>().is_err());
    }

    #[test]
    fn test_classic_mode_actions() {
        let actions: Vec<_> = Action::active_in(TriageMode::Classic).collect();
        assert_eq!(
            actions,
            vec![Action::Keep, Action::Delete, Action::Undo, Action::Preview]
        );
    }

    #[test]
    fn test_explore_mode_actions() {
        let actions: Vec<_> = Action::active_in(TriageMode::Explore).collect();
        assert_eq!(
            actions,
            vec![
                Action::Undo,
                Action::Preview,
                Action::ExploreNext,
                Action::ExplorePrevious,
                Action::ExploreDelete,
            ]
        );
    }
}
