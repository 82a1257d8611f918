use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Landing,
    SignIn,
    Dashboard,
    Missions,
    Certificates,
    Profile,
}

impl Page {
    /// Tabs reachable from the dashboard nav bar, in display order.
    pub const TABS: [Self; 4] = [
        Self::Dashboard,
        Self::Missions,
        Self::Certificates,
        Self::Profile,
    ];

    #[must_use]
    pub const fn requires_session(self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Missions | Self::Certificates | Self::Profile
        )
    }

    /// Locale key for the nav label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Landing => "nav.home",
            Self::SignIn => "nav.sign_in",
            Self::Dashboard => "nav.dashboard",
            Self::Missions => "nav.missions",
            Self::Certificates => "nav.certificates",
            Self::Profile => "nav.profile",
        }
    }
}

/// Whether a user-initiated navigation from `from` to `to` is honoured.
///
/// Sign-in completion and logout move between the public and authenticated
/// halves of the app through their own actions, never through this check.
#[must_use]
pub fn navigation_allowed(from: Page, to: Page, signed_in: bool) -> bool {
    if from == to {
        return true;
    }
    match (from, to) {
        (Page::Landing, Page::SignIn) | (Page::SignIn, Page::Landing) => !signed_in,
        (a, b) if a.requires_session() && b.requires_session() => signed_in,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_pages_swap_only_while_signed_out() {
        assert!(navigation_allowed(Page::Landing, Page::SignIn, false));
        assert!(navigation_allowed(Page::SignIn, Page::Landing, false));
        assert!(!navigation_allowed(Page::Landing, Page::SignIn, true));
    }

    #[test]
    fn dashboard_is_not_reachable_by_navigation_alone() {
        assert!(!navigation_allowed(Page::SignIn, Page::Dashboard, false));
        assert!(!navigation_allowed(Page::SignIn, Page::Dashboard, true));
        assert!(!navigation_allowed(Page::Landing, Page::Profile, false));
    }

    #[test]
    fn tabs_interchange_with_a_session() {
        for from in Page::TABS {
            for to in Page::TABS {
                assert!(navigation_allowed(from, to, true));
            }
        }
        assert!(!navigation_allowed(Page::Missions, Page::Profile, false));
        assert!(!navigation_allowed(Page::Dashboard, Page::Landing, true));
    }
}
