use kindworld_core::Page;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sign-in")]
    SignIn,
    #[at("/dashboard")]
    Dashboard,
    #[at("/missions")]
    Missions,
    #[at("/certificates")]
    Certificates,
    #[at("/profile")]
    Profile,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_page(page: Page) -> Self {
        match page {
            Page::Landing => Self::Home,
            Page::SignIn => Self::SignIn,
            Page::Dashboard => Self::Dashboard,
            Page::Missions => Self::Missions,
            Page::Certificates => Self::Certificates,
            Page::Profile => Self::Profile,
        }
    }

    /// Page this URL stands for; the 404 route has none.
    #[must_use]
    pub const fn to_page(&self) -> Option<Page> {
        match self {
            Self::Home => Some(Page::Landing),
            Self::SignIn => Some(Page::SignIn),
            Self::Dashboard => Some(Page::Dashboard),
            Self::Missions => Some(Page::Missions),
            Self::Certificates => Some(Page::Certificates),
            Self::Profile => Some(Page::Profile),
            Self::NotFound => None,
        }
    }
}
