use kindworld_core::{Action, AppStore};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper so the store can live in a `use_reducer` handle.
#[derive(Clone, Debug, PartialEq)]
pub struct AppModel(pub Rc<AppStore>);

impl AppModel {
    #[must_use]
    pub fn new(store: AppStore) -> Self {
        Self(Rc::new(store))
    }
}

impl std::ops::Deref for AppModel {
    type Target = AppStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(crate::app::bootstrap::boot_store())
    }
}

impl Reducible for AppModel {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self.0).clone().reduce(action);
        Rc::new(Self::new(next))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: UseReducerHandle<AppModel>,
    pub high_contrast: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        store: use_reducer(AppModel::default),
        high_contrast: use_state(crate::a11y::high_contrast_enabled),
    }
}

impl AppState {
    /// Shared handle to the current store, cheap to hand to page props.
    #[must_use]
    pub fn store(&self) -> Rc<AppStore> {
        Rc::clone(&self.store.0)
    }

    #[must_use]
    pub fn dispatcher(&self) -> UseReducerDispatcher<AppModel> {
        self.store.dispatcher()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindworld_core::{Page, Role};

    #[test]
    fn reducer_applies_actions_to_a_fresh_store() {
        let start = Rc::new(AppModel::new(AppStore::from_static(3)));
        let next = Rc::clone(&start).reduce(Action::Navigate(Page::SignIn));
        assert_eq!(next.0.page(), Page::SignIn);
        assert_eq!(start.0.page(), Page::Landing);
    }

    #[test]
    fn reducer_chains_sign_in() {
        let model = Rc::new(AppModel::new(AppStore::from_static(3)))
            .reduce(Action::Navigate(Page::SignIn))
            .reduce(Action::BeginSignIn(Role::Organization))
            .reduce(Action::CompleteSignIn);
        assert_eq!(model.0.page(), Page::Dashboard);
        assert_eq!(model.0.user().map(|u| u.role), Some(Role::Organization));
    }
}
