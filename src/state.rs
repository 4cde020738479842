use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

impl AuthTab {
    pub fn label(self) -> &'static str {
        match self {
            AuthTab::Login => "Entrar",
            AuthTab::Signup => "Criar conta",
        }
    }

    pub fn heading(self) -> &'static str {
        self.label()
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthTab::Login => "Entrar",
            AuthTab::Signup => "Cadastrar",
        }
    }

    pub fn all() -> [AuthTab; 2] {
        [AuthTab::Login, AuthTab::Signup]
    }
}

/// Visibility of the login/signup modal together with its active tab.
/// The tab only lives while the modal is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthModalState {
    pub open: bool,
    pub tab: AuthTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthModalAction {
    Open,
    Close,
    SelectTab(AuthTab),
}

impl Reducible for AuthModalState {
    type Action = AuthModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthModalAction::Open if !self.open => Rc::new(AuthModalState {
                open: true,
                tab: AuthTab::default(),
            }),
            AuthModalAction::Close if self.open => Rc::new(AuthModalState::default()),
            AuthModalAction::SelectTab(tab) if self.open && self.tab != tab => {
                Rc::new(AuthModalState { open: true, tab })
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[AuthModalAction]) -> AuthModalState {
        let mut state = Rc::new(AuthModalState::default());
        for &a in actions {
            state = state.reduce(a);
        }
        (*state).clone()
    }

    #[test]
    fn starts_closed_on_login() {
        let s = AuthModalState::default();
        assert!(!s.open);
        assert_eq!(s.tab, AuthTab::Login);
    }

    #[test]
    fn open_then_select_signup() {
        let s = run(&[AuthModalAction::Open, AuthModalAction::SelectTab(AuthTab::Signup)]);
        assert!(s.open);
        assert_eq!(s.tab, AuthTab::Signup);
        assert_eq!(s.tab.heading(), "Criar conta");
        assert_eq!(s.tab.submit_label(), "Cadastrar");
    }

    #[test]
    fn reopening_resets_to_login() {
        let s = run(&[
            AuthModalAction::Open,
            AuthModalAction::SelectTab(AuthTab::Signup),
            AuthModalAction::Close,
            AuthModalAction::Open,
        ]);
        assert!(s.open);
        assert_eq!(s.tab, AuthTab::Login);
    }

    #[test]
    fn close_hides_modal() {
        let s = run(&[AuthModalAction::Open, AuthModalAction::Close]);
        assert_eq!(s, AuthModalState::default());
    }

    #[test]
    fn tab_select_while_closed_is_ignored() {
        let s = run(&[AuthModalAction::SelectTab(AuthTab::Signup)]);
        assert_eq!(s, AuthModalState::default());
    }

    #[test]
    fn repeated_open_keeps_tab() {
        let s = run(&[
            AuthModalAction::Open,
            AuthModalAction::SelectTab(AuthTab::Signup),
            AuthModalAction::Open,
        ]);
        assert_eq!(s.tab, AuthTab::Signup);
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let closed = Rc::new(AuthModalState::default());
        let same = closed.clone().reduce(AuthModalAction::Close);
        assert!(Rc::ptr_eq(&closed, &same));
    }
}
