use crate::shared::data::mock;
use crate::shared::global_search::PermissionEvaluator;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;

/// Acting user of the session. There is no sign-in protocol: the user is
/// picked from the demo users.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn signed_in(user_info: UserInfo) -> Self {
        Self {
            user_info: Some(user_info),
        }
    }

    pub fn permissions(&self) -> PermissionEvaluator<'_> {
        PermissionEvaluator::new(self.user_info.as_ref())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = mock::users()
        .into_iter()
        .next()
        .map(AuthState::signed_in)
        .unwrap_or_default();
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Switch the acting user by id. Unknown ids sign the user out.
pub fn switch_user(set_auth_state: WriteSignal<AuthState>, user_id: &str) {
    let user = mock::users().into_iter().find(|u| u.id == user_id);
    log::info!(
        "acting user -> {}",
        user.as_ref().map(|u| u.username.as_str()).unwrap_or("<none>")
    );
    set_auth_state.set(AuthState { user_info: user });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_state_has_no_permissions() {
        let state = AuthState::default();
        assert!(!state.permissions().has_permission("view_customers"));
        assert!(state.permissions().has_permission(""));
    }

    #[test]
    fn test_signed_in_state_uses_role() {
        let admin = mock::users().into_iter().next().unwrap();
        let state = AuthState::signed_in(admin);
        assert!(state.permissions().has_permission("view_finance"));
    }
}
