use leptos::prelude::*;

use super::credentials::{self, LoginError, LOGIN_DELAY_MS};
use super::storage;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub username: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let restored = storage::get_session();
    if let Some(user) = &restored {
        log::debug!("auth: session restored for {}", user);
    }
    let (auth_state, set_auth_state) = signal(AuthState { username: restored });

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

/// Проверка учётных данных с короткой паузой
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), LoginError> {
    gloo_timers::future::TimeoutFuture::new(LOGIN_DELAY_MS).await;

    match credentials::check_credentials(&username, &password) {
        Ok(user) => {
            log::info!("auth: {} logged in", user);
            storage::save_session(&user);
            set_auth_state.set(AuthState {
                username: Some(user),
            });
            Ok(())
        }
        Err(e) => {
            log::warn!("auth: login rejected for '{}'", username);
            Err(e)
        }
    }
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    log::info!("auth: logged out");
}
