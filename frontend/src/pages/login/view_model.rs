use super::{
    repository::LoginRepository,
    utils::{self, LoginFormState},
};
use crate::api::{ApiClient, Session};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub can_submit: Signal<bool>,
    repository: LoginRepository,
    on_login: Callback<Session>,
}

pub fn use_login_view_model(on_login: Callback<Session>) -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    login_view_model(LoginRepository::new_with_client(Rc::new(api)), on_login)
}

pub fn login_view_model(repository: LoginRepository, on_login: Callback<Session>) -> LoginViewModel {
    let form = LoginFormState::default();
    let loading = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);
    let can_submit = Signal::derive(move || {
        utils::can_submit(&form.username.get(), &form.password.get(), loading.get())
    });

    LoginViewModel {
        form,
        loading,
        error,
        can_submit,
        repository,
        on_login,
    }
}

impl LoginViewModel {
    /// Starts a login attempt. Returns `false` without dispatching anything
    /// when the form is incomplete or an attempt is already in flight.
    pub fn submit(&self) -> bool {
        // Same predicate as the disabled button, so a forced second call
        // while `loading` is set never reaches the network.
        if !self.can_submit.get_untracked() {
            return false;
        }

        let request = self.form.to_request();
        self.error.set(None);
        self.loading.set(true);

        let repository = self.repository.clone();
        let loading = self.loading;
        let error = self.error;
        let on_login = self.on_login;
        spawn_local(async move {
            let result = repository.login(request).await;
            loading.set(false);
            match result {
                Ok(session) => on_login.call(session),
                Err(err) => error.set(Some(utils::failure_message(&err))),
            }
        });
        true
    }
}
