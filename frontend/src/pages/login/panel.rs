use crate::{
    api::Session,
    pages::login::{components::form::LoginFormView, view_model::use_login_view_model},
};
use leptos::{ev::SubmitEvent, Callback, *};

/// Username/password form. `on_login` receives the session of each
/// successful attempt; what happens next is up to the caller.
#[component]
pub fn LoginForm(#[prop(into)] on_login: Callback<Session>) -> impl IntoView {
    let vm = use_login_view_model(on_login);
    let form = vm.form;

    let username_input = Callback::new(move |value: String| form.set_username(&value));
    let password_input = Callback::new(move |value: String| form.set_password(&value));

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    view! {
        <LoginFormView
            username=form.username.into()
            password=form.password.into()
            error=vm.error.into()
            can_submit=vm.can_submit
            on_username_input=username_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
