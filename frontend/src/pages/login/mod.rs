use crate::api::Session;
use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = create_rw_signal(None::<Session>);
    view! { <SessionGate session=session /> }
}

fn store_session(session: RwSignal<Option<Session>>) -> Callback<Session> {
    Callback::new(move |value: Session| session.set(Some(value)))
}

/// Shows the login form until a session arrives.
#[component]
fn SessionGate(session: RwSignal<Option<Session>>) -> impl IntoView {
    let on_login = store_session(session);

    view! {
        <Show
            when=move || session.get().is_none()
            fallback=|| view! { <div class="alert alert-success">"Signed in"</div> }
        >
            <LoginForm on_login=on_login />
        </Show>
    }
}
