use crate::pages::login::components::messages::LoginErrorBanner;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginFormView(
    username: Signal<String>,
    password: Signal<String>,
    error: Signal<Option<String>>,
    can_submit: Signal<bool>,
    on_username_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="tr-Login">
            <form on:submit=move |ev| on_submit.call(ev)>
                <LoginErrorBanner error=error />
                <div class="form-group">
                    <label for="tr-login-username">"Username"</label>
                    <input
                        id="tr-login-username"
                        name="username"
                        type="text"
                        class="form-control"
                        placeholder="Username..."
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| on_username_input.call(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="tr-login-password">"Password"</label>
                    <input
                        id="tr-login-password"
                        name="password"
                        type="password"
                        class="form-control"
                        placeholder="password..."
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| on_password_input.call(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !can_submit.get()
                >
                    "Login"
                </button>
            </form>
        </div>
    }
}
