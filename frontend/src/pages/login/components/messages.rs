use leptos::*;

#[component]
pub fn LoginErrorBanner(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="alert alert-danger" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
