use leptos::*;
use leptos_router::*;

use crate::{api::ApiClient, pages::login::LoginPage};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=LoginPage/>
                <Route path="/login" view=LoginPage/>
            </Routes>
        </Router>
    }
}
