use log::{info, Level};

mod api;
pub mod config;
mod pages;
pub mod router;
#[cfg(test)]
mod test_support;

pub use api::{ApiClient, CommandError, LoginRequest, Session};
pub use pages::login::LoginForm;

/// Browser entry point: installs logging, resolves runtime config and
/// mounts the application.
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Debug);
    info!("Starting translator frontend");

    leptos::spawn_local(async move {
        config::init().await;
        info!("Runtime config initialized");
        router::mount_app();
    });
}
