mod api;
mod app;
mod dto;
mod state;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    mount_to_body(|| view! { <app::App/> });
}
