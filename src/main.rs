//! Quotation Form Frontend Entry Point

mod app;
mod components;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;
use quotation_core::FormSettings;

fn main() {
    console_error_panic_hook::set_once();
    let settings = FormSettings::default();
    logger::init(settings.level_filter());
    mount_to_body(move || view! { <App settings=settings /> });
}
