mod app;

use app::DemoApp;
use droplet::config::{CONFIG_ATTRIBUTE, DEMO_CONFIG_TOML};
use droplet::models::IntakeConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn warn(message: String) {
    web_sys::console::warn_1(&message.into());
}

/// Config from the mount element's `data-config` JSON, else the built-in demo config.
fn load_config(root: &web_sys::Element) -> IntakeConfig {
    if let Some(json) = root.get_attribute(CONFIG_ATTRIBUTE) {
        match IntakeConfig::from_json(&json) {
            Ok(config) => return config,
            Err(err) => warn(format!("droplet-demo: {}; using built-in config", err)),
        }
    }

    IntakeConfig::from_toml(DEMO_CONFIG_TOML).unwrap_or_else(|err| {
        warn(format!("droplet-demo: {}; using defaults", err));
        IntakeConfig::default()
    })
}

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element");
    let config = load_config(&root);

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), move || {
        view! { <DemoApp config=config /> }
    })
    .forget();
}
