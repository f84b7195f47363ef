#![allow(warnings)]
//! NoviList Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logging;
mod markdown;
mod prefs;
mod route;
mod storage;
mod store;

use std::rc::Rc;

use app::App;
use commands::DelayedClient;
use leptos::prelude::*;
use novilist_core::{AppConfig, MockClient};
use storage::LocalStorage;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load(&LocalStorage);
    let logs = logging::init(config.log_capacity);
    tracing::info!(target: "novilist::app", ?config, "starting");

    commands::install(Rc::new(DelayedClient::new(MockClient::new(), &config)));

    mount_to_body(move || view! { <App config=config.clone() logs=logs.clone() /> });
}
