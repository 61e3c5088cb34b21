// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vitrine: services catalog, portfolio, and enquiry app
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::careers::Careers;
use pages::contact::Contact;
use pages::home::Home;
use pages::login::Login;
use pages::notifications::Notifications;
use pages::portfolio::Portfolio;
use pages::profile::Profile;
use pages::quotation::Quotation;
use pages::services::Services;
use pages::settings::Settings;

use services::app_services::AppServices;
use vitrine_catalog::ScreenScope;
use vitrine_core::human_errors::humanize_error;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Vitrine starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(TabLayout)]
    #[route("/")]
    Home {},
    #[route("/services?:query")]
    Services { query: String },
    #[route("/portfolio")]
    Portfolio {},
    #[route("/notifications")]
    Notifications {},
    #[route("/contact?:subject")]
    Contact { subject: String },
    #[route("/quotation")]
    Quotation {},
    #[route("/careers")]
    Careers {},
    #[route("/login")]
    Login {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!("backend services initialised");
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "service init failed; using in-memory fallback");
            AppServices::fallback().expect("even fallback init failed")
        }
    });

    use_context_provider(|| svc.clone());
    let mut state = use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    // Load the catalog once at start so every screen finds it in the store.
    let svc_load = svc.clone();
    use_hook(move || {
        spawn(async move {
            let scope = ScreenScope::new();
            match svc_load.refresh_catalog(&scope).await {
                Ok(_) => state.write().catalog_error = None,
                Err(e) => {
                    state.write().catalog_error = Some(humanize_error(&e).message);
                }
            }
        });
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent bottom tab layout wrapping all pages.
#[component]
fn TabLayout() -> Element {
    let state = use_context::<Signal<state::AppState>>();
    let account = if state.read().is_logged_in() {
        rsx! { TabButton { to: Route::Profile {}, label: "Profile", icon: "P" } }
    } else {
        rsx! { TabButton { to: Route::Login {}, label: "Login", icon: "L" } }
    };

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }

            nav { class: "tab-bar",
                style: "display: flex; justify-content: space-around; padding: 8px 0; border-top: 1px solid #e0e0e0; background: #fafafa;",
                TabButton { to: Route::Home {}, label: "Home", icon: "H" }
                TabButton { to: Route::Services { query: String::new() }, label: "Services", icon: "S" }
                TabButton { to: Route::Portfolio {}, label: "Portfolio", icon: "W" }
                TabButton { to: Route::Notifications {}, label: "Alerts", icon: "N" }
                {account}
            }
        }
    }
}

#[component]
fn TabButton(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: flex; flex-direction: column; align-items: center; text-decoration: none; color: #333; font-size: 12px;",
            span { style: "font-size: 20px;", "{icon}" }
            span { "{label}" }
        }
    }
}

/// Red banner for a failed load or submit.
#[component]
fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { style: "padding: 12px; margin: 12px 0; border-radius: 8px; background: #f8d7da; color: #721c24; font-size: 14px;",
            "{message}"
        }
    }
}

/// Green confirmation line under a form.
#[component]
fn SuccessNote(message: String) -> Element {
    rsx! {
        p { style: "color: #34c759; font-size: 14px; text-align: center; margin-top: 8px;",
            "{message}"
        }
    }
}
