use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::{DataProvider, SamplesDashboard, UsersDashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Users {},
    #[route("/samples")]
    Samples {},
}

// Embedded so the theme ships inside the wasm bundle.
const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_users(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::Users {},
        "{label}"
    })
}

fn nav_samples(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::Samples {},
        "{label}"
    })
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        users: nav_users,
        samples: nav_samples,
    });

    // Shared language tag; localized scopes subscribe to it through
    // `ui::i18n::use_language`.
    use_context_provider(|| Signal::new(ui::i18n::current_language()));

    rsx! {
        document::Style { "{THEME_CSS}" }

        DataProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}

#[component]
fn Users() -> Element {
    rsx! { UsersDashboard {} }
}

#[component]
fn Samples() -> Element {
    rsx! { SamplesDashboard {} }
}
