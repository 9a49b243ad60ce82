use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Link constructors supplied by the platform crate, which owns the `Route`
/// enum. Each closure receives the localized label and returns a `Link`
/// wrapping it.
///
/// ```ignore
/// register_nav(NavBuilder {
///     users: |label| rsx!( Link { class: "navbar__link", to: Route::Users {}, "{label}" } ),
///     samples: |label| rsx!( Link { class: "navbar__link", to: Route::Samples {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub users: fn(label: &str) -> Element,
    pub samples: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let language = i18n::use_language();
    i18n::track(language);
    let mut current = use_signal(|| {
        language
            .map(|lang| lang.read().clone())
            .unwrap_or_else(i18n::current_language)
    });
    let languages = use_signal(i18n::available_languages);

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                tracing::info!(%tag, "language changed");
                current.set(tag.clone());
                if let Some(mut shared) = language {
                    shared.set(tag);
                }
            }
            Err(err) => tracing::warn!(%tag, %err, "language switch failed"),
        }
    };

    // Without a registered builder, fall back to the links passed as children.
    let links = match NAV_BUILDER.get() {
        Some(builder) => {
            let users = (builder.users)(&t!("nav-users"));
            let samples = (builder.samples)(&t!("nav-samples"));
            rsx! {
                nav { class: "navbar__links", {users} {samples} }
            }
        }
        None => rsx! {
            nav { class: "navbar__links", {children} }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "GitScope" }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                {links}

                if languages.read().len() > 1 {
                    div { class: "navbar__locale",
                        label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
                        select {
                            id: "locale-select",
                            value: "{current()}",
                            oninput: on_change,
                            for code in languages.read().iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
