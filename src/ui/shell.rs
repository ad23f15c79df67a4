use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version;

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell",
            header {
                class: "app-header",
                div { class: "header-inner",
                    div { class: "brand",
                        span { class: "brand-mark", "⌂" }
                        div {
                            h1 { class: "brand-title", "{version::APP_NAME}" }
                            p { class: "brand-subtitle",
                                "Property valuations from location, features, and market trends"
                            }
                        }
                    }
                    nav { class: "nav",
                        NavButton {
                            active: matches!(current_route, Route::Predict {}),
                            onclick: move |_| { nav.push(Route::Predict {}); },
                            label: "Predict",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Compare {}),
                            onclick: move |_| { nav.push(Route::Compare {}); },
                            label: "Compare",
                        }
                        NavButton {
                            active: matches!(current_route, Route::History {}),
                            onclick: move |_| { nav.push(Route::History {}); },
                            label: "History",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Wishlist {}),
                            onclick: move |_| { nav.push(Route::Wishlist {}); },
                            label: "Wishlist",
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                "{version::APP_NAME} {version::version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "nav-btn nav-btn-active"
    } else {
        "nav-btn"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
