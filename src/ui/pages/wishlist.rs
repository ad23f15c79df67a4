use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::AppState,
    ui::components::{
        saved_table::SavedPropertyTable,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn WishlistPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let rows = state.with(|st| st.wishlist.clone());

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            let removed = state.with_mut(|st| st.remove_wishlisted(&id));
            if removed {
                persist_user_state(&state);
                push_toast(toasts.clone(), ToastKind::Info, "Removed from wishlist.");
            }
        }
    };

    rsx! {
        div { class: "page-stack",
            section { class: "panel",
                h2 { class: "panel-title", "Property Wishlist" }
                p { class: "cell-muted",
                    "Homes you want to keep an eye on, with the price they were estimated at."
                }
                SavedPropertyTable {
                    rows,
                    empty_text: "Predict a price and press Add to Wishlist to start one.",
                    on_remove,
                }
            }
        }
    }
}
