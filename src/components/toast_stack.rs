//! Toast Stack Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Renders the store's toast queue; expiry is scheduled by `AppContext::notify`
#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="toast-container" class="toast-container">
            <For
                each=move || store.toasts().with(|queue| queue.items().to_vec())
                key=|toast| toast.id
                children=|toast| {
                    view! {
                        <div class=toast.kind.class()>
                            <i class=toast.kind.icon()></i>
                            " "
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
