//! Navigation Sidebar Component
//!
//! Section switcher. Every click goes through `AppContext::navigate`, which
//! also triggers the section's data load.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, Section};

#[component]
pub fn NavSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    view! {
        <nav class="sidebar">
            <div class="logo">
                <i class="fas fa-check-double"></i>
                <span>"TaskFlow"</span>
            </div>
            <ul class="nav-menu">
                {Section::ALL.into_iter().map(|section| {
                    let item_class = move || {
                        if store.section().get() == section { "nav-item active" } else { "nav-item" }
                    };
                    view! {
                        <li class=item_class on:click=move |_| ctx.navigate(section)>
                            <i class=section.icon()></i>
                            <span>{section.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
