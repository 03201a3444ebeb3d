//! Task Modal Component
//!
//! Create/edit dialog. Field values live in the store's `form`; opening,
//! submitting and closing go through `AppContext`.

use leptos::ev;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();
    let modal = store.modal();
    let form = store.form();

    // Escape closes from anywhere on the page
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && modal.get_untracked().is_open() {
            ctx.close_modal();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_form();
    };

    view! {
        <Show when=move || modal.get().is_open()>
            // Clicking the backdrop closes; clicks inside the dialog stop here
            <div class="modal" on:click=move |_| ctx.close_modal()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 id="modal-title">{move || modal.get().heading()}</h2>
                        <button type="button" class="close" title="Close" on:click=move |_| ctx.close_modal()>
                            "×"
                        </button>
                    </div>

                    <form id="task-form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="task-title">"Title *"</label>
                            <input
                                id="task-title"
                                type="text"
                                placeholder="What needs to be done?"
                                prop:value=move || form.with(|f| f.title.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.title = value);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="task-description">"Description"</label>
                            <textarea
                                id="task-description"
                                rows="4"
                                placeholder="Enter task description (optional)"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.description = value);
                                }
                            ></textarea>
                        </div>

                        <div class="form-group">
                            <label for="task-due-date">"Due Date"</label>
                            <input
                                id="task-due-date"
                                type="date"
                                prop:value=move || form.with(|f| f.due_date.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.due_date = value);
                                }
                            />
                        </div>

                        <div class="form-actions">
                            <button type="button" class="btn btn-secondary" on:click=move |_| ctx.close_modal()>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary">"Save Task"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
