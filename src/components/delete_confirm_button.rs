//! Delete Confirm Button Component
//!
//! Inline delete confirmation: nothing is sent until the user confirms.

use leptos::prelude::*;

/// Two-step delete prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmStep {
    #[default]
    Idle,
    Asking,
}

impl ConfirmStep {
    /// Trash button pressed
    pub fn ask(self) -> Self {
        ConfirmStep::Asking
    }

    /// ✓ pressed. The delete runs only if the prompt was showing.
    pub fn confirm(self) -> (Self, bool) {
        (ConfirmStep::Idle, self == ConfirmStep::Asking)
    }

    /// ✗ pressed
    pub fn decline(self) -> Self {
        ConfirmStep::Idle
    }
}

/// Inline delete confirmation button
///
/// Shows a trash button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
/// Declining returns to the initial state without calling `on_confirm`.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (step, set_step) = signal(ConfirmStep::Idle);

    view! {
        <Show
            when=move || step.get() == ConfirmStep::Asking
            fallback=move || view! {
                <button
                    class=button_class.clone()
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_step.update(|s| *s = s.ask());
                    }
                >
                    <i class="fas fa-trash"></i>
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    title="Confirm delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let (next, run) = step.get_untracked().confirm();
                        set_step.set(next);
                        if run {
                            on_confirm.run(());
                        }
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    title="Keep task"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_step.update(|s| *s = s.decline());
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replay a click sequence and count how many deletes were issued
    fn deletes_after(clicks: &[&str]) -> usize {
        let mut step = ConfirmStep::Idle;
        let mut deletes = 0;
        for click in clicks {
            step = match *click {
                "trash" => step.ask(),
                "cancel" => step.decline(),
                "confirm" => {
                    let (next, run) = step.confirm();
                    if run {
                        deletes += 1;
                    }
                    next
                }
                other => panic!("unknown click {other}"),
            };
        }
        deletes
    }

    #[test]
    fn test_declining_issues_no_delete() {
        assert_eq!(deletes_after(&["trash", "cancel"]), 0);
        assert_eq!(deletes_after(&["trash", "cancel", "confirm"]), 0);
    }

    #[test]
    fn test_confirming_issues_one_delete() {
        assert_eq!(deletes_after(&["trash", "confirm"]), 1);
        assert_eq!(deletes_after(&["trash", "confirm", "confirm"]), 1);
        assert_eq!(deletes_after(&["trash", "cancel", "trash", "confirm"]), 1);
    }

    #[test]
    fn test_prompt_resets_after_either_answer() {
        assert_eq!(ConfirmStep::Asking.decline(), ConfirmStep::Idle);
        assert_eq!(ConfirmStep::Asking.confirm().0, ConfirmStep::Idle);
    }
}
