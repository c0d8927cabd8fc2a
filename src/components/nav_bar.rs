//! View switcher between the value editor and the currency generator.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::state::shell::{ActiveView, ShellState};

/// One button per feature view; the active one is highlighted.
#[component]
pub fn NavBar() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    view! {
        <nav class="nav-bar">
            {ActiveView::ALL
                .into_iter()
                .map(|target| {
                    view! {
                        <button
                            class=move || nav_button_class(target, shell.get().is_active(target))
                            on:click=move |_| {
                                shell.update(|s| {
                                    s.select_view(target);
                                });
                            }
                        >
                            {target.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// CSS classes for a navigation button.
pub fn nav_button_class(target: ActiveView, active: bool) -> &'static str {
    match (target, active) {
        (ActiveView::Editor, true) => "nav-bar__button nav-bar__button--active nav-bar__button--editor",
        (ActiveView::Generator, true) => "nav-bar__button nav-bar__button--active nav-bar__button--generator",
        (_, false) => "nav-bar__button",
    }
}
