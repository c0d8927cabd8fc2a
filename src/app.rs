//! Root application component: header, navigation, active view and footer.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::pages::{currency_generator::CurrencyGeneratorPage, value_editor::ValueEditorPage};
use crate::state::shell::{ActiveView, ShellState};

/// Root application component.
///
/// Provides the config and shell state contexts and renders exactly one
/// feature page. Each page loads its own data when it mounts.
#[component]
pub fn App(#[prop(optional)] config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let shell = RwSignal::new(ShellState::new(config.initial_view));
    provide_context(shell);
    provide_context(config);

    // Only remount the page when the view actually changes.
    let active_view = Memo::new(move |_| shell.get().active_view);

    view! {
        <Title text="Game Utility Simulator"/>

        <div class="app">
            <header class="app__header">
                <h1>"Game " <span class="app__accent">"Utility"</span> " Simulator"</h1>
                <p class="app__subtitle">"An interactive demonstration tool"</p>
            </header>

            <NavBar/>

            <main class="app__main">
                {move || match active_view.get() {
                    ActiveView::Editor => view! { <ValueEditorPage/> }.into_any(),
                    ActiveView::Generator => view! { <CurrencyGeneratorPage/> }.into_any(),
                }}
            </main>

            <footer class="app__footer">
                <p>"Built as an interactive simulation. It makes no real changes to any game."</p>
                <p class="app__footer-note">"Game A and Game B are fictional."</p>
            </footer>
        </div>
    }
}
