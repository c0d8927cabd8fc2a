//! Currency generator page: simulated grants and their local history.

#[cfg(test)]
#[path = "currency_generator_test.rs"]
mod currency_generator_test;

use leptos::prelude::*;

use crate::components::status_message::StatusMessage;
use crate::config::AppConfig;
use crate::state::currency::{CurrencyState, Game};
use crate::util::storage::LocalStorage;
use crate::util::time::local_timestamp;

#[component]
pub fn CurrencyGeneratorPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let generator = RwSignal::new(CurrencyState::initialize(&LocalStorage, config.history_key));
    let timestamp_format = config.timestamp_format;

    let selected = move || generator.with(|s| s.selected_game);

    let on_generate = move |_| {
        let now = local_timestamp(&timestamp_format);
        generator.update(|s| {
            if let Err(e) = s.generate(&mut LocalStorage, now) {
                log::debug!("generate rejected: {e}");
            }
        });
    };
    let on_clear = move |_| generator.update(|s| s.clear_history(&mut LocalStorage));

    let status = Signal::derive(move || generator.with(|s| s.status.clone()));

    view! {
        <section class="panel panel--generator">
            <h2 class="panel__title">"Virtual Currency Generator (Simulation)"</h2>
            <p class="panel__intro">
                "This tool simulates generating in-game currency. It is for entertainment only "
                "and does not interact with any real game servers."
            </p>

            <div class="game-picker">
                {Game::ALL
                    .into_iter()
                    .map(|game| {
                        view! {
                            <button
                                class=move || game_button_class(game, selected() == game)
                                on:click=move |_| generator.update(|s| s.select_game(game))
                            >
                                {game_button_label(game)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="form">
                <label class="form__label" for="userId">{move || user_id_label(selected())}</label>
                <input
                    id="userId"
                    class="form__input"
                    type="text"
                    placeholder=move || format!("Enter your {} user ID", selected().display_name())
                    prop:value=move || generator.with(|s| s.user_id.clone())
                    on:input=move |ev| {
                        let user_id = event_target_value(&ev);
                        generator.update(|s| s.set_user_id(user_id));
                    }
                />

                <label class="form__label" for="amount">"Amount to generate:"</label>
                <input
                    id="amount"
                    class="form__input"
                    type="number"
                    min="0"
                    placeholder="e.g. 1000"
                    prop:value=move || generator.with(CurrencyState::amount_display)
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        generator.update(|s| s.set_amount_input(&raw));
                    }
                />
            </div>

            <button class="btn btn--generate" on:click=on_generate>
                {move || generate_button_label(selected())}
            </button>

            <StatusMessage text=status tone="success"/>

            <div class="history">
                <h3 class="history__title">"Generation history (local):"</h3>
                <Show
                    when=move || generator.with(|s| !s.history.is_empty())
                    fallback=|| view! { <p class="history__empty">"No generation history yet."</p> }
                >
                    <ul class="history__list">
                        {move || {
                            generator.with(|s| {
                                s.history
                                    .iter()
                                    .map(|grant| {
                                        view! {
                                            <li class="history__item">
                                                <span class="history__summary">{grant.summary()}</span>
                                                <span class="history__time">{grant.timestamp.clone()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </ul>
                    <button class="btn btn--small btn--danger" on:click=on_clear>
                        "Clear history"
                    </button>
                </Show>
            </div>
        </section>
    }
}

/// CSS classes for a game toggle button.
pub fn game_button_class(game: Game, selected: bool) -> &'static str {
    match (game, selected) {
        (Game::GameA, true) => "game-picker__button game-picker__button--selected game-picker__button--a",
        (Game::GameB, true) => "game-picker__button game-picker__button--selected game-picker__button--b",
        (_, false) => "game-picker__button",
    }
}

pub fn game_button_label(game: Game) -> String {
    format!("{} {}", game.display_name(), game.unit())
}

pub fn user_id_label(game: Game) -> String {
    format!("{} user ID:", game.display_name())
}

pub fn generate_button_label(game: Game) -> String {
    format!("Generate {}", game.unit())
}
