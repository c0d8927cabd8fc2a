//! Value editor page: apply, load and delete simulated named values.

use leptos::prelude::*;

use crate::components::status_message::StatusMessage;
use crate::config::AppConfig;
use crate::state::values::ValueEditorState;
use crate::util::storage::LocalStorage;

#[component]
pub fn ValueEditorPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let editor = RwSignal::new(ValueEditorState::initialize(&LocalStorage, config.values_key));

    let on_apply = move |_| {
        editor.update(|s| {
            if let Err(e) = s.apply(&mut LocalStorage) {
                log::debug!("apply rejected: {e}");
            }
        });
    };
    let on_load = move |_| {
        editor.update(|s| {
            s.load();
        });
    };
    let on_clear = move |_| editor.update(|s| s.clear_all(&mut LocalStorage));

    let status = Signal::derive(move || editor.with(|s| s.status.clone()));

    view! {
        <section class="panel panel--editor">
            <h2 class="panel__title">"Game Value Editor (Simulation)"</h2>
            <p class="panel__intro">
                "This section simulates changing and saving values for demonstration purposes. "
                "It does not interact with any external game."
            </p>

            <div class="form">
                <label class="form__label" for="valueName">"Value name:"</label>
                <input
                    id="valueName"
                    class="form__input"
                    type="text"
                    placeholder="e.g. Gold, Points, Lives"
                    prop:value=move || editor.with(|s| s.name_query.clone())
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        editor.update(|s| s.set_name_query(name));
                    }
                />

                <label class="form__label" for="currentValue">"Current value (simulated):"</label>
                <input
                    id="currentValue"
                    class="form__input form__input--readonly"
                    type="text"
                    readonly=true
                    placeholder="Loaded or applied"
                    prop:value=move || editor.with(|s| s.current_value.clone())
                />

                <label class="form__label" for="newValue">"New value:"</label>
                <input
                    id="newValue"
                    class="form__input"
                    type="text"
                    placeholder="Enter the new value"
                    prop:value=move || editor.with(|s| s.pending_value.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editor.update(|s| s.set_pending_value(value));
                    }
                />
            </div>

            <div class="actions">
                <button class="btn btn--apply" on:click=on_apply>"Apply value"</button>
                <button class="btn btn--load" on:click=on_load>"Load value"</button>
                <button class="btn btn--danger" on:click=on_clear>"Clear all"</button>
            </div>

            <StatusMessage text=status tone="info"/>

            <div class="saved">
                <h3 class="saved__title">"Saved values (simulated locally):"</h3>
                <Show
                    when=move || editor.with(|s| !s.values.is_empty())
                    fallback=|| view! { <p class="saved__empty">"No saved values yet."</p> }
                >
                    <ul class="saved__list">
                        {move || {
                            editor.with(|s| {
                                s.values
                                    .iter()
                                    .map(|record| {
                                        let id = record.id.clone();
                                        view! {
                                            <li class="saved__item">
                                                <span>
                                                    <strong class="saved__name">{format!("{}:", record.name)}</strong>
                                                    " "
                                                    {record.value.clone()}
                                                </span>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    title="Delete"
                                                    on:click=move |_| {
                                                        editor.update(|s| {
                                                            s.delete_one(&mut LocalStorage, &id);
                                                        });
                                                    }
                                                >
                                                    "X"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </ul>
                </Show>
            </div>
        </section>
    }
}
