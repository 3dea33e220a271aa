use shared::prize_list::{add_prize, random_palette_color, remove_prize, update_prize, SUGGESTED_PRIZES};
use shared::{Prize, WheelError};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PrizeManagerProps {
    pub prizes: Vec<Prize>,
    pub on_change: Callback<Vec<Prize>>,
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn error_text(err: WheelError) -> String {
    match err {
        WheelError::InvalidPrize(message) => message,
        other => other.to_string(),
    }
}

#[function_component(PrizeManager)]
pub fn prize_manager(props: &PrizeManagerProps) -> Html {
    let new_text = use_state(String::new);
    let new_color = use_state(|| "#FF6B6B".to_string());
    let editing_id = use_state(|| None::<String>);
    let edit_text = use_state(String::new);
    let edit_color = use_state(String::new);
    let error = use_state(|| None::<String>);

    let add = {
        let prizes = props.prizes.clone();
        let on_change = props.on_change.clone();
        let new_text = new_text.clone();
        let new_color = new_color.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let mut prizes = prizes.clone();
            match add_prize(&mut prizes, &new_text, &new_color) {
                Ok(_) => {
                    on_change.emit(prizes);
                    new_text.set(String::new());
                    new_color.set(random_palette_color(&mut rand::thread_rng()).to_string());
                    error.set(None);
                }
                Err(err) => error.set(Some(error_text(err))),
            }
        })
    };

    let cancel_edit = {
        let editing_id = editing_id.clone();
        let edit_text = edit_text.clone();
        let edit_color = edit_color.clone();
        Callback::from(move |_: ()| {
            editing_id.set(None);
            edit_text.set(String::new());
            edit_color.set(String::new());
        })
    };

    let save_edit = {
        let prizes = props.prizes.clone();
        let on_change = props.on_change.clone();
        let editing_id = editing_id.clone();
        let edit_text = edit_text.clone();
        let edit_color = edit_color.clone();
        let error = error.clone();
        let cancel_edit = cancel_edit.clone();
        Callback::from(move |_: ()| {
            let Some(id) = (*editing_id).clone() else {
                return;
            };
            let mut prizes = prizes.clone();
            match update_prize(&mut prizes, &id, &edit_text, &edit_color) {
                Ok(()) => {
                    on_change.emit(prizes);
                    error.set(None);
                    cancel_edit.emit(());
                }
                Err(err) => error.set(Some(error_text(err))),
            }
        })
    };

    let suggestion = |text: &'static str| {
        let prizes = props.prizes.clone();
        let on_change = props.on_change.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut prizes = prizes.clone();
            let color = random_palette_color(&mut rand::thread_rng());
            match add_prize(&mut prizes, text, color) {
                Ok(_) => on_change.emit(prizes),
                Err(err) => error.set(Some(error_text(err))),
            }
        })
    };

    let prize_row = |prize: &Prize| -> Html {
        if editing_id.as_deref() == Some(prize.id.as_str()) {
            let on_text = {
                let edit_text = edit_text.clone();
                Callback::from(move |e: InputEvent| edit_text.set(input_value(&e)))
            };
            let on_color = {
                let edit_color = edit_color.clone();
                Callback::from(move |e: InputEvent| edit_color.set(input_value(&e)))
            };
            let on_key = {
                let save_edit = save_edit.clone();
                Callback::from(move |e: KeyboardEvent| {
                    if e.key() == "Enter" {
                        save_edit.emit(());
                    }
                })
            };
            html! {
                <div key={prize.id.clone()} class={styles::PRIZE_ROW}>
                    <input
                        type="text"
                        value={(*edit_text).clone()}
                        oninput={on_text}
                        onkeypress={on_key}
                        class="flex-1 px-2 py-1 border border-gray-300 rounded text-sm text-gray-800"
                    />
                    <input
                        type="color"
                        value={(*edit_color).clone()}
                        oninput={on_color}
                        class="w-8 h-8 border border-gray-300 rounded cursor-pointer"
                    />
                    <button
                        onclick={save_edit.reform(|_: MouseEvent| ())}
                        class={classes!(styles::BUTTON_SMALL, "bg-green-500", "hover:bg-green-600")}
                    >
                        { "✓" }
                    </button>
                    <button
                        onclick={cancel_edit.reform(|_: MouseEvent| ())}
                        class={classes!(styles::BUTTON_SMALL, "bg-gray-500", "hover:bg-gray-600")}
                    >
                        { "✗" }
                    </button>
                </div>
            }
        } else {
            let start_edit = {
                let prize = prize.clone();
                let editing_id = editing_id.clone();
                let edit_text = edit_text.clone();
                let edit_color = edit_color.clone();
                Callback::from(move |_: MouseEvent| {
                    editing_id.set(Some(prize.id.clone()));
                    edit_text.set(prize.text.clone());
                    edit_color.set(prize.color.clone());
                })
            };
            let remove = {
                let id = prize.id.clone();
                let prizes = props.prizes.clone();
                let on_change = props.on_change.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut prizes = prizes.clone();
                    if remove_prize(&mut prizes, &id) {
                        on_change.emit(prizes);
                    }
                })
            };
            html! {
                <div key={prize.id.clone()} class={styles::PRIZE_ROW}>
                    <div
                        class="w-6 h-6 rounded-full border border-gray-300 flex-shrink-0"
                        style={format!("background-color: {}", prize.color)}
                    ></div>
                    <span class="flex-1 text-sm text-gray-200 truncate">{ prize.text.clone() }</span>
                    <button onclick={start_edit} class={classes!(styles::BUTTON_SMALL, "bg-yellow-500", "hover:bg-yellow-600")}>
                        { "✏️" }
                    </button>
                    <button onclick={remove} class={classes!(styles::BUTTON_SMALL, "bg-red-500", "hover:bg-red-600")}>
                        { "🗑️" }
                    </button>
                </div>
            }
        }
    };

    let on_new_text = {
        let new_text = new_text.clone();
        Callback::from(move |e: InputEvent| new_text.set(input_value(&e)))
    };
    let on_new_color = {
        let new_color = new_color.clone();
        Callback::from(move |e: InputEvent| new_color.set(input_value(&e)))
    };
    let on_new_key = {
        let add = add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                add.emit(());
            }
        })
    };

    html! {
        <div class={styles::PANEL}>
            <h3 class="text-xl font-bold mb-4 text-yellow-400 font-serif">{ "Gestionar Premios" }</h3>

            <div class="mb-6 flex flex-col space-y-3">
                <div class="flex space-x-2">
                    <input
                        type="text"
                        value={(*new_text).clone()}
                        oninput={on_new_text}
                        onkeypress={on_new_key}
                        placeholder="Nuevo premio..."
                        class={styles::INPUT}
                    />
                    <input
                        type="color"
                        value={(*new_color).clone()}
                        oninput={on_new_color}
                        class={styles::INPUT_COLOR}
                    />
                </div>
                <button onclick={add.reform(|_: MouseEvent| ())} class={styles::BUTTON_ADD}>
                    { "Agregar Premio" }
                </button>
                if let Some(message) = (*error).clone() {
                    <p class={styles::TEXT_ERROR}>{ message }</p>
                }
            </div>

            <div class="space-y-2 max-h-64 overflow-y-auto">
                if props.prizes.is_empty() {
                    <p class={styles::TEXT_MUTED}>{ "No hay premios agregados" }</p>
                } else {
                    { for props.prizes.iter().map(prize_row) }
                }
            </div>

            <div class="mt-4">
                <p class="text-sm text-gray-400 mb-2">{ "Premios sugeridos:" }</p>
                <div class="flex flex-wrap gap-2">
                    { for SUGGESTED_PRIZES.into_iter().map(|text| html! {
                        <button key={text} onclick={suggestion(text)} class={styles::BUTTON_SUGGESTION}>
                            { text }
                        </button>
                    }) }
                </div>
            </div>
        </div>
    }
}
