use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::audio::AudioEffects;
use crate::styles;

#[derive(Properties, Clone)]
pub struct AudioControlsProps {
    pub effects: Rc<AudioEffects>,
}

impl PartialEq for AudioControlsProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.effects, &other.effects)
    }
}

fn percent(volume: f64) -> u32 {
    (volume * 100.0).round() as u32
}

#[function_component(AudioControls)]
pub fn audio_controls(props: &AudioControlsProps) -> Html {
    let is_open = use_state(|| false);
    let volumes = use_state(|| props.effects.volumes());

    if !*is_open {
        let open = {
            let is_open = is_open.clone();
            Callback::from(move |_: MouseEvent| is_open.set(true))
        };
        return html! {
            <button onclick={open} class={styles::BUTTON_BLUE_ICON} title="Controles de Audio">
                { "🔊" }
            </button>
        };
    }

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let slider = |spin_slider: bool| {
        let effects = props.effects.clone();
        let volumes = volumes.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Ok(value) = input.value().parse::<f64>() else {
                return;
            };
            let (spin, winner) = *volumes;
            let next = if spin_slider {
                (value / 100.0, winner)
            } else {
                (spin, value / 100.0)
            };
            effects.set_volume(next.0, next.1);
            volumes.set(effects.volumes());
        })
    };

    let test_spin = {
        let effects = props.effects.clone();
        Callback::from(move |_: MouseEvent| effects.play_spin_sound())
    };
    let test_winner = {
        let effects = props.effects.clone();
        Callback::from(move |_: MouseEvent| effects.play_winner_sound())
    };
    let stop_spin = {
        let effects = props.effects.clone();
        Callback::from(move |_: MouseEvent| effects.stop_spin_sound())
    };

    let (spin_volume, winner_volume) = *volumes;

    html! {
        <div class={styles::PANEL_AUDIO}>
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-white font-bold text-sm">{ "Audio" }</h3>
                <button onclick={close} class="text-white hover:text-red-400 transition-colors">{ "✕" }</button>
            </div>

            <div class="space-y-4">
                <div>
                    <div class="flex justify-between items-center mb-2">
                        <label class={styles::TEXT_LABEL}>{ format!("Ruleta {}%", percent(spin_volume)) }</label>
                        <div class="space-x-1">
                            <button onclick={test_spin} class="text-xs text-blue-300 hover:text-blue-200">{ "▶" }</button>
                            <button onclick={stop_spin} class="text-xs text-blue-300 hover:text-blue-200">{ "■" }</button>
                        </div>
                    </div>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        value={percent(spin_volume).to_string()}
                        oninput={slider(true)}
                        class="w-full"
                    />
                </div>

                <div>
                    <div class="flex justify-between items-center mb-2">
                        <label class={styles::TEXT_LABEL}>{ format!("Ganador {}%", percent(winner_volume)) }</label>
                        <button onclick={test_winner} class="text-xs text-blue-300 hover:text-blue-200">{ "▶" }</button>
                    </div>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        value={percent(winner_volume).to_string()}
                        oninput={slider(false)}
                        class="w-full"
                    />
                </div>
            </div>
        </div>
    }
}
