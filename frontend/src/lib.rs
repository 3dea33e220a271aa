pub mod api;
pub mod audio;
pub mod clock;
pub mod components;
pub mod config;
pub mod styles;

use std::rc::Rc;

use log::{info, warn};
use shared::constants::DEFAULT_LOGO_PATH;
use shared::prize_list::default_prizes;
use shared::{OutcomeSource, SpinEffects, SpinReveal, SpinSequencer, SpinTiming};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpOutcomeSource;
use crate::audio::AudioEffects;
use crate::clock::BrowserClock;
use crate::components::{AudioControls, PrizeManager, SpinWheel, WinnerModal};

#[function_component(App)]
pub fn app() -> Html {
    let prizes = use_state(default_prizes);
    let logo = use_state(|| DEFAULT_LOGO_PATH.to_string());
    let winner = use_state(|| None::<SpinReveal>);
    let show_prize_manager = use_state(|| false);

    let effects = use_memo((), |_| AudioEffects::new());
    let source = use_memo((), |_| {
        HttpOutcomeSource::new(config::get_api_base_url(), config::get_wheel_id())
    });
    let sequencer = {
        let effects = effects.clone();
        let source = source.clone();
        use_memo((), move |_| {
            let source: Rc<dyn OutcomeSource> = source;
            let effects: Rc<dyn SpinEffects> = effects;
            SpinSequencer::new(source, Rc::new(BrowserClock), effects, SpinTiming::default())
        })
    };

    // Load the remote wheel once; the demo prizes stay if it is unreachable
    {
        let prizes = prizes.clone();
        let logo = logo.clone();
        let source = source.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match source.fetch_wheel_configuration().await {
                    Ok(config) => {
                        info!("Loaded wheel with {} prizes", config.prizes.len());
                        if !config.logo.is_empty() {
                            logo.set(config.logo);
                        }
                        prizes.set(config.prizes);
                    }
                    Err(err) => warn!("Keeping the default prizes: {}", err),
                }
            });
            || ()
        });
    }

    let on_win = {
        let winner = winner.clone();
        Callback::from(move |reveal: SpinReveal| winner.set(Some(reveal)))
    };
    let on_close = {
        let winner = winner.clone();
        Callback::from(move |_: ()| winner.set(None))
    };
    let on_prizes_change = {
        let prizes = prizes.clone();
        Callback::from(move |next: Vec<shared::Prize>| prizes.set(next))
    };
    let toggle_prize_manager = {
        let show_prize_manager = show_prize_manager.clone();
        Callback::from(move |_: MouseEvent| show_prize_manager.set(!*show_prize_manager))
    };

    html! {
        <div class={styles::PAGE}>
            <div class="absolute inset-0 opacity-10">
                <div class={styles::PAGE_GLOW}></div>
            </div>

            <div class={styles::CONTROLS}>
                <button onclick={toggle_prize_manager} class={styles::BUTTON_GOLD_ICON}>
                    { if *show_prize_manager { "✕" } else { "⚙️" } }
                </button>
                <AudioControls effects={effects.clone()} />
            </div>

            if *show_prize_manager {
                <div class={styles::OVERLAY}>
                    <PrizeManager prizes={(*prizes).clone()} on_change={on_prizes_change} />
                </div>
            }

            <div class={styles::WHEEL_STAGE}>
                <SpinWheel prizes={(*prizes).clone()} sequencer={sequencer.clone()} {on_win} />
            </div>

            <WinnerModal winner={(*winner).clone()} logo={(*logo).clone()} {on_close} />
        </div>
    }
}
