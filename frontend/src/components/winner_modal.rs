use shared::SpinReveal;
use yew::prelude::*;

use super::Confetti;
use crate::config::get_asset_url;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinnerModalProps {
    pub winner: Option<SpinReveal>,
    pub logo: String,
    pub on_close: Callback<()>,
}

#[function_component(WinnerModal)]
pub fn winner_modal(props: &WinnerModalProps) -> Html {
    let Some(winner) = &props.winner else {
        return html! {};
    };

    let is_positive = winner.polarity.is_favorable();
    let (border, glow, headline_class, headline) = if is_positive {
        ("border-green-500", "via-green-500/20", "text-green-300", "¡Felicidades!")
    } else {
        ("border-red-500", "via-red-500/20", "text-red-300", "¡Mejor suerte la próxima vez!")
    };
    let prize_style = format!(
        "background-color: {color}; box-shadow: 0 0 30px {color}50, inset 0 0 20px rgba(0,0,0,0.5);",
        color = winner.prize.color
    );

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_BACKDROP}>
            if winner.celebrates() {
                <Confetti />
            }
            <div class={classes!(styles::MODAL_CARD, border)}>
                <div class={classes!(
                    "absolute", "inset-0", "bg-gradient-to-r", "from-transparent", glow,
                    "to-transparent", "transform", "rotate-45", "translate-x-[-100%]", "animate-pulse"
                )}></div>

                <div class="relative z-10">
                    <div class="mb-16">
                        <div class="flex justify-center mb-6">
                            <img
                                src={get_asset_url(&props.logo)}
                                alt="Logo"
                                class="w-64 h-64 sm:w-80 sm:h-80 object-contain bg-transparent"
                            />
                        </div>
                        <p class={classes!("text-3xl", "sm:text-4xl", "md:text-5xl", "font-bold", headline_class)}>
                            { headline }
                        </p>
                    </div>

                    <div
                        class={classes!(
                            "inline-block", "px-8", "sm:px-12", "py-6", "sm:py-8", "rounded-xl", "text-white",
                            "font-bold", "text-3xl", "sm:text-4xl", "md:text-5xl", "mb-8", "shadow-2xl",
                            "border-4", if is_positive { "border-green-400" } else { "border-red-400" }
                        )}
                        style={prize_style}
                    >
                        { winner.prize.text.clone() }
                    </div>

                    <div class="flex justify-center">
                        <button
                            {onclick}
                            class="px-6 py-3 rounded-lg bg-yellow-500 text-black font-bold hover:bg-yellow-400 transition-colors"
                            title="Cerrar"
                        >
                            { "Cerrar" }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
