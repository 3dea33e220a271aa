use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub has_prizes: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = props.is_spinning || !props.has_prizes;

    let button_text = if props.is_spinning {
        "GIRANDO..."
    } else {
        "GIRAR RULETA"
    };

    let button_class = if is_disabled {
        "bg-gray-700 text-gray-400 cursor-not-allowed scale-95 opacity-60"
    } else {
        "text-black cursor-pointer hover:scale-105 hover:shadow-3xl active:scale-95"
    };

    // animated gold gradient only while the button is usable
    let style = if is_disabled {
        String::new()
    } else {
        "background: linear-gradient(45deg, #FFD700 0%, #FFA500 25%, #FFD700 50%, #FFA500 75%, #FFD700 100%); \
         background-size: 200% 200%; animation: gradient-shift 3s ease infinite;"
            .to_string()
    };

    html! {
        <div class="w-full px-6 pb-6">
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                {style}
                class={classes!(
                    "w-full",
                    "py-6",
                    "px-8",
                    "rounded-xl",
                    "font-bold",
                    "text-xl",
                    "shadow-2xl",
                    "transform",
                    "transition-all",
                    "duration-300",
                    "ease-in-out",
                    "relative",
                    "overflow-hidden",
                    "border-4",
                    "border-yellow-400",
                    button_class
                )}
            >
                if !is_disabled {
                    <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white/30 to-transparent transform -skew-x-12 translate-x-[-100%] animate-pulse"></div>
                }
                <span class="flex items-center justify-center space-x-3 relative z-10">
                    <span class={classes!("text-3xl", props.is_spinning.then_some("animate-spin"))}>
                        { if props.is_spinning { "🎰" } else { "🎲" } }
                    </span>
                    <span class="text-2xl tracking-wider">{ button_text }</span>
                </span>
            </button>
        </div>
    }
}
