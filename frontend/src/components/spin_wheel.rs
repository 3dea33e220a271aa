use std::rc::Rc;

use log::{debug, warn};
use shared::wheel_geometry::{polar_to_cartesian, segment_arc, segment_center_angle};
use shared::{Prize, SpinReveal, SpinSequencer, WheelError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::SpinButton;

const CENTER: f64 = 200.0;
const RADIUS: f64 = 180.0;
const LABEL_RADIUS: f64 = 120.0;
const FALLBACK_COLORS: [&str; 15] = [
    "#CD0303", "#CD0303", "#CD0303", "#CD0303", "#CD0303",
    "#CD0303", "#2F4F4F", "#8B0000", "#006400", "#CD0303",
    "#CD0303", "#8B008B", "#FF1493", "#32CD32", "#FF8C00",
];

#[derive(Properties, Clone)]
pub struct SpinWheelProps {
    pub prizes: Vec<Prize>,
    pub sequencer: Rc<SpinSequencer>,
    pub on_win: Callback<SpinReveal>,
}

impl PartialEq for SpinWheelProps {
    fn eq(&self, other: &Self) -> bool {
        self.prizes == other.prizes
            && Rc::ptr_eq(&self.sequencer, &other.sequencer)
            && self.on_win == other.on_win
    }
}

/// SVG path of one wedge in a 400x400 view box.
pub fn segment_path(index: usize, segments: usize) -> String {
    let (start, end) = segment_arc(index, segments);
    let (x1, y1) = polar_to_cartesian(CENTER, CENTER, RADIUS, start);
    let (x2, y2) = polar_to_cartesian(CENTER, CENTER, RADIUS, end);
    let large_arc = if end - start > 180.0 { 1 } else { 0 };

    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        CENTER, CENTER, x1, y1, RADIUS, RADIUS, large_arc, x2, y2
    )
}

fn segment(prize: &Prize, index: usize, segments: usize) -> Html {
    let fill = if prize.color.is_empty() {
        FALLBACK_COLORS[index % FALLBACK_COLORS.len()].to_string()
    } else {
        prize.color.clone()
    };
    let text_angle = segment_center_angle(index, segments);
    let (text_x, text_y) = polar_to_cartesian(CENTER, CENTER, LABEL_RADIUS, text_angle);

    // a lone prize would collapse to a zero-length arc
    let wedge = if segments == 1 {
        html! { <circle cx="200" cy="200" r="180" fill={fill} stroke="#FFD700" stroke-width="3" /> }
    } else {
        html! {
            <path
                d={segment_path(index, segments)}
                fill={fill}
                stroke="#FFD700"
                stroke-width="3"
                style="filter: drop-shadow(0 2px 4px rgba(0,0,0,0.3))"
            />
        }
    };

    html! {
        <g key={prize.id.clone()}>
            { wedge }
            <text
                x={text_x.to_string()}
                y={text_y.to_string()}
                fill="white"
                font-size="16"
                font-weight="bold"
                text-anchor="middle"
                dominant-baseline="central"
                transform={format!("rotate({}, {}, {})", text_angle, text_x, text_y)}
                stroke="#000000"
                stroke-width="0.5"
            >
                { prize.text.clone() }
            </text>
        </g>
    }
}

#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let rotation = use_state(|| props.sequencer.rotation());
    let transition_ms = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);

    let onclick = {
        let sequencer = props.sequencer.clone();
        let prizes = props.prizes.clone();
        let on_win = props.on_win.clone();
        let rotation = rotation.clone();
        let transition_ms = transition_ms.clone();
        let is_spinning = is_spinning.clone();

        Callback::from(move |_: MouseEvent| {
            let sequencer = sequencer.clone();
            let prizes = prizes.clone();
            let on_win = on_win.clone();
            let rotation = rotation.clone();
            let transition_ms = transition_ms.clone();
            let is_spinning = is_spinning.clone();

            let total_ms = sequencer.timing().animation.as_millis() as f64;
            let started = js_sys::Date::now();
            is_spinning.set(true);

            spawn_local(async move {
                // every commit finishes animating when the reveal is due
                let animate_to = move |degrees: f64| {
                    let remaining = (total_ms - (js_sys::Date::now() - started)).max(0.0);
                    transition_ms.set(remaining);
                    rotation.set(degrees);
                };

                match sequencer.spin(&prizes, animate_to).await {
                    Ok(reveal) => {
                        is_spinning.set(false);
                        on_win.emit(reveal);
                    }
                    Err(WheelError::SpinInProgress) => debug!("Ignoring click while the wheel is spinning"),
                    Err(err) => {
                        is_spinning.set(false);
                        warn!("Spin refused: {}", err);
                    }
                }
            });
        })
    };

    let transition = if *is_spinning {
        format!("transform {}ms cubic-bezier(0.23, 1, 0.32, 1)", *transition_ms)
    } else {
        "none".to_string()
    };
    let wheel_style = format!("transform: rotate({}deg); transition: {};", *rotation, transition);
    let segments = props.prizes.len();

    html! {
        <div class="flex flex-col items-center justify-center h-full w-full max-w-4xl">
            <div class="relative flex-1 flex items-center justify-center">
                <div class="relative">
                    // pointer, fixed at the top of the wheel
                    <div class="absolute top-0 left-1/2 transform -translate-x-1/2 -translate-y-2 z-10">
                        <div class="w-0 h-0 border-l-[22px] border-r-[22px] border-t-[45px] border-l-transparent border-r-transparent border-t-yellow-500 drop-shadow-2xl"></div>
                    </div>

                    <svg
                        width="min(90vw, 90vh, 600px)"
                        height="min(90vw, 90vh, 600px)"
                        viewBox="0 0 400 400"
                        class="drop-shadow-2xl max-w-full max-h-full"
                        style={wheel_style}
                    >
                        <defs>
                            <radialGradient id="outerRingGradient" cx="50%" cy="50%" r="50%">
                                <stop offset="0%" stop-color="#2F4F4F" />
                                <stop offset="100%" stop-color="#1C1C1C" />
                            </radialGradient>
                        </defs>
                        <circle cx="200" cy="200" r="190" fill="url(#outerRingGradient)" stroke="#FFD700" stroke-width="6" />
                        { for props.prizes.iter().enumerate().map(|(index, prize)| segment(prize, index, segments)) }
                        <circle cx="200" cy="200" r="25" fill="#2c3e50" stroke="#34495e" stroke-width="3" />
                    </svg>
                </div>
            </div>

            <SpinButton
                is_spinning={*is_spinning}
                has_prizes={segments > 0}
                {onclick}
            />
        </div>
    }
}
