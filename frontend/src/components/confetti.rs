use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

const CONFETTI_CSS: &str = r#"
@keyframes confetti-fall {
    0% { transform: translateY(-10vh) rotate(0deg); opacity: 1; }
    100% { transform: translateY(110vh) rotate(720deg); opacity: 0; }
}
"#;

const CONFETTI_COLORS: [&str; 6] = ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff"];
const PIECES_PER_BURST: usize = 50;
const SECOND_BURST_DELAY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
struct Piece {
    left: f64,
    size: f64,
    delay: f64,
    duration: f64,
    color: &'static str,
}

fn burst<R: Rng>(rng: &mut R, offset: f64) -> impl Iterator<Item = Piece> + '_ {
    (0..PIECES_PER_BURST).map(move |_| Piece {
        left: rng.gen_range(0.0..100.0),
        size: rng.gen_range(6.0..14.0),
        delay: offset + rng.gen_range(0.0..0.3),
        duration: rng.gen_range(2.0..4.0),
        color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
    })
}

/// Two bursts of falling confetti over the whole viewport.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    let pieces = use_memo((), |_| {
        let mut rng = SmallRng::from_entropy();
        let mut pieces: Vec<Piece> = burst(&mut rng, 0.0).collect();
        pieces.extend(burst(&mut rng, SECOND_BURST_DELAY).collect::<Vec<_>>());
        pieces
    });

    html! {
        <div class="fixed inset-0 pointer-events-none overflow-hidden z-[60]">
            <style>{ CONFETTI_CSS }</style>
            { for pieces.iter().map(|piece| {
                let style = format!(
                    "position: absolute; top: 0; left: {:.2}%; width: {:.1}px; height: {:.1}px; \
                     background: {}; border-radius: 50%; opacity: 0; \
                     animation: confetti-fall {:.2}s linear {:.2}s forwards;",
                    piece.left, piece.size, piece.size, piece.color, piece.duration, piece.delay
                );
                html! { <div {style}></div> }
            }) }
        </div>
    }
}
