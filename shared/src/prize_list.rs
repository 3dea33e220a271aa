use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::error::{WheelError, WheelResult};
use crate::shared_prize_wheel::Prize;
use crate::validation::PrizeInput;

pub const PRIZE_PALETTE: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57",
    "#FF9FF3", "#54A0FF", "#5F27CD", "#00D2D3", "#FF9F43",
    "#10AC84", "#EE5A24", "#0984e3", "#6c5ce7", "#a29bfe",
];

pub const SUGGESTED_PRIZES: [&str; 6] = ["$100", "$50", "$20", "$10", "JACKPOT!", "Inténtalo de nuevo"];

/// Prizes shown before the remote configuration has loaded.
pub fn default_prizes() -> Vec<Prize> {
    [
        ("1", "$100", "#FF6B6B"),
        ("2", "$50", "#4ECDC4"),
        ("3", "$30", "#45B7D1"),
        ("4", "$20", "#96CEB4"),
        ("5", "$10", "#FECA57"),
        ("6", "JACKPOT!", "#FF9FF3"),
        ("7", "$5", "#54A0FF"),
        ("8", "Inténtalo de nuevo", "#5F27CD"),
    ]
    .into_iter()
    .map(|(id, text, color)| Prize::new(id, text, color))
    .collect()
}

pub fn random_palette_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PRIZE_PALETTE.choose(rng).copied().unwrap_or(PRIZE_PALETTE[0])
}

/// Appends a validated prize with a fresh id and returns it.
pub fn add_prize(prizes: &mut Vec<Prize>, text: &str, color: &str) -> WheelResult<Prize> {
    let input = PrizeInput::new(text, color);
    input.check().map_err(WheelError::InvalidPrize)?;

    let prize = Prize::new(Uuid::new_v4().to_string(), input.text, input.color);
    prizes.push(prize.clone());
    Ok(prize)
}

pub fn update_prize(prizes: &mut [Prize], id: &str, text: &str, color: &str) -> WheelResult<()> {
    let input = PrizeInput::new(text, color);
    input.check().map_err(WheelError::InvalidPrize)?;

    let prize = prizes
        .iter_mut()
        .find(|prize| prize.id == id)
        .ok_or_else(|| WheelError::InvalidPrize(format!("unknown prize {}", id)))?;
    prize.text = input.text;
    prize.color = input.color;
    Ok(())
}

/// Returns whether a prize was removed.
pub fn remove_prize(prizes: &mut Vec<Prize>, id: &str) -> bool {
    let before = prizes.len();
    prizes.retain(|prize| prize.id != id);
    prizes.len() != before
}
