use std::time::Duration;

use once_cell::sync::Lazy;

pub const DEFAULT_API_BASE_URL: &str = "https://api-cmsd3.emanzano.com";
pub const DEFAULT_WHEEL_ID: u32 = 1;

/// Base URL of the remote wheel service. Set `WHEEL_API_BASE_URL` at build time to override.
pub static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    option_env!("WHEEL_API_BASE_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
});

pub fn wheel_config_endpoint(wheel_id: u32) -> String {
    format!("/ruletas/{}/config", wheel_id)
}

pub fn wheel_spin_endpoint(wheel_id: u32) -> String {
    format!("/ruletas/{}/spin", wheel_id)
}

// Spin timing
pub const OUTCOME_TIMEOUT: Duration = Duration::from_millis(3000);
pub const SPIN_ANIMATION: Duration = Duration::from_millis(4000);
pub const PROVISIONAL_SPINS: u32 = 10;
pub const MIN_EXTRA_SPINS: u32 = 1;

/// Remote prize lists are repeated until the wheel has exactly this many slots.
pub const WHEEL_SLOTS: usize = 8;
pub const DEFAULT_PRIZE_TEXT: &str = "Premio";
pub const MAX_PRIZE_TEXT_LENGTH: u64 = 40;

// Audio
pub const SPIN_SOUND_PATH: &str = "/sounds/ruidoRuleta.mp3";
pub const WINNER_SOUND_PATH: &str = "/sounds/sonidoGanador.mp3";
pub const DEFAULT_SPIN_VOLUME: f64 = 0.6;
pub const DEFAULT_WINNER_VOLUME: f64 = 0.7;

pub const DEFAULT_LOGO_PATH: &str = "/images/d3.jpg";

pub const INVALID_PRIZE_TEXT_ERROR: &str = "Prize text must be between 1 and 40 characters";
pub const INVALID_PRIZE_COLOR_ERROR: &str = "Prize color must be a hex color like #FF6B6B";
pub const INAPPROPRIATE_PRIZE_TEXT_ERROR: &str = "Prize text contains inappropriate language";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(wheel_config_endpoint(5), "/ruletas/5/config");
        assert_eq!(wheel_spin_endpoint(1), "/ruletas/1/spin");
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!API_BASE_URL.ends_with('/'));
        assert!(API_BASE_URL.starts_with("http"));
    }
}
