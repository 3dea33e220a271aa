use serde::{Deserialize, Serialize};

/// One slice of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub id: String,
    pub text: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive: Option<bool>,
}

impl Prize {
    pub fn new(id: impl Into<String>, text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            color: color.into(),
            probability: None,
            positive: None,
        }
    }

    /// Only an explicit `positive: false` makes a prize unfavorable.
    pub fn polarity(&self) -> Polarity {
        match self.positive {
            Some(false) => Polarity::Unfavorable,
            _ => Polarity::Favorable,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Favorable,
    Unfavorable,
}

impl Polarity {
    pub fn is_favorable(self) -> bool {
        self == Polarity::Favorable
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
    Resolving,
    Revealing,
}

/// Mutable state of a mounted wheel. Only the spin sequencer writes to it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct WheelState {
    /// Total clockwise rotation in degrees. Never normalized, never decreases.
    pub rotation: f64,
    pub phase: SpinPhase,
    pub pending_winner: Option<usize>,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_spinning(&self) -> bool {
        self.phase != SpinPhase::Idle
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeOrigin {
    Remote,
    Fallback,
}

/// The winner decided for one spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinOutcome {
    pub prize_index: usize,
    pub success: bool,
    pub polarity: Polarity,
    pub origin: OutcomeOrigin,
}

/// Handed back by the sequencer once the wheel has stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinReveal {
    pub index: usize,
    pub prize: Prize,
    pub rotation: f64,
    pub polarity: Polarity,
    pub origin: OutcomeOrigin,
}

impl SpinReveal {
    /// Confetti is reserved for prizes explicitly flagged positive; the
    /// favorable styling alone also covers unflagged prizes.
    pub fn celebrates(&self) -> bool {
        self.prize.positive == Some(true)
    }
}

/// Discrete cues the wheel emits for sound and visual effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectCue {
    SpinStarted,
    SpinStopped,
    OutcomeFavorable,
    OutcomeUnfavorable,
}

impl From<Polarity> for EffectCue {
    fn from(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Favorable => EffectCue::OutcomeFavorable,
            Polarity::Unfavorable => EffectCue::OutcomeUnfavorable,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelConfiguration {
    pub colors: Vec<String>,
    pub logo: String,
    pub prizes: Vec<Prize>,
}

// === API Types ===

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiPrize {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "probabilidad", default)]
    pub probability: f64,
    #[serde(rename = "cantidad_disponible", default)]
    pub available: i64,
    #[serde(rename = "cantidad_entregada", default)]
    pub delivered: i64,
    #[serde(rename = "limite_por_minutos", default)]
    pub limit_per_minutes: i64,
    #[serde(default = "default_positive")]
    pub positive: bool,
    #[serde(rename = "ruleta_id", default)]
    pub wheel_id: i64,
    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_positive() -> bool {
    true
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Company {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(rename = "color_primario")]
    pub primary_color: String,
    #[serde(rename = "color_secundario")]
    pub secondary_color: String,
    #[serde(rename = "color_terciario")]
    pub tertiary_color: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Wheel {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(default)]
    pub company_id: i64,
    #[serde(rename = "activa", default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RouletteConfig {
    #[serde(rename = "ruleta")]
    pub wheel: Wheel,
    pub company: Company,
    #[serde(rename = "premios", default)]
    pub prizes: Vec<ApiPrize>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResponse {
    #[serde(rename = "premio_ganado")]
    pub prize_won: ApiPrize,
    #[serde(rename = "mensaje", default)]
    pub message: String,
    #[serde(rename = "exito")]
    pub success: bool,
}
