use std::cell::Cell;

use log::{debug, error};
use shared::constants::{DEFAULT_SPIN_VOLUME, DEFAULT_WINNER_VOLUME, SPIN_SOUND_PATH, WINNER_SOUND_PATH};
use shared::{EffectCue, SpinEffects};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

/// Sound effects for the wheel. Created once by the app and handed to the
/// sequencer and the audio controls.
pub struct AudioEffects {
    spin: Option<HtmlAudioElement>,
    winner: Option<HtmlAudioElement>,
    spin_volume: Cell<f64>,
    winner_volume: Cell<f64>,
}

impl AudioEffects {
    pub fn new() -> Self {
        let effects = Self {
            spin: load(SPIN_SOUND_PATH),
            winner: load(WINNER_SOUND_PATH),
            spin_volume: Cell::new(DEFAULT_SPIN_VOLUME),
            winner_volume: Cell::new(DEFAULT_WINNER_VOLUME),
        };
        effects.apply_volumes();
        effects
    }

    pub fn volumes(&self) -> (f64, f64) {
        (self.spin_volume.get(), self.winner_volume.get())
    }

    pub fn set_volume(&self, spin: f64, winner: f64) {
        self.spin_volume.set(clamp_volume(spin));
        self.winner_volume.set(clamp_volume(winner));
        self.apply_volumes();
    }

    pub fn play_spin_sound(&self) {
        if let Some(audio) = &self.spin {
            play_from_start(audio, "spin");
        }
    }

    pub fn stop_spin_sound(&self) {
        if let Some(audio) = &self.spin {
            let _ = audio.pause();
            audio.set_current_time(0.0);
        }
    }

    pub fn play_winner_sound(&self) {
        if let Some(audio) = &self.winner {
            play_from_start(audio, "winner");
        }
    }

    fn apply_volumes(&self) {
        if let Some(audio) = &self.spin {
            audio.set_volume(self.spin_volume.get());
        }
        if let Some(audio) = &self.winner {
            audio.set_volume(self.winner_volume.get());
        }
    }
}

impl Default for AudioEffects {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinEffects for AudioEffects {
    fn emit(&self, cue: EffectCue) {
        match cue {
            EffectCue::SpinStarted => self.play_spin_sound(),
            EffectCue::SpinStopped => self.stop_spin_sound(),
            EffectCue::OutcomeFavorable => self.play_winner_sound(),
            EffectCue::OutcomeUnfavorable => debug!("No sound for an unfavorable outcome"),
        }
    }
}

fn load(path: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(path) {
        Ok(audio) => {
            audio.set_preload("auto");
            Some(audio)
        }
        Err(err) => {
            error!("Error initializing audio {}: {:?}", path, err);
            None
        }
    }
}

fn play_from_start(audio: &HtmlAudioElement, name: &'static str) {
    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            // browsers reject playback until the page has seen a user gesture
            if let Err(err) = JsFuture::from(promise).await {
                error!("Error playing {} sound: {:?}", name, err);
            }
        }),
        Err(err) => error!("Error playing {} sound: {:?}", name, err),
    }
}

pub fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_volume() {
        assert_eq!(clamp_volume(0.6), 0.6);
        assert_eq!(clamp_volume(1.5), 1.0);
        assert_eq!(clamp_volume(-0.2), 0.0);
        assert_eq!(clamp_volume(f64::NAN), 0.0);
    }
}
