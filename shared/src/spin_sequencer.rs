//! Drives one spin from the button press to the reveal.
//!
//! `Idle -> Spinning -> Resolving -> Revealing -> Idle`. The wheel starts
//! moving before the winner is known; the winner comes from the outcome
//! source when it answers in time and from a local draw otherwise. The reveal
//! always happens a fixed time after the first rotation was committed.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{self, Either, LocalBoxFuture};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{MIN_EXTRA_SPINS, OUTCOME_TIMEOUT, PROVISIONAL_SPINS, SPIN_ANIMATION};
use crate::error::{WheelError, WheelResult};
use crate::rotation::{compute_landing_rotation, provisional_rotation};
use crate::shared_prize_wheel::{
    EffectCue, OutcomeOrigin, Polarity, Prize, SpinOutcome, SpinPhase, SpinResponse, SpinReveal,
    WheelConfiguration, WheelState,
};
use crate::wheel_config::find_prize_index_by_id;
use crate::wheel_geometry::FULL_TURN;

/// Remote authority for spin results and wheel configuration.
#[async_trait(?Send)]
pub trait OutcomeSource {
    async fn request_spin_outcome(&self) -> WheelResult<SpinResponse>;
    async fn fetch_wheel_configuration(&self) -> WheelResult<WheelConfiguration>;
}

pub trait Clock {
    /// Resolves once `duration` has passed. The deadline is fixed when the
    /// future is created, not when it is first polled.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Receives sound and visual cues. Must not block.
pub trait SpinEffects {
    fn emit(&self, cue: EffectCue);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTiming {
    /// How long the outcome source gets before a local winner is drawn.
    pub outcome_timeout: Duration,
    /// Time from the first committed rotation to the reveal.
    pub animation: Duration,
    pub provisional_spins: u32,
    pub min_extra_spins: u32,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            outcome_timeout: OUTCOME_TIMEOUT,
            animation: SPIN_ANIMATION,
            provisional_spins: PROVISIONAL_SPINS,
            min_extra_spins: MIN_EXTRA_SPINS,
        }
    }
}

pub struct SpinSequencer {
    source: Rc<dyn OutcomeSource>,
    clock: Rc<dyn Clock>,
    effects: Rc<dyn SpinEffects>,
    timing: SpinTiming,
    state: RefCell<WheelState>,
    rng: RefCell<StdRng>,
}

impl SpinSequencer {
    pub fn new(
        source: Rc<dyn OutcomeSource>,
        clock: Rc<dyn Clock>,
        effects: Rc<dyn SpinEffects>,
        timing: SpinTiming,
    ) -> Self {
        Self {
            source,
            clock,
            effects,
            timing,
            state: RefCell::new(WheelState::new()),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Replaces the generator used for jitter and fallback winners.
    pub fn with_rng(self, rng: StdRng) -> Self {
        self.rng.replace(rng);
        self
    }

    pub fn state(&self) -> WheelState {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> SpinPhase {
        self.state.borrow().phase
    }

    pub fn rotation(&self) -> f64 {
        self.state.borrow().rotation
    }

    pub fn timing(&self) -> SpinTiming {
        self.timing
    }

    /// Runs a full spin over `prizes` and resolves with the revealed winner.
    ///
    /// `on_rotate` is called with every rotation the wheel should animate to:
    /// once with the provisional rotation and once with the landing rotation.
    /// Refused with [`WheelError::EmptyWheel`] or [`WheelError::SpinInProgress`]
    /// without touching the state.
    pub async fn spin<F>(&self, prizes: &[Prize], on_rotate: F) -> WheelResult<SpinReveal>
    where
        F: Fn(f64),
    {
        let active = self.begin_spin(prizes)?;
        info!("Spin started over {} segments", prizes.len());
        self.effects.emit(EffectCue::SpinStarted);

        let jitter = self.rng.borrow_mut().gen_range(0.0..FULL_TURN);
        let provisional = provisional_rotation(self.rotation(), self.timing.provisional_spins, jitter);
        self.commit_rotation(provisional, &on_rotate);
        let reveal_at = self.clock.sleep(self.timing.animation);

        self.set_phase(SpinPhase::Resolving);
        let outcome = self.resolve_outcome(prizes).await;

        let landing = match compute_landing_rotation(
            provisional,
            outcome.prize_index,
            prizes.len(),
            self.timing.min_extra_spins,
        ) {
            Ok(landing) => landing,
            Err(err) => {
                active.finish();
                return Err(err);
            }
        };
        self.commit_rotation(landing, &on_rotate);
        {
            let mut state = self.state.borrow_mut();
            state.phase = SpinPhase::Revealing;
            state.pending_winner = Some(outcome.prize_index);
        }

        reveal_at.await;

        self.effects.emit(EffectCue::SpinStopped);
        self.effects.emit(outcome.polarity.into());
        active.finish();

        let prize = prizes[outcome.prize_index].clone();
        info!(
            "Spin revealed {} ({:?}, {:?}) at {:.1}°",
            prize.text, outcome.origin, outcome.polarity, landing
        );

        Ok(SpinReveal {
            index: outcome.prize_index,
            prize,
            rotation: landing,
            polarity: outcome.polarity,
            origin: outcome.origin,
        })
    }

    fn begin_spin(&self, prizes: &[Prize]) -> WheelResult<ActiveSpin<'_>> {
        if prizes.is_empty() {
            return Err(WheelError::EmptyWheel);
        }

        let mut state = self.state.borrow_mut();
        if state.phase != SpinPhase::Idle {
            debug!("Spin request refused in {:?}", state.phase);
            return Err(WheelError::SpinInProgress);
        }
        state.phase = SpinPhase::Spinning;
        state.pending_winner = None;
        Ok(ActiveSpin {
            state: &self.state,
            finished: false,
        })
    }

    fn set_phase(&self, phase: SpinPhase) {
        self.state.borrow_mut().phase = phase;
    }

    fn commit_rotation<F: Fn(f64)>(&self, rotation: f64, on_rotate: &F) {
        {
            let mut state = self.state.borrow_mut();
            debug_assert!(rotation >= state.rotation, "wheel rotation must never go backwards");
            state.rotation = rotation;
        }
        on_rotate(rotation);
    }

    async fn resolve_outcome(&self, prizes: &[Prize]) -> SpinOutcome {
        let request = self.source.request_spin_outcome();
        let timeout = self.clock.sleep(self.timing.outcome_timeout);

        let resolved = match future::select(request, timeout).await {
            Either::Left((response, _)) => response.and_then(|response| remote_outcome(&response, prizes)),
            Either::Right(((), late)) => {
                // dropping the request discards whatever it would have returned
                drop(late);
                debug!("Outcome request abandoned after {:?}", self.timing.outcome_timeout);
                Err(WheelError::OutcomeUnavailable(format!(
                    "no answer within {:?}",
                    self.timing.outcome_timeout
                )))
            }
        };

        match resolved {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("Using a local winner: {}", err);
                self.fallback_outcome(prizes.len())
            }
        }
    }

    fn fallback_outcome(&self, segments: usize) -> SpinOutcome {
        SpinOutcome {
            prize_index: self.rng.borrow_mut().gen_range(0..segments),
            success: false,
            polarity: Polarity::Favorable,
            origin: OutcomeOrigin::Fallback,
        }
    }
}

/// Returns the wheel to `Idle` when a spin ends, including when the `spin`
/// future is dropped before the reveal.
struct ActiveSpin<'a> {
    state: &'a RefCell<WheelState>,
    finished: bool,
}

impl ActiveSpin<'_> {
    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for ActiveSpin<'_> {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        if !self.finished {
            warn!("Spin abandoned in {:?}", state.phase);
        }
        state.phase = SpinPhase::Idle;
        state.pending_winner = None;
    }
}

fn remote_outcome(response: &SpinResponse, prizes: &[Prize]) -> WheelResult<SpinOutcome> {
    if !response.success {
        return Err(WheelError::OutcomeUnavailable(format!(
            "service declined the spin: {}",
            response.message
        )));
    }

    let prize_index = find_prize_index_by_id(prizes, response.prize_won.id).ok_or_else(|| {
        WheelError::OutcomeUnavailable(format!(
            "prize {} ({}) is not on the wheel",
            response.prize_won.id, response.prize_won.name
        ))
    })?;

    Ok(SpinOutcome {
        prize_index,
        success: true,
        polarity: if response.prize_won.positive {
            Polarity::Favorable
        } else {
            Polarity::Unfavorable
        },
        origin: OutcomeOrigin::Remote,
    })
}
