use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::Instant;

use shared::prize_list::default_prizes;
use shared::wheel_geometry::angle_to_index;
use shared::*;

struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

struct ScriptedSource {
    delay: Duration,
    response: WheelResult<SpinResponse>,
    calls: Cell<usize>,
}

impl ScriptedSource {
    fn new(delay_ms: u64, response: WheelResult<SpinResponse>) -> Rc<Self> {
        Rc::new(Self {
            delay: Duration::from_millis(delay_ms),
            response,
            calls: Cell::new(0),
        })
    }
}

#[async_trait(?Send)]
impl OutcomeSource for ScriptedSource {
    async fn request_spin_outcome(&self) -> WheelResult<SpinResponse> {
        self.calls.set(self.calls.get() + 1);
        tokio::time::sleep(self.delay).await;
        self.response.clone()
    }

    async fn fetch_wheel_configuration(&self) -> WheelResult<WheelConfiguration> {
        Err(WheelError::Http("not scripted".to_string()))
    }
}

#[derive(Default)]
struct RecordingEffects {
    cues: RefCell<Vec<EffectCue>>,
}

impl SpinEffects for RecordingEffects {
    fn emit(&self, cue: EffectCue) {
        self.cues.borrow_mut().push(cue);
    }
}

fn won(id: i64, positive: bool) -> WheelResult<SpinResponse> {
    Ok(SpinResponse {
        prize_won: ApiPrize {
            id,
            name: format!("prize {}", id),
            description: String::new(),
            probability: 12.5,
            available: 5,
            delivered: 0,
            limit_per_minutes: 0,
            positive,
            wheel_id: 1,
            active: true,
            created_at: String::new(),
            updated_at: String::new(),
        },
        message: "ok".to_string(),
        success: true,
    })
}

fn sequencer(source: Rc<ScriptedSource>, effects: Rc<RecordingEffects>) -> SpinSequencer {
    SpinSequencer::new(source, Rc::new(TokioClock), effects, SpinTiming::default())
        .with_rng(StdRng::seed_from_u64(7))
}

const ANIMATION: Duration = Duration::from_millis(4000);

fn assert_revealed_on_time(started: Instant) {
    let elapsed = started.elapsed();
    assert!(elapsed >= ANIMATION, "revealed early after {:?}", elapsed);
    assert!(elapsed < ANIMATION + Duration::from_millis(10), "revealed late after {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn remote_winner_lands_under_pointer() {
    let source = ScriptedSource::new(500, won(6, true));
    let effects = Rc::new(RecordingEffects::default());
    let seq = sequencer(source.clone(), effects.clone());
    let prizes = default_prizes();
    let rotations = RefCell::new(Vec::new());

    let started = Instant::now();
    let reveal = seq
        .spin(&prizes, |rotation| rotations.borrow_mut().push(rotation))
        .await
        .unwrap();

    assert_revealed_on_time(started);
    assert_eq!(reveal.index, 5);
    assert_eq!(reveal.prize.text, "JACKPOT!");
    assert_eq!(reveal.origin, OutcomeOrigin::Remote);
    assert_eq!(reveal.polarity, Polarity::Favorable);
    assert_eq!(angle_to_index(reveal.rotation, prizes.len()), Some(5));

    let rotations = rotations.into_inner();
    assert_eq!(rotations.len(), 2);
    assert!(rotations[0] >= 3600.0);
    assert!(rotations[1] >= rotations[0] + 360.0);
    assert_eq!(rotations[1], reveal.rotation);

    assert_eq!(source.calls.get(), 1);
    assert_eq!(
        *effects.cues.borrow(),
        vec![EffectCue::SpinStarted, EffectCue::SpinStopped, EffectCue::OutcomeFavorable]
    );
    assert_eq!(seq.phase(), SpinPhase::Idle);
    assert_eq!(seq.rotation(), reveal.rotation);
}

#[tokio::test(start_paused = true)]
async fn unfavorable_remote_prize_emits_unfavorable_cue() {
    let source = ScriptedSource::new(100, won(8, false));
    let effects = Rc::new(RecordingEffects::default());
    let seq = sequencer(source, effects.clone());

    let reveal = seq.spin(&default_prizes(), |_| {}).await.unwrap();

    assert_eq!(reveal.index, 7);
    assert_eq!(reveal.polarity, Polarity::Unfavorable);
    assert_eq!(effects.cues.borrow().last(), Some(&EffectCue::OutcomeUnfavorable));
}

#[tokio::test(start_paused = true)]
async fn failed_request_falls_back_and_still_reveals_on_time() {
    let source = ScriptedSource::new(0, Err(WheelError::Http("connection refused".to_string())));
    let effects = Rc::new(RecordingEffects::default());
    let seq = sequencer(source, effects.clone());
    let prizes = default_prizes();

    let started = Instant::now();
    let reveal = seq.spin(&prizes, |_| {}).await.unwrap();

    assert_revealed_on_time(started);
    assert!(reveal.index < 8);
    assert_eq!(reveal.origin, OutcomeOrigin::Fallback);
    assert_eq!(reveal.polarity, Polarity::Favorable);
    assert_eq!(angle_to_index(reveal.rotation, 8), Some(reveal.index));
    assert_eq!(effects.cues.borrow().last(), Some(&EffectCue::OutcomeFavorable));
}

#[tokio::test(start_paused = true)]
async fn late_outcome_is_discarded() {
    // the remote would pick slot 0, but only answers after the 3s window
    let source = ScriptedSource::new(5000, won(1, false));
    let effects = Rc::new(RecordingEffects::default());
    let seq = sequencer(source, effects.clone());
    let prizes = default_prizes();
    let rotations = RefCell::new(Vec::new());

    let started = Instant::now();
    let reveal = seq
        .spin(&prizes, |rotation| rotations.borrow_mut().push(rotation))
        .await
        .unwrap();

    assert_revealed_on_time(started);
    assert_eq!(reveal.origin, OutcomeOrigin::Fallback);
    assert_eq!(reveal.polarity, Polarity::Favorable);

    // let the abandoned request's deadline pass; nothing may change
    let before = seq.state();
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(seq.state(), before);
    assert_eq!(seq.phase(), SpinPhase::Idle);
    assert_eq!(rotations.borrow().len(), 2);
    assert_eq!(effects.cues.borrow().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn answer_just_inside_the_window_is_used() {
    let source = ScriptedSource::new(2900, won(3, true));
    let seq = sequencer(source, Rc::new(RecordingEffects::default()));

    let started = Instant::now();
    let reveal = seq.spin(&default_prizes(), |_| {}).await.unwrap();

    assert_revealed_on_time(started);
    assert_eq!(reveal.origin, OutcomeOrigin::Remote);
    assert_eq!(reveal.index, 2);
}

#[tokio::test(start_paused = true)]
async fn declined_or_unknown_prizes_fall_back() {
    let mut declined = won(2, true).unwrap();
    declined.success = false;
    for response in [Ok(declined), won(42, true)] {
        let seq = sequencer(ScriptedSource::new(10, response), Rc::new(RecordingEffects::default()));
        let reveal = seq.spin(&default_prizes(), |_| {}).await.unwrap();
        assert_eq!(reveal.origin, OutcomeOrigin::Fallback);
        assert_eq!(angle_to_index(reveal.rotation, 8), Some(reveal.index));
    }
}

#[tokio::test(start_paused = true)]
async fn second_request_is_rejected_while_spinning() {
    let source = ScriptedSource::new(200, won(2, true));
    let seq = sequencer(source.clone(), Rc::new(RecordingEffects::default()));
    let prizes = default_prizes();
    let rotations = RefCell::new(Vec::new());

    let (first, second) = tokio::join!(
        seq.spin(&prizes, |rotation| rotations.borrow_mut().push(rotation)),
        seq.spin(&prizes, |rotation| rotations.borrow_mut().push(rotation)),
    );

    assert_eq!(second, Err(WheelError::SpinInProgress));
    let first = first.unwrap();
    assert_eq!(first.index, 1);
    assert_eq!(source.calls.get(), 1);
    assert_eq!(rotations.borrow().len(), 2);
    assert_eq!(seq.phase(), SpinPhase::Idle);

    // accepted again once idle
    let next = seq.spin(&prizes, |_| {}).await.unwrap();
    assert!(next.rotation > first.rotation);
}

#[tokio::test(start_paused = true)]
async fn abandoned_spin_returns_to_idle() {
    let seq = sequencer(ScriptedSource::new(10_000, won(2, true)), Rc::new(RecordingEffects::default()));
    let prizes = default_prizes();

    let abandoned = tokio::time::timeout(Duration::from_millis(100), seq.spin(&prizes, |_| {})).await;
    assert!(abandoned.is_err());
    assert_eq!(seq.phase(), SpinPhase::Idle);
    assert_eq!(seq.state().pending_winner, None);
    let rotation = seq.rotation();

    let next = seq.spin(&prizes, |_| {}).await.unwrap();
    assert_eq!(next.origin, OutcomeOrigin::Fallback);
    assert!(next.rotation > rotation);
    assert_eq!(seq.phase(), SpinPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn spin_abandoned_while_revealing_returns_to_idle() {
    let seq = sequencer(ScriptedSource::new(0, won(3, true)), Rc::new(RecordingEffects::default()));
    let prizes = default_prizes();

    let abandoned = tokio::time::timeout(Duration::from_millis(1000), seq.spin(&prizes, |_| {})).await;
    assert!(abandoned.is_err());
    assert_eq!(seq.state().pending_winner, None);
    assert_eq!(seq.phase(), SpinPhase::Idle);

    let next = seq.spin(&prizes, |_| {}).await.unwrap();
    assert_eq!(next.index, 2);
}

#[tokio::test(start_paused = true)]
async fn phases_follow_the_spin() {
    let seq = sequencer(ScriptedSource::new(500, won(4, true)), Rc::new(RecordingEffects::default()));
    let prizes = default_prizes();

    let probe = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let resolving = seq.state();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let revealing = seq.state();
        (resolving, revealing)
    };
    let (reveal, (resolving, revealing)) = tokio::join!(seq.spin(&prizes, |_| {}), probe);

    assert_eq!(resolving.phase, SpinPhase::Resolving);
    assert!(resolving.pending_winner.is_none());
    assert_eq!(revealing.phase, SpinPhase::Revealing);
    assert_eq!(revealing.pending_winner, Some(3));
    assert!(reveal.is_ok());
    assert_eq!(seq.state().pending_winner, None);
}

#[tokio::test(start_paused = true)]
async fn empty_wheel_is_refused_without_side_effects() {
    let source = ScriptedSource::new(0, won(1, true));
    let effects = Rc::new(RecordingEffects::default());
    let seq = sequencer(source.clone(), effects.clone());

    let result = seq.spin(&[], |_| panic!("an empty wheel must not rotate")).await;

    assert_eq!(result, Err(WheelError::EmptyWheel));
    assert_eq!(seq.state(), WheelState::new());
    assert!(effects.cues.borrow().is_empty());
    assert_eq!(source.calls.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn rotation_keeps_accumulating_across_spins() {
    let seq = sequencer(
        ScriptedSource::new(0, Err(WheelError::OutcomeUnavailable("down".to_string()))),
        Rc::new(RecordingEffects::default()),
    );
    let prizes = default_prizes();

    let mut last = seq.rotation();
    for _ in 0..5 {
        let reveal = seq.spin(&prizes, |_| {}).await.unwrap();
        assert!(reveal.rotation >= last + 3600.0 + 360.0);
        assert_eq!(angle_to_index(reveal.rotation, prizes.len()), Some(reveal.index));
        last = reveal.rotation;
    }
}

#[tokio::test(start_paused = true)]
async fn single_prize_wheel_always_reveals_it() {
    let seq = sequencer(
        ScriptedSource::new(0, Err(WheelError::Http("offline".to_string()))),
        Rc::new(RecordingEffects::default()),
    );
    let prizes = vec![Prize::new("1", "Solo", "#FF6B6B")];

    let reveal = seq.spin(&prizes, |_| {}).await.unwrap();
    assert_eq!(reveal.index, 0);
    assert_eq!(reveal.prize.text, "Solo");
}

#[tokio::test(start_paused = true)]
async fn seeded_fallback_is_reproducible() {
    let prizes = default_prizes();
    let mut picks = Vec::new();
    for _ in 0..2 {
        let seq = sequencer(
            ScriptedSource::new(0, Err(WheelError::Http("offline".to_string()))),
            Rc::new(RecordingEffects::default()),
        );
        picks.push(seq.spin(&prizes, |_| {}).await.unwrap());
    }
    assert_eq!(picks[0].index, picks[1].index);
    assert_eq!(picks[0].rotation, picks[1].rotation);
}
