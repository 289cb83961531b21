//! Bootstrap sequencer for Z-Bazzar
//!
//! One-shot startup sequence gating the app behind the splash overlay:
//!
//! - `Loading` — nothing renders; a minimum-delay timer (simulated resource
//!   loading) and the font-readiness signal are both outstanding.
//! - `ReadyVisible` — both signals have fired; the app is mounted with the
//!   splash overlay fully opaque on top.
//! - `Fading` — entered immediately; overlay opacity animates from 1 to 0
//!   over a fixed duration.
//! - `Hidden` — the fade has completed and the host splash mechanism can
//!   fully dismiss.
//!
//! Transitions are irreversible and there is no cancellation path. The
//! sequencer runs independently of auth-store resolution; the two are not
//! coupled.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::time::{self, Instant};

/// Opacity animation tick, roughly one display frame.
const FADE_TICK: Duration = Duration::from_millis(16);

/// Bootstrap errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// The sequence was already started; it cannot run twice.
    #[error("Bootstrap sequence already started")]
    AlreadyStarted,
}

/// Phase of the startup sequence.
///
/// Ordered: phases only ever advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapPhase {
    /// Waiting on the minimum-delay timer and font readiness
    #[default]
    Loading,
    /// App mounted, splash overlay fully opaque on top
    ReadyVisible,
    /// Splash overlay opacity animating toward zero
    Fading,
    /// Splash overlay dismissed, app fully interactive
    Hidden,
}

/// Observable bootstrap state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapState {
    /// Current phase
    pub phase: BootstrapPhase,
    /// Splash overlay opacity in `[0, 1]`
    pub splash_opacity: f32,
}

impl Default for BootstrapState {
    fn default() -> Self {
        Self {
            phase: BootstrapPhase::Loading,
            splash_opacity: 1.0,
        }
    }
}

/// Bootstrap timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapConfig {
    /// Minimum time the splash stays up, simulating resource loading
    pub min_splash_delay: Duration,
    /// Duration of the splash fade-out animation
    pub fade_duration: Duration,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            min_splash_delay: Duration::from_secs(2),
            fade_duration: Duration::from_millis(500),
        }
    }
}

/// One-shot startup sequencer.
///
/// Create it, hand [`BootstrapSequencer::subscribe`] to whatever renders the
/// splash overlay, and drive it once with [`BootstrapSequencer::run`].
#[derive(Debug, Clone)]
pub struct BootstrapSequencer {
    config: BootstrapConfig,
    started: Arc<AtomicBool>,
    tx: Arc<watch::Sender<BootstrapState>>,
}

impl Default for BootstrapSequencer {
    fn default() -> Self {
        Self::new(BootstrapConfig::default())
    }
}

impl BootstrapSequencer {
    /// Create a sequencer in the `Loading` phase.
    pub fn new(config: BootstrapConfig) -> Self {
        let (tx, _rx) = watch::channel(BootstrapState::default());
        Self {
            config,
            started: Arc::new(AtomicBool::new(false)),
            tx: Arc::new(tx),
        }
    }

    /// Get a snapshot of the current bootstrap state.
    pub fn state(&self) -> BootstrapState {
        *self.tx.borrow()
    }

    /// Get the current phase.
    pub fn phase(&self) -> BootstrapPhase {
        self.tx.borrow().phase
    }

    /// Whether the app should render at all.
    ///
    /// False while `Loading`: not even a blank screen is produced until
    /// both readiness signals have fired.
    pub fn should_render(&self) -> bool {
        self.phase() != BootstrapPhase::Loading
    }

    /// Subscribe to bootstrap state changes.
    pub fn subscribe(&self) -> watch::Receiver<BootstrapState> {
        self.tx.subscribe()
    }

    /// Run the startup sequence to completion.
    ///
    /// Joins the minimum-delay timer with `fonts_ready` — whichever finishes
    /// last triggers the transition out of `Loading` — then fades the splash
    /// overlay and signals `Hidden`. Returns
    /// [`BootstrapError::AlreadyStarted`] if called more than once.
    pub async fn run<F>(&self, fonts_ready: F) -> Result<(), BootstrapError>
    where
        F: Future<Output = ()>,
    {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(BootstrapError::AlreadyStarted);
        }

        tokio::join!(time::sleep(self.config.min_splash_delay), fonts_ready);

        self.set_phase(BootstrapPhase::ReadyVisible);
        self.set_phase(BootstrapPhase::Fading);

        let fade_start = Instant::now();
        let mut ticker = time::interval(FADE_TICK);
        loop {
            ticker.tick().await;
            let progress = fade_progress(fade_start.elapsed(), self.config.fade_duration);
            self.tx.send_modify(|s| s.splash_opacity = 1.0 - progress);
            if progress >= 1.0 {
                break;
            }
        }

        self.tx.send_modify(|s| {
            s.phase = BootstrapPhase::Hidden;
            s.splash_opacity = 0.0;
        });
        tracing::info!("bootstrap complete, splash hidden");
        Ok(())
    }

    fn set_phase(&self, phase: BootstrapPhase) {
        self.tx.send_modify(|s| s.phase = phase);
        tracing::debug!(?phase, "bootstrap phase");
    }
}

/// Fade completion in `[0, 1]` for the given elapsed time.
fn fade_progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
}
