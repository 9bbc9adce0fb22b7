//! Verification-code cooldown timer
//!
//! [`Cooldown`] is the pure state machine (`Idle` / `Sending` / `Cooldown(n)`);
//! [`run_countdown`] drives it once per second on the async runtime.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{error::CooldownError, view::SendButtonView};

pub use common::settings::DEFAULT_COOLDOWN_SECONDS;

/// Label of the send control when it is available
pub const SEND_LABEL: &str = "Send code";

/// Label of the send control while a request is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Cooldown state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownState {
    Idle,
    /// A send request is in flight
    Sending,
    /// Seconds remaining, always at least 1
    Cooldown(u32),
}

/// Send-code cooldown state machine
#[derive(Debug, Clone)]
pub struct Cooldown {
    duration: u32,
    state: CooldownState,
}

/// Cooldown shared between the sender and the countdown driver
pub type SharedCooldown = Arc<Mutex<Cooldown>>;

impl Default for Cooldown {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_SECONDS)
    }
}

impl Cooldown {
    /// Create an idle cooldown; a zero duration is raised to one second
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            duration: duration_seconds.max(1),
            state: CooldownState::Idle,
        }
    }

    /// Wrap in a shareable handle
    pub fn shared(self) -> SharedCooldown {
        Arc::new(Mutex::new(self))
    }

    pub fn state(&self) -> CooldownState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, CooldownState::Cooldown(_))
    }

    pub fn is_sending(&self) -> bool {
        self.state == CooldownState::Sending
    }

    /// Seconds remaining, zero unless counting down
    pub fn remaining(&self) -> u32 {
        match self.state {
            CooldownState::Cooldown(n) => n,
            CooldownState::Idle | CooldownState::Sending => 0,
        }
    }

    /// Claim the send control: `Idle` → `Sending`
    ///
    /// Rejected without a state change while a request is in flight or a
    /// cooldown is running.
    pub fn begin_send(&mut self) -> Result<(), CooldownError> {
        match self.state {
            CooldownState::Idle => {
                self.state = CooldownState::Sending;
                Ok(())
            }
            CooldownState::Sending => Err(CooldownError::InFlight),
            CooldownState::Cooldown(remaining) => Err(CooldownError::Active { remaining }),
        }
    }

    /// Release a claimed send control after a failed request: `Sending` → `Idle`
    pub fn abort_send(&mut self) {
        if self.state == CooldownState::Sending {
            self.state = CooldownState::Idle;
        }
    }

    /// Enter `Cooldown(duration)` from `Idle` or `Sending`
    ///
    /// Rejected without touching the counter when a cooldown is running.
    pub fn start(&mut self) -> Result<(), CooldownError> {
        if let CooldownState::Cooldown(remaining) = self.state {
            return Err(CooldownError::Active { remaining });
        }

        self.state = CooldownState::Cooldown(self.duration);
        info!("Send-code cooldown started for {}s", self.duration);
        Ok(())
    }

    /// Advance one second
    pub fn tick(&mut self) -> CooldownState {
        self.state = match self.state {
            CooldownState::Idle => CooldownState::Idle,
            CooldownState::Sending => CooldownState::Sending,
            CooldownState::Cooldown(n) if n <= 1 => {
                info!("Send-code cooldown finished");
                CooldownState::Idle
            }
            CooldownState::Cooldown(n) => CooldownState::Cooldown(n - 1),
        };
        self.state
    }

    /// Render state of the send control
    pub fn view(&self) -> SendButtonView {
        match self.state {
            CooldownState::Idle => SendButtonView {
                enabled: true,
                label: SEND_LABEL.to_string(),
            },
            CooldownState::Sending => SendButtonView {
                enabled: false,
                label: SENDING_LABEL.to_string(),
            },
            CooldownState::Cooldown(n) => SendButtonView {
                enabled: false,
                label: format!("{}s remaining", n),
            },
        }
    }
}

/// Tick the shared cooldown once per second until it stops counting down
///
/// `on_render` receives the send-control view after every tick, including
/// the final one that re-enables the control.
pub async fn run_countdown<F>(cooldown: SharedCooldown, mut on_render: F)
where
    F: FnMut(&SendButtonView),
{
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick of an interval completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;

        let (state, view) = {
            let mut guard = cooldown.lock().await;
            let state = guard.tick();
            (state, guard.view())
        };

        debug!("Cooldown tick: {:?}", state);
        on_render(&view);

        if !matches!(state, CooldownState::Cooldown(_)) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_idle_view() {
        let view = Cooldown::default().view();
        assert!(view.enabled);
        assert_eq!(view.label, SEND_LABEL);
    }

    #[test]
    fn test_start_then_one_tick() {
        let mut cooldown = Cooldown::default();
        assert_ok!(cooldown.start());
        assert_eq!(cooldown.state(), CooldownState::Cooldown(60));
        assert_eq!(cooldown.view().label, "60s remaining");

        cooldown.tick();
        let view = cooldown.view();
        assert!(!view.enabled);
        assert_eq!(view.label, "59s remaining");
    }

    #[test]
    fn test_sixty_ticks_return_to_idle() {
        let mut cooldown = Cooldown::default();
        assert_ok!(cooldown.start());

        for _ in 0..59 {
            assert!(cooldown.is_active());
            cooldown.tick();
        }
        assert_eq!(cooldown.state(), CooldownState::Cooldown(1));

        assert_eq!(cooldown.tick(), CooldownState::Idle);
        let view = cooldown.view();
        assert!(view.enabled);
        assert_eq!(view.label, SEND_LABEL);
    }

    #[test]
    fn test_second_start_is_rejected_without_reset() {
        let mut cooldown = Cooldown::default();
        assert_ok!(cooldown.start());
        for _ in 0..10 {
            cooldown.tick();
        }

        let error = assert_err!(cooldown.start());
        assert_eq!(error, CooldownError::Active { remaining: 50 });
        assert_eq!(cooldown.remaining(), 50);
    }

    #[test]
    fn test_send_claim_blocks_second_claim() {
        let mut cooldown = Cooldown::default();
        assert_ok!(cooldown.begin_send());
        assert!(cooldown.is_sending());

        let view = cooldown.view();
        assert!(!view.enabled);
        assert_eq!(view.label, SENDING_LABEL);

        assert_eq!(assert_err!(cooldown.begin_send()), CooldownError::InFlight);
        assert_eq!(cooldown.tick(), CooldownState::Sending);

        assert_ok!(cooldown.start());
        assert_eq!(cooldown.state(), CooldownState::Cooldown(60));
        assert_eq!(
            assert_err!(cooldown.begin_send()),
            CooldownError::Active { remaining: 60 }
        );
    }

    #[test]
    fn test_abort_send_returns_to_idle() {
        let mut cooldown = Cooldown::default();
        assert_ok!(cooldown.begin_send());
        cooldown.abort_send();
        assert_eq!(cooldown.state(), CooldownState::Idle);
        assert!(cooldown.view().enabled);

        // Aborting never cancels a running cooldown
        assert_ok!(cooldown.start());
        cooldown.abort_send();
        assert_eq!(cooldown.remaining(), 60);
    }

    #[test]
    fn test_default_duration_matches_client_config() {
        let mut cooldown = Cooldown::default();
        assert_ok!(cooldown.start());
        assert_eq!(
            cooldown.remaining(),
            common::ClientConfig::default().cooldown_seconds
        );
    }

    #[test]
    fn test_tick_when_idle_is_noop() {
        let mut cooldown = Cooldown::new(5);
        assert_eq!(cooldown.tick(), CooldownState::Idle);
        assert_eq!(cooldown.remaining(), 0);
    }

    #[test]
    fn test_zero_duration_is_raised() {
        let mut cooldown = Cooldown::new(0);
        assert_ok!(cooldown.start());
        assert_eq!(cooldown.state(), CooldownState::Cooldown(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_countdown_renders_every_second() {
        let mut cooldown = Cooldown::default();
        assert_ok!(cooldown.start());
        let shared = cooldown.shared();

        let started = tokio::time::Instant::now();
        let mut labels = Vec::new();
        run_countdown(shared.clone(), |view| labels.push(view.label.clone())).await;

        assert_eq!(labels.len(), 60);
        assert_eq!(labels[0], "59s remaining");
        assert_eq!(labels[58], "1s remaining");
        assert_eq!(labels[59], SEND_LABEL);
        assert!(started.elapsed() >= Duration::from_secs(60));
        assert!(!shared.lock().await.is_active());
    }
}
