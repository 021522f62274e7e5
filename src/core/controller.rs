//! Language redirect controller
//!
//! One controller exists per page visit. It resolves the browser language,
//! counts down, and either navigates to the localized page or stops when the
//! user cancels or picks a language.
//!
//! Two timers race to perform the redirect: the countdown tick reaching zero
//! and a one-shot backup deadline. Both callbacks take the controller lock
//! and check the `resolved` guard first, so whichever runs second does
//! nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::RedirectConfig;
use crate::core::resolver::resolve_language;
use crate::core::state::DetectionState;
use crate::core::timer::{set_interval, set_timeout, TimerError, TimerHandle};
use crate::storage::{KeyValueStore, SessionFlags};
use crate::ui::language::LanguageCode;
use crate::ui::navigator::Navigator;
use crate::ui::presenter::Presenter;

pub struct RedirectController {
    inner: Arc<Mutex<ControllerInner>>,
}

struct ControllerInner {
    config: RedirectConfig,
    state: DetectionState,
    /// Set once a redirect, cancellation or teardown happened. Timer
    /// callbacks do nothing once this is true.
    resolved: bool,
    countdown_timer: Option<TimerHandle>,
    backup_timer: Option<TimerHandle>,
    session: SessionFlags,
    presenter: Box<dyn Presenter>,
    navigator: Box<dyn Navigator>,
    state_tx: watch::Sender<DetectionState>,
}

fn lock(inner: &Mutex<ControllerInner>) -> MutexGuard<'_, ControllerInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RedirectController {
    pub fn new(
        config: RedirectConfig,
        session_store: impl KeyValueStore + 'static,
        presenter: impl Presenter + 'static,
        navigator: impl Navigator + 'static,
    ) -> Self {
        let (state_tx, _) = watch::channel(DetectionState::Undetected);
        let inner = ControllerInner {
            config,
            state: DetectionState::Undetected,
            resolved: false,
            countdown_timer: None,
            backup_timer: None,
            session: SessionFlags::new(session_store),
            presenter: Box::new(presenter),
            navigator: Box::new(navigator),
            state_tx,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Run detection for this visit and start the countdown.
    ///
    /// When detection already ran earlier in the session the visit goes
    /// straight to the manual choice and no timer is scheduled.
    pub fn init<S: AsRef<str>>(&self, tags: &[S]) {
        let mut inner = lock(&self.inner);
        if inner.state != DetectionState::Undetected {
            warn!(state = %inner.state, "controller already initialized");
            return;
        }

        if inner.session.detection_done() {
            let previous = inner.session.preferred_language();
            info!(?previous, "language detection already ran this session, waiting for manual choice");
            inner.resolved = true;
            inner.set_state(DetectionState::Cancelled);
            inner.presenter.show_manual_choice();
            return;
        }

        let code = resolve_language(tags);
        inner.set_state(DetectionState::Detected(code));
        inner.presenter.show_detected(code.entry());
        inner.presenter.highlight_recommended(code);
        inner.presenter.set_notice_visible(true);
        inner.session.mark_detection_done();

        let remaining = inner.config.countdown_seconds;
        inner.set_state(DetectionState::RedirectScheduled(code, remaining));
        inner.presenter.show_countdown(remaining);

        if let Err(e) = self.schedule(&mut inner) {
            warn!(error = %e, "cannot schedule redirect, falling back to manual choice");
            inner.cancel();
        }
    }

    fn schedule(&self, inner: &mut ControllerInner) -> Result<(), TimerError> {
        let tick = Arc::downgrade(&self.inner);
        let deadline = Arc::downgrade(&self.inner);
        inner.countdown_timer = Some(set_interval(inner.config.tick(), move || on_tick(&tick))?);
        inner.backup_timer = Some(set_timeout(inner.config.backup_delay(), move || {
            on_deadline(&deadline)
        })?);
        debug!(
            tick_ms = inner.config.tick_millis,
            backup_ms = inner.config.backup_delay_millis,
            "redirect timers scheduled"
        );
        Ok(())
    }

    /// Stop the countdown and let the user choose. Does nothing once the
    /// visit reached a terminal state.
    pub fn cancel(&self) {
        lock(&self.inner).cancel();
    }

    /// Record a manual language choice and stop the countdown.
    ///
    /// Following the choice to its page is left to the control that was
    /// clicked; the controller never navigates here.
    pub fn select_language(&self, code: LanguageCode) {
        let mut inner = lock(&self.inner);
        if let DetectionState::Redirected(target) = inner.state {
            debug!(%code, %target, "ignoring selection after redirect");
            return;
        }
        inner.cancel();
        inner.session.set_preferred_language(code);
        inner.presenter.show_preference_saved(code.entry());
        info!(%code, "language selected manually");
    }

    /// Page unload: stop both timers so nothing fires after leaving.
    pub fn teardown(&self) {
        let mut inner = lock(&self.inner);
        inner.resolved = true;
        inner.clear_timers();
        debug!(state = %inner.state, "controller torn down");
    }

    pub fn state(&self) -> DetectionState {
        lock(&self.inner).state
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<DetectionState> {
        lock(&self.inner).state_tx.subscribe()
    }

    /// Number of timers still owned by the controller.
    pub fn active_timers(&self) -> usize {
        let inner = lock(&self.inner);
        usize::from(inner.countdown_timer.is_some()) + usize::from(inner.backup_timer.is_some())
    }
}

impl Drop for RedirectController {
    fn drop(&mut self) {
        lock(&self.inner).clear_timers();
    }
}

impl ControllerInner {
    fn set_state(&mut self, state: DetectionState) {
        debug!(from = %self.state, to = %state, "state transition");
        self.state = state;
        self.state_tx.send_replace(state);
    }

    fn clear_timers(&mut self) {
        if let Some(timer) = self.countdown_timer.take() {
            timer.clear();
        }
        if let Some(timer) = self.backup_timer.take() {
            timer.clear();
        }
    }

    fn cancel(&mut self) {
        if self.state.is_terminal() {
            debug!(state = %self.state, "nothing to cancel");
            return;
        }
        self.resolved = true;
        self.clear_timers();
        self.set_state(DetectionState::Cancelled);
        self.presenter.show_manual_choice();
        info!("automatic redirect cancelled");
    }

    fn redirect(&mut self, code: LanguageCode, trigger: &'static str) {
        self.resolved = true;
        self.clear_timers();
        self.session.set_preferred_language(code);
        self.set_state(DetectionState::Redirected(code));

        let entry = code.entry();
        self.presenter.show_redirecting(entry);
        info!(%code, trigger, page = entry.target_page, "redirecting");
        self.navigator.assign(entry.target_page);
    }
}

fn on_tick(inner: &Weak<Mutex<ControllerInner>>) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut inner = lock(&inner);
    if inner.resolved {
        return;
    }
    let DetectionState::RedirectScheduled(code, remaining) = inner.state else {
        return;
    };

    let remaining = remaining.saturating_sub(1);
    if remaining == 0 {
        inner.redirect(code, "countdown");
    } else {
        inner.set_state(DetectionState::RedirectScheduled(code, remaining));
        inner.presenter.show_countdown(remaining);
    }
}

fn on_deadline(inner: &Weak<Mutex<ControllerInner>>) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut inner = lock(&inner);
    if inner.resolved {
        return;
    }
    if let DetectionState::RedirectScheduled(code, _) = inner.state {
        inner.redirect(code, "backup deadline");
    }
}
