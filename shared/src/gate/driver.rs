use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;
use log::{debug, error, info, warn};

use super::reducer::{reduce, Effect, Event, UiState};
use crate::config::GateConfig;
use crate::error::{ProviderError, SignInFailure};
use crate::session::{Identity, SessionSnapshot};

// ============================================================================
// Collaborators
// ============================================================================

/// Source of session change notifications.
pub trait SessionSource {
    /// Register `on_change`; the provider delivers the current snapshot and
    /// then every change until the returned handle is dropped.
    fn subscribe(&self, on_change: Box<dyn Fn(SessionSnapshot)>) -> Subscription;
}

/// Interactive (popup) credential exchange.
pub trait SignInProvider {
    fn sign_in(&self) -> LocalBoxFuture<'static, Result<Identity, ProviderError>>;
}

pub trait Navigation {
    fn navigate(&self, route: &str);
}

/// Cancellation handle for a [`SessionSource`] registration. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to release.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

// ============================================================================
// AuthGate
// ============================================================================

type Listener = Rc<dyn Fn(&UiState)>;

enum Lifecycle {
    Inactive,
    /// Inside `SessionSource::subscribe`; `cancelled` records a teardown
    /// requested before the handle came back.
    Subscribing { cancelled: bool },
    Active(Subscription),
}

struct Inner<P, N> {
    state: UiState,
    config: GateConfig,
    provider: Rc<P>,
    navigator: Rc<N>,
    listener: Option<Listener>,
    lifecycle: Lifecycle,
    queue: VecDeque<Event>,
    draining: bool,
}

/// Drives the login state machine from provider notifications and user
/// sign-in requests. Clones share the same gate.
pub struct AuthGate<P, N> {
    inner: Rc<RefCell<Inner<P, N>>>,
}

impl<P, N> Clone for AuthGate<P, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P, N> AuthGate<P, N>
where
    P: SessionSource + SignInProvider + 'static,
    N: Navigation + 'static,
{
    pub fn new(provider: P, navigator: N, config: GateConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: UiState::default(),
                config,
                provider: Rc::new(provider),
                navigator: Rc::new(navigator),
                listener: None,
                lifecycle: Lifecycle::Inactive,
                queue: VecDeque::new(),
                draining: false,
            })),
        }
    }

    pub fn state(&self) -> UiState {
        self.inner.borrow().state.clone()
    }

    pub fn is_active(&self) -> bool {
        match self.inner.borrow().lifecycle {
            Lifecycle::Inactive => false,
            Lifecycle::Subscribing { cancelled } => !cancelled,
            Lifecycle::Active(_) => true,
        }
    }

    /// Replace the listener notified after every processed event.
    pub fn on_change(&self, listener: impl Fn(&UiState) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Start listening to the provider. Does nothing if already active.
    pub fn activate(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if !matches!(inner.lifecycle, Lifecycle::Inactive) {
                return;
            }
            inner.lifecycle = Lifecycle::Subscribing { cancelled: false };
        }
        let provider = Rc::clone(&self.inner.borrow().provider);
        let weak = Rc::downgrade(&self.inner);
        let subscription = provider.subscribe(Box::new(move |snapshot| {
            if let Some(gate) = Self::upgrade(&weak) {
                if gate.is_torn_down() {
                    debug!("session snapshot after teardown ignored");
                    return;
                }
                gate.observe(snapshot);
            }
        }));

        let cancelled = self.is_torn_down();
        if cancelled {
            self.inner.borrow_mut().lifecycle = Lifecycle::Inactive;
            subscription.cancel();
            debug!("auth gate torn down while subscribing, unsubscribed");
        } else {
            self.inner.borrow_mut().lifecycle = Lifecycle::Active(subscription);
            debug!("auth gate subscribed to session changes");
        }
    }

    /// Stop listening to the provider, whatever phase the gate is in.
    pub fn deactivate(&self) {
        let subscription = {
            let mut inner = self.inner.borrow_mut();
            match std::mem::replace(&mut inner.lifecycle, Lifecycle::Inactive) {
                Lifecycle::Active(subscription) => Some(subscription),
                Lifecycle::Subscribing { .. } => {
                    inner.lifecycle = Lifecycle::Subscribing { cancelled: true };
                    None
                }
                Lifecycle::Inactive => None,
            }
        };
        if let Some(subscription) = subscription {
            subscription.cancel();
            debug!("auth gate unsubscribed");
        }
    }

    fn is_torn_down(&self) -> bool {
        matches!(
            self.inner.borrow().lifecycle,
            Lifecycle::Subscribing { cancelled: true }
        )
    }

    pub fn observe(&self, snapshot: SessionSnapshot) {
        debug!("session snapshot: {}", snapshot.as_str());
        self.dispatch(Event::SessionChanged(snapshot));
    }

    /// Ask the provider for an interactive sign-in.
    ///
    /// The request is decided synchronously: when the gate is not idle the
    /// returned future resolves immediately and the provider is not called.
    pub fn request_sign_in(&self) -> impl Future<Output = ()> + 'static {
        let attempt = self.begin_sign_in();
        let weak = Rc::downgrade(&self.inner);

        async move {
            let Some(attempt) = attempt else {
                return;
            };
            let outcome = attempt.await;
            let Some(gate) = Self::upgrade(&weak) else {
                debug!("auth gate torn down before sign-in finished");
                return;
            };
            match outcome {
                Ok(identity) => {
                    info!("signed in as {}", identity.label());
                    gate.dispatch(Event::SignInSucceeded(identity));
                }
                Err(err) => {
                    error!("Login error: {err}");
                    let failure = SignInFailure::classify(&err, &gate.inner.borrow().config);
                    gate.dispatch(Event::SignInFailed(failure));
                }
            }
        }
    }

    fn begin_sign_in(&self) -> Option<LocalBoxFuture<'static, Result<Identity, ProviderError>>> {
        if self.inner.borrow().draining {
            warn!("sign-in requested while the gate is busy, ignoring");
            return None;
        }
        let effects = self.dispatch(Event::SignInRequested);
        if !effects.contains(&Effect::StartSignIn) {
            debug!("sign-in request ignored in phase {}", self.state().phase.as_str());
            return None;
        }
        let provider = Rc::clone(&self.inner.borrow().provider);
        Some(provider.sign_in())
    }

    /// Queue `event` and, unless a drain is already running further up the
    /// stack, process the queue. Returns the effects produced by this call's
    /// drain.
    fn dispatch(&self, event: Event) -> Vec<Effect> {
        {
            let mut inner = self.inner.borrow_mut();
            inner.queue.push_back(event);
            if inner.draining {
                return Vec::new();
            }
            inner.draining = true;
        }

        let mut produced = Vec::new();
        loop {
            let (state, effects, navigator, listener) = {
                let mut inner = self.inner.borrow_mut();
                let Some(event) = inner.queue.pop_front() else {
                    inner.draining = false;
                    break;
                };
                let kind = event.as_str();
                let transition = reduce(&inner.state, event, &inner.config);
                if transition.state != inner.state {
                    debug!(
                        "{kind}: {} -> {}",
                        inner.state.phase.as_str(),
                        transition.state.phase.as_str()
                    );
                }
                inner.state = transition.state.clone();
                (
                    transition.state,
                    transition.effects,
                    Rc::clone(&inner.navigator),
                    inner.listener.clone(),
                )
            };

            for effect in &effects {
                if let Effect::Navigate { route } = effect {
                    info!("redirecting to {route}");
                    navigator.navigate(route);
                }
            }
            if let Some(listener) = listener {
                listener(&state);
            }
            produced.extend(effects);
        }
        produced
    }

    fn upgrade(weak: &Weak<RefCell<Inner<P, N>>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }
}
