use crate::config::GateConfig;
use crate::error::SignInFailure;
use crate::session::{Identity, SessionSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No session notification has arrived yet.
    #[default]
    Initializing,
    Idle,
    SigningIn,
    /// Navigation has been issued; nothing changes after this.
    Redirecting,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Initializing => "initializing",
            Phase::Idle => "idle",
            Phase::SigningIn => "signing_in",
            Phase::Redirecting => "redirecting",
        }
    }
}

/// State rendered by the login view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub phase: Phase,
    pub error: Option<String>,
}

impl UiState {
    pub fn initializing(&self) -> bool {
        self.phase == Phase::Initializing
    }

    pub fn signing_in(&self) -> bool {
        self.phase == Phase::SigningIn
    }

    pub fn redirecting(&self) -> bool {
        self.phase == Phase::Redirecting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SessionChanged(SessionSnapshot),
    SignInRequested,
    SignInSucceeded(Identity),
    SignInFailed(SignInFailure),
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionChanged(_) => "session_changed",
            Event::SignInRequested => "sign_in_requested",
            Event::SignInSucceeded(_) => "sign_in_succeeded",
            Event::SignInFailed(_) => "sign_in_failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate { route: String },
    StartSignIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: UiState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn stay(state: &UiState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }

    fn redirect(state: &UiState, config: &GateConfig) -> Self {
        Self {
            state: UiState {
                phase: Phase::Redirecting,
                error: state.error.clone(),
            },
            effects: vec![Effect::Navigate {
                route: config.redirect_route.clone(),
            }],
        }
    }
}

/// Compute the next state and the side effects the driver must perform.
pub fn reduce(state: &UiState, event: Event, config: &GateConfig) -> Transition {
    if state.phase == Phase::Redirecting {
        return Transition::stay(state);
    }

    match (state.phase, event) {
        (_, Event::SessionChanged(snapshot)) if snapshot.is_signed_in() => {
            Transition::redirect(state, config)
        }
        (Phase::Initializing, Event::SessionChanged(_)) => Transition {
            state: UiState {
                phase: Phase::Idle,
                error: state.error.clone(),
            },
            effects: Vec::new(),
        },
        (Phase::Idle, Event::SignInRequested) => Transition {
            state: UiState {
                phase: Phase::SigningIn,
                error: None,
            },
            effects: vec![Effect::StartSignIn],
        },
        (Phase::SigningIn, Event::SignInSucceeded(_)) => Transition::redirect(state, config),
        (Phase::SigningIn, Event::SignInFailed(failure)) => Transition {
            state: UiState {
                phase: Phase::Idle,
                error: failure.message().map(str::to_string),
            },
            effects: Vec::new(),
        },
        _ => Transition::stay(state),
    }
}
