//! Framework-free core of the Bluebox login gate.
//!
//! Everything here runs on the host as well as in the browser: the view layer
//! in `frontend` supplies the identity provider and router as trait objects.

pub mod config;
pub mod error;
pub mod gate;
pub mod session;

pub use config::GateConfig;
pub use error::{ConfigError, ProviderError, SignInFailure};
pub use gate::{AuthGate, Effect, Event, Phase, UiState};
pub use session::{Identity, SessionSnapshot};
