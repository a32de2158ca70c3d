//! The authentication gate: a pure reducer plus the driver that feeds it.

mod driver;
mod reducer;

pub use driver::{AuthGate, Navigation, SessionSource, SignInProvider, Subscription};
pub use reducer::{reduce, Effect, Event, Phase, Transition, UiState};
