mod google_button;
mod spinner;

pub use google_button::GoogleSignInButton;
pub use spinner::Spinner;
