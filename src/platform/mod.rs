//! Platform abstraction layer
//!
//! Handles the embedding host (Telegram WebApp on the web):
//! - Readiness signal
//! - Main button styling
//! - User identity for the HUD greeting
//!
//! The game runs fine without a host; its absence is only logged.

#[cfg(target_arch = "wasm32")]
pub mod telegram;

#[cfg(target_arch = "wasm32")]
pub use telegram::TelegramHost;

use thiserror::Error;

use crate::settings::Settings;

/// Host bridge error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// No embedding host was found
    #[error("Telegram Web App API is not available; launch the game from inside Telegram")]
    Unavailable,

    /// The host was found but a call into it failed
    #[error("host bridge error: {0}")]
    Bridge(String),
}

/// The calls the game makes into its embedding host
pub trait HostBridge {
    /// Tell the host the app is ready to be shown
    fn ready(&self) -> Result<(), HostError>;
    /// Tint the host's main button
    fn set_main_button_color(&self, color: &str) -> Result<(), HostError>;
    /// First name of the user who opened the app, if shared
    fn user_first_name(&self) -> Option<String>;
}

/// What the handshake learned about the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSession {
    pub user_first_name: Option<String>,
}

impl HostSession {
    /// HUD greeting line, if the user is known
    pub fn greeting(&self) -> Option<String> {
        self.user_first_name
            .as_deref()
            .map(|name| format!("Hi, {}!", name))
    }
}

/// Signal readiness and read the user identity
pub fn handshake(
    host: Option<&dyn HostBridge>,
    settings: &Settings,
) -> Result<HostSession, HostError> {
    let host = host.ok_or(HostError::Unavailable)?;

    host.ready()?;
    if let Err(e) = host.set_main_button_color(&settings.host_button_color) {
        // Cosmetic only
        log::warn!("Could not style main button: {}", e);
    }

    let session = HostSession {
        user_first_name: host.user_first_name(),
    };
    log::info!("Host ready, user: {:?}", session.user_first_name);
    Ok(session)
}
