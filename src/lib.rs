//! Pixzel: a Zellij plugin for searching and browsing Pixabay images.
//!
//! Type a query, press Enter, and the first page of matching images appears
//! in a scrollable gallery. Further pages are appended on demand; selecting
//! an image opens an enlarged view that closes on Escape or a click outside
//! it. Transient advisories report empty queries, repeated queries, queries
//! with no matches and failed requests.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, focus, actions                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Search        │   │ Gallery       │   │ UI            │
//! │ (search/)     │   │ (gallery/)    │   │ (ui/)         │
//! │ - Input       │   │ - Modal       │   │ - Layout      │
//! │ - Orchestrator│   │ - Escape      │   │ - Components  │
//! │               │   │   listeners   │   │ - Theming     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Query Client (client/), Domain (domain/),          │
//! │  Sandbox paths (infrastructure/)                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! HTTP goes through the host: the client builds a request, main.rs hands it
//! to `web_request`, and the result comes back later as an event carrying
//! the request's ticket.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/pixzel.wasm" {
//!         api_key "your-pixabay-key"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use pixzel::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "yellow flowers".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_render, actions) = handle_event(&mut state, &Event::Submit)?;
//! let Some(Action::Fetch(request)) = actions.first() else {
//!     panic!("expected a fetch");
//! };
//! assert!(request.url.contains("q=yellow%20flowers"));
//! # Ok::<(), pixzel::PixzelError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod gallery;
pub mod infrastructure;
pub mod search;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Focus};
pub use client::PixabayClient;
pub use domain::{PixzelError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's plugin options.
///
/// ```kdl
/// plugin location="file:/path/to/pixzel.wasm" {
///     api_key "your-pixabay-key"
///     endpoint "https://pixabay.com/api/"
///     image_type "photo"
///     orientation "horizontal"
///     theme "catppuccin-latte"
///     theme_file "~/themes/dusk.toml"
///     trace_level "pixzel=debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Provider API key. Without one, every fetch fails with the provider's
    /// HTTP error.
    pub api_key: Option<String>,

    /// Search endpoint. Default: [`client::DEFAULT_ENDPOINT`]
    pub endpoint: String,

    /// Default: `"photo"`
    pub image_type: String,

    /// Default: `"horizontal"`
    pub orientation: String,

    /// Built-in theme: `catppuccin-mocha` or `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file; `~` resolves under `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: client::DEFAULT_ENDPOINT.to_string(),
            image_type: "photo".to_string(),
            orientation: "horizontal".to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses Zellij's option map. Blank values count as absent.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use pixzel::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "abc123".to_string());
    /// map.insert("orientation".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("abc123"));
    /// assert_eq!(config.orientation, "horizontal");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        Self {
            api_key: get("api_key"),
            endpoint: get("endpoint").unwrap_or(defaults.endpoint),
            image_type: get("image_type").unwrap_or(defaults.image_type),
            orientation: get("orientation").unwrap_or(defaults.orientation),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Builds the query client for these settings.
    #[must_use]
    pub fn client(&self) -> PixabayClient {
        PixabayClient::new(
            self.endpoint.clone(),
            self.api_key.clone(),
            self.image_type.clone(),
            self.orientation.clone(),
        )
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// # Errors
    ///
    /// Returns [`PixzelError::Theme`] if the file cannot be loaded or the
    /// name is not a built-in theme.
    pub fn theme(&self) -> Result<Theme> {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file));
        }
        match &self.theme_name {
            Some(name) => Theme::from_name(name)
                .ok_or_else(|| PixzelError::Theme(format!("unknown theme `{name}`"))),
            None => Ok(Theme::default()),
        }
    }
}

/// Creates the application state for a configuration.
///
/// A theme that fails to load is logged and replaced by the default; a
/// missing API key is logged and left for the provider to reject.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        endpoint = %config.endpoint,
        has_api_key = config.api_key.is_some(),
        "initializing pixzel plugin"
    );

    let theme = config.theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    let client = config.client();
    if !client.has_api_key() {
        tracing::warn!("no api_key configured; searches will be rejected by the provider");
    }

    AppState::new(client, theme)
}
