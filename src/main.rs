//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the pixzel library and the Zellij plugin
//! system: it maps host events to library events and executes the library's
//! actions through host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; fetches issued before the answer
//!    are held back and sent once it is granted
//! 3. **Update**: Translate host events, delegate to `handle_event`
//! 4. **Render**: Record the pane size, then call the library renderer
//!
//! # Event Mapping
//!
//! - `Key(Esc)` → `Event::Escape` (the handler routes it to the modal first)
//! - `Mouse(LeftClick)` → `Event::Click` (converted to 1-indexed cells)
//! - `WebRequestResult` → `Event::FetchSettled`
//! - `Timer` → `Event::AdvisoryExpired`
//!
//! # Keybindings
//!
//! Search bar focused:
//! - printable keys: edit the query
//! - `Enter`: search
//! - `Tab`/`Down`/`Esc`: focus the gallery
//!
//! Gallery focused:
//! - `j`/`Down`, `k`/`Up`: move selection
//! - `Enter`: enlarge the selected image
//! - `m`: load more
//! - `/`: focus the search bar
//! - `q`: hide the plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use pixzel::client::FetchRequest;
use pixzel::{handle_event, Action, Config, Event, Focus};

register_plugin!(State);

/// Status reported for fetches that cannot be sent without web access.
const PERMISSION_DENIED_STATUS: u16 = 403;

/// Plugin state wrapper.
struct State {
    app: pixzel::AppState,

    /// `None` until the host answers the permission request.
    web_access: Option<bool>,

    /// Fetches issued before the permission answer arrived.
    pending: Vec<FetchRequest>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: pixzel::initialize(&Config::default()),
            web_access: None,
            pending: Vec::new(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        pixzel::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = pixzel::initialize(&config);
        tracing::debug!("app state initialized");

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!(
            "plugin_update_event",
            otel.name = %format!("plugin_update::{event_name}"),
            event_type = %event_name
        );
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Event::FetchSettled {
                    status,
                    body,
                    context,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::AdvisoryExpired,
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                return self.handle_permission_result(permissions);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.layout = pixzel::ui::Layout::new(rows, cols);
        pixzel::ui::render(&self.app);
    }
}

impl State {
    /// Runs one library event and executes its actions. Returns whether to
    /// re-render.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(action);
                }
                render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, focus = ?self.app.focus, "key event");

        if key.bare_key == BareKey::Esc {
            return Some(Event::Escape);
        }
        if !key.key_modifiers.is_empty() {
            return None;
        }

        Some(match self.app.focus {
            Focus::SearchBar => match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Backspace => Event::Backspace,
                BareKey::Tab | BareKey::Down => Event::FocusGallery,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            Focus::Gallery => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::OpenSelected,
                BareKey::Char('m') => Event::LoadMore,
                BareKey::Char('/') | BareKey::Tab => Event::FocusSearch,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
        })
    }

    /// Host mouse coordinates are 0-indexed; the library uses 1-indexed
    /// cells like the renderer.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                Some(Event::Click { row, col: col + 1 })
            }
            _ => None,
        }
    }

    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        let pending = std::mem::take(&mut self.pending);
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!(pending = pending.len(), "web access granted");
                self.web_access = Some(true);
                for request in pending {
                    Self::send(&request);
                }
                false
            }
            PermissionStatus::Denied => {
                tracing::warn!(pending = pending.len(), "web access denied - searches will fail");
                self.web_access = Some(false);
                pending
                    .into_iter()
                    .fold(false, |render, request| self.reject(request) | render)
            }
        }
    }

    fn send(request: &FetchRequest) {
        web_request(
            &request.url,
            HttpVerb::Get,
            BTreeMap::new(),
            Vec::new(),
            request.context.clone(),
        );
    }

    /// Settles a fetch that cannot be sent as a failed request.
    fn reject(&mut self, request: FetchRequest) -> bool {
        self.dispatch(&Event::FetchSettled {
            status: PERMISSION_DENIED_STATUS,
            body: b"web access permission denied".to_vec(),
            context: request.context,
        })
    }

    /// Executes an action. Returns whether it changed what is on screen.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::CloseFocus => {
                hide_self();
                false
            }
            Action::Fetch(request) => match self.web_access {
                Some(true) => {
                    tracing::debug!(url_len = request.url.len(), "sending web request");
                    Self::send(&request);
                    false
                }
                Some(false) => self.reject(request),
                None => {
                    tracing::debug!("web access pending - holding request");
                    self.pending.push(request);
                    false
                }
            },
            Action::ScheduleAdvisoryExpiry { millis } => {
                #[allow(clippy::cast_precision_loss)]
                set_timeout(millis as f64 / 1000.0);
                false
            }
        }
    }
}
