//! Zellij plugin wrapper and entry point.
//!
//! This is the only module that calls Zellij host functions. It translates
//! Zellij events and pipe messages into library [`Event`]s, hands them to
//! [`handle_event`], and executes the returned [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: Key, Mouse and permission results; the subscription
//!    lives as long as the plugin instance
//! 3. **Update / Pipe**: translate, handle, execute actions
//! 4. **Render**: remember the viewport for hit-testing, then draw
//!
//! # Event Mapping
//!
//! - `Key(Char)` → `Event::Char`
//! - `Key(Backspace)` → `Event::Backspace`
//! - `Key(Enter)` → `Event::Enter`
//! - `Key(Down)`, `Ctrl+n` → `Event::HighlightNext`
//! - `Key(Up)`, `Ctrl+p` → `Event::HighlightPrev`
//! - `Key(Tab)` → `Event::ToggleOpen`
//! - `Key(Esc)` → `Event::Escape`
//! - `Mouse(LeftClick)` → `Event::Click`
//! - pipe `tagpick::*` → `Event::Pipe`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use tagpick::pipe::{encode_selection, CHANGED_MESSAGE};
use tagpick::{handle_event, Action, Config, Event, PipeCommand};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from the library layer.
    app: tagpick::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: tagpick::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        tagpick::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = tagpick::initialize(&config);

        request_permission(&[
            PermissionType::ReadCliPipes,
            PermissionType::MessageAndLaunchOtherPlugins,
        ]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let span = tracing::debug_span!("plugin_update");
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(Mouse::LeftClick(row, col)) => {
                Event::Click { row, col }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("permissions denied - host pipes and notifications unavailable");
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let span = tracing::debug_span!("plugin_pipe", name = %pipe_message.name);
        let _guard = span.entered();

        let reply_to = match &pipe_message.source {
            PipeSource::Cli(pipe_id) => Some(pipe_id.clone()),
            PipeSource::Plugin(_) | PipeSource::Keybind => None,
        };

        let command = match PipeCommand::parse(&pipe_message.name, pipe_message.payload.as_deref()) {
            Ok(Some(command)) => command,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed pipe message");
                if let Some(pipe_id) = &reply_to {
                    unblock_cli_pipe_input(pipe_id);
                }
                return false;
            }
        };

        self.dispatch(&Event::Pipe { command, reply_to })
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.viewport = (rows, cols);
        tagpick::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::HighlightNext),
                BareKey::Char('p') => Some(Event::HighlightPrev),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::HighlightNext,
            BareKey::Up => Event::HighlightPrev,
            BareKey::Enter => Event::Enter,
            BareKey::Backspace => Event::Backspace,
            BareKey::Tab => Event::ToggleOpen,
            BareKey::Esc => Event::Escape,
            BareKey::Char(c) if !c.is_control() => Event::Char(c),
            _ => return None,
        })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::NotifyChange { selected } => match encode_selection(selected) {
                Ok(payload) => {
                    pipe_message_to_plugin(
                        MessageToPlugin::new(CHANGED_MESSAGE).with_payload(payload.clone()),
                    );
                    for pipe_id in &self.app.subscribers {
                        cli_pipe_output(pipe_id, &format!("{payload}\n"));
                    }
                }
                Err(e) => tracing::warn!(error = %e, "failed to encode selection"),
            },
            Action::ReplyToPipe { pipe_id, payload } => {
                cli_pipe_output(pipe_id, &format!("{payload}\n"));
                unblock_cli_pipe_input(pipe_id);
            }
            Action::ReleasePipe { pipe_id } => unblock_cli_pipe_input(pipe_id),
        }
    }
}
