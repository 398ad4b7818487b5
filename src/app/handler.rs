//! Event handling and state transition logic.
//!
//! The plugin shim translates Zellij keys, mouse clicks and pipe messages
//! into [`Event`]s. [`handle_event`] applies each one to [`AppState`] and
//! returns whether to re-render plus the [`Action`]s to execute.
//!
//! # Event Types
//!
//! - **Typing**: `Char`, `Backspace`, `Enter`
//! - **Navigation**: `HighlightNext`, `HighlightPrev`, `ToggleOpen`, `Escape`
//! - **Pointer**: `Click`
//! - **Host**: `Pipe` with a decoded [`PipeCommand`]
//!
//! While the widget is disabled only `Escape`, outside clicks and host pipes
//! have an effect.
//!
//! # Example
//!
//! ```rust
//! use tagpick::app::{handle_event, AppState, ControllerSettings, Event, SelectionController};
//! use tagpick::ui::Theme;
//! use tagpick::TagOption;
//!
//! let controller = SelectionController::new(
//!     vec![TagOption::new("Rust", "rust")],
//!     vec![],
//!     ControllerSettings::default(),
//! );
//! let mut state = AppState::new(controller, Theme::default());
//!
//! handle_event(&mut state, &Event::Char('r'))?;
//! let (_, actions) = handle_event(&mut state, &Event::Enter)?;
//! assert_eq!(actions.len(), 1);
//! assert_eq!(state.controller.selected().len(), 1);
//! # Ok::<(), tagpick::TagpickError>(())
//! ```

use super::controller::SelectionChanged;
use super::modes::DropdownFocus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::pipe::{encode_selection, PipeCommand};
use crate::ui::layout::Hit;

/// Input events after translation from Zellij.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search text and opens the list.
    Char(char),
    /// Deletes the last search character, or the last chip when the search
    /// is empty.
    Backspace,
    /// Toggles the highlighted candidate, otherwise commits the search text.
    Enter,
    /// Moves the highlight down, opening the list first if needed.
    HighlightNext,
    /// Moves the highlight up, opening the list first if needed.
    HighlightPrev,
    /// Opens or closes the list.
    ToggleOpen,
    /// Closes the list, or hides the pane when it is already closed.
    Escape,

    /// Left mouse button pressed.
    ///
    /// Zellij reports rows relative to the pane, negative when above it.
    Click {
        /// Pane row.
        row: isize,
        /// Pane column.
        col: usize,
    },

    /// A host request received over a pipe.
    Pipe {
        /// Decoded request.
        command: PipeCommand,
        /// CLI pipe to answer or release, if the message came from the CLI.
        reply_to: Option<String>,
    },
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Errors
///
/// Returns an error if a selection cannot be encoded for a pipe reply.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Pipe { command, reply_to } => handle_pipe(state, command, reply_to.as_deref()),
        _ if !state.mode.accepts_input() => Ok(handle_disabled(state, event)),
        Event::Char(c) => {
            let mut search = state.controller.search_text().to_string();
            search.push(*c);
            state.controller.set_search_text(search);
            state.controller.open();
            state.reset_focus();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let mut search = state.controller.search_text().to_string();
            if search.pop().is_some() {
                state.controller.set_search_text(search);
                state.reset_focus();
                return Ok((true, vec![]));
            }
            let changed = state.controller.remove_last();
            Ok(after_change(state, changed))
        }
        Event::Enter => {
            let changed = match state.highlighted_candidate() {
                Some(candidate) => state.controller.toggle(&candidate),
                None => state.controller.create_from_search(),
            };
            Ok(after_change(state, changed))
        }
        Event::HighlightNext | Event::HighlightPrev => {
            if !state.controller.is_open() {
                state.controller.open();
                state.reset_focus();
            }
            if *event == Event::HighlightNext {
                state.highlight_next();
            } else {
                state.highlight_prev();
            }
            Ok((true, vec![]))
        }
        Event::ToggleOpen => {
            state.controller.toggle_open();
            if state.controller.is_open() {
                state.reset_focus();
            }
            Ok((true, vec![]))
        }
        Event::Escape => Ok(escape(state)),
        Event::Click { row, col } => Ok(handle_click(state, *row, *col)),
    }
}

fn handle_disabled(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Escape => escape(state),
        Event::Click { row, col } => (pointer_down(state, *row, *col), vec![]),
        _ => {
            tracing::debug!("widget disabled, input ignored");
            (false, vec![])
        }
    }
}

fn escape(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.controller.is_open() {
        state.controller.close();
        state.focus = DropdownFocus::Input;
        (true, vec![])
    } else {
        (false, vec![Action::CloseFocus])
    }
}

fn handle_click(state: &mut AppState, row: isize, col: usize) -> (bool, Vec<Action>) {
    let Ok(cell_row) = usize::try_from(row) else {
        return (pointer_down(state, row, col), vec![]);
    };

    let hit = state.layout().hit(cell_row, col);
    tracing::debug!(row, col, hit = ?hit, "click");

    match hit {
        Hit::RemoveChip(index) => {
            let Some(option) = state.controller.selected().get(index).cloned() else {
                return (false, vec![]);
            };
            let changed = state.controller.remove(&option);
            after_change(state, changed)
        }
        Hit::Control => {
            state.controller.toggle_open();
            if state.controller.is_open() {
                state.reset_focus();
            }
            (true, vec![])
        }
        Hit::Candidate(index) => {
            let Some(option) = state.candidates().get(index).cloned() else {
                return (false, vec![]);
            };
            state.focus = DropdownFocus::Candidate(index);
            let changed = state.controller.toggle(&option);
            after_change(state, changed)
        }
        Hit::Dropdown => (false, vec![]),
        Hit::Outside => (pointer_down(state, row, col), vec![]),
    }
}

/// Forwards a pointer-down to the controller, closing the list when it
/// lands outside the widget. Rows above the pane are always outside.
fn pointer_down(state: &mut AppState, row: isize, col: usize) -> bool {
    let closed = match usize::try_from(row) {
        Ok(row) => {
            let layout = state.layout();
            state.controller.pointer_down(&layout, row, col)
        }
        Err(_) => state.controller.pointer_down(&above_pane, 0, col),
    };
    if closed {
        state.focus = DropdownFocus::Input;
    }
    closed
}

const fn above_pane(_row: usize, _col: usize) -> bool {
    false
}

fn handle_pipe(
    state: &mut AppState,
    command: &PipeCommand,
    reply_to: Option<&str>,
) -> Result<(bool, Vec<Action>)> {
    let release = |actions: &mut Vec<Action>| {
        if let Some(pipe_id) = reply_to {
            actions.push(Action::ReleasePipe {
                pipe_id: pipe_id.to_string(),
            });
        }
    };

    let mut actions = Vec::new();
    let should_render = match command {
        PipeCommand::SetValue(options) => {
            state.controller.set_external_selection(options.clone());
            state.clamp_focus();
            release(&mut actions);
            true
        }
        PipeCommand::SetOptions(options) => {
            state.controller.set_catalog(options.clone());
            state.clamp_focus();
            release(&mut actions);
            true
        }
        PipeCommand::GetValue => {
            match reply_to {
                Some(pipe_id) => actions.push(Action::ReplyToPipe {
                    pipe_id: pipe_id.to_string(),
                    payload: encode_selection(state.controller.selected())?,
                }),
                None => tracing::debug!("get_value without a CLI pipe to answer"),
            }
            false
        }
        PipeCommand::Subscribe => {
            match reply_to {
                Some(pipe_id) if !state.subscribers.iter().any(|s| s == pipe_id) => {
                    tracing::debug!(pipe_id = %pipe_id, "change subscriber added");
                    state.subscribers.push(pipe_id.to_string());
                }
                Some(_) => {}
                None => tracing::debug!("subscribe without a CLI pipe"),
            }
            false
        }
        PipeCommand::Open => {
            release(&mut actions);
            if state.mode.accepts_input() {
                state.controller.open();
                state.reset_focus();
                true
            } else {
                false
            }
        }
        PipeCommand::Close => {
            release(&mut actions);
            state.controller.close();
            state.focus = DropdownFocus::Input;
            true
        }
    };

    Ok((should_render, actions))
}

/// Keeps focus valid after a selection change and emits the notification.
fn after_change(state: &mut AppState, changed: Option<SelectionChanged>) -> (bool, Vec<Action>) {
    state.clamp_focus();
    match changed {
        Some(SelectionChanged { selected }) => (true, vec![Action::NotifyChange { selected }]),
        None => (true, vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::{ControllerSettings, SelectionController};
    use crate::app::modes::InteractionMode;
    use crate::domain::TagOption;
    use crate::ui::Theme;

    fn state() -> AppState {
        let catalog = vec![
            TagOption::new("React", "react"),
            TagOption::new("Rust", "rust"),
            TagOption::new("Go", "go"),
        ];
        let mut state = AppState::new(
            SelectionController::new(catalog, vec![], ControllerSettings::default()),
            Theme::default(),
        );
        state.viewport = (24, 80);
        state
    }

    fn send(state: &mut AppState, event: Event) -> Vec<Action> {
        handle_event(state, &event).unwrap().1
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    }

    fn selected_values(state: &AppState) -> Vec<String> {
        state
            .controller
            .selected()
            .iter()
            .map(|o| o.value.clone())
            .collect()
    }

    #[test]
    fn typing_opens_without_highlighting() {
        let mut s = state();
        type_text(&mut s, "ru");
        assert!(s.controller.is_open());
        assert_eq!(s.controller.search_text(), "ru");
        assert_eq!(s.focus, DropdownFocus::Input);

        send(&mut s, Event::HighlightNext);
        assert_eq!(s.highlighted_candidate(), Some(TagOption::new("Rust", "rust")));
    }

    #[test]
    fn enter_toggles_highlighted_and_notifies() {
        let mut s = state();
        type_text(&mut s, "ru");
        send(&mut s, Event::HighlightNext);
        let actions = send(&mut s, Event::Enter);

        assert_eq!(selected_values(&s), vec!["rust"]);
        assert_eq!(s.controller.search_text(), "");
        assert_eq!(
            actions,
            vec![Action::NotifyChange {
                selected: vec![TagOption::new("Rust", "rust")]
            }]
        );
    }

    #[test]
    fn enter_after_partial_text_creates_despite_matches() {
        let mut s = state();
        type_text(&mut s, "Re");
        assert_eq!(s.candidates().len(), 1);

        send(&mut s, Event::Enter);
        assert_eq!(s.controller.selected(), &[TagOption::new("Re", "re")]);
        assert_eq!(s.controller.created(), &[TagOption::new("Re", "re")]);
    }

    #[test]
    fn enter_without_match_creates() {
        let mut s = state();
        type_text(&mut s, "New Tag");
        send(&mut s, Event::Enter);

        assert_eq!(selected_values(&s), vec!["new-tag"]);
        assert_eq!(s.controller.selected()[0].label, "New Tag");
    }

    #[test]
    fn enter_on_exact_slug_reuses_catalog_option() {
        let mut s = state();
        type_text(&mut s, "Go");
        send(&mut s, Event::Enter);
        assert_eq!(s.controller.selected(), &[TagOption::new("Go", "go")]);
        assert!(s.controller.created().is_empty());
    }

    #[test]
    fn highlight_wraps_back_to_input() {
        let mut s = state();
        type_text(&mut s, "Go");
        send(&mut s, Event::HighlightNext);
        assert_eq!(s.focus, DropdownFocus::Candidate(0));
        send(&mut s, Event::HighlightPrev);
        assert_eq!(s.focus, DropdownFocus::Input);
    }

    #[test]
    fn backspace_edits_search_before_removing_chips() {
        let mut s = state();
        s.controller.set_external_selection(vec![TagOption::new("Go", "go")]);
        type_text(&mut s, "r");

        assert!(send(&mut s, Event::Backspace).is_empty());
        assert_eq!(selected_values(&s), vec!["go"]);

        let actions = send(&mut s, Event::Backspace);
        assert!(s.controller.selected().is_empty());
        assert_eq!(actions, vec![Action::NotifyChange { selected: vec![] }]);

        assert!(send(&mut s, Event::Backspace).is_empty());
    }

    #[test]
    fn escape_closes_then_hides() {
        let mut s = state();
        send(&mut s, Event::ToggleOpen);
        assert!(s.controller.is_open());

        assert!(send(&mut s, Event::Escape).is_empty());
        assert!(!s.controller.is_open());
        assert_eq!(send(&mut s, Event::Escape), vec![Action::CloseFocus]);
    }

    #[test]
    fn arrow_keys_open_closed_list() {
        let mut s = state();
        send(&mut s, Event::HighlightNext);
        assert!(s.controller.is_open());
        assert_eq!(s.focus, DropdownFocus::Candidate(0));
        send(&mut s, Event::HighlightNext);
        assert_eq!(s.focus, DropdownFocus::Candidate(1));
    }

    #[test]
    fn click_on_candidate_toggles() {
        let mut s = state();
        send(&mut s, Event::ToggleOpen);
        let row = s.layout().candidates[1].row;

        let actions = send(&mut s, Event::Click { row: row as isize, col: 10 });
        assert_eq!(selected_values(&s), vec!["rust"]);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn click_on_chip_remove_hotspot() {
        let mut s = state();
        s.controller.set_external_selection(vec![
            TagOption::new("Go", "go"),
            TagOption::new("Rust", "rust"),
        ]);
        let chip = s.layout().chips[1];

        let actions = send(
            &mut s,
            Event::Click {
                row: chip.row as isize,
                col: chip.remove_col + 1,
            },
        );
        assert_eq!(selected_values(&s), vec!["go"]);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn click_on_control_toggles_open() {
        let mut s = state();
        let control = s.layout().control;
        send(&mut s, Event::Click { row: control.top as isize, col: control.left + 1 });
        assert!(s.controller.is_open());
    }

    #[test]
    fn click_outside_closes() {
        let mut s = state();
        send(&mut s, Event::ToggleOpen);
        let (render, actions) = handle_event(&mut s, &Event::Click { row: 22, col: 40 }).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!s.controller.is_open());

        send(&mut s, Event::ToggleOpen);
        send(&mut s, Event::Click { row: -3, col: 0 });
        assert!(!s.controller.is_open());
    }

    #[test]
    fn click_above_pane_closes_in_every_mode() {
        for mode in [InteractionMode::Interactive, InteractionMode::Disabled] {
            let mut s = state();
            s.mode = mode;
            s.controller.open();
            s.focus = DropdownFocus::Candidate(1);

            let (render, actions) = handle_event(&mut s, &Event::Click { row: -1, col: 4 }).unwrap();
            assert!(render);
            assert!(actions.is_empty());
            assert!(!s.controller.is_open());
            assert_eq!(s.focus, DropdownFocus::Input);
        }
    }

    #[test]
    fn disabled_blocks_interaction_but_not_host() {
        let mut s = state();
        s.mode = InteractionMode::Disabled;
        s.controller.set_external_selection(vec![TagOption::new("Go", "go")]);

        for event in [Event::Char('r'), Event::Backspace, Event::Enter, Event::ToggleOpen] {
            let (render, actions) = handle_event(&mut s, &event).unwrap();
            assert!(!render);
            assert!(actions.is_empty());
        }
        let chip = s.layout().chips[0];
        send(&mut s, Event::Click { row: chip.row as isize, col: chip.remove_col });
        assert_eq!(selected_values(&s), vec!["go"]);
        assert!(!s.controller.is_open());

        send(
            &mut s,
            Event::Pipe {
                command: PipeCommand::SetValue(vec![]),
                reply_to: None,
            },
        );
        assert!(s.controller.selected().is_empty());
    }

    #[test]
    fn set_value_pipe_does_not_notify() {
        let mut s = state();
        let actions = send(
            &mut s,
            Event::Pipe {
                command: PipeCommand::SetValue(vec![TagOption::new("Rust", "rust")]),
                reply_to: Some("cli-1".to_string()),
            },
        );
        assert_eq!(selected_values(&s), vec!["rust"]);
        assert_eq!(
            actions,
            vec![Action::ReleasePipe {
                pipe_id: "cli-1".to_string()
            }]
        );
    }

    #[test]
    fn get_value_replies_with_json() {
        let mut s = state();
        s.controller.set_external_selection(vec![TagOption::new("Go", "go")]);
        let actions = send(
            &mut s,
            Event::Pipe {
                command: PipeCommand::GetValue,
                reply_to: Some("cli-2".to_string()),
            },
        );
        assert_eq!(
            actions,
            vec![Action::ReplyToPipe {
                pipe_id: "cli-2".to_string(),
                payload: r#"[{"label":"Go","value":"go"}]"#.to_string(),
            }]
        );
    }

    #[test]
    fn subscribe_registers_once() {
        let mut s = state();
        let subscribe = Event::Pipe {
            command: PipeCommand::Subscribe,
            reply_to: Some("cli-3".to_string()),
        };
        assert!(send(&mut s, subscribe.clone()).is_empty());
        send(&mut s, subscribe);
        assert_eq!(s.subscribers, vec!["cli-3".to_string()]);
    }

    #[test]
    fn set_options_replaces_candidates() {
        let mut s = state();
        send(
            &mut s,
            Event::Pipe {
                command: PipeCommand::SetOptions(vec![TagOption::new("Zig", "zig")]),
                reply_to: None,
            },
        );
        assert_eq!(s.candidates(), vec![TagOption::new("Zig", "zig")]);
    }
}
