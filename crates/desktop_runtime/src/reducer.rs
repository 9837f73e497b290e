//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use std::time::Duration;

use thiserror::Error;

use crate::geometry::clamp_rect_to_viewport;
use crate::model::{
    DesktopIconDescriptor, DesktopState, DragSession, IconId, InteractionState, PointerPosition,
    ViewportSize, WindowId, WindowTransition,
};
use crate::window_manager::{
    activate_window, begin_close, begin_minimize, close_all_windows, commit_transition,
    find_window_mut, open_window, restore_window,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Show, raise, and mirror a window on the taskbar.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Start the close transition of a window.
    BeginClose {
        /// Window to close.
        window_id: WindowId,
    },
    /// Start the minimize transition of a window.
    BeginMinimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Finalize a transition once its visual duration has elapsed.
    CommitTransition {
        /// Window whose transition finished.
        window_id: WindowId,
        /// Transition that was scheduled.
        transition: WindowTransition,
    },
    /// Restore a minimized window (or open a closed one).
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Focus and raise an open window.
    ActivateWindow {
        /// Window to activate.
        window_id: WindowId,
    },
    /// Taskbar entry click: restore when hidden or unfocused, minimize when focused, ignored
    /// while closing.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar entry.
        window_id: WindowId,
    },
    /// Begin closing every open window.
    CloseAllWindows,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Select a desktop icon, deselecting all others.
    SelectIcon {
        /// Icon to select.
        icon_id: IconId,
    },
    /// Deselect every desktop icon.
    ClearIconSelection,
    /// Append a desktop icon at runtime.
    AddDesktopIcon(DesktopIconDescriptor),
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current viewport size used to bound the window.
        viewport: ViewportSize,
    },
    /// End the active window drag.
    EndMove,
    /// Ask the host to prompt for a new wallpaper URL.
    RequestWallpaperChange,
    /// Apply a wallpaper URL; `None` or a blank URL keeps the current one.
    SetWallpaper {
        /// Image URL.
        url: Option<String>,
    },
    /// Ask the host to show the about dialog.
    ShowAbout,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Dispatch [`DesktopAction::CommitTransition`] after `delay`.
    ScheduleTransitionCommit {
        /// Window whose transition is pending.
        window_id: WindowId,
        /// Pending transition.
        transition: WindowTransition,
        /// Visual duration of the transition.
        delay: Duration,
    },
    /// Prompt the user for a wallpaper URL.
    PromptWallpaper,
    /// Show the about dialog.
    ShowAboutDialog,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing targets that do not exist.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
    /// The target desktop icon was not found in the current state.
    #[error("desktop icon not found")]
    IconNotFound,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a missing window or icon. The state is
/// left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id } => {
            effects.extend(open_window(state, &window_id)?);
        }
        DesktopAction::BeginClose { window_id } => {
            effects.extend(begin_close(state, &window_id)?);
        }
        DesktopAction::BeginMinimize { window_id } => {
            effects.extend(begin_minimize(state, &window_id)?);
        }
        DesktopAction::CommitTransition {
            window_id,
            transition,
        } => {
            commit_transition(state, &window_id, transition)?;
        }
        DesktopAction::RestoreWindow { window_id } => {
            effects.extend(restore_window(state, &window_id)?);
        }
        DesktopAction::ActivateWindow { window_id } => {
            find_window_mut(state, &window_id)?;
            activate_window(state, &window_id);
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let window = find_window_mut(state, &window_id)?;
            let focused = window.is_open() && window.is_active;
            let transition = window.transition;
            match transition {
                // The entry goes away once the close commits.
                Some(WindowTransition::Closing) => {}
                Some(WindowTransition::Minimizing) => {
                    effects.extend(restore_window(state, &window_id)?);
                }
                _ if focused => effects.extend(begin_minimize(state, &window_id)?),
                _ => effects.extend(restore_window(state, &window_id)?),
            }
        }
        DesktopAction::CloseAllWindows => {
            effects.extend(close_all_windows(state));
            state.start_menu_open = false;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::SelectIcon { icon_id } => {
            if state.icon(icon_id).is_none() {
                return Err(ReducerError::IconNotFound);
            }
            for icon in &mut state.icons {
                icon.selected = icon.id == icon_id;
            }
        }
        DesktopAction::ClearIconSelection => {
            for icon in &mut state.icons {
                icon.selected = false;
            }
        }
        DesktopAction::AddDesktopIcon(descriptor) => {
            state.push_icon(
                WindowId(descriptor.window_id),
                &descriptor.emoji,
                &descriptor.label,
            );
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let window = find_window_mut(state, &window_id)?;
            if window.is_open() {
                let rect_start = window.rect;
                activate_window(state, &window_id);
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let reserved_bottom = state.behavior.taskbar_height_px;
                let window = find_window_mut(state, &session.window_id)?;
                if window.is_open() {
                    window.rect = clamp_rect_to_viewport(
                        session.rect_start.offset(dx, dy),
                        viewport,
                        reserved_bottom,
                    );
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::RequestWallpaperChange => {
            state.start_menu_open = false;
            effects.push(RuntimeEffect::PromptWallpaper);
        }
        DesktopAction::SetWallpaper { url } => {
            if let Some(url) = url.filter(|url| !url.trim().is_empty()) {
                state.wallpaper_url = Some(url);
            }
        }
        DesktopAction::ShowAbout => {
            state.start_menu_open = false;
            effects.push(RuntimeEffect::ShowAboutDialog);
        }
    }

    Ok(effects)
}
