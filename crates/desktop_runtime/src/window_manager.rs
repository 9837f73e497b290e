//! Window registry and lifecycle transitions used by the desktop reducer.
//!
//! Every transition either completes synchronously or is split into a `begin` step that marks a
//! [`WindowTransition`] and a commit that the host schedules after the configured delay.

use crate::model::{DesktopState, DisplayState, WindowId, WindowRecord, WindowTransition};
use crate::reducer::{ReducerError, RuntimeEffect};

pub(crate) fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Result<&'a mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| &w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}

/// Focuses and raises an open window.
///
/// Returns `false` (and changes nothing) when the window is unknown or not open.
pub fn activate_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let is_open = state
        .window(window_id)
        .map(WindowRecord::is_open)
        .unwrap_or(false);
    if !is_open {
        return false;
    }

    state.z_index_counter = state.z_index_counter.saturating_add(1);
    let z_index = state.z_index_counter;
    for window in &mut state.windows {
        window.is_active = &window.id == window_id;
        if window.is_active {
            window.z_index = z_index;
        }
    }
    state.taskbar.set_exclusive_active(window_id);
    true
}

/// Returns the open window with the highest stacking order.
pub fn topmost_open_window(state: &DesktopState) -> Option<WindowId> {
    state
        .windows
        .iter()
        .filter(|w| w.is_open())
        .max_by_key(|w| w.z_index)
        .map(|w| w.id.clone())
}

/// Hands focus to the topmost open window when nothing is active anymore.
fn ensure_active_window(state: &mut DesktopState) {
    if state.active_window_id().is_some() {
        return;
    }
    match topmost_open_window(state) {
        Some(next) => {
            activate_window(state, &next);
        }
        None => state.taskbar.clear_active(),
    }
}

fn schedule(
    state: &DesktopState,
    window_id: &WindowId,
    transition: WindowTransition,
) -> RuntimeEffect {
    let delay = match transition {
        WindowTransition::Opening => state.behavior.open_delay(),
        WindowTransition::Closing => state.behavior.close_delay(),
        WindowTransition::Minimizing => state.behavior.minimize_delay(),
    };
    RuntimeEffect::ScheduleTransitionCommit {
        window_id: window_id.clone(),
        transition,
        delay,
    }
}

/// Shows a window, raises it, and mirrors it on the taskbar.
///
/// Reopening an open window re-activates it without duplicating its taskbar entry and cancels
/// any pending close or minimize.
pub fn open_window(
    state: &mut DesktopState,
    window_id: &WindowId,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let window = find_window_mut(state, window_id)?;
    window.display = DisplayState::Open;
    window.transition = Some(WindowTransition::Opening);
    let label = window.title.clone();

    state.taskbar.add_entry(window_id, &label);
    activate_window(state, window_id);
    state.start_menu_open = false;

    Ok(vec![schedule(state, window_id, WindowTransition::Opening)])
}

pub fn begin_close(
    state: &mut DesktopState,
    window_id: &WindowId,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if window.is_closed() {
        return Ok(Vec::new());
    }
    window.transition = Some(WindowTransition::Closing);
    Ok(vec![schedule(state, window_id, WindowTransition::Closing)])
}

pub fn begin_minimize(
    state: &mut DesktopState,
    window_id: &WindowId,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if !window.is_open() || window.transition == Some(WindowTransition::Closing) {
        return Ok(Vec::new());
    }
    window.transition = Some(WindowTransition::Minimizing);
    Ok(vec![schedule(state, window_id, WindowTransition::Minimizing)])
}

/// Finalizes a transition started earlier.
///
/// A commit whose transition is no longer pending (for example, a close cancelled by reopening
/// the window) is ignored.
pub fn commit_transition(
    state: &mut DesktopState,
    window_id: &WindowId,
    transition: WindowTransition,
) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if window.transition != Some(transition) {
        return Ok(());
    }
    window.transition = None;

    match transition {
        WindowTransition::Opening => {}
        WindowTransition::Closing => {
            window.display = DisplayState::Closed;
            window.is_active = false;
            state.taskbar.remove_entry(window_id);
            ensure_active_window(state);
        }
        WindowTransition::Minimizing => {
            window.display = DisplayState::Minimized;
            window.is_active = false;
            state.taskbar.set_active(window_id, false);
            ensure_active_window(state);
        }
    }
    Ok(())
}

/// Brings a minimized (or merely unfocused) window back to the front.
///
/// Restoring a closed window opens it so that it regains its taskbar entry.
pub fn restore_window(
    state: &mut DesktopState,
    window_id: &WindowId,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if window.is_closed() {
        return open_window(state, window_id);
    }
    // A pending close still completes; only reopening cancels it.
    if window.transition == Some(WindowTransition::Closing) {
        return Ok(Vec::new());
    }
    window.display = DisplayState::Open;
    if window.transition == Some(WindowTransition::Minimizing) {
        window.transition = None;
    }
    activate_window(state, window_id);
    state.taskbar.set_active(window_id, true);
    Ok(Vec::new())
}

/// Begins closing every open window; minimized windows stay on the taskbar.
pub fn close_all_windows(state: &mut DesktopState) -> Vec<RuntimeEffect> {
    let open: Vec<WindowId> = state
        .windows
        .iter()
        .filter(|w| w.is_open())
        .map(|w| w.id.clone())
        .collect();

    let mut effects = Vec::new();
    for window_id in open {
        if let Ok(mut scheduled) = begin_close(state, &window_id) {
            effects.append(&mut scheduled);
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::{ShellConfig, WindowManifest};

    fn state_with(ids: &[&str]) -> DesktopState {
        let config = ShellConfig {
            windows: ids
                .iter()
                .map(|id| WindowManifest {
                    id: id.to_string(),
                    title: format!("{id} title"),
                    x: 10,
                    y: 20,
                    width: 300,
                    height: 200,
                    body: String::new(),
                })
                .collect(),
            ..ShellConfig::default()
        };
        DesktopState::from_config(&config)
    }

    #[test]
    fn activation_pre_increments_counter_from_base() {
        let mut state = state_with(&["a", "b"]);
        let a = WindowId::from("a");
        let b = WindowId::from("b");

        open_window(&mut state, &a).expect("open a");
        open_window(&mut state, &b).expect("open b");

        assert_eq!(state.window(&a).map(|w| w.z_index), Some(11));
        assert_eq!(state.window(&b).map(|w| w.z_index), Some(12));
        assert_eq!(state.active_window_id(), Some(&b));
    }

    #[test]
    fn activate_ignores_closed_and_minimized_windows() {
        let mut state = state_with(&["a"]);
        let a = WindowId::from("a");

        assert!(!activate_window(&mut state, &a));
        assert_eq!(state.z_index_counter, 10);

        open_window(&mut state, &a).expect("open");
        begin_minimize(&mut state, &a).expect("begin");
        commit_transition(&mut state, &a, WindowTransition::Minimizing).expect("commit");
        assert!(!activate_window(&mut state, &a));
        assert_eq!(state.active_window_id(), None);
    }

    #[test]
    fn commit_for_cancelled_transition_is_ignored() {
        let mut state = state_with(&["a"]);
        let a = WindowId::from("a");

        open_window(&mut state, &a).expect("open");
        begin_close(&mut state, &a).expect("begin close");
        open_window(&mut state, &a).expect("reopen");
        commit_transition(&mut state, &a, WindowTransition::Closing).expect("stale commit");

        let window = state.window(&a).expect("window");
        assert!(window.is_open());
        assert_eq!(window.transition, Some(WindowTransition::Opening));
        assert!(state.taskbar.contains(&a));
    }

    #[test]
    fn closing_window_keeps_unrelated_active_window_in_place() {
        let mut state = state_with(&["a", "b"]);
        let a = WindowId::from("a");
        let b = WindowId::from("b");
        open_window(&mut state, &a).expect("open a");
        open_window(&mut state, &b).expect("open b");
        let b_z = state.window(&b).map(|w| w.z_index);

        begin_close(&mut state, &a).expect("begin");
        commit_transition(&mut state, &a, WindowTransition::Closing).expect("commit");

        assert_eq!(state.active_window_id(), Some(&b));
        assert_eq!(state.window(&b).map(|w| w.z_index), b_z);
        assert!(!state.taskbar.contains(&a));
    }

    #[test]
    fn close_all_skips_minimized_windows() {
        let mut state = state_with(&["a", "b", "c"]);
        for id in ["a", "b", "c"] {
            open_window(&mut state, &WindowId::from(id)).expect("open");
        }
        let c = WindowId::from("c");
        begin_minimize(&mut state, &c).expect("begin");
        commit_transition(&mut state, &c, WindowTransition::Minimizing).expect("commit");

        let effects = close_all_windows(&mut state);

        assert_eq!(effects.len(), 2);
        assert_eq!(
            state.window(&c).map(|w| w.transition),
            Some(None),
            "minimized window should not start closing"
        );
    }

    #[test]
    fn pending_close_is_not_replaced_by_minimize_or_restore() {
        let mut state = state_with(&["a"]);
        let a = WindowId::from("a");
        open_window(&mut state, &a).expect("open");
        commit_transition(&mut state, &a, WindowTransition::Opening).expect("opened");
        begin_close(&mut state, &a).expect("begin close");

        assert_eq!(begin_minimize(&mut state, &a), Ok(Vec::new()));
        assert_eq!(restore_window(&mut state, &a), Ok(Vec::new()));
        commit_transition(&mut state, &a, WindowTransition::Closing).expect("commit");

        let window = state.window(&a).expect("window");
        assert_eq!(window.display, DisplayState::Closed);
        assert!(!state.taskbar.contains(&a));
    }
}
