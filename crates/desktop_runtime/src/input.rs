//! Input routing from classified DOM targets to reducer actions.
//!
//! The element that receives an event knows which region it is, so classification happens at the
//! component boundary and routing here is a pure function of the event alone.

use crate::model::{IconId, PointerPosition, ViewportSize, WindowId};
use crate::reducer::DesktopAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Start menu entries.
pub enum StartMenuItem {
    ChangeWallpaper,
    About,
    CloseAllWindows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Region of the shell an event landed on.
pub enum InputTarget {
    DesktopIcon { icon_id: IconId, window_id: WindowId },
    TitleBar(WindowId),
    CloseButton(WindowId),
    MinimizeButton(WindowId),
    WindowBody(WindowId),
    TaskbarEntry(WindowId),
    StartButton,
    StartMenu,
    StartMenuItem(StartMenuItem),
    /// Desktop background outside any icon or window.
    Desktop,
    /// Taskbar background outside any button.
    Taskbar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Click(InputTarget),
    DoubleClick(InputTarget),
    PointerDown {
        target: InputTarget,
        pointer: PointerPosition,
    },
    PointerMove {
        pointer: PointerPosition,
        viewport: ViewportSize,
    },
    PointerUp,
}

/// Maps a classified input event to the reducer actions it triggers, in dispatch order.
pub fn route_input(event: InputEvent) -> Vec<DesktopAction> {
    match event {
        InputEvent::Click(target) => route_click(target),
        InputEvent::DoubleClick(InputTarget::DesktopIcon { window_id, .. }) => {
            vec![DesktopAction::OpenWindow { window_id }]
        }
        InputEvent::DoubleClick(_) => Vec::new(),
        InputEvent::PointerDown {
            target: InputTarget::TitleBar(window_id),
            pointer,
        } => vec![DesktopAction::BeginMove { window_id, pointer }],
        InputEvent::PointerDown { .. } => Vec::new(),
        InputEvent::PointerMove { pointer, viewport } => {
            vec![DesktopAction::UpdateMove { pointer, viewport }]
        }
        InputEvent::PointerUp => vec![DesktopAction::EndMove],
    }
}

fn route_click(target: InputTarget) -> Vec<DesktopAction> {
    match target {
        InputTarget::DesktopIcon { icon_id, .. } => vec![DesktopAction::SelectIcon { icon_id }],
        InputTarget::CloseButton(window_id) => vec![
            DesktopAction::BeginClose { window_id },
            DesktopAction::CloseStartMenu,
        ],
        InputTarget::MinimizeButton(window_id) => vec![
            DesktopAction::BeginMinimize { window_id },
            DesktopAction::CloseStartMenu,
        ],
        InputTarget::TitleBar(window_id) | InputTarget::WindowBody(window_id) => vec![
            DesktopAction::ActivateWindow { window_id },
            DesktopAction::CloseStartMenu,
        ],
        InputTarget::TaskbarEntry(window_id) => vec![
            DesktopAction::ToggleTaskbarWindow { window_id },
            DesktopAction::CloseStartMenu,
        ],
        InputTarget::StartButton => vec![DesktopAction::ToggleStartMenu],
        InputTarget::StartMenu => Vec::new(),
        InputTarget::StartMenuItem(item) => vec![match item {
            StartMenuItem::ChangeWallpaper => DesktopAction::RequestWallpaperChange,
            StartMenuItem::About => DesktopAction::ShowAbout,
            StartMenuItem::CloseAllWindows => DesktopAction::CloseAllWindows,
        }],
        InputTarget::Desktop => vec![
            DesktopAction::ClearIconSelection,
            DesktopAction::CloseStartMenu,
        ],
        InputTarget::Taskbar => vec![DesktopAction::CloseStartMenu],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn win() -> WindowId {
        WindowId::from("about-window")
    }

    #[test]
    fn icon_click_selects_and_double_click_opens() {
        let target = InputTarget::DesktopIcon {
            icon_id: IconId(3),
            window_id: win(),
        };

        assert_eq!(
            route_input(InputEvent::Click(target.clone())),
            vec![DesktopAction::SelectIcon { icon_id: IconId(3) }]
        );
        assert_eq!(
            route_input(InputEvent::DoubleClick(target)),
            vec![DesktopAction::OpenWindow { window_id: win() }]
        );
    }

    #[test]
    fn only_title_bar_pointer_down_starts_drag() {
        let pointer = PointerPosition { x: 4, y: 9 };

        assert_eq!(
            route_input(InputEvent::PointerDown {
                target: InputTarget::TitleBar(win()),
                pointer,
            }),
            vec![DesktopAction::BeginMove {
                window_id: win(),
                pointer,
            }]
        );
        assert!(route_input(InputEvent::PointerDown {
            target: InputTarget::WindowBody(win()),
            pointer,
        })
        .is_empty());
    }

    #[test]
    fn outside_clicks_close_start_menu_but_menu_clicks_do_not() {
        assert_eq!(
            route_input(InputEvent::Click(InputTarget::Desktop)),
            vec![
                DesktopAction::ClearIconSelection,
                DesktopAction::CloseStartMenu
            ]
        );
        assert_eq!(
            route_input(InputEvent::Click(InputTarget::Taskbar)),
            vec![DesktopAction::CloseStartMenu]
        );
        assert!(route_input(InputEvent::Click(InputTarget::StartMenu)).is_empty());
        assert_eq!(
            route_input(InputEvent::Click(InputTarget::StartButton)),
            vec![DesktopAction::ToggleStartMenu]
        );
    }

    #[test]
    fn window_controls_route_to_lifecycle_actions() {
        assert_eq!(
            route_input(InputEvent::Click(InputTarget::CloseButton(win()))),
            vec![
                DesktopAction::BeginClose { window_id: win() },
                DesktopAction::CloseStartMenu
            ]
        );
        assert_eq!(
            route_input(InputEvent::Click(InputTarget::MinimizeButton(win()))),
            vec![
                DesktopAction::BeginMinimize { window_id: win() },
                DesktopAction::CloseStartMenu
            ]
        );
        assert_eq!(
            route_input(InputEvent::Click(InputTarget::TaskbarEntry(win()))),
            vec![
                DesktopAction::ToggleTaskbarWindow { window_id: win() },
                DesktopAction::CloseStartMenu
            ]
        );
    }

    #[test]
    fn pointer_up_always_ends_drag() {
        assert_eq!(route_input(InputEvent::PointerUp), vec![DesktopAction::EndMove]);
    }
}
