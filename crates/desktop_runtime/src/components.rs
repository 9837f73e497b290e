//! Desktop shell UI composition and interaction surfaces.
//!
//! Components only classify where an event landed and hand an [`InputEvent`] to the runtime;
//! every state change goes through the reducer. Classes and inline styles are a projection of
//! [`DesktopState`].

mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{menus::StartMenu, taskbar::Taskbar, window::DesktopWindow};

use crate::{
    input::{InputEvent, InputTarget},
    model::{DesktopIcon, DesktopState, PointerPosition, WindowRecord},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: icons, windows, start menu, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Drag tracking listens on the whole window so a fast pointer cannot escape the title bar.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_none()) {
            return;
        }
        runtime.handle_input(InputEvent::PointerMove {
            pointer: pointer_from_pointer_event(&ev),
            viewport: runtime.host.get_value().viewport_size(),
        });
    });
    on_cleanup(move || move_listener.remove());

    let up_listener = window_event_listener(ev::pointerup, move |_| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.handle_input(InputEvent::PointerUp);
        }
    });
    on_cleanup(move || up_listener.remove());

    view! {
        <div
            id="desktop"
            class="desktop"
            style=move || state.with(desktop_style)
            on:click=move |_| runtime.handle_input(InputEvent::Click(InputTarget::Desktop))
        >
            <div class="desktop-icons">
                <For
                    each=move || state.get().icons
                    key=|icon| icon.id.0
                    let:icon
                >
                    <DesktopIconView icon=icon />
                </For>
            </div>

            <For
                each=move || {
                    state.with(|desktop| {
                        desktop.windows.iter().map(|w| w.id.clone()).collect::<Vec<_>>()
                    })
                }
                key=|window_id| window_id.0.clone()
                let:window_id
            >
                <DesktopWindow window_id=window_id />
            </For>

            <StartMenu />
        </div>
        <Taskbar />
    }
}

#[component]
fn DesktopIconView(icon: DesktopIcon) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon_id = icon.id;
    let target = InputTarget::DesktopIcon {
        icon_id,
        window_id: icon.window_id.clone(),
    };
    let click_target = target.clone();
    let selected = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| desktop.icon(icon_id).map(|i| i.selected).unwrap_or(false))
    });

    view! {
        <div
            class=move || if selected.get() { "desktop-icon selected" } else { "desktop-icon" }
            data-window=icon.window_id.to_string()
            on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                runtime.handle_input(InputEvent::Click(click_target.clone()));
            }
            on:dblclick=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                runtime.handle_input(InputEvent::DoubleClick(target.clone()));
            }
        >
            <div class="icon-image">{icon.glyph}</div>
            <div class="icon-label">{icon.label}</div>
        </div>
    }
}

fn desktop_style(desktop: &DesktopState) -> String {
    desktop
        .wallpaper_url
        .as_ref()
        .map(|url| format!("background-image:url('{url}');"))
        .unwrap_or_default()
}

/// CSS classes projected from a window record.
fn window_classes(window: &WindowRecord) -> String {
    let mut classes = String::from("window");
    classes.push_str(if window.is_active {
        " active"
    } else {
        " inactive"
    });
    if let Some(transition) = window.transition {
        classes.push(' ');
        classes.push_str(transition.css_class());
    }
    classes
}

/// Inline style projected from a window record.
fn window_style(window: &WindowRecord) -> String {
    let display = if window.is_open() { "block" } else { "none" };
    format!(
        "display:{};left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        display, window.rect.x, window.rect.y, window.rect.w, window.rect.h, window.z_index
    )
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DisplayState, WindowId, WindowRect, WindowTransition};

    fn record(display: DisplayState, is_active: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId::from("about-window"),
            title: "About".to_string(),
            body: String::new(),
            rect: WindowRect {
                x: 12,
                y: 34,
                w: 300,
                h: 200,
            },
            z_index: 11,
            is_active,
            display,
            transition: None,
        }
    }

    #[test]
    fn open_window_projects_position_and_stacking() {
        let window = record(DisplayState::Open, true);

        assert_eq!(
            window_style(&window),
            "display:block;left:12px;top:34px;width:300px;height:200px;z-index:11;"
        );
        assert_eq!(window_classes(&window), "window active");
    }

    #[test]
    fn pending_transition_adds_class_while_window_stays_visible() {
        let mut window = record(DisplayState::Open, false);
        window.transition = Some(WindowTransition::Minimizing);

        assert_eq!(window_classes(&window), "window inactive minimizing");
        assert!(window_style(&window).starts_with("display:block;"));
    }

    #[test]
    fn minimized_and_closed_windows_are_hidden() {
        for display in [DisplayState::Minimized, DisplayState::Closed] {
            assert!(window_style(&record(display, false)).starts_with("display:none;"));
        }
    }

    #[test]
    fn wallpaper_projects_background_image() {
        let mut desktop = DesktopState::default();
        assert_eq!(desktop_style(&desktop), "");

        desktop.wallpaper_url = Some("https://example.com/bg.png".to_string());
        assert_eq!(
            desktop_style(&desktop),
            "background-image:url('https://example.com/bg.png');"
        );
    }
}
