use super::*;
use crate::model::WindowId;

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = {
        let window_id = window_id.clone();
        Signal::derive(move || runtime.state.with(|desktop| desktop.window(&window_id).cloned()))
    };
    let (title, body) = window
        .with_untracked(|w| w.as_ref().map(|w| (w.title.clone(), w.body.clone())))
        .unwrap_or_default();

    let begin_move = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            ev.prevent_default();
            runtime.handle_input(InputEvent::PointerDown {
                target: InputTarget::TitleBar(window_id.clone()),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let title_click = {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            runtime.handle_input(InputEvent::Click(InputTarget::TitleBar(window_id.clone())));
        }
    };
    let body_click = {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            runtime.handle_input(InputEvent::Click(InputTarget::WindowBody(window_id.clone())));
        }
    };
    let minimize = {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.handle_input(InputEvent::Click(InputTarget::MinimizeButton(
                window_id.clone(),
            )));
        }
    };
    let close = {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.handle_input(InputEvent::Click(InputTarget::CloseButton(window_id.clone())));
        }
    };

    view! {
        <section
            id=window_id.to_string()
            class=move || window.with(|w| w.as_ref().map(window_classes).unwrap_or_default())
            style=move || {
                window.with(|w| {
                    w.as_ref().map(window_style).unwrap_or_else(|| "display:none;".to_string())
                })
            }
            role="dialog"
            aria-label=title.clone()
            on:click=body_click
        >
            <header class="title-bar" on:pointerdown=begin_move on:click=title_click>
                <span>{title}</span>
                <div class="window-controls">
                    <button
                        class="minimize-btn"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=minimize
                    >
                        "_"
                    </button>
                    <button
                        class="close-btn"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=close
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">
                <p>{body}</p>
            </div>
        </section>
    }
}
