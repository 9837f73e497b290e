use std::time::Duration;

use super::*;
use crate::taskbar_mirror::TaskbarEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_taskbar_clock(snapshot: TaskbarClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

fn taskbar_item_class(entry: &TaskbarEntry) -> &'static str {
    if entry.is_active {
        "taskbar-item active"
    } else {
        "taskbar-item"
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let taskbar_height = state.with_untracked(|desktop| desktop.behavior.taskbar_height_px);

    view! {
        <footer
            id="taskbar"
            class="taskbar"
            style=format!("height:{taskbar_height}px;")
            on:click=move |_| runtime.handle_input(InputEvent::Click(InputTarget::Taskbar))
        >
            <button
                id="start-button"
                class=move || {
                    if state.with(|desktop| desktop.start_menu_open) {
                        "start-button pressed"
                    } else {
                        "start-button"
                    }
                }
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    runtime.handle_input(InputEvent::Click(InputTarget::StartButton));
                }
            >
                "Start"
            </button>
            <div id="taskbar-items" class="taskbar-items">
                <For
                    each=move || state.with(|desktop| desktop.taskbar.entries().to_vec())
                    key=|entry| (entry.window_id.0.clone(), entry.is_active)
                    let:entry
                >
                    {{
                        let window_id = entry.window_id.clone();
                        view! {
                            <div
                                class=taskbar_item_class(&entry)
                                data-window-id=entry.window_id.to_string()
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    runtime.handle_input(InputEvent::Click(
                                        InputTarget::TaskbarEntry(window_id.clone()),
                                    ));
                                }
                            >
                                {entry.label.clone()}
                            </div>
                        }
                    }}
                </For>
            </div>
            <div id="clock" class="taskbar-clock">
                {move || format_taskbar_clock(clock_now.get())}
            </div>
        </footer>
    }
}
