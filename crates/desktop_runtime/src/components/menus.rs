use super::*;
use crate::input::StartMenuItem;

const START_MENU_ITEMS: [(StartMenuItem, &str, &str); 3] = [
    (StartMenuItem::ChangeWallpaper, "🖼️", "Change Wallpaper"),
    (StartMenuItem::About, "ℹ️", "About"),
    (StartMenuItem::CloseAllWindows, "❌", "Close All Windows"),
];

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = Signal::derive(move || runtime.state.with(|desktop| desktop.start_menu_open));

    view! {
        <div
            id="start-menu"
            class="start-menu"
            role="menu"
            style=move || if open.get() { "display:block;" } else { "display:none;" }
            on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                runtime.handle_input(InputEvent::Click(InputTarget::StartMenu));
            }
        >
            {START_MENU_ITEMS
                .into_iter()
                .map(|(item, glyph, label)| {
                    view! {
                        <div
                            class="start-menu-item"
                            role="menuitem"
                            on:click=move |ev: web_sys::MouseEvent| {
                                ev.stop_propagation();
                                runtime.handle_input(InputEvent::Click(
                                    InputTarget::StartMenuItem(item),
                                ));
                            }
                        >
                            <span class="start-menu-glyph">{glyph}</span>
                            <span>{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
