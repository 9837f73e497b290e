use desktop_runtime::{use_desktop_runtime, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

use crate::bridge;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Retro Desktop" />
        <Meta name="description" content="A retro desktop-style personal website shell." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <ScriptBridge />
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Exposes the running desktop to page scripts for the lifetime of the shell.
#[component]
fn ScriptBridge() -> impl IntoView {
    bridge::attach(use_desktop_runtime());
    on_cleanup(bridge::detach);
}
