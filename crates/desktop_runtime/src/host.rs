//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

#[cfg(target_arch = "wasm32")]
use leptos::logging;
use leptos::set_timeout;

use crate::{
    config::DEFAULT_WALLPAPER_PROMPT_URL,
    model::ViewportSize,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

const ABOUT_MESSAGE: &str =
    "Retro Desktop Portfolio\nBuilt with Rust, Leptos, and WebAssembly.\n\nAll rights reserved.";

#[derive(Debug, Clone)]
/// Browser boundary for timers, dialogs, and viewport queries.
pub struct DesktopHostContext {
    about_message: &'static str,
    wallpaper_prompt_default: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            about_message: ABOUT_MESSAGE,
            wallpaper_prompt_default: DEFAULT_WALLPAPER_PROMPT_URL,
        }
    }
}

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleTransitionCommit {
                window_id,
                transition,
                delay,
            } => set_timeout(
                move || {
                    runtime.dispatch_action(DesktopAction::CommitTransition {
                        window_id,
                        transition,
                    })
                },
                delay,
            ),
            RuntimeEffect::PromptWallpaper => {
                if let Some(url) = self.prompt_wallpaper() {
                    runtime.dispatch_action(DesktopAction::SetWallpaper { url: Some(url) });
                }
            }
            RuntimeEffect::ShowAboutDialog => self.alert(self.about_message),
        }
    }

    /// Returns the full browser viewport; the taskbar reservation is applied by the reducer.
    pub fn viewport_size(&self) -> ViewportSize {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32);
                if let (Some(width), Some(height)) = (width, height) {
                    return ViewportSize { width, height };
                }
            }
        }

        ViewportSize::default()
    }

    fn prompt_wallpaper(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window()?;
            return match window.prompt_with_message_and_default(
                "Enter image URL for new wallpaper:",
                self.wallpaper_prompt_default,
            ) {
                Ok(answer) => answer.filter(|url| !url.trim().is_empty()),
                Err(err) => {
                    logging::warn!("wallpaper prompt failed: {err:?}");
                    None
                }
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = self.wallpaper_prompt_default;
            None
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.alert_with_message(message) {
                    logging::warn!("about dialog failed: {err:?}");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = message;
    }
}
