//! Desktop manifest loading: declared windows, icons, and shell timings.
//!
//! The manifest is validated by the crate build script and embedded as JSON, so decoding at boot
//! only fails if the generated payload and these types drift apart.

use std::time::Duration;

use serde::{Deserialize, Serialize};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/desktop_manifest_generated.rs"));
}

pub use generated::DESKTOP_MANIFEST_JSON;

/// Default wallpaper suggested by the "Change Wallpaper" prompt.
pub const DEFAULT_WALLPAPER_PROMPT_URL: &str = "https://i.imgur.com/5bh6eLS.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Shell-wide behavior knobs.
pub struct ShellBehavior {
    /// Starting value of the z-index counter; the first activation receives `base_z_index + 1`.
    pub base_z_index: u32,
    /// Height reserved at the bottom of the viewport for the taskbar.
    pub taskbar_height_px: i32,
    /// Duration of the cosmetic opening transition.
    pub open_transition_ms: u64,
    /// Delay between beginning and committing a close.
    pub close_transition_ms: u64,
    /// Delay between beginning and committing a minimize.
    pub minimize_transition_ms: u64,
    /// Wallpaper applied at boot, if any.
    #[serde(default)]
    pub default_wallpaper: Option<String>,
}

impl Default for ShellBehavior {
    fn default() -> Self {
        Self {
            base_z_index: 10,
            taskbar_height_px: 40,
            open_transition_ms: 200,
            close_transition_ms: 200,
            minimize_transition_ms: 300,
            default_wallpaper: None,
        }
    }
}

impl ShellBehavior {
    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_transition_ms)
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_transition_ms)
    }

    pub fn minimize_delay(&self) -> Duration {
        Duration::from_millis(self.minimize_transition_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A window declared by the manifest.
pub struct WindowManifest {
    pub id: String,
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A desktop icon declared by the manifest.
pub struct IconManifest {
    pub window_id: String,
    pub glyph: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Parsed desktop manifest.
pub struct ShellConfig {
    pub schema_version: u32,
    pub shell: ShellBehavior,
    #[serde(default)]
    pub windows: Vec<WindowManifest>,
    #[serde(default)]
    pub icons: Vec<IconManifest>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            shell: ShellBehavior::default(),
            windows: Vec::new(),
            icons: Vec::new(),
        }
    }
}

/// Decodes a manifest JSON payload.
///
/// # Errors
///
/// Returns the `serde_json` error when the payload does not match [`ShellConfig`].
pub fn parse_shell_config(raw: &str) -> Result<ShellConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Returns the manifest compiled into this crate, falling back to an empty desktop.
pub fn builtin_shell_config() -> ShellConfig {
    match parse_shell_config(DESKTOP_MANIFEST_JSON) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("desktop manifest decode failed: {err}");
            ShellConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_manifest_decodes_with_expected_timings() {
        let config = parse_shell_config(DESKTOP_MANIFEST_JSON).expect("builtin manifest");

        assert_eq!(config.schema_version, 1);
        assert_eq!(config.shell.base_z_index, 10);
        assert_eq!(config.shell.taskbar_height_px, 40);
        assert_eq!(config.shell.close_delay(), Duration::from_millis(200));
        assert_eq!(config.shell.minimize_delay(), Duration::from_millis(300));
        assert!(!config.windows.is_empty());
        assert!(config
            .icons
            .iter()
            .all(|icon| config.windows.iter().any(|w| w.id == icon.window_id)));
    }

    #[test]
    fn missing_optional_sections_default_to_empty() {
        let raw = r#"{
            "schema_version": 1,
            "shell": {
                "base_z_index": 5,
                "taskbar_height_px": 30,
                "open_transition_ms": 0,
                "close_transition_ms": 10,
                "minimize_transition_ms": 20
            }
        }"#;

        let config = parse_shell_config(raw).expect("minimal manifest");
        assert!(config.windows.is_empty());
        assert!(config.icons.is_empty());
        assert_eq!(config.shell.default_wallpaper, None);
        assert_eq!(config.shell.base_z_index, 5);
    }

    #[test]
    fn malformed_payload_is_rejected() {
        assert!(parse_shell_config("{\"schema_version\": 1}").is_err());
    }
}
