use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellSection {
    base_z_index: u32,
    taskbar_height_px: i32,
    open_transition_ms: u64,
    close_transition_ms: u64,
    minimize_transition_ms: u64,
    #[serde(default)]
    default_wallpaper: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    id: String,
    title: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    #[serde(default)]
    body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IconManifest {
    window_id: String,
    glyph: String,
    label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    shell: ShellSection,
    #[serde(default)]
    windows: Vec<WindowManifest>,
    #[serde(default)]
    icons: Vec<IconManifest>,
}

fn validate(manifest: &DesktopManifest, path: &str) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {path}: expected 1 found {}",
            manifest.schema_version
        );
    }
    if manifest.shell.taskbar_height_px < 0 {
        panic!("negative taskbar height in {path}");
    }

    let mut seen = HashSet::new();
    for window in &manifest.windows {
        if window.id.trim().is_empty() {
            panic!("window with empty id in {path}");
        }
        if !seen.insert(window.id.as_str()) {
            panic!("duplicate window id `{}` in {path}", window.id);
        }
        if window.width <= 0 || window.height <= 0 {
            panic!("window `{}` in {path} must have a positive size", window.id);
        }
    }

    for icon in &manifest.icons {
        if !seen.contains(icon.window_id.as_str()) {
            panic!(
                "icon `{}` in {path} references unknown window `{}`",
                icon.label, icon.window_id
            );
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let json = serde_json::to_string_pretty(&manifest).expect("serialize desktop manifest");
    let generated = format!(
        "/// Build-time validated desktop manifest JSON.\n\
pub const DESKTOP_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
