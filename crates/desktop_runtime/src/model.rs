use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{ShellBehavior, ShellConfig};
use crate::taskbar_mirror::TaskbarMirror;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IconId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    Closed,
    Open,
    Minimized,
}

/// Cosmetic phase between beginning and committing a lifecycle change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowTransition {
    Opening,
    Closing,
    Minimizing,
}

impl WindowTransition {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Closing => "closing",
            Self::Minimizing => "minimizing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn with_position(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub body: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub is_active: bool,
    pub display: DisplayState,
    pub transition: Option<WindowTransition>,
}

impl WindowRecord {
    pub fn is_open(&self) -> bool {
        self.display == DisplayState::Open
    }

    pub fn is_closed(&self) -> bool {
        self.display == DisplayState::Closed
    }

    pub fn is_minimized(&self) -> bool {
        self.display == DisplayState::Minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub id: IconId,
    pub window_id: WindowId,
    pub glyph: String,
    pub label: String,
    pub selected: bool,
}

/// Payload accepted by `addDesktopIcon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopIconDescriptor {
    pub window_id: String,
    pub emoji: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub behavior: ShellBehavior,
    pub windows: Vec<WindowRecord>,
    pub taskbar: TaskbarMirror,
    pub icons: Vec<DesktopIcon>,
    /// Last z-index handed out; activation pre-increments it.
    pub z_index_counter: u32,
    pub next_icon_id: u64,
    pub start_menu_open: bool,
    pub wallpaper_url: Option<String>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}

impl DesktopState {
    /// Registers every declared window (closed) and icon.
    pub fn from_config(config: &ShellConfig) -> Self {
        let windows = config
            .windows
            .iter()
            .map(|decl| WindowRecord {
                id: WindowId(decl.id.clone()),
                title: decl.title.clone(),
                body: decl.body.clone(),
                rect: WindowRect {
                    x: decl.x,
                    y: decl.y,
                    w: decl.width,
                    h: decl.height,
                },
                z_index: config.shell.base_z_index,
                is_active: false,
                display: DisplayState::Closed,
                transition: None,
            })
            .collect();

        let mut state = Self {
            behavior: config.shell.clone(),
            windows,
            taskbar: TaskbarMirror::default(),
            icons: Vec::new(),
            z_index_counter: config.shell.base_z_index,
            next_icon_id: 1,
            start_menu_open: false,
            wallpaper_url: config.shell.default_wallpaper.clone(),
        };
        for icon in &config.icons {
            state.push_icon(WindowId(icon.window_id.clone()), &icon.glyph, &icon.label);
        }
        state
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.windows.iter().find(|w| w.is_active).map(|w| &w.id)
    }

    pub fn icon(&self, icon_id: IconId) -> Option<&DesktopIcon> {
        self.icons.iter().find(|icon| icon.id == icon_id)
    }

    pub(crate) fn push_icon(&mut self, window_id: WindowId, glyph: &str, label: &str) -> IconId {
        let id = IconId(self.next_icon_id);
        self.next_icon_id = self.next_icon_id.saturating_add(1);
        self.icons.push(DesktopIcon {
            id,
            window_id,
            glyph: glyph.to_string(),
            label: label.to_string(),
            selected: false,
        });
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
