pub mod components;
pub mod config;
mod effect_executor;
pub mod geometry;
pub mod host;
pub mod input;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod taskbar_mirror;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{builtin_shell_config, parse_shell_config, ShellConfig};
pub use input::{route_input, InputEvent, InputTarget, StartMenuItem};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use taskbar_mirror::{TaskbarEntry, TaskbarMirror};
