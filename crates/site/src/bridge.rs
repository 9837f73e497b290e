//! Script-facing entry points for the mounted desktop.
//!
//! Page scripts can call `addDesktopIcon({ windowId, emoji, label })` once the shell has mounted.

use std::cell::RefCell;

use desktop_runtime::{DesktopIconDescriptor, DesktopRuntimeContext};
use leptos::logging;
use thiserror::Error;

thread_local! {
    static ATTACHED: RefCell<Option<DesktopRuntimeContext>> = const { RefCell::new(None) };
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum BridgeError {
    #[error("desktop shell is not mounted")]
    NotMounted,
}

pub(crate) fn attach(runtime: DesktopRuntimeContext) {
    ATTACHED.with(|slot| *slot.borrow_mut() = Some(runtime));
}

pub(crate) fn detach() {
    ATTACHED.with(|slot| slot.borrow_mut().take());
}

pub(crate) fn forward_icon(descriptor: DesktopIconDescriptor) -> Result<(), BridgeError> {
    let runtime = ATTACHED.with(|slot| *slot.borrow());
    let Some(runtime) = runtime else {
        return Err(BridgeError::NotMounted);
    };
    logging::log!(
        "adding desktop icon `{}` for {}",
        descriptor.label,
        descriptor.window_id
    );
    runtime.add_desktop_icon(descriptor);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::prelude::*;

    use super::*;

    #[wasm_bindgen(js_name = addDesktopIcon)]
    pub fn add_desktop_icon(descriptor: JsValue) -> Result<(), JsValue> {
        let descriptor: DesktopIconDescriptor = serde_wasm_bindgen::from_value(descriptor)
            .map_err(|err| {
                logging::warn!("addDesktopIcon rejected descriptor: {err}");
                JsValue::from(err)
            })?;
        forward_icon(descriptor).map_err(|err| js_sys::Error::new(&err.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn forwarding_before_mount_is_rejected() {
        detach();
        let result = forward_icon(DesktopIconDescriptor {
            window_id: "about-window".to_string(),
            emoji: "🎨".to_string(),
            label: "Art".to_string(),
        });

        assert_eq!(result, Err(BridgeError::NotMounted));
    }
}
