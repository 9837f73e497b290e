//! Runs the effects the reducer queues: transition-commit timers and browser dialogs.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Drains the effect queue whenever it changes and hands each effect to the host in order.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }

        // Timers armed here dispatch `CommitTransition` later and may queue a new batch.
        let batch = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();
        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
