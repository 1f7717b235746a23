// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Dora

//! Process-wide switch for probe trace messages.

use std::sync::atomic::{AtomicBool, Ordering};

/// Trace lines are on until the managed side says otherwise.
static LOG_DEBUG_MESSAGES: AtomicBool = AtomicBool::new(true);

/// Enable or disable the per-path trace lines emitted while probing
pub fn set_log_debug_messages(enabled: bool) {
    LOG_DEBUG_MESSAGES.store(enabled, Ordering::Relaxed);
}

/// Whether probe trace lines are currently emitted
pub fn log_debug_messages() -> bool {
    LOG_DEBUG_MESSAGES.load(Ordering::Relaxed)
}
