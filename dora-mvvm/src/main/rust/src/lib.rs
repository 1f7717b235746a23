// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Dora

//! Dora Root Checker - Rust Implementation
//!
//! Native half of `dora.security.RootCheckerNative`. The managed side hands
//! over a list of well-known binary locations (`su`, `busybox`, ...) and this
//! library reports whether any of them can be opened for reading.

// Loaded from Java as System.loadLibrary("rootChecker")
#![allow(non_snake_case)]

pub mod debug;
pub mod error;
pub mod probe;

use std::panic::{self, AssertUnwindSafe};

use jni::objects::{JObject, JObjectArray, JString};
use jni::sys::{jboolean, jint, JNI_FALSE};
use jni::JNIEnv;

#[cfg(target_os = "android")]
use android_logger::Config;
#[cfg(target_os = "android")]
use log::LevelFilter;

pub use debug::{log_debug_messages, set_log_debug_messages};
pub use error::BridgeError;
pub use probe::{
    check_for_root, check_for_root_with, count_present, count_present_with, path_exists,
    path_exists_with, OpenForRead, PathProbe,
};

/// Initialize logging for Android
#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("RootChecker"),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    // No-op for non-Android platforms
}

/// Read the `Object[]` of candidate paths into owned strings
///
/// Null elements and strings the JVM refuses to hand over are skipped, which
/// makes them count as absent.
fn read_path_array(
    env: &mut JNIEnv<'_>,
    array: &JObjectArray<'_>,
) -> Result<Vec<String>, BridgeError> {
    if array.is_null() {
        return Err(BridgeError::NullPathArray);
    }

    let len = env.get_array_length(array)?;
    let mut paths = Vec::with_capacity(usize::try_from(len).unwrap_or_default());

    for index in 0..len {
        let element = match env.get_object_array_element(array, index) {
            Ok(element) => element,
            Err(err) => {
                skip_element(env, index, &err);
                continue;
            }
        };
        // Released at the end of each iteration so long arrays don't fill the local table
        let element = env.auto_local(JString::from(element));
        if element.is_null() {
            if log_debug_messages() {
                log::info!("Path #{} is null, treating as absent", index);
            }
            continue;
        }

        match env.get_string(&element).map(String::from) {
            Ok(path) => paths.push(path),
            Err(err) => skip_element(env, index, &err),
        }
    }

    Ok(paths)
}

fn skip_element(env: &mut JNIEnv<'_>, index: i32, err: &jni::errors::Error) {
    if log_debug_messages() {
        log::info!("Path #{} unreadable ({}), treating as absent", index, err);
    }
    clear_pending_exception(env);
}

/// A failed JNI call may leave a Java exception behind; the caller only ever sees a result
fn clear_pending_exception(env: &mut JNIEnv<'_>) {
    if env.exception_check().unwrap_or(false) {
        if let Err(err) = env.exception_clear() {
            log::error!("Failed to clear pending exception: {}", err);
        }
    }
}

// ============================================================================
// JNI Bindings
// ============================================================================

/// Toggle per-path trace messages - JNI entry point
#[no_mangle]
pub extern "system" fn Java_dora_security_RootCheckerNative_setLogDebugMessages(
    _env: JNIEnv,
    _this: JObject,
    debug: jboolean,
) {
    init_logging();
    set_log_debug_messages(debug != JNI_FALSE);
}

/// Check for root binaries - JNI entry point
///
/// Returns 1 when at least one of the given paths can be opened for reading,
/// 0 otherwise (including a null or empty array).
#[no_mangle]
pub extern "system" fn Java_dora_security_RootCheckerNative_checkForRoot<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    paths: JObjectArray<'local>,
) -> jint {
    init_logging();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        read_path_array(&mut env, &paths).map(check_for_root)
    }));

    let found = match outcome {
        Ok(Ok(found)) => found,
        Ok(Err(err)) => {
            log::error!("checkForRoot: {}", err);
            false
        }
        Err(_) => {
            log::error!("checkForRoot: panic while probing paths");
            false
        }
    };

    clear_pending_exception(&mut env);
    jint::from(found)
}
