// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Dora

use thiserror::Error;

/// Failures while reading arguments handed over by the JVM
///
/// These stay on the native side: the entry points log them and report
/// "nothing found" to the caller.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("path array is null")]
    NullPathArray,
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),
}
