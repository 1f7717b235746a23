// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Dora

// Build script for the native root checker

fn main() {
    // android_logger writes through liblog
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("android") {
        println!("cargo:rustc-link-lib=log");
    }
}
