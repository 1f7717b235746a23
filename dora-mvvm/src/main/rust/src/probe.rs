// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Dora

//! Root binary probe
//!
//! A candidate path counts as present when it can be opened for reading.
//! Missing files, permission errors and anything else the platform refuses
//! all count as absent; the reason is never reported.

use std::fs::File;
use std::path::Path;

use crate::debug::log_debug_messages;

/// Answers "can this path be opened for read"
pub trait PathProbe {
    fn can_open(&self, path: &Path) -> bool;
}

/// Opens the path read-only and drops the handle straight away
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenForRead;

impl PathProbe for OpenForRead {
    fn can_open(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }
}

impl<F> PathProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn can_open(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Check whether a single path can be opened for reading
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    path_exists_with(&OpenForRead, path.as_ref())
}

/// Same as [`path_exists`] with a caller-supplied probe
pub fn path_exists_with<P: PathProbe + ?Sized>(probe: &P, path: &Path) -> bool {
    let found = probe.can_open(path);

    if log_debug_messages() {
        if found {
            log::info!("Looking for binary: {} present", path.display());
        } else {
            log::info!("Looking for binary: {} absent", path.display());
        }
    }

    found
}

/// Count how many of the candidate paths can be opened
///
/// Every entry is probed, duplicates included, in the order given.
pub fn count_present<I>(paths: I) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    count_present_with(&OpenForRead, paths)
}

/// Same as [`count_present`] with a caller-supplied probe
pub fn count_present_with<P, I>(probe: &P, paths: I) -> usize
where
    P: PathProbe + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|path| usize::from(path_exists_with(probe, path.as_ref())))
        .sum()
}

/// True when at least one candidate path exists
pub fn check_for_root<I>(paths: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    count_present(paths) > 0
}

/// Same as [`check_for_root`] with a caller-supplied probe
pub fn check_for_root_with<P, I>(probe: &P, paths: I) -> bool
where
    P: PathProbe + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    count_present_with(probe, paths) > 0
}
