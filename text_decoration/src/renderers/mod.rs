// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various painter implementation backends.

#[cfg(feature = "tiny_skia")]
pub mod tiny_skia;
