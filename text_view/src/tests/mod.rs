// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "parley")]
mod test_parley;
