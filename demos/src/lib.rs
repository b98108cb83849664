// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demonstrations for the Dotstrip crates.
//!
//! See the `examples/` directory of this package for the individual demos.
