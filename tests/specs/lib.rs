// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end tests of the `psrup` command line, driven through the built
//! binary.

#[cfg(test)]
mod cli;
