// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data structures for frames, landmarks and settings.

pub mod config;
pub mod frame;
