// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the landmark browser.

pub mod canvas;
pub mod controls;
