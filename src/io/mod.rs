// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for frame images, landmark files and settings.

pub mod media;
pub mod points;
pub mod serialization;
