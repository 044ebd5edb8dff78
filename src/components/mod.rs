// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the ClipRectPathLine animation

pub mod clip_path_line;

// Re-export commonly used widget views and types
pub use clip_path_line::{NodeChanged, clip_path_line_view};
