// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! ClipRectPathLine: a tap-driven shape animation built with Xilem

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    cliprect_pathline::run(EventLoop::with_user_event())
}
