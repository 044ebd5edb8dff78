// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! ClipRectPathLine: a tap-driven shape animation built with Xilem
//!
//! Each tap animates a mirrored figure of lines, a clipped rectangle and a
//! triangle in and out in the current palette color, then moves on to the
//! next color. The palette is walked forward to its end, then backward.

use anyhow::Context;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WidgetView, WindowView, Xilem, window};

pub mod animation;
mod components;
mod config;
mod data;
pub mod render;
mod settings;
mod theme;

use components::clip_path_line_view;
use config::Config;
use data::AppState;

/// Entry point for the ClipRectPathLine application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cliprect_pathline=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let initial_state = AppState::new(handle_command_line_args());

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Read the optional `WIDTHxHEIGHT` argument, falling back to defaults
fn handle_command_line_args() -> Config {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match Config::from_args(&args).context("Invalid window size argument") {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{:#}", e);
            tracing::error!("Usage: cliprect-pathline [WIDTHxHEIGHT]");
            Config::default()
        }
    }
}

/// Build the single full-window canvas.
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(state.window_size.width, state.window_size.height);
    let window_view = window(state.main_window_id, state.title(), canvas());
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}

fn canvas() -> impl WidgetView<AppState> + use<> {
    clip_path_line_view(|state: &mut AppState, change| state.node_changed(change))
}
