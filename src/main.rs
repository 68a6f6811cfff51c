//! Corgi Coin Flip
//!
//! A one-window coin-flip toy: the coin spins slowly while idle, flips with
//! a ping and a random outcome when clicked, and settles on the result
//! until the next flip or a reset. The event loop drives the controller
//! once per frame and blits the CPU-rendered scene to the window.

mod app;
mod audio;
mod config;
mod domain;
mod input;
mod ui;

use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use tracing_subscriber::EnvFilter;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use app::FlipController;
use config::FlipTuning;
use ui::scene::{SCENE_HEIGHT, SCENE_WIDTH};
use ui::{CoinRenderer, SceneLayout};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let tuning = FlipTuning::default();
    tuning.validate()?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Corgi Coin Flip")
        .with_inner_size(LogicalSize::new(SCENE_WIDTH, SCENE_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let surface_size = window.inner_size();
    let surface = SurfaceTexture::new(surface_size.width, surface_size.height, &window);
    let mut pixels = Pixels::new(SCENE_WIDTH, SCENE_HEIGHT, surface)?;

    let scene = SceneLayout::default();
    let mut renderer = CoinRenderer::new(SCENE_WIDTH, SCENE_HEIGHT)?;
    let mut controller = FlipController::new(tuning, Instant::now());

    // Start fetching/decoding the ping right away; the output device itself
    // is only claimed on the first interaction.
    controller.preload_audio();

    let mut cursor = (0.0f32, 0.0f32);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    // Map to buffer coordinates so hidpi scaling cannot skew
                    // hit testing.
                    if let Ok((px, py)) =
                        pixels.window_pos_to_pixel((position.x as f32, position.y as f32))
                    {
                        cursor = (px as f32, py as f32);
                    }
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    let now = Instant::now();
                    controller.note_interaction();
                    if let Some(control) =
                        scene.hit_test(cursor.0, cursor.1, controller.info_open())
                    {
                        controller.handle_pointer_down(control, now);
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    let now = Instant::now();
                    controller.note_interaction();
                    if let Some(action) = input::action_for_key(key) {
                        controller.handle_key(action, now);
                    }
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        tracing::error!(%err, "surface resize failed");
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => window.request_redraw(),
            Event::RedrawRequested(_) => {
                controller.on_frame(Instant::now());
                renderer.render(&scene, &controller.snapshot());
                if let Err(err) = renderer.copy_to(pixels.frame_mut()) {
                    tracing::error!(%err, "frame copy failed");
                }
                if let Err(err) = pixels.render() {
                    tracing::error!(%err, "present failed");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
