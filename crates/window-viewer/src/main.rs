// File: crates/window-viewer/src/main.rs
// Summary: Displays the comparison chart in a window via RGBA blit (CPU) using winit + softbuffer.
// Drag pans, the mouse wheel zooms around the cursor, any key resets the view.

use anyhow::{Context, Result};
use numdiff::Dataset;
use plot_core::{RenderOptions, ViewState};
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let dataset = Dataset::load(derivplot::DATA_PATH)
        .with_context(|| format!("loading dataset '{}'", derivplot::DATA_PATH))?;
    let mut chart = derivplot::comparison_chart(&dataset);
    log::info!("displaying {} layers", chart.series.len());

    // Same framing as the PNG render: the composed chart is already autoscaled.
    let home_view = ViewState::from_axes(&chart);
    let mut view = home_view;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("derivplot")
        .with_inner_size(winit::dpi::LogicalSize::new(1400.0, 800.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let insets = RenderOptions::default().insets;
    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;
    let mut dragging = false;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left {
                        dragging = state == ElementState::Pressed;
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if let Some((cx, cy)) = cursor {
                        let scroll = match delta {
                            MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
                            MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
                        };
                        view.zoom_at_pixel(
                            scroll,
                            cx,
                            cy,
                            size.width as i32,
                            size.height as i32,
                            &insets,
                        );
                    }
                }
                WindowEvent::KeyboardInput { .. } => {
                    view = home_view;
                }
                _ => {}
            },
            Event::DeviceEvent {
                event: winit::event::DeviceEvent::MouseMotion { delta },
                ..
            } => {
                if dragging {
                    let (dx, dy) = delta;
                    view.pan_by_pixels(dx, dy, size.width as i32, size.height as i32, &insets);
                }
            }
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                let mut opts = RenderOptions::default();
                opts.width = w as i32;
                opts.height = h as i32;
                view.apply_to_chart(&mut chart);

                match chart.render_to_rgba8(&opts) {
                    Ok((rgba, _, _, _)) => {
                        let mut frame = match surface.buffer_mut() {
                            Ok(f) => f,
                            Err(e) => {
                                log::error!("frame buffer: {e}");
                                return;
                            }
                        };
                        let max_px = frame.len().min(rgba.len() / 4);
                        for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                            // Softbuffer wants 0RGB with red in bits 16..24.
                            frame[i] =
                                ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
                        }
                        if let Err(e) = frame.present() {
                            log::error!("present error: {e:?}");
                        }
                    }
                    Err(e) => log::error!("render error: {e}"),
                }
            }
            _ => {}
        }
    })
}
