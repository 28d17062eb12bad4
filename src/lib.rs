// src/lib.rs

pub mod app;
pub mod cli;
pub mod court_lib;
pub mod engine_lib;
pub mod error;
pub mod rendering_lib;
pub mod ui;

use std::sync::Arc;

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

use app::CourtApp;
use court_lib::{CourtConfig, CourtGeometryGenerator};
use error::AppResult;

pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            // Already initialized is fine.
            let _ = console_log::init_with_level(log::Level::Warn);
        } else {
            env_logger::init();
        }
    }
}

/// Generates the court once, then drives the cooperative frame loop until
/// the window closes.
pub async fn run(config: CourtConfig) -> AppResult<()> {
    log::info!("Court config: {:?}", config);
    let scene = CourtGeometryGenerator::try_generate_court(&config)?;
    for shape in &scene {
        log::debug!("  {}", shape);
    }

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Basketball Court")
            .with_inner_size(winit::dpi::LogicalSize::new(1024, 768))
            .build(&event_loop)?,
    );

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        let attached = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            });
        if attached.is_none() {
            log::error!("Couldn't append canvas to document body.");
        }
    }

    let mut app_state = CourtApp::new(window.clone(), &scene).await?;
    let mut last_time = std::time::Instant::now();

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if !app_state.handle_window_event(event, &window) {
                    match event {
                        WindowEvent::CloseRequested => {
                            target.exit();
                        }
                        WindowEvent::Resized(physical_size) => {
                            app_state.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => { /* In AboutToWait */ }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                let now = std::time::Instant::now();
                let dt = (now - last_time).as_secs_f32();
                last_time = now;

                app_state.update(dt);
                match app_state.render(&window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("Surface lost or outdated, reconfiguring");
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("WGPU Out Of Memory! Exiting.");
                        target.exit();
                    }
                    Err(e) => log::warn!("Surface error: {:?}", e),
                }

                if !target.exiting() {
                    window.request_redraw();
                }
            }
            Event::LoopExiting => {
                log::info!("Event loop exiting");
            }
            _ => {}
        }
    })?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init_logging();
    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = run(CourtConfig::default()).await {
            log::error!("{}", err);
        }
    });
}
