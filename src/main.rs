use anyhow::Result;
use hero_fsm::engine::game_loop::GameLoop;
use hero_fsm::engine::input::{InputConfig, InputManager, CONTROLS};
use hero_fsm::game::{GameConfig, PlayScene};
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

fn main() -> Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Hero FSM...");
    info!("Controls: {}", CONTROLS);

    let config = GameConfig::default();
    let input = InputManager::new(InputConfig::with_defaults())?;
    let mut scene = PlayScene::new(&config, input)?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let (width, height) = config.window_size();
    let window = WindowBuilder::new()
        .with_title(format!("{} - {}", config.title, scene.status()))
        .with_inner_size(winit::dpi::LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut game_loop = GameLoop::new();
    let mut status = scene.status();
    let mut fatal = None;

    event_loop
        .run(|event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    scene.input_mut().process_keyboard_event(&event);
                }
                WindowEvent::Focused(false) => {
                    // Keys released while unfocused never reach us
                    scene.input_mut().reset();
                }
                WindowEvent::RedrawRequested => {
                    for _ in 0..game_loop.begin_frame() {
                        if let Err(e) = scene.update(game_loop.fixed_timestep()) {
                            error!("Scene update failed: {}", e);
                            fatal = Some(e);
                            elwt.exit();
                            return;
                        }
                    }

                    let current = scene.status();
                    if current != status {
                        window.set_title(&format!("{} - {}", config.title, current));
                        status = current;
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    match fatal {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
