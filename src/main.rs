use winit::{
    dpi::PhysicalSize,
    event::Event,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use pixel_brush::config::{Config, ConfigError};
use pixel_brush::error::AppError;
use pixel_brush::graphics::GraphicsRenderer;
use pixel_brush::image::GridImageFactory;
use pixel_brush::input::{InputAction, InputHandler};
use pixel_brush::render::surface_size;
use pixel_brush::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        log::error!("{}", err);
        AppError::from(err)
    })?;
    let (width, height) = surface_size(config.grid_width, config.grid_height, config.cell_size)
        .ok_or_else(|| AppError::from(ConfigError::Invalid("grid does not fit on screen".to_string())))?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Pixel Brush")
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(AppError::from)?;

    let graphics = GraphicsRenderer::new(&window, width, height).map_err(AppError::from)?;
    let mut session = Session::start(&GridImageFactory, graphics, &config).map_err(|err| {
        log::error!("Startup failed: {}", err);
        err
    })?;
    let mut input = InputHandler::new(config.click_slop);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => {
                match input.handle_window_event(&event) {
                    InputAction::Dispatch(events) => {
                        for e in events {
                            session.handle(e);
                        }
                    }
                    InputAction::Quit => *control_flow = ControlFlow::Exit,
                    InputAction::None => {}
                }
            }
            Event::MainEventsCleared => {
                if session.take_pending_frame() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(err) = session.surface_mut().present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
