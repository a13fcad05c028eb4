use boxray_engine::driver::frame_driver::InitializationError;

pub mod eframe;

pub trait UninitApp: 'static {
    type InitApp: App;

    /// Initialises the application, returning the initialised app
    ///
    /// Called once the window exists, with its [`egui::Context`] and the largest texture side
    /// the graphics context supports
    fn init(self, ctx: &egui::Context, max_texture_side: u32) -> anyhow::Result<Self::InitApp>;
}

pub trait App: 'static {
    /// Called each time the window wants a new frame
    ///
    /// This will be where the rendering occurs
    fn on_update(&mut self, ctx: &egui::Context);
    /// Called when the app is being shut down
    fn on_shutdown(&mut self);
}

/// Options for the window the backend creates
#[derive(Debug, Clone)]
pub struct WindowOpts {
    pub title: String,
    /// Size of the drawable area of the window, in points
    pub inner_size: [f32; 2],
    pub vsync: bool,
}

/// A type that can create a window and run an app in it
pub trait UiBackend: Sized {
    /// Creates the window, initialises the app and runs it until the window closes.
    ///
    /// Blocks the calling thread.
    fn run_init<Uninit: UninitApp>(self, app_name: &str, app: Uninit) -> Result<(), InitializationError>;
}
