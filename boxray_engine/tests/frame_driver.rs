use boxray_engine::core::types::*;
use boxray_engine::driver::frame_driver::{FrameDriver, FrameError, FrameState, FrameStatus, InitializationError, SetupError};
use boxray_engine::driver::surface::SurfaceError;
use boxray_engine::render::presentation::fullscreen_triangle;
use boxray_engine::render::render_opts::{PresentOpts, RenderOpts};
use boxray_engine::render::ResourceCompileError;
use boxray_engine::scene::preset;
use common::{render_simple, ScriptedSurface, SMALL_RENDER_OPTIONS};
use nonzero::nonzero;

mod common;

fn running_driver(surface: &mut ScriptedSurface) -> FrameDriver {
    let mut driver = FrameDriver::new(PresentOpts {
        swap_interval: 0,
        stats_log_interval: nonzero!(2_u64),
    });
    driver
        .initialise(surface, preset::table_room(), &SMALL_RENDER_OPTIONS)
        .expect("driver should initialise");
    driver
}

#[test]
fn initialise_moves_to_running() {
    let mut surface = ScriptedSurface::closing_after(0);
    let mut driver = FrameDriver::new(PresentOpts::default());
    assert_eq!(driver.state(), FrameState::Uninitialized);
    assert!(driver.output_image().is_none());

    driver
        .initialise(&mut surface, preset::table_room(), &SMALL_RENDER_OPTIONS)
        .expect("driver should initialise");
    assert_eq!(driver.state(), FrameState::Running);
    assert_eq!(surface.allocated, Some(Size2::new(37, 21)));

    // Nothing has been rendered yet
    let image = driver.output_image().expect("running driver owns an image");
    assert!(image.iter().all(|px| *px == OutputColour::OPAQUE_BLACK));
}

#[test]
fn initialising_twice_is_an_error() {
    let mut surface = ScriptedSurface::closing_after(0);
    let mut driver = running_driver(&mut surface);

    let res = driver.initialise(&mut surface, preset::table_room(), &SMALL_RENDER_OPTIONS);
    assert!(matches!(
        res,
        Err(SetupError::Initialization(InitializationError::AlreadyInitialised {
            state: FrameState::Running
        }))
    ));
    assert_eq!(surface.allocations, 1);
}

#[test]
fn frame_before_initialise_is_an_error() {
    let mut surface = ScriptedSurface::closing_after(0);
    let mut driver = FrameDriver::new(PresentOpts::default());
    let res = driver.run_frame(&mut surface);
    assert!(matches!(
        res,
        Err(FrameError::NotRunning {
            state: FrameState::Uninitialized
        })
    ));
}

/// The driver renders and presents frames until the surface asks to close,
/// checking the close flag exactly once per frame boundary.
#[test]
fn runs_until_close_requested() {
    let mut surface = ScriptedSurface::closing_after(3);
    let mut driver = running_driver(&mut surface);

    let frames = driver.run(&mut surface).expect("frames should not fail");
    assert_eq!(frames, 3);
    assert_eq!(surface.presented, 3);
    assert_eq!(surface.drawn.len(), 3);
    // Three frames, plus the check that saw the close request
    assert_eq!(surface.close_polls.get(), 4);
    assert_eq!(driver.state(), FrameState::Closed);
    assert!(driver.output_image().is_none());

    // Closed is terminal, and further frames do nothing
    assert_eq!(driver.run_frame(&mut surface).ok(), Some(FrameStatus::Closed));
    assert_eq!(surface.presented, 3);
    assert_eq!(surface.close_polls.get(), 4);
}

#[test]
fn close_on_first_frame_presents_nothing() {
    let mut surface = ScriptedSurface::closing_after(0);
    let mut driver = running_driver(&mut surface);

    assert_eq!(driver.run_frame(&mut surface).ok(), Some(FrameStatus::Closed));
    assert_eq!(surface.presented, 0);
    assert!(surface.drawn.is_empty());
    assert_eq!(driver.frame_count(), 0);
}

/// Every frame shows the fully-written image, drawn with the fullscreen triangle
#[test]
fn presented_frames_match_compute_output() {
    let mut surface = ScriptedSurface::closing_after(2);
    let mut driver = running_driver(&mut surface);
    driver.run(&mut surface).expect("frames should not fail");

    let preset = preset::table_room();
    let expected = render_simple(&preset.scene, &preset.camera, &SMALL_RENDER_OPTIONS);
    for (drawn, triangle) in surface.drawn.iter().zip(&surface.triangles) {
        assert_eq!(drawn, &expected);
        assert_eq!(triangle, &fullscreen_triangle());
    }
}

#[test]
fn present_failure_is_fatal() {
    let mut surface = ScriptedSurface {
        fail_present_at: Some(1),
        ..ScriptedSurface::closing_after(5)
    };
    let mut driver = running_driver(&mut surface);

    let res = driver.run(&mut surface);
    assert!(matches!(
        res,
        Err(FrameError::Present {
            frame: 1,
            source: SurfaceError::Lost
        })
    ));
    assert_eq!(driver.frame_count(), 1);

    driver.shutdown();
    assert_eq!(driver.state(), FrameState::Closed);
}

#[test]
fn image_larger_than_texture_limit_fails_setup() {
    let mut surface = ScriptedSurface {
        max_texture_side: 16,
        ..ScriptedSurface::closing_after(0)
    };
    let mut driver = FrameDriver::new(PresentOpts::default());

    let res = driver.initialise(&mut surface, preset::table_room(), &SMALL_RENDER_OPTIONS);
    assert!(matches!(
        res,
        Err(SetupError::ResourceCompile(ResourceCompileError::TextureTooLarge { max_side: 16, .. }))
    ));
    assert_eq!(driver.state(), FrameState::Uninitialized);
    assert_eq!(surface.allocations, 0);
}

#[test]
fn shutdown_before_running_closes() {
    let mut driver = FrameDriver::new(PresentOpts::default());
    driver.shutdown();
    assert_eq!(driver.state(), FrameState::Closed);
}

#[test]
fn default_options() {
    let opts = RenderOpts::default();
    assert_eq!(opts.extent(), Size2::new(800, 800));
    assert_eq!(opts.tile(), Size2::new(8, 8));
    assert_eq!(opts.threads, 0);

    let present = PresentOpts::default();
    assert_eq!(present.swap_interval, 1);
    assert!(present.vsync());
    assert_eq!(present.stats_log_interval.get(), 120);
}
