use crate::core::targets::*;
use crate::core::types::{OutputColour, Size2};
use crate::render::barrier::{PendingWrites, TileWrites};
use crate::render::dispatch::DispatchGrid;
use crate::render::render_opts::RenderOpts;
use crate::render::stats::RenderStats;
use crate::render::ResourceCompileError;
use crate::scene::camera::Camera;
use crate::scene::Scene;
use crate::shared::validate;
use getset::CopyGetters;
use puffin::{profile_function, profile_scope};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::Duration;
use tracing::{debug, trace};

/// Fills the output image by tracing one ray per pixel, distributed over a pool of worker threads one tile at a time.
#[derive(CopyGetters, Debug)]
pub struct ComputePass {
    #[get_copy = "pub"]
    grid: DispatchGrid,
    /// A thread pool used to distribute the workload
    thread_pool: ThreadPool,
}

impl ComputePass {
    pub fn new(opts: &RenderOpts) -> Result<Self, ResourceCompileError> {
        let grid = DispatchGrid::new(opts.extent(), opts.tile())?;
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(opts.threads)
            .thread_name(|id| format!("ComputePass::worker_{id}"))
            .build()?;

        debug!(
            target: RENDERER,
            extent = %grid.extent(),
            tile = %grid.tile(),
            groups = %grid.groups(),
            threads = thread_pool.current_num_threads(),
            "compute pass ready"
        );

        Ok(Self { grid, thread_pool })
    }

    /// Runs every invocation of the dispatch grid.
    ///
    /// Tiles run concurrently and in no particular order. Each one stages its colours privately,
    /// and nothing reaches the output image until [`PendingWrites::barrier`] is called.
    pub fn dispatch(&self, scene: &Scene, camera: &Camera) -> PendingWrites {
        profile_function!();

        let grid = self.grid;
        let start = puffin::now_ns();
        let tiles = self.thread_pool.install(|| {
            grid.group_ids()
                .collect::<Vec<_>>()
                .into_par_iter()
                .map(|group| Self::run_group(&grid, group, scene, camera))
                .collect::<Vec<_>>()
        });
        let duration = Duration::from_nanos(puffin::now_ns().abs_diff(start));

        let num_px = tiles.iter().map(|t| t.texels().len()).sum::<usize>();
        let stats = RenderStats {
            duration,
            num_px,
            num_skipped: grid.invocation_count() - num_px,
            num_tiles: tiles.len(),
            num_threads: self.thread_pool.current_num_threads(),
        };
        trace!(target: RENDERER, ?stats, "dispatch complete");

        PendingWrites::new(grid.extent(), tiles, stats)
    }

    fn run_group(grid: &DispatchGrid, group: Size2, scene: &Scene, camera: &Camera) -> TileWrites {
        profile_scope!("tile");

        let (origin, size) = grid.group_bounds(group);
        let texels = grid
            .invocation_ids(group)
            .filter_map(|id| Self::invocation(grid, id, scene, camera))
            .collect::<Vec<_>>();

        TileWrites::new(origin, size, texels)
    }

    /// The kernel run for a single invocation of the grid.
    ///
    /// Returns [`None`] for invocations outside the image.
    pub fn invocation(grid: &DispatchGrid, id: Size2, scene: &Scene, camera: &Camera) -> Option<OutputColour> {
        if !grid.in_bounds(id) {
            return None;
        }

        let ray = camera.calc_ray(id.x, id.y, grid.extent());
        let colour = scene.trace(&ray).with_alpha(1.);
        validate::output_colour(&colour);
        Some(colour)
    }
}
