use crate::core::types::Size2;
use crate::driver::surface::SurfaceError;
use rayon::ThreadPoolBuildError;
use thiserror::Error;

pub mod barrier;
pub mod compute;
pub mod dispatch;
pub mod presentation;
pub mod render_opts;
pub mod stats;

/// A compute or presentation resource could not be built. Only happens during setup
#[derive(Error, Debug)]
pub enum ResourceCompileError {
    #[error("failed to create worker thread pool")]
    ThreadPool {
        #[from]
        source: ThreadPoolBuildError,
    },
    /// The tile grid needed to cover the image doesn't fit in the dispatch ID range
    #[error("dispatch grid for image {extent} with tiles of {tile} overflows the invocation range")]
    DispatchOverflow { extent: Size2, tile: Size2 },
    #[error("image {extent} exceeds the surface's maximum texture size ({max_side})")]
    TextureTooLarge { extent: Size2, max_side: u32 },
    #[error("failed to allocate the output texture")]
    TextureAllocation {
        #[source]
        source: SurfaceError,
    },
}
