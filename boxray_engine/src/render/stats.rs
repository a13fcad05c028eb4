use std::time::Duration;

/// Statistics for a single dispatch of the compute pass
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// How long the dispatch took, from the first tile starting to the last one finishing
    pub duration: Duration,
    /// How many pixels were written
    pub num_px: usize,
    /// How many invocations fell outside the image and were skipped
    pub num_skipped: usize,
    /// How many tiles were dispatched
    pub num_tiles: usize,
    /// How many threads were used in rendering
    pub num_threads: usize,
}
