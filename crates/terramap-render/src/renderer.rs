//! Terrain renderer: altitude sampling, contour detection and band coloring.

use std::ops::AddAssign;
use std::time::Instant;

use terramap_terrain::TerrainSampler;
use tracing::debug;

use crate::band::{AltitudeMode, Band, CONTOUR_STEP, altitude_level, band_color, classify, coarsen};
use crate::buffer::PixelBuffer;

/// Neighbor offsets compared for contour detection.
const CONTOUR_NEIGHBORS: [(usize, usize); 3] = [(0, 1), (1, 0), (1, 1)];

/// Options controlling a [`TerrainRenderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw black contour lines where the 10-level band changes.
    pub contours: bool,
    /// Handling of altitudes outside `[0, 1]`.
    pub altitude_mode: AltitudeMode,
    /// Worker threads for sampling and coloring. 0 uses every logical CPU.
    pub threads: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            contours: false,
            altitude_mode: AltitudeMode::Clamped,
            threads: 0,
        }
    }
}

/// Pixel counts gathered during a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub sea: usize,
    pub land: usize,
    pub snow: usize,
    /// Land and snow pixels drawn black as contour lines.
    pub contour_pixels: usize,
}

impl RenderStats {
    pub fn total(&self) -> usize {
        self.sea + self.land + self.snow
    }
}

impl AddAssign for RenderStats {
    fn add_assign(&mut self, rhs: Self) {
        self.sea += rhs.sea;
        self.land += rhs.land;
        self.snow += rhs.snow;
        self.contour_pixels += rhs.contour_pixels;
    }
}

/// Renders a [`TerrainSampler`] into a [`PixelBuffer`].
///
/// Each pixel samples the altitude at its integer screen coordinate and is
/// colored by band. With contours on, a land or snow pixel whose contour
/// band differs from any in-bounds neighbor below, right, or diagonally
/// below-right is drawn black.
///
/// Altitudes are sampled once into a level grid before coloring, so the
/// output does not depend on the thread count.
#[derive(Clone, Debug, Default)]
pub struct TerrainRenderer {
    options: RenderOptions,
}

impl TerrainRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Overwrite every pixel of `buffer` and hand it back.
    pub fn render<'b, S>(&self, sampler: &S, buffer: &'b mut PixelBuffer) -> &'b mut PixelBuffer
    where
        S: TerrainSampler + Sync + ?Sized,
    {
        self.render_with_stats(sampler, buffer);
        buffer
    }

    /// Render like [`render`](Self::render) and return band statistics.
    pub fn render_with_stats<S>(&self, sampler: &S, buffer: &mut PixelBuffer) -> RenderStats
    where
        S: TerrainSampler + Sync + ?Sized,
    {
        let (width, height) = buffer.dimensions();
        let _span = tracing::debug_span!(
            "render",
            width,
            height,
            contours = self.options.contours
        )
        .entered();

        if buffer.pixel_count() == 0 {
            return RenderStats::default();
        }

        let start = Instant::now();
        let width = width as usize;
        let height = height as usize;
        let threads = self.worker_count(height);
        let mode = self.options.altitude_mode;

        let mut levels = vec![0_i32; width * height];
        for_each_row_chunk(&mut levels, width, threads, |first_row, chunk| {
            for (i, level) in chunk.iter_mut().enumerate() {
                let x = i % width;
                let y = first_row + i / width;
                *level = altitude_level(sampler.altitude(x as f64, y as f64), mode);
            }
        });

        let contours = self.options.contours;
        let levels = &levels;
        let partials = for_each_row_chunk(buffer.pixels_mut(), width, threads, |first_row, chunk| {
            let mut stats = RenderStats::default();
            for (i, pixel) in chunk.iter_mut().enumerate() {
                let x = i % width;
                let y = first_row + i / width;
                let mut level = levels[y * width + x];
                let mut edge = false;

                if contours {
                    edge = is_contour_edge(levels, width, height, x, y);
                    level = coarsen(level) * CONTOUR_STEP;
                }

                match classify(level) {
                    Band::Sea => stats.sea += 1,
                    Band::Land => stats.land += 1,
                    Band::Snow => stats.snow += 1,
                }
                if edge && classify(level) != Band::Sea {
                    stats.contour_pixels += 1;
                }

                *pixel = band_color(level, edge);
            }
            stats
        });

        let mut stats = RenderStats::default();
        for partial in partials {
            stats += partial;
        }

        debug!(
            threads,
            sea = stats.sea,
            land = stats.land,
            snow = stats.snow,
            contour_pixels = stats.contour_pixels,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "terrain rendered"
        );

        stats
    }

    fn worker_count(&self, rows: usize) -> usize {
        let requested = match self.options.threads {
            0 => num_cpus::get(),
            n => n,
        };
        requested.clamp(1, rows.max(1))
    }
}

/// Render `sampler` into `buffer` with default options and the given contour setting.
pub fn render<'b, S>(sampler: &S, buffer: &'b mut PixelBuffer, contours: bool) -> &'b mut PixelBuffer
where
    S: TerrainSampler + Sync + ?Sized,
{
    TerrainRenderer::new(RenderOptions {
        contours,
        ..RenderOptions::default()
    })
    .render(sampler, buffer)
}

/// True if the contour band at `(x, y)` differs from any in-bounds neighbor.
fn is_contour_edge(levels: &[i32], width: usize, height: usize, x: usize, y: usize) -> bool {
    let band = coarsen(levels[y * width + x]);
    CONTOUR_NEIGHBORS.iter().any(|&(dx, dy)| {
        let (nx, ny) = (x + dx, y + dy);
        nx < width && ny < height && coarsen(levels[ny * width + nx]) != band
    })
}

/// Split `data` into contiguous row chunks and run `f(first_row, chunk)` for
/// each on scoped threads. Results are returned in row order.
fn for_each_row_chunk<T, R, F>(data: &mut [T], width: usize, threads: usize, f: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(usize, &mut [T]) -> R + Sync,
{
    let rows = data.len() / width;
    let rows_per_chunk = rows.div_ceil(threads.max(1)).max(1);
    let f = &f;

    std::thread::scope(|scope| {
        let handles: Vec<_> = data
            .chunks_mut(rows_per_chunk * width)
            .enumerate()
            .map(|(i, chunk)| scope.spawn(move || f(i * rows_per_chunk, chunk)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
}
