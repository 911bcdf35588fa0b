/// Grid sizing and block placement
use super::config::{DisplayConfig, GridConfig, TimetableConfig};
use super::display::color_in;
use super::error::TimetableError;
use super::types::{Day, LayoutRect, TimeBlock};
use tracing::debug;

/// Computes the visible hour window and the rectangle of every block.
///
/// Holds only configuration; every call recomputes from its inputs.
#[derive(Debug, Clone, Default)]
pub struct GridLayoutEngine {
    grid: GridConfig,
    display: DisplayConfig,
}

impl GridLayoutEngine {
    /// Creates an engine with the given configuration
    ///
    /// # Returns
    /// * `Ok(GridLayoutEngine)` - Engine using the configuration
    /// * `Err(TimetableError::Config)` - If the configuration fails [`TimetableConfig::validate`]
    pub fn new(config: TimetableConfig) -> Result<Self, TimetableError> {
        config.validate()?;
        Ok(Self {
            grid: config.grid,
            display: config.display,
        })
    }

    /// Row-start hours of the grid, from the base hour to the last needed row.
    ///
    /// The last row is the default last hour unless some block runs past it:
    /// a block's end minute rounded up to the full hour closes its last row,
    /// so a block ending at 23:05 needs rows up to and including 23.
    pub fn compute_hours(&self, blocks: &[TimeBlock]) -> Vec<u32> {
        let last_row = blocks
            .iter()
            .filter(|b| b.is_valid())
            .map(|b| b.end_minute.div_ceil(60).saturating_sub(1))
            .fold(self.grid.default_last_hour, u32::max);

        (self.grid.base_hour..=last_row).collect()
    }

    /// Places every block on a grid of five day columns.
    ///
    /// # Arguments
    /// * `blocks` - Parsed blocks of all courses to draw
    /// * `render_width` - Measured width of the whole grid, including the time column
    /// * `time_column_width` - Width of the hour label column on the left
    /// * `row_height` - Height of one hour row
    ///
    /// # Returns
    /// One rectangle per block, in input order. Blocks that do not end after
    /// they start are skipped. Empty while the width is not measured yet
    /// (zero, negative, non-finite, or no room for day columns).
    pub fn layout(
        &self,
        blocks: &[TimeBlock],
        render_width: f32,
        time_column_width: f32,
        row_height: f32,
    ) -> Vec<LayoutRect> {
        if !render_width.is_finite() || render_width <= 0.0 {
            debug!(render_width, "Render width not measured, skipping layout");
            return Vec::new();
        }

        let column_width = (render_width - time_column_width) / Day::ALL.len() as f32;
        if !column_width.is_finite() || column_width <= 0.0 {
            debug!(
                render_width,
                time_column_width, "No room for day columns, skipping layout"
            );
            return Vec::new();
        }

        let window_start = self.grid.base_hour * 60;
        let inset = self.grid.inset;

        blocks
            .iter()
            .filter(|block| {
                let valid = block.is_valid();
                if !valid {
                    debug!(
                        course_id = %block.course_id,
                        start_minute = block.start_minute,
                        end_minute = block.end_minute,
                        "Skipping block that ends before it starts"
                    );
                }
                valid
            })
            .map(|block| {
                let top =
                    (block.start_minute as f32 - window_start as f32) / 60.0 * row_height;
                let height = (block.duration() as f32 / 60.0 * row_height)
                    .max(self.grid.min_visible_height);
                let left = time_column_width + block.day.index() as f32 * column_width;

                LayoutRect {
                    top: top + inset,
                    height: (height - 2.0 * inset).max(0.0),
                    left: left + inset,
                    width: (column_width - 2.0 * inset).max(0.0),
                    block: block.clone(),
                    color: color_in(&block.course_id, &self.display.palette).to_string(),
                }
            })
            .collect()
    }

    /// Gets the grid configuration
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Gets the display configuration
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }
}
