use crate::error::ChartResult;
use crate::render::{AxisFrame, AxisRenderer};

/// No-op renderer used by tests and headless runs.
///
/// It still validates every frame so tests catch non-finite tick geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_grid_count: usize,
    pub last_label_count: usize,
}

impl AxisRenderer for NullRenderer {
    fn render_axis(&mut self, frame: &AxisFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_grid_count = if frame.show_grid { frame.ticks.len() } else { 0 };
        self.last_label_count = if frame.show_label { frame.ticks.len() } else { 0 };
        Ok(())
    }
}
