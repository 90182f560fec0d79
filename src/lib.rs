pub mod analysis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod report;


pub use analysis::{Analysis, OPTIMAL_THRESHOLD};
pub use chart::{render_chart, resolve_font, DEFAULT_FONT_PATH};
pub use dataset::{axis_ticks, measurements, Sample, BASE_BUFFER_SIZE};
pub use error::{BufplotError, Result};
pub use report::write_summary;
