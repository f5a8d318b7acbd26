pub mod chart;
pub mod export;
pub mod html;
pub mod summary;

pub use export::ResultExporter;
pub use html::{render_report, write_report, ReportMeta};
pub use summary::{sort_by_score, Summary};
