pub mod pagination_controls;
pub mod results_chart;
pub mod results_table;
pub mod sql_viewer;

pub use pagination_controls::PaginationControls;
pub use results_chart::ResultsChart;
pub use results_table::ResultsTable;
pub use sql_viewer::SqlViewer;
