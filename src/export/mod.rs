mod output;
mod pages;
mod report;

pub use output::{default_report_filename, write_catalog_csv, write_report};
pub use pages::{paginate, render_pages, wrap, Block, PAGE_BREAK, PAGE_LINES, WRAP_WIDTH};
pub use report::{build_report, Report, Section, DISCLAIMER, REPORT_TITLE};
