pub mod report;

pub use report::{render_log_list, render_resolution};
