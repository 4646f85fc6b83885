// Application Layer - Bucketing use cases

pub mod timeline;

// Re-exports
pub use timeline::{
    diff_time, diff_time_with, get_begin_time_of_time_line, get_begin_time_of_time_line_with,
    get_end_time_of_time_line, get_end_time_of_time_line_with, Timeline,
};
