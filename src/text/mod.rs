mod linkify;
mod sanitize;

pub use linkify::{Segment, linkify_lines, split_segments};
pub use sanitize::sanitize_and_format;
