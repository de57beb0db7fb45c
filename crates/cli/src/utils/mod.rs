pub mod file;
pub mod parser;

pub use file::{determine_file_type, read_source, resolve_path};
pub use parser::{parse_filepath_with_line, parse_filepath_with_position, parse_line_range};
