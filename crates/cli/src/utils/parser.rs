//! Parsing of `file:line[:col]` and `a-b` command line arguments

/// Split `path:line` into the path and a 0-based line.
///
/// Lines on the command line are 1-based. Without a valid line suffix the
/// whole argument is the path.
pub fn parse_filepath_with_line(filepath_arg: &str) -> (String, Option<usize>) {
    if let Some(colon_pos) = filepath_arg.rfind(':') {
        let path_part = &filepath_arg[..colon_pos];
        let line_part = &filepath_arg[colon_pos + 1..];

        if let Ok(line_num) = line_part.parse::<usize>() {
            (path_part.to_string(), Some(line_num.saturating_sub(1)))
        } else {
            (filepath_arg.to_string(), None)
        }
    } else {
        (filepath_arg.to_string(), None)
    }
}

/// Split `path:line:col` into the path and a 0-based line and column
pub fn parse_filepath_with_position(arg: &str) -> (String, Option<(usize, usize)>) {
    let (rest, column) = parse_filepath_with_line(arg);
    let Some(column) = column else {
        return (arg.to_string(), None);
    };

    match parse_filepath_with_line(&rest) {
        (path, Some(line)) => (path, Some((line, column))),
        _ => (arg.to_string(), None),
    }
}

/// Parse a 1-based inclusive `a-b` range (or a single `a`) into 0-based bounds
pub fn parse_line_range(range: &str) -> Option<(usize, usize)> {
    let (start, end) = match range.split_once('-') {
        Some((start, end)) => (start.trim().parse::<usize>().ok()?, end.trim().parse::<usize>().ok()?),
        None => {
            let line = range.trim().parse::<usize>().ok()?;
            (line, line)
        }
    };

    if start == 0 || end < start {
        return None;
    }
    Some((start - 1, end - 1))
}
