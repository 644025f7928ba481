pub const DEFAULT_WIDTH: usize = 120;

pub fn resolve_width(raw: Option<usize>) -> usize {
    if let Some(width) = raw
        && width > 0
    {
        return width;
    }
    if let Some((terminal_size::Width(width), _)) = terminal_size::terminal_size()
        && width > 0
    {
        return width as usize;
    }
    DEFAULT_WIDTH
}

/// Cuts `value` to at most `max` characters, marking the cut with `…`.
pub fn truncate(value: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let count = value.chars().count();
    if count <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max - 1).collect();
    out.push('…');
    out
}
