use mdfmt::parser::ParseError;

/// Compare a file against its canonical form.
/// Returns an error diagnostic on the first source line that differs.
pub fn check_formatted(source: &str, formatted: &str, file_id: usize) -> Option<ParseError> {
    let offset = first_difference(source, formatted)?;

    let start = source[..offset].rfind('\n').map_or(0, |p| p + 1);
    let end = source[offset..]
        .find('\n')
        .map_or(source.len(), |p| offset + p);

    let error = ParseError::error("file is not formatted", start..end, file_id);
    let line_index = error.line_number(source) - 1;
    let expected = formatted.split('\n').nth(line_index).unwrap_or("");

    Some(error.with_note(format!("expected: {:?}", expected)))
}

/// Byte offset into `source` of the first char that differs from `formatted`.
fn first_difference(source: &str, formatted: &str) -> Option<usize> {
    if source == formatted {
        return None;
    }
    let mismatch = source
        .char_indices()
        .zip(formatted.chars())
        .find(|((_, a), b)| a != b)
        .map(|((i, _), _)| i);
    // One is a prefix of the other.
    Some(mismatch.unwrap_or_else(|| source.len().min(formatted.len())))
}
