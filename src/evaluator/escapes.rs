// ============================================================================
// Character Escapes
// ============================================================================

/// Decode the character following an escape marker in a char literal.
///
/// Letters with a control meaning map to that control character; any other
/// character stands for itself (`$\\` is a backslash, `$\'` a quote).
pub fn decode_escape(c: char) -> char {
    match c {
        'b' => '\u{8}',
        'd' => '\u{7f}',
        'e' => '\u{1b}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        's' => ' ',
        't' => '\t',
        'v' => '\u{b}',
        other => other,
    }
}
