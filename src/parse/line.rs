/// Split one CSV line into fields.
///
/// Single left-to-right scan with one `in_quotes` flag. Outside quotes a
/// comma ends the current field and a `"` opens quoted mode without itself
/// joining the field. Inside quotes `""` is an escaped literal quote and a
/// lone `"` closes quoted mode. A line that ends still inside quotes is not
/// an error: the buffer is flushed as the final field as-is.
///
/// Always emits at least one field, so an empty line yields one empty
/// field. Whitespace is never trimmed here; trimming is the caller's
/// responsibility per field.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    // escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }

    fields.push(current);
    fields
}
