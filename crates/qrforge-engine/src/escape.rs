/// Escape a value for the `WIFI:` payload.
///
/// Backslash, semicolon, comma and double quote each get a backslash prefix.
/// Single pass, so an escaping backslash is never escaped again.
pub fn escape_wifi_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match c {
            '\\' | ';' | ',' | '"' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escape a vCard / iCalendar TEXT property value.
///
/// Backslash first, then comma, semicolon and newline. CRLF counts as one newline.
pub fn escape_vcard_field(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    s.replace("\r\n", "\n")
        .replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}
