/// Convert a field identifier to its snake_case column form.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or digit, and at the boundary of an uppercase run
/// followed by a Pascal-style word (`HTTPServer` -> `http_server`). The
/// result is lowercased, so already-snake_case input passes through
/// unchanged and an all-caps acronym collapses to a single token.
pub fn to_snake_case(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1);

            let after_lower_or_digit =
                prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            let caps_run_to_word =
                prev.is_some_and(char::is_uppercase) && next.is_some_and(|n| n.is_lowercase());

            if after_lower_or_digit || caps_run_to_word {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
