//! Lexical path joining for generated command lines

/// Join path elements with `/` and clean the result lexically
///
/// Empty elements are ignored. Repeated separators collapse, `.` elements
/// drop and `..` removes the preceding element (a rooted path never climbs
/// above `/`). Joining only empty elements yields an empty string. Nothing
/// touches the file system.
pub fn join<S: AsRef<str>>(elements: &[S]) -> String {
    let joined = elements
        .iter()
        .map(AsRef::as_ref)
        .filter(|e| !e.is_empty())
        .collect::<Vec<&str>>()
        .join("/");

    if joined.is_empty() {
        return joined;
    }
    clean(&joined)
}

/// Shortest lexically equivalent form of a non-empty path
fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    match (rooted, body.is_empty()) {
        (true, _) => format!("/{}", body),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
