//! POSIX shell quoting for display and for paths embedded in remote commands

/// Quote a single word for a POSIX shell.
///
/// Words made only of characters the shell never interprets are returned
/// unchanged so the common case stays readable (`cd /data/app`).
pub fn shell_quote(word: &str) -> String {
    if !word.is_empty() && word.chars().all(is_shell_safe) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', "'\\''"))
}

/// Quote a path for a remote shell, leaving a leading `~/` outside the
/// quotes so it still expands to the remote user's home directory.
pub fn shell_quote_path(path: &str) -> String {
    match path.strip_prefix("~/") {
        Some("") => "~/".to_string(),
        Some(rest) => format!("~/{}", shell_quote(rest)),
        None => shell_quote(path),
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | ':' | '=' | '@' | ',' | '+' | '~')
}
