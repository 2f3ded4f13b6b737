/// Print a Serialize value as pretty JSON, logging errors to stderr.
pub fn print_json(value: &(impl serde::Serialize + ?Sized)) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("[goatline] JSON serialization error: {e}"),
    }
}

/// Whether styled output should be produced for stdout.
///
/// `NO_COLOR` (any non-empty value) and `--no-color` turn styling off, as
/// does a stdout that is not a terminal.
pub fn use_ansi(no_color_flag: bool) -> bool {
    use std::io::IsTerminal;

    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    std::io::stdout().is_terminal()
}
