//! Path handling for the Zellij sandbox, where `~` maps to `/host`.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory for the trace export file:
/// `/host/.local/share/zellij/zunsplash`.
///
/// `/host` is the cwd of the last focused terminal (usually the home
/// directory), so this typically resolves to `~/.local/share/zellij/zunsplash`.
///
/// ```
/// use zunsplash::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zunsplash"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("zunsplash")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use zunsplash::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
