//! Host platform and the environment discovery searches.

use std::env;
use std::path::PathBuf;

/// Operating system family whose install conventions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// The platform this binary was built for. Other unixes follow Linux.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }
}

/// Well-known locations searched for installations.
#[derive(Debug, Clone, Default)]
pub struct SearchEnv {
    /// `%LOCALAPPDATA%` on Windows.
    pub local_app_data: Option<PathBuf>,
    /// `%ProgramFiles%` on Windows.
    pub program_files: Option<PathBuf>,
    /// `/Applications` on macOS.
    pub applications_dir: Option<PathBuf>,
    /// Directories holding Linux binaries, probed in order.
    pub linux_bin_dirs: Vec<PathBuf>,
    /// Entries of `$XDG_DATA_DIRS`, in order.
    pub xdg_data_dirs: Vec<PathBuf>,
    /// User-configured paths probed for every editor on every platform.
    pub extra_paths: Vec<PathBuf>,
}

impl SearchEnv {
    /// Read the search locations from the running system.
    pub fn from_system() -> Self {
        Self {
            local_app_data: dirs::data_local_dir(),
            program_files: env::var_os("ProgramFiles").map(PathBuf::from),
            applications_dir: Some(PathBuf::from("/Applications")),
            linux_bin_dirs: ["/usr/bin", "/bin", "/usr/local/bin"]
                .iter()
                .map(PathBuf::from)
                .collect(),
            xdg_data_dirs: env::var("XDG_DATA_DIRS")
                .map(|value| parse_xdg_data_dirs(&value))
                .unwrap_or_default(),
            extra_paths: Vec::new(),
        }
    }

    pub fn with_extra_paths(mut self, extra_paths: Vec<PathBuf>) -> Self {
        self.extra_paths = extra_paths;
        self
    }
}

/// Split a colon-separated `XDG_DATA_DIRS` value, dropping empty entries.
pub fn parse_xdg_data_dirs(value: &str) -> Vec<PathBuf> {
    value
        .split(':')
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .collect()
}
