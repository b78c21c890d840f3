//! Supported editors.
//!
//! Every editor is a VS Code derivative installed the same way, so they
//! differ only in the names below.

/// Static description of one supported editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorSpec {
    /// Stable identifier used on the command line and in config.
    pub id: &'static str,
    pub display_name: &'static str,
    /// Linux binary name; probed paths must end with it.
    pub executable_name: &'static str,
    /// Case-insensitive regex a Windows executable path must match.
    pub windows_pattern: &'static str,
    /// Case-insensitive regex a macOS app bundle path must match.
    pub mac_pattern: &'static str,
    /// Desktop entry looked up under `$XDG_DATA_DIRS/applications/`.
    pub linux_desktop_file: &'static str,
    /// Windows install directory and executable stem, and macOS bundle prefix.
    pub install_dir_name: &'static str,
    /// Bundle name always probed under the applications directory on macOS.
    pub mac_default_app: Option<&'static str>,
}

pub const ANTIGRAVITY: EditorSpec = EditorSpec {
    id: "antigravity",
    display_name: "Antigravity",
    executable_name: "antigravity",
    windows_pattern: r".*Antigravity.*\.exe$",
    mac_pattern: r".*Antigravity.*\.app$",
    linux_desktop_file: "antigravity.desktop",
    install_dir_name: "Antigravity",
    mac_default_app: Some("Antigravity.app"),
};

pub const CURSOR: EditorSpec = EditorSpec {
    id: "cursor",
    display_name: "Cursor",
    executable_name: "cursor",
    windows_pattern: r".*Cursor.*\.exe$",
    mac_pattern: r".*Cursor.*\.app$",
    linux_desktop_file: "cursor.desktop",
    install_dir_name: "Cursor",
    mac_default_app: Some("Cursor.app"),
};

pub const KIRO: EditorSpec = EditorSpec {
    id: "kiro",
    display_name: "Kiro",
    executable_name: "kiro",
    windows_pattern: r".*Kiro.*\.exe$",
    mac_pattern: r".*Kiro.*\.app$",
    linux_desktop_file: "kiro.desktop",
    install_dir_name: "Kiro",
    mac_default_app: None,
};

pub const QODER: EditorSpec = EditorSpec {
    id: "qoder",
    display_name: "Qoder",
    executable_name: "qoder",
    windows_pattern: r".*Qoder.*\.exe$",
    mac_pattern: r".*Qoder.*\.app$",
    linux_desktop_file: "qoder.desktop",
    install_dir_name: "Qoder",
    mac_default_app: None,
};

pub const TRAE_CN: EditorSpec = EditorSpec {
    id: "trae-cn",
    display_name: "Trae CN",
    executable_name: "trae-cn",
    windows_pattern: r".*Trae CN.*\.exe$",
    mac_pattern: r".*Trae CN.*\.app$",
    linux_desktop_file: "trae-cn.desktop",
    install_dir_name: "Trae CN",
    mac_default_app: None,
};

pub const WINDSURF: EditorSpec = EditorSpec {
    id: "windsurf",
    display_name: "Windsurf",
    executable_name: "windsurf",
    windows_pattern: r".*Windsurf.*\.exe$",
    mac_pattern: r".*Windsurf.*\.app$",
    linux_desktop_file: "windsurf.desktop",
    install_dir_name: "Windsurf",
    mac_default_app: None,
};

/// All supported editors, in display order.
pub const EDITORS: &[EditorSpec] = &[ANTIGRAVITY, CURSOR, KIRO, QODER, TRAE_CN, WINDSURF];

/// Look up an editor by id or display name, ignoring case.
pub fn find_editor(name: &str) -> Option<&'static EditorSpec> {
    let name = name.trim();
    EDITORS.iter().find(|editor| {
        editor.id.eq_ignore_ascii_case(name) || editor.display_name.eq_ignore_ascii_case(name)
    })
}
