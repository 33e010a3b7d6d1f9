//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
///
/// Ctrl is accepted on every platform as well, since many macOS terminals
/// never forward Cmd.
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Check whether a key event carries the shortcut modifier
pub fn has_shortcut_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}

/// Submit shortcut display for help text
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Show/hide password shortcut display
#[cfg(target_os = "macos")]
pub const REVEAL_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const REVEAL_SHORTCUT: &str = "Ctrl+R";
