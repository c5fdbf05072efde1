//! Nickname rendering.

/// Marker glyph followed directly by the external name.
///
/// # Examples
///
/// ```
/// use clubgate_core::render_nickname;
///
/// assert_eq!(render_nickname("🔥", "Nova"), "🔥Nova");
/// assert_eq!(render_nickname("", "Nova"), "Nova");
/// ```
pub fn render_nickname(marker: &str, external_name: &str) -> String {
    format!("{marker}{external_name}")
}
