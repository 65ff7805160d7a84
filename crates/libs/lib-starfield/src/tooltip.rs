//! # Tooltip Overlay
//!
//! Whether a tooltip shows, and what its floating box looks like, as a pure
//! function of its inputs. Placement is left to the surrounding layout.

/// Base class of every tooltip box. Caller classes are appended to it.
pub const DEFAULT_CLASS: &str = "tooltip";

/// Upper bound on the box width; longer content wraps and line breaks in the
/// content are kept.
pub const MAX_WIDTH_PX: u32 = 240;

/// The floating box rendered next to the wrapped children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipBox<'a> {
    pub content: &'a str,
    pub class: String,
}

impl TooltipBox<'_> {
    pub fn style(&self) -> String {
        format!("max-width: {MAX_WIDTH_PX}px; white-space: pre-wrap; overflow-wrap: anywhere;")
    }
}

/// The overlay to render after the children, if any.
pub fn overlay<'a>(visible: bool, content: &'a str, class: Option<&'a str>) -> Option<TooltipBox<'a>> {
    visible.then(|| TooltipBox {
        content,
        class: match class.map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("{DEFAULT_CLASS} {extra}"),
            _ => DEFAULT_CLASS.to_string(),
        },
    })
}
