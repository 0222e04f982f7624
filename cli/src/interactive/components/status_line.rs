//! Status line component
//!
//! Shows the current location, scroll position and the key bindings.

use iocraft::prelude::*;

pub const KEY_HINTS: &str =
    "tab/→ next · shift-tab/← prev · enter open · b back · f forward · m menu · q quit";

#[derive(Default, Props)]
pub struct StatusLineProps {
    pub path: String,
    pub scroll: usize,
    pub total_lines: usize,
    pub history_len: usize,
}

/// Location and scroll summary, e.g. `/demo · 12/80 · 3 in history`
pub fn status_text(props: &StatusLineProps) -> String {
    let position = if props.total_lines == 0 {
        0
    } else {
        (props.scroll + 1).min(props.total_lines)
    };
    format!(
        "{} · {}/{} · {} in history",
        props.path, position, props.total_lines, props.history_len
    )
}

#[component]
pub fn StatusLine(props: &StatusLineProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "status-line",
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: status_text(props), color: Color::Yellow, weight: Weight::Bold)
            Text(content: KEY_HINTS, color: Color::DarkGrey)
        }
    }
}
