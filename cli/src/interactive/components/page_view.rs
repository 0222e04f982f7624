//! Scrollable page body

use blink_core::render::{LineStyle, StyledLine};
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct PageViewProps {
    pub lines: Vec<StyledLine>,
    /// First visible line
    pub scroll: usize,
    /// Number of visible lines
    pub height: usize,
    /// Index of the focused in-page link
    pub focused_link: Option<usize>,
}

fn line_color(style: LineStyle) -> Color {
    match style {
        LineStyle::Title => Color::White,
        LineStyle::Subtitle | LineStyle::Muted => Color::Grey,
        LineStyle::Heading => Color::Rgb { r: 56, g: 189, b: 248 },
        LineStyle::Accent => Color::Rgb { r: 167, g: 139, b: 250 },
        LineStyle::Link(_) => Color::Cyan,
        LineStyle::External => Color::Blue,
        LineStyle::Demo(true) => Color::Green,
        LineStyle::Demo(false) => Color::Yellow,
        LineStyle::Body | LineStyle::Bullet | LineStyle::Blank => Color::Reset,
    }
}

fn line_weight(style: LineStyle) -> Weight {
    match style {
        LineStyle::Title | LineStyle::Heading | LineStyle::Demo(_) => Weight::Bold,
        _ => Weight::Normal,
    }
}

#[component]
pub fn PageView(props: &PageViewProps) -> impl Into<AnyElement<'static>> {
    let visible = props
        .lines
        .iter()
        .skip(props.scroll)
        .take(props.height.max(1))
        .cloned()
        .collect::<Vec<_>>();

    element! {
        View(
            key: "page-view",
            flex_direction: FlexDirection::Column,
            flex_grow: 1.0,
            padding_left: 2,
            padding_right: 2,
        ) {
            #(visible.into_iter().map(|line| {
                let focused = matches!(
                    (line.style, props.focused_link),
                    (LineStyle::Link(index), Some(focused)) if index == focused
                );
                element! {
                    View(background_color: if focused { Some(Color::DarkBlue) } else { None }) {
                        Text(
                            content: line.text,
                            color: line_color(line.style),
                            weight: if focused { Weight::Bold } else { line_weight(line.style) },
                        )
                    }
                }
            }).collect::<Vec<_>>())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_lines_are_colored() {
        assert_eq!(line_color(LineStyle::Link(3)), Color::Cyan);
        assert!(matches!(line_weight(LineStyle::Heading), Weight::Bold));
    }
}
