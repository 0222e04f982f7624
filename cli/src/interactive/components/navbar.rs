//! Navigation bar component
//!
//! Shows the brand and the nav entries in a row. While the compact menu is
//! open the entries are listed vertically instead.

use super::logo::BlinkLogo;
use blink_core::site::NavItem;
use iocraft::prelude::*;

const ACTIVE_COLOR: Color = Color::Rgb {
    r: 56,
    g: 189,
    b: 248,
};
const FOCUS_BACKGROUND: Color = Color::Rgb {
    r: 60,
    g: 60,
    b: 80,
};

#[derive(Default, Props)]
pub struct NavbarProps {
    pub brand: String,
    pub items: Vec<NavItem>,
    /// Index of the focused entry, if focus is in the navbar
    pub focused: Option<usize>,
    pub menu_open: bool,
}

fn entry(item: &NavItem, focused: bool, marker: &str) -> AnyElement<'static> {
    let color = if item.active { ACTIVE_COLOR } else { Color::White };
    element! {
        View(
            padding_left: 1,
            padding_right: 1,
            background_color: if focused { Some(FOCUS_BACKGROUND) } else { None },
        ) {
            Text(
                content: format!("{}{}", marker, item.label),
                color: color,
                weight: if item.active { Weight::Bold } else { Weight::Normal },
            )
        }
    }
    .into()
}

#[component]
pub fn Navbar(props: &NavbarProps) -> impl Into<AnyElement<'static>> {
    let menu_hint = if props.menu_open { "✕ close (m)" } else { "☰ menu (m)" };

    let row_entries: Vec<AnyElement<'static>> = if props.menu_open {
        Vec::new()
    } else {
        props
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| entry(item, props.focused == Some(i), ""))
            .collect()
    };

    let menu_entries: Vec<AnyElement<'static>> = if props.menu_open {
        props
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if item.active { "● " } else { "  " };
                entry(item, props.focused == Some(i), marker)
            })
            .collect()
    } else {
        Vec::new()
    };

    element! {
        View(
            key: "navbar",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            border_style: BorderStyle::Round,
            border_color: Color::DarkGrey,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                BlinkLogo(name: props.brand.clone())
                View(flex_direction: FlexDirection::Row) {
                    #(row_entries)
                }
                Text(content: menu_hint, color: Color::DarkGrey)
            }
            #(if props.menu_open {
                Some(element! {
                    View(flex_direction: FlexDirection::Column, margin_top: 1) {
                        #(menu_entries)
                    }
                })
            } else {
                None
            })
        }
    }
}
