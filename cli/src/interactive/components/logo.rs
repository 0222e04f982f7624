//! Blink OS brand mark
//!
//! An eye glyph followed by the product name, colored with a left to right
//! gradient.

use iocraft::prelude::*;

pub const LOGO_MARK: &str = "◉";

// Color gradient from sky blue to violet
pub const LOGO_COLORS: &[(u8, u8, u8)] = &[
    (56, 189, 248),
    (79, 165, 250),
    (99, 142, 247),
    (118, 120, 242),
    (135, 104, 238),
    (150, 92, 232),
    (165, 82, 226),
    (178, 74, 220),
];

/// Gradient color for the `i`-th character of the logo
pub fn logo_color(i: usize) -> Color {
    let (r, g, b) = LOGO_COLORS
        .get(i)
        .or_else(|| LOGO_COLORS.last())
        .copied()
        .unwrap_or((150, 92, 232));
    Color::Rgb { r, g, b }
}

#[derive(Default, Props)]
pub struct BlinkLogoProps {
    pub name: String,
}

/// Brand mark with gradient colors
#[component]
pub fn BlinkLogo(props: &BlinkLogoProps) -> impl Into<AnyElement<'static>> {
    let glyphs: Vec<String> = std::iter::once(format!("{} ", LOGO_MARK))
        .chain(props.name.chars().map(String::from))
        .collect();

    element! {
        View(key: "logo-content", flex_direction: FlexDirection::Row) {
            #(glyphs.into_iter().enumerate().map(|(i, glyph)| {
                element! {
                    Text(
                        content: glyph,
                        color: logo_color(i),
                        weight: Weight::Bold,
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_color_clamps_to_last() {
        assert_eq!(logo_color(0), Color::Rgb { r: 56, g: 189, b: 248 });
        assert_eq!(logo_color(100), Color::Rgb { r: 178, g: 74, b: 220 });
    }
}
