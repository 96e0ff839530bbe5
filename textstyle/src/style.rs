//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


use crate::color::Color;
use crate::emphasis::Emphasis;
use std::ops::{BitOr, BitOrAssign};
use tracing::trace;

/// Foreground color, background color and emphasis for a run of text.
///
/// A `TextStyle` is a plain value. Styles are combined with
/// [`merge`](TextStyle::merge) or the `|` operator, which always yields a new
/// style.
///
/// # Examples
///
/// ```rust
/// use chromatext_textstyle::{bg, fg, Emphasis, NamedColor, TerminalColor, TextStyle};
///
/// let style = fg(NamedColor::Blue) | bg(TerminalColor::White) | Emphasis::BOLD;
/// assert!(style.has_foreground());
/// assert!(style.has_background());
/// assert!(style.emphasis.contains(Emphasis::BOLD));
///
/// assert!(TextStyle::default().is_empty());
/// ```
///
/// # Merging
///
/// | Field        | Rule                                               |
/// |--------------|----------------------------------------------------|
/// | `foreground` | right operand if set, otherwise left operand       |
/// | `background` | right operand if set, otherwise left operand       |
/// | `emphasis`   | union of both operands                             |
///
/// Merging is associative. It is commutative as long as both operands do not
/// set the same color field to different values; in that case the right-hand
/// operand wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    /// The foreground color of the text.
    pub foreground: Option<Color>,
    /// The background color of the text.
    pub background: Option<Color>,
    /// Emphasis attributes of the text.
    pub emphasis: Emphasis,
}

impl TextStyle {
    /// A style with nothing set. Renders as plain text.
    pub const fn new() -> TextStyle {
        TextStyle {
            foreground: None,
            background: None,
            emphasis: Emphasis::empty(),
        }
    }

    /// Whether this style sets nothing at all.
    ///
    /// Emphasis bits outside the four attributes do not count.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && !self.has_emphasis()
    }

    /// Whether a foreground color is set.
    pub fn has_foreground(&self) -> bool {
        self.foreground.is_some()
    }

    /// Whether a background color is set.
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Whether at least one emphasis attribute is set.
    pub fn has_emphasis(&self) -> bool {
        !self.emphasis.has_no_attributes()
    }

    /// Combine two styles into a new one.
    ///
    /// Colors set by `rhs` replace those of `self`; emphasis sets are joined.
    #[must_use]
    pub fn merge(self, rhs: TextStyle) -> TextStyle {
        TextStyle {
            foreground: merge_color("foreground", self.foreground, rhs.foreground),
            background: merge_color("background", self.background, rhs.background),
            emphasis: self.emphasis | rhs.emphasis,
        }
    }
}

fn merge_color(field: &'static str, lhs: Option<Color>, rhs: Option<Color>) -> Option<Color> {
    match (lhs, rhs) {
        (Some(old), Some(new)) => {
            if old != new {
                trace!(field, ?old, ?new, "merge overrides color");
            }
            Some(new)
        }
        (lhs, None) => lhs,
        (None, rhs) => rhs,
    }
}

/// A style with only the foreground color set.
pub fn fg<C: Into<Color>>(color: C) -> TextStyle {
    TextStyle {
        foreground: Some(color.into()),
        ..TextStyle::new()
    }
}

/// A style with only the background color set.
pub fn bg<C: Into<Color>>(color: C) -> TextStyle {
    TextStyle {
        background: Some(color.into()),
        ..TextStyle::new()
    }
}

impl From<Emphasis> for TextStyle {
    fn from(emphasis: Emphasis) -> Self {
        TextStyle {
            emphasis,
            ..TextStyle::new()
        }
    }
}

/// A bare color converts to a foreground style.
impl From<Color> for TextStyle {
    fn from(color: Color) -> Self {
        fg(color)
    }
}

impl BitOr for TextStyle {
    type Output = TextStyle;

    fn bitor(self, rhs: TextStyle) -> TextStyle {
        self.merge(rhs)
    }
}

impl BitOr<Emphasis> for TextStyle {
    type Output = TextStyle;

    fn bitor(self, rhs: Emphasis) -> TextStyle {
        self.merge(rhs.into())
    }
}

impl BitOr<TextStyle> for Emphasis {
    type Output = TextStyle;

    fn bitor(self, rhs: TextStyle) -> TextStyle {
        TextStyle::from(self).merge(rhs)
    }
}

impl BitOrAssign for TextStyle {
    fn bitor_assign(&mut self, rhs: TextStyle) {
        *self = self.merge(rhs);
    }
}

impl BitOrAssign<Emphasis> for TextStyle {
    fn bitor_assign(&mut self, rhs: Emphasis) {
        *self = self.merge(rhs.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Rgb, TerminalColor};
    use crate::palette::NamedColor;
    use tracing_test::traced_test;

    #[test]
    fn test_style_default() {
        let style = TextStyle::default();
        assert_eq!(style, TextStyle::new());
        assert_eq!(style.foreground, None);
        assert_eq!(style.background, None);
        assert!(style.emphasis.is_empty());
        assert!(style.is_empty());
    }

    #[test]
    fn test_undefined_emphasis_bits_are_empty() {
        let style = TextStyle::from(Emphasis::from_bits_retain(0x40));
        assert!(!style.has_emphasis());
        assert!(style.is_empty());
        assert!(!(style | Emphasis::BOLD).is_empty());
    }

    #[test]
    fn test_fg_and_bg_constructors() {
        let style = fg(Rgb::new(1, 2, 3));
        assert_eq!(style.foreground, Some(Color::Rgb(Rgb::new(1, 2, 3))));
        assert!(!style.has_background());
        assert!(!style.has_emphasis());

        let style = bg(TerminalColor::Cyan);
        assert_eq!(style.background, Some(Color::Terminal(TerminalColor::Cyan)));
        assert!(!style.has_foreground());
    }

    #[test]
    fn test_merge_disjoint_fields() {
        let style = fg(NamedColor::Blue) | bg(NamedColor::Red);
        assert_eq!(style.foreground, Some(Color::from(NamedColor::Blue)));
        assert_eq!(style.background, Some(Color::from(NamedColor::Red)));
        assert_eq!(style, bg(NamedColor::Red) | fg(NamedColor::Blue));
    }

    #[test]
    fn test_merge_with_emphasis_either_side() {
        let left = fg(NamedColor::Blue) | Emphasis::BOLD;
        let right = Emphasis::BOLD | fg(NamedColor::Blue);
        assert_eq!(left, right);
        assert!(left.emphasis.contains(Emphasis::BOLD));
    }

    #[test]
    fn test_merge_emphasis_union() {
        let style = TextStyle::from(Emphasis::BOLD | Emphasis::ITALIC)
            | TextStyle::from(Emphasis::ITALIC | Emphasis::UNDERLINE);
        assert_eq!(
            style.emphasis,
            Emphasis::BOLD | Emphasis::ITALIC | Emphasis::UNDERLINE
        );
    }

    #[test]
    fn test_merge_rightmost_color_wins() {
        let style = fg(TerminalColor::Red) | fg(TerminalColor::Green);
        assert_eq!(style.foreground, Some(Color::Terminal(TerminalColor::Green)));

        let style = bg(TerminalColor::Red).merge(bg(Rgb::new(9, 9, 9)));
        assert_eq!(style.background, Some(Color::Rgb(Rgb::new(9, 9, 9))));
    }

    #[test]
    fn test_merge_keeps_left_when_right_unset() {
        let style = fg(TerminalColor::Red) | TextStyle::new();
        assert_eq!(style.foreground, Some(Color::Terminal(TerminalColor::Red)));
    }

    #[test]
    fn test_merge_associative() {
        let a = fg(TerminalColor::Red) | Emphasis::ITALIC;
        let b = bg(NamedColor::Navy);
        let c = TextStyle::from(Emphasis::STRIKETHROUGH);
        assert_eq!((a | b) | c, a | (b | c));
    }

    #[test]
    fn test_bitor_assign() {
        let mut style = fg(TerminalColor::Yellow);
        style |= Emphasis::UNDERLINE;
        style |= bg(TerminalColor::Black);
        assert_eq!(
            style,
            fg(TerminalColor::Yellow) | bg(TerminalColor::Black) | Emphasis::UNDERLINE
        );
    }

    #[test]
    fn test_from_color_is_foreground() {
        let style = TextStyle::from(Color::Terminal(TerminalColor::White));
        assert_eq!(style, fg(TerminalColor::White));
    }

    #[test]
    #[traced_test]
    fn test_merge_override_is_traced() {
        let _ = fg(TerminalColor::Red) | fg(TerminalColor::Blue);
        assert!(logs_contain("merge overrides color"));
    }
}
