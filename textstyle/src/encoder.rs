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


//! Translation of a [`TextStyle`] into SGR escape fragments.
//!
//! Fragments are produced in a fixed order:
//!
//! 1. one fragment per emphasis attribute (bold, italic, underline, strikethrough)
//! 2. the foreground color
//! 3. the background color
//!
//! followed by a single reset fragment, but only when at least one fragment
//! was produced. Fragments are never joined into a `;` separated list.

use crate::color::{Color, Rgb};
use crate::emphasis::Emphasis;
use crate::style::TextStyle;
use std::fmt::{self, Display, Write};

/// Lead code of a 24-bit foreground color.
const RGB_FOREGROUND: u8 = 38;
/// Lead code of a 24-bit background color.
const RGB_BACKGROUND: u8 = 48;
/// Length of `ESC [ 38;2;RRR;GGG;BBB m`.
const RGB_FRAGMENT_LEN: usize = 19;
/// `ESC [ 0 m`
pub const RESET: &str = "\x1b[0m";

/// A single escape sequence emitted by the encoder.
///
/// | Fragment            | Bytes                       |
/// |---------------------|-----------------------------|
/// | Emphasis            | `\x1b[1m` `\x1b[3m` `\x1b[4m` `\x1b[9m` |
/// | RGB foreground      | `\x1b[38;2;RRR;GGG;BBBm`    |
/// | RGB background      | `\x1b[48;2;RRR;GGG;BBBm`    |
/// | Terminal foreground | `\x1b[30m`-`\x1b[37m`, `\x1b[90m`-`\x1b[97m`     |
/// | Terminal background | `\x1b[40m`-`\x1b[47m`, `\x1b[100m`-`\x1b[107m`   |
/// | Reset               | `\x1b[0m`                   |
///
/// RGB components are always zero padded to three digits, so every RGB
/// fragment is exactly 19 bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Emphasis attributes. A set with several attributes writes one
    /// sequence per attribute.
    Emphasis(Emphasis),
    /// Foreground color
    Foreground(Color),
    /// Background color
    Background(Color),
    /// Restore the default rendition
    Reset,
}

impl Fragment {
    /// Number of bytes this fragment writes.
    pub fn encoded_len(&self) -> usize {
        match self {
            Fragment::Emphasis(emphasis) => 4 * emphasis.attributes().count(),
            Fragment::Foreground(color) => color_len(color, false),
            Fragment::Background(color) => color_len(color, true),
            Fragment::Reset => RESET.len(),
        }
    }
}

fn color_len(color: &Color, background: bool) -> usize {
    match color {
        Color::Rgb(_) => RGB_FRAGMENT_LEN,
        Color::Terminal(terminal) => {
            let code = if background {
                terminal.background_code()
            } else {
                terminal.foreground_code()
            };
            // "\x1b[" + digits + "m"
            if code >= 100 { 6 } else { 5 }
        }
    }
}

fn write_rgb(f: &mut fmt::Formatter<'_>, lead: u8, rgb: &Rgb) -> fmt::Result {
    write!(f, "\x1b[{};2;{:03};{:03};{:03}m", lead, rgb.r, rgb.g, rgb.b)
}

impl Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Emphasis(emphasis) => {
                for code in emphasis.attributes().filter_map(|e| e.sgr_code()) {
                    write!(f, "\x1b[{}m", code)?;
                }
                Ok(())
            }
            Fragment::Foreground(Color::Rgb(rgb)) => write_rgb(f, RGB_FOREGROUND, rgb),
            Fragment::Foreground(Color::Terminal(terminal)) => {
                write!(f, "\x1b[{}m", terminal.foreground_code())
            }
            Fragment::Background(Color::Rgb(rgb)) => write_rgb(f, RGB_BACKGROUND, rgb),
            Fragment::Background(Color::Terminal(terminal)) => {
                write!(f, "\x1b[{}m", terminal.background_code())
            }
            Fragment::Reset => f.write_str(RESET),
        }
    }
}

/// The escape fragments surrounding a run of styled text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedStyle {
    prefix: Vec<Fragment>,
}

impl EncodedStyle {
    /// Fragments written before the text, in output order.
    pub fn prefix(&self) -> &[Fragment] {
        &self.prefix
    }

    /// Fragment written after the text. Present only if the prefix is not
    /// empty.
    pub fn suffix(&self) -> Option<Fragment> {
        if self.prefix.is_empty() {
            None
        } else {
            Some(Fragment::Reset)
        }
    }

    /// Whether this encoding writes no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Number of bytes written before the text.
    pub fn prefix_len(&self) -> usize {
        self.prefix.iter().map(Fragment::encoded_len).sum()
    }

    /// Number of bytes written before and after the text.
    pub fn encoded_len(&self) -> usize {
        self.prefix_len() + self.suffix().map_or(0, |reset| reset.encoded_len())
    }

    /// Write the prefix fragments.
    pub fn write_prefix<W: Write>(&self, writer: &mut W) -> fmt::Result {
        for fragment in &self.prefix {
            write!(writer, "{}", fragment)?;
        }
        Ok(())
    }

    /// Write the reset fragment, if any.
    pub fn write_suffix<W: Write>(&self, writer: &mut W) -> fmt::Result {
        match self.suffix() {
            Some(reset) => write!(writer, "{}", reset),
            None => Ok(()),
        }
    }
}

impl TextStyle {
    /// Encode this style into its escape fragments.
    ///
    /// ```rust
    /// use chromatext_textstyle::{fg, Emphasis, NamedColor};
    ///
    /// let encoded = (fg(NamedColor::Blue) | Emphasis::BOLD).encode();
    /// let mut prefix = String::new();
    /// encoded.write_prefix(&mut prefix).unwrap();
    /// assert_eq!(prefix, "\x1b[1m\x1b[38;2;000;000;255m");
    /// ```
    pub fn encode(&self) -> EncodedStyle {
        let mut prefix = Vec::with_capacity(6);
        prefix.extend(self.emphasis.attributes().map(Fragment::Emphasis));
        if let Some(color) = self.foreground {
            prefix.push(Fragment::Foreground(color));
        }
        if let Some(color) = self.background {
            prefix.push(Fragment::Background(color));
        }
        EncodedStyle { prefix }
    }
}

/// Writes the prefix fragments of the style.
impl Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode().write_prefix(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TerminalColor;
    use crate::palette::NamedColor;
    use crate::style::{bg, fg};

    fn prefix(style: TextStyle) -> String {
        let mut output = String::new();
        style.encode().write_prefix(&mut output).unwrap();
        output
    }

    #[test]
    fn test_encode_empty_style() {
        let encoded = TextStyle::default().encode();
        assert!(encoded.is_empty());
        assert_eq!(encoded.suffix(), None);
        assert_eq!(encoded.encoded_len(), 0);
        assert_eq!(prefix(TextStyle::default()), "");
    }

    #[test]
    fn test_encode_undefined_emphasis_bits() {
        let style = TextStyle {
            emphasis: Emphasis::from_bits_retain(0x10),
            ..TextStyle::new()
        };
        let encoded = style.encode();
        assert!(encoded.is_empty());
        assert_eq!(encoded.suffix(), None);
        assert_eq!(encoded.prefix_len(), 0);
        assert_eq!(encoded.encoded_len(), 0);
        assert_eq!(prefix(style), "");

        let style = TextStyle {
            emphasis: Emphasis::from_bits_retain(0x10) | Emphasis::UNDERLINE,
            ..TextStyle::new()
        };
        assert_eq!(style.encode().prefix(), &[Fragment::Emphasis(Emphasis::UNDERLINE)]);
        assert_eq!(style.encode().encoded_len(), 8);
    }

    #[test]
    fn test_encode_each_emphasis() {
        assert_eq!(prefix(Emphasis::BOLD.into()), "\x1b[1m");
        assert_eq!(prefix(Emphasis::ITALIC.into()), "\x1b[3m");
        assert_eq!(prefix(Emphasis::UNDERLINE.into()), "\x1b[4m");
        assert_eq!(prefix(Emphasis::STRIKETHROUGH.into()), "\x1b[9m");
    }

    #[test]
    fn test_encode_all_emphasis_separately() {
        let style = TextStyle::from(Emphasis::all());
        assert_eq!(prefix(style), "\x1b[1m\x1b[3m\x1b[4m\x1b[9m");
        assert_eq!(style.encode().prefix().len(), 4);
    }

    #[test]
    fn test_encode_rgb_zero_padded() {
        assert_eq!(
            prefix(fg(Rgb::new(255, 20, 30))),
            "\x1b[38;2;255;020;030m"
        );
        assert_eq!(prefix(bg(Rgb::new(0, 0, 0))), "\x1b[48;2;000;000;000m");
        assert_eq!(prefix(bg(Rgb::new(7, 80, 255))), "\x1b[48;2;007;080;255m");
    }

    #[test]
    fn test_encode_terminal_colors() {
        assert_eq!(prefix(fg(TerminalColor::Red)), "\x1b[31m");
        assert_eq!(prefix(bg(TerminalColor::Cyan)), "\x1b[46m");
        assert_eq!(prefix(fg(TerminalColor::BrightGreen)), "\x1b[92m");
        assert_eq!(prefix(bg(TerminalColor::BrightMagenta)), "\x1b[105m");
    }

    #[test]
    fn test_encode_order() {
        let style = bg(NamedColor::Red) | fg(NamedColor::Blue) | Emphasis::UNDERLINE | Emphasis::BOLD;
        assert_eq!(
            prefix(style),
            "\x1b[1m\x1b[4m\x1b[38;2;000;000;255m\x1b[48;2;255;000;000m"
        );
        assert_eq!(
            style.encode().prefix(),
            &[
                Fragment::Emphasis(Emphasis::BOLD),
                Fragment::Emphasis(Emphasis::UNDERLINE),
                Fragment::Foreground(Color::from(NamedColor::Blue)),
                Fragment::Background(Color::from(NamedColor::Red)),
            ]
        );
    }

    #[test]
    fn test_encode_suffix_only_when_styled() {
        let encoded = fg(TerminalColor::Red).encode();
        assert_eq!(encoded.suffix(), Some(Fragment::Reset));
        let mut output = String::new();
        encoded.write_suffix(&mut output).unwrap();
        assert_eq!(output, RESET);

        let mut output = String::new();
        TextStyle::new().encode().write_suffix(&mut output).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_encoded_len_matches_output() {
        let styles = [
            fg(Rgb::new(1, 2, 3)),
            bg(TerminalColor::BrightWhite),
            bg(TerminalColor::Black) | Emphasis::ITALIC,
            fg(TerminalColor::BrightBlue) | bg(NamedColor::Teal) | Emphasis::all(),
        ];
        for style in styles {
            let encoded = style.encode();
            let mut output = String::new();
            encoded.write_prefix(&mut output).unwrap();
            assert_eq!(output.len(), encoded.prefix_len());
            encoded.write_suffix(&mut output).unwrap();
            assert_eq!(output.len(), encoded.encoded_len());
        }
    }

    #[test]
    fn test_fragment_display_combined_emphasis() {
        let fragment = Fragment::Emphasis(Emphasis::ITALIC | Emphasis::STRIKETHROUGH);
        assert_eq!(fragment.to_string(), "\x1b[3m\x1b[9m");
        assert_eq!(fragment.encoded_len(), 8);
    }

    #[test]
    fn test_style_display_writes_prefix() {
        let style = fg(TerminalColor::Green) | Emphasis::BOLD;
        assert_eq!(style.to_string(), "\x1b[1m\x1b[32m");
    }

    #[test]
    fn test_encode_deterministic() {
        let style = fg(NamedColor::Orange) | bg(TerminalColor::Blue) | Emphasis::ITALIC;
        assert_eq!(style.encode(), style.encode());
        assert_eq!(style.to_string(), style.to_string());
    }
}
