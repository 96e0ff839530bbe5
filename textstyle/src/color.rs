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


use crate::palette::NamedColor;

/// A color that can be applied to the foreground or background of text.
///
/// A `Color` is always exactly one of two color spaces:
///
/// - [`Rgb`]: a 24-bit true color, written as `38;2;RRR;GGG;BBB` (foreground)
///   or `48;2;RRR;GGG;BBB` (background).
/// - [`TerminalColor`]: one of the 16 classic named terminal colors, written
///   as a single SGR numeral.
///
/// # Examples
///
/// ```rust
/// use chromatext_textstyle::{Color, Rgb, TerminalColor};
///
/// let orange = Color::from(Rgb::new(255, 165, 0));
/// let red = Color::from(TerminalColor::Red);
/// assert_ne!(orange, red);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A 24-bit RGB color, as specified by ISO-8613-3.
    Rgb(Rgb),
    /// One of the 16 standard and bright terminal colors.
    Terminal(TerminalColor),
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        Color::Terminal(color)
    }
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        Color::Rgb(color.rgb())
    }
}

/// A 24-bit true color.
///
/// Every `u8` triple is a valid color.
///
/// ```rust
/// use chromatext_textstyle::Rgb;
///
/// assert_eq!(Rgb::from(0xFF141E), Rgb::new(255, 20, 30));
/// assert_eq!(Rgb::from((0, 0, 255)), Rgb::new(0, 0, 255));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_hex(hex: u32) -> Rgb {
        Rgb {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Pack this color into a `0xRRGGBB` value.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl From<u32> for Rgb {
    fn from(hex: u32) -> Self {
        Rgb::from_hex(hex)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// The 16 classic terminal colors.
///
/// Each color has a fixed foreground and background SGR numeral, so no invalid
/// code can ever reach the encoder.
///
/// | Color          | Foreground | Background |
/// |----------------|------------|------------|
/// | Black          | `30`       | `40`       |
/// | Red            | `31`       | `41`       |
/// | Green          | `32`       | `42`       |
/// | Yellow         | `33`       | `43`       |
/// | Blue           | `34`       | `44`       |
/// | Magenta        | `35`       | `45`       |
/// | Cyan           | `36`       | `46`       |
/// | White          | `37`       | `47`       |
/// | Bright Black   | `90`       | `100`      |
/// | Bright Red     | `91`       | `101`      |
/// | Bright Green   | `92`       | `102`      |
/// | Bright Yellow  | `93`       | `103`      |
/// | Bright Blue    | `94`       | `104`      |
/// | Bright Magenta | `95`       | `105`      |
/// | Bright Cyan    | `96`       | `106`      |
/// | Bright White   | `97`       | `107`      |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalColor {
    /// Black - Color #0 (FG `30`, BG `40`).
    Black,
    /// Red - Color #1 (FG `31`, BG `41`).
    Red,
    /// Green - Color #2 (FG `32`, BG `42`).
    Green,
    /// Yellow - Color #3 (FG `33`, BG `43`).
    Yellow,
    /// Blue - Color #4 (FG `34`, BG `44`).
    Blue,
    /// Magenta - Color #5 (FG `35`, BG `45`).
    Magenta,
    /// Cyan - Color #6 (FG `36`, BG `46`).
    Cyan,
    /// White - Color #7 (FG `37`, BG `47`).
    White,
    /// Bright Black - Color #8 (FG `90`, BG `100`).
    BrightBlack,
    /// Bright Red - Color #9 (FG `91`, BG `101`).
    BrightRed,
    /// Bright Green - Color #10 (FG `92`, BG `102`).
    BrightGreen,
    /// Bright Yellow - Color #11 (FG `93`, BG `103`).
    BrightYellow,
    /// Bright Blue - Color #12 (FG `94`, BG `104`).
    BrightBlue,
    /// Bright Magenta - Color #13 (FG `95`, BG `105`).
    BrightMagenta,
    /// Bright Cyan - Color #14 (FG `96`, BG `106`).
    BrightCyan,
    /// Bright White - Color #15 (FG `97`, BG `107`).
    BrightWhite,
}

impl TerminalColor {
    /// All terminal colors in palette index order.
    pub const ALL: [TerminalColor; 16] = [
        TerminalColor::Black,
        TerminalColor::Red,
        TerminalColor::Green,
        TerminalColor::Yellow,
        TerminalColor::Blue,
        TerminalColor::Magenta,
        TerminalColor::Cyan,
        TerminalColor::White,
        TerminalColor::BrightBlack,
        TerminalColor::BrightRed,
        TerminalColor::BrightGreen,
        TerminalColor::BrightYellow,
        TerminalColor::BrightBlue,
        TerminalColor::BrightMagenta,
        TerminalColor::BrightCyan,
        TerminalColor::BrightWhite,
    ];

    /// The SGR numeral selecting this color as the foreground.
    pub fn foreground_code(&self) -> u8 {
        match self {
            TerminalColor::Black => 30,
            TerminalColor::Red => 31,
            TerminalColor::Green => 32,
            TerminalColor::Yellow => 33,
            TerminalColor::Blue => 34,
            TerminalColor::Magenta => 35,
            TerminalColor::Cyan => 36,
            TerminalColor::White => 37,
            TerminalColor::BrightBlack => 90,
            TerminalColor::BrightRed => 91,
            TerminalColor::BrightGreen => 92,
            TerminalColor::BrightYellow => 93,
            TerminalColor::BrightBlue => 94,
            TerminalColor::BrightMagenta => 95,
            TerminalColor::BrightCyan => 96,
            TerminalColor::BrightWhite => 97,
        }
    }

    /// The SGR numeral selecting this color as the background.
    ///
    /// Background codes are always the foreground code plus ten.
    pub fn background_code(&self) -> u8 {
        self.foreground_code() + 10
    }

    /// Whether this color belongs to the bright (aixterm) half of the palette.
    pub fn is_bright(&self) -> bool {
        self.foreground_code() >= 90
    }
}
