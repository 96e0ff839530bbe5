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


//! Named true colors.
//!
//! The CSS/X11 color keywords, each mapped to a fixed [`Rgb`] value. Named
//! colors always render as 24-bit escapes; `NamedColor::Blue` becomes
//! `38;2;000;000;255`, never the terminal's own blue.

use crate::color::Rgb;

macro_rules! named_colors {
    ($($variant:ident => $name:literal = $hex:literal,)*) => {
        /// A CSS/X11 named color.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum NamedColor {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl NamedColor {
            /// Every named color in alphabetical order.
            pub const ALL: &'static [NamedColor] = &[$(NamedColor::$variant,)*];

            /// The 24-bit value of this color.
            pub const fn rgb(self) -> Rgb {
                match self {
                    $(NamedColor::$variant => Rgb::from_hex($hex),)*
                }
            }

            /// The snake_case keyword of this color.
            pub const fn name(self) -> &'static str {
                match self {
                    $(NamedColor::$variant => $name,)*
                }
            }
        }
    };
}

named_colors! {
    AliceBlue => "alice_blue" = 0xF0F8FF,
    AntiqueWhite => "antique_white" = 0xFAEBD7,
    Aqua => "aqua" = 0x00FFFF,
    Aquamarine => "aquamarine" = 0x7FFFD4,
    Azure => "azure" = 0xF0FFFF,
    Beige => "beige" = 0xF5F5DC,
    Bisque => "bisque" = 0xFFE4C4,
    Black => "black" = 0x000000,
    BlanchedAlmond => "blanched_almond" = 0xFFEBCD,
    Blue => "blue" = 0x0000FF,
    BlueViolet => "blue_violet" = 0x8A2BE2,
    Brown => "brown" = 0xA52A2A,
    BurlyWood => "burly_wood" = 0xDEB887,
    CadetBlue => "cadet_blue" = 0x5F9EA0,
    Chartreuse => "chartreuse" = 0x7FFF00,
    Chocolate => "chocolate" = 0xD2691E,
    Coral => "coral" = 0xFF7F50,
    CornflowerBlue => "cornflower_blue" = 0x6495ED,
    Cornsilk => "cornsilk" = 0xFFF8DC,
    Crimson => "crimson" = 0xDC143C,
    Cyan => "cyan" = 0x00FFFF,
    DarkBlue => "dark_blue" = 0x00008B,
    DarkCyan => "dark_cyan" = 0x008B8B,
    DarkGoldenRod => "dark_golden_rod" = 0xB8860B,
    DarkGray => "dark_gray" = 0xA9A9A9,
    DarkGreen => "dark_green" = 0x006400,
    DarkKhaki => "dark_khaki" = 0xBDB76B,
    DarkMagenta => "dark_magenta" = 0x8B008B,
    DarkOliveGreen => "dark_olive_green" = 0x556B2F,
    DarkOrange => "dark_orange" = 0xFF8C00,
    DarkOrchid => "dark_orchid" = 0x9932CC,
    DarkRed => "dark_red" = 0x8B0000,
    DarkSalmon => "dark_salmon" = 0xE9967A,
    DarkSeaGreen => "dark_sea_green" = 0x8FBC8F,
    DarkSlateBlue => "dark_slate_blue" = 0x483D8B,
    DarkSlateGray => "dark_slate_gray" = 0x2F4F4F,
    DarkTurquoise => "dark_turquoise" = 0x00CED1,
    DarkViolet => "dark_violet" = 0x9400D3,
    DeepPink => "deep_pink" = 0xFF1493,
    DeepSkyBlue => "deep_sky_blue" = 0x00BFFF,
    DimGray => "dim_gray" = 0x696969,
    DodgerBlue => "dodger_blue" = 0x1E90FF,
    FireBrick => "fire_brick" = 0xB22222,
    FloralWhite => "floral_white" = 0xFFFAF0,
    ForestGreen => "forest_green" = 0x228B22,
    Fuchsia => "fuchsia" = 0xFF00FF,
    Gainsboro => "gainsboro" = 0xDCDCDC,
    GhostWhite => "ghost_white" = 0xF8F8FF,
    Gold => "gold" = 0xFFD700,
    GoldenRod => "golden_rod" = 0xDAA520,
    Gray => "gray" = 0x808080,
    Green => "green" = 0x008000,
    GreenYellow => "green_yellow" = 0xADFF2F,
    HoneyDew => "honey_dew" = 0xF0FFF0,
    HotPink => "hot_pink" = 0xFF69B4,
    IndianRed => "indian_red" = 0xCD5C5C,
    Indigo => "indigo" = 0x4B0082,
    Ivory => "ivory" = 0xFFFFF0,
    Khaki => "khaki" = 0xF0E68C,
    Lavender => "lavender" = 0xE6E6FA,
    LavenderBlush => "lavender_blush" = 0xFFF0F5,
    LawnGreen => "lawn_green" = 0x7CFC00,
    LemonChiffon => "lemon_chiffon" = 0xFFFACD,
    LightBlue => "light_blue" = 0xADD8E6,
    LightCoral => "light_coral" = 0xF08080,
    LightCyan => "light_cyan" = 0xE0FFFF,
    LightGoldenRodYellow => "light_golden_rod_yellow" = 0xFAFAD2,
    LightGray => "light_gray" = 0xD3D3D3,
    LightGreen => "light_green" = 0x90EE90,
    LightPink => "light_pink" = 0xFFB6C1,
    LightSalmon => "light_salmon" = 0xFFA07A,
    LightSeaGreen => "light_sea_green" = 0x20B2AA,
    LightSkyBlue => "light_sky_blue" = 0x87CEFA,
    LightSlateGray => "light_slate_gray" = 0x778899,
    LightSteelBlue => "light_steel_blue" = 0xB0C4DE,
    LightYellow => "light_yellow" = 0xFFFFE0,
    Lime => "lime" = 0x00FF00,
    LimeGreen => "lime_green" = 0x32CD32,
    Linen => "linen" = 0xFAF0E6,
    Magenta => "magenta" = 0xFF00FF,
    Maroon => "maroon" = 0x800000,
    MediumAquamarine => "medium_aquamarine" = 0x66CDAA,
    MediumBlue => "medium_blue" = 0x0000CD,
    MediumOrchid => "medium_orchid" = 0xBA55D3,
    MediumPurple => "medium_purple" = 0x9370DB,
    MediumSeaGreen => "medium_sea_green" = 0x3CB371,
    MediumSlateBlue => "medium_slate_blue" = 0x7B68EE,
    MediumSpringGreen => "medium_spring_green" = 0x00FA9A,
    MediumTurquoise => "medium_turquoise" = 0x48D1CC,
    MediumVioletRed => "medium_violet_red" = 0xC71585,
    MidnightBlue => "midnight_blue" = 0x191970,
    MintCream => "mint_cream" = 0xF5FFFA,
    MistyRose => "misty_rose" = 0xFFE4E1,
    Moccasin => "moccasin" = 0xFFE4B5,
    NavajoWhite => "navajo_white" = 0xFFDEAD,
    Navy => "navy" = 0x000080,
    OldLace => "old_lace" = 0xFDF5E6,
    Olive => "olive" = 0x808000,
    OliveDrab => "olive_drab" = 0x6B8E23,
    Orange => "orange" = 0xFFA500,
    OrangeRed => "orange_red" = 0xFF4500,
    Orchid => "orchid" = 0xDA70D6,
    PaleGoldenRod => "pale_golden_rod" = 0xEEE8AA,
    PaleGreen => "pale_green" = 0x98FB98,
    PaleTurquoise => "pale_turquoise" = 0xAFEEEE,
    PaleVioletRed => "pale_violet_red" = 0xDB7093,
    PapayaWhip => "papaya_whip" = 0xFFEFD5,
    PeachPuff => "peach_puff" = 0xFFDAB9,
    Peru => "peru" = 0xCD853F,
    Pink => "pink" = 0xFFC0CB,
    Plum => "plum" = 0xDDA0DD,
    PowderBlue => "powder_blue" = 0xB0E0E6,
    Purple => "purple" = 0x800080,
    RebeccaPurple => "rebecca_purple" = 0x663399,
    Red => "red" = 0xFF0000,
    RosyBrown => "rosy_brown" = 0xBC8F8F,
    RoyalBlue => "royal_blue" = 0x4169E1,
    SaddleBrown => "saddle_brown" = 0x8B4513,
    Salmon => "salmon" = 0xFA8072,
    SandyBrown => "sandy_brown" = 0xF4A460,
    SeaGreen => "sea_green" = 0x2E8B57,
    SeaShell => "sea_shell" = 0xFFF5EE,
    Sienna => "sienna" = 0xA0522D,
    Silver => "silver" = 0xC0C0C0,
    SkyBlue => "sky_blue" = 0x87CEEB,
    SlateBlue => "slate_blue" = 0x6A5ACD,
    SlateGray => "slate_gray" = 0x708090,
    Snow => "snow" = 0xFFFAFA,
    SpringGreen => "spring_green" = 0x00FF7F,
    SteelBlue => "steel_blue" = 0x4682B4,
    Tan => "tan" = 0xD2B48C,
    Teal => "teal" = 0x008080,
    Thistle => "thistle" = 0xD8BFD8,
    Tomato => "tomato" = 0xFF6347,
    Turquoise => "turquoise" = 0x40E0D0,
    Violet => "violet" = 0xEE82EE,
    Wheat => "wheat" = 0xF5DEB3,
    White => "white" = 0xFFFFFF,
    WhiteSmoke => "white_smoke" = 0xF5F5F5,
    Yellow => "yellow" = 0xFFFF00,
    YellowGreen => "yellow_green" = 0x9ACD32,
}

impl NamedColor {
    /// Look up a color by keyword.
    ///
    /// Matching ignores ASCII case and the separators `_`, `-` and space, so
    /// `"alice_blue"`, `"AliceBlue"` and `"alice-blue"` all find
    /// [`NamedColor::AliceBlue`].
    pub fn from_name(name: &str) -> Option<NamedColor> {
        NamedColor::ALL
            .iter()
            .copied()
            .find(|color| same_keyword(color.name(), name))
    }
}

impl From<NamedColor> for Rgb {
    fn from(color: NamedColor) -> Self {
        color.rgb()
    }
}

fn same_keyword(keyword: &str, candidate: &str) -> bool {
    let significant = |c: &char| !matches!(c, '_' | '-' | ' ');
    let mut lhs = keyword.chars().filter(significant);
    let mut rhs = candidate.chars().filter(significant);
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => {}
            _ => return false,
        }
    }
}
