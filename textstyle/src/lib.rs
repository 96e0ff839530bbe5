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


//! Styled terminal text.
//!
//! A [`TextStyle`] combines an optional foreground [`Color`], an optional
//! background [`Color`] and a set of [`Emphasis`] attributes. Rendering wraps
//! formatted text in the matching ANSI SGR sequences and a single trailing
//! reset:
//!
//! ```rust
//! use chromatext_textstyle::{bg, fg, styled_format, Emphasis, NamedColor};
//!
//! let text = styled_format!(fg(NamedColor::Blue) | bg(NamedColor::Red), "two color").unwrap();
//! assert_eq!(text, "\x1b[38;2;000;000;255m\x1b[48;2;255;000;000mtwo color\x1b[0m");
//!
//! let text = styled_format!(fg(NamedColor::Blue) | Emphasis::BOLD, "blue/bold").unwrap();
//! assert_eq!(text, "\x1b[1m\x1b[38;2;000;000;255mblue/bold\x1b[0m");
//! ```

mod color;
mod config;
mod emphasis;
mod encoder;
pub mod palette;
mod render;
mod result;
mod style;

pub use self::color::{Color, Rgb, TerminalColor};
pub use self::config::{NO_COLOR, StyleConfig};
pub use self::emphasis::Emphasis;
pub use self::encoder::{EncodedStyle, Fragment, RESET};
pub use self::palette::NamedColor;
pub use self::render::{
    StyleSink, Styled, format, format_to, format_to_buffer, print, render_to, styled,
};
pub use self::result::{RenderError, RenderResult};
pub use self::style::{TextStyle, bg, fg};
