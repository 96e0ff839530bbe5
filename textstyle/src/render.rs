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


//! Rendering of formatted text wrapped in a style's escape sequences.
//!
//! Every entry point goes through [`render_to`], which formats the body with
//! `core::fmt` and writes `prefix ++ body ++ suffix` to a [`StyleSink`]. The
//! body is formatted before anything reaches the sink, so a failing
//! [`Display`] implementation leaves the sink untouched.

use crate::result::{RenderError, RenderResult};
use crate::style::TextStyle;
use bytes::BufMut;
use std::fmt::{self, Display};
use std::io;
use tracing::{instrument, trace};

/// Destination for rendered bytes.
///
/// Implemented for [`String`]; the stream, iterator and buffer entry points
/// wrap their destination in an internal adapter.
pub trait StyleSink {
    /// Append rendered text to the sink.
    fn append(&mut self, text: &str) -> RenderResult<()>;
}

impl StyleSink for String {
    fn append(&mut self, text: &str) -> RenderResult<()> {
        self.push_str(text);
        Ok(())
    }
}

struct StreamSink<'a, W: ?Sized>(&'a mut W);

impl<W: io::Write + ?Sized> StyleSink for StreamSink<'_, W> {
    fn append(&mut self, text: &str) -> RenderResult<()> {
        self.0.write_all(text.as_bytes())?;
        Ok(())
    }
}

struct ExtendSink<'a, E>(&'a mut E);

impl<E: Extend<char>> StyleSink for ExtendSink<'_, E> {
    fn append(&mut self, text: &str) -> RenderResult<()> {
        self.0.extend(text.chars());
        Ok(())
    }
}

struct BufferSink<'a, B: ?Sized>(&'a mut B);

impl<B: BufMut + ?Sized> StyleSink for BufferSink<'_, B> {
    fn append(&mut self, text: &str) -> RenderResult<()> {
        let remaining = self.0.remaining_mut();
        if remaining < text.len() {
            return Err(RenderError::BufferFull {
                needed: text.len(),
                remaining,
            });
        }
        self.0.put_slice(text.as_bytes());
        Ok(())
    }
}

/// Render `args` wrapped in `style` and append the result to `sink`.
///
/// The sink receives the complete output in a single [`StyleSink::append`]
/// call, or nothing if formatting fails.
#[instrument(skip_all)]
pub fn render_to<S: StyleSink + ?Sized>(
    sink: &mut S,
    style: TextStyle,
    args: fmt::Arguments<'_>,
) -> RenderResult<()> {
    let encoded = style.encode();
    let mut output = String::with_capacity(encoded.encoded_len());
    encoded.write_prefix(&mut output)?;
    let prefix_len = output.len();
    fmt::write(&mut output, args)?;
    let body_len = output.len() - prefix_len;
    encoded.write_suffix(&mut output)?;
    trace!(
        fragments = encoded.prefix().len(),
        body_len,
        total = output.len(),
        "rendered styled text"
    );
    sink.append(&output)
}

/// Write styled text to a stream such as [`io::stdout`].
///
/// The stream is not flushed.
///
/// ```rust
/// use chromatext_textstyle::{print, fg, TerminalColor};
///
/// let mut out = Vec::new();
/// print(&mut out, fg(TerminalColor::Red), format_args!("tred")).unwrap();
/// assert_eq!(out, b"\x1b[31mtred\x1b[0m");
/// ```
pub fn print<W: io::Write + ?Sized>(
    writer: &mut W,
    style: TextStyle,
    args: fmt::Arguments<'_>,
) -> RenderResult<()> {
    render_to(&mut StreamSink(writer), style, args)
}

/// Render styled text into a new [`String`].
///
/// ```rust
/// use chromatext_textstyle::{format, Emphasis};
///
/// let text = format(Emphasis::BOLD.into(), format_args!("bold")).unwrap();
/// assert_eq!(text, "\x1b[1mbold\x1b[0m");
/// ```
pub fn format(style: TextStyle, args: fmt::Arguments<'_>) -> RenderResult<String> {
    let mut output = String::new();
    render_to(&mut output, style, args)?;
    Ok(output)
}

/// Append styled text to anything that can be extended with characters.
pub fn format_to<E: Extend<char>>(
    out: &mut E,
    style: TextStyle,
    args: fmt::Arguments<'_>,
) -> RenderResult<()> {
    render_to(&mut ExtendSink(out), style, args)
}

/// Append styled text to a growable byte buffer such as `BytesMut` or
/// `Vec<u8>`.
///
/// Fails with [`RenderError::BufferFull`] without writing if the buffer
/// cannot take the whole output.
pub fn format_to_buffer<B: BufMut + ?Sized>(
    buffer: &mut B,
    style: TextStyle,
    args: fmt::Arguments<'_>,
) -> RenderResult<()> {
    render_to(&mut BufferSink(buffer), style, args)
}

/// A value displayed with a style applied.
///
/// Created by [`styled`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Styled<T> {
    value: T,
    style: TextStyle,
}

/// Wrap `value` so that its [`Display`] output carries `style`.
///
/// ```rust
/// use chromatext_textstyle::{bg, styled, TerminalColor};
///
/// let text = format!("[{}]", styled(42, bg(TerminalColor::Cyan)));
/// assert_eq!(text, "[\x1b[46m42\x1b[0m]");
/// ```
pub fn styled<T: Display>(value: T, style: TextStyle) -> Styled<T> {
    Styled { value, style }
}

impl<T> Styled<T> {
    /// The style applied to the value.
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Width, fill, alignment and precision apply to the value only; the escape
/// sequences never count towards the width.
impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut body = String::new();
        fmt::write(&mut body, format_args!("{}", self.value))?;
        let encoded = self.style.encode();
        encoded.write_prefix(f)?;
        f.pad(&body)?;
        encoded.write_suffix(f)
    }
}

/// Render a format string wrapped in a style into a new `String`.
///
/// ```rust
/// use chromatext_textstyle::{styled_format, fg, Rgb};
///
/// let text = styled_format!(fg(Rgb::new(255, 20, 30)), "rgb({},{},{})", 255, 20, 30).unwrap();
/// assert_eq!(text, "\x1b[38;2;255;020;030mrgb(255,20,30)\x1b[0m");
/// ```
#[macro_export]
macro_rules! styled_format {
    ($style:expr, $($arg:tt)*) => {
        $crate::format($style, ::core::format_args!($($arg)*))
    };
}

/// Write a format string wrapped in a style to an [`std::io::Write`] stream.
#[macro_export]
macro_rules! styled_print {
    ($writer:expr, $style:expr, $($arg:tt)*) => {
        $crate::print($writer, $style, ::core::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Rgb, TerminalColor};
    use crate::emphasis::Emphasis;
    use crate::palette::NamedColor;
    use crate::style::{bg, fg};
    use bytes::BytesMut;
    use tracing_test::traced_test;

    struct Failing;

    impl Display for Failing {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_format_empty_style() {
        let text = format(TextStyle::default(), format_args!("hi")).unwrap();
        assert_eq!(text, "hi");
    }

    #[test]
    fn test_format_rgb() {
        let text = format(fg(Rgb::new(255, 20, 30)), format_args!("rgb(255,20,30)")).unwrap();
        assert_eq!(text, "\x1b[38;2;255;020;030mrgb(255,20,30)\x1b[0m");
    }

    #[test]
    fn test_format_two_colors() {
        let style = fg(NamedColor::Blue) | bg(NamedColor::Red);
        let text = format(style, format_args!("two color")).unwrap();
        assert_eq!(
            text,
            "\x1b[38;2;000;000;255m\x1b[48;2;255;000;000mtwo color\x1b[0m"
        );
    }

    #[test]
    fn test_format_arguments_substituted() {
        let text = format(Emphasis::ITALIC.into(), format_args!("{}-{:>3}", "a", 7)).unwrap();
        assert_eq!(text, "\x1b[3ma-  7\x1b[0m");
    }

    #[test]
    fn test_print_writes_stream() {
        let mut out: Vec<u8> = Vec::new();
        print(&mut out, bg(TerminalColor::Cyan), format_args!("tcyan")).unwrap();
        assert_eq!(out, b"\x1b[46mtcyan\x1b[0m");
    }

    #[test]
    fn test_print_dyn_writer() {
        let mut out: Vec<u8> = Vec::new();
        let writer: &mut dyn io::Write = &mut out;
        print(writer, Emphasis::BOLD.into(), format_args!("x")).unwrap();
        assert_eq!(out, b"\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_format_to_extend() {
        let mut out = String::from(">");
        format_to(&mut out, fg(TerminalColor::BrightGreen), format_args!("tbgreen")).unwrap();
        assert_eq!(out, ">\x1b[92mtbgreen\x1b[0m");

        let mut chars: Vec<char> = Vec::new();
        format_to(&mut chars, TextStyle::new(), format_args!("ok")).unwrap();
        assert_eq!(chars, vec!['o', 'k']);
    }

    #[test]
    fn test_format_to_buffer() {
        let mut buffer = BytesMut::new();
        format_to_buffer(&mut buffer, bg(TerminalColor::BrightMagenta), format_args!("tbmagenta"))
            .unwrap();
        assert_eq!(&buffer[..], b"\x1b[105mtbmagenta\x1b[0m");
    }

    #[test]
    fn test_format_to_buffer_full() {
        let mut storage = [0u8; 8];
        let mut slice: &mut [u8] = &mut storage;
        let err = format_to_buffer(&mut slice, Emphasis::BOLD.into(), format_args!("bold")).unwrap_err();
        assert!(matches!(
            err,
            RenderError::BufferFull {
                needed: 12,
                remaining: 8
            }
        ));
        assert_eq!(storage, [0u8; 8]);
    }

    #[test]
    fn test_format_error_propagates() {
        let err = format(Emphasis::BOLD.into(), format_args!("{}", Failing)).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_format_error_leaves_sinks_untouched() {
        let style = fg(TerminalColor::Red) | Emphasis::UNDERLINE;

        let mut stream: Vec<u8> = Vec::new();
        assert!(print(&mut stream, style, format_args!("a{}", Failing)).is_err());
        assert!(stream.is_empty());

        let mut string = String::new();
        assert!(format_to(&mut string, style, format_args!("a{}", Failing)).is_err());
        assert!(string.is_empty());

        let mut buffer = BytesMut::new();
        assert!(format_to_buffer(&mut buffer, style, format_args!("a{}", Failing)).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_styled_display() {
        let value = styled("warn", fg(TerminalColor::Yellow) | Emphasis::BOLD);
        assert_eq!(value.to_string(), "\x1b[1m\x1b[33mwarn\x1b[0m");
        assert_eq!(*value.value(), "warn");
        assert!(value.style().has_foreground());
        assert_eq!(styled("plain", TextStyle::new()).to_string(), "plain");
    }

    #[test]
    fn test_styled_display_padding() {
        let value = styled("ok", fg(TerminalColor::Green));
        assert_eq!(format!("{:>6}", value), "\x1b[32m    ok\x1b[0m");
        assert_eq!(format!("{:*<5}", value), "\x1b[32mok***\x1b[0m");
        assert_eq!(format!("{:^6}", styled(7, TextStyle::new())), "  7   ");
        assert_eq!(format!("{:.1}", value), "\x1b[32mo\x1b[0m");
    }

    #[test]
    fn test_styled_display_error_writes_nothing() {
        use std::fmt::Write as _;
        let mut out = String::new();
        assert!(write!(out, "{}", styled(Failing, Emphasis::BOLD.into())).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_macros() {
        let text = styled_format!(fg(NamedColor::Blue) | Emphasis::BOLD, "{}/{}", "blue", "bold").unwrap();
        assert_eq!(text, "\x1b[1m\x1b[38;2;000;000;255mblue/bold\x1b[0m");

        let mut out: Vec<u8> = Vec::new();
        styled_print!(&mut out, fg(NamedColor::Blue), "blue {}", "log").unwrap();
        assert_eq!(out, b"\x1b[38;2;000;000;255mblue log\x1b[0m");
    }

    #[test]
    #[traced_test]
    fn test_render_is_traced() {
        format(Emphasis::BOLD.into(), format_args!("bold")).unwrap();
        assert!(logs_contain("rendered styled text"));
    }
}
