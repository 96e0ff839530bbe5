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


use crate::style::TextStyle;
use tracing::debug;

/// Environment variable that disables styled output when set to a non-empty
/// value. See <https://no-color.org>.
pub const NO_COLOR: &str = "NO_COLOR";

/// Controls whether styles are rendered at all.
///
/// A disabled configuration maps every style to the empty style, so rendered
/// output is the plain formatted text with no escape sequences.
///
/// ```rust
/// use chromatext_textstyle::{fg, StyleConfig, TerminalColor};
///
/// let style = fg(TerminalColor::Red);
/// assert_eq!(StyleConfig::enabled().apply(style), style);
/// assert!(StyleConfig::disabled().apply(style).is_empty());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct StyleConfig {
    /// Emit SGR sequences
    pub enabled: bool,
}

impl StyleConfig {
    /// Render all styles
    pub const fn enabled() -> StyleConfig {
        StyleConfig { enabled: true }
    }

    /// Render plain text only
    pub const fn disabled() -> StyleConfig {
        StyleConfig { enabled: false }
    }

    /// Build a configuration from the process environment.
    ///
    /// Styling is disabled when `NO_COLOR` is present and not empty.
    pub fn from_env() -> StyleConfig {
        let config = Self::from_no_color(std::env::var_os(NO_COLOR).as_deref());
        debug!(enabled = config.enabled, "resolved style configuration");
        config
    }

    fn from_no_color(value: Option<&std::ffi::OsStr>) -> StyleConfig {
        match value {
            Some(value) if !value.is_empty() => StyleConfig::disabled(),
            _ => StyleConfig::enabled(),
        }
    }

    /// The style that should actually be rendered under this configuration.
    pub fn apply(&self, style: TextStyle) -> TextStyle {
        if self.enabled { style } else { TextStyle::new() }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::enabled()
    }
}
