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


use bitflags::bitflags;

bitflags! {
    /// Set of non-color text attributes.
    ///
    /// Any combination is valid, including none and all four. Every attribute
    /// present in a style is written as its own escape fragment.
    ///
    /// | Attribute       | Code |
    /// |-----------------|------|
    /// | `BOLD`          | `1`  |
    /// | `ITALIC`        | `3`  |
    /// | `UNDERLINE`     | `4`  |
    /// | `STRIKETHROUGH` | `9`  |
    ///
    /// # Example
    ///
    /// ```
    /// use chromatext_textstyle::Emphasis;
    ///
    /// let mut emphasis = Emphasis::empty();
    /// emphasis |= Emphasis::BOLD | Emphasis::UNDERLINE;
    /// assert!(emphasis.contains(Emphasis::BOLD));
    /// assert!(!emphasis.contains(Emphasis::ITALIC));
    /// ```
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Emphasis: u8 {
        /// Bold or increased intensity (`1`)
        const BOLD = 1 << 0;
        /// Italic (`3`)
        const ITALIC = 1 << 1;
        /// Single underline (`4`)
        const UNDERLINE = 1 << 2;
        /// Crossed-out (`9`)
        const STRIKETHROUGH = 1 << 3;
    }
}

impl Emphasis {
    /// SGR code of a single attribute, or `None` for an empty or combined set.
    pub fn sgr_code(&self) -> Option<u8> {
        if *self == Emphasis::BOLD {
            Some(1)
        } else if *self == Emphasis::ITALIC {
            Some(3)
        } else if *self == Emphasis::UNDERLINE {
            Some(4)
        } else if *self == Emphasis::STRIKETHROUGH {
            Some(9)
        } else {
            None
        }
    }

    /// This set with any bits outside the four attributes dropped.
    pub fn known(&self) -> Emphasis {
        Emphasis::from_bits_truncate(self.bits())
    }

    /// Whether this set holds none of the four attributes.
    pub fn has_no_attributes(&self) -> bool {
        self.known().is_empty()
    }

    /// Iterate the attributes of this set in encoding order: bold, italic,
    /// underline, strikethrough. Undefined bits are skipped.
    pub fn attributes(&self) -> bitflags::iter::Iter<Emphasis> {
        self.known().iter()
    }
}
