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


//! Error types for styled rendering.
//!
//! The style model itself cannot fail. Errors only come from the formatting
//! engine that produces the body text or from the sink the bytes go to.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`RenderError`].
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering styled text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The formatting engine reported a failure while producing the body.
    ///
    /// This is raised before any escape sequence reaches the sink.
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// I/O error from a stream sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixed capacity buffer cannot hold the rendered output.
    #[error("Buffer full: needed {needed} bytes but only {remaining} remain")]
    BufferFull {
        /// Number of bytes the rendered output requires
        needed: usize,
        /// Number of bytes the buffer can still accept
        remaining: usize,
    },
}

impl RenderError {
    /// Check if the error came from the formatting engine
    pub fn is_format_error(&self) -> bool {
        matches!(self, RenderError::Format(_))
    }

    /// Check if the error came from the output sink
    pub fn is_sink_error(&self) -> bool {
        matches!(self, RenderError::Io(_) | RenderError::BufferFull { .. })
    }
}
