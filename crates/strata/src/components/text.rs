// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Text components (log bodies and severity labels).

use crate::batch::Component;
use crate::encode::{EncodeResult, PayloadEncoder};

/// A UTF-8 text value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text(pub String);

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Component for Text {
    const TYPE_NAME: &'static str = "strata.components.Text";

    fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()> {
        enc.write_str(&self.0)
    }
}

/// A text log severity label.
///
/// Free-form on the wire; the constants cover the conventional levels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLogLevel(pub String);

impl TextLogLevel {
    pub const TRACE: &'static str = "TRACE";
    pub const DEBUG: &'static str = "DEBUG";
    pub const INFO: &'static str = "INFO";
    pub const WARN: &'static str = "WARN";
    pub const ERROR: &'static str = "ERROR";
}

impl From<String> for TextLogLevel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TextLogLevel {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Component for TextLogLevel {
    const TYPE_NAME: &'static str = "strata.components.TextLogLevel";

    fn encode(&self, enc: &mut PayloadEncoder) -> EncodeResult<()> {
        enc.write_str(&self.0)
    }
}
