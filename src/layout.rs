//! String codecs for values the configuration dialog persists.
//!
//! The dialog itself (toolkit widgets, settings-schema lookups, window
//! positioning) lives outside this crate; what it writes into the host
//! key-value store are two `"::"`-separated string formats, and this module
//! is their single owner:
//!
//! - `"<orientation>::<style>"` - layout selection ([`LayoutChoice`])
//! - `"<x>::<y>"` - window position ([`WindowPos`])

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the two halves of a persisted value.
const SEPARATOR: &str = "::";

/// Arrangement of the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            other => Err(SettingsError::UnknownOrientation(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A persisted layout selection.
///
/// Style names are owned by the dialog; they pass through unvalidated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutChoice {
    pub orientation: Orientation,
    pub style: String,
}

impl FromStr for LayoutChoice {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        let (orientation, style) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| SettingsError::MissingSeparator(s.to_string()))?;
        Ok(Self {
            orientation: orientation.parse()?,
            style: style.to_string(),
        })
    }
}

impl fmt::Display for LayoutChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.orientation, SEPARATOR, self.style)
    }
}

/// A persisted window position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPos {
    pub x: i32,
    pub y: i32,
}

impl FromStr for WindowPos {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| SettingsError::MissingSeparator(s.to_string()))?;
        Ok(Self {
            x: x.trim().parse()?,
            y: y.trim().parse()?,
        })
    }
}

impl fmt::Display for WindowPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.x, SEPARATOR, self.y)
    }
}
