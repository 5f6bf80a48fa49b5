//! Typed arguments for Thumbor operations
//!
//! Every type here renders to the exact token the proxy expects in the
//! URL path. Parsing is case-insensitive and exists for callers that start
//! from strings (the dynamic adapter and the CLI).

use std::fmt;
use std::str::FromStr;

use crate::error::BuilderError;

/// Which pixel determines the colour trimmed away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSource {
    TopLeft,
    BottomRight,
}

impl TrimSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl FromStr for TrimSource {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top-left" | "top_left" | "topleft" => Ok(TrimSource::TopLeft),
            "bottom-right" | "bottom_right" | "bottomright" => Ok(TrimSource::BottomRight),
            _ => Err(BuilderError::invalid_argument(
                "trim",
                format!("unknown colour source: {}", s),
            )),
        }
    }
}

/// Horizontal alignment used when cropping after a resize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl HAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for HAlign {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(HAlign::Left),
            "center" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            _ => Err(BuilderError::invalid_argument(
                "halign",
                format!("unknown horizontal alignment: {}", s),
            )),
        }
    }
}

/// Vertical alignment used when cropping after a resize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for VAlign {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(VAlign::Top),
            "middle" => Ok(VAlign::Middle),
            "bottom" => Ok(VAlign::Bottom),
            _ => Err(BuilderError::invalid_argument(
                "valign",
                format!("unknown vertical alignment: {}", s),
            )),
        }
    }
}

/// How the target dimensions are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// Plain resize, cropping to fill when both axes are given
    Resize,
    /// Scale so the image fits inside the bounding box
    FitIn,
}

/// Target dimensions
///
/// `0` on an axis keeps the aspect ratio for that axis. A negative value
/// flips the image on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub mode: ResizeMode,
    pub width: i32,
    pub height: i32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Crop rectangle given by its top-left and bottom-right corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub top_left_x: u32,
    pub top_left_y: u32,
    pub bottom_right_x: u32,
    pub bottom_right_y: u32,
}

impl fmt::Display for CropBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}:{}x{}",
            self.top_left_x, self.top_left_y, self.bottom_right_x, self.bottom_right_y
        )
    }
}
