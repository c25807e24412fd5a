use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::PaintError;
use crate::id_generator::GroupId;
use crate::shape::Shape;

/// Outline width in pixels, always within `0..=20`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StrokeWidth(u8);

impl StrokeWidth {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 20;
    pub const DEFAULT: StrokeWidth = StrokeWidth(10);

    pub fn new(width: u8) -> Result<Self, PaintError> {
        if width > Self::MAX {
            return Err(PaintError::invalid(format!(
                "stroke width {width} outside {}..={}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(width))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether an outline drawn at this width is visible
    pub fn is_visible(self) -> bool {
        self.0 > Self::MIN
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for StrokeWidth {
    type Error = PaintError;

    fn try_from(width: u8) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

impl From<StrokeWidth> for u8 {
    fn from(width: StrokeWidth) -> Self {
        width.0
    }
}

/// Paint attributes captured at the moment a stroke is committed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color32,
    pub fill_color: Color32,
    pub filled: bool,
    pub erase_mode: bool,
    pub width: StrokeWidth,
}

/// One committed shape with its paint attributes.
///
/// Immutable once created; re-tagging with another group id makes a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    shape: Shape,
    color: Color32,
    fill_color: Color32,
    filled: bool,
    erase_mode: bool,
    width: StrokeWidth,
    group_id: GroupId,
}

impl Stroke {
    pub fn new(shape: Shape, paint: Paint, group_id: GroupId) -> Self {
        Self {
            shape,
            color: paint.color,
            fill_color: paint.fill_color,
            filled: paint.filled,
            erase_mode: paint.erase_mode,
            width: paint.width,
            group_id,
        }
    }

    /// A copy of this stroke belonging to another group
    pub fn with_group_id(&self, group_id: GroupId) -> Self {
        Self {
            group_id,
            ..self.clone()
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn fill_color(&self) -> Color32 {
        self.fill_color
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Whether the stroke was committed while erasing (painted in background color)
    pub fn is_erase_mode(&self) -> bool {
        self.erase_mode
    }

    pub fn width(&self) -> StrokeWidth {
        self.width
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    pub fn paint(&self) -> Paint {
        Paint {
            color: self.color,
            fill_color: self.fill_color,
            filled: self.filled,
            erase_mode: self.erase_mode,
            width: self.width,
        }
    }
}
