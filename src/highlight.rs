//! Turning search results into outlines an overlay can draw.
//!
//! Each combination gets an id, a color, and the boxes of its tokens. At most one combination is emphasized at a time.

use std::num::NonZero;

use serde::Serialize;
use strum::{Display, VariantArray};

use crate::location::BoundingBox;
use crate::solver::Combination;

/// Identifies a combination within one [`HighlightPlan`]. Identifiers start at 1.
pub type ComboId = NonZero<usize>;

/// Outline colors, handed out to combinations in order and reused once exhausted.
#[derive(Copy, Clone, Debug, Display, Eq, Hash, PartialEq, VariantArray, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// `rgb(230, 57, 70)`
    Red,
    /// `rgb(244, 140, 6)`
    Orange,
    /// `rgb(255, 195, 0)`
    Gold,
    /// `rgb(56, 176, 0)`
    Green,
    /// `rgb(0, 150, 136)`
    Teal,
    /// `rgb(33, 118, 255)`
    Blue,
    /// `rgb(123, 44, 191)`
    Purple,
    /// `rgb(214, 40, 160)`
    Magenta,
}

impl Palette {
    /// The color as `(red, green, blue)`.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Red => (230, 57, 70),
            Self::Orange => (244, 140, 6),
            Self::Gold => (255, 195, 0),
            Self::Green => (56, 176, 0),
            Self::Teal => (0, 150, 136),
            Self::Blue => (33, 118, 255),
            Self::Purple => (123, 44, 191),
            Self::Magenta => (214, 40, 160),
        }
    }

    /// A CSS `rgba()` color string at the given opacity.
    pub fn css(&self, alpha: f32) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({r}, {g}, {b}, {alpha})")
    }

    fn nth(n: usize) -> Self {
        Self::VARIANTS[n % Self::VARIANTS.len()]
    }
}

/// One combination as it should be outlined on screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComboHighlight {
    /// One more than the combination's position in the search result.
    pub id: ComboId,
    /// Assigned by position, cycling through the palette.
    pub color: Palette,
    /// Boxes of the combination's tokens, in ascending index order.
    pub boxes: Vec<BoundingBox>,
}

/// How an outline is drawn, depending on whether its combination is emphasized.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HighlightStyle {
    /// CSS color of the outline.
    pub outline: String,
    /// Outline width in CSS pixels.
    pub outline_width: u8,
    /// `None` for a transparent fill.
    pub fill: Option<String>,
    /// Factor the outlined boxes are enlarged by.
    pub scale: f32,
    /// Stacking order; emphasized outlines are drawn above the rest.
    pub z_index: u32,
}

const OUTLINE_ALPHA: f32 = 0.9;
const FILL_ALPHA: f32 = 0.2;

impl HighlightStyle {
    fn plain(color: Palette) -> Self {
        Self {
            outline: color.css(OUTLINE_ALPHA),
            outline_width: 3,
            fill: None,
            scale: 1.0,
            z_index: 2147483646,
        }
    }

    fn emphasized(color: Palette) -> Self {
        Self {
            outline: color.css(OUTLINE_ALPHA),
            outline_width: 5,
            fill: Some(color.css(FILL_ALPHA)),
            scale: 1.02,
            z_index: 2147483647,
        }
    }
}

/// Which combination, if any, the user last singled out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Emphasis {
    current: Option<ComboId>,
}

impl Emphasis {
    /// Emphasize `id`, or drop emphasis entirely if `id` is already emphasized.
    ///
    /// Returns the emphasized combination afterwards.
    pub fn toggle(&mut self, id: ComboId) -> Option<ComboId> {
        self.current = if self.current == Some(id) { None } else { Some(id) };
        self.current
    }

    /// Drop emphasis.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// The emphasized combination, if any.
    pub fn current(&self) -> Option<ComboId> {
        self.current
    }
}

/// Everything an overlay needs to outline a set of combinations and let the user emphasize one at a time.
///
/// A plan is rebuilt for every new search result, which also clears emphasis.
#[derive(Clone, Debug, Default)]
pub struct HighlightPlan {
    highlights: Vec<ComboHighlight>,
    emphasis: Emphasis,
}

impl HighlightPlan {
    /// Number and color `combinations` in order, with nothing emphasized.
    pub fn new(combinations: &[Combination]) -> Self {
        let highlights = combinations.iter()
            .zip(1..)
            .filter_map(|(combo, id)| Some(ComboHighlight {
                id: NonZero::new(id)?,
                color: Palette::nth(id - 1),
                boxes: combo.tokens().iter().map(|token| token.bbox).collect(),
            }))
            .collect();

        Self { highlights, emphasis: Emphasis::default() }
    }

    /// Replace the outlined combinations, clearing any emphasis.
    pub fn replace(&mut self, combinations: &[Combination]) {
        *self = Self::new(combinations);
    }

    /// Every outlined combination, by ascending id.
    pub fn highlights(&self) -> &[ComboHighlight] {
        &self.highlights
    }

    /// The combination numbered `id`.
    pub fn get(&self, id: ComboId) -> Option<&ComboHighlight> {
        self.highlights.iter().find(|highlight| highlight.id == id)
    }

    /// Toggle emphasis on `id` as with [`Emphasis::toggle`]. Unknown ids leave the plan untouched.
    pub fn toggle(&mut self, id: ComboId) -> Option<ComboId> {
        if self.get(id).is_some() {
            self.emphasis.toggle(id)
        } else {
            self.emphasis.current()
        }
    }

    /// The emphasized combination, if any.
    pub fn emphasized(&self) -> Option<&ComboHighlight> {
        self.emphasis.current().and_then(|id| self.get(id))
    }

    /// The style to draw `id` with, or `None` if `id` is not part of this plan.
    pub fn style_of(&self, id: ComboId) -> Option<HighlightStyle> {
        let highlight = self.get(id)?;
        Some(if self.emphasis.current() == Some(id) {
            HighlightStyle::emphasized(highlight.color)
        } else {
            HighlightStyle::plain(highlight.color)
        })
    }
}
