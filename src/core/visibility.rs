use super::constants::{ITEM_HIDDEN_OFFSET_PX, ITEM_REVEAL_HEIGHT_DIVISOR};

/// Bounding box of a portfolio card relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug)]
pub struct ItemGeometry {
    pub id: &'static str,
    pub top: f32,
    pub height: f32,
}

/// Style a card should carry after a scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemVisibility {
    pub opacity: f32,
    pub translate_y_px: f32,
}

impl ItemVisibility {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        translate_y_px: 0.0,
    };
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        translate_y_px: ITEM_HIDDEN_OFFSET_PX,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn css_opacity(&self) -> String {
        format!("{}", self.opacity)
    }

    pub fn css_transform(&self) -> String {
        if self.translate_y_px == 0.0 {
            "translateY(0)".to_string()
        } else {
            format!("translateY({}px)", self.translate_y_px)
        }
    }
}

/// A card is revealed once its top edge has risen above the point a quarter
/// of its height from the bottom of the viewport. Equality stays hidden.
#[inline]
pub fn item_visibility(geometry: &ItemGeometry, viewport_height: f32) -> ItemVisibility {
    let threshold = viewport_height - geometry.height / ITEM_REVEAL_HEIGHT_DIVISOR;
    if geometry.top < threshold {
        ItemVisibility::VISIBLE
    } else {
        ItemVisibility::HIDDEN
    }
}

pub fn items_visibility(
    items: &[ItemGeometry],
    viewport_height: f32,
) -> Vec<(&'static str, ItemVisibility)> {
    items
        .iter()
        .map(|g| (g.id, item_visibility(g, viewport_height)))
        .collect()
}
