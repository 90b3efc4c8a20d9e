//! Layout units. Plain value types; no builders, so no shadow companions.

/// Arrangement of children inside a box component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexLayout {
    Horizontal,
    Vertical,
    Baseline,
}
