//! Shared tag palette for domain value rendering

/// Presentation-agnostic color assigned to a domain tag
///
/// Both front ends translate this into their own color space, so the
/// domain maps never depend on a UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColor {
    Green,
    Red,
    Orange,
    Blue,
    Purple,
    Magenta,
    Cyan,
    Gold,
    /// Neutral tag, used for values without a dedicated color
    Default,
}
