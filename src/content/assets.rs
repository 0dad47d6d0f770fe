//! Named placeholder assets for records that ship without an image.
//!
//! Explicit ordered lists with a bounds check, replacing key construction
//! from a loop index. Positions past the end of a list get the named
//! default asset.

pub const DEFAULT_PLACEHOLDER: &str = "https://via.placeholder.com/300x200?text=DELVE";

const SLIDE_PLACEHOLDERS: [&str; 4] = [
    "https://www.delvedatabase.org/uploads/content-blocks/delve-hero2_200624_195758.jpg",
    "https://www.delvedatabase.org/uploads/content-blocks/Pauline-Mundia-ASM-challenges_2024-10-18-132945_mjbh.jpg",
    "https://www.delvedatabase.org/uploads/content-blocks/Cover-SoS.PNG",
    "https://www.delvedatabase.org/uploads/content-blocks/COVER-PAGE-Renewed-Framework-ASM.jpg",
];

const IMPLEMENTER_PLACEHOLDERS: [&str; 2] = [
    "https://via.placeholder.com/200x100?text=Implementer+1",
    "https://via.placeholder.com/200x100?text=Implementer+2",
];

const PARTNER_PLACEHOLDERS: [&str; 8] = [
    "https://via.placeholder.com/150x80?text=Partner+1",
    "https://via.placeholder.com/150x80?text=Partner+2",
    "https://via.placeholder.com/150x80?text=Partner+3",
    "https://via.placeholder.com/150x80?text=Partner+4",
    "https://via.placeholder.com/150x80?text=Partner+5",
    "https://via.placeholder.com/150x80?text=Partner+6",
    "https://via.placeholder.com/150x80?text=Partner+7",
    "https://via.placeholder.com/150x80?text=Partner+8",
];

/// Placeholder image for the slide at `index`.
pub fn slide_placeholder(index: usize) -> &'static str {
    SLIDE_PLACEHOLDERS
        .get(index)
        .copied()
        .unwrap_or(DEFAULT_PLACEHOLDER)
}

/// Placeholder logo for the implementer at `index`.
pub fn implementer_placeholder(index: usize) -> &'static str {
    IMPLEMENTER_PLACEHOLDERS
        .get(index)
        .copied()
        .unwrap_or(DEFAULT_PLACEHOLDER)
}

/// Placeholder logo for the partner at `index`.
pub fn partner_placeholder(index: usize) -> &'static str {
    PARTNER_PLACEHOLDERS
        .get(index)
        .copied()
        .unwrap_or(DEFAULT_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_placeholder_in_range() {
        assert_eq!(slide_placeholder(0), SLIDE_PLACEHOLDERS[0]);
        assert_eq!(slide_placeholder(3), SLIDE_PLACEHOLDERS[3]);
    }

    #[test]
    fn test_slide_placeholder_out_of_range_uses_default() {
        assert_eq!(slide_placeholder(4), DEFAULT_PLACEHOLDER);
        assert_eq!(slide_placeholder(usize::MAX), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_partner_placeholder_bounds() {
        assert_eq!(partner_placeholder(7), PARTNER_PLACEHOLDERS[7]);
        assert_eq!(partner_placeholder(8), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_implementer_placeholder_bounds() {
        assert_eq!(implementer_placeholder(1), IMPLEMENTER_PLACEHOLDERS[1]);
        assert_eq!(implementer_placeholder(2), DEFAULT_PLACEHOLDER);
    }
}
