use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::lexicon;
use super::types::ParsedLineItem;
use super::TARGET_MATCHER;

lazy_static! {
    // Integer loosely followed by "mm", e.g. "18mm" or "18 MM"
    static ref THICKNESS_RE: Regex =
        Regex::new(r"(?i)(\d+)\s*mm").expect("thickness pattern");

    // "8x4", "8 X 4", "8×4 feet" and friends
    static ref SIZE_RE: Regex =
        Regex::new(r"(?i)(\d+)\s*[x×]\s*(\d+)(\s*feet)?").expect("size pattern");
}

/// Best-effort extraction of structured attributes from an unstructured
/// line-item description. Each rule applies independently; an unmatched
/// pattern simply omits its field, no input is ever rejected.
pub struct DescriptionParser {
    // Ordered brand keywords; first hit in scan order wins
    brands: Vec<String>,
}

impl Default for DescriptionParser {
    fn default() -> Self {
        Self {
            brands: lexicon::default_brands(),
        }
    }
}

impl DescriptionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.brands = brands;
        self
    }

    /// Parse a free-text description into structured fields.
    ///
    /// Thickness normalizes to `<N>mm`, size to `<A>x<B>[ feet]`, brand to
    /// the lexicon's canonical casing. The residual product name is the
    /// description with the recognized thickness/size spans removed,
    /// hyphen-like characters replaced by spaces, and whitespace collapsed.
    pub fn parse(&self, description: &str) -> ParsedLineItem {
        let mut stripped_spans: Vec<(usize, usize)> = Vec::new();

        let thickness = THICKNESS_RE.captures(description).map(|caps| {
            let whole = caps.get(0).expect("match group 0");
            stripped_spans.push((whole.start(), whole.end()));
            format!("{}mm", &caps[1])
        });

        let size = SIZE_RE.captures(description).map(|caps| {
            let whole = caps.get(0).expect("match group 0");
            stripped_spans.push((whole.start(), whole.end()));
            if caps.get(3).is_some() {
                format!("{}x{} feet", &caps[1], &caps[2])
            } else {
                format!("{}x{}", &caps[1], &caps[2])
            }
        });

        let lowered = description.to_lowercase();
        let brand = self
            .brands
            .iter()
            .find(|b| lowered.contains(&b.to_lowercase()))
            .cloned();

        let product_name = residual_name(description, &stripped_spans);

        let parsed = ParsedLineItem {
            product_name,
            thickness,
            size,
            brand,
        };

        debug!(
            target: TARGET_MATCHER,
            "Parsed '{}' into name='{}', thickness={:?}, size={:?}, brand={:?}",
            description, parsed.product_name, parsed.thickness, parsed.size, parsed.brand
        );

        parsed
    }
}

/// Remove the matched token spans from the description, then clean up:
/// hyphen-like characters become spaces, whitespace runs collapse to one.
fn residual_name(description: &str, spans: &[(usize, usize)]) -> String {
    let kept: String = description
        .char_indices()
        .filter(|(idx, _)| !spans.iter().any(|(start, end)| idx >= start && idx < end))
        .map(|(_, c)| c)
        .collect();

    kept.replace(['-', '‒', '–', '—'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_extraction() {
        let parser = DescriptionParser::new();
        let parsed = parser.parse("Gurjan Plywood 18mm 8 X 4 feet");

        assert_eq!(parsed.thickness.as_deref(), Some("18mm"));
        assert_eq!(parsed.size.as_deref(), Some("8x4 feet"));
        assert_eq!(parsed.brand.as_deref(), Some("Gurjan"));
        assert_eq!(parsed.product_name, "Gurjan Plywood");
    }

    #[test]
    fn test_thickness_variants() {
        let parser = DescriptionParser::new();

        assert_eq!(parser.parse("12 mm MDF sheet").thickness.as_deref(), Some("12mm"));
        assert_eq!(parser.parse("MDF 6MM sheet").thickness.as_deref(), Some("6mm"));
        assert_eq!(parser.parse("12 mm MDF sheet").product_name, "MDF sheet");

        // First occurrence wins
        assert_eq!(parser.parse("18mm over 12mm").thickness.as_deref(), Some("18mm"));
    }

    #[test]
    fn test_size_variants() {
        let parser = DescriptionParser::new();

        assert_eq!(parser.parse("Board 6 x 3").size.as_deref(), Some("6x3"));
        assert_eq!(parser.parse("Board 4×8 Feet").size.as_deref(), Some("4x8 feet"));
        assert_eq!(parser.parse("Board 6 x 3").product_name, "Board");
    }

    #[test]
    fn test_no_patterns() {
        let parser = DescriptionParser::new();
        let parsed = parser.parse("  Teak veneer  sheet ");

        assert_eq!(parsed.thickness, None);
        assert_eq!(parsed.size, None);
        assert_eq!(parsed.brand, None);
        // Residual name is the cleaned-up description itself
        assert_eq!(parsed.product_name, "Teak veneer sheet");
    }

    #[test]
    fn test_hyphen_cleanup() {
        let parser = DescriptionParser::new();
        assert_eq!(
            parser.parse("Pre-laminated board").product_name,
            "Pre laminated board"
        );
    }

    #[test]
    fn test_brand_scan_order() {
        let parser = DescriptionParser::new()
            .with_brands(vec!["Alpha".to_string(), "Beta".to_string()]);

        // First lexicon entry found anywhere in the text wins
        let parsed = parser.parse("beta alpha board");
        assert_eq!(parsed.brand.as_deref(), Some("Alpha"));

        // Canonical casing comes from the lexicon, not the description
        let parsed = parser.parse("BETA board");
        assert_eq!(parsed.brand.as_deref(), Some("Beta"));
    }

    #[test]
    fn test_brand_not_stripped_from_name() {
        let parser = DescriptionParser::new();
        let parsed = parser.parse("Century Plywood 12mm");

        assert_eq!(parsed.brand.as_deref(), Some("Century"));
        assert_eq!(parsed.product_name, "Century Plywood");
    }
}
