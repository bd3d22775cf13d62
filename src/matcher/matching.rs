use std::cmp::Ordering;
use tracing::{debug, trace};

use super::parser::DescriptionParser;
use super::similarity::similarity;
use super::types::{
    AnnotatedLineItem, CatalogProduct, LineItem, MatchAnnotation, MatchResult, ParsedLineItem,
};
use super::TARGET_MATCHER;

// Field weights. Deliberately not normalized: a strong match across every
// dimension can sum past 100 before the final clamp, and renormalizing
// would change relative rankings.
const NAME_WEIGHT: f64 = 0.5;
const THICKNESS_WEIGHT: f64 = 0.25;
const SIZE_WEIGHT: f64 = 0.15;
const BRAND_WEIGHT: f64 = 0.10;
const UNIT_BONUS: f64 = 5.0;

// Keyword-overlap bonus tops out at this many points
const KEYWORD_BONUS_SCALE: f64 = 25.0;

// Per-field gates: a dimension only contributes above its gate
const NAME_GATE: f64 = 25.0;
const THICKNESS_GATE: f64 = 70.0;
const SIZE_GATE: f64 = 60.0;
const BRAND_GATE: f64 = 60.0;
const UNIT_GATE: f64 = 70.0;

// A pair enters the ranked list only above this total
const RESULT_FLOOR: f64 = 25.0;

// Document auto-match accepts a best match only above this total.
// Looser list inclusion feeds manual review; this stricter floor gates
// auto-acceptance.
const ACCEPT_FLOOR: f64 = 30.0;

/// Gate and floor overrides for the matcher. Defaults reproduce the
/// stock production thresholds.
#[derive(Debug, Clone)]
pub struct MatcherThresholds {
    pub name_gate: f64,
    pub thickness_gate: f64,
    pub size_gate: f64,
    pub brand_gate: f64,
    pub unit_gate: f64,
    pub result_floor: f64,
    pub accept_floor: f64,
}

impl Default for MatcherThresholds {
    fn default() -> Self {
        Self {
            name_gate: NAME_GATE,
            thickness_gate: THICKNESS_GATE,
            size_gate: SIZE_GATE,
            brand_gate: BRAND_GATE,
            unit_gate: UNIT_GATE,
            result_floor: RESULT_FLOOR,
            accept_floor: ACCEPT_FLOOR,
        }
    }
}

/// Scores free-text BOQ line items against catalog products.
///
/// Pure and synchronous: no I/O, no shared state, safe to call from
/// multiple threads. Callers supply the full candidate catalog per call.
pub struct ProductMatcher {
    parser: DescriptionParser,
    thresholds: MatcherThresholds,
}

impl Default for ProductMatcher {
    fn default() -> Self {
        Self {
            parser: DescriptionParser::new(),
            thresholds: MatcherThresholds::default(),
        }
    }
}

impl ProductMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(mut self, parser: DescriptionParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.parser = DescriptionParser::new().with_brands(brands);
        self
    }

    pub fn with_thresholds(mut self, thresholds: MatcherThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Score one line item against one catalog product.
    ///
    /// Returns `None` unless at least one field contributed and the
    /// weighted total clears the result floor. The emitted confidence is
    /// clamped to 100.
    pub fn score_pair(&self, item: &LineItem, product: &CatalogProduct) -> Option<MatchResult> {
        let parsed = self.effective_fields(item);

        let mut total = 0.0;
        let mut match_count = 0usize;
        let mut matched_fields = Vec::new();

        // Name, scored against both product name and category, plus a
        // token-overlap bonus against the product name
        let candidate = if parsed.product_name.trim().is_empty() {
            item.description.as_str()
        } else {
            parsed.product_name.as_str()
        };

        let name_score = similarity(candidate, &product.name)
            .max(similarity(candidate, &product.category));
        let name_confidence = name_score + keyword_overlap_bonus(candidate, &product.name);

        if name_confidence > self.thresholds.name_gate {
            total += name_confidence * NAME_WEIGHT;
            match_count += 1;
            matched_fields.push(format!("Name: {}%", name_confidence.round() as i64));
        }

        // Thickness
        if let (Some(item_thickness), Some(product_thickness)) =
            (parsed.thickness.as_deref(), product.thickness.as_deref())
        {
            let score = similarity(item_thickness, product_thickness);
            if score > self.thresholds.thickness_gate {
                total += score * THICKNESS_WEIGHT;
                match_count += 1;
                matched_fields.push(format!("Thickness: {}%", score.round() as i64));
            }
        }

        // Size
        if let (Some(item_size), Some(product_size)) =
            (parsed.size.as_deref(), product.size.as_deref())
        {
            let score = similarity(item_size, product_size);
            if score > self.thresholds.size_gate {
                total += score * SIZE_WEIGHT;
                match_count += 1;
                matched_fields.push(format!("Size: {}%", score.round() as i64));
            }
        }

        // Brand
        if let (Some(item_brand), Some(product_brand)) =
            (parsed.brand.as_deref(), product.brand.as_deref())
        {
            let score = similarity(item_brand, product_brand);
            if score > self.thresholds.brand_gate {
                total += score * BRAND_WEIGHT;
                match_count += 1;
                matched_fields.push(format!("Brand: {}%", score.round() as i64));
            }
        }

        // Unit agreement adds a flat bonus without counting as a matched
        // field on its own
        let unit_score = similarity(&item.unit, product.unit.as_deref().unwrap_or(""));
        if unit_score > self.thresholds.unit_gate {
            total += UNIT_BONUS;
            matched_fields.push(format!("Unit: {}%", unit_score.round() as i64));
        }

        if match_count == 0 || total <= self.thresholds.result_floor {
            trace!(
                target: TARGET_MATCHER,
                "Rejected '{}' vs '{}': total={:.1}, matched fields={}",
                item.description, product.name, total, match_count
            );
            return None;
        }

        debug!(
            target: TARGET_MATCHER,
            "Scored '{}' vs '{}': total={:.1}, fields={:?}",
            item.description, product.name, total, matched_fields
        );

        Some(MatchResult {
            product_id: product.id.clone(),
            confidence: total.min(100.0),
            matched_fields,
        })
    }

    /// Rank a line item against the whole catalog: every qualifying pair,
    /// sorted descending by confidence. The sort is stable, so equal
    /// confidences keep catalog order.
    pub fn rank(&self, item: &LineItem, catalog: &[CatalogProduct]) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = catalog
            .iter()
            .filter_map(|product| self.score_pair(item, product))
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });

        debug!(
            target: TARGET_MATCHER,
            "Ranked '{}' against {} products: {} qualified",
            item.description,
            catalog.len(),
            results.len()
        );

        results
    }

    /// Best qualifying match for a line item, if any.
    pub fn best_match(&self, item: &LineItem, catalog: &[CatalogProduct]) -> Option<MatchResult> {
        self.rank(item, catalog).into_iter().next()
    }

    /// Annotate every line item of a document with its best match, when
    /// that match clears the acceptance floor. Output is 1:1 with input,
    /// order preserved; items below the floor stay unannotated even when
    /// they have a weak best match.
    pub fn auto_match(
        &self,
        items: &[LineItem],
        catalog: &[CatalogProduct],
    ) -> Vec<AnnotatedLineItem> {
        items
            .iter()
            .map(|item| {
                let annotation = self
                    .best_match(item, catalog)
                    .filter(|best| best.confidence > self.thresholds.accept_floor)
                    .map(|best| MatchAnnotation {
                        product_id: best.product_id,
                        confidence: best.confidence,
                        matched_fields: best.matched_fields,
                    });

                match &annotation {
                    Some(matched) => debug!(
                        target: TARGET_MATCHER,
                        "Auto-matched '{}' to product {} at {:.1}%",
                        item.description, matched.product_id, matched.confidence
                    ),
                    None => debug!(
                        target: TARGET_MATCHER,
                        "No auto-match for '{}'", item.description
                    ),
                }

                AnnotatedLineItem {
                    item: item.clone(),
                    annotation,
                }
            })
            .collect()
    }

    /// Use the item's own parsed fields when any are present, otherwise
    /// derive them from the description on the fly.
    fn effective_fields(&self, item: &LineItem) -> ParsedLineItem {
        let has_parsed = [&item.product_name, &item.thickness, &item.size]
            .iter()
            .any(|field| field.as_deref().is_some_and(|s| !s.trim().is_empty()));

        if has_parsed {
            ParsedLineItem {
                product_name: item.product_name.clone().unwrap_or_default(),
                thickness: item.thickness.clone(),
                size: item.size.clone(),
                brand: item.brand.clone(),
            }
        } else {
            self.parser.parse(&item.description)
        }
    }
}

/// Fraction of candidate tokens that overlap product-name tokens, scaled
/// to up to 25 points. A token counts as matched when it contains, or is
/// contained in, any product-name token.
fn keyword_overlap_bonus(candidate: &str, product_name: &str) -> f64 {
    let candidate_tokens: Vec<String> = candidate
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if candidate_tokens.is_empty() {
        return 0.0;
    }

    let name_tokens: Vec<String> = product_name
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let matched = candidate_tokens
        .iter()
        .filter(|token| {
            name_tokens
                .iter()
                .any(|name_token| name_token.contains(*token) || token.contains(name_token))
        })
        .count();

    matched as f64 / candidate_tokens.len() as f64 * KEYWORD_BONUS_SCALE
}
