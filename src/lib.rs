pub mod logging;
pub mod matcher;

pub use matcher::matching::{MatcherThresholds, ProductMatcher};
pub use matcher::parser::DescriptionParser;
pub use matcher::similarity::similarity;
pub use matcher::types::{
    AnnotatedLineItem, CatalogProduct, LineItem, MatchAnnotation, MatchResult, ParsedLineItem,
};
