//! The normalizer: raw record → fully-defaulted report model.

use serde::Serialize;
use stitchwise_common::record::{keys, truthy, RawAnalysisRecord};

use crate::band::{score_description, RatingBand};
use crate::links::parse_related_links;

pub const DEFAULT_BRAND: &str = "This brand";

/// The five free-text cards, each with its own literal fallback.
const TEXT_CARDS: &[(&str, &str, &str)] = &[
    (keys::MATERIAL_COMPOSITION, "Material Composition", "Unknown"),
    (keys::MANUFACTURING_COUNTRY, "Manufacturing Country", "Not Disclosed"),
    (keys::SUSTAINABILITY_PRACTICES, "Sustainability Practices", "Unknown"),
    (keys::LABOR_CONDITIONS, "Labor Conditions", "No Data Available"),
    (keys::TRANSPARENCY_LEVEL, "Transparency Level", "Not Specified"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoCard {
    pub label: &'static str,
    pub value: String,
}

/// Everything the report view renders. Derived, immutable, recomputed from
/// the record on every render — never cached, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct EthicsReport {
    pub rating: f64,
    pub band: RatingBand,
    pub brand: String,
    pub product_name: Option<String>,
    pub description: String,
    pub cards: Vec<InfoCard>,
    pub uses_animal_materials: bool,
    pub links: Vec<String>,
}

/// Normalize a raw record. Total over any record: every missing, falsy, or
/// wrongly-typed field resolves to its documented default, so an empty
/// record yields the all-default Poor report rather than an error.
pub fn normalize(record: &RawAnalysisRecord) -> EthicsReport {
    let rating = record.number(keys::OVERALL_ETHICAL_RATING).unwrap_or(0.0);
    let brand = nonempty_text(record, keys::BRAND)
        .unwrap_or(DEFAULT_BRAND)
        .to_string();

    let cards = TEXT_CARDS
        .iter()
        .map(|&(key, label, fallback)| InfoCard {
            label,
            value: nonempty_text(record, key).unwrap_or(fallback).to_string(),
        })
        .collect();

    // Falsy values (absent, 0, "", false, null) read as the no-animal
    // default; everything else, including "0" and negative numbers, counts
    // as using animal materials.
    let uses_animal_materials = record
        .get(keys::ANIMAL_MATERIALS)
        .map(truthy)
        .unwrap_or(false);

    let links = record
        .text(keys::RELATED_LINKS)
        .map(parse_related_links)
        .unwrap_or_default();

    EthicsReport {
        rating,
        band: RatingBand::for_rating(rating),
        description: score_description(rating, &brand),
        brand,
        product_name: nonempty_text(record, keys::PRODUCT_NAME).map(String::from),
        cards,
        uses_animal_materials,
        links,
    }
}

fn nonempty_text<'a>(record: &'a RawAnalysisRecord, key: &str) -> Option<&'a str> {
    record.text(key).filter(|s| !s.is_empty())
}
