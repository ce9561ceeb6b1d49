// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Keyword based category suggestions for free-text descriptions.

use crate::models::Category;

/// Lowercase keyword substrings per category, in priority order.
/// `Uncategorized` has no keywords and is never suggested.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::FoodDining,
        &[
            "coffee",
            "restaurant",
            "food",
            "lunch",
            "dinner",
            "breakfast",
            "pizza",
            "burger",
            "starbucks",
            "mcdonalds",
            "grocery",
            "supermarket",
        ],
    ),
    (
        Category::Transportation,
        &[
            "gas", "fuel", "uber", "lyft", "taxi", "bus", "train", "parking", "metro", "subway",
        ],
    ),
    (
        Category::Shopping,
        &[
            "amazon", "target", "walmart", "clothes", "clothing", "shoes", "shopping", "purchase",
        ],
    ),
    (
        Category::BillsUtilities,
        &[
            "electric",
            "electricity",
            "water",
            "internet",
            "phone",
            "rent",
            "mortgage",
            "insurance",
        ],
    ),
    (
        Category::Healthcare,
        &["doctor", "pharmacy", "medicine", "hospital", "dentist", "medical"],
    ),
    (
        Category::Education,
        &[
            "books",
            "tuition",
            "school",
            "university",
            "course",
            "textbook",
            "supplies",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie", "cinema", "netflix", "spotify", "game", "concert", "theater",
        ],
    ),
    (
        Category::PersonalCare,
        &["haircut", "salon", "cosmetics", "shampoo", "toothpaste", "soap"],
    ),
];

/// Suggest a category for `description`.
///
/// The first category in table order with a keyword contained in the
/// lowercased description wins. `None` means "keep the current selection".
pub fn suggest(description: &str) -> Option<Category> {
    let desc = description.to_lowercase();
    if desc.trim().is_empty() {
        return None;
    }
    let hit = CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| desc.contains(k)))
        .map(|(category, _)| *category);
    tracing::debug!(description, suggestion = ?hit, "classified description");
    hit
}

/// Keywords registered for `category`; empty for `Uncategorized`.
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, k)| *k)
        .unwrap_or(&[])
}
