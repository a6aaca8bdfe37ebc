//! Demo catalog loaded into a fresh storage at startup

use crate::core::WellnessStorage;
use crate::entities::{
    InsertProduct, InsertProductCategory, InsertResearchArticle, InsertSubDimension,
    InsertWellnessDimension,
};
use anyhow::Result;

struct DimensionSeed {
    name: &'static str,
    description: &'static str,
    icon_name: &'static str,
    color_hex: &'static str,
    sub_dimensions: &'static [(&'static str, &'static str)],
}

const DIMENSIONS: &[DimensionSeed] = &[
    DimensionSeed {
        name: "Physical",
        description: "Movement, nutrition, sleep and the body's overall condition",
        icon_name: "activity",
        color_hex: "#4CAF50",
        sub_dimensions: &[
            ("Fitness", "Regular exercise and physical activity"),
            ("Nutrition", "Balanced and mindful eating"),
            ("Sleep", "Restful and consistent sleep"),
        ],
    },
    DimensionSeed {
        name: "Mental",
        description: "Learning, focus and cognitive resilience",
        icon_name: "brain",
        color_hex: "#2196F3",
        sub_dimensions: &[
            ("Focus", "Sustained attention on meaningful work"),
            ("Learning", "Curiosity and continued growth"),
        ],
    },
    DimensionSeed {
        name: "Emotional",
        description: "Awareness and healthy expression of feelings",
        icon_name: "heart",
        color_hex: "#E91E63",
        sub_dimensions: &[
            ("Stress management", "Coping with pressure in healthy ways"),
            ("Self-awareness", "Recognizing and naming emotions"),
        ],
    },
    DimensionSeed {
        name: "Social",
        description: "Connection with family, friends and community",
        icon_name: "users",
        color_hex: "#FF9800",
        sub_dimensions: &[
            ("Relationships", "Close and supportive bonds"),
            ("Community", "Belonging and contribution"),
        ],
    },
    DimensionSeed {
        name: "Spiritual",
        description: "Purpose, values and meaning",
        icon_name: "sun",
        color_hex: "#9C27B0",
        sub_dimensions: &[
            ("Mindfulness", "Present-moment awareness"),
            ("Purpose", "Living according to personal values"),
        ],
    },
    DimensionSeed {
        name: "Environmental",
        description: "Healthy surroundings and sustainable habits",
        icon_name: "leaf",
        color_hex: "#009688",
        sub_dimensions: &[
            ("Nature", "Time spent outdoors"),
            ("Living space", "An organized and calming home"),
        ],
    },
];

/// Seed dimensions, sub-dimensions, a small product catalog and research
/// articles
///
/// Intended for a freshly created storage; running it twice duplicates the
/// catalog.
pub async fn seed_demo_data(storage: &dyn WellnessStorage) -> Result<()> {
    let mut dimension_ids = Vec::with_capacity(DIMENSIONS.len());

    for (order, seed) in (1..).zip(DIMENSIONS) {
        let dimension = storage
            .create_wellness_dimension(InsertWellnessDimension {
                name: seed.name.to_string(),
                description: Some(seed.description.to_string()),
                icon_name: Some(seed.icon_name.to_string()),
                color_hex: Some(seed.color_hex.to_string()),
                order,
            })
            .await?;

        for (name, description) in seed.sub_dimensions {
            storage
                .create_sub_dimension(InsertSubDimension {
                    dimension_id: dimension.id,
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    icon_name: None,
                })
                .await?;
        }

        dimension_ids.push(dimension.id);
    }

    let physical = dimension_ids[0];
    let mental = dimension_ids[1];
    let spiritual = dimension_ids[4];

    let fitness = storage
        .create_product_category(InsertProductCategory {
            name: "Fitness gear".to_string(),
            dimension_id: Some(physical),
            description: Some("Equipment for training at home".to_string()),
            color_name: Some("green".to_string()),
        })
        .await?;
    let books = storage
        .create_product_category(InsertProductCategory {
            name: "Books".to_string(),
            dimension_id: Some(mental),
            description: Some("Reading for a sharper mind".to_string()),
            color_name: Some("blue".to_string()),
        })
        .await?;
    let meditation = storage
        .create_product_category(InsertProductCategory {
            name: "Meditation".to_string(),
            dimension_id: Some(spiritual),
            description: Some("Tools for a calmer practice".to_string()),
            color_name: Some("purple".to_string()),
        })
        .await?;

    let products = [
        ("Yoga mat", "Non-slip mat for daily practice", 3499, fitness.id, 5, 128),
        ("Resistance bands", "Set of five bands", 1999, fitness.id, 4, 86),
        ("Deep work", "Rules for focused success", 1599, books.id, 5, 240),
        ("Sleep journal", "Track habits and rest", 1299, books.id, 3, 17),
        ("Meditation cushion", "Buckwheat-filled zafu", 4999, meditation.id, 4, 54),
    ];
    for (name, description, price, category_id, rating, review_count) in products {
        storage
            .create_product(InsertProduct {
                name: name.to_string(),
                description: description.to_string(),
                price,
                category_id,
                image_url: None,
                rating: Some(rating),
                review_count: Some(review_count),
            })
            .await?;
    }

    let articles = [
        (
            "Exercise and longevity",
            "Moderate daily activity is associated with lower all-cause mortality.",
            "Smith, J.; Lee, K.",
            "Journal of Physical Health",
            physical,
        ),
        (
            "Attention restoration in natural settings",
            "Short walks in green spaces improve performance on attention tasks.",
            "Kaplan, S.",
            "Environmental Psychology Review",
            dimension_ids[5],
        ),
        (
            "Mindfulness and stress reactivity",
            "An eight-week mindfulness program reduced perceived stress.",
            "Garcia, M.; Chen, L.",
            "Mindfulness Research",
            spiritual,
        ),
        (
            "Social ties and wellbeing",
            "Frequent contact with close friends predicts higher life satisfaction.",
            "Okafor, A.",
            "Social Science Quarterly",
            dimension_ids[3],
        ),
    ];
    for (title, summary, authors, journal, dimension_id) in articles {
        storage
            .create_research_article(InsertResearchArticle {
                title: title.to_string(),
                summary: summary.to_string(),
                authors: authors.to_string(),
                journal: Some(journal.to_string()),
                publication_date: None,
                dimension_id: Some(dimension_id),
                image_url: None,
                content_url: None,
            })
            .await?;
    }

    tracing::info!(
        dimensions = dimension_ids.len(),
        products = products.len(),
        articles = articles.len(),
        "demo data seeded"
    );

    Ok(())
}
