//! Event categories and their display treatment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category from the fixed palette shown in the category picker.
///
/// Labels outside the palette (older feeds carry e.g. "College Events")
/// are kept as `Other` so they still filter and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    FoodAndDrinks,
    MusicAndConcerts,
    Nightlife,
    Community,
    ArtsAndCulture,
    Markets,
    Sports,
    Comedy,
    Theater,
    FamilyFun,
    Workshops,
    Charity,
    Other(String),
}

/// Icon and accent color used when rendering a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Symbol name (SF Symbols naming)
    pub icon: &'static str,
    /// Hex RGB without the leading '#'
    pub color: &'static str,
}

impl Category {
    /// The palette, in the order the post form lists it.
    pub const ALL: [Category; 12] = [
        Category::FoodAndDrinks,
        Category::MusicAndConcerts,
        Category::Nightlife,
        Category::Community,
        Category::ArtsAndCulture,
        Category::Markets,
        Category::Sports,
        Category::Comedy,
        Category::Theater,
        Category::FamilyFun,
        Category::Workshops,
        Category::Charity,
    ];

    pub fn label(&self) -> &str {
        match self {
            Category::FoodAndDrinks => "Food & Drinks",
            Category::MusicAndConcerts => "Music & Concerts",
            Category::Nightlife => "Nightlife",
            Category::Community => "Community",
            Category::ArtsAndCulture => "Arts & Culture",
            Category::Markets => "Markets",
            Category::Sports => "Sports",
            Category::Comedy => "Comedy",
            Category::Theater => "Theater",
            Category::FamilyFun => "Family Fun",
            Category::Workshops => "Workshops",
            Category::Charity => "Charity",
            Category::Other(label) => label,
        }
    }

    /// Exact match on the display label. Never fails.
    pub fn from_label(label: &str) -> Self {
        Category::ALL
            .iter()
            .find(|c| c.label() == label)
            .cloned()
            .unwrap_or_else(|| Category::Other(label.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    pub fn style(&self) -> CategoryStyle {
        let (icon, color) = match self {
            Category::ArtsAndCulture => ("paintpalette.fill", "FF4500"),
            Category::Charity => ("hand.raised.fill", "9370DB"),
            Category::Comedy => ("face.smiling.fill", "FFD700"),
            Category::Community => ("person.3.fill", "20B2AA"),
            Category::FamilyFun => ("figure.2.and.child", "00CED1"),
            Category::FoodAndDrinks => ("fork.knife", "FF8C00"),
            Category::Markets => ("leaf.fill", "32CD32"),
            Category::MusicAndConcerts => ("music.note.list", "8A2BE2"),
            Category::Nightlife => ("moon.stars.fill", "191970"),
            Category::Sports => ("figure.run", "4169E1"),
            Category::Theater => ("theatermasks.fill", "DC143C"),
            Category::Workshops => ("hammer.fill", "D2691E"),
            Category::Other(_) => ("tag.fill", "007AFF"),
        };
        CategoryStyle { icon, color }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
