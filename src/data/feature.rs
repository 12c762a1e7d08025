// feature.rs - Feature categories and classified gene hits

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Fixed, ordered taxonomy of feature categories.
/// Declaration order is the classification priority and the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeatureCategory {
    Amr,
    Virulence,
    Metal,
    Biocide,
    Acid,
    Heat,
    Other,
}

impl FeatureCategory {
    /// All categories in priority order
    pub const ALL: [FeatureCategory; 7] = [
        FeatureCategory::Amr,
        FeatureCategory::Virulence,
        FeatureCategory::Metal,
        FeatureCategory::Biocide,
        FeatureCategory::Acid,
        FeatureCategory::Heat,
        FeatureCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureCategory::Amr => "AMR",
            FeatureCategory::Virulence => "VIRULENCE",
            FeatureCategory::Metal => "METAL",
            FeatureCategory::Biocide => "BIOCIDE",
            FeatureCategory::Acid => "ACID",
            FeatureCategory::Heat => "HEAT",
            FeatureCategory::Other => "OTHER",
        }
    }

    /// Classify an element-type annotation.
    /// Case-insensitive containment test in priority order; first hit wins,
    /// anything unmatched is `Other`.
    pub fn classify(annotation: &str) -> Self {
        let upper = annotation.to_uppercase();
        Self::ALL[..Self::ALL.len() - 1]
            .iter()
            .copied()
            .find(|category| upper.contains(category.as_str()))
            .unwrap_or(FeatureCategory::Other)
    }
}

impl Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified gene/feature hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub gene: String,
    pub category: FeatureCategory,
    pub subclass: String,
}

impl FeatureRecord {
    pub fn new(gene: &str, element_type: &str, subclass: &str) -> Self {
        Self {
            gene: gene.to_string(),
            category: FeatureCategory::classify(element_type),
            subclass: subclass.to_string(),
        }
    }

    /// Display string used for deduplication: `gene (subclass)`
    pub fn display(&self) -> String {
        format!("{} ({})", self.gene, self.subclass)
    }
}
