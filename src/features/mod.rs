//! Transaction feature assembly for the fraud classifier.

mod assembler;
mod category;

pub use assembler::{FeatureAssembler, TransactionRecord};
pub use category::{Category, CATEGORY_COUNT};

/// Numeric fields ahead of the one-hot block.
pub const NUMERIC_FEATURES: usize = 4;

/// Length of every vector handed to the model.
pub const FEATURE_DIM: usize = NUMERIC_FEATURES + CATEGORY_COUNT;

/// Column names in model order, for diagnostics.
pub const FEATURE_NAMES: [&str; FEATURE_DIM] = [
    "amt",
    "city_pop",
    "hour",
    "distance_km",
    "category_entertainment",
    "category_food_dining",
    "category_gas_transport",
    "category_grocery_net",
    "category_grocery_pos",
    "category_health_fitness",
    "category_home",
    "category_kids_pets",
    "category_misc_net",
    "category_misc_pos",
    "category_personal_care",
    "category_shopping_net",
    "category_shopping_pos",
    "category_travel",
];

/// Fixed-order model input: `[amt, city_pop, hour, distance_km, <14 category flags>]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub values: Vec<f32>,
}

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn category_flags(&self) -> &[f32] {
        &self.values[NUMERIC_FEATURES.min(self.values.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_line_up_with_categories() {
        for c in Category::ALL {
            assert_eq!(FEATURE_NAMES[NUMERIC_FEATURES + c.index()], c.as_str());
        }
    }

    #[test]
    fn every_category_yields_full_vector() {
        for c in Category::ALL {
            let payload = serde_json::json!({
                "amt": 1, "city_pop": 1, "hour": 1, "distance_km": 1,
                "category": c.as_str()
            });
            let fv = FeatureAssembler::new().assemble(&payload).unwrap();
            assert_eq!(fv.len(), FEATURE_DIM);
            assert_eq!(fv.category_flags().iter().sum::<f32>(), 1.0);
        }
    }
}
