//! Merchant category: closed set of 14, one-hot encoded in canonical order.

pub const CATEGORY_COUNT: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Entertainment,
    FoodDining,
    GasTransport,
    GroceryNet,
    GroceryPos,
    HealthFitness,
    Home,
    KidsPets,
    MiscNet,
    MiscPos,
    PersonalCare,
    ShoppingNet,
    ShoppingPos,
    Travel,
}

impl Category {
    /// Canonical order. Must match the column order the model was trained on.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Entertainment,
        Category::FoodDining,
        Category::GasTransport,
        Category::GroceryNet,
        Category::GroceryPos,
        Category::HealthFitness,
        Category::Home,
        Category::KidsPets,
        Category::MiscNet,
        Category::MiscPos,
        Category::PersonalCare,
        Category::ShoppingNet,
        Category::ShoppingPos,
        Category::Travel,
    ];

    /// Identifier as sent by clients, e.g. `category_food_dining`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Entertainment => "category_entertainment",
            Category::FoodDining => "category_food_dining",
            Category::GasTransport => "category_gas_transport",
            Category::GroceryNet => "category_grocery_net",
            Category::GroceryPos => "category_grocery_pos",
            Category::HealthFitness => "category_health_fitness",
            Category::Home => "category_home",
            Category::KidsPets => "category_kids_pets",
            Category::MiscNet => "category_misc_net",
            Category::MiscPos => "category_misc_pos",
            Category::PersonalCare => "category_personal_care",
            Category::ShoppingNet => "category_shopping_net",
            Category::ShoppingPos => "category_shopping_pos",
            Category::Travel => "category_travel",
        }
    }

    /// Exact, case-sensitive match against the wire identifiers.
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Position within the one-hot block.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-hot block for an optional category; `None` yields all zeros.
    pub fn one_hot(category: Option<Category>) -> [f32; CATEGORY_COUNT] {
        let mut out = [0.0f32; CATEGORY_COUNT];
        if let Some(c) = category {
            out[c.index()] = 1.0;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_canonical_order() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
            assert_eq!(Category::from_wire(c.as_str()), Some(*c));
        }
        assert_eq!(Category::Travel.index(), CATEGORY_COUNT - 1);
    }

    #[test]
    fn unknown_and_case_mismatch() {
        assert_eq!(Category::from_wire("category_crypto"), None);
        assert_eq!(Category::from_wire("CATEGORY_TRAVEL"), None);
        assert_eq!(Category::from_wire("travel"), None);
        assert_eq!(Category::from_wire(""), None);
    }

    #[test]
    fn one_hot_sets_single_flag() {
        for c in Category::ALL {
            let block = Category::one_hot(Some(c));
            assert_eq!(block.iter().filter(|v| **v == 1.0).count(), 1);
            assert_eq!(block[c.index()], 1.0);
        }
        assert!(Category::one_hot(None).iter().all(|v| *v == 0.0));
    }
}
