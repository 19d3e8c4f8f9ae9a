//! Keyword classification of products into solids, beverages and water.

use crate::models::{Product, ProductType};

pub const BEVERAGE_KEYWORDS: [&str; 18] = [
    "beverages",
    "drink",
    "juice",
    "soda",
    "soft drink",
    "water",
    "milk",
    "tea",
    "coffee",
    "beer",
    "wine",
    "liquor",
    "alcohol",
    "energy drink",
    "sports drink",
    "carbonated",
    "non-alcoholic",
    "beverage",
];

pub const WATER_KEYWORDS: [&str; 4] = ["water", "mineral water", "spring water", "purified water"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Category first, then name and brand.
pub fn is_beverage(product: &Product) -> bool {
    let category = product.category.as_deref().unwrap_or("").to_lowercase();
    contains_any(&category, &BEVERAGE_KEYWORDS)
        || contains_any(&product.name_brand(), &BEVERAGE_KEYWORDS)
}

/// Name and brand only; the category is not consulted.
pub fn is_water(product: &Product) -> bool {
    contains_any(&product.name_brand(), &WATER_KEYWORDS)
}

pub fn product_type(product: &Product) -> ProductType {
    ProductType::from_beverage_flag(is_beverage(product))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, brand: &str, category: &str) -> Product {
        Product {
            name: Some(name.to_string()),
            brand: Some(brand.to_string()),
            category: (!category.is_empty()).then(|| category.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_marks_beverage() {
        assert!(is_beverage(&product("Sparkle", "Fizz Co", "Carbonated Drinks")));
        assert!(!is_beverage(&product("Oat Biscuits", "Crunch", "Snacks")));
    }

    #[test]
    fn test_name_marks_beverage() {
        assert!(is_beverage(&product("Mango Juice", "Sunny", "")));
        assert_eq!(product_type(&product("Green Tea", "Leaf", "")), ProductType::Beverage);
        assert_eq!(product_type(&product("Rice Cakes", "Puff", "")), ProductType::Solid);
    }

    #[test]
    fn test_water_uses_name_and_brand() {
        assert!(is_water(&product("Still", "Himalayan Spring Water", "")));
        assert!(!is_water(&product("Cola", "Fizz Co", "Waters")));
    }
}
