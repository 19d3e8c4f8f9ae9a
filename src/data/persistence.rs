use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Product, UserProfile};
use crate::personalize::KeywordTables;

/// Load a single product record from a JSON file.
pub fn load_product<P: AsRef<Path>>(path: P) -> Result<Product> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a JSON array of products.
///
/// Products sharing a barcode are deduplicated (last occurrence wins,
/// keeping the position of the first). Products without a barcode are
/// all kept.
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&content)?;

    let mut deduped: Vec<Product> = Vec::with_capacity(products.len());
    let mut index_by_barcode: HashMap<String, usize> = HashMap::new();
    for product in products {
        match product.barcode.clone() {
            Some(barcode) => match index_by_barcode.get(&barcode) {
                Some(&i) => deduped[i] = product,
                None => {
                    index_by_barcode.insert(barcode, deduped.len());
                    deduped.push(product);
                }
            },
            None => deduped.push(product),
        }
    }

    Ok(deduped)
}

pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load keyword tables; tables missing from the file keep their defaults.
pub fn load_keywords<P: AsRef<Path>>(path: P) -> Result<KeywordTables> {
    let content = fs::read_to_string(path)?;
    let tables: KeywordTables = serde_json::from_str(&content)?;
    Ok(tables.normalized())
}
