pub mod persistence;
pub mod report;

pub use persistence::{load_keywords, load_product, load_products, load_profile, save_profile};
pub use report::write_csv;
