//! Product catalogue
//!
//! Serves the catalogue's fixed product list.

use uuid::Uuid;

use crate::domain::entities::{Product, ProductId};

pub struct ProductCatalogue {
    products: Vec<Product>,
}

impl ProductCatalogue {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for ProductCatalogue {
    fn default() -> Self {
        Self::new(vec![
            product(
                Uuid::from_u128(0xa396a088_172c_11ee_aa6f_4f6009552211),
                "Молоко, 3,2%, 1 литр",
                "Молоко с жирностью 3,2% в упаковке 1 литр",
            ),
            product(
                Uuid::from_u128(0xa396a088_172c_11ee_aa6f_4f6009552212),
                "Кефир, 3,2%, 0,5 литра",
                "Кефир с жирностью 3,2% в упаковке 0,5 литра",
            ),
        ])
    }
}

fn product(id: Uuid, title: &str, details: &str) -> Product {
    Product {
        id: ProductId(id),
        title: title.to_string(),
        details: details.to_string(),
    }
}
