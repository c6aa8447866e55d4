use serde::Serialize;

use crate::error::Result;

/// One pricing plan offered by a coding-assistant provider.
///
/// `price` and `completions` are already display-formatted ("Free",
/// "$20/month", "Unlimited") and are shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub provider: &'static str,
    pub plan: &'static str,
    pub price: &'static str,
    pub completions: &'static str,
}

/// The bundled catalog. Order here is display order.
#[rustfmt::skip]
pub static PRODUCTS: &[Product] = &[
    // Cursor
    Product { id: "1-free",     provider: "Cursor", plan: "Free",     price: "Free",      completions: "2000" },
    Product { id: "1-pro",      provider: "Cursor", plan: "Pro",      price: "$20/month", completions: "Unlimited" },
    Product { id: "1-business", provider: "Cursor", plan: "Business", price: "$40/month", completions: "Unlimited" },
];

/// All products, in catalog order. Same slice on every call.
pub fn get_products() -> &'static [Product] {
    PRODUCTS
}

pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// The catalog as a pretty-printed JSON array.
pub fn products_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(get_products())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn product_ids_are_unique() {
        let mut seen = HashSet::new();
        for p in get_products() {
            assert!(seen.insert(p.id), "duplicate product id: {}", p.id);
        }
    }

    #[test]
    fn products_have_display_fields() {
        for p in get_products() {
            assert!(!p.provider.is_empty(), "{}: provider is empty", p.id);
            assert!(!p.plan.is_empty(), "{}: plan is empty", p.id);
            assert!(!p.price.is_empty(), "{}: price is empty", p.id);
            assert!(!p.completions.is_empty(), "{}: completions is empty", p.id);
        }
    }

    #[test]
    fn get_products_returns_the_same_slice() {
        let a = get_products();
        let b = get_products();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a[0].id, "1-free");
        assert_eq!(a[2].id, "1-business");
    }

    #[test]
    fn find_product_by_id() {
        let p = find_product("1-pro").expect("1-pro missing");
        assert_eq!(p.price, "$20/month");
        assert!(find_product("nope").is_none());
    }

    #[test]
    fn json_keeps_catalog_order() {
        let json = products_json().unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0]["id"], "1-free");
        assert_eq!(parsed[1]["price"], "$20/month");
    }
}
