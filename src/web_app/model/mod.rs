// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON records returned by the demo store API and
// are used for type-safe communication between frontend and backend.
// Every nested structure defaults when absent so a sparse record renders
// as blank fields instead of failing deserialization.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sentinel category value meaning "no category filtering"
pub const ALL_CATEGORIES: &str = "all";

/// Product rating (rate in [0,5] plus review count)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u32,
}

/// Product record (matches the `/products` JSON shape)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Case-insensitive substring match against title and description
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }

    /// Category equality filter; the "all" sentinel retains everything
    pub fn in_category(&self, filter: &str) -> bool {
        filter == ALL_CATEGORIES || self.category == filter
    }
}

/// Sort keys offered on the products screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductSort {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Rating,
}

impl ProductSort {
    /// Stable value used in the sort `<select>` options
    pub fn as_str(self) -> &'static str {
        match self {
            ProductSort::Name => "name",
            ProductSort::PriceLow => "price_low",
            ProductSort::PriceHigh => "price_high",
            ProductSort::Rating => "rating",
        }
    }

    /// Parse a `<select>` value back into a sort key
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "name" => Some(ProductSort::Name),
            "price_low" => Some(ProductSort::PriceLow),
            "price_high" => Some(ProductSort::PriceHigh),
            "rating" => Some(ProductSort::Rating),
            _ => None,
        }
    }

    /// Comparator for this sort key
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSort::Name => a.title.cmp(&b.title),
            ProductSort::PriceLow => a.price.total_cmp(&b.price),
            ProductSort::PriceHigh => b.price.total_cmp(&a.price),
            ProductSort::Rating => b.rating.rate.total_cmp(&a.rating.rate),
        }
    }
}

impl std::fmt::Display for ProductSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSort::Name => write!(f, "Name (A-Z)"),
            ProductSort::PriceLow => write!(f, "Price (Low to High)"),
            ProductSort::PriceHigh => write!(f, "Price (High to Low)"),
            ProductSort::Rating => write!(f, "Rating"),
        }
    }
}

/// User name parts
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

/// Postal address
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub zipcode: String,
}

/// User record (matches the `/users` JSON shape)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub address: Address,
}

impl User {
    /// "firstname lastname" for display and searching
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.firstname, self.name.lastname)
            .trim()
            .to_string()
    }

    /// Avatar initials, empty when the name parts are missing
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        initials.extend(self.name.firstname.chars().next());
        initials.extend(self.name.lastname.chars().next());
        initials.to_uppercase()
    }

    /// Case-insensitive substring match against full name and email
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.full_name().to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
    }
}

/// Writable product fields submitted by the add/edit forms
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
}

/// Writable user fields submitted by the add/edit forms
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, description: &str, category: &str) -> Product {
        Product {
            id: 1,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_product_sort_default() {
        assert_eq!(ProductSort::default(), ProductSort::Name);
    }

    #[test]
    fn test_product_sort_round_trip() {
        for sort in [
            ProductSort::Name,
            ProductSort::PriceLow,
            ProductSort::PriceHigh,
            ProductSort::Rating,
        ] {
            assert_eq!(ProductSort::from_str(sort.as_str()), Some(sort));
        }
        assert_eq!(ProductSort::from_str("bogus"), None);
    }

    #[test]
    fn test_product_sort_display() {
        assert_eq!(ProductSort::Name.to_string(), "Name (A-Z)");
        assert_eq!(ProductSort::PriceLow.to_string(), "Price (Low to High)");
        assert_eq!(ProductSort::PriceHigh.to_string(), "Price (High to Low)");
        assert_eq!(ProductSort::Rating.to_string(), "Rating");
    }

    #[test]
    fn test_product_search_is_case_insensitive() {
        let shirt = product("Cotton Shirt", "A comfy shirt", "men's clothing");
        assert!(shirt.matches_search("SHIRT"));
        assert!(shirt.matches_search("comfy"));
        assert!(!shirt.matches_search("backpack"));
    }

    #[test]
    fn test_product_empty_search_matches_everything() {
        let shirt = product("Cotton Shirt", "A comfy shirt", "men's clothing");
        assert!(shirt.matches_search(""));
    }

    #[test]
    fn test_product_category_filter_sentinel() {
        let shirt = product("Cotton Shirt", "A comfy shirt", "men's clothing");
        assert!(shirt.in_category(ALL_CATEGORIES));
        assert!(shirt.in_category("men's clothing"));
        assert!(!shirt.in_category("jewelery"));
    }

    #[test]
    fn test_product_deserializes_without_rating() {
        let json = r#"{"id":7,"title":"Lamp","price":12.5,"description":"desk lamp","category":"home","image":""}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, Rating::default());
        assert_eq!(product.price, 12.5);
    }

    #[test]
    fn test_user_full_name_and_initials() {
        let user = User {
            id: 1,
            name: Name {
                firstname: "john".to_string(),
                lastname: "doe".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(user.full_name(), "john doe");
        assert_eq!(user.initials(), "JD");
    }

    #[test]
    fn test_user_missing_name_degrades_to_empty() {
        let json = r#"{"id":3,"email":"kevin@gmail.com","username":"kevinryan","phone":"1-567-094-1345"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name(), "");
        assert_eq!(user.initials(), "");
        assert_eq!(user.address, Address::default());
    }

    #[test]
    fn test_user_search_matches_name_or_email() {
        let user = User {
            id: 1,
            email: "john@gmail.com".to_string(),
            name: Name {
                firstname: "John".to_string(),
                lastname: "David".to_string(),
            },
            ..Default::default()
        };
        assert!(user.matches_search("david"));
        assert!(user.matches_search("GMAIL"));
        assert!(!user.matches_search("kevin"));
    }

    #[test]
    fn test_product_draft_serializes_price_as_number() {
        let draft = ProductDraft {
            title: "Lamp".to_string(),
            price: 12.5,
            description: "desk lamp".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["price"].is_number());
        assert_eq!(json["title"], "Lamp");
    }

    #[test]
    fn test_user_draft_round_trip() {
        let draft = UserDraft {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        let back: UserDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
