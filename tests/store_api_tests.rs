// tests/store_api_tests.rs - Tests for the store API boundary
//
// No network: these cover URL construction, error classification and
// display, and decoding of captured demo-API payloads.

use store_admin::web_app::api::client::{endpoint_url, DEFAULT_BASE_URL};
use store_admin::web_app::api::{StoreApiError, StoreClient};
use store_admin::web_app::model::{Product, User};

#[test]
fn test_every_consumed_endpoint_builds_correctly() {
    let base = DEFAULT_BASE_URL;
    assert_eq!(
        endpoint_url(base, "/products"),
        "https://fakestoreapi.com/products"
    );
    assert_eq!(
        endpoint_url(base, "/products/7"),
        "https://fakestoreapi.com/products/7"
    );
    assert_eq!(
        endpoint_url(base, "/products/categories"),
        "https://fakestoreapi.com/products/categories"
    );
    assert_eq!(
        endpoint_url(base, "/users"),
        "https://fakestoreapi.com/users"
    );
    assert_eq!(
        endpoint_url(base, "/users/3"),
        "https://fakestoreapi.com/users/3"
    );
}

#[test]
fn test_endpoint_url_tolerates_slash_variants() {
    assert_eq!(
        endpoint_url("http://localhost:9900/", "/products"),
        "http://localhost:9900/products"
    );
    assert_eq!(
        endpoint_url("http://localhost:9900", "products"),
        "http://localhost:9900/products"
    );
}

#[test]
fn test_client_carries_configured_base_url() {
    let client = StoreClient::new("http://localhost:9900").unwrap();
    assert_eq!(client.base_url(), "http://localhost:9900");
}

#[test]
fn test_not_found_is_distinguished_from_other_failures() {
    let not_found = StoreApiError::NotFound {
        url: "https://fakestoreapi.com/products/999".to_string(),
    };
    assert!(not_found.is_not_found());

    let server_error = StoreApiError::Status {
        url: "https://fakestoreapi.com/products".to_string(),
        status: reqwest::StatusCode::BAD_GATEWAY,
    };
    assert!(!server_error.is_not_found());
}

#[test]
fn test_error_messages_name_the_url() {
    let err = StoreApiError::NotFound {
        url: "https://fakestoreapi.com/users/999".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("https://fakestoreapi.com/users/999"));

    let err = StoreApiError::Status {
        url: "https://fakestoreapi.com/products".to_string(),
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    };
    assert!(err.to_string().contains("500"));
}

#[test]
fn test_decodes_a_full_products_response() {
    let json = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        }
    ]"#;
    let products: Vec<Product> = serde_json::from_str(json).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].rating.count, 259);
}

#[test]
fn test_decodes_a_users_response_with_extra_fields() {
    // The demo payload carries fields the admin console does not use
    // (password, geolocation, __v); they must be ignored, not fatal
    let json = r#"[
        {
            "address": {
                "geolocation": { "lat": "-37.3159", "long": "81.1496" },
                "city": "kilcoole",
                "street": "new road",
                "number": 7682,
                "zipcode": "12926-3874"
            },
            "id": 1,
            "email": "john@gmail.com",
            "username": "johnd",
            "password": "m38rmF$",
            "name": { "firstname": "john", "lastname": "doe" },
            "phone": "1-570-236-7033",
            "__v": 0
        }
    ]"#;
    let users: Vec<User> = serde_json::from_str(json).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "johnd");
    assert_eq!(users[0].address.street, "new road");
}

#[test]
fn test_sparse_record_decodes_with_defaults() {
    let json = r#"{"id": 21}"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.title, "");
    assert_eq!(product.price, 0.0);
    assert_eq!(product.rating.rate, 0.0);

    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.full_name(), "");
    assert_eq!(user.address.zipcode, "");
}
