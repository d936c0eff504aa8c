// fixtures/mod.rs - Test fixtures module
//
// Reusable sample collections shaped like the demo store API payloads.
// Tests run the list pipeline against these instead of the network, so
// the data keeps the quirks of the real service: lowercase categories,
// lowercase user names, fractional prices and ratings.

use crate::web_app::model::{Address, Name, Product, Rating, User};

fn product(
    id: i32,
    title: &str,
    price: f64,
    description: &str,
    category: &str,
    rate: f64,
    count: u32,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: description.to_string(),
        category: category.to_string(),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
        rating: Rating { rate, count },
    }
}

fn user(
    id: i32,
    firstname: &str,
    lastname: &str,
    email: &str,
    phone: &str,
    city: &str,
    street: &str,
    number: u32,
    zipcode: &str,
) -> User {
    User {
        id,
        email: email.to_string(),
        username: format!(
            "{firstname}{}",
            lastname.chars().next().map(String::from).unwrap_or_default()
        ),
        phone: phone.to_string(),
        name: Name {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        },
        address: Address {
            city: city.to_string(),
            street: street.to_string(),
            number,
            zipcode: zipcode.to_string(),
        },
    }
}

/// A product collection spanning all four demo categories
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Fjallraven - Foldsack No. 1 Backpack",
            109.95,
            "Your perfect pack for everyday use and walks in the forest.",
            "men's clothing",
            3.9,
            120,
        ),
        product(
            2,
            "Mens Casual Premium Slim Fit T-Shirts",
            22.3,
            "Slim-fitting style, contrast raglan long sleeve.",
            "men's clothing",
            4.1,
            259,
        ),
        product(
            3,
            "Mens Cotton Jacket",
            55.99,
            "Great outerwear jackets for spring, autumn and winter.",
            "men's clothing",
            4.7,
            500,
        ),
        product(
            4,
            "John Hardy Women's Legends Naga Bracelet",
            695.0,
            "From our Legends Collection, inspired by the mythical water dragon.",
            "jewelery",
            4.6,
            400,
        ),
        product(
            5,
            "Solid Gold Petite Micropave",
            168.0,
            "Satisfaction guaranteed. Designed and sold by Hafeez Center.",
            "jewelery",
            3.9,
            70,
        ),
        product(
            6,
            "WD 2TB Elements Portable External Hard Drive",
            64.0,
            "USB 3.0 compatibility, fast data transfers.",
            "electronics",
            3.3,
            203,
        ),
        product(
            7,
            "SanDisk SSD PLUS 1TB Internal SSD",
            109.0,
            "Easy upgrade for faster boot up and shutdown.",
            "electronics",
            2.9,
            470,
        ),
        product(
            8,
            "Acer SB220Q bi 21.5 inch Full HD IPS Monitor",
            599.0,
            "Ultra-thin 21.5 inch widescreen IPS display.",
            "electronics",
            2.9,
            250,
        ),
        product(
            9,
            "BIYLACLESEN Women's 3-in-1 Snowboard Jacket",
            56.99,
            "Detachable liner fleece, adjustable detachable hood.",
            "women's clothing",
            2.6,
            235,
        ),
        product(
            10,
            "Opna Women's Short Sleeve Moisture Shirt",
            7.95,
            "Lightweight fabric with moisture wicking performance.",
            "women's clothing",
            4.5,
            146,
        ),
    ]
}

/// A user collection matching the demo service records
pub fn sample_users() -> Vec<User> {
    vec![
        user(
            1,
            "john",
            "doe",
            "john@gmail.com",
            "1-570-236-7033",
            "kilcoole",
            "new road",
            7682,
            "12926-3874",
        ),
        user(
            2,
            "david",
            "morrison",
            "morrison@gmail.com",
            "1-570-236-7034",
            "kilcoole",
            "lovers ln",
            7267,
            "12926-3874",
        ),
        user(
            3,
            "kevin",
            "ryan",
            "kevin@gmail.com",
            "1-567-094-1345",
            "cullman",
            "frances ct",
            86,
            "29567-1452",
        ),
        user(
            4,
            "don",
            "romer",
            "don@gmail.com",
            "1-765-789-6734",
            "san antonio",
            "adams st",
            245,
            "80796-1234",
        ),
        user(
            5,
            "derek",
            "powell",
            "derek@gmail.com",
            "1-956-001-1945",
            "san antonio",
            "hunters creek dr",
            6454,
            "98234-1734",
        ),
        user(
            6,
            "david",
            "russell",
            "david_r@gmail.com",
            "1-678-345-9856",
            "el paso",
            "prospect st",
            124,
            "12346-0456",
        ),
        user(
            7,
            "miriam",
            "snyder",
            "miriam@gmail.com",
            "1-123-943-0563",
            "fresno",
            "saddle st",
            1342,
            "96378-0245",
        ),
        user(
            8,
            "william",
            "hopkins",
            "william@gmail.com",
            "1-478-001-0890",
            "mesa",
            "vally view ln",
            1342,
            "96378-0245",
        ),
    ]
}
