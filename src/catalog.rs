use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entities::product::{NutritionInfo, Product};

/// Read-only catalog of purchasable products. The storefront only ever
/// reads from it; there is no write path.
pub trait Catalog: Send + Sync {
    fn list(&self) -> Vec<Product>;
    fn list_by_category(&self, category: &str) -> Vec<Product>;
    fn find_by_id(&self, id: i32) -> Option<Product>;
}

/// Catalog backed by a pre-populated product list.
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's stock assortment.
    pub fn with_default_products() -> Self {
        Self::new(DEFAULT_PRODUCTS.clone())
    }
}

impl Catalog for StaticCatalog {
    fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn list_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect()
    }

    fn find_by_id(&self, id: i32) -> Option<Product> {
        self.products.iter().find(|product| product.id == id).cloned()
    }
}

fn product(
    id: i32,
    name: &str,
    description: &str,
    price: Decimal,
    category: &str,
    image: &str,
    rating: f32,
    calories: u32,
    protein: &str,
    fat: &str,
    carbs: &str,
) -> Product {
    Product {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        category: category.to_owned(),
        image: image.to_owned(),
        rating,
        nutrition_info: NutritionInfo {
            calories,
            protein: protein.to_owned(),
            fat: fat.to_owned(),
            carbs: carbs.to_owned(),
        },
    }
}

static DEFAULT_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        product(
            1,
            "Apple & Carrot Puree",
            "A smooth blend of organic apples and carrots, perfect for introducing solids. Suitable for babies 4+ months.",
            dec!(3.99),
            "purees",
            "https://images.pexels.com/photos/9986228/pexels-photo-9986228.jpeg",
            4.8,
            45,
            "0.5g",
            "0.1g",
            "10g",
        ),
        product(
            2,
            "Banana Oatmeal Cereal",
            "Iron-fortified oatmeal cereal with organic banana for a nutritious breakfast. Ideal for babies 6+ months.",
            dec!(4.49),
            "cereals",
            "https://images.pexels.com/photos/5946057/pexels-photo-5946057.jpeg",
            4.6,
            110,
            "3g",
            "1.5g",
            "22g",
        ),
        product(
            3,
            "Sweet Potato Puffs",
            "Melt-in-mouth puffs made with organic sweet potatoes. Easy for little hands to grip. Perfect for babies 8+ months.",
            dec!(2.99),
            "snacks",
            "https://images.pexels.com/photos/6646233/pexels-photo-6646233.jpeg",
            4.9,
            25,
            "1g",
            "0g",
            "5g",
        ),
        product(
            4,
            "Avocado & Pea Puree",
            "Creamy avocado blended with sweet peas for a nutrient-rich meal. Great source of healthy fats for babies 6+ months.",
            dec!(4.29),
            "purees",
            "https://images.pexels.com/photos/8108091/pexels-photo-8108091.jpeg",
            4.7,
            80,
            "2g",
            "6g",
            "4g",
        ),
        product(
            5,
            "Blueberry & Quinoa Cereal",
            "Antioxidant-rich blueberries and protein-packed quinoa make this cereal a superfood for growing babies 7+ months.",
            dec!(4.99),
            "cereals",
            "https://images.pexels.com/photos/6646023/pexels-photo-6646023.jpeg",
            4.5,
            100,
            "3.5g",
            "1.2g",
            "18g",
        ),
        product(
            6,
            "Mango Yogurt Bites",
            "Freeze-dried yogurt drops with real mango pieces. Perfect finger food for babies learning to self-feed. 9+ months.",
            dec!(3.49),
            "snacks",
            "https://images.pexels.com/photos/8108329/pexels-photo-8108329.jpeg",
            4.8,
            35,
            "1.5g",
            "0.8g",
            "6g",
        ),
        product(
            7,
            "Butternut Squash & Apple Puree",
            "Sweet butternut squash paired with apples creates a vitamin-rich puree that babies love. Suitable for 4+ months.",
            dec!(3.89),
            "purees",
            "https://images.pexels.com/photos/8108167/pexels-photo-8108167.jpeg",
            4.7,
            50,
            "0.6g",
            "0.1g",
            "12g",
        ),
        product(
            8,
            "Spinach, Pear & Pea Puree",
            "A vibrant green puree packed with iron from spinach and sweetened naturally with pears. Great for babies 6+ months.",
            dec!(4.19),
            "purees",
            "https://images.pexels.com/photos/768098/pexels-photo-768098.jpeg",
            4.5,
            55,
            "1.2g",
            "0.2g",
            "11g",
        ),
        product(
            9,
            "Whole Grain Rice Cereal",
            "Classic first food for babies starting solids. Fortified with iron and easily digestible. Suitable for babies 4+ months.",
            dec!(3.99),
            "cereals",
            "https://images.pexels.com/photos/7656553/pexels-photo-7656553.jpeg",
            4.4,
            60,
            "1.5g",
            "0.5g",
            "12g",
        ),
        product(
            10,
            "Teething Biscuits",
            "Soothing biscuits designed for teething babies. Made with whole grains and minimal sugar. For babies 8+ months.",
            dec!(4.59),
            "snacks",
            "https://images.pexels.com/photos/5946087/pexels-photo-5946087.jpeg",
            4.6,
            45,
            "1g",
            "1.2g",
            "8g",
        ),
        product(
            11,
            "Chicken & Vegetable Puree",
            "Protein-rich chicken puree with carrots and peas for a complete meal. Perfect for babies 6+ months exploring new flavors.",
            dec!(4.79),
            "purees",
            "https://images.pexels.com/photos/6646035/pexels-photo-6646035.jpeg",
            4.7,
            85,
            "5g",
            "2g",
            "9g",
        ),
        product(
            12,
            "Apple & Cinnamon Rice Cakes",
            "Lightly sweetened rice cakes with a hint of cinnamon. Perfect for snack time for babies 10+ months.",
            dec!(3.29),
            "snacks",
            "https://images.pexels.com/photos/8108145/pexels-photo-8108145.jpeg",
            4.5,
            30,
            "0.5g",
            "0g",
            "6.5g",
        ),
    ]
});
