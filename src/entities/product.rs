use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable catalog entry. Built once at catalog load and never mutated,
/// so cart lines can embed a copy without it drifting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub rating: f32,
    pub nutrition_info: NutritionInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
}
