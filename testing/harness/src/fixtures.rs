//! Deterministic sample data.

use serde::Serialize;
use std::collections::BTreeSet;

/// A dish on the menu.
///
/// Serializes its [`DishType`] under the `type` key, so field paths read `type.course`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dish {
    /// Name of the dish.
    pub name: String,
    /// Course and taste.
    #[serde(rename = "type")]
    pub kind: DishType,
    /// Ingredients, iterated in sorted order.
    pub ingredients: BTreeSet<String>,
}

impl Dish {
    /// Creates a dish.
    pub fn new<'a>(
        name: &str,
        kind: DishType,
        ingredients: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            ingredients: ingredients.into_iter().map(String::from).collect(),
        }
    }
}

/// The course a dish is served as and how it tastes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DishType {
    /// E.g. `Appetizer`, `Main`, `Dessert`.
    pub course: String,
    /// E.g. `Savoury`, `Sweet`.
    pub taste: String,
}

impl DishType {
    /// Creates a dish type.
    pub fn new(course: &str, taste: &str) -> Self {
        Self { course: course.to_string(), taste: taste.to_string() }
    }
}

/// The three dishes, always in the same order.
pub fn dishes() -> Vec<Dish> {
    vec![
        Dish::new("Keropok", DishType::new("Appetizer", "Savoury"), ["Flour", "Fish"]),
        Dish::new("Prawn Mee", DishType::new("Main", "Savoury"), ["Prawn", "Noodle"]),
        Dish::new("Mango Pudding", DishType::new("Dessert", "Sweet"), ["Mango", "Gelatin"]),
    ]
}

/// `["one", "two", "three"]`
pub fn words() -> Vec<&'static str> {
    vec!["one", "two", "three"]
}

/// [`words`] with a second `"two"` appended.
pub fn words_with_duplicates() -> Vec<&'static str> {
    vec!["one", "two", "three", "two"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dishes_are_deterministic() {
        assert_eq!(dishes(), dishes());
        assert_eq!(words(), words());
    }

    #[test]
    fn dish_order_is_fixed() {
        let names: Vec<_> = dishes().into_iter().map(|dish| dish.name).collect();
        assert_eq!(names, ["Keropok", "Prawn Mee", "Mango Pudding"]);
    }

    #[test]
    fn ingredients_ignore_insertion_order() {
        let swapped =
            Dish::new("Keropok", DishType::new("Appetizer", "Savoury"), ["Fish", "Flour"]);
        assert_eq!(dishes()[0], swapped);
    }

    #[test]
    fn type_is_serialized_under_its_field_name() {
        let value = serde_json::to_value(&dishes()[2]).unwrap();
        assert_eq!(value["type"]["course"], "Dessert");
        assert_eq!(value["ingredients"], serde_json::json!(["Gelatin", "Mango"]));
    }
}
