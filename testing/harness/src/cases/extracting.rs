use crate::{
    case::Case,
    fixtures::{dishes, DishType},
    suite::Suite,
};
use plate_assert::prelude::*;

const GROUP: &str = "extracting";

/// Assertions on values pulled out of the dishes, by closure and by field name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractingSuite;

impl Suite for ExtractingSuite {
    fn suite_name(&self) -> &'static str {
        GROUP
    }

    fn cases(&self) -> Vec<Case> {
        vec![
            Case::pass(GROUP, "single value per element by name", || {
                assert_that(dishes())
                    .extracting_field("name")
                    .contains_exactly(["Keropok", "Prawn Mee", "Mango Pudding"]);
            }),
            Case::pass(GROUP, "single value per element by closure", || {
                assert_that(dishes()).extracting(|dish| dish.name.clone()).all(|names| {
                    names.contains_exactly(["Keropok", "Prawn Mee", "Mango Pudding"]);
                    names.does_not_contain(["Brinjal"]);
                });
            }),
            Case::pass(GROUP, "multiple values per element by name", || {
                assert_that(dishes()).extracting_fields(&["name", "type.course"]).contains_exactly([
                    tuple!("Keropok", "Appetizer"),
                    tuple!("Prawn Mee", "Main"),
                    tuple!("Mango Pudding", "Dessert"),
                ]);
            }),
            Case::pass(GROUP, "multiple values per element with nested records", || {
                assert_that(dishes()).extracting_fields(&["name", "type"]).contains_exactly([
                    tuple!("Keropok", DishType::new("Appetizer", "Savoury")),
                    tuple!("Prawn Mee", DishType::new("Main", "Savoury")),
                    tuple!("Mango Pudding", DishType::new("Dessert", "Sweet")),
                ]);
            }),
            Case::pass(GROUP, "multiple values per element by closure", || {
                assert_that(dishes())
                    .extracting_pair(|dish| dish.name.clone(), |dish| dish.kind.course.clone())
                    .contains_exactly([
                        ("Keropok".to_string(), "Appetizer".to_string()),
                        ("Prawn Mee".to_string(), "Main".to_string()),
                        ("Mango Pudding".to_string(), "Dessert".to_string()),
                    ]);

                assert_that(dishes())
                    .extracting_pair(|dish| dish.name.clone(), |dish| dish.kind.clone())
                    .contains_exactly([
                        ("Keropok".to_string(), DishType::new("Appetizer", "Savoury")),
                        ("Prawn Mee".to_string(), DishType::new("Main", "Savoury")),
                        ("Mango Pudding".to_string(), DishType::new("Dessert", "Sweet")),
                    ]);
            }),
            Case::pass(GROUP, "flattening multiple values per element", || {
                let ingredients = ["Fish", "Flour", "Noodle", "Prawn", "Gelatin", "Mango"];
                assert_that(dishes())
                    .flat_extracting_field("ingredients")
                    .contains_exactly(ingredients);
                assert_that(dishes())
                    .flat_extracting(|dish| dish.ingredients.clone())
                    .contains_exactly(ingredients);
            }),
            Case::fail(
                GROUP,
                "extracted values keep the failure format",
                r#"Expecting actual:
  ["Keropok", "Prawn Mee", "Mango Pudding"]
to contain exactly (and in same order):
  ["Keropok", "Prawn Mee"]
but some elements were not expected:
  ["Mango Pudding"]"#,
                || {
                    assert_that(dishes())
                        .extracting_field("name")
                        .contains_exactly(["Keropok", "Prawn Mee"]);
                },
            ),
            Case::fail(
                GROUP,
                "extracted values keep the description",
                r#"[courses] Expecting actual:
  ["Appetizer", "Main", "Dessert"]
to contain:
  ["Brunch"]
but could not find the following element(s):
  ["Brunch"]"#,
                || {
                    assert_that(dishes())
                        .described_as("courses")
                        .extracting(|dish| dish.kind.course.clone())
                        .contains(["Brunch"]);
                },
            ),
            Case::fail(
                GROUP,
                "unknown field",
                r#"Can't find any field or property with name 'colour' in:
  Dish { name: "Keropok", kind: DishType { course: "Appetizer", taste: "Savoury" }, ingredients: {"Fish", "Flour"} }"#,
                || {
                    assert_that(dishes()).extracting_field("colour");
                },
            ),
        ]
    }
}
