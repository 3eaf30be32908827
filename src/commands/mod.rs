pub mod categories;
pub mod day;
pub mod list;
pub mod post;
pub mod refresh;
pub mod search;
pub mod show;

use chrono::{Local, NaiveDateTime};
use citybuzz_core::category::Category;
use owo_colors::OwoColorize;

/// Local wall-clock time; events are compared in local time throughout.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Resolve a category typed on the command line.
///
/// Palette labels match regardless of case ("sports", "food & drinks").
/// Anything else is kept as a custom category, with a warning since it
/// only matches events carrying exactly that label.
pub fn parse_category(input: &str) -> Category {
    let input = input.trim();
    if let Some(known) = Category::ALL
        .iter()
        .find(|c| c.label().eq_ignore_ascii_case(input))
    {
        return known.clone();
    }

    eprintln!(
        "{} '{}' is not a palette category; matching it exactly",
        "Warning:".yellow(),
        input
    );
    Category::from_label(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_ignores_case() {
        assert_eq!(parse_category("sports"), Category::Sports);
        assert_eq!(parse_category(" food & DRINKS "), Category::FoodAndDrinks);
        assert_eq!(parse_category("Family Fun"), Category::FamilyFun);
    }

    #[test]
    fn test_parse_category_keeps_unknown_labels() {
        assert_eq!(parse_category("College Events"), Category::Other("College Events".into()));
    }
}
