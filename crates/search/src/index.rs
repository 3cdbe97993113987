use std::collections::HashSet;

use crate::engine::CategoryFilter;

/// Build the category filter options from classification values:
/// first-seen order, de-duplicated, with the `"all"` sentinel first.
#[must_use]
pub fn category_index<'a, I>(classes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    // Seed with the sentinel so a literal "all" classification cannot
    // produce a duplicate entry.
    seen.insert(CategoryFilter::SENTINEL);

    let mut index = vec![CategoryFilter::SENTINEL.to_string()];
    for class in classes {
        if seen.insert(class) {
            index.push(class.to_string());
        }
    }
    index
}
