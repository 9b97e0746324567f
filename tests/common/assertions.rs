//! Domain-specific assertion macros for campsheet harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages naming the camp
//! and the field that came out wrong.

/// Assert a camp's age bounds.
///
/// ```rust
/// assert_ages!(camp, 5, 8);
/// ```
#[macro_export]
macro_rules! assert_ages {
    ($camp:expr, $min:expr, $max:expr) => {{
        let camp: &campsheet_core::Camp = &$camp;
        pretty_assertions::assert_eq!(
            (camp.ages_min, camp.ages_max),
            ($min, $max),
            "assert_ages! failed for camp {} ({:?})",
            camp.id,
            camp.name
        );
    }};
}

/// Assert a camp's price bounds and note. Pass `None` bounds for unpriced
/// camps.
///
/// ```rust
/// assert_prices!(camp, Some(135), Some(500), "sliding scale");
/// ```
#[macro_export]
macro_rules! assert_prices {
    ($camp:expr, $min:expr, $max:expr, $note:expr) => {{
        let camp: &campsheet_core::Camp = &$camp;
        let expected: (Option<u32>, Option<u32>, &str) = ($min, $max, $note);
        pretty_assertions::assert_eq!(
            (camp.price_min, camp.price_max, camp.price_note.as_str()),
            expected,
            "assert_prices! failed for camp {} ({:?})",
            camp.id,
            camp.name
        );
    }};
}

/// Assert that ids run 1..=N in order with no gaps.
#[macro_export]
macro_rules! assert_ids_sequential {
    ($camps:expr) => {{
        let camps: &[campsheet_core::Camp] = &$camps;
        for (i, camp) in camps.iter().enumerate() {
            assert_eq!(
                camp.id as usize,
                i + 1,
                "assert_ids_sequential! failed: camp {:?} at position {} has id {}",
                camp.name,
                i,
                camp.id
            );
        }
    }};
}
