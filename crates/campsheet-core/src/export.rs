//! Export: render normalised camps as JSON or as an SQL seed script, and
//! summarise a run.

use std::collections::BTreeMap;

use crate::types::{Camp, Category, Region};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize camps: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pretty-printed JSON array of records.
pub fn to_json(camps: &[Camp]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(camps)?)
}

const INSERT_COLUMNS: &str = "name, slug, category, ages_min, ages_max, duration, days_of_week, \
     location_name, address, city, state, price_min, price_max, price_note, camp_type, \
     schedule_type, region, website, registration_status, registration_opens_date, \
     fills_fast, notes, tags, is_active";

/// SQL seed script: a header comment and one `INSERT INTO camps` per record.
pub fn to_sql_seed(camps: &[Camp], planning_year: i32) -> String {
    let mut out = format!(
        "-- Summer camp seed data ({planning_year})\n\
         -- Generated from spreadsheet data\n\
         -- {} camps\n\n",
        camps.len()
    );

    for camp in camps {
        let values = [
            quote(&camp.name),
            quote(&camp.slug),
            quote(camp.category.as_str()),
            camp.ages_min.to_string(),
            camp.ages_max.to_string(),
            quote(&camp.duration),
            array(&camp.days_of_week).unwrap_or_else(null),
            opt_quote(camp.location_name.as_deref()),
            opt_quote(camp.address.as_deref()),
            quote(&camp.city),
            quote(&camp.state),
            opt_number(camp.price_min),
            opt_number(camp.price_max),
            quote(&camp.price_note),
            quote(camp.camp_type.as_str()),
            quote(camp.schedule_type.as_str()),
            quote(camp.region.as_str()),
            opt_quote(camp.website.as_deref()),
            quote(camp.registration_status.as_str()),
            opt_quote(
                camp.registration_opens_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .as_deref(),
            ),
            camp.fills_fast.to_string(),
            opt_quote(camp.notes.as_deref()),
            array(&camp.tags).unwrap_or_else(null),
            camp.is_active.to_string(),
        ];
        out.push_str(&format!(
            "INSERT INTO camps ({INSERT_COLUMNS})\nVALUES ({});\n\n",
            values.join(", ")
        ));
    }
    out
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn null() -> String {
    "NULL".to_string()
}

fn opt_quote(s: Option<&str>) -> String {
    s.map(quote).unwrap_or_else(null)
}

fn opt_number(n: Option<u32>) -> String {
    n.map(|n| n.to_string()).unwrap_or_else(null)
}

/// `ARRAY['a','b']`, or `None` for an empty list.
fn array(items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    Some(format!("ARRAY[{}]", quoted.join(",")))
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Category and region counts for one run, largest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub categories: Vec<(Category, usize)>,
    pub regions: Vec<(Region, usize)>,
}

impl Summary {
    pub fn of(camps: &[Camp]) -> Self {
        Self {
            total: camps.len(),
            categories: ranked(camps.iter().map(|c| c.category), Category::as_str),
            regions: ranked(camps.iter().map(|c| c.region), Region::as_str),
        }
    }
}

fn ranked<K: Ord + Copy>(keys: impl Iterator<Item = K>, name: fn(K) -> &'static str) -> Vec<(K, usize)> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0usize) += 1;
    }
    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|(a, n), (b, m)| m.cmp(n).then_with(|| name(*a).cmp(name(*b))));
    ranked
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} camps across {} categories",
            self.total,
            self.categories.len()
        )?;
        writeln!(f)?;
        writeln!(f, "Category breakdown:")?;
        for (category, count) in &self.categories {
            writeln!(f, "  {category}: {count}")?;
        }
        writeln!(f)?;
        writeln!(f, "Region breakdown:")?;
        for (region, count) in &self.regions {
            writeln!(f, "  {region}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use crate::types::{Column, RawCampRow};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Camp> {
        normalize(
            &[
                RawCampRow::new()
                    .with(Column::CampName, "St. Mary's Camp")
                    .with(Column::Category, "Faith-Based")
                    .with(Column::Price, "FREE")
                    .with(Column::CityArea, "Kyle")
                    .with(Column::RegistrationStatus, "Opens 2/28"),
                RawCampRow::new()
                    .with(Column::CampName, "Camp Fun")
                    .with(Column::CityArea, "Buda"),
            ],
            2026,
        )
    }

    #[test]
    fn sql_escapes_quotes_and_nulls() {
        let sql = to_sql_seed(&sample(), 2026);
        assert!(sql.starts_with("-- Summer camp seed data (2026)\n-- Generated from spreadsheet data\n-- 2 camps\n\n"));
        assert_eq!(sql.matches("INSERT INTO camps (").count(), 2);
        assert!(sql.contains("VALUES ('St. Mary''s Camp', 'st-marys-camp', 'faith_vbs', 5, 12, '1 week', ARRAY['Mon','Tue','Wed','Thu','Fri'], NULL, NULL, 'Kyle', 'TX', 0, 0, 'FREE', 'day', 'full_day', 'south_suburbs', NULL, 'opens_soon', '2026-02-28', false, NULL, ARRAY['faith-based'], true);"));
        assert!(sql.contains("NULL, NULL, 'Contact for pricing'"));
        assert!(sql.contains("'unknown', NULL, false, NULL, NULL, true);"));
    }

    #[test]
    fn json_round_trips_field_names() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["category"], "faith_vbs");
        assert_eq!(value[0]["registration_opens_date"], "2026-02-28");
        assert_eq!(value[1]["price_min"], serde_json::Value::Null);
        assert_eq!(value[1]["id"], 2);
    }

    #[test]
    fn summary_ranks_by_count_then_name() {
        let summary = Summary::of(&sample());
        assert_eq!(summary.total, 2);
        assert_eq!(
            summary.categories,
            vec![(Category::FaithVbs, 1), (Category::MultiActivity, 1)]
        );
        assert_eq!(summary.regions, vec![(Region::SouthSuburbs, 2)]);
    }
}
