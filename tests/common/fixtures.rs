//! Static spreadsheet corpora used across harnesses.
//!
//! `WORKBOOK_JSON` and `SHEET_CSV` hold the same seven rows: five camps plus
//! two cross-reference duplicates (rows 2 and 6).

use campsheet_core::RawCampRow;

use crate::common::builders::RowBuilder;

pub const SHEET: &str = "2026 Camps";

pub const WORKBOOK_JSON: &str = r#"{
  "2026 Camps": [
    {
      "Camp Name": "Zilker Nature Camp",
      "Category": "Outdoor / Nature",
      "Ages": "Grades 1-5",
      "Price ($/wk or noted)": "$135-500 (sliding scale)",
      "City/Area": "Austin (Central)",
      "Location / Address": "2100 Barton Springs Rd",
      "Registration Status": "Opens 2/28",
      "Discounts / Notes": "Scholarships available; swim daily",
      "Website": "zilkernature.org"
    },
    {
      "Camp Name": "Camp Longhorn (see General)",
      "Category": "Overnight"
    },
    {
      "Camp Name": "Robo Labs",
      "Category": "STEM / Tech",
      "Ages": "Rising K-3rd",
      "Price ($/wk or noted)": "$250 ($195 early bird thru 4/15)",
      "City/Area": "Round Rock / Georgetown",
      "Location / Address": null,
      "Registration Status": "Open",
      "Discounts / Notes": "Minecraft and robotics",
      "Website": "https://robolabs.com"
    },
    {
      "Camp Name": "St. Luke's VBS",
      "Category": "Faith-Based",
      "Ages": "K-13",
      "Price ($/wk or noted)": "FREE",
      "City/Area": "Kyle",
      "Registration Status": "Waitlist",
      "Discounts / Notes": "Bible stories and crafts"
    },
    {
      "Camp Name": "Hill Country Ranch",
      "Category": "Overnight",
      "Ages": "~7-17",
      "Price ($/wk or noted)": "$60/day",
      "City/Area": "Kerrville",
      "Registration Status": "Registration closed",
      "Discounts / Notes": "Horseback"
    },
    {
      "Camp Name": "Camp Fun - see Faith",
      "Category": "General / Day Camp"
    },
    {
      "Camp Name": "Camp Fun",
      "Category": "General / Day Camp",
      "Ages": "",
      "Price ($/wk or noted)": "Varies",
      "City/Area": "Lakeway"
    }
  ],
  "Notes": []
}"#;

pub const SHEET_CSV: &str = "\
Camp Name,Category,Ages,Price ($/wk or noted),City/Area,Location / Address,Registration Status,Discounts / Notes,Website
Zilker Nature Camp,Outdoor / Nature,Grades 1-5,$135-500 (sliding scale),Austin (Central),2100 Barton Springs Rd,Opens 2/28,Scholarships available; swim daily,zilkernature.org
Camp Longhorn (see General),Overnight,,,,,,,
Robo Labs,STEM / Tech,Rising K-3rd,$250 ($195 early bird thru 4/15),Round Rock / Georgetown,,Open,Minecraft and robotics,https://robolabs.com
\"St. Luke's VBS\",Faith-Based,K-13,FREE,Kyle,,Waitlist,Bible stories and crafts,
Hill Country Ranch,Overnight,~7-17,$60/day,Kerrville,,Registration closed,Horseback,
Camp Fun - see Faith,General / Day Camp
Camp Fun,General / Day Camp,,Varies,Lakeway,,,,
";

/// Names of the camps the corpus normalises to, in id order.
pub const EXPECTED_NAMES: &[&str] = &[
    "Zilker Nature Camp",
    "Robo Labs",
    "St. Luke's VBS",
    "Hill Country Ranch",
    "Camp Fun",
];

/// The first two corpus camps plus a duplicate, built in memory.
pub fn small_batch() -> Vec<RawCampRow> {
    vec![
        RowBuilder::new("Zilker Nature Camp")
            .category("Outdoor / Nature")
            .ages("Grades 1-5")
            .price("$135-500 (sliding scale)")
            .city("Austin (Central)")
            .status("Opens 2/28")
            .build(),
        RowBuilder::new("Camp Longhorn (see General)")
            .category("Overnight")
            .build(),
        RowBuilder::new("Robo Labs")
            .category("STEM / Tech")
            .ages("Rising K-3rd")
            .price("$250 ($195 early bird thru 4/15)")
            .city("Round Rock / Georgetown")
            .status("Open")
            .build(),
    ]
}
