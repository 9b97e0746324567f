//! Tag deriver.
//!
//! Tags are derived with plain substring checks against the lower-cased notes,
//! name and *source* category label (not the classified
//! [`Category`](crate::types::Category): the
//! wire name `academic_stem` would otherwise trip both the STEM and the
//! academic checks).

/// Collects tags, dropping repeats and keeping first-seen order.
#[derive(Debug, Default)]
struct TagSet(Vec<String>);

impl TagSet {
    fn add(&mut self, tag: &str) {
        if !self.0.iter().any(|t| t == tag) {
            self.0.push(tag.to_string());
        }
    }

    fn add_if(&mut self, cond: bool, tag: &str) {
        if cond {
            self.add(tag);
        }
    }
}

fn any_of(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Derive descriptive tags for one camp. Zero tags is a valid result.
pub fn derive_tags(category: Option<&str>, name: Option<&str>, notes: Option<&str>) -> Vec<String> {
    let cat = category.unwrap_or_default().to_lowercase();
    let name = name.unwrap_or_default().to_lowercase();
    let notes = notes.unwrap_or_default().to_lowercase();
    let mut tags = TagSet::default();

    tags.add_if(notes.contains("scholarship"), "scholarships");
    tags.add_if(notes.contains("sibling discount"), "sibling discount");
    tags.add_if(notes.contains("early bird"), "early bird");
    tags.add_if(notes.contains("aftercare"), "aftercare");
    tags.add_if(any_of(&notes, &["swim", "pool"]), "swimming");
    tags.add_if(notes.contains("field trip"), "field trips");
    tags.add_if(notes.contains("free"), "free");
    tags.add_if(notes.contains("bilingual"), "bilingual");
    tags.add_if(any_of(&notes, &["transportation", "bus"]), "transportation");

    if any_of(&cat, &["stem", "tech"]) {
        tags.add("STEM");
        tags.add_if(
            any_of(&notes, &["coding", "minecraft", "ai", "game design"]),
            "coding",
        );
        tags.add_if(notes.contains("robot"), "robotics");
    }

    if any_of(&cat, &["arts", "music"]) {
        tags.add("arts");
        tags.add_if(any_of(&notes, &["painting", "ceramic"]), "visual arts");
        tags.add_if(notes.contains("music"), "music");
    }

    if any_of(&cat, &["theatre", "performing", "dance"]) {
        tags.add_if(
            notes.contains("dance") || any_of(&name, &["dance", "dancer"]),
            "dance",
        );
        tags.add_if(
            any_of(&notes, &["theatre", "theater", "musical", "broadway"]),
            "theater",
        );
    }

    if any_of(&cat, &["sport", "fitness"]) {
        tags.add("sports");
        for sport in ["gymnastics", "rowing", "soccer"] {
            tags.add_if(notes.contains(sport) || name.contains(sport), sport);
        }
        tags.add_if(any_of(&notes, &["horseback", "horse"]), "horseback riding");
    }

    if any_of(&cat, &["outdoor", "nature"]) {
        tags.add("nature");
        tags.add("outdoor");
        tags.add_if(notes.contains("wilderness"), "wilderness");
    }

    if cat.contains("faith") {
        tags.add("faith-based");
        tags.add_if(any_of(&notes, &["bible", "christ"]), "church");
    }

    if cat.contains("overnight") {
        tags.add("overnight");
        tags.add("sleepaway");
    }

    if any_of(&cat, &["writing", "academic"]) {
        tags.add("academic");
        tags.add_if(any_of(&notes, &["writing", "poetry", "fiction"]), "writing");
    }

    if any_of(&cat, &["special", "inclusive"]) {
        tags.add("inclusive");
        tags.add("special needs");
    }

    tags.0
}
