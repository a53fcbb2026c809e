//! Free-text query classification and parameter extraction.
//!
//! An ordered waterfall of regex tests, first match wins:
//! patient-recommendation phrasing, then room-planning phrasing (which also
//! requires a room-type token or the literal word "room"), then
//! project-listing phrasing, then a bare extractable project id, then the
//! general fallback. The waterfall order is load-bearing; reordering the
//! checks changes classification of queries that match several pattern sets.
//!
//! Matching is plain substring/regex lookup over the lowercased query, no
//! tokenization. That keeps the classifier deterministic and dependency-free
//! but lets substrings inside unrelated words false-positive.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::rooms::RoomType;

/// The classified purpose of a free-text query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Patient-specific equipment recommendation request.
    PatientRecommendations,
    /// Room equipment planning request.
    RoomPlanning,
    /// Request to list available projects.
    ProjectOptions,
    /// Query scoped to a specific project (or all projects).
    ScopedProject,
    /// Anything else.
    GeneralQuestion,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("hardcoded pattern compiles"))
        .collect()
}

static PATIENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"patient(-| )specific",
        r"personalized recommendations",
        r"recommend for (a|my|this) patient",
        r"patient needs",
        r"individual patient",
        r"patient recommender",
        r"based on (patient|condition|diagnosis)",
        r"patient equipment",
    ])
});

static ROOM_PLANNING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"where should i put",
        r"equipment (placement|location)",
        r"room layout",
        r"design (a|the) room",
        r"plan (a|the) room",
        r"set up (a|the) room",
        r"what equipment (should|do) i (put|need) in",
        r"help me plan",
        r"equipment (goes|should go) in",
        r"equip (a|the|my)",
        r"layout for",
    ])
});

static PROJECT_OPTIONS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"what projects",
        r"project options",
        r"available projects",
        r"show projects",
        r"list projects",
        r"list all projects",
        r"view projects",
        r"projects can i view",
    ])
});

static PROJECT_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"project\s+id\s*[=:]*\s*(\d+)",
        r"project\s*[=:]*\s*(\d+)",
        r"project_id\s*[=:]*\s*(\d+)",
    ])
});

static ALL_PROJECTS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"all\s+projects",
        r"every\s+project",
        r"entire\s+system",
        r"entire\s+dataset",
        r"across\s+all",
    ])
});

/// Word-bounded canonical room-type tokens, in catalog order.
static ROOM_TYPE_TOKENS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    RoomType::ALL
        .iter()
        .map(|room| {
            let pattern = format!(r"\b{}\b", room.name().to_lowercase());
            Regex::new(&pattern).expect("hardcoded pattern compiles")
        })
        .collect()
});

static ROOM_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\broom\b").expect("hardcoded pattern compiles"));

static AREA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:square\s*feet|sq\s*ft|sqft)").expect("hardcoded pattern compiles")
});

fn any_match(patterns: &[Regex], query: &str) -> bool {
    patterns.iter().any(|p| p.is_match(query))
}

/// Classify a free-text query into an intent.
pub fn classify_query(query: &str) -> Intent {
    let query = query.to_lowercase();

    if any_match(&PATIENT_PATTERNS, &query) {
        return Intent::PatientRecommendations;
    }

    let mentions_room = ROOM_TYPE_TOKENS.iter().any(|token| token.is_match(&query))
        || ROOM_WORD.is_match(&query);
    if mentions_room && any_match(&ROOM_PLANNING_PATTERNS, &query) {
        return Intent::RoomPlanning;
    }

    if any_match(&PROJECT_OPTIONS_PATTERNS, &query) {
        return Intent::ProjectOptions;
    }

    if extract_project_id(&query).is_some() {
        return Intent::ScopedProject;
    }

    Intent::GeneralQuestion
}

/// Extract a project id from a query.
///
/// Returns `Some(0)` as the "all projects" sentinel, `None` when the query
/// names no project at all.
pub fn extract_project_id(query: &str) -> Option<u32> {
    let query = query.to_lowercase();

    for pattern in PROJECT_ID_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(&query) {
            if let Ok(id) = captures[1].parse() {
                return Some(id);
            }
        }
    }

    if any_match(&ALL_PROJECTS_PATTERNS, &query) {
        return Some(0);
    }

    None
}

/// Extract the room type and floor area (sq ft) from a planning query.
///
/// Room types are matched by canonical-name substring only; synonyms are
/// resolved later by the room catalog. Either component may be absent.
pub fn extract_room_planning_info(query: &str) -> (Option<RoomType>, Option<u32>) {
    let query = query.to_lowercase();

    let room_type = RoomType::ALL
        .iter()
        .find(|room| query.contains(&room.name().to_lowercase()))
        .copied();

    let area = AREA_PATTERN
        .captures(&query)
        .and_then(|captures| captures[1].parse().ok());

    (room_type, area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_options_query() {
        assert_eq!(classify_query("What projects can I view?"), Intent::ProjectOptions);
        assert_eq!(classify_query("list all projects"), Intent::ProjectOptions);
    }

    #[test]
    fn test_room_planning_query_with_room_type() {
        assert_eq!(
            classify_query("Help me plan an Operating Room layout"),
            Intent::RoomPlanning
        );
        assert_eq!(
            classify_query("Where should I put equipment in an ICU?"),
            Intent::RoomPlanning
        );
    }

    #[test]
    fn test_room_planning_accepts_bare_room_word() {
        assert_eq!(
            classify_query("help me plan this room"),
            Intent::RoomPlanning
        );
    }

    #[test]
    fn test_planning_phrase_without_room_falls_through() {
        // A planning phrase alone is not enough; without a room token the
        // query drops through the waterfall to the general fallback.
        assert_eq!(classify_query("help me plan my week"), Intent::GeneralQuestion);
    }

    #[test]
    fn test_patient_phrasing_precedes_room_planning() {
        assert_eq!(
            classify_query("patient-specific equipment for the ICU room layout"),
            Intent::PatientRecommendations
        );
    }

    #[test]
    fn test_room_and_project_without_planning_phrase_is_scoped() {
        assert_eq!(
            classify_query("show the ICU data for project id 3"),
            Intent::ScopedProject
        );
    }

    #[test]
    fn test_scoped_project_query() {
        assert_eq!(
            classify_query("show equipment in project id 2"),
            Intent::ScopedProject
        );
        assert_eq!(classify_query("show data for all projects"), Intent::ScopedProject);
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(classify_query("hello there"), Intent::GeneralQuestion);
    }

    #[test]
    fn test_extract_project_id_variants() {
        assert_eq!(extract_project_id("show equipment for project id 5"), Some(5));
        assert_eq!(extract_project_id("project 3"), Some(3));
        assert_eq!(extract_project_id("project_id = 2"), Some(2));
        assert_eq!(extract_project_id("project id: 7"), Some(7));
    }

    #[test]
    fn test_extract_project_id_all_projects_sentinel() {
        assert_eq!(extract_project_id("show data for all projects"), Some(0));
        assert_eq!(extract_project_id("across all sites"), Some(0));
    }

    #[test]
    fn test_extract_project_id_absent() {
        assert_eq!(extract_project_id("what equipment goes in an ICU?"), None);
    }

    #[test]
    fn test_extract_room_planning_info() {
        let (room, area) =
            extract_room_planning_info("What equipment goes in a 300 square feet Emergency Room?");
        assert_eq!(room, Some(RoomType::EmergencyRoom));
        assert_eq!(area, Some(300));
    }

    #[test]
    fn test_extract_area_spellings() {
        for query in ["250 sq ft", "250 sqft", "250 square feet", "250sqft"] {
            let (_, area) = extract_room_planning_info(query);
            assert_eq!(area, Some(250), "{query}");
        }
    }

    #[test]
    fn test_extract_room_planning_info_absent_parts() {
        assert_eq!(extract_room_planning_info("plan a room"), (None, None));
        let (room, area) = extract_room_planning_info("plan an icu");
        assert_eq!(room, Some(RoomType::Icu));
        assert_eq!(area, None);
    }

    #[test]
    fn test_intent_serializes_snake_case() {
        let json = serde_json::to_value(Intent::RoomPlanning).expect("serializable");
        assert_eq!(json, "room_planning");
    }
}
