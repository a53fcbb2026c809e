//! Rule-based equipment scoring for patient profiles.
//!
//! Responsibilities:
//! - Define the patient profile carrier types supplied by the caller
//! - Accumulate weighted rule contributions across every category table
//! - Apply the high-acuity monitoring boost and produce the ranked output
//!
//! This is a best-effort scorer over partial input, not a validator: missing
//! fields take neutral defaults and unmatched vocabulary is skipped, so the
//! operation is total.

use serde::{Deserialize, Serialize};

use crate::rooms::RoomType;
use crate::rules::{
    self, DemographicBucket, RuleCategory, MONITORING_EQUIPMENT,
};
use equiplan_types::Acuity;

/// Basic patient demographics. All fields are optional; absent values simply
/// contribute no demographic rules.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    /// Age in years.
    #[serde(default)]
    pub age: Option<u32>,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Height in centimetres. When absent, BMI uses a 170 cm default.
    #[serde(default)]
    pub height_cm: Option<f64>,
}

/// BMI threshold above which bariatric equipment rules apply.
const BARIATRIC_BMI_THRESHOLD: f64 = 35.0;

/// Fallback height for BMI when the caller supplied a weight but no height.
const DEFAULT_HEIGHT_CM: f64 = 170.0;

impl Demographics {
    /// Body mass index, when enough data was supplied to compute it.
    ///
    /// Weight must be present and positive; height falls back to the default
    /// when absent, and non-positive heights yield `None`.
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight_kg.filter(|w| *w > 0.0)?;
        let height_cm = self.height_cm.unwrap_or(DEFAULT_HEIGHT_CM);
        if height_cm <= 0.0 {
            return None;
        }
        let height_m = height_cm / 100.0;
        Some(weight / (height_m * height_m))
    }
}

/// A patient profile, constructed fresh per recommendation request.
///
/// Condition, need, and treatment strings are matched case-insensitively
/// against the rule tables; entries the catalog does not know are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub clinical_needs: Vec<String>,
    #[serde(default)]
    pub treatments: Vec<String>,
    #[serde(default)]
    pub acuity: Acuity,
}

/// One ranked equipment item with its accumulated score and rationale trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredEquipment {
    pub name: String,
    /// Sum of matched rule priorities and acuity boosts.
    pub priority_score: u32,
    /// One `[<source>] <rationale>` line per contributing rule source, in
    /// contribution order.
    pub rationales: Vec<String>,
}

/// Echo of the scored patient alongside the ranked recommendations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub conditions: Vec<String>,
    pub demographics: Demographics,
    pub acuity: Acuity,
}

/// Result of a scoring run: recommendations sorted by descending score.
///
/// Ties keep first-contribution order. Only equipment that received at least
/// one rule contribution appears; there is no zero-score universal list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    pub patient_info: PatientInfo,
    pub recommendations: Vec<ScoredEquipment>,
}

/// Score accumulator preserving first-insertion order for stable tie-breaks.
#[derive(Default)]
struct ScoreBoard {
    entries: Vec<ScoredEquipment>,
}

impl ScoreBoard {
    fn add(&mut self, name: &str, points: u32, rationale: String) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.priority_score += points;
                entry.rationales.push(rationale);
            }
            None => self.entries.push(ScoredEquipment {
                name: name.to_string(),
                priority_score: points,
                rationales: vec![rationale],
            }),
        }
    }

    fn apply_rules(&mut self, label: &str, rules: &[rules::EquipmentRule]) {
        for rule in rules {
            self.add(
                rule.name,
                u32::from(rule.priority),
                format!("[{}] {}", label, rule.rationale),
            );
        }
    }

    /// Walk one keyed category table for every caller-supplied value. The
    /// rationale label echoes the caller's wording, not the canonical key.
    fn apply_category(&mut self, category: RuleCategory, values: &[String]) {
        for value in values {
            match rules::rules_for(category, value) {
                Some(rules) => self.apply_rules(value, rules),
                None => {
                    tracing::debug!(category = ?category, value, "no rules for value, skipping");
                }
            }
        }
    }

    fn into_ranked(mut self) -> Vec<ScoredEquipment> {
        // Stable sort: equal scores retain insertion order.
        self.entries
            .sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
        self.entries
    }
}

/// Generate ranked equipment recommendations for a patient profile.
///
/// Contribution order is fixed: conditions, bariatric flag, age bucket,
/// clinical needs, treatments, then the acuity boost. That order decides
/// tie-breaks in the ranked output.
pub fn score(profile: &PatientProfile) -> RankedRecommendation {
    let mut board = ScoreBoard::default();

    board.apply_category(RuleCategory::Condition, &profile.conditions);

    if let Some(bmi) = profile.demographics.bmi() {
        if bmi > BARIATRIC_BMI_THRESHOLD {
            let bucket = DemographicBucket::Bariatric;
            board.apply_rules(bucket.label(), bucket.rules());
        }
    }

    if let Some(age) = profile.demographics.age {
        let bucket = DemographicBucket::from_age(age);
        board.apply_rules(bucket.label(), bucket.rules());
    }

    board.apply_category(RuleCategory::ClinicalNeed, &profile.clinical_needs);
    board.apply_category(RuleCategory::Treatment, &profile.treatments);

    if profile.acuity.is_high() {
        let level = profile.acuity.level();
        let boost = u32::from(level - 2);
        for name in MONITORING_EQUIPMENT {
            board.add(
                name,
                boost,
                format!("[High Acuity (Level {})] Enhanced monitoring required", level),
            );
        }
    }

    RankedRecommendation {
        patient_info: PatientInfo {
            conditions: profile.conditions.clone(),
            demographics: profile.demographics.clone(),
            acuity: profile.acuity,
        },
        recommendations: board.into_ranked(),
    }
}

/// Suggest the room type best suited to a profile.
///
/// High-acuity, respiratory-failure, and septic patients belong in the ICU;
/// post-surgical patients in an operating room; infarction and stroke
/// patients in an emergency room; everyone else in a standard patient room.
pub fn suggest_room_type(profile: &PatientProfile) -> RoomType {
    let has = |condition: &str| {
        profile
            .conditions
            .iter()
            .any(|c| rules::normalize_key(c) == condition)
    };

    if profile.acuity.is_high() || has("respiratory_failure") || has("sepsis") {
        RoomType::Icu
    } else if has("post_surgical") {
        RoomType::OperatingRoom
    } else if has("myocardial_infarction") || has("stroke") {
        RoomType::EmergencyRoom
    } else {
        RoomType::PatientRoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(conditions: &[&str], acuity: u8) -> PatientProfile {
        PatientProfile {
            conditions: conditions.iter().map(|c| c.to_string()).collect(),
            acuity: Acuity::new(acuity).expect("test acuity on scale"),
            ..PatientProfile::default()
        }
    }

    fn find<'a>(ranked: &'a RankedRecommendation, name: &str) -> &'a ScoredEquipment {
        ranked
            .recommendations
            .iter()
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("{name} missing from recommendations"))
    }

    #[test]
    fn test_empty_profile_yields_no_recommendations() {
        let ranked = score(&PatientProfile::default());
        assert!(ranked.recommendations.is_empty());
    }

    #[test]
    fn test_sepsis_high_acuity_scenario() {
        let ranked = score(&profile_with(&["Sepsis"], 5));

        for name in ["Cardiac Monitor", "IV Pump"] {
            let entry = find(&ranked, name);
            // 5 from the sepsis rule plus (5 - 2) acuity boost.
            assert_eq!(entry.priority_score, 8, "{name}");
            assert_eq!(entry.rationales.len(), 2, "{name}");
            assert!(entry.rationales[0].starts_with("[Sepsis]"));
            assert!(entry.rationales[1].starts_with("[High Acuity (Level 5)]"));
        }
    }

    #[test]
    fn test_acuity_boost_is_monotonic() {
        let baseline = score(&profile_with(&["Sepsis"], 3));
        let boosted = score(&profile_with(&["Sepsis"], 5));

        for name in MONITORING_EQUIPMENT {
            let base = baseline
                .recommendations
                .iter()
                .find(|e| e.name == name)
                .map(|e| e.priority_score)
                .unwrap_or(0);
            let high = find(&boosted, name).priority_score;
            assert!(high > base, "{name}: {high} should exceed {base}");
        }
    }

    #[test]
    fn test_no_boost_below_acuity_four() {
        let ranked = score(&profile_with(&["Asthma"], 3));
        assert!(ranked
            .recommendations
            .iter()
            .all(|e| e.name != "Cardiac Monitor"));
    }

    #[test]
    fn test_ranking_is_descending() {
        let ranked = score(&profile_with(
            &["Pneumonia", "Heart Failure", "Diabetes"],
            4,
        ));
        for pair in ranked.recommendations.windows(2) {
            assert!(pair[0].priority_score >= pair[1].priority_score);
        }
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        // Low Height Bed and Gait Belt both score 4; their relative order
        // must match contribution order, not alphabetical order.
        let ranked = score(&profile_with(&["Fall Risk"], 3));
        let names: Vec<&str> = ranked
            .recommendations
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["Bed Alarm", "Low Height Bed", "Gait Belt"]);
    }

    #[test]
    fn test_rationale_count_matches_sources() {
        // Pneumonia and COPD both recommend an Oxygen Delivery System, and
        // both recommend a Nebulizer; each contributes one rationale line.
        let ranked = score(&profile_with(&["Pneumonia", "COPD"], 3));
        let oxygen = find(&ranked, "Oxygen Delivery System");
        assert_eq!(oxygen.priority_score, 10);
        assert_eq!(oxygen.rationales.len(), 2);
    }

    #[test]
    fn test_rationale_echoes_caller_casing() {
        let ranked = score(&profile_with(&["GI Bleed"], 3));
        let suction = find(&ranked, "Suction Device");
        assert!(suction.rationales[0].starts_with("[GI Bleed]"));
    }

    #[test]
    fn test_unknown_condition_is_skipped() {
        let ranked = score(&profile_with(&["common cold"], 3));
        assert!(ranked.recommendations.is_empty());
    }

    #[test]
    fn test_pediatric_bucket_applies_under_18() {
        let profile = PatientProfile {
            demographics: Demographics {
                age: Some(9),
                ..Demographics::default()
            },
            ..PatientProfile::default()
        };
        let ranked = score(&profile);
        let sized = find(&ranked, "Pediatric-Sized Equipment");
        assert!(sized.rationales[0].starts_with("[Pediatric patient]"));
    }

    #[test]
    fn test_adult_bucket_contributes_nothing() {
        let profile = PatientProfile {
            demographics: Demographics {
                age: Some(40),
                ..Demographics::default()
            },
            ..PatientProfile::default()
        };
        assert!(score(&profile).recommendations.is_empty());
    }

    #[test]
    fn test_bariatric_flag_from_bmi() {
        // 120 kg at 165 cm is a BMI of ~44.
        let profile = PatientProfile {
            demographics: Demographics {
                age: Some(40),
                weight_kg: Some(120.0),
                height_cm: Some(165.0),
            },
            ..PatientProfile::default()
        };
        let ranked = score(&profile);
        let bed = find(&ranked, "Bariatric Bed");
        assert!(bed.rationales[0].starts_with("[Bariatric needs]"));
    }

    #[test]
    fn test_bmi_uses_default_height_when_absent() {
        let demographics = Demographics {
            age: None,
            weight_kg: Some(70.0),
            height_cm: None,
        };
        let bmi = demographics.bmi().expect("weight present");
        assert!((bmi - 24.22).abs() < 0.01);
    }

    #[test]
    fn test_suggest_room_type_precedence() {
        assert_eq!(suggest_room_type(&profile_with(&[], 5)), RoomType::Icu);
        assert_eq!(
            suggest_room_type(&profile_with(&["Sepsis"], 2)),
            RoomType::Icu
        );
        assert_eq!(
            suggest_room_type(&profile_with(&["Post Surgical"], 2)),
            RoomType::OperatingRoom
        );
        assert_eq!(
            suggest_room_type(&profile_with(&["Stroke"], 2)),
            RoomType::EmergencyRoom
        );
        assert_eq!(
            suggest_room_type(&profile_with(&["Asthma"], 2)),
            RoomType::PatientRoom
        );
    }

    #[test]
    fn test_ranked_output_serializes() {
        let ranked = score(&profile_with(&["Sepsis"], 5));
        let json = serde_json::to_value(&ranked).expect("serializable");
        assert_eq!(json["patient_info"]["acuity"], 5);
        assert!(json["recommendations"].as_array().is_some());
    }
}
