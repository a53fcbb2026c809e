//! Clinical rule catalog: weighted equipment recommendations per category key.
//!
//! Responsibilities:
//! - Define the closed set of rule categories the scoring engine iterates
//! - Hold the static condition/demographic/clinical-need/treatment tables
//! - Resolve caller-supplied keys case-insensitively against table keys
//!
//! The tables are process-wide immutable data; there is no write path after
//! initialization. Keys are stored in normalized snake_case form and caller
//! input is normalized the same way before lookup, so "GI Bleed" and
//! "gi_bleed" resolve to the same rule set.

/// One weighted equipment recommendation under a category key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipmentRule {
    /// Canonical equipment name contributed to the score accumulator.
    pub name: &'static str,
    /// Priority weight on the 1-5 scale, 5 highest.
    pub priority: u8,
    /// Clinical rationale template, prefixed with the caller's source label
    /// when surfaced in a recommendation.
    pub rationale: &'static str,
}

const fn rule(name: &'static str, priority: u8, rationale: &'static str) -> EquipmentRule {
    EquipmentRule {
        name,
        priority,
        rationale,
    }
}

/// The closed set of keyed rule categories.
///
/// Each category owns one table; the scoring engine walks them uniformly
/// rather than dispatching on ad hoc strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleCategory {
    /// Medical conditions (pneumonia, sepsis, ...).
    Condition,
    /// Special clinical needs (isolation, limited mobility, ...).
    ClinicalNeed,
    /// Active treatments (chemotherapy, dialysis, ...).
    Treatment,
}

/// Demographic bucket derived from age, plus the independent bariatric flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemographicBucket {
    /// Under 18 years.
    Pediatric,
    /// 18 to 65 years. Carries no equipment rules.
    Adult,
    /// Over 65 years.
    Geriatric,
    /// BMI above 35, applied independently of the age bucket.
    Bariatric,
}

impl DemographicBucket {
    /// Derive the age bucket. The bariatric bucket is never derived here;
    /// it comes from the BMI check alone.
    pub fn from_age(age: u32) -> Self {
        if age < 18 {
            DemographicBucket::Pediatric
        } else if age > 65 {
            DemographicBucket::Geriatric
        } else {
            DemographicBucket::Adult
        }
    }

    /// Source label used when prefixing rationale lines.
    pub fn label(self) -> &'static str {
        match self {
            DemographicBucket::Pediatric => "Pediatric patient",
            DemographicBucket::Adult => "Adult patient",
            DemographicBucket::Geriatric => "Geriatric patient",
            DemographicBucket::Bariatric => "Bariatric needs",
        }
    }

    /// Rules contributed by this bucket. Adults contribute none.
    pub fn rules(self) -> &'static [EquipmentRule] {
        match self {
            DemographicBucket::Pediatric => PEDIATRIC_RULES,
            DemographicBucket::Adult => &[],
            DemographicBucket::Geriatric => GERIATRIC_RULES,
            DemographicBucket::Bariatric => BARIATRIC_RULES,
        }
    }
}

/// Monitoring equipment that receives the unconditional high-acuity boost.
pub const MONITORING_EQUIPMENT: [&str; 5] = [
    "Cardiac Monitor",
    "Pulse Oximeter",
    "Blood Pressure Monitor",
    "Ventilator",
    "IV Pump",
];

/// Normalize a caller-supplied category key for table lookup.
///
/// Lowercases and maps spaces/hyphens to underscores so free-form labels like
/// "Myocardial Infarction" hit the `myocardial_infarction` table entry.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Look up the rule set for a key within a category.
///
/// Returns `None` for unknown keys; the scoring engine skips those silently.
pub fn rules_for(category: RuleCategory, key: &str) -> Option<&'static [EquipmentRule]> {
    let table = match category {
        RuleCategory::Condition => CONDITION_RULES,
        RuleCategory::ClinicalNeed => CLINICAL_NEED_RULES,
        RuleCategory::Treatment => TREATMENT_RULES,
    };
    let normalized = normalize_key(key);
    table
        .iter()
        .find(|(table_key, _)| *table_key == normalized)
        .map(|(_, rules)| *rules)
}

/// All keys known to a category, in table order.
pub fn known_keys(category: RuleCategory) -> Vec<&'static str> {
    let table = match category {
        RuleCategory::Condition => CONDITION_RULES,
        RuleCategory::ClinicalNeed => CLINICAL_NEED_RULES,
        RuleCategory::Treatment => TREATMENT_RULES,
    };
    table.iter().map(|(key, _)| *key).collect()
}

// ============================================================================
// Condition rules
// ============================================================================

const CONDITION_RULES: &[(&str, &[EquipmentRule])] = &[
    // Respiratory conditions
    (
        "pneumonia",
        &[
            rule(
                "Oxygen Delivery System",
                5,
                "Required for oxygen therapy to maintain adequate saturation",
            ),
            rule(
                "Pulse Oximeter",
                5,
                "Continuous monitoring of oxygen saturation",
            ),
            rule("Suction Device", 4, "Airway clearance for secretions"),
            rule("Nebulizer", 3, "Delivery of bronchodilators if needed"),
        ],
    ),
    (
        "copd",
        &[
            rule(
                "BiPAP/CPAP Machine",
                5,
                "Non-invasive ventilation for respiratory support",
            ),
            rule("Oxygen Delivery System", 5, "Low-flow oxygen as prescribed"),
            rule("Pulse Oximeter", 4, "Monitoring of oxygen saturation"),
            rule("Nebulizer", 4, "Administration of bronchodilators"),
        ],
    ),
    (
        "asthma",
        &[
            rule("Peak Flow Meter", 4, "Monitoring lung function"),
            rule("Nebulizer", 4, "Delivery of bronchodilators"),
            rule("Oxygen Delivery System", 3, "Supplemental oxygen as needed"),
        ],
    ),
    (
        "respiratory_failure",
        &[
            rule("Ventilator", 5, "Mechanical ventilation support"),
            rule(
                "Arterial Line Equipment",
                4,
                "Continuous blood pressure monitoring and ABG sampling",
            ),
            rule("End-Tidal CO2 Monitor", 4, "Monitoring ventilation adequacy"),
        ],
    ),
    // Cardiovascular conditions
    (
        "myocardial_infarction",
        &[
            rule("Cardiac Monitor", 5, "Continuous ECG monitoring"),
            rule("Defibrillator", 5, "Ready for cardiac emergencies"),
            rule("Oxygen Delivery System", 4, "Supplemental oxygen as needed"),
            rule("IV Pump", 4, "Precise delivery of cardiac medications"),
        ],
    ),
    (
        "heart_failure",
        &[
            rule("Cardiac Monitor", 5, "Monitoring for arrhythmias"),
            rule("IV Pump", 4, "Diuretic and inotropic medication delivery"),
            rule("Oxygen Delivery System", 4, "Supplemental oxygen therapy"),
            rule("Digital Scale", 3, "Daily weight monitoring"),
        ],
    ),
    (
        "hypertension",
        &[
            rule("Automated Blood Pressure Cuff", 4, "Regular BP monitoring"),
            rule("IV Pump", 3, "For antihypertensive medications if needed"),
        ],
    ),
    (
        "arrhythmia",
        &[
            rule("Cardiac Monitor", 5, "Continuous rhythm monitoring"),
            rule("Defibrillator", 5, "Available for emergency cardioversion"),
            rule("Temporary Pacemaker", 4, "For bradyarrhythmias if needed"),
        ],
    ),
    // Neurological conditions
    (
        "stroke",
        &[
            rule("Neurological Assessment Tools", 5, "Regular neuro checks"),
            rule("Swallow Evaluation Kit", 4, "Dysphagia screening"),
            rule("Blood Pressure Monitor", 4, "Close BP management"),
            rule("Oxygen Delivery System", 3, "As needed for hypoxia"),
        ],
    ),
    (
        "seizure_disorder",
        &[
            rule(
                "Padded Bed Rails",
                5,
                "Prevention of injury during seizures",
            ),
            rule("Suction Device", 4, "Airway management during seizure"),
            rule(
                "Oxygen Delivery System",
                3,
                "Post-ictal oxygen supplementation",
            ),
        ],
    ),
    (
        "traumatic_brain_injury",
        &[
            rule(
                "ICP Monitoring Equipment",
                5,
                "Intracranial pressure monitoring",
            ),
            rule("Neurological Assessment Tools", 5, "Frequent neuro checks"),
            rule("Ventilator", 4, "If respiratory drive compromised"),
        ],
    ),
    // Gastrointestinal conditions
    (
        "gi_bleed",
        &[
            rule("Suction Device", 5, "For hematemesis management"),
            rule("IV Pump", 5, "Fluid and blood product administration"),
            rule(
                "Nasogastric Tube Kit",
                4,
                "For gastric decompression and lavage",
            ),
            rule(
                "Fluid Warmer",
                3,
                "For prevention of hypothermia during resuscitation",
            ),
        ],
    ),
    (
        "inflammatory_bowel_disease",
        &[
            rule("IV Pump", 4, "For hydration and medication"),
            rule("Patient-Controlled Analgesia Pump", 3, "Pain management"),
        ],
    ),
    // Endocrine conditions
    (
        "diabetes",
        &[
            rule("Glucometer", 5, "Regular blood glucose monitoring"),
            rule("IV Pump", 4, "For insulin infusions if needed"),
            rule(
                "Meal Delivery System",
                3,
                "Consistent carbohydrate meal timing",
            ),
        ],
    ),
    (
        "diabetic_ketoacidosis",
        &[
            rule("IV Pump", 5, "Precise insulin and fluid administration"),
            rule("Glucometer", 5, "Hourly glucose monitoring"),
            rule(
                "Cardiac Monitor",
                4,
                "Monitoring for arrhythmias from electrolyte shifts",
            ),
        ],
    ),
    // Renal conditions
    (
        "acute_kidney_injury",
        &[
            rule("IV Pump", 5, "Precise fluid management"),
            rule("Fluid Balance Chart", 4, "Strict input/output monitoring"),
            rule("Digital Scale", 4, "Daily weight monitoring"),
        ],
    ),
    (
        "chronic_kidney_disease",
        &[
            rule(
                "Dialysis Access Care Kit",
                4,
                "Maintenance of vascular access",
            ),
            rule("Blood Pressure Monitor", 4, "Regular BP monitoring"),
            rule("Digital Scale", 4, "Daily weight monitoring"),
        ],
    ),
    // Surgical patients
    (
        "post_surgical",
        &[
            rule("Wound Care Supplies", 5, "Surgical site management"),
            rule("Patient-Controlled Analgesia Pump", 4, "Pain management"),
            rule("Incentive Spirometer", 4, "Prevention of atelectasis"),
            rule("Sequential Compression Devices", 4, "DVT prophylaxis"),
        ],
    ),
    // Infectious disease
    (
        "sepsis",
        &[
            rule("Cardiac Monitor", 5, "Hemodynamic monitoring"),
            rule("IV Pump", 5, "Fluid and vasopressor administration"),
            rule("Temperature Management System", 4, "Fever management"),
        ],
    ),
    // Mobility/fall risk
    (
        "fall_risk",
        &[
            rule("Bed Alarm", 5, "Alert for unauthorized bed exit"),
            rule("Low Height Bed", 4, "Minimizing fall injury risk"),
            rule("Gait Belt", 4, "Support during ambulation"),
        ],
    ),
    (
        "mobility_impairment",
        &[
            rule("Mechanical Lift", 5, "Safe patient handling"),
            rule(
                "Pressure-Relieving Mattress",
                4,
                "Prevention of pressure injuries",
            ),
            rule("Transfer Board", 4, "Assist with lateral transfers"),
        ],
    ),
];

// ============================================================================
// Demographic rules
// ============================================================================

const PEDIATRIC_RULES: &[EquipmentRule] = &[
    rule(
        "Pediatric-Sized Equipment",
        5,
        "Appropriately sized for children",
    ),
    rule("Child-Friendly Environment", 3, "Reduce stress and anxiety"),
];

const GERIATRIC_RULES: &[EquipmentRule] = &[
    rule(
        "Pressure-Relieving Mattress",
        4,
        "Prevention of pressure injuries in thin skin",
    ),
    rule(
        "Assistive Devices",
        4,
        "Support mobility and independence",
    ),
];

const BARIATRIC_RULES: &[EquipmentRule] = &[
    rule(
        "Bariatric Bed",
        5,
        "Weight capacity and width requirements",
    ),
    rule("Bariatric Commode", 4, "Weight capacity requirements"),
    rule("Ceiling Lift", 5, "Safe patient handling"),
];

// ============================================================================
// Clinical need rules
// ============================================================================

const CLINICAL_NEED_RULES: &[(&str, &[EquipmentRule])] = &[
    (
        "isolation",
        &[
            rule("Negative Pressure Room", 5, "Airborne infection control"),
            rule("PPE Station", 5, "Infection control supplies"),
        ],
    ),
    (
        "immunocompromised",
        &[
            rule("HEPA Filter", 5, "Air filtration"),
            rule(
                "Positive Pressure Room",
                4,
                "Protection from external contaminants",
            ),
        ],
    ),
    (
        "limited_mobility",
        &[
            rule("Ceiling Lift", 4, "Safe transfers"),
            rule(
                "Pressure-Relieving Mattress",
                4,
                "Prevention of pressure injuries",
            ),
        ],
    ),
    (
        "visually_impaired",
        &[
            rule("Braille Signage", 3, "Navigation assistance"),
            rule(
                "Audible Alert Systems",
                4,
                "Communication of important information",
            ),
        ],
    ),
    (
        "hearing_impaired",
        &[
            rule("Visual Alert System", 4, "Visual cues for alarms"),
            rule(
                "Communication Board",
                3,
                "Alternative communication method",
            ),
        ],
    ),
];

// ============================================================================
// Treatment rules
// ============================================================================

const TREATMENT_RULES: &[(&str, &[EquipmentRule])] = &[
    (
        "chemotherapy",
        &[
            rule(
                "Chemotherapy-Rated IV Pump",
                5,
                "Safe administration of cytotoxic drugs",
            ),
            rule("Spill Kit", 5, "Management of cytotoxic spills"),
            rule(
                "Anti-Nausea Medication Delivery",
                4,
                "Symptom management",
            ),
        ],
    ),
    (
        "radiation_therapy",
        &[
            rule("Positioning Aids", 5, "Reproducible patient positioning"),
            rule("Radiation Shield", 5, "Protection of non-targeted areas"),
        ],
    ),
    (
        "dialysis",
        &[
            rule("Dialysis Machine", 5, "Renal replacement therapy"),
            rule("Dialysis Chair", 4, "Patient comfort during treatment"),
            rule(
                "Fluid Balance Equipment",
                5,
                "Precise fluid removal monitoring",
            ),
        ],
    ),
    (
        "physical_therapy",
        &[
            rule(
                "Therapeutic Exercise Equipment",
                4,
                "Rehabilitation progress",
            ),
            rule("Parallel Bars", 3, "Gait training"),
            rule("Therapy Mats", 3, "Safe exercise surface"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_for_is_case_insensitive() {
        let lower = rules_for(RuleCategory::Condition, "sepsis").expect("known key");
        let upper = rules_for(RuleCategory::Condition, "Sepsis").expect("known key");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_rules_for_normalizes_spaces() {
        let spaced = rules_for(RuleCategory::Condition, "Myocardial Infarction")
            .expect("spaced form resolves");
        let snake = rules_for(RuleCategory::Condition, "myocardial_infarction")
            .expect("snake form resolves");
        assert_eq!(spaced, snake);
    }

    #[test]
    fn test_rules_for_unknown_key_is_none() {
        assert!(rules_for(RuleCategory::Condition, "common cold").is_none());
        assert!(rules_for(RuleCategory::Treatment, "sepsis").is_none());
    }

    #[test]
    fn test_priorities_stay_on_scale() {
        for category in [
            RuleCategory::Condition,
            RuleCategory::ClinicalNeed,
            RuleCategory::Treatment,
        ] {
            for key in known_keys(category) {
                for rule in rules_for(category, key).expect("listed key resolves") {
                    assert!(
                        (1..=5).contains(&rule.priority),
                        "{} has out-of-scale priority {}",
                        rule.name,
                        rule.priority
                    );
                }
            }
        }
    }

    #[test]
    fn test_age_bucket_boundaries() {
        assert_eq!(DemographicBucket::from_age(17), DemographicBucket::Pediatric);
        assert_eq!(DemographicBucket::from_age(18), DemographicBucket::Adult);
        assert_eq!(DemographicBucket::from_age(65), DemographicBucket::Adult);
        assert_eq!(DemographicBucket::from_age(66), DemographicBucket::Geriatric);
    }

    #[test]
    fn test_adult_bucket_has_no_rules() {
        assert!(DemographicBucket::Adult.rules().is_empty());
    }

    #[test]
    fn test_catalog_key_counts() {
        assert_eq!(known_keys(RuleCategory::Condition).len(), 21);
        assert_eq!(known_keys(RuleCategory::ClinicalNeed).len(), 5);
        assert_eq!(known_keys(RuleCategory::Treatment).len(), 4);
    }
}
