//! Room catalog: standardized room types, equipment specs, and area analysis.
//!
//! Responsibilities:
//! - Resolve free-form room descriptions to a canonical room type
//! - Hold the consolidated per-room equipment and area-threshold catalog
//! - Classify a supplied floor area against the room's thresholds
//! - Check caller equipment lists against a room's essential set
//!
//! Room lookups are user-facing: an unknown room type is answered with the
//! valid alternatives, never with an error.

use serde::{Deserialize, Serialize};

/// The canonical room types the catalog knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoomType {
    Icu,
    OperatingRoom,
    EmergencyRoom,
    PatientRoom,
    Laboratory,
    Radiology,
    Pharmacy,
    PhysicalTherapy,
}

impl RoomType {
    /// All canonical room types, in catalog order. Order matters for
    /// ambiguous synonym containment: the first matching entry wins.
    pub const ALL: [RoomType; 8] = [
        RoomType::Icu,
        RoomType::OperatingRoom,
        RoomType::EmergencyRoom,
        RoomType::PatientRoom,
        RoomType::Laboratory,
        RoomType::Radiology,
        RoomType::Pharmacy,
        RoomType::PhysicalTherapy,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            RoomType::Icu => "ICU",
            RoomType::OperatingRoom => "Operating Room",
            RoomType::EmergencyRoom => "Emergency Room",
            RoomType::PatientRoom => "Patient Room",
            RoomType::Laboratory => "Laboratory",
            RoomType::Radiology => "Radiology",
            RoomType::Pharmacy => "Pharmacy",
            RoomType::PhysicalTherapy => "Physical Therapy",
        }
    }

    /// Accepted input spellings, all lowercase.
    ///
    /// "or" over-matches inside unrelated phrases when containment matching
    /// kicks in; it is kept anyway to accept the common abbreviation.
    fn synonyms(self) -> &'static [&'static str] {
        match self {
            RoomType::Icu => &["icu", "intensive care", "intensive care unit", "critical care"],
            RoomType::OperatingRoom => &[
                "operating room",
                "or",
                "surgery room",
                "surgical suite",
                "operation theater",
            ],
            RoomType::EmergencyRoom => &[
                "emergency room",
                "er",
                "emergency department",
                "ed",
                "a&e",
                "accident and emergency",
                "trauma room",
            ],
            RoomType::PatientRoom => &[
                "patient room",
                "hospital room",
                "inpatient room",
                "ward room",
                "recovery room",
            ],
            RoomType::Laboratory => &[
                "laboratory",
                "lab",
                "clinical lab",
                "testing lab",
                "diagnostic lab",
            ],
            RoomType::Radiology => &[
                "radiology",
                "imaging",
                "diagnostic imaging",
                "x-ray room",
                "mri room",
                "ct room",
            ],
            RoomType::Pharmacy => &["pharmacy", "drug dispensary", "medication room", "dispensary"],
            RoomType::PhysicalTherapy => &[
                "physical therapy",
                "pt room",
                "rehabilitation",
                "rehab room",
                "therapy room",
            ],
        }
    }

    /// Catalog entry for this room type.
    pub fn spec(self) -> &'static RoomSpec {
        match self {
            RoomType::Icu => &ICU_SPEC,
            RoomType::OperatingRoom => &OPERATING_ROOM_SPEC,
            RoomType::EmergencyRoom => &EMERGENCY_ROOM_SPEC,
            RoomType::PatientRoom => &PATIENT_ROOM_SPEC,
            RoomType::Laboratory => &LABORATORY_SPEC,
            RoomType::Radiology => &RADIOLOGY_SPEC,
            RoomType::Pharmacy => &PHARMACY_SPEC,
            RoomType::PhysicalTherapy => &PHYSICAL_THERAPY_SPEC,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl serde::Serialize for RoomType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for RoomType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        standardize_room_type(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown room type: {s}")))
    }
}

/// One equipment entry in a room's catalog.
///
/// The three fully specified room types carry placement and clearance data;
/// the remaining types list equipment by name only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipmentItem {
    pub name: &'static str,
    pub specs: Option<&'static str>,
    pub dimensions: Option<&'static str>,
    pub placement: Option<&'static str>,
    pub clearance: Option<&'static str>,
    pub quantity: Option<&'static str>,
}

impl EquipmentItem {
    /// Structured multi-line description, one bullet per known field.
    /// Name-only entries render as the bare name.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        if self.specs.is_none()
            && self.dimensions.is_none()
            && self.placement.is_none()
            && self.clearance.is_none()
            && self.quantity.is_none()
        {
            out.push_str(self.name);
            return out;
        }
        out.push_str(self.name);
        out.push(':');
        let fields = [
            ("Specifications", self.specs),
            ("Dimensions", self.dimensions),
            ("Placement", self.placement),
            ("Required Clearance", self.clearance),
            ("Quantity", self.quantity),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                out.push_str("\n  \u{2022} ");
                out.push_str(label);
                out.push_str(": ");
                out.push_str(value);
            }
        }
        out
    }
}

const fn item(name: &'static str) -> EquipmentItem {
    EquipmentItem {
        name,
        specs: None,
        dimensions: None,
        placement: None,
        clearance: None,
        quantity: None,
    }
}

/// Static catalog entry for one room type.
pub struct RoomSpec {
    /// Minimum viable floor area in square feet.
    pub min_area: u32,
    /// Recommended floor area in square feet.
    pub recommended_area: u32,
    /// Equipment in catalog order. Never re-sorted.
    pub equipment: &'static [EquipmentItem],
    /// Short essential-equipment checklist used by compatibility analysis.
    pub essential_equipment: &'static [&'static str],
    /// Layout guidance, where the catalog carries any.
    pub layout_guidelines: &'static [&'static str],
}

/// Classification of a supplied floor area against a room's thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AreaStatus {
    /// Area is below the minimum viable size.
    BelowMinimum { area: u32, min_area: u32 },
    /// Area meets the minimum but falls short of the recommended size.
    BelowRecommended { area: u32, recommended_area: u32 },
    /// Area meets or exceeds the recommended size.
    Adequate { area: u32 },
    /// No area supplied; thresholds echoed instead.
    NotProvided { min_area: u32, recommended_area: u32 },
}

impl AreaStatus {
    fn classify(area: Option<u32>, spec: &RoomSpec) -> Self {
        match area {
            Some(area) if area < spec.min_area => AreaStatus::BelowMinimum {
                area,
                min_area: spec.min_area,
            },
            Some(area) if area < spec.recommended_area => AreaStatus::BelowRecommended {
                area,
                recommended_area: spec.recommended_area,
            },
            Some(area) => AreaStatus::Adequate { area },
            None => AreaStatus::NotProvided {
                min_area: spec.min_area,
                recommended_area: spec.recommended_area,
            },
        }
    }

    /// User-facing message for this classification. Echoes the canonical
    /// room name, not the caller's raw spelling.
    pub fn message(&self, room_type: RoomType) -> String {
        match self {
            AreaStatus::BelowMinimum { area, min_area } => format!(
                "WARNING: The provided area of {area} sq ft is below the minimum recommended area of {min_area} sq ft for a {room_type}."
            ),
            AreaStatus::BelowRecommended {
                area,
                recommended_area,
            } => format!(
                "The provided area of {area} sq ft meets minimum requirements but is below the recommended {recommended_area} sq ft for optimal {room_type} layout."
            ),
            AreaStatus::Adequate { area } => {
                format!("The provided area of {area} sq ft is adequate for a {room_type}.")
            }
            AreaStatus::NotProvided {
                min_area,
                recommended_area,
            } => format!(
                "Recommended minimum area: {min_area} sq ft, Optimal area: {recommended_area} sq ft"
            ),
        }
    }
}

/// Result of a room equipment lookup. Unknown room types are data, not errors.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RoomRecommendation {
    Recognized {
        room_type: RoomType,
        area_status: AreaStatus,
        /// Area message rendered against the canonical room name.
        message: String,
        /// Formatted equipment descriptions in catalog order.
        equipment: Vec<String>,
        layout_guidelines: Vec<String>,
    },
    Unrecognized {
        input: String,
        message: String,
        valid_types: Vec<String>,
    },
}

/// Result of an equipment compatibility check against a room's essentials.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RoomCompatibility {
    Analyzed {
        room_type: RoomType,
        /// Percentage of the essential set covered, rounded to two decimals.
        compatibility_score: f64,
        missing_equipment: Vec<String>,
        extra_equipment: Vec<String>,
    },
    Unrecognized {
        input: String,
        message: String,
        valid_types: Vec<String>,
    },
}

/// Resolve a free-form room description to a canonical room type.
///
/// Resolution order: exact case-insensitive canonical name, exact synonym
/// match, then bidirectional substring containment against synonyms. The
/// first catalog entry wins on ambiguous containment. Idempotent for any
/// input that resolves.
pub fn standardize_room_type(input: &str) -> Option<RoomType> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(room) = RoomType::ALL
        .iter()
        .find(|room| room.name().eq_ignore_ascii_case(&needle))
    {
        return Some(*room);
    }

    if let Some(room) = RoomType::ALL
        .iter()
        .find(|room| room.synonyms().contains(&needle.as_str()))
    {
        return Some(*room);
    }

    for room in RoomType::ALL {
        for synonym in room.synonyms() {
            if synonym.contains(&needle) || needle.contains(synonym) {
                return Some(room);
            }
        }
    }

    tracing::debug!(input, "room type did not resolve");
    None
}

fn unrecognized_message(input: &str) -> String {
    format!(
        "Room type \"{}\" not recognized. Available room types: {}",
        input,
        valid_room_type_names().join(", ")
    )
}

/// Canonical room names in catalog order.
pub fn valid_room_type_names() -> Vec<String> {
    RoomType::ALL.iter().map(|r| r.name().to_string()).collect()
}

/// Equipment recommendations for a room type, with optional area analysis.
///
/// Never fails: an unrecognized room type yields the valid alternatives.
pub fn get_equipment_recommendations(room_type: &str, area: Option<u32>) -> RoomRecommendation {
    let Some(room) = standardize_room_type(room_type) else {
        return RoomRecommendation::Unrecognized {
            input: room_type.to_string(),
            message: unrecognized_message(room_type),
            valid_types: valid_room_type_names(),
        };
    };

    let spec = room.spec();
    let area_status = AreaStatus::classify(area, spec);
    let message = area_status.message(room);

    RoomRecommendation::Recognized {
        room_type: room,
        area_status,
        message,
        equipment: spec.equipment.iter().map(EquipmentItem::describe).collect(),
        layout_guidelines: spec
            .layout_guidelines
            .iter()
            .map(|g| g.to_string())
            .collect(),
    }
}

/// Check a caller-supplied equipment list against a room's essential set.
///
/// The score is the percentage of essential items covered. Missing items are
/// reported in catalog order, extras in the caller's order.
pub fn analyze_room_compatibility(room_type: &str, equipment: &[String]) -> RoomCompatibility {
    let Some(room) = standardize_room_type(room_type) else {
        return RoomCompatibility::Unrecognized {
            input: room_type.to_string(),
            message: unrecognized_message(room_type),
            valid_types: valid_room_type_names(),
        };
    };

    let essentials = room.spec().essential_equipment;
    let covered = |name: &str| {
        equipment
            .iter()
            .any(|provided| provided.eq_ignore_ascii_case(name))
    };

    let missing_equipment: Vec<String> = essentials
        .iter()
        .filter(|name| !covered(name))
        .map(|name| name.to_string())
        .collect();
    let extra_equipment: Vec<String> = equipment
        .iter()
        .filter(|provided| {
            !essentials
                .iter()
                .any(|name| name.eq_ignore_ascii_case(provided))
        })
        .cloned()
        .collect();

    let matched = essentials.len() - missing_equipment.len();
    let score = matched as f64 / essentials.len() as f64 * 100.0;

    RoomCompatibility::Analyzed {
        room_type: room,
        compatibility_score: (score * 100.0).round() / 100.0,
        missing_equipment,
        extra_equipment,
    }
}

// ============================================================================
// Catalog data
// ============================================================================

static ICU_SPEC: RoomSpec = RoomSpec {
    min_area: 250,
    recommended_area: 400,
    equipment: &[
        EquipmentItem {
            name: "Patient Bed",
            specs: Some("Electric adjustable ICU bed with side rails"),
            dimensions: Some("7.5ft x 3.3ft"),
            placement: Some("Center of room, head against wall"),
            clearance: Some("4ft on all sides"),
            quantity: None,
        },
        EquipmentItem {
            name: "Patient Monitor",
            specs: Some("Multi-parameter vital signs monitor"),
            dimensions: Some("1.5ft x 1ft"),
            placement: Some("Wall-mounted at head of bed"),
            clearance: Some("1ft around monitor"),
            quantity: None,
        },
        EquipmentItem {
            name: "Ventilator",
            specs: Some("ICU-grade mechanical ventilator"),
            dimensions: Some("2ft x 2ft"),
            placement: Some("Right side of bed head"),
            clearance: Some("2ft for access"),
            quantity: None,
        },
        EquipmentItem {
            name: "Infusion Pumps",
            specs: Some("Multiple channel smart pumps"),
            dimensions: Some("1ft x 1ft each"),
            placement: Some("Left side of bed"),
            clearance: Some("1.5ft for access"),
            quantity: Some("3-4 units"),
        },
        EquipmentItem {
            name: "Supply Cart",
            specs: Some("Mobile medical supply cart"),
            dimensions: Some("3ft x 2ft"),
            placement: Some("Along wall, easy access"),
            clearance: Some("3ft in front"),
            quantity: None,
        },
        EquipmentItem {
            name: "Code Cart",
            specs: Some("Emergency resuscitation cart"),
            dimensions: Some("2.5ft x 2ft"),
            placement: Some("Near room entrance"),
            clearance: Some("4ft for emergency access"),
            quantity: None,
        },
    ],
    essential_equipment: &[
        "Patient Monitor",
        "Ventilator",
        "Infusion Pump",
        "Defibrillator",
        "Vital Signs Monitor",
    ],
    layout_guidelines: &[
        "Maintain 4ft clearance around bed for 360\u{b0} patient access",
        "Position bed to allow direct line of sight from nurse station",
        "Keep emergency equipment (code cart) near entrance for quick access",
        "Group infusion pumps and monitors on patient's left side",
        "Ensure adequate space for family seating area",
        "Maintain clear path to head of bed for emergency procedures",
    ],
};

static OPERATING_ROOM_SPEC: RoomSpec = RoomSpec {
    min_area: 400,
    recommended_area: 600,
    equipment: &[
        EquipmentItem {
            name: "Operating Table",
            specs: Some("Electric surgical table with articulation"),
            dimensions: Some("6.5ft x 2.5ft"),
            placement: Some("Center of room"),
            clearance: Some("6ft on all sides"),
            quantity: None,
        },
        EquipmentItem {
            name: "Surgical Lights",
            specs: Some("Dual-head LED surgical lights"),
            dimensions: Some("Ceiling mounted, 2ft diameter each"),
            placement: Some("Ceiling mounted over table"),
            clearance: Some("Height adjustable"),
            quantity: None,
        },
        EquipmentItem {
            name: "Anesthesia Machine",
            specs: Some("Complete anesthesia workstation"),
            dimensions: Some("2.5ft x 2.5ft"),
            placement: Some("At head of table"),
            clearance: Some("3ft for anesthesiologist"),
            quantity: None,
        },
        EquipmentItem {
            name: "Surgical Equipment Cart",
            specs: Some("Sterile instrument cart"),
            dimensions: Some("4ft x 2ft"),
            placement: Some("Right side of table"),
            clearance: Some("3ft for scrub nurse"),
            quantity: None,
        },
        EquipmentItem {
            name: "Imaging Equipment",
            specs: Some("Mobile C-arm X-ray unit"),
            dimensions: Some("6ft x 3ft when deployed"),
            placement: Some("Parked at foot of table when needed"),
            clearance: Some("5ft swing radius"),
            quantity: None,
        },
        EquipmentItem {
            name: "Supply Cabinets",
            specs: Some("Wall-mounted medical supply storage"),
            dimensions: Some("6ft x 2ft"),
            placement: Some("Along walls"),
            clearance: Some("4ft in front"),
            quantity: None,
        },
    ],
    essential_equipment: &[
        "Anesthesia Machine",
        "Surgical Table",
        "Surgical Lights",
        "Patient Monitor",
        "Electrosurgical Unit",
    ],
    layout_guidelines: &[
        "Position table to allow 360\u{b0} access with 6ft clearance",
        "Ensure adequate overhead lighting coverage",
        "Maintain sterile field boundaries",
        "Plan for equipment power and gas connections",
        "Allow space for mobile imaging equipment",
        "Create separate clean and dirty utility areas",
    ],
};

static EMERGENCY_ROOM_SPEC: RoomSpec = RoomSpec {
    min_area: 250,
    recommended_area: 350,
    equipment: &[
        EquipmentItem {
            name: "Trauma/Resuscitation Bed",
            specs: Some("Specialized emergency treatment bed with X-ray capability"),
            dimensions: Some("7ft x 3ft"),
            placement: Some("Center of room with 360\u{b0} access"),
            clearance: Some("5ft on all sides"),
            quantity: None,
        },
        EquipmentItem {
            name: "Defibrillator/Monitor",
            specs: Some("Combined defibrillator with multi-parameter vital signs monitoring"),
            dimensions: Some("1.5ft x 1.5ft"),
            placement: Some("Wall-mounted or on mobile stand at head of bed"),
            clearance: Some("2ft for quick access"),
            quantity: None,
        },
        EquipmentItem {
            name: "Crash Cart",
            specs: Some("Emergency medication and equipment cart"),
            dimensions: Some("3ft x 2ft"),
            placement: Some("Near head of bed"),
            clearance: Some("3ft for rapid access in emergencies"),
            quantity: None,
        },
        EquipmentItem {
            name: "Suction Equipment",
            specs: Some("Wall-mounted medical suction unit"),
            dimensions: Some("1ft x 1ft"),
            placement: Some("Wall-mounted at head of bed"),
            clearance: Some("1ft for access"),
            quantity: None,
        },
        EquipmentItem {
            name: "Oxygen Supply System",
            specs: Some("Medical gas outlets with flow regulators"),
            dimensions: Some("Wall-mounted system"),
            placement: Some("Head wall near bed"),
            clearance: Some("1.5ft for connections"),
            quantity: None,
        },
        EquipmentItem {
            name: "Supply Storage",
            specs: Some("Cabinets with immediate access supplies"),
            dimensions: Some("5ft x 2ft"),
            placement: Some("Along wall opposite to bed"),
            clearance: Some("3ft in front"),
            quantity: None,
        },
        EquipmentItem {
            name: "Mobile X-ray Unit",
            specs: Some("Portable diagnostic imaging equipment"),
            dimensions: Some("4ft x 2ft"),
            placement: Some("Parked in corner when not in use"),
            clearance: Some("Access pathway of 4ft"),
            quantity: None,
        },
    ],
    essential_equipment: &[
        "Patient Monitor",
        "Defibrillator",
        "ECG Machine",
        "Crash Cart",
        "Portable X-ray",
    ],
    layout_guidelines: &[
        "Central placement of bed with 360\u{b0} access for resuscitation efforts",
        "Critical equipment (defibrillator, suction) must be within arm's reach",
        "Maintain clear pathway from door to bed for rapid access",
        "Equipment organization must follow resuscitation protocols",
        "All monitoring equipment must be visible from main work area",
        "Ensure trauma team has adequate space to work (minimum 5-7 providers)",
        "Maintain separate clean and contaminated areas",
    ],
};

static PATIENT_ROOM_SPEC: RoomSpec = RoomSpec {
    min_area: 180,
    recommended_area: 200,
    equipment: &[
        item("Hospital Bed"),
        item("Patient Monitor"),
        item("Infusion Pump"),
        item("Over-bed Table"),
        item("Blood Pressure Monitor"),
    ],
    essential_equipment: &[
        "Hospital Bed",
        "Patient Monitor",
        "Infusion Pump",
        "Over-bed Table",
        "Blood Pressure Monitor",
    ],
    layout_guidelines: &[
        "Place bed against wall with window view if possible",
        "Position over-bed table on the dominant hand side",
        "Mount patient monitor on wall at head of bed",
        "Keep visitor seating away from medical equipment",
        "Ensure clear path to bathroom",
    ],
};

static LABORATORY_SPEC: RoomSpec = RoomSpec {
    min_area: 300,
    recommended_area: 400,
    equipment: &[
        item("Centrifuge"),
        item("Microscope"),
        item("Analyzer"),
        item("Refrigerator"),
        item("Lab Information System"),
    ],
    essential_equipment: &[
        "Centrifuge",
        "Microscope",
        "Analyzer",
        "Refrigerator",
        "Lab Information System",
    ],
    layout_guidelines: &[],
};

static RADIOLOGY_SPEC: RoomSpec = RoomSpec {
    min_area: 350,
    recommended_area: 450,
    equipment: &[
        item("X-ray Machine"),
        item("CT Scanner"),
        item("MRI Machine"),
        item("Ultrasound Machine"),
        item("PACS Workstation"),
    ],
    essential_equipment: &[
        "X-ray Machine",
        "CT Scanner",
        "MRI Machine",
        "Ultrasound Machine",
        "PACS Workstation",
    ],
    layout_guidelines: &[],
};

static PHARMACY_SPEC: RoomSpec = RoomSpec {
    min_area: 200,
    recommended_area: 300,
    equipment: &[
        item("Medicine Cabinet"),
        item("Refrigerator"),
        item("Laminar Flow Hood"),
        item("Pill Counter"),
        item("Label Printer"),
    ],
    essential_equipment: &[
        "Medicine Cabinet",
        "Refrigerator",
        "Laminar Flow Hood",
        "Pill Counter",
        "Label Printer",
    ],
    layout_guidelines: &[],
};

static PHYSICAL_THERAPY_SPEC: RoomSpec = RoomSpec {
    min_area: 400,
    recommended_area: 500,
    equipment: &[
        item("Treadmill"),
        item("Exercise Bike"),
        item("Parallel Bars"),
        item("Ultrasound Therapy"),
        item("TENS Unit"),
    ],
    essential_equipment: &[
        "Treadmill",
        "Exercise Bike",
        "Parallel Bars",
        "Ultrasound Therapy",
        "TENS Unit",
    ],
    layout_guidelines: &[],
};
