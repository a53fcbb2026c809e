//! Specification lookup for individual equipment items.
//!
//! A small allow-listed set of canonical items carries full specification
//! records; every other name resolves to a generic placeholder. The lookup is
//! total and never fails.

use serde::{Deserialize, Serialize};

/// Specification record for one piece of equipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDetails {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electrical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectivity: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    pub placement: String,
}

struct SpecRecord {
    name: &'static str,
    description: &'static str,
    dimensions: Option<&'static str>,
    electrical: Option<&'static str>,
    connectivity: Option<&'static str>,
    features: &'static [&'static str],
    placement: &'static str,
}

const EQUIPMENT_SPECS: &[SpecRecord] = &[
    SpecRecord {
        name: "Cardiac Monitor",
        description: "Continuous electrocardiographic monitoring device",
        dimensions: Some("12\" x 10\" x 6\""),
        electrical: Some("120V AC"),
        connectivity: Some("Wireless telemetry"),
        features: &["Arrhythmia detection", "ST segment analysis", "QT monitoring"],
        placement: "Wall mount or cart at head of bed, visible from door",
    },
    SpecRecord {
        name: "Ventilator",
        description: "Mechanical breathing support device",
        dimensions: Some("15\" x 15\" x 48\""),
        electrical: Some("120V AC, battery backup"),
        connectivity: Some("HL7 integration"),
        features: &["Volume/pressure modes", "PEEP", "Pressure support"],
        placement: "Right side of bed (for right-handed clinicians)",
    },
    SpecRecord {
        name: "IV Pump",
        description: "Precision intravenous fluid/medication delivery device",
        dimensions: Some("6\" x 8\" x 10\" per channel"),
        electrical: Some("120V AC, battery backup"),
        connectivity: Some("Wireless medication library updates"),
        features: &["Drug library", "Dose error reduction", "Multiple infusion modes"],
        placement: "IV pole, left side of bed",
    },
    SpecRecord {
        name: "Defibrillator",
        description: "Cardiac resuscitation device",
        dimensions: Some("12\" x 14\" x 8\""),
        electrical: Some("120V AC, battery powered"),
        connectivity: Some("Code event documentation"),
        features: &["Biphasic waveform", "AED mode", "Transcutaneous pacing"],
        placement: "Crash cart, accessible from all sides of patient",
    },
    SpecRecord {
        name: "Oxygen Delivery System",
        description: "Wall-mounted or portable oxygen source",
        dimensions: Some("Wall outlet or E-cylinder (4\" x 26\")"),
        electrical: None,
        connectivity: None,
        features: &["Flowmeter", "Humidification capability"],
        placement: "Head wall, left side",
    },
];

/// Look up the specification record for an equipment name.
///
/// Names outside the allow-list yield a generic placeholder record so the
/// caller always has something to render.
pub fn get_equipment_details(name: &str) -> EquipmentDetails {
    match EQUIPMENT_SPECS.iter().find(|record| record.name == name) {
        Some(record) => EquipmentDetails {
            name: record.name.to_string(),
            description: record.description.to_string(),
            dimensions: record.dimensions.map(str::to_string),
            electrical: record.electrical.map(str::to_string),
            connectivity: record.connectivity.map(str::to_string),
            features: record.features.iter().map(|f| f.to_string()).collect(),
            placement: record.placement.to_string(),
        },
        None => EquipmentDetails {
            name: name.to_string(),
            description: "Medical equipment".to_string(),
            dimensions: None,
            electrical: None,
            connectivity: None,
            features: Vec::new(),
            placement: "As per clinical need".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_listed_equipment_has_full_record() {
        let details = get_equipment_details("Ventilator");
        assert_eq!(details.description, "Mechanical breathing support device");
        assert_eq!(details.connectivity.as_deref(), Some("HL7 integration"));
        assert_eq!(details.features.len(), 3);
    }

    #[test]
    fn test_unknown_equipment_gets_placeholder() {
        let details = get_equipment_details("Quantum Flux Capacitor");
        assert_eq!(details.name, "Quantum Flux Capacitor");
        assert_eq!(details.description, "Medical equipment");
        assert_eq!(details.placement, "As per clinical need");
        assert!(details.features.is_empty());
    }

    #[test]
    fn test_lookup_is_exact_name_match() {
        // The allow-list matches canonical names exactly; a lowercase form
        // falls back to the placeholder.
        let details = get_equipment_details("ventilator");
        assert_eq!(details.description, "Medical equipment");
    }

    #[test]
    fn test_placeholder_serializes_without_empty_fields() {
        let json = serde_json::to_value(get_equipment_details("Gait Belt")).expect("serializable");
        assert!(json.get("dimensions").is_none());
        assert!(json.get("features").is_none());
        assert_eq!(json["placement"], "As per clinical need");
    }
}
