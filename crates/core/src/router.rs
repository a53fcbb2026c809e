//! Routes a classified query to the matching catalog operation.
//!
//! The router is the core-facing boundary the caller's shell talks to: one
//! query string in, one tagged outcome out. It holds no session state; the
//! caller owns the current-project context and decides how each outcome is
//! rendered.

use serde::Serialize;

use crate::classify::{classify_query, extract_project_id, extract_room_planning_info, Intent};
use crate::rooms::{get_equipment_recommendations, valid_room_type_names, RoomRecommendation};

/// Structured outcome of routing one query.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// The caller should collect a patient profile and run the scorer.
    PatientIntake,
    /// A room plan was produced.
    RoomPlan(RoomRecommendation),
    /// Room planning intent without a recognizable room type.
    RoomPlanNeedsType { valid_types: Vec<String> },
    /// The caller should list the available projects.
    ProjectOptions,
    /// Query scoped to one project; id 0 is the all-projects sentinel.
    ScopedProject { project_id: u32 },
    /// Nothing matched; the caller should show usage guidance.
    General,
}

/// Classify a query and run the operation its intent calls for.
pub fn route_query(query: &str) -> QueryOutcome {
    let intent = classify_query(query);
    tracing::debug!(?intent, "classified query");

    match intent {
        Intent::PatientRecommendations => QueryOutcome::PatientIntake,
        Intent::RoomPlanning => {
            let (room_type, area) = extract_room_planning_info(query);
            match room_type {
                Some(room) => {
                    QueryOutcome::RoomPlan(get_equipment_recommendations(room.name(), area))
                }
                None => QueryOutcome::RoomPlanNeedsType {
                    valid_types: valid_room_type_names(),
                },
            }
        }
        Intent::ProjectOptions => QueryOutcome::ProjectOptions,
        Intent::ScopedProject => QueryOutcome::ScopedProject {
            // Classification as ScopedProject implies an extractable id.
            project_id: extract_project_id(query).unwrap_or(0),
        },
        Intent::GeneralQuestion => QueryOutcome::General,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::{AreaStatus, RoomType};

    #[test]
    fn test_route_patient_query() {
        assert_eq!(
            route_query("I need patient-specific recommendations"),
            QueryOutcome::PatientIntake
        );
    }

    #[test]
    fn test_route_room_planning_with_area() {
        let outcome = route_query("What equipment goes in a 300 square feet Emergency Room?");
        match outcome {
            QueryOutcome::RoomPlan(RoomRecommendation::Recognized {
                room_type,
                area_status,
                ..
            }) => {
                assert_eq!(room_type, RoomType::EmergencyRoom);
                assert_eq!(
                    area_status,
                    AreaStatus::BelowRecommended {
                        area: 300,
                        recommended_area: 350
                    }
                );
            }
            other => panic!("expected room plan, got {other:?}"),
        }
    }

    #[test]
    fn test_route_room_planning_without_type_asks_for_one() {
        match route_query("help me plan a room") {
            QueryOutcome::RoomPlanNeedsType { valid_types } => {
                assert_eq!(valid_types.len(), 8);
            }
            other => panic!("expected type prompt, got {other:?}"),
        }
    }

    #[test]
    fn test_route_scoped_project() {
        assert_eq!(
            route_query("show equipment for project id 5"),
            QueryOutcome::ScopedProject { project_id: 5 }
        );
        assert_eq!(
            route_query("show data for all projects"),
            QueryOutcome::ScopedProject { project_id: 0 }
        );
    }

    #[test]
    fn test_route_project_options_and_fallback() {
        assert_eq!(route_query("What projects can I view?"), QueryOutcome::ProjectOptions);
        assert_eq!(route_query("good morning"), QueryOutcome::General);
    }
}
