//! # Equiplan Core
//!
//! Core business logic for the medical equipment planning assistant.
//!
//! This crate contains pure, synchronous computation over static knowledge
//! tables:
//! - Free-text query classification into planning intents
//! - Room-type standardization and per-room equipment recommendations
//! - Rule-based, acuity-weighted equipment scoring for patient profiles
//!
//! **No I/O concerns**: chat rendering, charts, 3D mockups, and data ingestion
//! belong to the caller. Every operation here is a total function over
//! caller-supplied input plus read-only catalogs; unrecognized input degrades
//! to informative defaults instead of failing.

pub mod classify;
pub mod equipment;
pub mod rooms;
pub mod router;
pub mod rules;
pub mod scoring;

pub use classify::{classify_query, extract_project_id, extract_room_planning_info, Intent};
pub use equipment::{get_equipment_details, EquipmentDetails};
pub use rooms::{
    analyze_room_compatibility, get_equipment_recommendations, standardize_room_type, AreaStatus,
    RoomCompatibility, RoomRecommendation, RoomType,
};
pub use router::{route_query, QueryOutcome};
pub use rules::{DemographicBucket, EquipmentRule, RuleCategory};
pub use scoring::{
    score, suggest_room_type, Demographics, PatientProfile, RankedRecommendation, ScoredEquipment,
};
