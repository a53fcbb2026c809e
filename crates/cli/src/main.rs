use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use equiplan_core::{
    analyze_room_compatibility, classify_query, get_equipment_details,
    get_equipment_recommendations, route_query, scoring, suggest_room_type, Demographics,
    PatientProfile, QueryOutcome, RoomCompatibility, RoomRecommendation,
};
use equiplan_types::Acuity;

mod projects;

#[derive(Parser)]
#[command(name = "equiplan")]
#[command(about = "Medical equipment planning assistant CLI")]
struct Cli {
    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a free-text question and route it to the right planner
    Ask {
        /// The question, e.g. "Help me plan an Operating Room layout"
        query: String,
    },
    /// Classify a query without running anything
    Classify {
        query: String,
    },
    /// Equipment recommendations for a room type
    Room {
        /// Room type, canonical name or synonym (e.g. "icu", "surgical suite")
        room_type: String,
        /// Floor area in square feet
        #[arg(long)]
        area: Option<u32>,
    },
    /// Check an equipment list against a room's essential set
    Compat {
        room_type: String,
        /// Equipment names, comma-separated
        equipment: String,
    },
    /// Patient-specific equipment recommendations
    Recommend {
        #[arg(long)]
        age: Option<u32>,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,
        /// Acuity level 1-5
        #[arg(long, default_value_t = 3)]
        acuity: u8,
        /// Medical condition, repeatable
        #[arg(long = "condition")]
        conditions: Vec<String>,
        /// Special clinical need, repeatable
        #[arg(long = "need")]
        needs: Vec<String>,
        /// Current treatment, repeatable
        #[arg(long = "treatment")]
        treatments: Vec<String>,
    },
    /// Specification details for one piece of equipment
    Equipment {
        name: String,
    },
    /// List the available projects
    Projects,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("equiplan=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::debug!(json = cli.json, "parsed command line");

    match cli.command {
        Commands::Ask { query } => {
            let outcome = route_query(&query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", render_outcome(&query, &outcome));
            }
        }
        Commands::Classify { query } => {
            let intent = classify_query(&query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&intent)?);
            } else {
                println!("{:?}", intent);
            }
        }
        Commands::Room { room_type, area } => {
            let rec = get_equipment_recommendations(&room_type, area);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                println!("{}", render_room_recommendation(&rec));
            }
        }
        Commands::Compat {
            room_type,
            equipment,
        } => {
            let provided: Vec<String> = equipment
                .split(',')
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect();
            let analysis = analyze_room_compatibility(&room_type, &provided);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", render_compatibility(&analysis));
            }
        }
        Commands::Recommend {
            age,
            weight,
            height,
            acuity,
            conditions,
            needs,
            treatments,
        } => {
            let acuity = Acuity::new(acuity).context("invalid acuity level")?;
            let profile = PatientProfile {
                demographics: Demographics {
                    age,
                    weight_kg: weight,
                    height_cm: height,
                },
                conditions,
                clinical_needs: needs,
                treatments,
                acuity,
            };
            let ranked = scoring::score(&profile);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                println!("{}", render_ranked(&profile, &ranked));
            }
        }
        Commands::Equipment { name } => {
            let details = get_equipment_details(&name);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                println!("{}: {}", details.name, details.description);
                if let Some(dimensions) = &details.dimensions {
                    println!("  Dimensions: {dimensions}");
                }
                if let Some(electrical) = &details.electrical {
                    println!("  Electrical: {electrical}");
                }
                if let Some(connectivity) = &details.connectivity {
                    println!("  Connectivity: {connectivity}");
                }
                if !details.features.is_empty() {
                    println!("  Features: {}", details.features.join(", "));
                }
                println!("  Placement: {}", details.placement);
            }
        }
        Commands::Projects => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&projects::PROJECTS.to_vec())?);
            } else {
                println!("{}", projects::format_project_list());
            }
        }
    }

    Ok(())
}

fn render_outcome(query: &str, outcome: &QueryOutcome) -> String {
    match outcome {
        QueryOutcome::PatientIntake => {
            "Personalized equipment recommendations need patient details. \
             Run `equiplan recommend` with the patient's conditions, age, and acuity level."
                .to_string()
        }
        QueryOutcome::RoomPlan(rec) => render_room_recommendation(rec),
        QueryOutcome::RoomPlanNeedsType { valid_types } => format!(
            "Which type of medical room are you planning? Available room types: {}. \
             You can also include the square footage if you know it.",
            valid_types.join(", ")
        ),
        QueryOutcome::ProjectOptions => projects::format_project_list(),
        QueryOutcome::ScopedProject { project_id } => render_scoped_project(query, *project_id),
        QueryOutcome::General => "To retrieve accurate results, include one of the following:\n\
             - a project id (e.g. project id 2)\n\
             - a request for all projects (e.g. \"Show results for all projects\")\n\
             - \"What project options can I view?\" for the full list"
            .to_string(),
    }
}

fn render_room_recommendation(rec: &RoomRecommendation) -> String {
    match rec {
        RoomRecommendation::Recognized {
            room_type,
            message,
            equipment,
            layout_guidelines,
            ..
        } => {
            let mut out = format!("Recommended equipment for your {room_type}:\n\n{message}\n\n");
            out.push_str("Recommended Equipment:\n");
            for (i, item) in equipment.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, item));
            }
            if !layout_guidelines.is_empty() {
                out.push_str("\nLayout Guidelines:\n");
                for guideline in layout_guidelines {
                    out.push_str(&format!("- {guideline}\n"));
                }
            }
            out
        }
        RoomRecommendation::Unrecognized { message, .. } => message.clone(),
    }
}

fn render_compatibility(analysis: &RoomCompatibility) -> String {
    match analysis {
        RoomCompatibility::Analyzed {
            room_type,
            compatibility_score,
            missing_equipment,
            extra_equipment,
        } => {
            let mut out = format!(
                "{room_type} compatibility: {compatibility_score:.2}% of essential equipment covered\n"
            );
            if !missing_equipment.is_empty() {
                out.push_str(&format!("Missing: {}\n", missing_equipment.join(", ")));
            }
            if !extra_equipment.is_empty() {
                out.push_str(&format!("Extra: {}\n", extra_equipment.join(", ")));
            }
            out
        }
        RoomCompatibility::Unrecognized { message, .. } => message.clone(),
    }
}

fn render_scoped_project(query: &str, project_id: u32) -> String {
    // A query naming a project by name answers with its id.
    if let Some(project) = projects::find_by_name(query) {
        return format!(
            "{} corresponds to project id {}.",
            project.name, project.id
        );
    }

    if project_id == 0 {
        return "Showing data across all projects in the system. \
                Use a project id (e.g. \"Show data for project id 2\") to filter."
            .to_string();
    }

    match projects::find_by_id(project_id) {
        Some(project) => format!(
            "Showing equipment data for project id {} ({}).",
            project.id, project.name
        ),
        None => {
            let valid_ids: Vec<String> = projects::PROJECTS
                .iter()
                .map(|p| p.id.to_string())
                .collect();
            format!(
                "No project with id {}. Available project ids: {}",
                project_id,
                valid_ids.join(", ")
            )
        }
    }
}

fn render_ranked(
    profile: &PatientProfile,
    ranked: &equiplan_core::RankedRecommendation,
) -> String {
    if ranked.recommendations.is_empty() {
        return "No equipment recommendations: no conditions, needs, or treatments matched the catalog."
            .to_string();
    }

    let mut out = format!(
        "Patient summary: {} condition(s), acuity {}/5\n\n",
        profile.conditions.len(),
        profile.acuity
    );
    for (i, item) in ranked.recommendations.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} (priority score {})\n",
            i + 1,
            item.name,
            item.priority_score
        ));
        for rationale in &item.rationales {
            out.push_str(&format!("   - {rationale}\n"));
        }
    }
    out.push_str(&format!(
        "\nRecommended room type: {}\n",
        suggest_room_type(profile)
    ));
    out
}
