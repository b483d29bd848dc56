//! Season plan assembly and export.
//!
//! [`generate`] ties the other crates together:
//!
//! ```mermaid
//! flowchart LR
//!     W[season window] --> H[holiday filter]
//!     H --> S[discipline per slot]
//!     S --> B[exercises per block]
//!     B --> P[SeasonPlan]
//!     P --> C[CSV / JSON]
//! ```
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`PlanRequest`] | Age group, training days and generation date |
//! | [`PlanConfig`] | Block sizes, spacing, disciplines, holidays, season bounds |
//! | [`generate`] | Builds a [`SeasonPlan`] |
//! | [`export`] | CSV rows, file name and JSON rendering |
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stride_calendar::TrainingDay;
//! use stride_content::ContentBank;
//! use stride_plan::{PlanConfig, PlanRequest, export, generate};
//!
//! let bank = ContentBank::new().with_activities("Häck", "10-12", 1, ["Häckgång"]);
//! let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
//! let request = PlanRequest::new("10-12", [TrainingDay::TUESDAY, TrainingDay::THURSDAY], today);
//! let mut rng = StdRng::seed_from_u64(42);
//! let plan = generate(&request, &bank, &PlanConfig::default(), &mut rng).unwrap();
//! assert_eq!(
//!     export::export_filename(&plan).as_deref(),
//!     Some("säsongsplan_v34_2025-v24_2026.csv")
//! );
//! ```

mod config;
mod error;
pub mod export;
mod generate;
mod model;

pub use config::{BLOCKS_PER_SESSION, EXERCISES_PER_BLOCK, PlanConfig, PlanRequest};
pub use error::PlanError;
pub use export::{ExportRow, export_filename, export_rows, to_csv_string, to_json, write_csv};
pub use generate::generate;
pub use model::{Block, SeasonPlan, Session};
