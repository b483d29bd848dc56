//! Exercise content bank and per-block exercise sampling.
//!
//! The [`ContentBank`] is an already-deserialized snapshot of exercises
//! organised as discipline → age group → block → names, with a side table
//! of video ids. [`sample_exercises`] draws a bounded random subset for one
//! block without touching the bank.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stride_content::{ContentBank, sample_exercises};
//!
//! let bank = ContentBank::from_json_str(
//!     r#"{"Sprint": {"7-9": {"1": ["Skipping", "Hopprep"]}}, "videos": {}}"#,
//! )
//! .unwrap();
//! let mut rng = StdRng::seed_from_u64(3);
//! let picked = sample_exercises(&bank, "Sprint", "7-9", 1, 3, &mut rng);
//! assert_eq!(picked.len(), 2);
//! ```

pub mod bank;
pub mod error;
pub(crate) mod sample;

pub use bank::{ContentBank, DEFAULT_AGE_GROUPS};
pub use error::ContentError;
pub use sample::sample_exercises;
