//! The exercise content bank.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ContentError;

/// Age groups used by the standard content bank.
pub const DEFAULT_AGE_GROUPS: [&str; 3] = ["7-9", "10-12", "13-15"];

/// Block number (as a string key) to ordered exercise names.
type Blocks = BTreeMap<String, Vec<String>>;

/// Age-group label to blocks.
type AgeGroups = BTreeMap<String, Blocks>;

/// Exercise names by discipline, age group and block, plus a side table
/// mapping exercise names to video ids.
///
/// The JSON layout is one object: the `"videos"` key holds the side table
/// and every other key is a discipline.
///
/// ```json
/// {
///   "Sprint": { "7-9": { "1": ["Skipping", "Hopprep"], "2": ["Starter"] } },
///   "videos": { "Skipping": "dQw4w9WgXcQ" }
/// }
/// ```
///
/// The bank is read-only to the planner; the `with_*` builders exist to
/// assemble banks in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBank {
    #[serde(default)]
    videos: BTreeMap<String, String>,
    #[serde(flatten)]
    disciplines: BTreeMap<String, AgeGroups>,
}

impl ContentBank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a bank from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] on malformed JSON or an unexpected
    /// shape.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json)
            .map(Self::loaded)
            .map_err(|e| ContentError::Parse {
                reason: e.to_string(),
            })
    }

    /// Parses a bank from a reader yielding JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] on malformed JSON, an unexpected
    /// shape, or a read failure.
    pub fn from_reader(reader: impl Read) -> Result<Self, ContentError> {
        serde_json::from_reader(reader)
            .map(Self::loaded)
            .map_err(|e| ContentError::Parse {
                reason: e.to_string(),
            })
    }

    fn loaded(self) -> Self {
        debug!(
            n_disciplines = self.disciplines.len(),
            n_videos = self.videos.len(),
            "content bank loaded"
        );
        self
    }

    /// Serializes the bank to pretty-printed JSON in the same layout it is
    /// read from.
    pub fn to_json_pretty(&self) -> Result<String, ContentError> {
        serde_json::to_string_pretty(self).map_err(|e| ContentError::Serialization {
            reason: e.to_string(),
        })
    }

    /// Adds exercises to one block, appending to any already present.
    pub fn with_activities<I, S>(
        mut self,
        discipline: &str,
        age_group: &str,
        block: u8,
        exercises: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disciplines
            .entry(discipline.to_string())
            .or_default()
            .entry(age_group.to_string())
            .or_default()
            .entry(block.to_string())
            .or_default()
            .extend(exercises.into_iter().map(Into::into));
        self
    }

    /// Sets the video id for an exercise.
    pub fn with_video(mut self, exercise: &str, video_id: &str) -> Self {
        self.videos
            .insert(exercise.to_string(), video_id.to_string());
        self
    }

    /// Returns the exercises stored at `discipline / age_group / block`.
    ///
    /// A missing discipline, age group or block yields an empty slice.
    pub fn activities(&self, discipline: &str, age_group: &str, block: u8) -> &[String] {
        self.disciplines
            .get(discipline)
            .and_then(|groups| groups.get(age_group))
            .and_then(|blocks| blocks.get(&block.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` if any of `disciplines` has an entry for `age_group`.
    ///
    /// Presence of the age group is what counts, even if its blocks are
    /// empty.
    pub fn has_age_group<'a>(
        &self,
        age_group: &str,
        disciplines: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        disciplines.into_iter().any(|d| {
            self.disciplines
                .get(d)
                .is_some_and(|groups| groups.contains_key(age_group))
        })
    }

    /// Returns the discipline names present in the bank.
    pub fn disciplines(&self) -> impl Iterator<Item = &str> {
        self.disciplines.keys().map(String::as_str)
    }

    /// Returns every age-group label used by any discipline.
    pub fn age_groups(&self) -> BTreeSet<&str> {
        self.disciplines
            .values()
            .flat_map(|groups| groups.keys().map(String::as_str))
            .collect()
    }

    /// Returns the video id for `exercise`. Empty ids count as missing.
    pub fn video_id(&self, exercise: &str) -> Option<&str> {
        self.videos
            .get(exercise)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Returns `true` if `exercise` has a video.
    pub fn has_video(&self, exercise: &str) -> bool {
        self.video_id(exercise).is_some()
    }
}
