use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::models::segment::PlaceholderKind;

/// Read access to the now-playing session a label is bound to.
pub trait SessionDataProvider {
    fn artist(&self) -> &str;
    fn song_name(&self) -> &str;
    fn album_name(&self) -> &str;
    fn song_progress(&self) -> Duration;
    fn song_length(&self) -> Duration;
}

/// Observable session properties. A host forwards each change notification
/// to the renderer as one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionField {
    Artist,
    SongName,
    AlbumName,
    SongProgress,
    SongLength,
}

impl SessionField {
    /// Placeholder kinds whose text depends on this property.
    pub fn placeholders(self) -> &'static [PlaceholderKind] {
        match self {
            SessionField::Artist => &[PlaceholderKind::Artist],
            SessionField::SongName => &[PlaceholderKind::Song],
            SessionField::AlbumName => &[PlaceholderKind::Album],
            SessionField::SongProgress => {
                &[PlaceholderKind::CurrentTime, PlaceholderKind::Remaining]
            }
            SessionField::SongLength => &[PlaceholderKind::SongLength, PlaceholderKind::Remaining],
        }
    }
}

/// Owned copy of the session values.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub artist: String,
    pub song_name: String,
    pub album_name: String,
    #[serde(rename = "song_progress_ms", serialize_with = "serialize_millis")]
    pub song_progress: Duration,
    #[serde(rename = "song_length_ms", serialize_with = "serialize_millis")]
    pub song_length: Duration,
}

fn serialize_millis<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(value.as_millis() as u64)
}

// Times travel as milliseconds in JSON; every field is optional.
impl<'de> Deserialize<'de> for SessionSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            #[serde(default)]
            artist: String,
            #[serde(default)]
            song_name: String,
            #[serde(default)]
            album_name: String,
            #[serde(default)]
            song_progress_ms: u64,
            #[serde(default)]
            song_length_ms: u64,
        }

        let helper = Helper::deserialize(deserializer)?;

        Ok(SessionSnapshot {
            artist: helper.artist,
            song_name: helper.song_name,
            album_name: helper.album_name,
            song_progress: Duration::from_millis(helper.song_progress_ms),
            song_length: Duration::from_millis(helper.song_length_ms),
        })
    }
}

impl SessionSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading session file {:?}: {}", path, e))?;
        serde_json::from_str(&contents)
            .map_err(|e| format!("Error parsing session file {:?}: {}", path, e))
    }

    /// Copy every property from another provider.
    pub fn from_provider(provider: &dyn SessionDataProvider) -> Self {
        Self {
            artist: provider.artist().to_string(),
            song_name: provider.song_name().to_string(),
            album_name: provider.album_name().to_string(),
            song_progress: provider.song_progress(),
            song_length: provider.song_length(),
        }
    }
}

impl SessionDataProvider for SessionSnapshot {
    fn artist(&self) -> &str {
        &self.artist
    }

    fn song_name(&self) -> &str {
        &self.song_name
    }

    fn album_name(&self) -> &str {
        &self.album_name
    }

    fn song_progress(&self) -> Duration {
        self.song_progress
    }

    fn song_length(&self) -> Duration {
        self.song_length
    }
}

/// `m:ss` below one hour, `h:mm:ss` from one hour on.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
