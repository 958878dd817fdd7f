//! Book model and related request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Length of generated book ids
pub const BOOK_ID_LEN: usize = 16;

/// Bookshelf record
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Server-generated 16-character token
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// Always `read_page == page_count`
    pub finished: bool,
    pub reading: bool,
    #[serde(serialize_with = "iso_millis::serialize")]
    #[schema(value_type = String, format = DateTime)]
    pub inserted_at: DateTime<Utc>,
    #[serde(serialize_with = "iso_millis::serialize")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from a validated payload. Both timestamps are set to `now`.
    pub fn new(id: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        let mut book = Self {
            id,
            name: String::new(),
            year: None,
            author: None,
            summary: None,
            publisher: None,
            page_count: 0,
            read_page: 0,
            finished: false,
            reading: false,
            inserted_at: now,
            updated_at: now,
        };
        book.apply(payload, now);
        book
    }

    /// Replace every client-supplied field, refresh `updated_at` and re-derive `finished`.
    /// `id` and `inserted_at` are left untouched.
    pub fn apply(&mut self, payload: BookPayload, now: DateTime<Utc>) {
        self.name = payload.name.unwrap_or_default();
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.reading = payload.reading;
        self.finished = self.read_page == self.page_count;
        self.updated_at = now;
    }

    /// Reduced view used by list responses
    pub fn summary_view(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Create / update request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Required, must not be empty
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    /// Must not exceed `pageCount`
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

impl BookPayload {
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }
}

/// Projection returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

/// Query parameters for listing books
#[derive(Debug, Clone, Default, IntoParams)]
pub struct BookQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// `1` keeps books being read, any other value keeps the rest
    pub reading: Option<String>,
    /// `1` keeps finished books, any other value keeps the rest
    pub finished: Option<String>,
}

impl BookQuery {
    /// Build the filters from raw query pairs. A repeated key is joined with
    /// `,` (so `reading=1&reading=0` becomes `"1,0"`); unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            match slot {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value),
            }
        }
        query
    }

    pub fn reading_filter(&self) -> Option<bool> {
        flag_filter(self.reading.as_deref())
    }

    pub fn finished_filter(&self) -> Option<bool> {
        flag_filter(self.finished.as_deref())
    }

    /// Lowercased name needle, if any
    pub fn name_filter(&self) -> Option<String> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
    }
}

/// Tri-state flag coercion: absent or empty means no filter, exactly `"1"` means
/// true, anything else (including `"true"`) means false.
pub fn flag_filter(value: Option<&str>) -> Option<bool> {
    match value {
        None | Some("") => None,
        Some(v) => Some(v == "1"),
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
