use serde::{Deserialize, Deserializer, Serialize};

/// Note entity as stored in the `notes` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub content: String,
}

/// Request body for creating or updating a note
///
/// Missing or `null` fields bind as empty strings. An `id` sent in the body
/// is ignored; the path parameter is the only source of identity on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
