//! Work and category domain models

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A named grouping for works
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A gallery item: an image with a title, filed under a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    /// The upload endpoint echoes the multipart field back, so this may
    /// arrive as a string
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    /// Absent from upload responses; filled from the known categories
    #[serde(default)]
    pub category: Option<Category>,
}

impl Work {
    pub fn new(id: u32, title: impl Into<String>, image_url: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            title: title.into(),
            image_url: image_url.into(),
            category_id: Some(category.id),
            user_id: None,
            category: Some(category),
        }
    }

    /// Category id, from `categoryId` or the nested category
    pub fn category_id(&self) -> Option<u32> {
        self.category_id
            .or_else(|| self.category.as_ref().map(|c| c.id))
    }

    /// Category name, if the nested category is known
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

/// Deserialize an optional id that can be a number or a numeric string
fn deserialize_optional_id<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<JsonValue> = Option::deserialize(deserializer)?;
    match value {
        Some(JsonValue::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid id: {}", n))),
        Some(JsonValue::String(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid id '{}': {}", s, e))),
        Some(JsonValue::Null) | None => Ok(None),
        _ => Err(D::Error::custom("expected number or string for id")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_from_list_response() {
        let json = r#"{
            "id": 1,
            "title": "Abajour Tahina",
            "imageUrl": "http://localhost:5678/images/abajour-tahina.png",
            "categoryId": 1,
            "userId": 1,
            "category": { "id": 1, "name": "Objets" }
        }"#;

        let work: Work = serde_json::from_str(json).unwrap();
        assert_eq!(work.id, 1);
        assert_eq!(work.image_url, "http://localhost:5678/images/abajour-tahina.png");
        assert_eq!(work.category_id(), Some(1));
        assert_eq!(work.category_name(), Some("Objets"));
    }

    #[test]
    fn test_work_from_upload_response_with_string_category() {
        let json = r#"{
            "id": 12,
            "title": "Villa",
            "imageUrl": "http://localhost:5678/images/villa.jpg",
            "categoryId": "2",
            "userId": 1
        }"#;

        let work: Work = serde_json::from_str(json).unwrap();
        assert_eq!(work.category_id(), Some(2));
        assert!(work.category.is_none());
        assert!(work.category_name().is_none());
    }

    #[test]
    fn test_category_id_falls_back_to_nested_category() {
        let json = r#"{
            "id": 3,
            "title": "Hotel",
            "imageUrl": "x.png",
            "category": { "id": 3, "name": "Hotels & restaurants" }
        }"#;

        let work: Work = serde_json::from_str(json).unwrap();
        assert_eq!(work.category_id, None);
        assert_eq!(work.category_id(), Some(3));
    }

    #[test]
    fn test_reject_non_numeric_category_id() {
        let json = r#"{ "id": 3, "title": "x", "imageUrl": "x.png", "categoryId": "abc" }"#;
        assert!(serde_json::from_str::<Work>(json).is_err());
    }
}
