//! Menu Model

use serde::{Deserialize, Deserializer, Serialize};

/// Label used for items the CMS returned without a category
pub const UNCATEGORIZED_LABEL: &str = "その他";

/// Image descriptor attached to a menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Menu item entity (one record of the catalog `contents` list)
///
/// Items are immutable once fetched. Cart entries carry a full copy so a
/// stale entry keeps its name and price after the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in yen (smallest currency unit)
    #[serde(deserialize_with = "de_price")]
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MenuImage>,
    #[serde(
        default,
        deserialize_with = "de_category",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            comment: None,
            image: None,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>, width: u32, height: u32) -> Self {
        self.image = Some(MenuImage {
            url: url.into(),
            width,
            height,
        });
        self
    }

    /// Category label used for filtering (sentinel when absent)
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED_LABEL)
    }
}

/// List response returned by the catalog endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuListResponse {
    #[serde(default)]
    pub contents: Vec<MenuItem>,
    pub total_count: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// The CMS may send prices as numbers or numeric strings
fn de_price<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(u64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {s:?}"))),
    }
}

/// Select fields come back as `["label"]`, text fields as `"label"`
fn de_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCategory {
        Text(String),
        List(Vec<String>),
    }

    let raw = Option::<RawCategory>::deserialize(deserializer)?;
    let label = match raw {
        Some(RawCategory::Text(s)) => Some(s),
        Some(RawCategory::List(list)) => list.into_iter().next(),
        None => None,
    };
    Ok(label.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cms_payload() {
        let json = r#"{
            "contents": [
                {
                    "id": "ramen",
                    "createdAt": "2025-05-01T00:00:00.000Z",
                    "name": "醤油ラーメン",
                    "price": 850,
                    "comment": "定番",
                    "image": { "url": "https://images.example/ramen.png", "width": 640, "height": 480 },
                    "category": "麺類"
                },
                { "id": "gyoza", "name": "餃子", "price": "400", "category": ["一品"] },
                { "id": "water", "name": "お冷", "price": 0, "category": "" }
            ],
            "totalCount": 3,
            "offset": 0,
            "limit": 10
        }"#;

        let response: MenuListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.contents.len(), 3);
        assert_eq!(response.total_count, Some(3));

        let ramen = &response.contents[0];
        assert_eq!(ramen.price, 850);
        assert_eq!(ramen.category_label(), "麺類");
        assert_eq!(ramen.image.as_ref().map(|i| i.width), Some(640));

        let gyoza = &response.contents[1];
        assert_eq!(gyoza.price, 400);
        assert_eq!(gyoza.category.as_deref(), Some("一品"));

        let water = &response.contents[2];
        assert_eq!(water.category, None);
        assert_eq!(water.category_label(), UNCATEGORIZED_LABEL);
    }

    #[test]
    fn test_rejects_non_numeric_price() {
        let json = r#"{ "id": "x", "name": "X", "price": "free" }"#;
        assert!(serde_json::from_str::<MenuItem>(json).is_err());
    }

    #[test]
    fn test_missing_contents_is_empty() {
        let response: MenuListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.contents.is_empty());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let item = MenuItem::new("tea", "お茶", 200);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, serde_json::json!({ "id": "tea", "name": "お茶", "price": 200 }));
    }
}
