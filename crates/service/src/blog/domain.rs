use serde::{Deserialize, Serialize};

use models::{blog, tag};

/// Create request. Missing text fields deserialize as empty and are rejected
/// by the service so the caller gets a readable validation message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, alias = "tags")]
    pub tag_list: Vec<String>,
}

/// Partial update; empty strings count as "not provided".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// API view of a blog: flat tag texts instead of tag rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

/// A stored blog with its tags in link order.
#[derive(Debug, Clone)]
pub struct BlogWithTags {
    pub blog: blog::Model,
    pub tags: Vec<tag::Model>,
}

impl BlogWithTags {
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.tag_description.clone()).collect()
    }
}

impl From<BlogWithTags> for BlogResponse {
    fn from(value: BlogWithTags) -> Self {
        let tag_list = value.tag_list();
        let b = value.blog;
        BlogResponse { slug: b.slug, title: b.title, description: b.description, body: b.body, tag_list }
    }
}

/// Blog row to insert; timestamps and id are assigned on save.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
}

/// How a requested tag text resolves against storage.
#[derive(Debug, Clone)]
pub enum TagRef {
    Existing(tag::Model),
    New(String),
}

impl TagRef {
    pub fn description(&self) -> &str {
        match self {
            TagRef::Existing(t) => &t.tag_description,
            TagRef::New(d) => d,
        }
    }
}

/// Column changes for an update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn tag_model(d: &str) -> tag::Model {
        let now = models::timestamps::now();
        tag::Model { id: Uuid::new_v4(), tag_description: d.into(), created_at: now, updated_at: now }
    }

    #[test]
    fn response_flattens_tags_in_order() {
        let now = models::timestamps::now();
        let bwt = BlogWithTags {
            blog: blog::Model {
                id: Uuid::new_v4(),
                slug: "title-1".into(),
                title: "title 1".into(),
                description: "description 1".into(),
                body: "body 1".into(),
                created_at: now,
                updated_at: now,
            },
            tags: vec![tag_model("IOS"), tag_model("Android")],
        };
        let resp = BlogResponse::from(bwt);
        assert_eq!(resp.slug, "title-1");
        assert_eq!(resp.tag_list, vec!["IOS", "Android"]);
    }

    #[test]
    fn response_serializes_camel_case() {
        let resp = BlogResponse {
            slug: "s".into(),
            title: "t".into(),
            description: "d".into(),
            body: "b".into(),
            tag_list: vec!["x".into()],
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["tagList"][0], "x");
        assert!(v.get("tag_list").is_none());
    }

    #[test]
    fn create_input_accepts_tags_alias_and_missing_fields() {
        let a: CreateBlogInput = serde_json::from_str(r#"{"title":"T","tags":["a"]}"#).unwrap();
        assert_eq!(a.tag_list, vec!["a"]);
        assert_eq!(a.description, "");
        let b: CreateBlogInput = serde_json::from_str(r#"{"title":"T","tagList":["b"]}"#).unwrap();
        assert_eq!(b.tag_list, vec!["b"]);
    }

    #[test]
    fn tag_ref_description() {
        assert_eq!(TagRef::New("n".into()).description(), "n");
        assert_eq!(TagRef::Existing(tag_model("e")).description(), "e");
    }
}
