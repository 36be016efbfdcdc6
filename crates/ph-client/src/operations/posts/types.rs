use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A field of a Product Hunt post, as the remote schema names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostField {
    /// `id`
    Id,
    /// `name`
    Name,
    /// `createdAt`
    CreatedAt,
    /// `featuredAt`
    FeaturedAt,
    /// `url`
    Url,
    /// `tagline`
    Tagline,
    /// `description`
    Description,
}

impl PostField {
    /// Every field, in the order they are requested from Product Hunt
    pub const ALL: [PostField; 7] = [
        PostField::Id,
        PostField::Name,
        PostField::CreatedAt,
        PostField::FeaturedAt,
        PostField::Url,
        PostField::Tagline,
        PostField::Description,
    ];

    /// The name of this field in the remote schema
    pub const fn remote_name(self) -> &'static str {
        match self {
            PostField::Id => "id",
            PostField::Name => "name",
            PostField::CreatedAt => "createdAt",
            PostField::FeaturedAt => "featuredAt",
            PostField::Url => "url",
            PostField::Tagline => "tagline",
            PostField::Description => "description",
        }
    }
}

/// A post as returned by Product Hunt. Any field may be absent or null, and
/// values are kept as whatever JSON Product Hunt sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    /// The id of the post
    pub id: Option<Value>,
    /// The name of the product being featured
    pub name: Option<Value>,
    /// When the post was created
    pub created_at: Option<Value>,
    /// When the product was featured
    pub featured_at: Option<Value>,
    /// The url of the product being featured
    pub url: Option<Value>,
    /// The tagline of the product being featured
    pub tagline: Option<Value>,
    /// A description of the product being featured
    pub description: Option<Value>,
}

impl Post {
    /// Reads a single field of this post as text. Strings come back as-is,
    /// other JSON values in their JSON form. Absent and null fields are `None`.
    pub fn get(&self, field: PostField) -> Option<String> {
        let value = match field {
            PostField::Id => &self.id,
            PostField::Name => &self.name,
            PostField::CreatedAt => &self.created_at,
            PostField::FeaturedAt => &self.featured_at,
            PostField::Url => &self.url,
            PostField::Tagline => &self.tagline,
            PostField::Description => &self.description,
        };
        match value.as_ref()? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}
