use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a post, always kept as a structured name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display form used on the wire: "first last", names kept verbatim.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a blog post.
///
/// `id` and `created` are assigned once by [`BlogPost::new`] and never
/// change afterwards; updates go through [`BlogPost::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated id and creation timestamp.
    pub fn new(title: String, author: Author, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            content,
            // Stored timestamps keep microsecond precision.
            created: Utc::now().trunc_subsecs(6),
        }
    }

    /// Apply a partial update in place. Only title, content and author
    /// can change.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author) = changes.author {
            if let Some(first_name) = author.first_name {
                self.author.first_name = first_name;
            }
            if let Some(last_name) = author.last_name {
                self.author.last_name = last_name;
            }
        }
    }
}

/// Partial author update. A missing half keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Fields of a post that an update may touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorChanges>,
}

impl PostChanges {
    /// True when applying these changes would touch nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self
                .author
                .as_ref()
                .is_none_or(|a| a.first_name.is_none() && a.last_name.is_none())
    }
}
