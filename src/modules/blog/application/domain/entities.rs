use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Posts
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub image: String,
    pub excerpt: String,
    pub content: String,
    pub published_date: DateTime<Utc>,
    /// Denormalized: approved comments plus the most recent pending submission.
    pub comments_count: i32,
    pub updated_at: DateTime<Utc>,
}

/// Listing shape used by the home page and the related-posts strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlogPostCard {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub image: String,
    pub excerpt: String,
    pub published_date: DateTime<Utc>,
    pub comments_count: i32,
}

impl From<&BlogPost> for BlogPostCard {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            author: post.author.clone(),
            image: post.image.clone(),
            excerpt: post.excerpt.clone(),
            published_date: post.published_date,
            comments_count: post.comments_count,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Comments
// ──────────────────────────────────────────────────────────
//

/// Stored comment. Name and content are already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author_name: String,
    pub author_email: String,
    pub content: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// What readers see of a comment; the email address never leaves the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublicComment {
    pub id: Uuid,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for PublicComment {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            author_name: c.author_name,
            content: c.content,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CommentThread {
    pub comment: PublicComment,
    pub replies: Vec<PublicComment>,
}

/// Groups approved comments into top-level threads with their direct replies.
///
/// Input order is preserved within each level, so callers pass comments sorted
/// by `created_at` ascending. Replies whose parent is not itself top-level are
/// not rendered.
pub fn build_threads(comments: Vec<Comment>) -> Vec<CommentThread> {
    let (top_level, replies): (Vec<_>, Vec<_>) =
        comments.into_iter().partition(|c| c.parent_id.is_none());

    let mut replies_by_parent: HashMap<Uuid, Vec<PublicComment>> = HashMap::new();
    for reply in replies {
        if let Some(parent_id) = reply.parent_id {
            replies_by_parent
                .entry(parent_id)
                .or_default()
                .push(reply.into());
        }
    }

    top_level
        .into_iter()
        .map(|c| CommentThread {
            replies: replies_by_parent.remove(&c.id).unwrap_or_default(),
            comment: c.into(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatusFilter {
    #[default]
    Pending,
    Approved,
    All,
}

//
// ──────────────────────────────────────────────────────────
// Blog detail page
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogDetail {
    pub post: BlogPost,
    pub comments: Vec<CommentThread>,
    pub related_posts: Vec<BlogPostCard>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn comment(parent_id: Option<Uuid>, minutes: i64, content: &str) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            post_id: Uuid::nil(),
            parent_id,
            author_name: "Reader".to_string(),
            author_email: "reader@example.com".to_string(),
            content: content.to_string(),
            is_approved: true,
            created_at: Utc::now() + Duration::minutes(minutes),
        }
    }

    #[test]
    fn threads_keep_replies_under_their_parent_in_order() {
        let first = comment(None, 0, "first");
        let second = comment(None, 1, "second");
        let reply_a = comment(Some(first.id), 2, "reply a");
        let reply_b = comment(Some(first.id), 3, "reply b");

        let threads = build_threads(vec![
            first.clone(),
            second.clone(),
            reply_a.clone(),
            reply_b.clone(),
        ]);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].comment.id, first.id);
        assert_eq!(
            threads[0]
                .replies
                .iter()
                .map(|r| r.content.as_str())
                .collect::<Vec<_>>(),
            vec!["reply a", "reply b"]
        );
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn replies_to_missing_parents_are_dropped() {
        let orphan = comment(Some(Uuid::new_v4()), 0, "orphan");

        assert!(build_threads(vec![orphan]).is_empty());
    }

    #[test]
    fn public_comment_hides_email() {
        let json = serde_json::to_value(PublicComment::from(comment(None, 0, "hi"))).unwrap();

        assert!(json.get("author_email").is_none());
    }
}
