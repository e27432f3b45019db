//! Forum categories, posts, replies and engagement rows.

use chrono::{DateTime, Utc};

table_record! {
    /// A forum category; `forum_category_representative_id` is a slug.
    pub struct ForumCategory in "forum_categories" {
        forum_category_id: String => Text,
        forum_category_name: String => Text,
        forum_category_representative_id: String => Text,
        forum_category_description: String => Text,
        user_id: String => Text,
        forum_category_color_theme: String => Text,
        forum_category_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// A forum post, announcement or global announcement.
    ///
    /// Inactive posts carry a deactivation timestamp no earlier than their
    /// last activity.
    pub struct ForumPost in "forum_posts" {
        forum_post_id: String => Text,
        forum_post_name: String => Text,
        user_id: String => Text,
        forum_category_id: String => Text,
        forum_post_content: String => Text,
        forum_post_is_active: bool => Boolean,
        forum_post_created_timestamp: DateTime<Utc> => Timestamp,
        forum_post_last_active_timestamp: DateTime<Utc> => Timestamp,
        forum_post_is_category_based_announcement: bool => Boolean,
        forum_post_deactivated_timestamp: Option<DateTime<Utc>> => NullableTimestamp,
        forum_post_is_global_announcement: bool => Boolean,
    }
}

table_record! {
    /// A reply to a forum post.
    pub struct ForumPostReply in "forum_post_replies" {
        forum_post_reply_id: String => Text,
        forum_post_id: String => Text,
        user_id: String => Text,
        forum_post_reply_content: String => Text,
        forum_post_reply_created_timestamp: DateTime<Utc> => Timestamp,
    }
}

table_record! {
    /// A user having viewed a post.
    pub struct ForumPostView in "forum_post_views" {
        forum_post_id: String => Text,
        user_id: String => Text,
    }
}

table_record! {
    /// An up (`1`) or down (`-1`) vote on a post.
    pub struct ForumPostVote in "forum_post_votes" {
        forum_post_id: String => Text,
        user_id: String => Text,
        forum_post_vote_created_timestamp: DateTime<Utc> => Timestamp,
        forum_post_vote_increment: i32 => Integer,
    }
}

table_record! {
    /// An up (`1`) or down (`-1`) vote on a reply.
    pub struct ForumPostReplyVote in "forum_post_reply_votes" {
        forum_post_reply_id: String => Text,
        user_id: String => Text,
        forum_post_reply_vote_created_timestamp: DateTime<Utc> => Timestamp,
        forum_post_reply_vote_increment: i32 => Integer,
    }
}
