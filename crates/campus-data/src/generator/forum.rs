//! Forum category, post, reply and engagement generation.
//!
//! Posts are generated first with provisional activity timestamps. Reply
//! generation then back-patches each post so that its last activity is its
//! latest reply and inactive posts are deactivated shortly afterwards.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::content::{generate_markdown_content, generate_plain_content, generate_short_blockquote};
use crate::error::GenerationError;
use crate::faker::Faker;
use crate::generator::pick_parent;
use crate::records::{
    ForumCategory, ForumPost, ForumPostReply, ForumPostReplyVote, ForumPostView, ForumPostVote,
    Role, User,
};
use crate::slug::slugify;

/// Representative ID of the category holding global announcements.
pub const GLOBAL_ANNOUNCEMENT_CATEGORY: &str = "global-announcements";

/// How far back post creation timestamps reach.
const POST_HISTORY_YEARS: u32 = 8;

/// Sentences in an ordinary post body.
const POST_BODY_SENTENCES: usize = 30;

const CATEGORIES: [(&str, &str); 6] = [
    ("Help", "Get help from your lovely friends."),
    ("Advertisements", "For anyone looking to sell stuff."),
    (
        "Uncategorized",
        "For anything that has not found its place yet.",
    ),
    ("Memes", "Meme related content."),
    ("Homeworks", "Section for the hopeless."),
    (
        "Global Announcements",
        "University-wide announcements for everyone.",
    ),
];

/// Generate the fixed forum categories, each authored by a random admin.
///
/// # Errors
///
/// Returns [`GenerationError::MissingParentRecords`] when `users` holds no
/// admins.
pub fn generate_forum_categories(
    faker: &mut Faker,
    users: &[User],
) -> Result<Vec<ForumCategory>, GenerationError> {
    let admins: Vec<&User> = users
        .iter()
        .filter(|user| user.user_role == Role::Admin)
        .collect();
    let mut categories = Vec::with_capacity(CATEGORIES.len());
    for (name, description) in CATEGORIES {
        let author = pick_parent(faker, &admins, "forum_categories", "admin users")?;
        categories.push(ForumCategory {
            forum_category_id: faker.id(),
            forum_category_name: name.to_owned(),
            forum_category_representative_id: slugify(name),
            forum_category_description: description.to_owned(),
            user_id: author.user_id.clone(),
            forum_category_color_theme: faker.hex_color(),
            forum_category_created_timestamp: faker.past_years(10),
        });
    }
    Ok(categories)
}

/// Volumes for [`generate_forum_posts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostVolumes {
    /// Ordinary posts.
    pub ordinary: usize,
    /// Deactivated category-based announcements.
    pub deactivated_category_announcements: usize,
    /// Deactivated global announcements.
    pub deactivated_global_announcements: usize,
}

/// Generate ordinary posts, category announcements and global announcements,
/// in that order.
///
/// # Errors
///
/// Returns [`GenerationError::MissingParentRecords`] when users or
/// categories are empty, and
/// [`GenerationError::MissingGlobalAnnouncementCategory`] when no category is
/// slugged [`GLOBAL_ANNOUNCEMENT_CATEGORY`].
pub fn generate_forum_posts(
    faker: &mut Faker,
    users: &[User],
    categories: &[ForumCategory],
    volumes: PostVolumes,
) -> Result<Vec<ForumPost>, GenerationError> {
    let mut posts = generate_ordinary_posts(faker, users, categories, volumes.ordinary)?;
    posts.extend(generate_category_announcements(
        faker,
        users,
        categories,
        volumes.deactivated_category_announcements,
    )?);
    posts.extend(generate_global_announcements(
        faker,
        users,
        categories,
        volumes.deactivated_global_announcements,
    )?);
    Ok(posts)
}

struct PostDraft<'a> {
    author: &'a User,
    category: &'a ForumCategory,
    content: String,
    is_active: bool,
    created: DateTime<Utc>,
    last_active: DateTime<Utc>,
    deactivated: Option<DateTime<Utc>>,
    is_category_announcement: bool,
    is_global_announcement: bool,
}

impl PostDraft<'_> {
    fn finish(self, faker: &mut Faker) -> ForumPost {
        ForumPost {
            forum_post_id: faker.id(),
            forum_post_name: faker.catch_phrase(),
            user_id: self.author.user_id.clone(),
            forum_category_id: self.category.forum_category_id.clone(),
            forum_post_content: self.content,
            forum_post_is_active: self.is_active,
            forum_post_created_timestamp: self.created,
            forum_post_last_active_timestamp: self.last_active,
            forum_post_is_category_based_announcement: self.is_category_announcement,
            forum_post_deactivated_timestamp: self.deactivated,
            forum_post_is_global_announcement: self.is_global_announcement,
        }
    }
}

/// Generate `count` ordinary posts in random categories.
///
/// About half are inactive and carry a deactivation timestamp equal to their
/// provisional last activity.
///
/// # Errors
///
/// Returns [`GenerationError::MissingParentRecords`] when users or
/// categories are empty.
pub fn generate_ordinary_posts(
    faker: &mut Faker,
    users: &[User],
    categories: &[ForumCategory],
    count: usize,
) -> Result<Vec<ForumPost>, GenerationError> {
    let mut posts = Vec::new();
    for _ in 0..count {
        let author = pick_parent(faker, users, "forum_posts", "users")?;
        let category = pick_parent(faker, categories, "forum_posts", "forum_categories")?;
        let created = faker.past_years(POST_HISTORY_YEARS);
        let is_active = faker.boolean();
        let last_active = faker.between(created, faker.now());
        let draft = PostDraft {
            author,
            category,
            content: generate_plain_content(faker, POST_BODY_SENTENCES),
            is_active,
            created,
            last_active,
            deactivated: (!is_active).then_some(last_active),
            is_category_announcement: false,
            is_global_announcement: false,
        };
        posts.push(draft.finish(faker));
    }
    Ok(posts)
}

/// Generate category-scoped announcements.
///
/// `deactivated_count` deactivated announcements land in random categories,
/// followed by one to five active announcements in every category.
///
/// # Errors
///
/// Returns [`GenerationError::MissingParentRecords`] when users or
/// categories are empty.
pub fn generate_category_announcements(
    faker: &mut Faker,
    users: &[User],
    categories: &[ForumCategory],
    deactivated_count: usize,
) -> Result<Vec<ForumPost>, GenerationError> {
    let mut posts = Vec::new();
    for _ in 0..deactivated_count {
        let author = pick_parent(faker, users, "forum_posts", "users")?;
        let category = pick_parent(faker, categories, "forum_posts", "forum_categories")?;
        let created = faker.past_years(POST_HISTORY_YEARS);
        let deactivated = faker.between(created, faker.now());
        let draft = PostDraft {
            author,
            category,
            content: generate_markdown_content(faker),
            is_active: false,
            created,
            last_active: created,
            deactivated: Some(deactivated),
            is_category_announcement: true,
            is_global_announcement: false,
        };
        posts.push(draft.finish(faker));
    }
    for category in categories {
        for _ in 0..faker.number(1, 5) {
            let author = pick_parent(faker, users, "forum_posts", "users")?;
            let created = faker.past_years(POST_HISTORY_YEARS);
            let draft = PostDraft {
                author,
                category,
                content: generate_markdown_content(faker),
                is_active: true,
                created,
                last_active: created,
                deactivated: None,
                is_category_announcement: true,
                is_global_announcement: false,
            };
            posts.push(draft.finish(faker));
        }
    }
    Ok(posts)
}

/// Generate global announcements in the [`GLOBAL_ANNOUNCEMENT_CATEGORY`].
///
/// `deactivated_count` deactivated announcements, each active for up to a
/// year, are followed by one to five active ones.
///
/// # Errors
///
/// Returns [`GenerationError::MissingGlobalAnnouncementCategory`] when the
/// category is absent and [`GenerationError::MissingParentRecords`] when
/// users are empty.
pub fn generate_global_announcements(
    faker: &mut Faker,
    users: &[User],
    categories: &[ForumCategory],
    deactivated_count: usize,
) -> Result<Vec<ForumPost>, GenerationError> {
    let category = categories
        .iter()
        .find(|category| category.forum_category_representative_id == GLOBAL_ANNOUNCEMENT_CATEGORY)
        .ok_or_else(|| GenerationError::MissingGlobalAnnouncementCategory {
            representative_id: GLOBAL_ANNOUNCEMENT_CATEGORY.to_owned(),
        })?;

    let mut posts = Vec::new();
    for _ in 0..deactivated_count {
        let author = pick_parent(faker, users, "forum_posts", "users")?;
        let created = faker.past_years(POST_HISTORY_YEARS);
        let horizon = created + TimeDelta::days(365);
        let last_active = faker.between(created, horizon);
        let draft = PostDraft {
            author,
            category,
            content: generate_markdown_content(faker),
            is_active: false,
            created,
            last_active,
            deactivated: Some(last_active),
            is_category_announcement: false,
            is_global_announcement: true,
        };
        posts.push(draft.finish(faker));
    }
    for _ in 0..faker.number(1, 5) {
        let author = pick_parent(faker, users, "forum_posts", "users")?;
        let created = faker.past_years(POST_HISTORY_YEARS);
        let draft = PostDraft {
            author,
            category,
            content: generate_markdown_content(faker),
            is_active: true,
            created,
            last_active: created,
            deactivated: None,
            is_category_announcement: false,
            is_global_announcement: true,
        };
        posts.push(draft.finish(faker));
    }
    Ok(posts)
}

/// Generate replies for every post and back-patch post activity.
///
/// Each post receives one reply from each of 2 to 10 distinct sampled users,
/// timestamped between the post's creation and the reference time. The posts
/// are then updated through [`backpatch_post_activity`].
pub fn generate_forum_post_replies(
    faker: &mut Faker,
    users: &[User],
    posts: &mut [ForumPost],
) -> Vec<ForumPostReply> {
    let mut replies = Vec::new();
    for post in posts.iter() {
        for author in faker.sample(users, 2, 10) {
            let created = faker.between(post.forum_post_created_timestamp, faker.now());
            replies.push(ForumPostReply {
                forum_post_reply_id: faker.id(),
                forum_post_id: post.forum_post_id.clone(),
                user_id: author.user_id.clone(),
                forum_post_reply_content: generate_short_blockquote(faker),
                forum_post_reply_created_timestamp: created,
            });
        }
    }
    backpatch_post_activity(faker, posts, &replies);
    replies
}

/// Align post activity timestamps with their replies.
///
/// A post's last activity becomes its latest reply, or its creation time
/// when it has none; among equal timestamps the first reply wins. Inactive
/// posts are deactivated between one minute and one day after that, capped
/// at the reference time.
pub fn backpatch_post_activity(
    faker: &mut Faker,
    posts: &mut [ForumPost],
    replies: &[ForumPostReply],
) {
    let mut latest: HashMap<&str, DateTime<Utc>> = HashMap::new();
    for reply in replies {
        latest
            .entry(reply.forum_post_id.as_str())
            .and_modify(|current| {
                if reply.forum_post_reply_created_timestamp > *current {
                    *current = reply.forum_post_reply_created_timestamp;
                }
            })
            .or_insert(reply.forum_post_reply_created_timestamp);
    }

    for post in posts.iter_mut() {
        let last_active = latest
            .get(post.forum_post_id.as_str())
            .copied()
            .unwrap_or(post.forum_post_created_timestamp);
        post.forum_post_last_active_timestamp = last_active;
        post.forum_post_deactivated_timestamp = if post.forum_post_is_active {
            None
        } else {
            // Never past the reference time, never before last activity.
            let latest_offset = (last_active + TimeDelta::days(1))
                .min(faker.now())
                .max(last_active);
            let earliest = (last_active + TimeDelta::minutes(1)).min(latest_offset);
            Some(faker.between(earliest, latest_offset))
        };
    }
}

/// Generate 20 to 50 views per post from distinct sampled users.
pub fn generate_forum_post_views(
    faker: &mut Faker,
    users: &[User],
    posts: &[ForumPost],
) -> Vec<ForumPostView> {
    let mut views = Vec::new();
    for post in posts {
        for viewer in faker.sample(users, 20, 50) {
            views.push(ForumPostView {
                forum_post_id: post.forum_post_id.clone(),
                user_id: viewer.user_id.clone(),
            });
        }
    }
    views
}

/// Generate 2 to 5 votes per post from users who viewed it.
///
/// Votes fall between the post's creation and its deactivation, or the
/// reference time for active posts.
pub fn generate_forum_post_votes(
    faker: &mut Faker,
    posts: &[ForumPost],
    views: &[ForumPostView],
) -> Vec<ForumPostVote> {
    let mut viewers: HashMap<&str, Vec<&ForumPostView>> = HashMap::new();
    for view in views {
        viewers
            .entry(view.forum_post_id.as_str())
            .or_default()
            .push(view);
    }

    let mut votes = Vec::new();
    for post in posts {
        let Some(post_viewers) = viewers.get(post.forum_post_id.as_str()) else {
            continue;
        };
        let closes = post
            .forum_post_deactivated_timestamp
            .filter(|_| !post.forum_post_is_active)
            .unwrap_or_else(|| faker.now());
        for view in faker.sample(post_viewers, 2, 5) {
            votes.push(ForumPostVote {
                forum_post_id: post.forum_post_id.clone(),
                user_id: view.user_id.clone(),
                forum_post_vote_created_timestamp: faker
                    .between(post.forum_post_created_timestamp, closes),
                forum_post_vote_increment: faker.vote_increment(),
            });
        }
    }
    votes
}

/// Generate 2 to 5 votes per reply from distinct sampled users.
pub fn generate_forum_post_reply_votes(
    faker: &mut Faker,
    users: &[User],
    replies: &[ForumPostReply],
) -> Vec<ForumPostReplyVote> {
    let mut votes = Vec::new();
    for reply in replies {
        for voter in faker.sample(users, 2, 5) {
            votes.push(ForumPostReplyVote {
                forum_post_reply_id: reply.forum_post_reply_id.clone(),
                user_id: voter.user_id.clone(),
                forum_post_reply_vote_created_timestamp: faker
                    .between(reply.forum_post_reply_created_timestamp, faker.now()),
                forum_post_reply_vote_increment: faker.vote_increment(),
            });
        }
    }
    votes
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::generator::people::{generate_admins, generate_professors};
    use crate::slug::is_valid_slug;

    struct Forum {
        faker: Faker,
        users: Vec<User>,
        categories: Vec<ForumCategory>,
    }

    #[fixture]
    fn forum() -> Forum {
        let now = Utc
            .with_ymd_and_hms(2024, 6, 1, 0, 0, 0)
            .single()
            .expect("valid time");
        let mut faker = Faker::from_seed(53, now, 32);
        let mut users = generate_admins(&mut faker, 10);
        users.extend(
            generate_professors(&mut faker, 50)
                .into_iter()
                .map(|(user, _)| user),
        );
        let categories = generate_forum_categories(&mut faker, &users).expect("admins exist");
        Forum {
            faker,
            users,
            categories,
        }
    }

    fn in_category(post: &ForumPost, category: &ForumCategory) -> bool {
        post.forum_category_id == category.forum_category_id
    }

    fn volumes(ordinary: usize) -> PostVolumes {
        PostVolumes {
            ordinary,
            deactivated_category_announcements: 5,
            deactivated_global_announcements: 5,
        }
    }

    #[rstest]
    fn categories_are_fixed_and_slugged(forum: Forum) {
        let slugs: Vec<&str> = forum
            .categories
            .iter()
            .map(|category| category.forum_category_representative_id.as_str())
            .collect();

        assert_eq!(
            slugs,
            [
                "help",
                "advertisements",
                "uncategorized",
                "memes",
                "homeworks",
                GLOBAL_ANNOUNCEMENT_CATEGORY,
            ]
        );
        for category in &forum.categories {
            assert!(is_valid_slug(&category.forum_category_representative_id));
            assert!(category.forum_category_color_theme.starts_with('#'));
            let author = forum
                .users
                .iter()
                .find(|user| user.user_id == category.user_id)
                .expect("author exists");
            assert_eq!(author.user_role, Role::Admin);
        }
    }

    #[rstest]
    fn categories_require_admins(mut forum: Forum) {
        let professors: Vec<User> = forum
            .users
            .into_iter()
            .filter(|user| user.user_role == Role::Professor)
            .collect();

        assert_eq!(
            generate_forum_categories(&mut forum.faker, &professors),
            Err(GenerationError::MissingParentRecords {
                table: "forum_categories",
                parent: "admin users"
            })
        );
    }

    #[rstest]
    fn global_announcements_need_their_category(mut forum: Forum) {
        let without_global: Vec<ForumCategory> = forum
            .categories
            .into_iter()
            .filter(|category| {
                category.forum_category_representative_id != GLOBAL_ANNOUNCEMENT_CATEGORY
            })
            .collect();

        assert_eq!(
            generate_forum_posts(&mut forum.faker, &forum.users, &without_global, volumes(3)),
            Err(GenerationError::MissingGlobalAnnouncementCategory {
                representative_id: GLOBAL_ANNOUNCEMENT_CATEGORY.to_owned()
            })
        );
    }

    #[rstest]
    fn post_kinds_follow_their_rules(mut forum: Forum) {
        let posts =
            generate_forum_posts(&mut forum.faker, &forum.users, &forum.categories, volumes(20))
                .expect("generated");

        let ordinary = posts
            .iter()
            .filter(|post| {
                !post.forum_post_is_category_based_announcement
                    && !post.forum_post_is_global_announcement
            })
            .count();
        assert_eq!(ordinary, 20);

        for category in &forum.categories {
            let active = posts
                .iter()
                .filter(|post| {
                    post.forum_post_is_category_based_announcement
                        && post.forum_post_is_active
                        && in_category(post, category)
                })
                .count();
            assert!((1..=5).contains(&active));
        }

        let global = forum
            .categories
            .iter()
            .find(|category| {
                category.forum_category_representative_id == GLOBAL_ANNOUNCEMENT_CATEGORY
            })
            .expect("global category");
        for post in posts.iter().filter(|post| post.forum_post_is_global_announcement) {
            assert!(in_category(post, global));
        }
        for post in &posts {
            assert_eq!(
                post.forum_post_deactivated_timestamp.is_some(),
                !post.forum_post_is_active
            );
            assert!(!post.forum_post_name.is_empty());
        }
    }

    #[rstest]
    fn replies_drive_post_activity(mut forum: Forum) {
        let mut posts =
            generate_forum_posts(&mut forum.faker, &forum.users, &forum.categories, volumes(30))
                .expect("generated");
        let replies = generate_forum_post_replies(&mut forum.faker, &forum.users, &mut posts);

        for post in &posts {
            let post_replies: Vec<&ForumPostReply> = replies
                .iter()
                .filter(|reply| reply.forum_post_id == post.forum_post_id)
                .collect();
            assert!((2..=10).contains(&post_replies.len()));
            let authors: HashSet<&str> = post_replies
                .iter()
                .map(|reply| reply.user_id.as_str())
                .collect();
            assert_eq!(authors.len(), post_replies.len());

            let latest = post_replies
                .iter()
                .map(|reply| reply.forum_post_reply_created_timestamp)
                .max()
                .expect("replies exist");
            assert_eq!(post.forum_post_last_active_timestamp, latest);
            if let Some(deactivated) = post.forum_post_deactivated_timestamp {
                assert!(!post.forum_post_is_active);
                assert!(deactivated >= post.forum_post_last_active_timestamp);
            }
        }
    }

    #[rstest]
    fn backpatch_handles_posts_without_replies(mut forum: Forum) {
        let mut posts = generate_ordinary_posts(&mut forum.faker, &forum.users, &forum.categories, 10)
            .expect("generated");
        backpatch_post_activity(&mut forum.faker, &mut posts, &[]);

        for post in &posts {
            assert_eq!(
                post.forum_post_last_active_timestamp,
                post.forum_post_created_timestamp
            );
            if let Some(deactivated) = post.forum_post_deactivated_timestamp {
                let gap = deactivated - post.forum_post_last_active_timestamp;
                assert!(gap >= TimeDelta::minutes(1) || deactivated == forum.faker.now());
                assert!(gap <= TimeDelta::days(1));
            }
        }
    }

    #[rstest]
    #[case(TimeDelta::hours(2))]
    #[case(TimeDelta::seconds(30))]
    #[case(TimeDelta::zero())]
    fn deactivation_never_passes_the_reference_time(
        mut forum: Forum,
        #[case] age: TimeDelta,
    ) {
        let mut posts = generate_ordinary_posts(&mut forum.faker, &forum.users, &forum.categories, 20)
            .expect("generated");
        let now = forum.faker.now();
        for post in &mut posts {
            post.forum_post_created_timestamp = now - age;
            post.forum_post_is_active = false;
        }

        backpatch_post_activity(&mut forum.faker, &mut posts, &[]);

        for post in &posts {
            let deactivated = post
                .forum_post_deactivated_timestamp
                .expect("inactive posts are deactivated");
            assert!(deactivated <= now);
            assert!(deactivated >= post.forum_post_last_active_timestamp);
        }
    }

    #[rstest]
    fn backpatch_keeps_first_of_equal_latest_replies(mut forum: Forum) {
        let mut posts = generate_ordinary_posts(&mut forum.faker, &forum.users, &forum.categories, 1)
            .expect("generated");
        let Some(post) = posts.first() else {
            panic!("one post generated");
        };
        let tied = post.forum_post_created_timestamp + TimeDelta::hours(3);
        let reply = |id: &str, at: DateTime<Utc>| ForumPostReply {
            forum_post_reply_id: id.to_owned(),
            forum_post_id: post.forum_post_id.clone(),
            user_id: "u".to_owned(),
            forum_post_reply_content: String::new(),
            forum_post_reply_created_timestamp: at,
        };
        let replies = vec![
            reply("early", post.forum_post_created_timestamp + TimeDelta::hours(1)),
            reply("first", tied),
            reply("second", tied),
        ];

        backpatch_post_activity(&mut forum.faker, &mut posts, &replies);

        assert_eq!(
            posts.first().map(|post| post.forum_post_last_active_timestamp),
            Some(tied)
        );
    }

    #[rstest]
    fn engagement_is_sampled_from_users(mut forum: Forum) {
        let mut posts =
            generate_forum_posts(&mut forum.faker, &forum.users, &forum.categories, volumes(10))
                .expect("generated");
        let replies = generate_forum_post_replies(&mut forum.faker, &forum.users, &mut posts);
        let views = generate_forum_post_views(&mut forum.faker, &forum.users, &posts);
        let votes = generate_forum_post_votes(&mut forum.faker, &posts, &views);
        let reply_votes = generate_forum_post_reply_votes(&mut forum.faker, &forum.users, &replies);

        for post in &posts {
            let viewers: HashSet<&str> = views
                .iter()
                .filter(|view| view.forum_post_id == post.forum_post_id)
                .map(|view| view.user_id.as_str())
                .collect();
            assert!((20..=50).contains(&viewers.len()));

            let post_votes: Vec<&ForumPostVote> = votes
                .iter()
                .filter(|vote| vote.forum_post_id == post.forum_post_id)
                .collect();
            assert!((2..=5).contains(&post_votes.len()));
            for vote in post_votes {
                assert!(viewers.contains(vote.user_id.as_str()));
                assert!(matches!(vote.forum_post_vote_increment, 1 | -1));
                assert!(vote.forum_post_vote_created_timestamp >= post.forum_post_created_timestamp);
                if let Some(deactivated) = post.forum_post_deactivated_timestamp {
                    assert!(vote.forum_post_vote_created_timestamp <= deactivated);
                }
            }
        }

        for reply in &replies {
            let count = reply_votes
                .iter()
                .filter(|vote| vote.forum_post_reply_id == reply.forum_post_reply_id)
                .inspect(|vote| {
                    assert!(matches!(vote.forum_post_reply_vote_increment, 1 | -1));
                    assert!(
                        vote.forum_post_reply_vote_created_timestamp
                            >= reply.forum_post_reply_created_timestamp
                    );
                })
                .count();
            assert!((2..=5).contains(&count));
        }
    }
}
