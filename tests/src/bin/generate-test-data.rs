use std::collections::HashSet;

use anyhow::Context;
use chrono::{Duration, Utc};
use nexo_api::{Comment, CommentId, UserId};
use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

const NUM_USERS: usize = 8;
const NUM_COMMENTS: usize = 200;

/// Out of 100 comments, how many are replies
const REPLY_PERCENT: u32 = 70;
/// Out of 100 replies, how many point to a comment that no longer exists
const DANGLING_PERCENT: u32 = 3;

const COMMENT_WORD_COUNT: usize = 25;
const MAX_LIKES: usize = 5;

fn gen_comment_text(rng: &mut impl Rng) -> String {
    let text = lipsum::lipsum_words(rng.gen_range(1..=COMMENT_WORD_COUNT));
    match rng.gen_ratio(1, 10) {
        true => format!("**{}**", text),
        false => text,
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();

    let users = (0..NUM_USERS)
        .map(|i| (UserId(Uuid::new_v4().to_string()), lipsum::lipsum_title(), i))
        .collect::<Vec<_>>();

    let start = Utc::now() - Duration::days(30);
    let mut comments: Vec<Comment> = Vec::with_capacity(NUM_COMMENTS);
    for _ in 0..NUM_COMMENTS {
        let (author_id, author_name, avatar) = users
            .choose(&mut rng)
            .context("no users to pick comment authors from")?;

        // Replies are always posted after the comment they answer
        let parent = match comments.is_empty() || !rng.gen_ratio(REPLY_PERCENT, 100) {
            true => None,
            false => comments.choose(&mut rng),
        };
        let created_at = match parent {
            Some(p) => p.created_at + Duration::minutes(rng.gen_range(1..600)),
            None => start + Duration::minutes(rng.gen_range(0..30 * 24 * 60)),
        };
        let parent_id = match parent {
            Some(_) if rng.gen_ratio(DANGLING_PERCENT, 100) => {
                Some(CommentId(Uuid::new_v4().to_string()))
            }
            p => p.map(|p| p.id.clone()),
        };

        let num_likes = rng.gen_range(0..=MAX_LIKES);
        let liked_by = users
            .choose_multiple(&mut rng, num_likes)
            .map(|(u, _, _)| u.clone())
            .collect::<HashSet<_>>();

        comments.push(Comment {
            id: CommentId(Uuid::new_v4().to_string()),
            text: gen_comment_text(&mut rng),
            author_id: author_id.clone(),
            author_display_name: author_name.clone(),
            author_avatar_url: Some(format!("https://avatars.example.com/{avatar}.png")),
            created_at,
            parent_id,
            liked_by,
        });
    }

    // The backend gives no ordering guarantee
    comments.shuffle(&mut rng);

    println!(
        "{}",
        serde_json::to_string_pretty(&comments).context("serializing comments")?
    );
    Ok(())
}
