#![cfg(test)]

use std::collections::HashSet;

use chrono::TimeZone;

use crate::{
    api::{Comment, CommentId, UserId},
    *,
};

/// One generated comment: what it replies to and when it was posted
///
/// `parent` picks a comment of the generated list modulo its length, so that
/// most references are valid; values with the high bit set instead point to a
/// comment that does not exist. Timestamps are kept in a small range to get
/// plenty of ties.
type Shape = Vec<(Option<u8>, u8)>;

fn comments_for(shape: &Shape) -> Vec<Comment> {
    let len = shape.len();
    shape
        .iter()
        .enumerate()
        .map(|(i, &(parent, time))| Comment {
            id: CommentId(format!("c{i}")),
            text: format!("comment {i}"),
            author_id: UserId(format!("u{}", i % 3)),
            author_display_name: format!("User {}", i % 3),
            author_avatar_url: None,
            created_at: chrono::Utc
                .timestamp_millis_opt(i64::from(time % 8))
                .unwrap(),
            parent_id: parent.map(|p| match p & 0x80 {
                0 => CommentId(format!("c{}", usize::from(p) % len)),
                _ => CommentId(format!("deleted{p}")),
            }),
            liked_by: HashSet::new(),
        })
        .collect()
}

fn position(comments: &[Comment], id: &CommentId) -> usize {
    comments
        .iter()
        .position(|c| c.id == *id)
        .expect("output comment not in input")
}

fn on_reply_cycle(comments: &[Comment], i: usize) -> bool {
    let mut j = i;
    for _ in 0..comments.len() {
        match &comments[j].parent_id {
            Some(p) => match comments.iter().position(|c| c.id == *p) {
                Some(p) if p == i => return true,
                Some(p) => j = p,
                None => return false,
            },
            None => return false,
        }
    }
    false
}

fn check_siblings(comments: &[Comment], siblings: &[CommentNode]) {
    for w in siblings.windows(2) {
        let (a, b) = (&w[0].comment, &w[1].comment);
        assert!(a.created_at <= b.created_at, "siblings out of order");
        if a.created_at == b.created_at {
            assert!(
                position(comments, &a.id) < position(comments, &b.id),
                "tie did not keep input order"
            );
        }
    }
}

#[test]
fn fuzz_build_comment_tree() {
    bolero::check!()
        .with_type::<Shape>()
        .cloned()
        .for_each(|shape| {
            let comments = comments_for(&shape);
            let ids = comments.iter().map(|c| &c.id).collect::<HashSet<_>>();
            let forest = build_comment_tree(&comments);

            // Every comment shows up exactly once
            assert_eq!(CommentNode::count(&forest), comments.len());
            let seen = CommentNode::depth_first(&forest)
                .map(|(_, n)| n.id().clone())
                .collect::<HashSet<_>>();
            assert_eq!(seen.len(), comments.len());

            // Replies are attached to their parent, dangling parents give roots
            for root in forest.iter() {
                if matches!(&root.comment.parent_id, Some(p) if ids.contains(p)) {
                    assert!(
                        on_reply_cycle(&comments, position(&comments, root.id())),
                        "comment with a known parent shown at top level"
                    );
                }
            }
            for c in comments.iter() {
                if matches!(&c.parent_id, Some(p) if !ids.contains(p)) {
                    assert!(forest.iter().any(|r| r.comment.id == c.id));
                }
            }
            check_siblings(&comments, &forest);
            for (_, node) in CommentNode::depth_first(&forest) {
                for r in node.replies.iter() {
                    assert_eq!(r.comment.parent_id.as_ref(), Some(node.id()));
                }
                check_siblings(&comments, &node.replies);
            }

            // Same input, same output
            assert_eq!(build_comment_tree(&comments), forest);
        });
}

#[test]
fn fuzz_strip_markdown() {
    bolero::check!()
        .with_type::<String>()
        .cloned()
        .for_each(|text| {
            let stripped = strip_markdown(&text as &str);
            assert_eq!(stripped, stripped.trim());
            assert!(!stripped.contains("\n\n"));
            let e = excerpt(&text as &str, 20);
            assert!(e.chars().count() <= 23);
        });
}
