use std::collections::{HashMap, HashSet};

use crate::{api::Comment, CommentNode};

/// Turns a flat list of comments into reply threads.
///
/// Roots and every reply list are sorted by creation date, comments created at
/// the same time keeping their order from `comments`. A comment whose parent is
/// not in `comments` is shown as a top-level comment, as is the earliest comment
/// (in input order) of each reply cycle.
pub fn build_comment_tree(comments: &[Comment]) -> Vec<CommentNode> {
    if comments.is_empty() {
        return Vec::new();
    }

    // Index pass
    let index = comments
        .iter()
        .enumerate()
        .map(|(i, c)| (&c.id, i))
        .collect::<HashMap<_, _>>();

    // Link pass
    let mut roots = Vec::new();
    let mut parents = vec![None; comments.len()];
    let mut children = vec![Vec::new(); comments.len()];
    for (i, c) in comments.iter().enumerate() {
        match &c.parent_id {
            None => roots.push(i),
            Some(parent_id) => match index.get(parent_id) {
                Some(&p) => {
                    parents[i] = Some(p);
                    children[p].push(i);
                }
                None => {
                    tracing::warn!(
                        comment = %c.id,
                        parent = %parent_id,
                        "parent comment not found, showing comment at top level"
                    );
                    roots.push(i);
                }
            },
        }
    }

    // Anything not reachable from a root hangs off a reply cycle
    let mut reached = vec![false; comments.len()];
    mark_reachable(&roots, &children, &mut reached);
    for i in 0..comments.len() {
        if reached[i] {
            continue;
        }
        let c = cycle_start(i, &parents);
        tracing::warn!(
            comment = %comments[c].id,
            "comment is part of a reply cycle, showing it at top level"
        );
        if let Some(p) = parents[c].take() {
            children[p].retain(|&child| child != c);
        }
        roots.push(c);
        mark_reachable(&[c], &children, &mut reached);
    }

    // Sort pass, input position breaks ties
    let by_date = |&i: &usize| (comments[i].created_at, i);
    roots.sort_unstable_by_key(by_date);
    for c in children.iter_mut() {
        c.sort_unstable_by_key(by_date);
    }

    // Assemble the nodes leaves-first, so thread depth is not bounded by the stack
    let mut built = comments.iter().map(|_| None).collect::<Vec<Option<CommentNode>>>();
    let mut stack = roots.iter().map(|&i| (i, false)).collect::<Vec<_>>();
    while let Some((i, expanded)) = stack.pop() {
        if expanded {
            let replies = children[i]
                .iter()
                .filter_map(|&c| built[c].take())
                .collect();
            built[i] = Some(CommentNode {
                comment: comments[i].clone(),
                replies,
            });
        } else {
            stack.push((i, true));
            stack.extend(children[i].iter().map(|&c| (c, false)));
        }
    }
    roots.iter().filter_map(|&i| built[i].take()).collect()
}

/// Earliest comment of the reply cycle that `i` hangs from
fn cycle_start(i: usize, parents: &[Option<usize>]) -> usize {
    let mut seen = HashSet::new();
    let mut j = i;
    while seen.insert(j) {
        match parents[j] {
            Some(p) => j = p,
            None => return j,
        }
    }
    // j is on the cycle
    let mut first = j;
    let mut k = parents[j];
    while let Some(p) = k.filter(|&p| p != j) {
        first = first.min(p);
        k = parents[p];
    }
    first
}

fn mark_reachable(from: &[usize], children: &[Vec<usize>], reached: &mut [bool]) {
    let mut stack = from.to_vec();
    while let Some(i) = stack.pop() {
        if !reached[i] {
            reached[i] = true;
            stack.extend(children[i].iter().copied());
        }
    }
}
