use crate::api::{Comment, CommentId};

/// A comment together with its direct replies, in chronological order
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,

    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    pub fn id(&self) -> &CommentId {
        &self.comment.id
    }

    /// Total number of comments in the forest, replies included
    pub fn count(forest: &[CommentNode]) -> usize {
        CommentNode::depth_first(forest).count()
    }

    pub fn find_in<'a>(
        forest: &'a mut [CommentNode],
        id: &CommentId,
    ) -> Option<&'a mut CommentNode> {
        for c in forest.iter_mut() {
            if c.comment.id == *id {
                return Some(c);
            }
            if let Some(res) = CommentNode::find_in(&mut c.replies, id) {
                return Some(res);
            }
        }
        None
    }

    /// Deepest nesting level in the forest, 0 when there are only roots
    pub fn max_depth(forest: &[CommentNode]) -> usize {
        CommentNode::depth_first(forest)
            .map(|(depth, _)| depth)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over the forest in display order, yielding each node with its
    /// nesting depth (0 for roots)
    pub fn depth_first(forest: &[CommentNode]) -> DepthFirst<'_> {
        DepthFirst {
            stack: forest.iter().rev().map(|c| (0, c)).collect(),
        }
    }
}

// The derived drop glue would recurse once per reply level
impl Drop for CommentNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.replies);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.replies);
        }
    }
}

pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a CommentNode)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a CommentNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.replies.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
