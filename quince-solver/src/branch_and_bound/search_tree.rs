use itertools::Itertools;
use serde::Serialize;

use crate::branch_and_bound::history::serialize_rounded;
use crate::branch_and_bound::NodeId;
use crate::branch_and_bound::NodeStatus;
use crate::branch_and_bound::SearchNode;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::quince_assert_moderate;
use crate::quince_assert_simple;

/// The arena holding every node created during one solve invocation.
///
/// The arena owns the id counter: node ids are the insertion ranks in the
/// underlying storage, so concurrent invocations cannot interfere with each
/// other. Nodes are never removed; pruning only changes a node's status.
#[derive(Debug, Default, Clone)]
pub struct SearchTree {
    nodes: KeyedVec<NodeId, SearchNode>,
}

impl SearchTree {
    pub(crate) fn new() -> SearchTree {
        SearchTree::default()
    }

    /// Creates a node and links it into its parent's child list.
    ///
    /// The root is the single node created without a parent.
    pub(crate) fn create_node(
        &mut self,
        parent: Option<NodeId>,
        path: Vec<usize>,
        cost: f64,
        bound: f64,
    ) -> NodeId {
        quince_assert_moderate!(
            path.iter().all_unique(),
            "a path assigns each job at most once"
        );
        quince_assert_moderate!(parent.is_some() || self.nodes.is_empty());

        let id = self.nodes.next_key();
        let node_id = self.nodes.push(SearchNode::new(id, path, cost, bound, parent));

        if let Some(parent) = parent {
            self.nodes[parent].add_child(node_id);
        }

        node_id
    }

    /// The root of the search; the tree must hold at least one node.
    pub fn root(&self) -> NodeId {
        quince_assert_simple!(!self.nodes.is_empty());

        NodeId::create_from_index(0)
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &'_ SearchNode> {
        self.nodes.iter()
    }

    pub(crate) fn set_status(&mut self, id: NodeId, status: NodeStatus) {
        quince_assert_moderate!(
            self.nodes[id].status() == NodeStatus::Explored,
            "a node's status is finalized at most once"
        );

        self.nodes[id].set_status(status);
    }

    /// Tags the path realizing `best_assignment`, from the root down to the
    /// complete node.
    ///
    /// A node is optimal iff its path is a prefix of the winning assignment;
    /// exactly one child per level satisfies that test, since sibling paths
    /// diverge in their last job.
    pub(crate) fn mark_optimal_path(&mut self, best_assignment: &[usize]) {
        if self.nodes.is_empty() {
            return;
        }

        let mut current = self.root();
        loop {
            self.set_status(current, NodeStatus::Optimal);

            let node = &self.nodes[current];
            if node.level() == best_assignment.len() {
                break;
            }

            let next_job = best_assignment[node.level()];
            let next = node
                .children()
                .iter()
                .copied()
                .find(|&child| self.nodes[child].path().last() == Some(&next_job));

            match next {
                Some(child) => current = child,
                None => break,
            }
        }
    }

    /// Converts the arena into the nested, serializable form consumed by
    /// visualization clients.
    pub fn to_shared(&self) -> TreeNode {
        self.shared_subtree(self.root())
    }

    fn shared_subtree(&self, id: NodeId) -> TreeNode {
        let node = self.node(id);

        TreeNode {
            id: node.id(),
            level: node.level(),
            path: node.path().to_vec(),
            cost: node.cost(),
            bound: node.bound(),
            parent_id: node.parent(),
            status: node.status(),
            children: node
                .children()
                .iter()
                .map(|&child| self.shared_subtree(child))
                .collect(),
        }
    }
}

/// The shareable form of one node, with its subtree nested inside it.
///
/// Bounds are rounded to two decimals here for display; the in-memory tree
/// keeps full precision and every comparison during the search uses it.
#[derive(Clone, Debug, Serialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub level: usize,
    pub path: Vec<usize>,
    pub cost: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub bound: f64,
    pub parent_id: Option<NodeId>,
    pub status: NodeStatus,
    pub children: Vec<TreeNode>,
}
