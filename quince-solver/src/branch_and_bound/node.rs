use serde::Serialize;

use crate::containers::StorageKey;

/// Identifies a [`SearchNode`] within one solve invocation.
///
/// Ids are handed out in creation order, starting at zero for the root, and
/// are only meaningful within the invocation that created them; a new search
/// starts counting from zero again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl StorageKey for NodeId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        NodeId(index as u32)
    }
}

/// The visualization state of a node.
///
/// Every node starts out `Explored` and transitions at most once: to
/// `Pruned` the moment the search discards it, or to `Optimal` during the
/// final marking pass over the completed tree. Nodes that are neither pruned
/// nor on the winning path stay `Explored`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Explored,
    Optimal,
    Pruned,
}

/// One partial-assignment state in the search tree.
///
/// The first `level` workers have been given the jobs in `path`, in order.
/// `cost` is the exact accumulated cost of those decisions and `bound` is an
/// admissible lower bound on any completion, so `bound >= cost` always
/// holds.
#[derive(Clone, Debug)]
pub struct SearchNode {
    id: NodeId,
    level: usize,
    path: Vec<usize>,
    cost: f64,
    bound: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    status: NodeStatus,
}

impl SearchNode {
    pub(crate) fn new(
        id: NodeId,
        path: Vec<usize>,
        cost: f64,
        bound: f64,
        parent: Option<NodeId>,
    ) -> SearchNode {
        SearchNode {
            id,
            level: path.len(),
            path,
            cost,
            bound,
            parent,
            children: Vec::new(),
            status: NodeStatus::Explored,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The number of assignment decisions taken so far.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The jobs assigned to workers `0..level`, in worker order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub(crate) fn add_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn set_status(&mut self, status: NodeStatus) {
        self.status = status;
    }
}
