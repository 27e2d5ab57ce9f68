use serde::Serialize;
use serde::Serializer;

use crate::branch_and_bound::NodeId;

/// One decision taken by the search engine.
///
/// Each variant is denormalized: it carries the ids, paths, costs, and
/// bounds a client needs to render the step without walking the tree.
/// Replaying the sequence in order reconstructs every node's final status,
/// except for the explicit optimal-marking pass that runs after the search.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SearchEvent {
    /// The most promising frontier node was taken for processing. The
    /// remaining frontier bounds are included so the state of the priority
    /// queue can be visualized.
    NodeSelected {
        node_id: NodeId,
        path: Vec<usize>,
        cost: f64,
        #[serde(serialize_with = "serialize_rounded")]
        bound: f64,
        incumbent: Option<f64>,
        #[serde(serialize_with = "serialize_rounded_slice")]
        frontier_bounds: Vec<f64>,
    },
    /// The selected node's bound can no longer beat the incumbent; the node
    /// and its unexplored subtree are discarded.
    NodePruned {
        node_id: NodeId,
        #[serde(serialize_with = "serialize_rounded")]
        bound: f64,
        incumbent: Option<f64>,
    },
    /// A child was constructed during expansion of its parent.
    ChildGenerated {
        parent_id: NodeId,
        child_id: NodeId,
        path: Vec<usize>,
        cost: f64,
        #[serde(serialize_with = "serialize_rounded")]
        bound: f64,
    },
    /// A freshly generated child was discarded without ever reaching the
    /// frontier.
    ChildPruned {
        child_id: NodeId,
        #[serde(serialize_with = "serialize_rounded")]
        bound: f64,
        incumbent: Option<f64>,
    },
    /// A complete assignment improved on the incumbent.
    SolutionImproved {
        node_id: NodeId,
        cost: f64,
        assignment: Vec<usize>,
    },
}

/// The append-only audit trail of one solve invocation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SearchHistory {
    events: Vec<SearchEvent>,
}

impl SearchHistory {
    pub(crate) fn record(&mut self, event: SearchEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Rounds a bound to two decimals for display.
///
/// Only serialized output is rounded; every comparison during the search
/// uses full precision.
pub(crate) fn serialize_rounded<S: Serializer>(
    bound: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((bound * 100.0).round() / 100.0)
}

fn serialize_rounded_slice<S: Serializer>(
    bounds: &[f64],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(bounds.iter().map(|bound| (bound * 100.0).round() / 100.0))
}
