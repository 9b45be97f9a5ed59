//! Rate quotation cases and the conversion graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transform::Transform;
use crate::error::{ValoraError, ValoraResult};

/// Which side of a conversion a quotation case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteSide {
    /// The rate being converted, quoted with the source periodicity.
    Source,
    /// The requested rate, quoted with the target periodicity.
    Target,
}

/// A node of the rate equivalence graph.
///
/// Nominal or effective, anticipated or matured, on the source (`1`) or
/// target (`2`) side of a conversion:
///
/// ```text
///                          PIY1 || PIY2
/// (ANR) --> (AER)               ||               (AER) --> (ANR)
///                \              ||              /
///                 '--> (EMR) ---++---> (EMR) --'
///                /              ||              \
///      (MNR) ---'               ||               '--> (MNR)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RateQuoteCase {
    /// Anticipated nominal rate, source side
    Anr1,
    /// Anticipated effective rate, source side
    Aer1,
    /// Effective matured rate, source side
    Emr1,
    /// Matured nominal rate, source side
    Mnr1,
    /// Anticipated nominal rate, target side
    Anr2,
    /// Anticipated effective rate, target side
    Aer2,
    /// Effective matured rate, target side
    Emr2,
    /// Matured nominal rate, target side
    Mnr2,
}

/// An outgoing edge of the conversion graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Elementary transform applied along the edge.
    pub transform: Transform,
    /// Case reached after the transform.
    pub next: RateQuoteCase,
}

impl Edge {
    const fn new(transform: Transform, next: RateQuoteCase) -> Self {
        Self { transform, next }
    }
}

/// Longest path in the graph (ANR1 -> AER1 -> EMR1 -> EMR2 -> AER2 -> ANR2).
pub const MAX_HOPS: usize = 5;

impl RateQuoteCase {
    /// Returns the side of the conversion this case belongs to.
    #[must_use]
    pub fn side(&self) -> QuoteSide {
        match self {
            Self::Anr1 | Self::Aer1 | Self::Emr1 | Self::Mnr1 => QuoteSide::Source,
            Self::Anr2 | Self::Aer2 | Self::Emr2 | Self::Mnr2 => QuoteSide::Target,
        }
    }

    /// Returns the edge to follow from this case when heading for `target`.
    ///
    /// `EMR2` is the only node with two outgoing edges; the branch is picked
    /// by the target. `None` means no edge leads towards `target`.
    #[must_use]
    pub fn edge_towards(&self, target: RateQuoteCase) -> Option<Edge> {
        use RateQuoteCase::{Aer1, Aer2, Anr1, Anr2, Emr1, Emr2, Mnr1, Mnr2};

        match (self, target) {
            (Mnr1, _) => Some(Edge::new(Transform::NominalToEffective, Emr1)),
            (Anr1, _) => Some(Edge::new(Transform::NominalToEffective, Aer1)),
            (Aer1, _) => Some(Edge::new(Transform::AnticipatedToMatured, Emr1)),
            (Emr1, _) => Some(Edge::new(Transform::ChangePeriodicity, Emr2)),
            (Emr2, Aer2 | Anr2) => Some(Edge::new(Transform::MaturedToAnticipated, Aer2)),
            (Emr2, Mnr2) => Some(Edge::new(Transform::EffectiveToNominal, Mnr2)),
            (Aer2, Anr2) => Some(Edge::new(Transform::EffectiveToNominal, Anr2)),
            _ => None,
        }
    }

    /// Resolves the sequence of edges leading from `self` to `target`.
    ///
    /// An empty path means `self == target`.
    ///
    /// # Errors
    ///
    /// Returns `ValoraError::InvalidInput` if `target` cannot be reached.
    pub fn path_to(&self, target: RateQuoteCase) -> ValoraResult<Vec<Edge>> {
        let mut path = Vec::with_capacity(MAX_HOPS);
        let mut current = *self;

        while current != target {
            if path.len() == MAX_HOPS {
                return Err(ValoraError::invalid_input(format!(
                    "rate conversion from {self} to {target} exceeds {MAX_HOPS} hops"
                )));
            }
            let edge = current.edge_towards(target).ok_or_else(|| {
                ValoraError::invalid_input(format!(
                    "rate case {target} is not reachable from {self} (stuck at {current})"
                ))
            })?;
            path.push(edge);
            current = edge.next;
        }

        Ok(path)
    }

    /// Returns whether `target` can be reached from this case.
    #[must_use]
    pub fn reaches(&self, target: RateQuoteCase) -> bool {
        self.path_to(target).is_ok()
    }

    /// Returns the quotation tag, e.g. `"MNR1"`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Anr1 => "ANR1",
            Self::Aer1 => "AER1",
            Self::Emr1 => "EMR1",
            Self::Mnr1 => "MNR1",
            Self::Anr2 => "ANR2",
            Self::Aer2 => "AER2",
            Self::Emr2 => "EMR2",
            Self::Mnr2 => "MNR2",
        }
    }

    /// Returns all eight cases.
    #[must_use]
    pub fn all() -> &'static [RateQuoteCase] {
        &[
            Self::Anr1,
            Self::Aer1,
            Self::Emr1,
            Self::Mnr1,
            Self::Anr2,
            Self::Aer2,
            Self::Emr2,
            Self::Mnr2,
        ]
    }
}

impl fmt::Display for RateQuoteCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RateQuoteCase {
    type Err = ValoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::all()
            .iter()
            .find(|case| case.tag() == normalized)
            .copied()
            .ok_or_else(|| ValoraError::invalid_input(format!("unknown rate case: '{s}'")))
    }
}
