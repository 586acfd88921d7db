//! Relationship-path steps
//!
//! A relationship description is interpreted as an ordered walk from the
//! family-group root ("self") to the described person. Each hop is a `Step`;
//! the whole walk is a `StepSequence`.

use smallvec::SmallVec;
use std::fmt;

/// Direction of one hop in a relationship path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Toward the current node's father
    Father,
    /// Toward the current node's mother
    Mother,
    /// Into the current node's sibling group
    Sibling,
    /// Toward one of the current node's children
    Child,
    /// Toward the current node's mate
    Mate,
}

impl fmt::Display for StepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Sibling => "sibling",
            Self::Child => "child",
            Self::Mate => "mate",
        };
        write!(f, "{name}")
    }
}

/// One directional hop, optionally disambiguated by a 1-based index
///
/// Sibling and child steps default to index 1; a mate step stays unindexed
/// unless an explicit index token was present; parent steps never carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Which relation to follow
    pub direction: StepDirection,
    /// 1-based position among multiple siblings/children/mates at that hop
    pub index: Option<u32>,
}

impl Step {
    /// Create a step with the default index for its direction
    #[must_use]
    pub fn new(direction: StepDirection) -> Self {
        let index = match direction {
            StepDirection::Sibling | StepDirection::Child => Some(1),
            StepDirection::Father | StepDirection::Mother | StepDirection::Mate => None,
        };
        Self { direction, index }
    }

    /// Create a step with an explicit 1-based index
    #[must_use]
    pub const fn with_index(direction: StepDirection, index: u32) -> Self {
        Self {
            direction,
            index: Some(index),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{} {index}", self.direction),
            None => write!(f, "{}", self.direction),
        }
    }
}

/// Ordered list of steps from the family-group root to one person
///
/// An empty sequence means the person is the root. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepSequence {
    steps: SmallVec<[Step; 8]>,
}

impl StepSequence {
    /// Create an empty sequence (the root's path)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step to the walk
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Whether the sequence describes the root itself
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of hops in the walk
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Iterate the steps in walk order
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Get the step at position `i`
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Step> {
        self.steps.get(i)
    }

    /// Generational altitude of the walk's target relative to the root:
    /// +1 per parent hop, -1 per child hop, sibling and mate hops neutral
    #[must_use]
    pub fn generation(&self) -> i32 {
        self.steps.iter().fold(0, |depth, step| match step.direction {
            StepDirection::Father | StepDirection::Mother => depth + 1,
            StepDirection::Child => depth - 1,
            StepDirection::Sibling | StepDirection::Mate => depth,
        })
    }
}

impl FromIterator<Step> for StepSequence {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for StepSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .steps
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}")
    }
}
