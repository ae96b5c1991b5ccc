//! Path index addressing a node from a traversal root
//!
//! Index = ordered sequence of 1-based child positions
//!   []        → the root itself (rendered "0")
//!   [1, 2, 2] → 2nd child of the 2nd child of the 1st child (rendered "1.2.2")

use std::fmt;
use std::str::FromStr;

use crate::TreeError;

/// Root-to-node path of 1-based child positions
///
/// Immutable: every transformation returns a new index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeIndex {
    segments: Vec<usize>,
}

impl TreeIndex {
    /// Index denoting the traversal root itself
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build an index from raw segments
    ///
    /// Segments are not checked against any tree here; resolution does that.
    pub fn new(segments: impl IntoIterator<Item = usize>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Index of the `segment`-th (1-based) child of the node at `self`
    pub fn child(&self, segment: usize) -> Self {
        debug_assert!(segment >= 1, "path segments are 1-based");
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Index relative to the first child on the path (drops the first segment)
    pub fn sub_index(&self) -> Result<Self, TreeError> {
        match self.segments.split_first() {
            Some((_, rest)) => Ok(Self {
                segments: rest.to_vec(),
            }),
            None => Err(TreeError::EmptyIndex {
                operation: "sub index",
            }),
        }
    }

    /// Index of the parent node (drops the last segment)
    ///
    /// The root is its own parent.
    pub fn parent(&self) -> Self {
        match self.segments.split_last() {
            Some((_, rest)) => Self {
                segments: rest.to_vec(),
            },
            None => Self::root(),
        }
    }

    /// True for the self-denoting root index
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments, i.e. the depth below the traversal root
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The only segment of a one-level index
    pub fn unique(&self) -> Result<usize, TreeError> {
        match self.segments.as_slice() {
            [segment] => Ok(*segment),
            _ => Err(TreeError::NotUnique {
                len: self.segments.len(),
            }),
        }
    }

    /// First segment on the path
    pub fn first(&self) -> Result<usize, TreeError> {
        self.segments
            .first()
            .copied()
            .ok_or(TreeError::EmptyIndex {
                operation: "first segment",
            })
    }

    /// Raw segments, outermost first
    pub fn segments(&self) -> &[usize] {
        &self.segments
    }
}

impl From<Vec<usize>> for TreeIndex {
    fn from(segments: Vec<usize>) -> Self {
        Self { segments }
    }
}

impl<const N: usize> From<[usize; N]> for TreeIndex {
    fn from(segments: [usize; N]) -> Self {
        Self::new(segments)
    }
}

impl fmt::Display for TreeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.segments.split_first() else {
            return f.write_str("0");
        };
        write!(f, "{first}")?;
        for segment in rest {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for TreeIndex {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "0" {
            return Ok(Self::root());
        }

        s.split('.')
            .map(|part| match part.parse::<usize>() {
                Ok(segment) if segment >= 1 => Ok(segment),
                _ => Err(TreeError::InvalidIndex(format!(
                    "'{part}' in '{s}' is not a positive segment"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}
