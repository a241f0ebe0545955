use derive_more::Display;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single line-level operation in an edit script
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditOp {
    /// The line appears unchanged in both documents
    #[display(fmt = "  {}", _0)]
    Common(String),

    /// The line is present in the old document only
    #[display(fmt = "- {}", _0)]
    Removed(String),

    /// The line is present in the new document only
    #[display(fmt = "+ {}", _0)]
    Added(String),
}

impl EditOp {
    /// Get the line content this operation carries
    pub fn line(&self) -> &str {
        match self {
            EditOp::Common(line) | EditOp::Removed(line) | EditOp::Added(line) => line,
        }
    }

    /// Check if this operation is a common (unchanged) line
    pub fn is_common(&self) -> bool {
        matches!(self, EditOp::Common(_))
    }

    /// Check if this operation removes a line from the old document
    pub fn is_removed(&self) -> bool {
        matches!(self, EditOp::Removed(_))
    }

    /// Check if this operation adds a line to the new document
    pub fn is_added(&self) -> bool {
        matches!(self, EditOp::Added(_))
    }
}

/// An ordered sequence of edit operations describing how the old document
/// becomes the new one.
///
/// Every line of both inputs appears exactly once: filtering out `Added`
/// ops and reading the remaining lines in order reconstructs the old
/// document; filtering out `Removed` ops reconstructs the new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    /// Create a script from a sequence of operations
    pub fn from_ops(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    /// Get the operations in this script
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Get the number of operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the script is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over the operations
    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    /// Check if the script contains any change
    pub fn has_changes(&self) -> bool {
        self.ops.iter().any(|op| !op.is_common())
    }

    /// Get the number of common lines
    pub fn common_lines(&self) -> usize {
        self.ops.iter().filter(|op| op.is_common()).count()
    }

    /// Get the number of removed lines
    pub fn removed_lines(&self) -> usize {
        self.ops.iter().filter(|op| op.is_removed()).count()
    }

    /// Get the number of added lines
    pub fn added_lines(&self) -> usize {
        self.ops.iter().filter(|op| op.is_added()).count()
    }

    /// Recover the old document's lines, in order
    pub fn reconstruct_old(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter(|op| !op.is_added())
            .map(|op| op.line())
            .collect()
    }

    /// Recover the new document's lines, in order
    pub fn reconstruct_new(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter(|op| !op.is_removed())
            .map(|op| op.line())
            .collect()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            writeln!(f, "{}", op)?;
        }
        Ok(())
    }
}
