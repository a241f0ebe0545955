use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit_op::{EditOp, EditScript};

/// Role of a single line within one document's annotated view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineRole {
    /// Line exists in both documents
    #[display(fmt = "Unchanged")]
    Unchanged,

    /// Line was removed (only in the old document)
    #[display(fmt = "Removed")]
    Removed,

    /// Line was added (only in the new document)
    #[display(fmt = "Added")]
    Added,
}

/// A single line of an annotated view: raw line content plus its role.
///
/// Content is the source text exactly as extracted; any escaping for a
/// presentation medium is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedLine {
    /// The raw text content of the line
    pub content: String,
    /// How the line relates to the other document
    pub role: LineRole,
}

impl AnnotatedLine {
    pub fn new(content: impl Into<String>, role: LineRole) -> Self {
        Self {
            content: content.into(),
            role,
        }
    }

    pub fn unchanged(content: impl Into<String>) -> Self {
        Self::new(content, LineRole::Unchanged)
    }

    pub fn removed(content: impl Into<String>) -> Self {
        Self::new(content, LineRole::Removed)
    }

    pub fn added(content: impl Into<String>) -> Self {
        Self::new(content, LineRole::Added)
    }
}

/// One document's lines paired with change roles, ready for presentation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedView {
    lines: Vec<AnnotatedLine>,
}

impl AnnotatedView {
    /// Get the annotated lines, in document order
    pub fn lines(&self) -> &[AnnotatedLine] {
        &self.lines
    }

    /// Get the number of lines in this view
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the view has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the annotated lines
    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedLine> {
        self.lines.iter()
    }

    /// Get the number of lines carrying a change role
    pub fn changed_lines(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.role != LineRole::Unchanged)
            .count()
    }
}

impl<'a> IntoIterator for &'a AnnotatedView {
    type Item = &'a AnnotatedLine;
    type IntoIter = std::slice::Iter<'a, AnnotatedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Split an edit script into the two per-document annotated views.
///
/// The first view belongs to the old document and only ever carries
/// `Unchanged` and `Removed` roles; the second belongs to the new document
/// and only ever carries `Unchanged` and `Added`. Common lines appear in
/// both views, in the same relative order as in the script.
pub fn build_views(script: &EditScript) -> (AnnotatedView, AnnotatedView) {
    let mut old_view = Vec::new();
    let mut new_view = Vec::new();

    for op in script {
        match op {
            EditOp::Common(line) => {
                old_view.push(AnnotatedLine::unchanged(line.clone()));
                new_view.push(AnnotatedLine::unchanged(line.clone()));
            }
            EditOp::Removed(line) => {
                old_view.push(AnnotatedLine::removed(line.clone()));
            }
            EditOp::Added(line) => {
                new_view.push(AnnotatedLine::added(line.clone()));
            }
        }
    }

    (
        AnnotatedView { lines: old_view },
        AnnotatedView { lines: new_view },
    )
}
