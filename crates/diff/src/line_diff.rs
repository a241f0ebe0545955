use crate::edit_op::{EditOp, EditScript};

/// Compute a line-level edit script between two documents.
///
/// Lines are opaque tokens compared by exact string equality; nothing is
/// trimmed or case-folded. The alignment keeps a longest common subsequence
/// of the two inputs as anchors and classifies every other line as
/// `Removed` (old document) or `Added` (new document).
///
/// The alignment is deterministic. Two tie-break rules apply where the LCS
/// alone leaves the script ambiguous:
///
/// - Equal lines are matched eagerly while walking from the front of both
///   sequences, so the first-found alignment wins.
/// - Within a run of changes between two anchors, removals are emitted
///   before additions whenever both orders preserve the alignment.
///
/// The function is total: empty inputs, duplicate lines, and whitespace-only
/// lines are all valid and need no special handling by the caller.
pub fn compute_diff<A: AsRef<str>, B: AsRef<str>>(old: &[A], new: &[B]) -> EditScript {
    let n = old.len();
    let m = new.len();

    // Lines shared at the start and end of both documents are anchors no
    // matter what the middle looks like. Peeling them off first keeps the
    // alignment table proportional to the changed region.
    let mut prefix = 0;
    while prefix < n && prefix < m && old[prefix].as_ref() == new[prefix].as_ref() {
        prefix += 1;
    }

    let mut suffix = 0;
    while suffix < n - prefix
        && suffix < m - prefix
        && old[n - 1 - suffix].as_ref() == new[m - 1 - suffix].as_ref()
    {
        suffix += 1;
    }

    let mut ops = Vec::with_capacity(n + m - prefix - suffix);

    for line in &old[..prefix] {
        ops.push(EditOp::Common(line.as_ref().to_string()));
    }

    align(&old[prefix..n - suffix], &new[prefix..m - suffix], &mut ops);

    for line in &old[n - suffix..] {
        ops.push(EditOp::Common(line.as_ref().to_string()));
    }

    EditScript::from_ops(ops)
}

/// Align two sequences with no shared prefix or suffix, appending the
/// resulting operations to `ops`.
fn align<A: AsRef<str>, B: AsRef<str>>(old: &[A], new: &[B], ops: &mut Vec<EditOp>) {
    let n = old.len();
    let m = new.len();

    // lcs[i][j] is the length of the longest common subsequence of
    // old[i..] and new[j..], stored in a flat (n + 1) * (m + 1) table so
    // the walk below can always see the consequence of each choice.
    let width = m + 1;
    let mut lcs = vec![0u32; (n + 1) * width];

    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i * width + j] = if old[i].as_ref() == new[j].as_ref() {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let mut i = 0;
    let mut j = 0;

    while i < n && j < m {
        if old[i].as_ref() == new[j].as_ref() {
            ops.push(EditOp::Common(old[i].as_ref().to_string()));
            i += 1;
            j += 1;
        } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
            // On a tie the removal comes first, grouping each change run
            // as deletions followed by insertions.
            ops.push(EditOp::Removed(old[i].as_ref().to_string()));
            i += 1;
        } else {
            ops.push(EditOp::Added(new[j].as_ref().to_string()));
            j += 1;
        }
    }

    while i < n {
        ops.push(EditOp::Removed(old[i].as_ref().to_string()));
        i += 1;
    }

    while j < m {
        ops.push(EditOp::Added(new[j].as_ref().to_string()));
        j += 1;
    }
}
