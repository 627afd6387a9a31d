use super::DiffOp;
use super::token::TokenSeq;

/// Build the edit script from the LCS of the two comparison sequences.
///
/// `dp[i][j]` holds the LCS length of `a[i..]` and `b[j..]`, filled
/// bottom-up; the backtrack then walks forward from `(0, 0)` in the same
/// direction the table was filled. O(n·m) time and space with no input
/// ceiling: oversized inputs get slow, not wrong.
pub(super) fn edit_script(a: &TokenSeq<'_>, b: &TokenSeq<'_>) -> Vec<DiffOp> {
    let n = a.key.len();
    let m = b.key.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if a.key[i] == b.key[j] {
                dp[i + 1][j + 1] + 1
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0usize, 0usize);
    while i < n && j < m {
        if a.key[i] == b.key[j] {
            ops.push(DiffOp::Equal {
                left: a.raw[i].to_string(),
                right: b.raw[j].to_string(),
            });
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            // Ties favor delete. The choice is arbitrary but fixed:
            // golden outputs depend on it, do not flip to favor insert.
            ops.push(DiffOp::Delete {
                left: a.raw[i].to_string(),
            });
            i += 1;
        } else {
            ops.push(DiffOp::Insert {
                right: b.raw[j].to_string(),
            });
            j += 1;
        }
    }
    for t in &a.raw[i..] {
        ops.push(DiffOp::Delete {
            left: (*t).to_string(),
        });
    }
    for t in &b.raw[j..] {
        ops.push(DiffOp::Insert {
            right: (*t).to_string(),
        });
    }
    ops
}

/// Single forward pass turning each delete immediately followed by an
/// insert into a replace. A freshly made replace is never re-merged.
pub(super) fn merge_replacements(ops: Vec<DiffOp>) -> Vec<DiffOp> {
    let mut out = Vec::with_capacity(ops.len());
    let mut pending_delete: Option<String> = None;
    for op in ops {
        match (pending_delete.take(), op) {
            (Some(left), DiffOp::Insert { right }) => {
                out.push(DiffOp::Replace { left, right });
            }
            (Some(left), DiffOp::Delete { left: next }) => {
                out.push(DiffOp::Delete { left });
                pending_delete = Some(next);
            }
            (Some(left), other) => {
                out.push(DiffOp::Delete { left });
                out.push(other);
            }
            (None, DiffOp::Delete { left }) => pending_delete = Some(left),
            (None, other) => out.push(other),
        }
    }
    if let Some(left) = pending_delete {
        out.push(DiffOp::Delete { left });
    }
    out
}
