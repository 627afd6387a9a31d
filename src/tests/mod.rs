use super::*;

// Shared helpers for the diff tests.

/// Reassemble side A from the raw left values of all non-insert ops.
fn lefts(ops: &[DiffOp]) -> Vec<&str> {
    ops.iter().filter_map(|op| op.left()).collect()
}

/// Reassemble side B from the raw right values of all non-delete ops.
fn rights(ops: &[DiffOp]) -> Vec<&str> {
    ops.iter().filter_map(|op| op.right()).collect()
}

mod repair_passes;
