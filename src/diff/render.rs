use super::{DiffOp, DiffResult};

pub(super) fn unified(result: &DiffResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "@@ -{} +{} @@\n",
        result.left_len, result.right_len
    ));
    for op in &result.ops {
        match op {
            DiffOp::Equal { left, .. } => push_line(&mut out, ' ', left),
            DiffOp::Delete { left } => push_line(&mut out, '-', left),
            DiffOp::Insert { right } => push_line(&mut out, '+', right),
            DiffOp::Replace { left, right } => {
                push_line(&mut out, '-', left);
                push_line(&mut out, '+', right);
            }
        }
    }
    out
}

fn push_line(out: &mut String, prefix: char, text: &str) {
    out.push(prefix);
    out.push_str(text);
    out.push('\n');
}
