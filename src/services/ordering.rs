//! One ordering law for dotted-numeric coded labels ("2.5 External walls"),
//! shared by the taxonomy builder and any list sorting: numeric-prefix
//! comparison with lexicographic fallback, so "2.10" sorts after "2.2".

use std::cmp::Ordering;

/// Extracts the leading `\d+(\.\d+)*` run from a label, if any. A dot is
/// only part of the prefix when a digit follows it, so "2.5 External walls"
/// yields "2.5" and "2." yields "2".
pub fn numeric_prefix(label: &str) -> Option<&str> {
    let bytes = label.as_bytes();
    if !bytes.first().is_some_and(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    while end < bytes.len()
        && bytes[end] == b'.'
        && bytes.get(end + 1).is_some_and(|b| b.is_ascii_digit())
    {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    Some(&label[..end])
}

fn components(prefix: &str) -> Vec<u64> {
    prefix
        .split('.')
        .map(|s| s.parse::<u64>().unwrap_or(0))
        .collect()
}

/// Sibling ordering rule: compare numeric prefix components left-to-right,
/// missing trailing components treated as 0; first unequal pair decides. If
/// either label lacks a numeric prefix, or the prefixes tie, fall back to
/// plain lexicographic comparison of the full labels.
pub fn compare_coded(a: &str, b: &str) -> Ordering {
    match (numeric_prefix(a), numeric_prefix(b)) {
        (Some(pa), Some(pb)) => {
            let ca = components(pa);
            let cb = components(pb);
            for i in 0..ca.len().max(cb.len()) {
                let va = ca.get(i).copied().unwrap_or(0);
                let vb = cb.get(i).copied().unwrap_or(0);
                match va.cmp(&vb) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            a.cmp(b)
        }
        _ => a.cmp(b),
    }
}
