use std::borrow::Cow;

/// Writes `values` into `out` through `f`, inserting `separator` between the
/// entries that actually produced output.
pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Consumes the longest prefix of `input` matching `predicate` and returns it,
/// leaving `input` pointing at the rest.
pub fn consume_while<'s>(input: &mut &'s str, mut predicate: impl FnMut(char) -> bool) -> &'s str {
    let len = input
        .find(|c: char| !predicate(c))
        .unwrap_or(input.len());
    let (result, rest) = input.split_at(len);
    *input = rest;
    result
}

const TRUNCATED_MAX: usize = 512;

/// Caps a statement to a size fit for a log line.
pub fn truncated(sql: &str) -> Cow<'_, str> {
    if sql.len() <= TRUNCATED_MAX {
        return Cow::Borrowed(sql);
    }
    let mut end = TRUNCATED_MAX;
    while !sql.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}...", sql[..end].trim_end()))
}
