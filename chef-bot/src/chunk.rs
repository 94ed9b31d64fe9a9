//! Splits long replies into display-limit-sized segments.

/// Discord embed description limit, in characters.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Splits `text` into consecutive chunks of at most `limit` characters.
///
/// Characters are Unicode scalar values, so a chunk never splits a code point. Order is
/// preserved with no overlap; only the last chunk may be shorter. Empty input yields no
/// chunks. A `limit` of 0 is treated as 1.
pub fn chunk(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;
    for c in text.chars() {
        current.push(c);
        count += 1;
        if count == limit {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
