//! Manual ID input parsing

use crate::error::{Error, Result};

/// Parse a comma-separated ID list.
///
/// Whitespace around each token is trimmed. A blank input yields an empty
/// list (a valid waiting state, not an error). Any token that is not a
/// parseable integer rejects the ENTIRE input; there is no partial or
/// best-effort parsing. A dangling comma produces an empty token, which is
/// an invalid token like any other.
pub fn parse_id_list(input: &str) -> Result<Vec<i64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| Error::invalid_token(token, position))
        })
        .collect()
}
