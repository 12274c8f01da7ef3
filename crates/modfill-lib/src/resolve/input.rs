//! Interactive selection input parsing
//!
//! Turns a raw answer to a selection prompt into a [`SelectionInput`]. What
//! each variant means (skip, default pick) is decided by the caller.

/// Parsed answer to a numbered selection prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionInput {
    /// Zero-based position in the listed candidates
    Index(usize),
    /// A number outside the listed range, taken as an explicit identifier
    RawId(u32),
    Skip,
    Blank,
    Invalid(String),
}

/// Parse `input` against a prompt that listed `listed` candidates
///
/// Numbers in `1..=listed` select by position; any other positive number is
/// a raw identifier. `0`, negative numbers and numbers that do not fit an
/// identifier are invalid.
pub fn parse_selection(input: &str, listed: usize) -> SelectionInput {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return SelectionInput::Blank;
    }
    if trimmed.eq_ignore_ascii_case("s") {
        return SelectionInput::Skip;
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return SelectionInput::Invalid(trimmed.to_string());
    }

    match trimmed.parse::<u32>() {
        Ok(0) | Err(_) => SelectionInput::Invalid(trimmed.to_string()),
        Ok(n) if (n as usize) <= listed => SelectionInput::Index(n as usize - 1),
        Ok(n) => SelectionInput::RawId(n),
    }
}

#[cfg(test)]
mod tests {
    include!("input.test.rs");
}
