use crate::version::error::VersionError;

/// Extract the first dotted numeric run from `text` and render it as `major.minor.patch`.
///
/// Components beyond the third are dropped and each component is re-rendered
/// as an integer, so leading zeros disappear.
///
/// Examples:
/// - "1.2.3" -> "1.2.3"
/// - "v2016.7.00.00" -> "2016.7.0"
/// - "1.2" -> `VersionError::TooFewComponents`
pub fn normalize_version(text: &str) -> Result<String, VersionError> {
    let run = first_numeric_run(text).unwrap_or_default();

    let parts: Vec<&str> = run.split('.').collect();
    if parts.len() < 3 {
        return Err(VersionError::TooFewComponents {
            value: run.to_string(),
        });
    }

    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part
            .parse::<u64>()
            .map_err(|source| VersionError::InvalidComponent {
                value: run.to_string(),
                component: part.to_string(),
                source,
            })?;
    }

    let [major, minor, patch] = numbers;
    Ok(format!("{major}.{minor}.{patch}"))
}

/// Return the first run of ASCII digits and dots in `text`, if any.
pub fn first_numeric_run(text: &str) -> Option<&str> {
    let is_version_char = |c: char| c.is_ascii_digit() || c == '.';

    let start = text.find(is_version_char)?;
    let rest = &text[start..];
    let end = rest.find(|c: char| !is_version_char(c)).unwrap_or(rest.len());
    Some(&rest[..end])
}
