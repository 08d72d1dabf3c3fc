//! Delimiter codec for list fields edited as free text
//!
//! Egg groups and flavor-text entries are edited in single text inputs:
//!
//! - egg groups: `"monster, dragon"`
//! - flavor text: `"text, language, version; text, language, version"`
//!
//! Encoding and decoding are pure and shared by the create and edit forms.
//! What each form does with empty tokens and incomplete entries is an explicit
//! [`DecodePolicy`], not two diverging copies of the parser.
//!
//! # Round-trip limitation
//!
//! `decode(encode(x)) == x` only holds when no token or sub-field contains a
//! literal `,` or `;`. A flavor text such as `"Fast, agile."` is split at the
//! comma on the next decode. The format has no escaping.

use thiserror::Error;

use crate::entities::FlavorTextEntry;

const EGG_GROUP_SEPARATOR: char = ',';
const ENTRY_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = ',';

const EGG_GROUP_JOINER: &str = ", ";
const ENTRY_JOINER: &str = "; ";

/// Errors raised while decoding form text
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// No flavor-text entries, or one of them lacks text, language or version
    #[error("All fields in flavor text entries are required.")]
    IncompleteFlavorText,
}

/// What to do with egg-group tokens that are empty after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyTokens {
    Keep,
    Drop,
}

/// What to do with flavor-text entries missing a sub-field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteEntries {
    /// Fail the whole decode; also fails when no entry is present
    Reject,
    /// Discard the entry; an empty result is allowed
    Drop,
}

/// Decode rules applied by one submit path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodePolicy {
    pub empty_egg_groups: EmptyTokens,
    pub incomplete_entries: IncompleteEntries,
}

impl DecodePolicy {
    /// Create form: strict on flavor text, keeps empty egg-group tokens.
    pub const CREATE: Self = Self {
        empty_egg_groups: EmptyTokens::Keep,
        incomplete_entries: IncompleteEntries::Reject,
    };

    /// Edit form: drops empty tokens and incomplete entries, never rejects.
    pub const EDIT: Self = Self {
        empty_egg_groups: EmptyTokens::Drop,
        incomplete_entries: IncompleteEntries::Drop,
    };
}

/// Join egg groups for display in a text input.
pub fn encode_egg_groups<S: AsRef<str>>(groups: &[S]) -> String {
    groups
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(EGG_GROUP_JOINER)
}

/// Render flavor-text entries as `text, language, version` joined by `; `.
pub fn encode_flavor_text_entries(entries: &[FlavorTextEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}, {}, {}", e.text, e.language, e.version))
        .collect::<Vec<_>>()
        .join(ENTRY_JOINER)
}

/// Split comma-separated egg groups, trimming each token.
///
/// An empty input yields no groups under either policy.
pub fn decode_egg_groups(input: &str, policy: DecodePolicy) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    input
        .split(EGG_GROUP_SEPARATOR)
        .map(str::trim)
        .filter(|token| policy.empty_egg_groups == EmptyTokens::Keep || !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split `;`-separated flavor-text entries of `text, language, version`.
///
/// Blank segments (e.g. after a trailing `;`) are skipped. Only the first
/// three comma-separated parts of a segment are read; missing parts are empty.
pub fn decode_flavor_text_entries(
    input: &str,
    policy: DecodePolicy,
) -> Result<Vec<FlavorTextEntry>, CodecError> {
    let parsed = input
        .split(ENTRY_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_entry);

    match policy.incomplete_entries {
        IncompleteEntries::Drop => Ok(parsed.filter(FlavorTextEntry::is_complete).collect()),
        IncompleteEntries::Reject => {
            let entries: Vec<FlavorTextEntry> = parsed.collect();
            if entries.is_empty() || !entries.iter().all(FlavorTextEntry::is_complete) {
                return Err(CodecError::IncompleteFlavorText);
            }
            Ok(entries)
        }
    }
}

fn parse_entry(segment: &str) -> FlavorTextEntry {
    let mut parts = segment.split(FIELD_SEPARATOR).map(str::trim);
    let mut next = || parts.next().unwrap_or_default().to_string();
    let text = next();
    let language = next();
    let version = next();
    FlavorTextEntry {
        text,
        language,
        version,
    }
}

#[cfg(test)]
mod property_tests;
