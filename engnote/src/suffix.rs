//! SI magnitude suffixes (yocto..yotta).

use std::collections::HashMap;

use crate::config::SuffixGroup;
use crate::error::ConfigError;

pub const BUCKET_COUNT: usize = 17;
pub const FIRST_EXPONENT: i32 = -24;

/// One exponent bucket of the suffix table.
#[derive(Debug, Clone, PartialEq)]
pub struct SuffixEntry {
    pub exponent: i32,
    /// Output string. Empty for exponent 0.
    pub canonical: String,
    /// Every character accepted on input, canonical included.
    pub aliases: Vec<char>,
}

impl SuffixEntry {
    pub fn bucket(&self) -> i32 {
        self.exponent / 3
    }
}

/// Bidirectional map between suffix characters and power-of-1000 exponents.
#[derive(Debug, Clone)]
pub struct SuffixTable {
    entries: Vec<SuffixEntry>,
    by_alias: HashMap<char, i32>,
}

impl SuffixTable {
    /// Build and validate the table. Groups must cover -24..=24 in steps of 3.
    pub fn new(groups: &[SuffixGroup]) -> Result<Self, ConfigError> {
        if groups.len() != BUCKET_COUNT {
            return Err(ConfigError::BucketCount {
                expected: BUCKET_COUNT,
                found: groups.len(),
            });
        }

        let mut entries = Vec::with_capacity(groups.len());
        let mut by_alias = HashMap::new();

        for (index, group) in groups.iter().enumerate() {
            let expected = FIRST_EXPONENT + 3 * index as i32;
            if group.exponent != expected {
                return Err(ConfigError::ExponentSequence {
                    index,
                    expected,
                    found: group.exponent,
                });
            }

            let canonical = group
                .aliases
                .first()
                .ok_or(ConfigError::EmptyGroup(group.exponent))?
                .clone();

            let mut aliases = Vec::with_capacity(group.aliases.len());
            for (position, alias) in group.aliases.iter().enumerate() {
                // Only the canonical of the unscaled bucket may be empty.
                if alias.is_empty() && position == 0 && group.exponent == 0 {
                    continue;
                }
                let ch = single_char(alias).ok_or_else(|| ConfigError::InvalidAlias {
                    alias: alias.clone(),
                    exponent: group.exponent,
                })?;
                if by_alias.insert(ch, group.exponent).is_some() {
                    return Err(ConfigError::DuplicateAlias(alias.clone()));
                }
                aliases.push(ch);
            }

            entries.push(SuffixEntry {
                exponent: group.exponent,
                canonical,
                aliases,
            });
        }

        Ok(Self { entries, by_alias })
    }

    pub fn exponent_for(&self, alias: char) -> Option<i32> {
        self.by_alias.get(&alias).copied()
    }

    pub fn is_suffix(&self, ch: char) -> bool {
        self.by_alias.contains_key(&ch)
    }

    /// Canonical suffix string for a bucket (exponent / 3).
    pub fn suffix_for(&self, bucket: i32) -> Option<&str> {
        let index = usize::try_from(bucket - self.min_bucket()).ok()?;
        self.entries.get(index).map(|e| e.canonical.as_str())
    }

    pub fn min_bucket(&self) -> i32 {
        FIRST_EXPONENT / 3
    }

    pub fn max_bucket(&self) -> i32 {
        self.min_bucket() + BUCKET_COUNT as i32 - 1
    }

    pub fn entries(&self) -> &[SuffixEntry] {
        &self.entries
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_whitespace() => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodecConfig;

    fn builtin_groups() -> Vec<SuffixGroup> {
        CodecConfig::builtin().unwrap().suffixes
    }

    #[test]
    fn test_builtin_table_lookup() {
        let table = SuffixTable::new(&builtin_groups()).unwrap();

        assert_eq!(table.exponent_for('k'), Some(3));
        assert_eq!(table.exponent_for('µ'), Some(-6));
        assert_eq!(table.exponent_for('u'), Some(-6));
        assert_eq!(table.exponent_for('R'), Some(0));
        assert_eq!(table.exponent_for('P'), Some(15));
        assert_eq!(table.exponent_for('x'), None);

        assert_eq!(table.suffix_for(-2), Some("µ"));
        assert_eq!(table.suffix_for(0), Some(""));
        assert_eq!(table.suffix_for(8), Some("Y"));
        assert_eq!(table.suffix_for(9), None);
        assert_eq!(table.suffix_for(-9), None);

        assert_eq!(table.min_bucket(), -8);
        assert_eq!(table.max_bucket(), 8);
        assert_eq!(table.entries().len(), 17);
    }

    #[test]
    fn test_rejects_missing_bucket() {
        let mut groups = builtin_groups();
        groups.remove(13);
        let err = SuffixTable::new(&groups).unwrap_err();
        assert!(matches!(err, ConfigError::BucketCount { found: 16, .. }));
    }

    #[test]
    fn test_rejects_out_of_order_exponents() {
        let mut groups = builtin_groups();
        groups.swap(3, 4);
        let err = SuffixTable::new(&groups).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ExponentSequence { index: 3, expected: -15, found: -12 }
        ));
    }

    #[test]
    fn test_rejects_duplicate_alias() {
        let mut groups = builtin_groups();
        groups[10].aliases.push("k".to_string());
        let err = SuffixTable::new(&groups).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateAlias(a) if a == "k"));
    }

    #[test]
    fn test_rejects_multi_char_alias() {
        let mut groups = builtin_groups();
        groups[9].aliases.push("kilo".to_string());
        assert!(matches!(
            SuffixTable::new(&groups),
            Err(ConfigError::InvalidAlias { exponent: 3, .. })
        ));
    }

    #[test]
    fn test_empty_alias_only_allowed_for_unscaled_bucket() {
        let mut groups = builtin_groups();
        groups[9].aliases.insert(0, String::new());
        assert!(SuffixTable::new(&groups).is_err());

        let mut groups = builtin_groups();
        groups[4].aliases.clear();
        assert!(matches!(
            SuffixTable::new(&groups),
            Err(ConfigError::EmptyGroup(-12))
        ));
    }
}
