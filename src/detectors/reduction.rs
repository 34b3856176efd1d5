//! Common-substring reduction of label groups.

use std::collections::BTreeSet;

use indexmap::IndexSet;
use tracing::debug;

use super::grouping::{Group, GroupExtraction};

/// Longest contiguous substring shared by every member.
///
/// Substrings are taken on character boundaries. When several substrings
/// share the maximum length the lexicographically smallest one is returned.
/// The empty string is common to any set of members, so an empty result
/// means nothing longer is shared (or `members` is empty).
pub fn longest_common_substring<S: AsRef<str>>(members: &[S]) -> String {
    let Some(shortest) = members
        .iter()
        .map(|member| member.as_ref())
        .min_by_key(|member| member.chars().count())
    else {
        return String::new();
    };

    let chars: Vec<char> = shortest.chars().collect();

    for len in (1..=chars.len()).rev() {
        let candidates: BTreeSet<String> = chars
            .windows(len)
            .map(|window| window.iter().collect())
            .collect();

        let shared = candidates.into_iter().find(|candidate| {
            members
                .iter()
                .all(|member| member.as_ref().contains(candidate.as_str()))
        });

        if let Some(found) = shared {
            return found;
        }
    }

    String::new()
}

/// Canonical label of a multi-member group: its trimmed common substring.
pub fn reduce_group(group: &Group) -> String {
    let members: Vec<&str> = group.iter().map(String::as_str).collect();
    longest_common_substring(&members).trim().to_string()
}

/// Replace every group with its canonical label and keep singletons as-is.
///
/// The result is deduplicated, singletons first in row order, then reduced
/// labels in group order. With `drop_empty`, groups that share no
/// non-whitespace text are discarded instead of contributing `""`.
pub fn reduce_labels(extraction: &GroupExtraction, drop_empty: bool) -> Vec<String> {
    let mut reduced: IndexSet<String> = extraction.singletons.iter().cloned().collect();

    for group in &extraction.groups {
        let canonical = reduce_group(group);
        debug!(members = group.len(), canonical = %canonical, "Reduced group");
        if canonical.is_empty() && drop_empty {
            continue;
        }
        reduced.insert(canonical);
    }

    reduced.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(values: &[&str]) -> Group {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn reduces_to_shared_prefix() {
        assert_eq!(reduce_group(&group(&["Age in years", "Age"])), "Age");
        assert_eq!(
            reduce_group(&group(&["Customer Age", "Customer Age (years)"])),
            "Customer Age"
        );
    }

    #[test]
    fn result_is_trimmed() {
        assert_eq!(
            reduce_group(&group(&["Age of respondent", "Age of household"])),
            "Age of"
        );
        assert_eq!(
            longest_common_substring(&["Age of respondent", "Age of household"]),
            "Age of "
        );
    }

    #[test]
    fn substring_must_be_shared_by_all_members() {
        let members = ["Household income", "Personal income", "income bracket"];
        assert_eq!(longest_common_substring(&members), "income");
    }

    #[test]
    fn ties_pick_lexicographically_smallest() {
        assert_eq!(longest_common_substring(&["abXcd", "cdYab"]), "ab");
        assert_eq!(longest_common_substring(&["cdYab", "abXcd"]), "ab");
    }

    #[test]
    fn nothing_shared_gives_empty_string() {
        assert_eq!(longest_common_substring(&["abc", "xyz"]), "");
        assert_eq!(longest_common_substring::<&str>(&[]), "");
    }

    #[test]
    fn handles_multibyte_characters() {
        assert_eq!(longest_common_substring(&["Größe (cm)", "Größe"]), "Größe");
    }

    #[test]
    fn single_member_is_its_own_substring() {
        assert_eq!(longest_common_substring(&["Region"]), "Region");
    }

    #[test]
    fn reduced_labels_are_deduplicated() {
        let extraction = GroupExtraction {
            groups: vec![
                group(&["Age", "Age in years"]),
                group(&["Age (years)", "Age group"]),
            ],
            singletons: vec!["Region".to_string()],
        };

        assert_eq!(reduce_labels(&extraction, false), vec!["Region", "Age"]);
    }

    #[test]
    fn singleton_matching_a_reduction_appears_once() {
        let extraction = GroupExtraction {
            groups: vec![group(&["Age", "Age in years"])],
            singletons: vec!["Age".to_string()],
        };
        assert_eq!(reduce_labels(&extraction, false), vec!["Age"]);
    }

    #[test]
    fn empty_reductions_are_kept_unless_dropped() {
        let extraction = GroupExtraction {
            groups: vec![group(&["abc", "xyz"])],
            singletons: vec!["Region".to_string()],
        };

        assert_eq!(reduce_labels(&extraction, false), vec!["Region", ""]);
        assert_eq!(reduce_labels(&extraction, true), vec!["Region"]);
    }
}
