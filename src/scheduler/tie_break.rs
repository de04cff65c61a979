//! Tie-breaking between teachers that cover equally many subjects.

use serde::{Deserialize, Serialize};

use crate::models::Teacher;

/// How a candidate with the same coverage count as the current best is
/// treated during the left-to-right scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// A later candidate displaces the current best only when a best
    /// already exists and the candidate is strictly younger. The first
    /// candidate reaching a new maximum always becomes the anchor,
    /// whatever its age.
    #[default]
    YoungerOnTie,
    /// Equal counts never displace the current best; the first candidate
    /// found with the maximum count wins.
    FirstFound,
}

impl TieBreak {
    /// Whether `candidate`, tied on count, replaces `current`.
    pub fn prefers(self, candidate: &Teacher, current: Option<&Teacher>) -> bool {
        match self {
            TieBreak::YoungerOnTie => current.is_some_and(|best| candidate.age < best.age),
            TieBreak::FirstFound => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_younger_on_tie() {
        let old = Teacher::new("O", "Old", 50, "o@x.org");
        let young = Teacher::new("Y", "Young", 20, "y@x.org");
        let peer = Teacher::new("P", "Peer", 50, "p@x.org");

        assert!(TieBreak::YoungerOnTie.prefers(&young, Some(&old)));
        assert!(!TieBreak::YoungerOnTie.prefers(&old, Some(&young)));
        assert!(!TieBreak::YoungerOnTie.prefers(&peer, Some(&old)));
        // No anchor yet: a tie never creates one.
        assert!(!TieBreak::YoungerOnTie.prefers(&young, None));
    }

    #[test]
    fn test_first_found() {
        let old = Teacher::new("O", "Old", 50, "o@x.org");
        let young = Teacher::new("Y", "Young", 20, "y@x.org");
        assert!(!TieBreak::FirstFound.prefers(&young, Some(&old)));
        assert!(!TieBreak::FirstFound.prefers(&young, None));
    }

    #[test]
    fn test_default_and_serde() {
        assert_eq!(TieBreak::default(), TieBreak::YoungerOnTie);
        let parsed: TieBreak = serde_json::from_str("\"FirstFound\"").unwrap();
        assert_eq!(parsed, TieBreak::FirstFound);
    }
}
