//! Tri-state predicate outcomes
//!
//! A predicate does not answer with a plain `bool`. Besides "holds" and "does
//! not hold" it can report that it could not give a verdict at all, for example
//! because the subject was missing when one was required. Combinators merge
//! these outcomes with two monoids:
//!
//! - [`PredicateStatus`] itself: the most severe status wins
//!   (`Fail` > `DoesNotMatch` > `Matches`), identity `Matches`. Used by `all_of`.
//! - [`AnyStatus`]: `Fail` still wins, but a single `Matches` outweighs any
//!   number of `DoesNotMatch` (`Fail` > `Matches` > `DoesNotMatch`), identity
//!   `DoesNotMatch`. Used by `any_of`.
//!
//! # Example
//!
//! ```
//! use satisfy::monoid::fold_all;
//! use satisfy::status::AnyStatus;
//! use satisfy::PredicateStatus::*;
//!
//! assert_eq!(fold_all([Matches, DoesNotMatch, Matches]), DoesNotMatch);
//! assert_eq!(fold_all([Matches, Fail, DoesNotMatch]), Fail);
//!
//! let any = fold_all([DoesNotMatch, Matches].map(AnyStatus));
//! assert_eq!(any, AnyStatus(Matches));
//! ```

use std::fmt;

use crate::{Monoid, Semigroup};

/// Outcome of evaluating a predicate against a subject.
///
/// Variants are declared in ascending severity, so the derived `Ord` orders
/// them the way aggregation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PredicateStatus {
    /// The condition holds.
    Matches,
    /// The subject was evaluated cleanly and the condition does not hold.
    DoesNotMatch,
    /// No verdict could be reached; the evaluation itself was invalid.
    Fail,
}

impl PredicateStatus {
    /// `Matches` for `true`, `DoesNotMatch` for `false`.
    ///
    /// # Example
    ///
    /// ```
    /// use satisfy::PredicateStatus;
    ///
    /// assert_eq!(PredicateStatus::from_bool(true), PredicateStatus::Matches);
    /// assert_eq!(PredicateStatus::from_bool(false), PredicateStatus::DoesNotMatch);
    /// ```
    pub fn from_bool(matches: bool) -> Self {
        if matches {
            PredicateStatus::Matches
        } else {
            PredicateStatus::DoesNotMatch
        }
    }

    /// True only for `Matches`.
    pub fn is_match(self) -> bool {
        self == PredicateStatus::Matches
    }

    /// True only for `Fail`.
    pub fn is_fail(self) -> bool {
        self == PredicateStatus::Fail
    }

    /// The status an inverted expectation (`to_not`) would see.
    ///
    /// `Fail` is not a verdict, so it stays `Fail`.
    ///
    /// # Example
    ///
    /// ```
    /// use satisfy::PredicateStatus;
    ///
    /// assert_eq!(PredicateStatus::Matches.negated(), PredicateStatus::DoesNotMatch);
    /// assert_eq!(PredicateStatus::Fail.negated(), PredicateStatus::Fail);
    /// ```
    pub fn negated(self) -> Self {
        match self {
            PredicateStatus::Matches => PredicateStatus::DoesNotMatch,
            PredicateStatus::DoesNotMatch => PredicateStatus::Matches,
            PredicateStatus::Fail => PredicateStatus::Fail,
        }
    }
}

impl From<bool> for PredicateStatus {
    fn from(matches: bool) -> Self {
        PredicateStatus::from_bool(matches)
    }
}

impl fmt::Display for PredicateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PredicateStatus::Matches => "matches",
            PredicateStatus::DoesNotMatch => "doesNotMatch",
            PredicateStatus::Fail => "fail",
        };
        f.write_str(name)
    }
}

// Most severe wins. `Fail` is absorbing, so it stays sticky across a fold.
impl Semigroup for PredicateStatus {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.max(other)
    }
}

impl Monoid for PredicateStatus {
    #[inline]
    fn empty() -> Self {
        PredicateStatus::Matches
    }
}

/// `PredicateStatus` under "any of" aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyStatus(pub PredicateStatus);

impl AnyStatus {
    fn rank(self) -> u8 {
        match self.0 {
            PredicateStatus::DoesNotMatch => 0,
            PredicateStatus::Matches => 1,
            PredicateStatus::Fail => 2,
        }
    }
}

impl Semigroup for AnyStatus {
    #[inline]
    fn combine(self, other: Self) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }
}

impl Monoid for AnyStatus {
    #[inline]
    fn empty() -> Self {
        AnyStatus(PredicateStatus::DoesNotMatch)
    }
}

impl From<PredicateStatus> for AnyStatus {
    fn from(status: PredicateStatus) -> Self {
        AnyStatus(status)
    }
}

impl From<AnyStatus> for PredicateStatus {
    fn from(status: AnyStatus) -> Self {
        status.0
    }
}
