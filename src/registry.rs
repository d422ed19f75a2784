//! Strategy registry.
//!
//! A fixed catalogue of operator implementations per strategy role, keyed
//! by short strings for declarative configuration. Each role carries an
//! explicit `Noop` entry that keeps the current behavior unchanged; an
//! unknown key fails fast with [`Error::UnknownStrategy`] instead of
//! silently defaulting.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

macro_rules! strategy_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $role:literal, { $($variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every catalogue entry for this role.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The configuration key this entry is registered under.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(key: &str) -> Result<Self, Error> {
                match key {
                    $($key => Ok($name::$variant),)+
                    _ => Err(Error::UnknownStrategy {
                        role: $role,
                        key: key.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

strategy_enum!(
    /// Parent-selection strategies.
    ///
    /// `Noop` keeps the framework default: a single parent group holding
    /// the first two population members.
    SelectionOp, "selection", {
        Noop => "noop",
        Tournament => "tournament",
        Roulette => "roulette",
        Rank => "rank",
    }
);

strategy_enum!(
    /// Crossover strategies. `Noop` clones the parents unchanged.
    CrossoverOp, "crossover", {
        Noop => "noop",
        Cycle => "cycle",
        Injection => "injection",
        MultiInjection => "multi_injection",
        Pmx => "pmx",
        SinglePointPmx => "single_pmx",
    }
);

strategy_enum!(
    /// Mutation strategies. `Noop` is the identity.
    MutationOp, "mutation", {
        Noop => "noop",
        AdjacentSwap => "adjacent_swap",
        SingleSwap => "single_swap",
        RandomSwap => "random_swap",
        Insertion => "insertion",
        Inversion => "inversion",
        Slide => "slide",
        Scramble => "scramble",
    }
);

strategy_enum!(
    /// Succession strategies. `Noop` keeps the merged population as is.
    SuccessionOp, "succession", {
        Noop => "noop",
        Best => "best",
        Rank => "rank",
        BestThenRandom => "best_then_random",
    }
);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_for_every_role() {
        for op in SelectionOp::ALL {
            assert_eq!(op.as_str().parse::<SelectionOp>().unwrap(), *op);
        }
        for op in CrossoverOp::ALL {
            assert_eq!(op.as_str().parse::<CrossoverOp>().unwrap(), *op);
        }
        for op in MutationOp::ALL {
            assert_eq!(op.as_str().parse::<MutationOp>().unwrap(), *op);
        }
        for op in SuccessionOp::ALL {
            assert_eq!(op.as_str().parse::<SuccessionOp>().unwrap(), *op);
        }
    }

    #[test]
    fn unknown_key_fails_fast() {
        let err = "simulated_annealing".parse::<CrossoverOp>().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownStrategy {
                role: "crossover",
                key: "simulated_annealing".to_string(),
            }
        );
    }

    #[test]
    fn every_role_has_a_noop_entry() {
        assert_eq!("noop".parse::<SelectionOp>().unwrap(), SelectionOp::Noop);
        assert_eq!("noop".parse::<CrossoverOp>().unwrap(), CrossoverOp::Noop);
        assert_eq!("noop".parse::<MutationOp>().unwrap(), MutationOp::Noop);
        assert_eq!("noop".parse::<SuccessionOp>().unwrap(), SuccessionOp::Noop);
    }

    #[test]
    fn display_matches_key() {
        assert_eq!(CrossoverOp::MultiInjection.to_string(), "multi_injection");
        assert_eq!(SuccessionOp::BestThenRandom.to_string(), "best_then_random");
    }
}
