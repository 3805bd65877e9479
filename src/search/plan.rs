//! A plan is a sequence of actions that leads from an initial state to a goal.
//! This module provides the [`Plan`] struct, which represents a plan.

use crate::search::{Problem, ProblemError};
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The total cost of executing the plan from `initial_state`.
    pub fn cost<P>(&self, problem: &P, initial_state: &P::State) -> Result<f64, ProblemError>
    where
        P: Problem<Action = A>,
    {
        let mut total = 0.;
        let mut state = initial_state.clone();
        for action in &self.steps {
            total += problem.cost(&state, action)?;
            state = problem.successor(&state, action)?;
        }
        Ok(total)
    }
}

impl<A: Display> Display for Plan<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, action) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

/// Reads one action per line. Blank lines and lines starting with `;` are
/// skipped.
impl<A: FromStr> FromStr for Plan<A> {
    type Err = A::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(';'))
            .map(str::parse)
            .collect()
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> FromIterator<A> for Plan<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn cost_sums_steps() {
        let problem = diamond_problem();
        let plan: Plan<&str> = ["cheap", "detour", "finish"].into_iter().collect();
        assert_approx_eq!(plan.cost(&problem, &"S").unwrap(), 3.);
        assert_approx_eq!(Plan::empty().cost(&problem, &"S").unwrap(), 0.);
    }

    #[test]
    fn cost_rejects_inapplicable_actions() {
        let problem = diamond_problem();
        let plan = Plan::new(vec!["finish"]);
        assert!(plan.cost(&problem, &"S").is_err());
    }

    #[test]
    fn display_puts_one_action_per_line() {
        let plan = Plan::new(vec!["a", "b", "c"]);
        assert_eq!(plan.to_string(), "a\nb\nc");
        assert_eq!(Plan::<&str>::empty().to_string(), "");
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let plan: Plan<u32> = "; found by astar\n3\n\n  1\n2\n".parse().unwrap();
        assert_eq!(plan.steps(), &[3, 1, 2]);
        assert!("1\nx".parse::<Plan<u32>>().is_err());
    }
}
