/// A tested starting position with its mean traversal cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The starting position that was scored.
    pub position: f64,

    /// The mean traversal cost at this position.
    pub cost: f64,
}

impl Candidate {
    /// Creates a new candidate.
    #[must_use]
    pub fn new(position: f64, cost: f64) -> Self {
        Self { position, cost }
    }

    /// Returns the better of a running best and a new candidate.
    ///
    /// Strict comparison keeps the incumbent on ties; since candidates
    /// arrive in ascending position order, the leftmost of equal-cost
    /// candidates always wins.
    #[must_use]
    pub(super) fn better_of(best: Option<Self>, next: Self) -> Self {
        match best {
            Some(incumbent) if next.cost < incumbent.cost => next,
            Some(incumbent) => incumbent,
            None => next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_cost_wins() {
        let incumbent = Candidate::new(0.5, 1.0);
        let next = Candidate::new(0.6, 0.9);

        assert_eq!(Candidate::better_of(Some(incumbent), next), next);
    }

    #[test]
    fn tie_keeps_the_leftmost() {
        let incumbent = Candidate::new(0.5, 1.0);
        let next = Candidate::new(1.5, 1.0);

        assert_eq!(Candidate::better_of(Some(incumbent), next), incumbent);
    }

    #[test]
    fn first_candidate_always_wins() {
        let next = Candidate::new(0.0, f64::INFINITY);

        assert_eq!(Candidate::better_of(None, next), next);
    }
}
