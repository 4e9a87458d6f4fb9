use solana_sdk::{clock::Slot, signature::Signature};

/// Classification of one submitted transaction group.
///
/// `Retryable` is deliberately distinct from `Failed`: it means the fate of
/// the transaction was unknown when we stopped waiting, and it may still
/// land. `Failed` means the chain reported an explicit program error;
/// resubmitting the identical work cannot succeed and only burns fees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Confirmed { signature: Signature, slot: Slot },
    Failed { reason: String },
    Retryable,
}

impl SubmissionOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Retryable)
    }
}

/// Per-unit view of a batch submission, folded from per-group outcomes.
///
/// Pure aggregation: group outcomes and group sizes are walked in lockstep,
/// expanding each group's result into one flag per contained unit so callers
/// can map successes back to their input by position. All retry side
/// effects live in the submitter, none here.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One outcome per transaction group, in input order.
    pub outcomes: Vec<SubmissionOutcome>,
    /// Units carried by each group, in lockstep with `outcomes`.
    pub units_per_tx: Vec<usize>,
    /// Expanded per-unit success flags, preserving input order.
    pub unit_succeeded: Vec<bool>,
}

impl BatchReport {
    pub fn new(outcomes: Vec<SubmissionOutcome>, units_per_tx: Vec<usize>) -> Self {
        debug_assert_eq!(outcomes.len(), units_per_tx.len());
        let mut unit_succeeded = Vec::with_capacity(units_per_tx.iter().sum());
        for (outcome, &units) in outcomes.iter().zip(&units_per_tx) {
            unit_succeeded.extend(std::iter::repeat(outcome.is_confirmed()).take(units));
        }
        Self {
            outcomes,
            units_per_tx,
            unit_succeeded,
        }
    }

    /// Units whose transaction confirmed.
    pub fn num_succeeded(&self) -> usize {
        self.unit_succeeded.iter().filter(|ok| **ok).count()
    }

    /// Total units submitted.
    pub fn total(&self) -> usize {
        self.unit_succeeded.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.num_succeeded() == self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed() -> SubmissionOutcome {
        SubmissionOutcome::Confirmed {
            signature: Signature::default(),
            slot: 1,
        }
    }

    #[test]
    fn test_expansion_preserves_positions() {
        let outcomes = vec![
            confirmed(),
            SubmissionOutcome::Retryable,
            confirmed(),
        ];
        let report = BatchReport::new(outcomes, vec![2, 3, 1]);

        assert_eq!(
            report.unit_succeeded,
            vec![true, true, false, false, false, true]
        );
        assert_eq!(report.num_succeeded(), 3);
        assert_eq!(report.total(), 6);
        assert!(!report.all_succeeded());
    }

    #[test]
    fn test_failed_and_retryable_both_count_as_unsuccessful() {
        let outcomes = vec![
            SubmissionOutcome::Failed {
                reason: "custom program error".to_string(),
            },
            SubmissionOutcome::Retryable,
        ];
        let report = BatchReport::new(outcomes, vec![1, 1]);

        assert_eq!(report.num_succeeded(), 0);
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn test_empty_report() {
        let report = BatchReport::new(Vec::new(), Vec::new());
        assert_eq!(report.total(), 0);
        assert!(report.all_succeeded());
    }
}
