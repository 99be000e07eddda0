use crate::errors::{SolveError, WEIGHT_LIMIT};

/// Cost tiers for ranked choices: position `r` holds the cost of being
/// assigned to one's rank-`r` choice. Lists longer than the tiers reuse
/// the last tier, so the default scheme prices rank 1 at 1, rank 2 at 2
/// and every further rank at 4.
#[derive(Clone, Debug)]
pub struct WeightScheme {
    tiers: Vec<i64>,
}

impl Default for WeightScheme {
    fn default() -> Self {
        Self {
            tiers: vec![1, 2, 4],
        }
    }
}

impl WeightScheme {
    pub fn new(tiers: Vec<i64>) -> Result<Self, SolveError> {
        if tiers.is_empty() {
            return Err(SolveError::invalid("the default weight scheme is empty"));
        }
        check_range(&tiers)?;
        Ok(Self { tiers })
    }

    /// Default weights for a student with `len` choices: the tiers
    /// truncated or extended by repeating the last tier.
    pub fn for_len(&self, len: usize) -> Vec<i64> {
        let mut weights = self.tiers.clone();
        let last = weights[weights.len() - 1];
        weights.resize(len, last);
        weights
    }

    /// Effective weights for a student with `len` choices. Supplied
    /// points shorter than the choices are padded by repeating their
    /// last value; an absent or empty list falls back to the scheme;
    /// a list longer than the choices is a mismatch padding cannot fix.
    pub fn effective(
        &self,
        supplied: Option<&[i64]>,
        len: usize,
    ) -> Result<Vec<i64>, SolveError> {
        match supplied {
            None | Some([]) => Ok(self.for_len(len)),
            Some(points) => {
                if points.len() > len {
                    return Err(SolveError::invalid(format!(
                        "{} weights supplied for {} choices",
                        points.len(),
                        len
                    )));
                }
                check_range(points)?;
                let mut weights = points.to_vec();
                let last = weights[weights.len() - 1];
                weights.resize(len, last);
                Ok(weights)
            }
        }
    }
}

fn check_range(weights: &[i64]) -> Result<(), SolveError> {
    match weights.iter().find(|w| w.unsigned_abs() > WEIGHT_LIMIT as u64) {
        Some(w) => Err(SolveError::invalid(format!(
            "weight {w} exceeds the supported magnitude of {WEIGHT_LIMIT}"
        ))),
        None => Ok(()),
    }
}

#[test]
fn default_tiers_repeat_last_value() {
    let scheme = WeightScheme::default();
    assert_eq!(scheme.for_len(1), vec![1]);
    assert_eq!(scheme.for_len(3), vec![1, 2, 4]);
    assert_eq!(scheme.for_len(5), vec![1, 2, 4, 4, 4]);
}

#[test]
fn supplied_weights_pad_with_their_own_last_value() {
    let scheme = WeightScheme::default();
    assert_eq!(scheme.effective(Some(&[5]), 2).unwrap(), vec![5, 5]);
    assert_eq!(scheme.effective(Some(&[3, 1]), 4).unwrap(), vec![3, 1, 1, 1]);
    assert_eq!(scheme.effective(None, 2).unwrap(), vec![1, 2]);
    assert_eq!(scheme.effective(Some(&[]), 2).unwrap(), vec![1, 2]);
}

#[test]
fn more_weights_than_choices_is_rejected() {
    let scheme = WeightScheme::default();
    assert!(matches!(
        scheme.effective(Some(&[1, 2, 4]), 2),
        Err(SolveError::InvalidInput(_))
    ));
}

#[test]
fn weights_out_of_range_are_rejected() {
    let scheme = WeightScheme::default();
    assert!(scheme.effective(Some(&[-4, 0, 7]), 3).is_ok());
    assert!(scheme.effective(Some(&[WEIGHT_LIMIT + 1]), 1).is_err());
    assert!(scheme.effective(Some(&[-(WEIGHT_LIMIT + 1)]), 1).is_err());
    assert!(WeightScheme::new(vec![]).is_err());
}
