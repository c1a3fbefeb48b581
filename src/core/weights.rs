use crate::core::errors::{GoalError, GoalResult};

/// How much each exemplar counts towards a histogram.
///
/// `PerExemplar` is aligned with the whole feature set, not with the index
/// subset being accumulated, so the same slice can be shared by every node.
#[derive(Debug, Clone, Copy, Default)]
pub enum Weights<'a> {
    #[default]
    Uniform,
    PerExemplar(&'a [f32]),
}

impl<'a> Weights<'a> {
    pub fn from_option(weights: Option<&'a [f32]>) -> Self {
        match weights {
            Some(w) => Weights::PerExemplar(w),
            None => Weights::Uniform,
        }
    }

    #[inline]
    pub fn weight_of(&self, exemplar: usize) -> GoalResult<f64> {
        match self {
            Weights::Uniform => Ok(1.0),
            Weights::PerExemplar(w) => {
                let weight = *w.get(exemplar).ok_or(GoalError::MissingWeight {
                    exemplar,
                    len: w.len(),
                })?;
                if !weight.is_finite() || weight < 0.0 {
                    return Err(GoalError::InvalidWeight { exemplar, weight });
                }
                Ok(weight as f64)
            }
        }
    }
}

impl<'a> From<&'a [f32]> for Weights<'a> {
    fn from(w: &'a [f32]) -> Self {
        Weights::PerExemplar(w)
    }
}
