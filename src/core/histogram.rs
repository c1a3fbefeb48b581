use crate::core::errors::{GoalError, GoalResult};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

const ENTRY_BYTES: usize = size_of::<f32>();

/// Per-class mass accumulated from a set of exemplars.
///
/// Never normalised in place; callers ask for [`ClassHistogram::distribution`]
/// when they need probabilities. The persisted form is `len()` native-endian
/// `f32` values back to back with nothing else around them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassHistogram {
    counts: Vec<f32>,
}

impl ClassHistogram {
    pub fn zeros(class_count: usize) -> Self {
        Self {
            counts: vec![0.0; class_count],
        }
    }

    pub fn from_counts(counts: Vec<f32>) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn counts(&self) -> &[f32] {
        &self.counts
    }

    /// Sum of every entry, accumulated in `f64`.
    pub fn total(&self) -> f64 {
        self.counts.iter().map(|&c| c as f64).sum()
    }

    /// Adds `extra` onto the low-indexed entries. Each entry is widened to
    /// `f64`, summed and narrowed back, so repeated updates lose no more
    /// precision than a single `f32` store.
    pub fn add_counts(&mut self, extra: &[f64]) -> GoalResult<()> {
        if extra.len() > self.counts.len() {
            return Err(GoalError::ShapeMismatch {
                got: extra.len(),
                expected: self.counts.len(),
            });
        }
        for (slot, &add) in self.counts.iter_mut().zip(extra) {
            *slot = (*slot as f64 + add) as f32;
        }
        Ok(())
    }

    /// Entries divided by their total, or `None` when the total is zero.
    pub fn distribution(&self) -> Option<Vec<f64>> {
        let total = self.total();
        if total > 0.0 {
            Some(self.counts.iter().map(|&c| c as f64 / total).collect())
        } else {
            None
        }
    }

    pub fn ensure_classes(&self, class_count: usize) -> GoalResult<()> {
        if self.counts.len() == class_count {
            Ok(())
        } else {
            Err(GoalError::ShapeMismatch {
                got: self.counts.len(),
                expected: class_count,
            })
        }
    }

    pub fn encoded_len(class_count: usize) -> usize {
        class_count * ENTRY_BYTES
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice::<f32, u8>(&self.counts).to_vec()
    }

    /// Decodes `class_count` entries, rejecting any that is negative or not finite.
    pub fn from_bytes(bytes: &[u8], class_count: usize) -> GoalResult<Self> {
        let expected = Self::encoded_len(class_count);
        if bytes.len() != expected {
            return Err(GoalError::MalformedAccumulator {
                len: bytes.len(),
                expected,
            });
        }
        // Copies rather than casts, the buffer need not be f32-aligned.
        let counts: Vec<f32> = bytemuck::pod_collect_to_vec(bytes);
        if let Some((index, &value)) = counts
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite() || **c < 0.0)
        {
            return Err(GoalError::InvalidAccumulatorEntry { index, value });
        }
        Ok(Self { counts })
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> GoalResult<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Reads exactly one encoded histogram of `class_count` entries.
    pub fn read_from<R: Read>(reader: &mut R, class_count: usize) -> GoalResult<Self> {
        let mut buf = vec![0u8; Self::encoded_len(class_count)];
        reader.read_exact(&mut buf)?;
        Self::from_bytes(&buf, class_count)
    }
}

macro_rules! histogram_entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(ClassHistogram);

        impl $name {
            pub fn new(histogram: ClassHistogram) -> Self {
                Self(histogram)
            }

            #[inline]
            pub fn histogram(&self) -> &ClassHistogram {
                &self.0
            }

            #[inline]
            pub fn counts(&self) -> &[f32] {
                self.0.counts()
            }

            pub fn to_bytes(&self) -> Vec<u8> {
                self.0.to_bytes()
            }

            pub fn from_bytes(bytes: &[u8], class_count: usize) -> GoalResult<Self> {
                ClassHistogram::from_bytes(bytes, class_count).map(Self)
            }

            pub fn write_to<W: Write>(&self, writer: &mut W) -> GoalResult<()> {
                self.0.write_to(writer)
            }

            pub fn read_from<R: Read>(reader: &mut R, class_count: usize) -> GoalResult<Self> {
                ClassHistogram::read_from(reader, class_count).map(Self)
            }
        }
    };
}

histogram_entity!(
    /// Training-time class histogram stored at a tree node.
    Stats
);

histogram_entity!(
    /// Held-out class histogram for a leaf, scored against its [`Stats`].
    Summary
);
