/// An ordered, restartable collection of `(input, target)` training pairs.
///
/// Owned by the driver, never by the engine; `iter()` can be called once
/// per epoch, yielding the samples in insertion order every time.
pub struct Dataset {
    samples: Vec<(Vec<f64>, Vec<f64>)>,
}

impl Dataset {
    pub fn new(samples: Vec<(Vec<f64>, Vec<f64>)>) -> Dataset {
        Dataset { samples }
    }

    /// The four exclusive-or pairs: `(0,0)→0, (0,1)→1, (1,0)→1, (1,1)→0`.
    pub fn xor() -> Dataset {
        Dataset::new(vec![
            (vec![0.0, 0.0], vec![0.0]),
            (vec![0.0, 1.0], vec![1.0]),
            (vec![1.0, 0.0], vec![1.0]),
            (vec![1.0, 1.0], vec![0.0]),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.samples.iter().map(|(input, target)| (input.as_slice(), target.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
