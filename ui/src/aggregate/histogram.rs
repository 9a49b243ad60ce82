use api::Record;

/// Inclusive numeric range with its display label (`"4-6"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Bin {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bins(Vec<Bin>);

/// Repository count buckets: `1-3`, `4-6`, … `28-30`.
pub const REPO_BINS: (f64, f64, usize) = (1.0, 3.0, 10);

impl Bins {
    /// `count` consecutive integer ranges of `width` values starting at `start`.
    pub fn fixed_width(start: f64, width: f64, count: usize) -> Self {
        let bins = (0..count)
            .map(|index| {
                let min = start + width * index as f64;
                let max = min + width - 1.0;
                Bin {
                    label: format!("{min}-{max}"),
                    min,
                    max,
                }
            })
            .collect();
        Self(bins)
    }

    pub fn repositories() -> Self {
        let (start, width, count) = REPO_BINS;
        Self::fixed_width(start, width, count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bin> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the first bin containing `value`.
    pub fn locate(&self, value: f64) -> Option<usize> {
        self.0.iter().position(|bin| bin.contains(value))
    }
}

/// Count of records per bin, in bin order. Values outside every bin (and
/// records without a numeric `field`) are not counted.
pub fn histogram<'a, I>(records: I, field: &str, bins: &Bins) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = vec![0usize; bins.len()];
    for value in records.into_iter().filter_map(|record| record.number(field)) {
        if let Some(index) = bins.locate(value) {
            counts[index] += 1;
        }
    }
    bins.iter()
        .zip(counts)
        .map(|(bin, count)| (bin.label.clone(), count))
        .collect()
}
