use crate::domain::NewbornReport;

/// Pitch buckets rows are mapped onto (and column buckets likewise)
pub const BUCKETS: usize = 32;

/// Most voices sounded per generation
pub const MAX_VOICES: usize = 16;

/// Scale `pos` in `0..extent` onto `0..BUCKETS`
pub fn bucket(pos: usize, extent: usize) -> usize {
    if extent == 0 {
        return 0;
    }
    (pos * BUCKETS / extent).min(BUCKETS - 1)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Bin {
    weight: u32,
    column_sum: u32,
}

/// One generation's births, binned by pitch (row) with column positions folded in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BirthHistogram {
    bins: [Bin; BUCKETS],
}

/// A tone to play: which pitch, how loud relative to the busiest bucket, and
/// when within the tick (0.0 = at the tick, 1.0 = one period later).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voice {
    pub pitch_bucket: usize,
    pub gain: f32,
    pub onset: f32,
}

impl BirthHistogram {
    pub fn from_report(report: &NewbornReport) -> Self {
        let mut bins = [Bin::default(); BUCKETS];
        for (row, col) in report.positions() {
            let bin = &mut bins[bucket(row, report.height())];
            bin.weight += 1;
            bin.column_sum += bucket(col, report.width()) as u32;
        }
        Self { bins }
    }

    pub fn weight(&self, pitch_bucket: usize) -> u32 {
        self.bins.get(pitch_bucket).map_or(0, |b| b.weight)
    }

    pub fn non_empty(&self) -> usize {
        self.bins.iter().filter(|b| b.weight > 0).count()
    }

    /// Pick up to `MAX_VOICES` buckets, heaviest first (lower bucket wins ties)
    pub fn plan_voices(&self) -> Vec<Voice> {
        let mut candidates: Vec<(usize, Bin)> = self
            .bins
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, bin)| bin.weight > 0)
            .collect();
        // Stable sort keeps ascending bucket order among equal weights
        candidates.sort_by(|a, b| b.1.weight.cmp(&a.1.weight));
        candidates.truncate(MAX_VOICES);

        let Some(max) = candidates.first().map(|(_, bin)| bin.weight as f32) else {
            return Vec::new();
        };

        candidates
            .into_iter()
            .map(|(pitch_bucket, bin)| Voice {
                pitch_bucket,
                gain: bin.weight as f32 / max,
                onset: bin.column_sum as f32 / bin.weight as f32 / BUCKETS as f32,
            })
            .collect()
    }
}
