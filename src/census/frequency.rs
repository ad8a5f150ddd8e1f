use crate::classify::Category;
use crate::classify::Labels;
use crate::classify::N_CATEGORIES;

/// Category counts accumulated over a population of hands.
///
/// Batch-local tallies are built by one worker and then merged by
/// addition, which is commutative and associative, so the final table does
/// not depend on which worker classified what or in which order batches
/// were merged. `hands` counts hands witnessed, separately from the
/// per-category counts: in exclusive mode the two agree, in inclusive mode
/// the category counts sum to more.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Frequency {
    counts: [u64; N_CATEGORIES],
    hands: u64,
}

impl Frequency {
    /// one hand, one category
    pub fn witness(&mut self, category: Category) {
        self.hands += 1;
        self.counts[category.index()] += 1;
    }
    /// one hand, every category it carries
    pub fn witness_all(&mut self, labels: Labels) {
        self.hands += 1;
        for category in labels.iter() {
            self.counts[category.index()] += 1;
        }
    }
    pub fn absorb(&mut self, other: &Self) {
        self.hands += other.hands;
        self.counts
            .iter_mut()
            .zip(other.counts.iter())
            .for_each(|(a, b)| *a += b);
    }

    pub fn get(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }
    /// hands witnessed
    pub fn hands(&self) -> u64 {
        self.hands
    }
    /// category memberships witnessed
    pub fn labels(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of hands carrying this category.
    pub fn probability(&self, category: Category) -> f64 {
        match self.hands {
            0 => 0.0,
            n => self.get(category) as f64 / n as f64,
        }
    }
    /// Chance of seeing this category at least once in `turns` independent deals.
    pub fn cumulative(&self, category: Category, turns: u64) -> f64 {
        1.0 - (1.0 - self.probability(category)).powf(turns as f64)
    }

    /// (category, count) pairs, most frequent first, ties in priority order.
    pub fn ranked(&self) -> Vec<(Category, u64)> {
        let mut ranked = Category::all()
            .into_iter()
            .map(|c| (c, self.get(c)))
            .collect::<Vec<_>>();
        ranked.sort_by(|(a, x), (b, y)| y.cmp(x).then(a.cmp(b)));
        ranked
    }

    /// Categories whose count differs from a reference table, as
    /// (category, expected, actual). Categories missing from the reference
    /// are expected to be zero.
    pub fn discrepancies(&self, reference: &[(Category, u64)]) -> Vec<(Category, u64, u64)> {
        Category::all()
            .into_iter()
            .map(|c| {
                let expected = reference
                    .iter()
                    .find(|(r, _)| *r == c)
                    .map(|(_, n)| *n)
                    .unwrap_or(0);
                (c, expected, self.get(c))
            })
            .filter(|(_, expected, actual)| expected != actual)
            .collect()
    }
}

impl std::ops::Index<Category> for Frequency {
    type Output = u64;
    fn index(&self, category: Category) -> &u64 {
        &self.counts[category.index()]
    }
}

impl std::ops::AddAssign for Frequency {
    fn add_assign(&mut self, rhs: Self) {
        self.absorb(&rhs);
    }
}
impl std::ops::Add for Frequency {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self.absorb(&rhs);
        self
    }
}
impl std::iter::Sum for Frequency {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), std::ops::Add::add)
    }
}

/// category display name -> count, strongest category first
impl serde::Serialize for Frequency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            Category::all()
                .into_iter()
                .map(|c| (c.to_string(), self.get(c))),
        )
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (category, count) in self.ranked() {
            writeln!(
                f,
                "{:<24}{:>12}{:>14.6}%",
                category.to_string(),
                count,
                self.probability(category) * 100.0
            )?;
        }
        Ok(())
    }
}
