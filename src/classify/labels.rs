use super::category::Category;
use super::category::N_CATEGORIES;

/// The set of categories one hand satisfies.
///
/// Stored as a bitmask indexed by [`Category::index`], so inserting the same
/// category twice is a no-op. Inserting a category also inserts everything it
/// [implies](Category::implies), transitively.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Labels(u32);

impl Labels {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub fn insert(&mut self, category: Category) {
        if !self.contains(category) {
            self.0 |= 1 << category.index();
            for implied in category.implies() {
                self.insert(*implied);
            }
        }
    }
    pub fn with(mut self, category: Category) -> Self {
        self.insert(category);
        self
    }
    pub fn contains(&self, category: Category) -> bool {
        self.0 & (1 << category.index()) != 0
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// Members in priority order, strongest first.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::all().into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Category> for Labels {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<Labels> for Vec<Category> {
    fn from(labels: Labels) -> Self {
        labels.iter().collect()
    }
}

impl std::fmt::Display for Labels {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = self.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{{{}}}", names.join(", "))
    }
}

const _: () = assert!(N_CATEGORIES <= u32::BITS as usize);
