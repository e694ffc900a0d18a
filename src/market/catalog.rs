use crate::types::{ContentKind, KindFilter};

/// Number of leading positions in the tops list that get a rank badge.
pub const RANKED_PLACES: usize = 3;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: u32,
    pub kind: ContentKind,
    pub title: String,
    pub creator: String,
    /// Whole rubles.
    pub price: u64,
    pub likes: u32,
    pub image: String,
    pub trending: bool,
}

impl ContentItem {
    fn mock(
        id: u32,
        kind: ContentKind,
        title: &str,
        creator: &str,
        price: u64,
        likes: u32,
        trending: bool,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
            creator: creator.to_string(),
            price,
            likes,
            image: PLACEHOLDER_IMAGE.to_string(),
            trending,
        }
    }

    /// Case-insensitive substring match on title or creator.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&q) || self.creator.to_lowercase().contains(&q)
    }
}

/// Fixed list of content items. All queries keep list order unless noted.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// The six hard-coded items the storefront ships with.
    pub fn mock() -> Self {
        use ContentKind::*;
        Self::new(vec![
            ContentItem::mock(1, Music, "Летний Вайб", "DJ Alex", 2500, 1243, true),
            ContentItem::mock(2, Cover, "Минимал Арт", "ArtistPro", 1800, 892, false),
            ContentItem::mock(3, Text, "Про Любовь", "PoetMind", 1200, 634, true),
            ContentItem::mock(4, Music, "Электро Ритм", "BeatMaker", 3000, 2103, false),
            ContentItem::mock(5, Cover, "Градиент Неон", "DesignKing", 2200, 1456, true),
            ContentItem::mock(6, Text, "Мотивация", "WordSmith", 1500, 789, false),
        ])
    }

    pub fn all(&self) -> Vec<&ContentItem> {
        self.items.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, id: u32) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn trending(&self) -> Vec<&ContentItem> {
        self.items.iter().filter(|i| i.trending).collect()
    }

    /// "New arrivals" on the home page: the head of the list.
    pub fn newest(&self) -> Vec<&ContentItem> {
        self.items.iter().take(3).collect()
    }

    pub fn recommended(&self) -> Vec<&ContentItem> {
        self.items.iter().take(6).collect()
    }

    /// Sorted by likes, most liked first. Ties keep list order.
    pub fn tops(&self) -> Vec<&ContentItem> {
        let mut v = self.all();
        v.sort_by(|a, b| b.likes.cmp(&a.likes));
        v
    }

    /// Works shown on the profile page.
    pub fn my_works(&self) -> Vec<&ContentItem> {
        self.items.iter().take(3).collect()
    }

    pub fn by_kind(&self, filter: KindFilter) -> Vec<&ContentItem> {
        self.items.iter().filter(|i| filter.matches(i.kind)).collect()
    }

    /// Blank queries match everything.
    pub fn search(&self, query: &str) -> Vec<&ContentItem> {
        self.items.iter().filter(|i| i.matches_query(query)).collect()
    }

    /// Catalog tab filter combined with the header search text.
    pub fn browse(&self, filter: KindFilter, query: &str) -> Vec<&ContentItem> {
        self.search(query)
            .into_iter()
            .filter(|i| filter.matches(i.kind))
            .collect()
    }
}

/// Badge number for a position in the tops list, if it is ranked.
pub fn rank_badge(position: usize) -> Option<usize> {
    (position < RANKED_PLACES).then_some(position + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&ContentItem]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn by_kind_keeps_list_order() {
        let c = Catalog::mock();
        assert_eq!(ids(&c.by_kind(KindFilter::Music)), vec![1, 4]);
        assert_eq!(ids(&c.by_kind(KindFilter::Text)), vec![3, 6]);
        assert_eq!(c.by_kind(KindFilter::All).len(), 6);
    }

    #[test]
    fn search_matches_creator_case_insensitively() {
        let c = Catalog::mock();
        assert_eq!(ids(&c.search("dj alex")), vec![1]);
        assert_eq!(ids(&c.search("MAKER")), vec![4]);
        assert_eq!(c.search("  ").len(), 6);
        assert!(c.search("nothing like this").is_empty());
    }

    #[test]
    fn mock_has_six_items_in_order() {
        let c = Catalog::mock();
        assert_eq!(c.len(), 6);
        assert_eq!(ids(&c.all()), vec![1, 2, 3, 4, 5, 6]);
        let first = c.find(1).unwrap();
        assert_eq!(first.title, "Летний Вайб");
        assert_eq!(first.price, 2500);
        assert_eq!(first.image, "/placeholder.svg");
        assert!(c.find(42).is_none());
    }

    #[test]
    fn home_rows() {
        let c = Catalog::mock();
        assert_eq!(ids(&c.trending()), vec![1, 3, 5]);
        assert_eq!(ids(&c.newest()), vec![1, 2, 3]);
        assert_eq!(ids(&c.recommended()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&c.my_works()), vec![1, 2, 3]);
    }

    #[test]
    fn tops_sorted_by_likes_descending() {
        let c = Catalog::mock();
        assert_eq!(ids(&c.tops()), vec![4, 5, 1, 2, 6, 3]);
        // source list untouched
        assert_eq!(ids(&c.all()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn tops_tie_keeps_list_order() {
        let mut a = Catalog::mock().find(1).unwrap().clone();
        let mut b = Catalog::mock().find(2).unwrap().clone();
        a.likes = 10;
        b.likes = 10;
        let c = Catalog::new(vec![a, b]);
        assert_eq!(ids(&c.tops()), vec![1, 2]);
    }

    #[test]
    fn only_first_three_places_are_ranked() {
        assert_eq!(rank_badge(0), Some(1));
        assert_eq!(rank_badge(2), Some(3));
        assert_eq!(rank_badge(3), None);
    }

    #[test]
    fn browse_by_kind_and_query() {
        let c = Catalog::mock();
        assert_eq!(ids(&c.browse(KindFilter::All, "")), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&c.browse(KindFilter::Music, "")), vec![1, 4]);
        assert_eq!(ids(&c.browse(KindFilter::Cover, "  ")), vec![2, 5]);
        assert_eq!(ids(&c.browse(KindFilter::Text, "")), vec![3, 6]);
        // creator match, case-insensitive
        assert_eq!(ids(&c.browse(KindFilter::All, "dj")), vec![1]);
        // title match in Cyrillic, case-insensitive
        assert_eq!(ids(&c.browse(KindFilter::All, "градиент")), vec![5]);
        assert!(c.browse(KindFilter::Text, "beat").is_empty());
    }
}
