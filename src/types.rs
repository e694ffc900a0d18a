use crate::views::filters::{EnumWithAlternativeNames, LocalizableName};

/// Kind of work sold on the marketplace.
#[derive(strum::EnumCount, strum::EnumIter, PartialEq, Eq, Clone, Copy, strum::Display, Default, Debug, Hash)]
pub enum ContentKind {
    #[default]
    Music,
    Cover,
    Text,
}

impl EnumWithAlternativeNames for ContentKind {
    fn alternative_name(&self) -> &'static str {
        use ContentKind::*;
        match self {
            Music => "🎵",
            Cover => "🖼",
            Text => "📄",
        }
    }
}

impl ContentKind {
    /// Top-left and bottom-right stops of the cover gradient.
    pub fn gradient_rgb(&self) -> ([u8; 3], [u8; 3]) {
        match self {
            // purple-500 -> pink-500
            ContentKind::Music => ([168, 85, 247], [236, 72, 153]),
            // orange-500 -> blue-500
            ContentKind::Cover => ([249, 115, 22], [59, 130, 246]),
            // blue-600 -> cyan-400
            ContentKind::Text => ([37, 99, 235], [34, 211, 238]),
        }
    }
}

/// Block of the page currently rendered in the central panel.
#[derive(strum::EnumCount, strum::EnumIter, PartialEq, Eq, Clone, Copy, strum::Display, Default, Debug)]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Recommendations,
    Tops,
    Profile,
    Cart,
    Favorites,
    Create,
}

impl Section {
    /// Tabs of the navigation bar, in display order. Cart and profile are
    /// reachable from the header buttons only.
    pub const NAV: [Section; 6] = [
        Section::Home,
        Section::Catalog,
        Section::Recommendations,
        Section::Tops,
        Section::Favorites,
        Section::Create,
    ];
}

impl EnumWithAlternativeNames for Section {
    fn alternative_name(&self) -> &'static str {
        use Section::*;
        match self {
            Home => "🏠",
            Catalog => "▦",
            Recommendations => "✨",
            Tops => "📈",
            Profile => "👤",
            Cart => "🛒",
            Favorites => "♥",
            Create => "➕",
        }
    }
}

/// Catalog tab filter.
#[derive(strum::EnumCount, strum::EnumIter, PartialEq, Eq, Clone, Copy, strum::Display, Default, Debug)]
pub enum KindFilter {
    #[default]
    All,
    Music,
    Cover,
    Text,
}

impl KindFilter {
    pub fn matches(&self, kind: ContentKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Music => kind == ContentKind::Music,
            KindFilter::Cover => kind == ContentKind::Cover,
            KindFilter::Text => kind == ContentKind::Text,
        }
    }
}

impl EnumWithAlternativeNames for KindFilter {
    fn alternative_name(&self) -> &'static str {
        match self {
            KindFilter::All => "✱",
            KindFilter::Music => ContentKind::Music.alternative_name(),
            KindFilter::Cover => ContentKind::Cover.alternative_name(),
            KindFilter::Text => ContentKind::Text.alternative_name(),
        }
    }
}

// Localization keys

impl LocalizableName for ContentKind {
    fn loc_key(&self) -> &'static str {
        match self {
            ContentKind::Music => "kind-music",
            ContentKind::Cover => "kind-cover",
            ContentKind::Text => "kind-text",
        }
    }
}

impl LocalizableName for Section {
    fn loc_key(&self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Catalog => "nav-catalog",
            Section::Recommendations => "nav-recommendations",
            Section::Tops => "nav-tops",
            Section::Profile => "nav-profile",
            Section::Cart => "nav-cart",
            Section::Favorites => "nav-favorites",
            Section::Create => "nav-create",
        }
    }
}

impl LocalizableName for KindFilter {
    fn loc_key(&self) -> &'static str {
        match self {
            KindFilter::All => "filter-all",
            KindFilter::Music => "filter-music",
            KindFilter::Cover => "filter-cover",
            KindFilter::Text => "filter-text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn nav_skips_cart_and_profile() {
        assert_eq!(Section::NAV.len(), 6);
        assert!(!Section::NAV.contains(&Section::Cart));
        assert!(!Section::NAV.contains(&Section::Profile));
        assert_eq!(Section::NAV[0], Section::Home);
        assert_eq!(Section::NAV[5], Section::Create);
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn kind_filter_all_matches_every_kind() {
        for kind in ContentKind::iter() {
            assert!(KindFilter::All.matches(kind));
        }
        assert!(KindFilter::Music.matches(ContentKind::Music));
        assert!(!KindFilter::Music.matches(ContentKind::Text));
        assert!(!KindFilter::Text.matches(ContentKind::Cover));
    }
}
