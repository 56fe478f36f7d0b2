use super::rotation::SLOT_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemId {
    Frontend,
    Ai,
    Profile,
    Ux,
    Backend,
}

impl ItemId {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemId::Frontend => "fe",
            ItemId::Ai => "ai",
            ItemId::Profile => "profile",
            ItemId::Ux => "ux",
            ItemId::Backend => "be",
        }
    }
}

/// Copy shown under the carousel while an item is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    pub text: &'static str,
    pub cta: &'static str,
    pub route: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentItem {
    pub id: ItemId,
    pub image: &'static str,
    pub label: &'static str,
    pub headline: Headline,
}

pub static CONTENT_ITEMS: [ContentItem; SLOT_COUNT] = [
    ContentItem {
        id: ItemId::Frontend,
        image: "/images/frontend.png",
        label: "Front-end",
        headline: Headline {
            text: "I craft interfaces that load fast and stay delightfully smooth.",
            cta: "See work",
            route: "/frontend",
        },
    },
    ContentItem {
        id: ItemId::Ai,
        image: "/images/ai.png",
        label: "AI Engineer",
        headline: Headline {
            text: "I use intelligence quietly, saving time without stealing attention.",
            cta: "Explore",
            route: "/ai",
        },
    },
    ContentItem {
        id: ItemId::Profile,
        image: "/images/profile.png",
        label: "Profile",
        headline: Headline {
            text: "I build end-to-end products with 4+ years of experience.",
            cta: "About me",
            route: "/about",
        },
    },
    ContentItem {
        id: ItemId::Ux,
        image: "/images/figma.png",
        label: "UX Designer",
        headline: Headline {
            text: "I design what feels obvious, respectful, and beautifully simple.",
            cta: "Case Studies",
            route: "/ux",
        },
    },
    ContentItem {
        id: ItemId::Backend,
        image: "/images/backend.png",
        label: "Back-end",
        headline: Headline {
            text: "I build clean APIs and dependable data pipelines that scale.",
            cta: "See work",
            route: "/backend",
        },
    },
];

pub fn item(index: usize) -> &'static ContentItem {
    &CONTENT_ITEMS[index % SLOT_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let ids = CONTENT_ITEMS.map(|c| c.id.as_str());
        assert_eq!(ids, ["fe", "ai", "profile", "ux", "be"]);
    }

    #[test]
    fn test_every_item_has_copy() {
        for content in &CONTENT_ITEMS {
            assert!(!content.headline.text.is_empty());
            assert!(!content.headline.cta.is_empty());
            assert!(content.headline.route.starts_with('/'));
            assert!(content.image.starts_with("/images/"));
        }
    }

    #[test]
    fn test_item_lookup_wraps() {
        assert_eq!(item(3).id, ItemId::Ux);
        assert_eq!(item(7).id, ItemId::Profile);
    }
}
