//! Static content payloads for the About page tabs. Loaded once, never
//! mutated.

use super::{TabError, TabId};

/// One tab's content: description text and illustration URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEntry {
    pub id: TabId,
    pub text: &'static str,
    pub image_url: &'static str,
}

const HISTORY_TEXT: &str =
    "Lorem ipsum dolor sit amet consectetur adipisicing elit. Odit, mollitia.";
const VISION_TEXT: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. \
     Odit, mollitia. Lorem ipsum dolor sit amet consectetur adipisicing elit. Odit, mollitia.";
const GOALS_TEXT: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. \
     Odit, mollitia. Lorem ipsum dolor sit amet consectetur adipisicing elit. Odit, mollitia. \
     Lorem ipsum dolor sit amet consectetur adipisicing elit. Odit, mollitia.";

/// Ordered dataset, one entry per `TabId`, in `TabId::all()` order.
pub static TABS: [TabEntry; 3] = [
    TabEntry {
        id: TabId::History,
        text: HISTORY_TEXT,
        image_url:
            "https://www.absolutviajes.com/wp-content/uploads/2008/11/arquitectura-china-antigua.png",
    },
    TabEntry {
        id: TabId::Vision,
        text: VISION_TEXT,
        image_url: "https://img.lovepik.com/photo/50131/9815.jpg_wh860.jpg",
    },
    TabEntry {
        id: TabId::Goals,
        text: GOALS_TEXT,
        image_url: "http://valeriavasquez.weebly.com/uploads/4/8/7/7/48775221/1305460_orig.jpg",
    },
];

/// Entry for a tab. Total: every `TabId` has exactly one entry.
pub fn entry(id: TabId) -> &'static TabEntry {
    match id {
        TabId::History => &TABS[0],
        TabId::Vision => &TABS[1],
        TabId::Goals => &TABS[2],
    }
}

/// Validated lookup for untyped keys (e.g. a DOM id read off an event
/// target). Rejects unknown keys before any state is touched.
pub fn entry_by_key(key: &str) -> Result<&'static TabEntry, TabError> {
    key.parse::<TabId>().map(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_order_matches_tab_order() {
        let ids: Vec<TabId> = TABS.iter().map(|e| e.id).collect();
        assert_eq!(ids, TabId::all().to_vec());
    }

    #[test]
    fn entry_returns_the_matching_payload() {
        for id in TabId::all() {
            assert_eq!(entry(id).id, id);
        }
    }

    #[test]
    fn payloads_are_distinct_and_non_empty() {
        for e in &TABS {
            assert!(!e.text.is_empty());
            assert!(!e.image_url.is_empty());
        }
        assert_ne!(entry(TabId::History).text, entry(TabId::Vision).text);
        assert_ne!(
            entry(TabId::Vision).image_url,
            entry(TabId::Goals).image_url
        );
    }

    #[test]
    fn entry_by_key_accepts_known_keys() {
        let e = entry_by_key("vision").unwrap();
        assert_eq!(e.id, TabId::Vision);
    }

    #[test]
    fn entry_by_key_rejects_unknown_keys() {
        assert_eq!(
            entry_by_key("missing"),
            Err(TabError::UnknownTab("missing".to_string()))
        );
    }
}
