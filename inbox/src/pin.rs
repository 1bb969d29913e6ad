use std::collections::HashSet;

use crate::models::{Conversation, ConversationTag, RankedItem};

/// Key used to look a conversation up in a [`PinSet`].
///
/// Built from the tag and whatever follows the first `-` of the id, so
/// `"group-1"` tagged as a channel gives `"channel-1"`. An id without a
/// hyphen contributes an empty suffix.
pub fn composite_pin_key(item: &RankedItem) -> String {
    pin_key(item.tag(), item.id())
}

pub fn pin_key(tag: ConversationTag, id: &str) -> String {
    let suffix = id.split_once('-').map_or("", |(_, suffix)| suffix);
    format!("{tag}-{suffix}")
}

/// Read-only set of composite pin keys, fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinSet {
    keys: HashSet<String>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn contains_item(&self, item: &RankedItem) -> bool {
        self.contains_key(&composite_pin_key(item))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PinSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChannelConversation, DirectConversation};

    fn channel(id: &str) -> RankedItem {
        RankedItem::Channel(ChannelConversation {
            id: id.to_string(),
            ..Default::default()
        })
    }

    fn direct(id: &str) -> RankedItem {
        RankedItem::Direct(DirectConversation {
            id: id.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn key_uses_tag_and_suffix_after_first_hyphen() {
        assert_eq!(composite_pin_key(&channel("group-1")), "channel-1");
        assert_eq!(composite_pin_key(&direct("dm-12")), "direct-12");
    }

    #[test]
    fn key_keeps_everything_after_first_hyphen() {
        assert_eq!(composite_pin_key(&direct("dm-1-archived")), "direct-1-archived");
    }

    #[test]
    fn key_without_hyphen_has_empty_suffix() {
        assert_eq!(composite_pin_key(&channel("lobby")), "channel-");
        assert_eq!(composite_pin_key(&direct("")), "direct-");
    }

    #[test]
    fn same_suffix_different_tag_does_not_collide() {
        let pins: PinSet = ["direct-1"].into_iter().collect();

        assert!(pins.contains_item(&direct("dm-1")));
        assert!(!pins.contains_item(&channel("group-1")));
    }

    #[test]
    fn duplicate_keys_collapse() {
        let pins: PinSet = vec!["channel-1".to_string(), "channel-1".to_string()]
            .into_iter()
            .collect();

        assert_eq!(pins.len(), 1);
        assert!(!pins.is_empty());
        assert!(PinSet::new().is_empty());
    }
}
