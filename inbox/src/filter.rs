use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    models::{ChannelConversation, Conversation, DirectConversation, RankedItem},
    pin::PinSet,
};

/// Tabs above the conversation list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConversationFilter {
    #[default]
    All,
    Unread,
    Groups,
    Dms,
    Pinned,
}

impl ConversationFilter {
    /// Display order of the tabs
    pub const TABS: [ConversationFilter; 5] = [
        ConversationFilter::All,
        ConversationFilter::Unread,
        ConversationFilter::Pinned,
        ConversationFilter::Groups,
        ConversationFilter::Dms,
    ];

    /// Parse a tab key, treating anything unrecognised as `all`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn key(&self) -> &'static str {
        match self {
            ConversationFilter::All => "all",
            ConversationFilter::Unread => "unread",
            ConversationFilter::Groups => "groups",
            ConversationFilter::Dms => "dms",
            ConversationFilter::Pinned => "pinned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConversationFilter::All => "All",
            ConversationFilter::Unread => "Unread",
            ConversationFilter::Groups => "Groups",
            ConversationFilter::Dms => "DMs",
            ConversationFilter::Pinned => "Pinned",
        }
    }

    pub fn matches(&self, item: &RankedItem, pins: &PinSet) -> bool {
        match self {
            ConversationFilter::All => true,
            ConversationFilter::Unread => item.has_unread(),
            ConversationFilter::Groups => matches!(item, RankedItem::Channel(_)),
            ConversationFilter::Dms => matches!(item, RankedItem::Direct(_)),
            ConversationFilter::Pinned => pins.contains_item(item),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown conversation filter `{}`", self.0)
    }
}

impl std::error::Error for UnknownFilter {}

impl FromStr for ConversationFilter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(ConversationFilter::All),
            "unread" => Ok(ConversationFilter::Unread),
            "groups" => Ok(ConversationFilter::Groups),
            "dms" => Ok(ConversationFilter::Dms),
            "pinned" => Ok(ConversationFilter::Pinned),
            _ => Err(UnknownFilter(value.to_string())),
        }
    }
}

impl fmt::Display for ConversationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: ConversationFilter,
    pub label: &'static str,
    pub count: usize,
}

/// Tab strip with the number shown next to each label.
///
/// The pinned count is the size of the pin set, not the number of
/// conversations it matches.
pub fn filter_tabs(
    channels: &[ChannelConversation],
    directs: &[DirectConversation],
    pins: &PinSet,
) -> Vec<FilterTab> {
    let unread = channels.iter().filter(|c| c.has_unread()).count()
        + directs.iter().filter(|d| d.has_unread()).count();

    ConversationFilter::TABS
        .iter()
        .map(|filter| FilterTab {
            filter: *filter,
            label: filter.label(),
            count: match filter {
                ConversationFilter::All => channels.len() + directs.len(),
                ConversationFilter::Unread => unread,
                ConversationFilter::Pinned => pins.len(),
                ConversationFilter::Groups => channels.len(),
                ConversationFilter::Dms => directs.len(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        for filter in ConversationFilter::TABS {
            assert_eq!(filter.key().parse::<ConversationFilter>(), Ok(filter));
        }
    }

    #[test]
    fn unknown_key_falls_back_to_all() {
        assert!("archived".parse::<ConversationFilter>().is_err());
        assert_eq!(
            ConversationFilter::parse_lenient("archived"),
            ConversationFilter::All
        );
        assert_eq!(ConversationFilter::parse_lenient("UNREAD"), ConversationFilter::All);
        assert_eq!(ConversationFilter::parse_lenient("dms"), ConversationFilter::Dms);
    }

    #[test]
    fn tabs_count_each_collection() {
        let channels = vec![
            ChannelConversation {
                id: "group-1".into(),
                unread_count: 2,
                ..Default::default()
            },
            ChannelConversation {
                id: "group-2".into(),
                ..Default::default()
            },
        ];
        let directs = vec![DirectConversation {
            id: "dm-1".into(),
            unread_count: 1,
            ..Default::default()
        }];
        let pins: PinSet = ["channel-9", "direct-9", "direct-1"].into_iter().collect();

        let counts: Vec<_> = filter_tabs(&channels, &directs, &pins)
            .into_iter()
            .map(|tab| (tab.label, tab.count))
            .collect();

        assert_eq!(
            counts,
            vec![("All", 3), ("Unread", 2), ("Pinned", 3), ("Groups", 2), ("DMs", 1)]
        );
    }
}
