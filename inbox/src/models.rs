use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

/// A group channel as listed in the messages screen.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelConversation {
    pub id: String,
    pub name: String,
    pub last_message: String,
    /// Relative label such as `"2m ago"`, not a real timestamp
    pub timestamp: String,
    pub unread_count: u32,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_channel: Option<String>,
}

/// A one-to-one thread with another dealer.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectConversation {
    pub id: String,
    pub name: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread_count: u32,
    pub priority: Priority,
    /// Initials shown in place of a picture
    pub avatar: String,
    #[serde(default)]
    pub is_online: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConversationTag {
    Channel,
    Direct,
}

impl ConversationTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationTag::Channel => "channel",
            ConversationTag::Direct => "direct",
        }
    }
}

impl fmt::Display for ConversationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by both conversation shapes.
pub trait Conversation {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn last_message(&self) -> &str;
    fn timestamp(&self) -> &str;
    fn unread_count(&self) -> u32;
    fn priority(&self) -> Priority;

    fn has_unread(&self) -> bool {
        self.unread_count() > 0
    }

    /// Unread and flagged `high`; the screen draws a priority bar for these.
    fn is_high_priority_unread(&self) -> bool {
        self.has_unread() && self.priority() == Priority::High
    }
}

macro_rules! impl_conversation {
    ($shape:ty) => {
        impl Conversation for $shape {
            fn id(&self) -> &str {
                &self.id
            }
            fn name(&self) -> &str {
                &self.name
            }
            fn last_message(&self) -> &str {
                &self.last_message
            }
            fn timestamp(&self) -> &str {
                &self.timestamp
            }
            fn unread_count(&self) -> u32 {
                self.unread_count
            }
            fn priority(&self) -> Priority {
                self.priority
            }
        }
    };
}

impl_conversation!(ChannelConversation);
impl_conversation!(DirectConversation);

/// A conversation of either kind, tagged with where it came from.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RankedItem {
    Channel(ChannelConversation),
    Direct(DirectConversation),
}

impl RankedItem {
    pub fn tag(&self) -> ConversationTag {
        match self {
            RankedItem::Channel(_) => ConversationTag::Channel,
            RankedItem::Direct(_) => ConversationTag::Direct,
        }
    }

    fn inner(&self) -> &dyn Conversation {
        match self {
            RankedItem::Channel(channel) => channel,
            RankedItem::Direct(direct) => direct,
        }
    }
}

impl Conversation for RankedItem {
    fn id(&self) -> &str {
        self.inner().id()
    }
    fn name(&self) -> &str {
        self.inner().name()
    }
    fn last_message(&self) -> &str {
        self.inner().last_message()
    }
    fn timestamp(&self) -> &str {
        self.inner().timestamp()
    }
    fn unread_count(&self) -> u32 {
        self.inner().unread_count()
    }
    fn priority(&self) -> Priority {
        self.inner().priority()
    }
}

/// Fixture document the CLI loads: both collections plus an optional pin list.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Eq, PartialEq)]
pub struct Inbox {
    #[serde(default)]
    pub channels: Vec<ChannelConversation>,
    #[serde(default)]
    pub directs: Vec<DirectConversation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<Vec<String>>,
}
