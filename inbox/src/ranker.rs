use std::cmp::Ordering;

use log::debug;

use crate::{
    filter::ConversationFilter,
    models::{ChannelConversation, Conversation, DirectConversation, RankedItem},
    pin::PinSet,
    timestamp::timestamp_index,
};

/// Merge channels and direct threads into the order the inbox shows them.
///
/// Channels come first, then directs, each in their given order; the filter
/// is applied and the remainder is stable sorted with [`compare`].
pub fn rank(
    channels: &[ChannelConversation],
    directs: &[DirectConversation],
    filter: ConversationFilter,
    pins: &PinSet,
) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = channels
        .iter()
        .cloned()
        .map(RankedItem::Channel)
        .chain(directs.iter().cloned().map(RankedItem::Direct))
        .filter(|item| filter.matches(item, pins))
        .collect();

    ranked.sort_by(|a, b| compare(a, b, pins));

    debug!(
        "ranked {} of {} conversations with filter {}",
        ranked.len(),
        channels.len() + directs.len(),
        filter
    );

    ranked
}

/// Pinned, then high priority unread, then unread, then most recent label.
pub fn compare(a: &RankedItem, b: &RankedItem, pins: &PinSet) -> Ordering {
    pins.contains_item(b)
        .cmp(&pins.contains_item(a))
        .then_with(|| {
            b.is_high_priority_unread()
                .cmp(&a.is_high_priority_unread())
        })
        .then_with(|| b.has_unread().cmp(&a.has_unread()))
        .then_with(|| timestamp_index(a.timestamp()).cmp(&timestamp_index(b.timestamp())))
}
