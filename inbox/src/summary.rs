use crate::filter::ConversationFilter;

/// Line above the list, e.g. `"3 conversations • Unread"`.
pub fn results_caption(count: usize, filter: ConversationFilter) -> String {
    let plural = if count == 1 { "" } else { "s" };
    match filter {
        ConversationFilter::All => format!("{count} conversation{plural}"),
        _ => format!("{count} conversation{plural} • {}", filter.label()),
    }
}

pub fn sorting_hint(filter: ConversationFilter) -> Option<&'static str> {
    match filter {
        ConversationFilter::All => Some("Sorted by priority and recent activity"),
        _ => None,
    }
}

pub fn empty_caption(filter: ConversationFilter) -> String {
    match filter {
        ConversationFilter::All => "No conversations".to_string(),
        _ => format!("No {} conversations", filter.label().to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_pluralises_and_names_filter() {
        assert_eq!(results_caption(1, ConversationFilter::Unread), "1 conversation • Unread");
        assert_eq!(results_caption(0, ConversationFilter::Dms), "0 conversations • DMs");
        assert_eq!(results_caption(9, ConversationFilter::All), "9 conversations");
    }

    #[test]
    fn hint_only_for_all() {
        assert!(sorting_hint(ConversationFilter::All).is_some());
        assert_eq!(sorting_hint(ConversationFilter::Pinned), None);
    }

    #[test]
    fn empty_caption_lowercases_label() {
        assert_eq!(empty_caption(ConversationFilter::All), "No conversations");
        assert_eq!(empty_caption(ConversationFilter::Dms), "No dms conversations");
        assert_eq!(empty_caption(ConversationFilter::Unread), "No unread conversations");
    }
}
