use std::{fs::File, io, io::BufReader, path::Path};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;
use comfy_table::{Attribute, Cell, Color, Table};
use log::{debug, info, warn};
use owo_colors::{OwoColorize, colors::xterm};

use crate::{
    cli::{Args, Commands, OutputFormat},
    filter::{ConversationFilter, FilterTab, filter_tabs},
    models::{Conversation, Inbox, RankedItem},
    pin::PinSet,
    ranker::rank,
    settings::{self, Settings},
    summary::{empty_caption, results_caption, sorting_hint},
};

pub fn load_inbox(path: &Path) -> Result<Inbox> {
    info!("reading conversations from {}", path.display());
    let file = File::open(path)
        .with_context(|| format!("Failed to open inbox file: {}", path.display()))?;
    let inbox: Inbox = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse inbox JSON from: {}", path.display()))?;

    debug!(
        "loaded {} channels and {} direct conversations",
        inbox.channels.len(),
        inbox.directs.len()
    );

    Ok(inbox)
}

/// Pins from the command line win over the inbox file, which wins over config.
pub fn resolve_pins(cli_pins: &[String], inbox: &Inbox, settings: &Settings) -> PinSet {
    let pins: PinSet = if !cli_pins.is_empty() {
        cli_pins.iter().cloned().collect()
    } else if let Some(pinned) = &inbox.pinned {
        pinned.iter().cloned().collect()
    } else {
        settings.pinned.iter().cloned().collect()
    };

    debug!("using {} pinned conversation keys", pins.len());
    pins
}

pub fn resolve_filter(cli_filter: Option<&str>, settings: &Settings) -> ConversationFilter {
    let Some(value) = cli_filter.or(settings.default_filter.as_deref()) else {
        return ConversationFilter::All;
    };

    match value.parse() {
        Ok(filter) => filter,
        Err(e) => {
            warn!("{e}, showing all conversations");
            ConversationFilter::All
        }
    }
}

pub fn ranked_table(items: &[RankedItem], pins: &PinSet) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "kind", "name", "last message", "time", "unread"]);

    for item in items {
        let marker = if pins.contains_item(item) { "📌" } else { "" };
        let kind = match item {
            RankedItem::Channel(channel) if channel.is_premium == Some(true) => "channel ★",
            RankedItem::Channel(_) => "channel",
            RankedItem::Direct(direct) if direct.is_online => "direct ●",
            RankedItem::Direct(_) => "direct",
        };
        let unread = if item.has_unread() {
            item.unread_count().to_string()
        } else {
            String::new()
        };

        let mut name = Cell::new(item.name());
        let mut unread = Cell::new(unread);
        if item.is_high_priority_unread() {
            name = name.fg(Color::Red).add_attribute(Attribute::Bold);
            unread = unread.fg(Color::Red);
        }

        table.add_row(vec![
            Cell::new(marker),
            Cell::new(kind),
            name,
            Cell::new(item.last_message()),
            Cell::new(item.timestamp()),
            unread,
        ]);
    }

    table
}

pub fn tabs_table(tabs: &[FilterTab]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["tab", "key", "count"]);
    for tab in tabs {
        table.add_row(vec![
            tab.label.to_string(),
            tab.filter.key().to_string(),
            tab.count.to_string(),
        ]);
    }
    table
}

fn print_ranked(items: &[RankedItem], filter: ConversationFilter, pins: &PinSet) {
    if items.is_empty() {
        println!("{}", empty_caption(filter).yellow());
        return;
    }

    println!(
        "{}",
        results_caption(items.len(), filter).bg::<xterm::Gray>()
    );
    if let Some(hint) = sorting_hint(filter) {
        println!("{}", hint.dimmed());
    }
    println!("{}", ranked_table(items, pins));
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Rank {
            file,
            filter,
            pins,
            format,
        } => {
            let settings = settings::load_settings().context("Failed to load settings")?;
            let inbox = load_inbox(&file)?;
            let pins = resolve_pins(&pins, &inbox, &settings);
            let filter = resolve_filter(filter.as_deref(), &settings);

            let ranked = rank(&inbox.channels, &inbox.directs, filter, &pins);

            match format {
                OutputFormat::Table => print_ranked(&ranked, filter, &pins),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
            }
        }
        Commands::Tabs { file, pins, format } => {
            let settings = settings::load_settings().context("Failed to load settings")?;
            let inbox = load_inbox(&file)?;
            let pins = resolve_pins(&pins, &inbox, &settings);

            let tabs = filter_tabs(&inbox.channels, &inbox.directs, &pins);

            match format {
                OutputFormat::Table => println!("{}", tabs_table(&tabs)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tabs)?),
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
