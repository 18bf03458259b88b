//! CLI module for the ideapulse application
//!
//! This module handles the command-line interface for interacting with the
//! idea store, the mutation gateway and the stats layer.
use std::{
    io::{stdin, stdout, Write},
    sync::{Arc, Mutex},
};

use console::style;
use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use log::info;

use crate::{
    helper::{has_tag, parse_tags},
    stats, ChartKind, Commands, Config, Idea, IdeaError, IdeaStore, Mood, MutationGateway,
    Result, Theme,
};

/// CLI Application handler - processes CLI commands against the idea store
pub struct App {
    /// The one authoritative in-memory copy of the collection
    ideas: Arc<Mutex<Vec<Idea>>>,

    /// The idea storage backend
    store: Arc<IdeaStore>,

    /// Stable entry point for destructive bulk operations
    gateway: MutationGateway,

    /// Application configuration
    config: Config,
}

impl App {
    /// Create a new CLI application rooted at the configured data directory.
    ///
    /// Loads the collection once; on a first run (slot never written) the
    /// store is seeded with the example ideas.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(IdeaStore::new(config.data_dir.clone()));

        let mut loaded = store.load();
        if loaded.is_empty() && !store.has_data() {
            info!("First run, seeding example ideas");
            loaded = IdeaStore::defaults();
            store.save(&loaded);
        }

        let ideas = Arc::new(Mutex::new(loaded));
        let gateway = MutationGateway::new(Arc::clone(&ideas), Arc::clone(&store));

        Self {
            ideas,
            store,
            gateway,
            config,
        }
    }

    /// Run the CLI application with the given command
    pub fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Add {
                content,
                mood,
                tags,
            } => self.handle_add(content, mood, tags)?,

            Commands::List {
                tag,
                mood,
                limit,
                json,
            } => self.handle_list(tag, mood, limit, json)?,

            Commands::Search { query, limit } => self.handle_search(query, limit)?,

            Commands::Edit {
                id,
                content,
                mood,
                tags,
            } => self.handle_edit(id, content, mood, tags)?,

            Commands::Delete { id, force } => self.handle_delete(id, force)?,

            Commands::DeleteAll { force } => self.handle_delete_all(force)?,

            Commands::Stats { chart } => self.handle_stats(chart)?,

            Commands::Theme { theme } => self.handle_theme(theme)?,
        }

        Ok(())
    }

    fn handle_add(&self, content: String, mood: String, tags: Option<String>) -> Result<()> {
        // Empty content is rejected here, not by the factory.
        if content.trim().is_empty() {
            return Err(IdeaError::ApplicationError {
                message: "Idea content must not be empty".to_string(),
            });
        }

        let mood: Mood = mood.parse()?;
        let idea = Idea::new(content, mood, parse_tags(tags));
        let id = idea.id.clone();

        let mut ideas = self.lock_ideas()?;
        // Newest-first convention: new ideas are prepended.
        ideas.insert(0, idea);
        self.store.save(&ideas);

        println!("Idea captured with ID: {}", id);
        Ok(())
    }

    fn handle_list(
        &self,
        tag: Option<String>,
        mood: Option<String>,
        limit: Option<usize>,
        json: bool,
    ) -> Result<()> {
        let mood_filter = mood.as_deref().map(str::parse::<Mood>).transpose()?;

        let mut matched: Vec<Idea> = {
            let ideas = self.lock_ideas()?;
            ideas
                .iter()
                .filter(|idea| tag.as_deref().map_or(true, |t| has_tag(idea, t)))
                .filter(|idea| mood_filter.map_or(true, |m| idea.mood == m))
                .cloned()
                .collect()
        };
        matched.truncate(limit.unwrap_or(self.config.list_limit));

        if json {
            println!("{}", serde_json::to_string_pretty(&matched)?);
        } else if matched.is_empty() {
            println!("No ideas found");
        } else {
            for idea in &matched {
                self.print_idea(idea);
            }
        }
        Ok(())
    }

    fn handle_search(&self, query: String, limit: Option<usize>) -> Result<()> {
        let matcher = SkimMatcherV2::default();

        let mut scored: Vec<(i64, Idea)> = {
            let ideas = self.lock_ideas()?;
            ideas
                .iter()
                .filter_map(|idea| {
                    matcher
                        .fuzzy_match(&idea.content, &query)
                        .map(|score| (score, idea.clone()))
                })
                .collect()
        };
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(limit.unwrap_or(self.config.list_limit));

        if scored.is_empty() {
            println!("No ideas matched '{}'", query);
        } else {
            for (_, idea) in &scored {
                self.print_idea(idea);
            }
        }
        Ok(())
    }

    fn handle_edit(
        &self,
        id: String,
        content: Option<String>,
        mood: Option<String>,
        tags: Option<String>,
    ) -> Result<()> {
        let mood = mood.as_deref().map(str::parse::<Mood>).transpose()?;
        if let Some(content) = &content {
            if content.trim().is_empty() {
                return Err(IdeaError::ApplicationError {
                    message: "Idea content must not be empty".to_string(),
                });
            }
        }

        let mut ideas = self.lock_ideas()?;
        let idea = ideas
            .iter_mut()
            .find(|idea| idea.id == id)
            .ok_or(IdeaError::IdeaNotFound { id: id.clone() })?;

        if let Some(content) = content {
            idea.content = content;
        }
        if let Some(mood) = mood {
            idea.mood = mood;
        }
        if let Some(tags) = tags {
            idea.tags = parse_tags(Some(tags));
            // The replacement list supersedes any legacy single tag.
            idea.tag = None;
        }
        // Timestamp tracks last modification.
        idea.timestamp = chrono::Utc::now();

        self.store.save(&ideas);
        println!("Idea {} updated", id);
        Ok(())
    }

    fn handle_delete(&self, id: String, force: bool) -> Result<()> {
        if !force && !self.confirm(&format!("Delete idea {}?", id))? {
            println!("Aborted");
            return Ok(());
        }
        self.gateway.delete_one(&id)?;
        println!("Idea {} deleted", id);
        Ok(())
    }

    fn handle_delete_all(&self, force: bool) -> Result<()> {
        if !force && !self.confirm("Delete ALL ideas?")? {
            println!("Aborted");
            return Ok(());
        }
        self.gateway.delete_all()?;
        println!("All ideas deleted");
        Ok(())
    }

    fn handle_stats(&self, chart: ChartKind) -> Result<()> {
        let ideas = self.lock_ideas()?.clone();

        println!("{}", style("Idea statistics").bold());
        println!("Total ideas:    {}", ideas.len());
        println!("Last 7 days:    {}", stats::last_week_count(&ideas));
        println!("Tagged ideas:   {}%", stats::tagged_share(&ideas));
        match stats::most_active_hour(&ideas) {
            Some(hour) => println!("Most active at: {:02}:00", hour),
            None => println!("Most active at: no data"),
        }

        let top = stats::top_tags(&ideas, 5);
        if !top.is_empty() {
            println!("\n{}", style("Top tags").bold());
            for (tag, count) in top {
                println!("  {:<16} {}", tag, count);
            }
        }

        println!("\n{}", style("Mood distribution").bold());
        let distribution = stats::mood_distribution(&ideas);
        println!("{}", chart.strategy().render(&distribution));
        Ok(())
    }

    fn handle_theme(&self, theme: Option<String>) -> Result<()> {
        match theme {
            Some(value) => {
                let theme: Theme = value.parse()?;
                self.store.save_theme(theme);
                println!("Theme set to {}", theme);
            }
            None => match self.store.load_theme() {
                Some(theme) => println!("{}", theme),
                None => println!("No theme preference stored"),
            },
        }
        Ok(())
    }

    fn print_idea(&self, idea: &Idea) {
        let tags = if idea.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", idea.tags.join(", "))
        };
        println!(
            "{} {} {}{}  {}",
            style(&idea.id).dim(),
            idea.mood.emoji(),
            idea.content,
            style(tags).cyan(),
            style(idea.timestamp.format("%Y-%m-%d %H:%M")).dim()
        );
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{} [y/N] ", prompt);
        stdout().flush()?;
        let mut answer = String::new();
        stdin().read_line(&mut answer)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn lock_ideas(&self) -> Result<std::sync::MutexGuard<'_, Vec<Idea>>> {
        self.ideas.lock().map_err(|_| IdeaError::ApplicationError {
            message: "Failed to acquire lock on idea collection".to_string(),
        })
    }
}
