//! Topic-set generation from agenda titles.
//!
//! Content for well-known titles comes from a fixed table; any other title
//! gets generic text derived from the title itself. Identifiers come from an
//! injected [`IdGenerator`] so generation is deterministic under test.

use crate::models::{Priority, Topic, TopicId, TopicStatus};

/// Default content for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TopicContent {
    description: &'static str,
    detailed_description: &'static str,
    estimated_minutes: u32,
    priority: Priority,
}

static TOPIC_CONTENT: [(&str, TopicContent); 3] = [
    (
        "$10 Million Fundraising Campaign",
        TopicContent {
            description: "Strategic planning for major capital campaign to secure $10M in funding for expanded operations and facility improvements.",
            detailed_description: "This comprehensive fundraising initiative aims to secure $10 million over the next 24 months through a combination of major gifts, corporate sponsorships, foundation grants, and community donations. The campaign will fund critical infrastructure improvements, program expansion, and establish an endowment fund for long-term sustainability. Key milestones include identifying lead donors, launching public phase, and implementing multi-channel engagement strategies.",
            estimated_minutes: 45,
            priority: Priority::High,
        },
    ),
    (
        "Potato Chip Bag of Cash Given by Eric Adams",
        TopicContent {
            description: "Review and discuss unexpected donation received from Mayor Eric Adams, ensuring proper documentation and allocation.",
            detailed_description: "An unusual but welcomed contribution has been received from Mayor Eric Adams office. This agenda item covers the proper acknowledgment, documentation for tax purposes, and strategic allocation of these funds. Discussion will include compliance requirements, public recognition considerations, and how to best leverage this donation for maximum community impact while maintaining transparency and accountability.",
            estimated_minutes: 20,
            priority: Priority::Medium,
        },
    ),
    (
        "Planning Friendly Gala (with a \"goat\" check)",
        TopicContent {
            description: "Coordinate annual fundraising gala featuring special \"goat check\" presentation ceremony for major donors.",
            detailed_description: "Our signature annual gala planning is underway, featuring the unique \"goat check\" tradition where major donors receive ceremonial oversized checks with goat-themed designs. This event combines fundraising with community celebration, expecting 200+ attendees. Planning includes venue selection, catering arrangements, entertainment lineup, sponsor recognition, and coordination of the special goat-themed activities that make our gala memorable and aligned with our mission.",
            estimated_minutes: 30,
            priority: Priority::High,
        },
    ),
];

/// Estimated minutes for titles without table content.
pub const GENERIC_MINUTES: u32 = 25;

/// Priority for titles without table content.
pub const GENERIC_PRIORITY: Priority = Priority::Medium;

/// Titles of the built-in agenda, in meeting order.
#[must_use]
pub fn default_titles() -> Vec<String> {
    TOPIC_CONTENT
        .iter()
        .map(|(title, _)| (*title).to_string())
        .collect()
}

/// Source of session-unique topic identifiers.
///
/// Implementations must never return the same id twice over their lifetime.
pub trait IdGenerator {
    /// Returns the next unused identifier.
    fn next_id(&mut self) -> TopicId;
}

/// Monotonic counter producing `topic-1`, `topic-2`, ...
///
/// Keeps counting across batches, so ids from a reset never collide with ids
/// handed out earlier by the same generator.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Creates a counter starting at `topic-1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TopicId {
        self.next += 1;
        TopicId::new(format!("topic-{}", self.next))
    }
}

/// Random UUID v4 tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> TopicId {
        TopicId::new(format!("topic-{}", uuid::Uuid::new_v4()))
    }
}

fn content_for(title: &str) -> Option<&'static TopicContent> {
    TOPIC_CONTENT
        .iter()
        .find(|(key, _)| *key == title)
        .map(|(_, content)| content)
}

/// Builds one topic for `title` at position `order`.
fn build_topic(title: &str, order: usize, id: TopicId) -> Topic {
    let (description, detailed_description, estimated_minutes, priority) =
        match content_for(title) {
            Some(content) => (
                content.description.to_string(),
                content.detailed_description.to_string(),
                content.estimated_minutes,
                content.priority,
            ),
            None => (
                format!("Strategic discussion and planning for {}", title.to_lowercase()),
                format!(
                    "This agenda item focuses on comprehensive planning and decision-making \
                     regarding {title}. The board will review current status, discuss strategic \
                     implications, and determine next steps for successful implementation."
                ),
                GENERIC_MINUTES,
                GENERIC_PRIORITY,
            ),
        };

    Topic {
        id,
        title: title.to_string(),
        description,
        detailed_description,
        status: TopicStatus::NotStarted,
        priority,
        estimated_minutes,
        order,
    }
}

/// Generates the topic list for an agenda.
///
/// One topic per title, in the same order, all `NotStarted`, with `order`
/// equal to the index. The organization category is accepted for content
/// tables keyed by category; the built-in table is category-independent.
///
/// # Examples
///
/// ```
/// use agendaboard::services::topics::{generate_topics, SequentialIds};
///
/// let mut ids = SequentialIds::new();
/// let topics = generate_topics(&["Budget", "Budget"], "Education", &mut ids);
/// assert_eq!(topics.len(), 2);
/// assert_ne!(topics[0].id, topics[1].id);
/// assert_eq!(topics[1].order, 1);
/// ```
pub fn generate_topics<S, G>(titles: &[S], _category: &str, ids: &mut G) -> Vec<Topic>
where
    S: AsRef<str>,
    G: IdGenerator + ?Sized,
{
    titles
        .iter()
        .enumerate()
        .map(|(order, title)| build_topic(title.as_ref(), order, ids.next_id()))
        .collect()
}
