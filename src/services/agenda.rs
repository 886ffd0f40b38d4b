//! Ordered-list operations on an agenda.
//!
//! Every operation takes the current list and returns a new one; callers swap
//! the result into their state. Unknown ids are no-ops, never errors.

use std::num::NonZeroU32;

use crate::models::{AgendaSummary, Topic, TopicId, TopicStatus};
use crate::services::topics::{generate_topics, IdGenerator};

/// Upper end of the suggested duration range.
///
/// Only shown as guidance by the editor; [`parse_minutes`] accepts larger values.
pub const ADVISORY_MAX_MINUTES: u32 = 180;

fn position_of(topics: &[Topic], id: &TopicId) -> Option<usize> {
    topics.iter().position(|t| &t.id == id)
}

/// Moves `source_id` to the position currently held by `target_id`.
///
/// Intervening topics shift by one and `order` is reassigned to `0..len`.
/// Returns an unchanged copy when the target is missing (`None` or unknown),
/// equals the source, or the source is unknown.
///
/// # Examples
///
/// ```
/// use agendaboard::services::agenda::reorder;
/// use agendaboard::services::topics::{generate_topics, SequentialIds};
///
/// let topics = generate_topics(&["A", "B", "C"], "Default", &mut SequentialIds::new());
/// let moved = reorder(&topics, &topics[0].id, Some(&topics[2].id));
/// let titles: Vec<&str> = moved.iter().map(|t| t.title.as_str()).collect();
/// assert_eq!(titles, ["B", "C", "A"]);
/// ```
#[must_use]
pub fn reorder(topics: &[Topic], source_id: &TopicId, target_id: Option<&TopicId>) -> Vec<Topic> {
    let Some(target_id) = target_id else {
        return topics.to_vec();
    };
    if source_id == target_id {
        return topics.to_vec();
    }

    let (Some(from), Some(to)) = (position_of(topics, source_id), position_of(topics, target_id))
    else {
        tracing::debug!(%source_id, %target_id, "reorder ignored: topic not found");
        return topics.to_vec();
    };

    let mut reordered = topics.to_vec();
    let moved = reordered.remove(from);
    reordered.insert(to, moved);
    for (index, topic) in reordered.iter_mut().enumerate() {
        topic.order = index;
    }

    tracing::debug!(%source_id, from, to, "topic moved");
    reordered
}

/// Moves a topic one step up (`delta = -1`) or down (`delta = 1`).
///
/// Equivalent to [`reorder`] with the neighbouring topic as target.
/// Moving past either end is a no-op.
#[must_use]
pub fn shift(topics: &[Topic], id: &TopicId, delta: isize) -> Vec<Topic> {
    let target = position_of(topics, id)
        .and_then(|index| index.checked_add_signed(delta))
        .and_then(|index| topics.get(index))
        .map(|t| t.id.clone());

    reorder(topics, id, target.as_ref())
}

/// Replaces the status of one topic.
#[must_use]
pub fn set_status(topics: &[Topic], id: &TopicId, status: TopicStatus) -> Vec<Topic> {
    topics
        .iter()
        .map(|topic| {
            if &topic.id == id {
                Topic {
                    status,
                    ..topic.clone()
                }
            } else {
                topic.clone()
            }
        })
        .collect()
}

/// Replaces the estimated duration of one topic.
///
/// Zero is unrepresentable; use [`parse_minutes`] to validate raw input first.
#[must_use]
pub fn set_duration(topics: &[Topic], id: &TopicId, minutes: NonZeroU32) -> Vec<Topic> {
    topics
        .iter()
        .map(|topic| {
            if &topic.id == id {
                Topic {
                    estimated_minutes: minutes.get(),
                    ..topic.clone()
                }
            } else {
                topic.clone()
            }
        })
        .collect()
}

/// Validates raw duration input from the editor.
///
/// Accepts a positive decimal integer with optional surrounding whitespace.
/// Rejects empty, non-numeric, zero, and negative input.
///
/// # Examples
///
/// ```
/// use agendaboard::services::agenda::parse_minutes;
///
/// assert_eq!(parse_minutes("42").map(|m| m.get()), Some(42));
/// assert_eq!(parse_minutes("0"), None);
/// assert_eq!(parse_minutes("-5"), None);
/// assert_eq!(parse_minutes("abc"), None);
/// assert_eq!(parse_minutes(""), None);
/// ```
#[must_use]
pub fn parse_minutes(input: &str) -> Option<NonZeroU32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u32>().ok().and_then(NonZeroU32::new)
}

/// Returns `true` when a duration is above the suggested range.
#[must_use]
pub const fn exceeds_advisory_max(minutes: u32) -> bool {
    minutes > ADVISORY_MAX_MINUTES
}

/// Rebuilds the agenda from its titles, discarding all edits and reordering.
pub fn reset<S, G>(titles: &[S], category: &str, ids: &mut G) -> Vec<Topic>
where
    S: AsRef<str>,
    G: IdGenerator + ?Sized,
{
    tracing::info!(topics = titles.len(), "agenda reset");
    generate_topics(titles, category, ids)
}

/// Summary figures for the summary strip.
#[must_use]
pub fn summarize(topics: &[Topic]) -> AgendaSummary {
    AgendaSummary::from_topics(topics)
}

/// Checks the list invariants: dense `order` values and unique ids.
#[must_use]
pub fn is_consistent(topics: &[Topic]) -> bool {
    let dense = topics.iter().enumerate().all(|(i, t)| t.order == i);
    let mut ids: Vec<&TopicId> = topics.iter().map(|t| &t.id).collect();
    ids.sort();
    ids.dedup();
    dense && ids.len() == topics.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use crate::services::topics::SequentialIds;

    fn agenda(titles: &[&str]) -> Vec<Topic> {
        generate_topics(titles, "Default", &mut SequentialIds::new())
    }

    fn titles(topics: &[Topic]) -> Vec<&str> {
        topics.iter().map(|t| t.title.as_str()).collect()
    }

    fn minutes(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_reorder_forward() {
        let topics = agenda(&["A", "B", "C", "D"]);
        let moved = reorder(&topics, &topics[0].id, Some(&topics[2].id));
        assert_eq!(titles(&moved), ["B", "C", "A", "D"]);
        assert!(is_consistent(&moved));
    }

    #[test]
    fn test_reorder_backward() {
        let topics = agenda(&["A", "B", "C", "D"]);
        let moved = reorder(&topics, &topics[3].id, Some(&topics[1].id));
        assert_eq!(titles(&moved), ["A", "D", "B", "C"]);
        assert!(is_consistent(&moved));
    }

    #[test]
    fn test_reorder_same_id_is_noop() {
        let topics = agenda(&["A", "B", "C"]);
        assert_eq!(reorder(&topics, &topics[1].id, Some(&topics[1].id)), topics);
    }

    #[test]
    fn test_reorder_missing_target_is_noop() {
        let topics = agenda(&["A", "B", "C"]);
        assert_eq!(reorder(&topics, &topics[0].id, None), topics);
        assert_eq!(
            reorder(&topics, &topics[0].id, Some(&TopicId::new("elsewhere"))),
            topics
        );
    }

    #[test]
    fn test_reorder_missing_source_is_noop() {
        let topics = agenda(&["A", "B", "C"]);
        assert_eq!(
            reorder(&topics, &TopicId::new("ghost"), Some(&topics[0].id)),
            topics
        );
    }

    #[test]
    fn test_reorder_inverse_restores_sequence() {
        let topics = agenda(&["A", "B", "C", "D", "E"]);
        for i in 0..topics.len() {
            for j in 0..topics.len() {
                let moved = reorder(&topics, &topics[i].id, Some(&topics[j].id));
                let back_target = moved[i].id.clone();
                let restored = reorder(&moved, &topics[i].id, Some(&back_target));
                assert_eq!(restored, topics, "move {i} -> {j} and back");
            }
        }
    }

    #[test]
    fn test_shift_up_and_down() {
        let topics = agenda(&["A", "B", "C"]);
        let down = shift(&topics, &topics[0].id, 1);
        assert_eq!(titles(&down), ["B", "A", "C"]);

        let up = shift(&down, &topics[2].id, -1);
        assert_eq!(titles(&up), ["B", "C", "A"]);

        assert_eq!(shift(&topics, &topics[0].id, -1), topics);
        assert_eq!(shift(&topics, &topics[2].id, 1), topics);
    }

    #[test]
    fn test_set_status_touches_only_target() {
        let topics = agenda(&["A", "B", "C"]);
        let updated = set_status(&topics, &topics[1].id, TopicStatus::Completed);

        assert_eq!(updated[1].status, TopicStatus::Completed);
        let mut expected = topics[1].clone();
        expected.status = TopicStatus::Completed;
        assert_eq!(updated[1], expected);
        assert_eq!(updated[0], topics[0]);
        assert_eq!(updated[2], topics[2]);
    }

    #[test]
    fn test_status_any_to_any() {
        let topics = agenda(&["A"]);
        let id = topics[0].id.clone();
        for from in TopicStatus::ALL {
            for to in TopicStatus::ALL {
                let start = set_status(&topics, &id, from);
                assert_eq!(set_status(&start, &id, to)[0].status, to);
            }
        }
    }

    #[test]
    fn test_set_status_unknown_id_is_noop() {
        let topics = agenda(&["A", "B"]);
        assert_eq!(
            set_status(&topics, &TopicId::new("nope"), TopicStatus::Deferred),
            topics
        );
    }

    #[test]
    fn test_set_duration() {
        let topics = agenda(&["A", "B"]);
        let updated = set_duration(&topics, &topics[0].id, minutes(42));
        assert_eq!(updated[0].estimated_minutes, 42);
        assert_eq!(updated[0].priority, Priority::Medium);
        assert_eq!(updated[1], topics[1]);
    }

    #[test]
    fn test_parse_minutes_rejects_invalid_input() {
        for input in ["0", "-5", "abc", "", "   ", "+3", "4.5", "1e3", "99999999999"] {
            assert_eq!(parse_minutes(input), None, "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_minutes_accepts_positive_integers() {
        assert_eq!(parse_minutes("42"), Some(minutes(42)));
        assert_eq!(parse_minutes(" 7 "), Some(minutes(7)));
        assert_eq!(parse_minutes("007"), Some(minutes(7)));
        assert_eq!(parse_minutes("500"), Some(minutes(500)));
    }

    #[test]
    fn test_rejected_input_leaves_prior_value() {
        let topics = agenda(&["A"]);
        let id = topics[0].id.clone();
        for input in ["0", "-5", "abc", ""] {
            let after = parse_minutes(input).map_or_else(
                || topics.clone(),
                |m| set_duration(&topics, &id, m),
            );
            assert_eq!(after[0].estimated_minutes, topics[0].estimated_minutes);
        }
        let after = parse_minutes("42").map_or_else(
            || topics.clone(),
            |m| set_duration(&topics, &id, m),
        );
        assert_eq!(after[0].estimated_minutes, 42);
    }

    #[test]
    fn test_advisory_max() {
        assert!(!exceeds_advisory_max(180));
        assert!(exceeds_advisory_max(181));
    }

    #[test]
    fn test_reset_matches_fresh_generation() {
        let titles_in = ["A", "B", "C"];
        let mut ids = SequentialIds::new();
        let original = generate_topics(&titles_in, "Default", &mut ids);

        let mut edited = reorder(&original, &original[0].id, Some(&original[2].id));
        edited = set_status(&edited, &original[1].id, TopicStatus::InProgress);
        edited = set_duration(&edited, &original[2].id, minutes(99));

        let reset_topics = reset(&titles_in, "Default", &mut ids);
        let fresh = generate_topics(&titles_in, "Default", &mut SequentialIds::new());

        assert_eq!(reset_topics.len(), fresh.len());
        for (a, b) in reset_topics.iter().zip(&fresh) {
            assert_eq!(Topic { id: b.id.clone(), ..a.clone() }, *b);
        }
        assert!(is_consistent(&reset_topics));
        assert!(reset_topics.iter().all(|t| original.iter().all(|o| o.id != t.id)));
    }

    #[test]
    fn test_is_consistent_detects_gaps_and_duplicates() {
        let mut topics = agenda(&["A", "B"]);
        assert!(is_consistent(&topics));
        topics[1].order = 5;
        assert!(!is_consistent(&topics));
        topics[1].order = 1;
        topics[1].id = topics[0].id.clone();
        assert!(!is_consistent(&topics));
    }
}
