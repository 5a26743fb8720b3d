//! Publish topic scheme of the HTTP adapter.
//!
//! Topics are written `{channel}.{sub}.{topic}`. The first segment names the
//! channel, the rest form the subtopic. On the wire this becomes
//! `m/{domain}/c/{channel}/{sub}/{topic}`.

/// Separator of dotted topics.
pub const TOPIC_SEPARATOR: char = '.';

/// Errors raised while parsing a topic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicError {
    /// Topic had no channel
    #[error("topic has no channel")]
    EmptyChannel,
    /// A subtopic segment was empty, e.g. `chan..temp`
    #[error("empty subtopic segment at position {0}")]
    EmptySegment(usize),
}

/// A parsed publish topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Channel identifier
    pub channel: String,
    /// Subtopic segments, possibly empty
    pub subtopic: Vec<String>,
}

impl Topic {
    /// Parse a dotted topic.
    ///
    /// # Errors
    ///
    /// Returns error if the channel or any subtopic segment is empty.
    pub fn parse(topic: &str) -> Result<Self, TopicError> {
        let mut parts = topic.split(TOPIC_SEPARATOR);
        let channel = parts.next().unwrap_or_default();
        if channel.is_empty() {
            return Err(TopicError::EmptyChannel);
        }

        let mut subtopic = Vec::new();
        for (idx, part) in parts.enumerate() {
            if part.is_empty() {
                return Err(TopicError::EmptySegment(idx + 1));
            }
            subtopic.push(part.to_string());
        }

        Ok(Self {
            channel: channel.to_string(),
            subtopic,
        })
    }

    /// Subtopic in dotted form, as stored by the readers.
    #[must_use]
    pub fn subtopic(&self) -> Option<String> {
        if self.subtopic.is_empty() {
            None
        } else {
            Some(self.subtopic.join("."))
        }
    }

    /// Path segments of the adapter endpoint for `domain_id`.
    #[must_use]
    pub fn adapter_segments<'a>(&'a self, domain_id: &'a str) -> Vec<&'a str> {
        let mut segments = vec!["m", domain_id, "c", self.channel.as_str()];
        segments.extend(self.subtopic.iter().map(String::as_str));
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_parsing() {
        let topic = Topic::parse("chan1.room.temp").unwrap();
        assert_eq!(topic.channel, "chan1");
        assert_eq!(topic.subtopic, vec!["room", "temp"]);
        assert_eq!(topic.subtopic().as_deref(), Some("room.temp"));
    }

    #[test]
    fn bare_channel_has_no_subtopic() {
        let topic = Topic::parse("chan1").unwrap();
        assert!(topic.subtopic.is_empty());
        assert_eq!(topic.subtopic(), None);
        assert_eq!(topic.adapter_segments("d1"), vec!["m", "d1", "c", "chan1"]);
    }

    #[test]
    fn adapter_segments() {
        let topic = Topic::parse("chan1.temp").unwrap();
        assert_eq!(
            topic.adapter_segments("d1"),
            vec!["m", "d1", "c", "chan1", "temp"]
        );
    }

    #[test]
    fn rejects_empty_parts() {
        assert_eq!(Topic::parse(""), Err(TopicError::EmptyChannel));
        assert_eq!(Topic::parse(".temp"), Err(TopicError::EmptyChannel));
        assert_eq!(Topic::parse("chan..temp"), Err(TopicError::EmptySegment(1)));
        assert_eq!(Topic::parse("chan.temp."), Err(TopicError::EmptySegment(2)));
    }
}
