use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

mod create;
mod fork;
mod issue_comment;
mod issues;
mod pull_request;
mod push;
mod watch;

pub use create::*;
pub use fork::*;
pub use issue_comment::*;
pub use issues::*;
pub use pull_request::*;
pub use push::*;
pub use watch::*;

/// Tag used in place of the event type when a record doesn't carry one.
pub const UNKNOWN_TYPE: &str = "(unknown type)";

/// One entry of a user's activity feed, as returned by `GET /users/{username}/events`.
///
/// The feed is loosely typed: any field may be missing, `null`, or of an unexpected type. All of
/// these are treated as absent instead of failing the whole feed.
#[derive(Debug)]
pub struct Event {
    /// Raw value of the record's `type` key, e.g. `PushEvent`.
    pub tag: String,
    repo: Option<String>,
    pub kind: EventKind,
}

impl Event {
    /// Full name (`owner/name`) of the repository the event happened in.
    pub fn repo_name(&self) -> Option<&str> {
        self.repo.as_deref()
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        EventRecord::deserialize(deserializer).map(Event::from)
    }
}

#[derive(Debug)]
pub enum EventKind {
    Create(CreatePayload),
    Fork(ForkPayload),
    IssueComment(IssueCommentPayload),
    Issues(IssuesPayload),
    PullRequest(PullRequestPayload),
    Push(PushPayload),
    Watch(WatchPayload),
    /// Any event type we don't have a dedicated summary for.
    Other,
}

impl EventKind {
    fn from_record(tag: &str, payload: Value) -> Self {
        match tag {
            "CreateEvent" => Self::Create(payload_or_default(payload)),
            "ForkEvent" => Self::Fork(payload_or_default(payload)),
            "IssueCommentEvent" => Self::IssueComment(payload_or_default(payload)),
            "IssuesEvent" => Self::Issues(payload_or_default(payload)),
            "PullRequestEvent" => Self::PullRequest(payload_or_default(payload)),
            "PushEvent" => Self::Push(payload_or_default(payload)),
            "WatchEvent" => Self::Watch(payload_or_default(payload)),
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
    Repository,
    Branch,
    Tag,
}

impl RefType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::Branch => "branch",
            Self::Tag => "tag",
        }
    }
}

/// The record as it comes over the wire, before dispatching on its type.
#[derive(Debug, Deserialize)]
struct EventRecord {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    tag: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    repo: Option<Repo>,
    #[serde(default)]
    payload: Value,
}

#[derive(Debug, Deserialize)]
struct Repo {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
}

impl From<EventRecord> for Event {
    fn from(record: EventRecord) -> Self {
        let tag = record.tag.unwrap_or_else(|| UNKNOWN_TYPE.to_owned());
        let repo = record
            .repo
            .and_then(|repo| repo.name)
            .filter(|name| !name.is_empty());
        let kind = EventKind::from_record(&tag, record.payload);

        Self { tag, repo, kind }
    }
}

/// Deserializes an optional field, mapping `null` and values of the wrong type to `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// a payload that isn't an object at all is handled like an empty one
fn payload_or_default<T: DeserializeOwned + Default>(payload: Value) -> T {
    serde_json::from_value(payload).unwrap_or_default()
}
