use crate::{
    github::{
        events::{
            CreatePayload, ForkPayload, IssueCommentPayload, IssuesPayload, PullRequestPayload,
            PushPayload, RefType, WatchPayload,
        },
        Event, EventKind,
    },
    report::utils::{capitalize, present, shorten_content},
};

const UNKNOWN_REPO: &str = "(unknown repo)";
const UNNAMED_REF: &str = "(unnamed)";

/// Builds the one-line summary of `event`.
///
/// Every event type has its own wording, as long as the fields it needs are there. Anything else
/// falls back to `"{type} on {repo}"`.
pub fn describe_event(event: &Event) -> String {
    let repo = event.repo_name();

    let line = match &event.kind {
        EventKind::Create(payload) => describe_create(payload, repo),
        EventKind::Fork(payload) => describe_fork(payload, repo),
        EventKind::IssueComment(payload) => describe_issue_comment(payload),
        EventKind::Issues(payload) => describe_issues(payload, repo),
        EventKind::PullRequest(payload) => describe_pull_request(payload, repo),
        EventKind::Push(payload) => Some(describe_push(payload, repo)),
        EventKind::Watch(payload) => describe_watch(payload, repo),
        EventKind::Other => None,
    };

    line.unwrap_or_else(|| format!("{} on {}", event.tag, repo.unwrap_or(UNKNOWN_REPO)))
}

fn describe_create(payload: &CreatePayload, repo: Option<&str>) -> Option<String> {
    match payload.ref_type? {
        RefType::Repository => repo.map(|repo| format!("Created repository {}", repo)),
        ref_type @ (RefType::Branch | RefType::Tag) => {
            let name = present(&payload.r#ref).unwrap_or(UNNAMED_REF);
            let mut line = format!("Created {} {}", ref_type.as_str(), name);
            if let Some(repo) = repo {
                line.push_str(" in ");
                line.push_str(repo);
            }
            Some(line)
        }
    }
}

fn describe_fork(payload: &ForkPayload, repo: Option<&str>) -> Option<String> {
    let repo = repo?;
    let fork = payload
        .forkee
        .as_ref()
        .and_then(|forkee| present(&forkee.full_name));

    Some(match fork {
        Some(fork) => format!("Forked {} to {}", repo, fork),
        None => format!("Forked {}", repo),
    })
}

fn describe_issue_comment(payload: &IssueCommentPayload) -> Option<String> {
    let body = present(&payload.comment.as_ref()?.body)?;
    Some(format!("Commented: {}", shorten_content(body)))
}

fn describe_issues(payload: &IssuesPayload, repo: Option<&str>) -> Option<String> {
    let action = present(&payload.action)?;
    Some(format!("{} an issue in {}", capitalize(action), repo?))
}

fn describe_pull_request(payload: &PullRequestPayload, repo: Option<&str>) -> Option<String> {
    let action = present(&payload.action)?;
    let number = payload.number.filter(|&n| n != 0)?;
    let repo = repo?;

    let pr = payload.pull_request.as_ref();
    let merged = pr.and_then(|pr| pr.merged).unwrap_or(false);
    let verb = if action == "closed" && merged {
        "Merged".to_owned()
    } else {
        capitalize(action)
    };

    let mut line = format!("{} PR #{} in {}", verb, number, repo);
    if let Some(title) = pr.and_then(|pr| present(&pr.title)) {
        line.push_str(": ");
        line.push_str(title);
    }

    Some(line)
}

fn describe_push(payload: &PushPayload, repo: Option<&str>) -> String {
    match (payload.size, repo) {
        (Some(size), Some(repo)) if size > 0 => format!(
            "Pushed {} commit{} to {}",
            size,
            if size == 1 { "" } else { "s" },
            repo
        ),
        _ => format!("Pushed to {}", repo.unwrap_or(UNKNOWN_REPO)),
    }
}

fn describe_watch(payload: &WatchPayload, repo: Option<&str>) -> Option<String> {
    let repo = repo?;
    Some(match present(&payload.action) {
        Some(action) => format!("{} {}", capitalize(action), repo),
        None => format!("Starred {}", repo),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn describe(value: Value) -> String {
        let event: Event = serde_json::from_value(value).unwrap();
        describe_event(&event)
    }

    fn describe_in(tag: &str, repo: Option<&str>, payload: Value) -> String {
        describe(json!({
            "type": tag,
            "repo": repo.map(|name| json!({ "name": name })),
            "payload": payload,
        }))
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            describe_in("GollumEvent", Some("x/y"), json!({ "pages": [] })),
            "GollumEvent on x/y"
        );
        assert_eq!(
            describe_in("MemberEvent", None, json!({})),
            "MemberEvent on (unknown repo)"
        );
        assert_eq!(describe(json!({})), "(unknown type) on (unknown repo)");
    }

    #[test]
    fn test_issues() {
        assert_eq!(
            describe_in("IssuesEvent", Some("x/y"), json!({ "action": "opened" })),
            "Opened an issue in x/y"
        );
        assert_eq!(
            describe_in("IssuesEvent", None, json!({ "action": "closed" })),
            "IssuesEvent on (unknown repo)"
        );
        assert_eq!(
            describe_in("IssuesEvent", Some("x/y"), json!({})),
            "IssuesEvent on x/y"
        );
    }

    #[test]
    fn test_push() {
        assert_eq!(
            describe_in("PushEvent", Some("x/y"), json!({ "size": 1 })),
            "Pushed 1 commit to x/y"
        );
        assert_eq!(
            describe_in("PushEvent", Some("x/y"), json!({ "size": 3 })),
            "Pushed 3 commits to x/y"
        );
        assert_eq!(
            describe_in("PushEvent", Some("x/y"), json!({ "size": 0 })),
            "Pushed to x/y"
        );
        assert_eq!(
            describe_in("PushEvent", Some("x/y"), json!({ "size": 2.5 })),
            "Pushed to x/y"
        );
        assert_eq!(
            describe_in("PushEvent", None, json!({ "size": 2 })),
            "Pushed to (unknown repo)"
        );
    }

    #[test]
    fn test_pull_request() {
        assert_eq!(
            describe_in(
                "PullRequestEvent",
                Some("x/y"),
                json!({ "action": "opened", "number": 12, "pull_request": { "title": "Fix the thing", "merged": false } })
            ),
            "Opened PR #12 in x/y: Fix the thing"
        );
        assert_eq!(
            describe_in(
                "PullRequestEvent",
                Some("x/y"),
                json!({ "action": "closed", "number": 12, "pull_request": { "title": "Fix the thing", "merged": true } })
            ),
            "Merged PR #12 in x/y: Fix the thing"
        );
        assert_eq!(
            describe_in(
                "PullRequestEvent",
                Some("x/y"),
                json!({ "action": "closed", "number": 12, "pull_request": { "merged": true } })
            ),
            "Merged PR #12 in x/y"
        );
        assert_eq!(
            describe_in(
                "PullRequestEvent",
                Some("x/y"),
                json!({ "action": "closed", "number": 12, "pull_request": { "merged": false } })
            ),
            "Closed PR #12 in x/y"
        );
    }

    #[test]
    fn test_pull_request_missing_fields() {
        assert_eq!(
            describe_in("PullRequestEvent", Some("x/y"), json!({ "action": "opened" })),
            "PullRequestEvent on x/y"
        );
        assert_eq!(
            describe_in(
                "PullRequestEvent",
                Some("x/y"),
                json!({ "action": "opened", "number": 0 })
            ),
            "PullRequestEvent on x/y"
        );
        assert_eq!(
            describe_in(
                "PullRequestEvent",
                None,
                json!({ "action": "opened", "number": 3 })
            ),
            "PullRequestEvent on (unknown repo)"
        );
        assert_eq!(
            describe_in(
                "PullRequestEvent",
                Some("x/y"),
                json!({ "action": "reopened", "number": 3, "pull_request": null })
            ),
            "Reopened PR #3 in x/y"
        );
    }

    #[test]
    fn test_issue_comment() {
        let long = "x".repeat(75);
        assert_eq!(
            describe_in("IssueCommentEvent", Some("x/y"), json!({ "comment": { "body": long } })),
            format!("Commented: {}…", "x".repeat(60))
        );

        let short = "y".repeat(40);
        assert_eq!(
            describe_in("IssueCommentEvent", None, json!({ "comment": { "body": short } })),
            format!("Commented: {}", short)
        );

        assert_eq!(
            describe_in("IssueCommentEvent", Some("x/y"), json!({ "comment": null })),
            "IssueCommentEvent on x/y"
        );
        assert_eq!(
            describe_in("IssueCommentEvent", Some("x/y"), json!({ "comment": { "body": "" } })),
            "IssueCommentEvent on x/y"
        );
    }

    #[test]
    fn test_watch() {
        assert_eq!(
            describe_in("WatchEvent", Some("x/y"), json!({ "action": "started" })),
            "Started x/y"
        );
        assert_eq!(
            describe_in("WatchEvent", Some("x/y"), json!({})),
            "Starred x/y"
        );
        assert_eq!(
            describe_in("WatchEvent", None, json!({ "action": "started" })),
            "WatchEvent on (unknown repo)"
        );
    }

    #[test]
    fn test_fork() {
        assert_eq!(
            describe_in("ForkEvent", Some("x/y"), json!({ "forkee": { "full_name": "me/y" } })),
            "Forked x/y to me/y"
        );
        assert_eq!(
            describe_in("ForkEvent", Some("x/y"), json!({ "forkee": {} })),
            "Forked x/y"
        );
        assert_eq!(
            describe_in("ForkEvent", None, json!({ "forkee": { "full_name": "me/y" } })),
            "ForkEvent on (unknown repo)"
        );
    }

    #[test]
    fn test_create() {
        assert_eq!(
            describe_in("CreateEvent", Some("x/y"), json!({ "ref_type": "branch", "ref": "main" })),
            "Created branch main in x/y"
        );
        assert_eq!(
            describe_in("CreateEvent", Some("x/y"), json!({ "ref_type": "branch", "ref": null })),
            "Created branch (unnamed) in x/y"
        );
        assert_eq!(
            describe_in("CreateEvent", None, json!({ "ref_type": "tag", "ref": "v1.0" })),
            "Created tag v1.0"
        );
        assert_eq!(
            describe_in("CreateEvent", Some("x/y"), json!({ "ref_type": "repository", "ref": null })),
            "Created repository x/y"
        );
    }

    #[test]
    fn test_create_fallbacks() {
        assert_eq!(
            describe_in("CreateEvent", None, json!({ "ref_type": "repository" })),
            "CreateEvent on (unknown repo)"
        );
        assert_eq!(
            describe_in("CreateEvent", Some("x/y"), json!({ "ref": "main" })),
            "CreateEvent on x/y"
        );
        assert_eq!(
            describe_in("CreateEvent", Some("x/y"), json!({ "ref_type": "discussion" })),
            "CreateEvent on x/y"
        );
    }
}
