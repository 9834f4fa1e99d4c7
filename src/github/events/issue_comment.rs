use serde::Deserialize;

use crate::github::events::lenient;

#[derive(Debug, Default, Deserialize)]
pub struct IssueCommentPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub comment: Option<Comment>,
}

#[derive(Debug, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,
}
