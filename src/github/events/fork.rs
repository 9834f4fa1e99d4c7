use serde::Deserialize;

use crate::github::events::lenient;

#[derive(Debug, Default, Deserialize)]
pub struct ForkPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub forkee: Option<Forkee>,
}

/// The repository created by the fork.
#[derive(Debug, Deserialize)]
pub struct Forkee {
    #[serde(default, deserialize_with = "lenient")]
    pub full_name: Option<String>,
}
