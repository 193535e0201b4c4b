use serde::{Deserialize, Serialize};

/// Identity supplied by the authentication collaborator. The core never
/// inspects it beyond storing it as an event's organizer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub name: String,
    pub email: String,
}
