//! The signed-in user's display profile. Read-only for the app: the edit
//! screen works on a copy that is discarded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    /// Shown in the home header under "Location".
    pub location: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            bio: "Real estate enthusiast looking for the perfect home.".to_string(),
            location: "Los Angeles, CA".to_string(),
        }
    }
}
