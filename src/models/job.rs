use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Input structure for posting a job listing.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct JobInput {
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 100))]
    pub company: String,

    /// Free-form location string ("Remote" is common).
    #[validate(length(max = 100))]
    pub location: Option<String>,

    /// Maximum length of 5000 characters if provided.
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

/// A job listing as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique identifier for the listing (UUID v4).
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Identifier of the employer account that posted the listing.
    pub posted_by: i32,
    pub created_at: DateTime<Utc>,
}

/// Query parameters for filtering job listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct JobQuery {
    /// Case-insensitive match against title and company.
    pub search: Option<String>,
    /// Exact match on the location column.
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_job_input_validation() {
        let input = JobInput {
            title: "Backend Engineer".to_string(),
            company: "Hive Labs".to_string(),
            location: Some("Remote".to_string()),
            description: Some("Build the JobHive API".to_string()),
        };
        assert!(input.validate().is_ok());

        let empty_title = JobInput {
            title: String::new(),
            company: "Hive Labs".to_string(),
            location: None,
            description: None,
        };
        assert!(empty_title.validate().is_err());

        let oversized_title = JobInput {
            title: "x".repeat(201),
            company: "Hive Labs".to_string(),
            location: None,
            description: None,
        };
        assert!(oversized_title.validate().is_err());
    }
}
