//! Blog and user records as they appear on the wire.

use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_USER_NAME: &str = "Vinayak";
const DEFAULT_TITLE: &str = "My First Blog";
const DEFAULT_CONTENT: &str = "This is my first blog";

/// The author snapshot embedded in every blog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub user_name: String,
}

impl User {
    /// A fresh user with a random id.
    pub fn generate() -> Self {
        Self {
            user_id: Uuid::new_v4().to_string(),
            user_name: DEFAULT_USER_NAME.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub blog_id: String,
    pub title: String,
    pub content: String,
    #[serde(with = "weekday_name")]
    pub day_created: Weekday,
    #[serde(rename = "user")]
    pub created_by: User,
}

impl Blog {
    /// A new blog authored by `user`, created today.
    pub fn new(user: User) -> Self {
        Self {
            blog_id: Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_owned(),
            content: DEFAULT_CONTENT.to_owned(),
            day_created: Local::now().weekday(),
            created_by: user,
        }
    }
}

/// Serializes a weekday as its full English name, e.g. `"Monday"`.
mod weekday_name {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|_| D::Error::custom(format!("invalid weekday `{raw}`")))
    }

    fn name(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}
