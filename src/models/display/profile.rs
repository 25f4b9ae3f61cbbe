//! Profile display model

use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use crate::client::models::Profile;

/// Profile display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProfileDisplay {
    #[tabled(rename = "NICKNAME")]
    pub nickname: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DEPARTMENT")]
    pub department: String,

    #[tabled(rename = "ROLE")]
    pub role: String,
}

impl From<Profile> for ProfileDisplay {
    fn from(profile: Profile) -> Self {
        Self {
            nickname: or_dash(Some(&profile.nickname)),
            name: or_dash(Some(&profile.name)),
            department: or_dash(Some(&profile.department)),
            role: or_dash(Some(&profile.role)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_show_placeholder() {
        let display = ProfileDisplay::from(Profile {
            nickname: "al".to_string(),
            ..Profile::default()
        });

        assert_eq!(display.nickname, "al");
        assert_eq!(display.department, "--");
        assert_eq!(display.role, "--");
    }
}
