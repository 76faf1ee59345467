use std::fmt;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> UserId {
        UserId(s.to_string())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    pub id: UserId,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl Profile {
    /// Name to show next to the user's comments
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .filter(|n| !n.trim().is_empty())
    }

    /// Avatar fallback: up to two uppercased initials, or "U" for anonymous users
    pub fn initials(display_name: Option<&str>) -> String {
        let res = display_name
            .unwrap_or("")
            .split(' ')
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect::<String>();
        match res.is_empty() {
            true => String::from("U"),
            false => res,
        }
    }
}
