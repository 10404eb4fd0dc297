//! Test fixtures - reusable users files.

/// No accounts at all
pub const EMPTY_USERS: &str = "users = []\n";

/// Two single-role subscribers around a multi-role subscriber
pub const MIXED_SUBSCRIBERS: &str = r#"
[[users]]
id = 1
display_name = "Ann"
roles = ["subscriber"]

[[users]]
id = 2
display_name = "Bo"
roles = ["subscriber", "editor"]

[[users]]
id = 3
display_name = "Cy"
roles = ["subscriber"]
"#;

/// Accounts with a variety of roles
pub const SITE_USERS: &str = r#"
[[users]]
id = 10
display_name = "Root"
roles = ["administrator"]

[[users]]
id = 11
display_name = "Editor Ed"
roles = ["editor"]

[[users]]
id = 12
display_name = "Writer"
roles = ["author", "editor"]

[[users]]
id = 13
display_name = "Reader"
roles = ["subscriber"]
"#;
