/// User name that is allowed to edit and save rosters.
pub const ADMIN_USER: &str = "admin";

/// What the logged-in user may do with a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    Edit,
    #[default]
    ReadOnly,
}

impl Permission {
    pub fn for_user(username: Option<&str>) -> Self {
        match username {
            Some(ADMIN_USER) => Permission::Edit,
            _ => Permission::ReadOnly,
        }
    }

    pub fn can_edit(self) -> bool { self == Permission::Edit }
}
