use std::collections::HashMap;

use sysinfo::Users;

/// Resolves numeric user ids to display names.
pub trait UserLookup {
    fn user_name(&self, uid: u32) -> Option<String>;

    /// Name for `uid`, falling back to the id itself so the result is
    /// never empty.
    fn resolve(&self, uid: u32) -> String {
        self.user_name(uid).unwrap_or_else(|| uid.to_string())
    }
}

/// The system user database, loaded once.
#[derive(Debug, Default)]
pub struct SystemUsers {
    names: HashMap<u32, String>,
}

impl SystemUsers {
    pub fn load() -> Self {
        let users = Users::new_with_refreshed_list();
        let names = users
            .list()
            .iter()
            .map(|user| (**user.id(), user.name().to_string()))
            .collect();
        Self { names }
    }
}

impl UserLookup for SystemUsers {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.names.get(&uid).cloned()
    }
}

impl UserLookup for HashMap<u32, String> {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.get(&uid).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_uid_falls_back_to_number() {
        let users: HashMap<u32, String> = HashMap::from([(0, "root".to_string())]);
        assert_eq!(users.resolve(0), "root");
        assert_eq!(users.resolve(4242), "4242");
    }
}
