use tracing::{debug, info};

use crate::services::events::{EventHub, ListenerId};
use crate::services::models::User;

pub trait UserService {
    /// Adds the user without any validation and notifies "user registered" listeners.
    fn register_user(&mut self, user: User);

    /// Earliest registered user whose username and password both match exactly.
    fn login(&self, username: &str, password: &str) -> Option<&User>;
}

#[derive(Debug, Default)]
pub struct UserManager {
    users: Vec<User>,
    user_registered: EventHub<User>,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_user_registered(&mut self, listener: impl Fn(&User) + 'static) -> ListenerId {
        self.user_registered.on(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.user_registered.off(id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl UserService for UserManager {
    fn register_user(&mut self, user: User) {
        info!(username = %user.username, "User registered");
        self.users.push(user);
        // Listeners get the stored entry, after it is visible to `login`.
        let registered = &self.users[self.users.len() - 1];
        self.user_registered.emit(registered);
    }

    fn login(&self, username: &str, password: &str) -> Option<&User> {
        let found = self
            .users
            .iter()
            .find(|u| u.username == username && u.password == password);

        if found.is_none() {
            debug!(username, "Login rejected");
        }
        found
    }
}
