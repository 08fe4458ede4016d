use serde::{Deserialize, Serialize};

/// Primary-key access shared by every stored resource. `with_id` is how a
/// repository hands back the store-assigned identifier.
pub trait HasId {
    fn id(&self) -> Option<i64>;
    fn with_id(self, id: i64) -> Self;
}

/// A registered user (business view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Absent until the record is first persisted.
    pub id: Option<i64>,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl User {
    /// An unsaved user; the id arrives when the record is persisted.
    pub fn new(name: &str, surname: &str, email: &str) -> Self {
        Self {
            id: None,
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }

    /// Copy the mutable fields from `patch`, keeping the identity. The
    /// patch's own id, if any, is discarded.
    pub fn merge(mut self, patch: User) -> User {
        self.name = patch.name;
        self.surname = patch.surname;
        self.email = patch.email;
        self
    }
}

impl HasId for User {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A player, managed alongside users and structurally identical to [`User`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Absent until the record is first persisted.
    pub id: Option<i64>,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl Player {
    /// An unsaved player; the id arrives when the record is persisted.
    pub fn new(name: &str, surname: &str, email: &str) -> Self {
        Self {
            id: None,
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }

    /// Copy the mutable fields from `patch`, keeping the identity.
    pub fn merge(mut self, patch: Player) -> Player {
        self.name = patch.name;
        self.surname = patch.surname;
        self.email = patch.email;
        self
    }
}

impl HasId for Player {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
