//! In-memory user accounts with bcrypt password hashes.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

pub use bcrypt::DEFAULT_COST;

/// Authorization role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

#[derive(Error, Debug)]
pub enum UserError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

pub type UserResult<T> = Result<T, UserError>;

/// A gateway login. Only the bcrypt hash of the password is kept.
#[derive(Clone)]
pub struct UserAccount {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}

impl UserAccount {
    /// Hash `password` at [`DEFAULT_COST`].
    pub fn new(username: impl Into<String>, password: &str, roles: &[Role]) -> UserResult<Self> {
        Self::with_cost(username, password, roles, DEFAULT_COST)
    }

    pub fn with_cost(
        username: impl Into<String>,
        password: &str,
        roles: &[Role],
        cost: u32,
    ) -> UserResult<Self> {
        Ok(Self {
            username: username.into(),
            password_hash: bcrypt::hash(password, cost)?,
            roles: roles.to_vec(),
        })
    }

    /// A malformed stored hash never matches.
    pub fn verify_password(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.password_hash).unwrap_or(false)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAccount")
            .field("username", &self.username)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}

/// Immutable set of accounts, keyed by username.
#[derive(Debug, Default)]
pub struct UserStore {
    accounts: HashMap<String, UserAccount>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `user`/`user` with USER, `admin`/`admin` with USER and ADMIN.
    pub fn with_demo_accounts() -> UserResult<Self> {
        Self::demo_accounts(DEFAULT_COST)
    }

    /// Demo accounts hashed at `cost`.
    pub fn demo_accounts(cost: u32) -> UserResult<Self> {
        let mut store = Self::new();
        store.insert(UserAccount::with_cost("user", "user", &[Role::User], cost)?);
        store.insert(UserAccount::with_cost(
            "admin",
            "admin",
            &[Role::User, Role::Admin],
            cost,
        )?);
        Ok(store)
    }

    /// Add or replace an account.
    pub fn insert(&mut self, account: UserAccount) {
        self.accounts.insert(account.username.clone(), account);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Option<&UserAccount> {
        self.accounts
            .get(username)
            .filter(|account| account.verify_password(password))
    }
}
