use serde::{Deserialize, Serialize};

/// Identifier of the user owning a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i32);

impl UserId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier as stored in `carts.user_id`.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_raw_value() {
        let user_id = UserId::new(42);
        assert_eq!(user_id.value(), 42);
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new(7);
        assert_eq!(format!("{}", user_id), "7");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new(1), UserId::from(1));
        assert_ne!(UserId::new(1), UserId::new(2));
    }
}
