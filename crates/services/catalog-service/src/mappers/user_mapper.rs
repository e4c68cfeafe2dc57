use domain::{DomainResult, User, UserId, UserProps, UserResponse};

use super::Mapper;
use crate::repository::entities::UserRecord;

pub struct UserMapper;

impl Mapper for UserMapper {
    type Domain = User;
    type Record = UserRecord;
    type Json = UserResponse;

    fn to_domain(record: &UserRecord) -> DomainResult<User> {
        User::create(
            UserProps::new(record.email.clone(), record.password.clone()),
            Some(UserId::new(record.id.clone())),
        )
    }

    fn to_persistence(user: &User) -> UserRecord {
        UserRecord {
            id: user.id().to_string(),
            email: user.email().to_string(),
            password: user.password_hash().to_string(),
        }
    }

    fn to_json(user: &User) -> UserResponse {
        UserResponse::from(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_hides_password() {
        let record = UserRecord {
            id: "u-1".to_string(),
            email: "admin@example.com".to_string(),
            password: "$argon2id$hash".to_string(),
        };

        let user = UserMapper::to_domain(&record).unwrap();
        assert_eq!(UserMapper::to_persistence(&user), record);

        let json = serde_json::to_value(UserMapper::to_json(&user)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "u-1", "email": "admin@example.com" }));
    }
}
