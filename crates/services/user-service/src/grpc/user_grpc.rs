//! gRPC implementation for UserService.

use std::sync::Arc;

use chrono::DateTime;
use tonic::{Request, Response, Status};

use crate::usecase::UserUsecase;
use common::AppError;
use domain::{CreateUser, Gender, UpdateUser, User};
use proto::user::{
    user_service_server::UserService as UserServiceProto, CheckPasswordRequest,
    CheckPasswordResponse, CreateUserRequest, GetUserByMobileRequest, GetUserRequest,
    ListUsersRequest, ListUsersResponse, UpdateUserRequest, UpdateUserResponse, UserResponse,
};

/// gRPC service wrapper for UserUsecase.
pub struct UserGrpcService {
    usecase: Arc<dyn UserUsecase>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(usecase: Arc<dyn UserUsecase>) -> Self {
        Self { usecase }
    }
}

#[tonic::async_trait]
impl UserServiceProto for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let user = self
            .usecase
            .create_user(create_from_proto(request.into_inner()))
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn list_users(
        &self,
        request: Request<ListUsersRequest>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        let req = request.into_inner();

        let (users, total) = self
            .usecase
            .list_users(i64::from(req.page), i64::from(req.page_size))
            .await
            .map_err(Status::from)?;

        Ok(Response::new(ListUsersResponse {
            users: users.iter().map(user_to_proto).collect(),
            total: i64::try_from(total).unwrap_or(i64::MAX),
        }))
    }

    async fn get_user_by_mobile(
        &self,
        request: Request<GetUserByMobileRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .usecase
            .user_by_mobile(&req.mobile)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn get_user_by_id(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self.usecase.user_by_id(req.id).await.map_err(Status::from)?;
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, Status> {
        let update = update_from_proto(request.into_inner()).map_err(Status::from)?;

        let success = self
            .usecase
            .update_user(update)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(UpdateUserResponse { success }))
    }

    async fn check_password(
        &self,
        request: Request<CheckPasswordRequest>,
    ) -> Result<Response<CheckPasswordResponse>, Status> {
        let req = request.into_inner();
        let usecase = Arc::clone(&self.usecase);

        // Argon2 verification is CPU-bound; keep it off the async workers
        let success = tokio::task::spawn_blocking(move || {
            usecase.check_password(&req.password, &req.password_hash)
        })
        .await
        .map_err(|e| {
            Status::from(AppError::internal(format!(
                "Password check task failed: {}",
                e
            )))
        })?
        .map_err(Status::from)?;
        Ok(Response::new(CheckPasswordResponse { success }))
    }
}

/// Convert proto CreateUserRequest to the registration input.
fn create_from_proto(req: CreateUserRequest) -> CreateUser {
    CreateUser {
        mobile: req.mobile,
        password: req.password,
        nickname: req.nickname,
    }
}

/// Convert proto UpdateUserRequest to a profile update.
fn update_from_proto(req: UpdateUserRequest) -> Result<UpdateUser, AppError> {
    let gender: Gender = req.gender.parse()?;
    let birthday = match req.birthday {
        Some(seconds) => Some(
            DateTime::from_timestamp(seconds, 0)
                .ok_or_else(|| AppError::validation("Birthday is out of range"))?,
        ),
        None => None,
    };

    Ok(UpdateUser {
        id: req.id,
        nickname: req.nickname,
        gender,
        birthday,
    })
}

/// Convert domain User to proto UserResponse.
fn user_to_proto(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        mobile: user.mobile.clone(),
        password_hash: user.password_hash.clone(),
        nickname: user.nickname.clone(),
        birthday: user.birthday.map(|b| b.timestamp()),
        gender: user.gender.to_string(),
        role: user.role.code(),
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::UserRole;

    fn update_request(gender: &str, birthday: Option<i64>) -> UpdateUserRequest {
        UpdateUserRequest {
            id: 3,
            nickname: "gyl".to_string(),
            gender: gender.to_string(),
            birthday,
        }
    }

    #[test]
    fn test_update_from_proto() {
        let update = update_from_proto(update_request("female", Some(693_646_426))).unwrap();

        assert_eq!(update.id, 3);
        assert_eq!(update.nickname, "gyl");
        assert_eq!(update.gender, Gender::Female);
        assert_eq!(update.birthday.map(|b| b.timestamp()), Some(693_646_426));
    }

    #[test]
    fn test_update_without_birthday() {
        let update = update_from_proto(update_request("male", None)).unwrap();
        assert_eq!(update.birthday, None);
    }

    #[test]
    fn test_update_unknown_gender_is_invalid() {
        let result = update_from_proto(update_request("robot", None));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_update_out_of_range_birthday_is_invalid() {
        let result = update_from_proto(update_request("male", Some(i64::MAX)));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_user_to_proto() {
        let now = Utc::now();
        let user = User {
            id: 5,
            mobile: "13803881388".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            nickname: "aliliin".to_string(),
            birthday: DateTime::from_timestamp(0, 0),
            gender: Gender::Female,
            role: UserRole::Admin,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let proto = user_to_proto(&user);
        assert_eq!(proto.id, 5);
        assert_eq!(proto.mobile, "13803881388");
        assert_eq!(proto.password_hash, "$argon2id$hash");
        assert_eq!(proto.birthday, Some(0));
        assert_eq!(proto.gender, "female");
        assert_eq!(proto.role, 2);
        assert_eq!(proto.created_at, now.to_rfc3339());
    }
}
