use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::{
    audit,
    config::AppConfig,
    db::OrmConn,
    dto::auth::{AuthResponse, Claims, LoginRequest, RegisterRequest},
    entity::users::{self, ActiveModel as UserActive, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::User,
    response::{Ack, ApiResponse, Meta},
    state::AppState,
};

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

/// `false` for a wrong password and for a stored hash that cannot be parsed.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub fn issue_token(config: &AppConfig, user: &User) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(config.jwt_ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        is_admin: user.is_admin,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

async fn find_by_username(orm: &OrmConn, username: &str) -> AppResult<Option<UserModel>> {
    let user = Users::find()
        .filter(users::Column::Username.eq(username))
        .one(orm)
        .await?;
    Ok(user)
}

/// Self-registration. Accounts created here are never admins.
pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<AuthResponse>> {
    let RegisterRequest { username, password } = payload;
    let username = username.trim().to_string();

    if find_by_username(&state.orm, &username).await?.is_some() {
        return Err(AppError::BadRequest("Username is already taken".to_string()));
    }

    let active = UserActive {
        id: NotSet,
        username: Set(username),
        password_hash: Set(hash_password(&password)?),
        is_admin: Set(false),
        created_at: NotSet,
    };
    let model = active
        .insert(&state.orm)
        .await
        .map_err(|err| AppError::unique_violation(err, "Username is already taken"))?;
    let user = user_from_entity(model);

    audit::record(
        &state.pool,
        Some(user.id),
        "user_register",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    let token = issue_token(&state.config, &user)?;
    Ok(ApiResponse::success(
        "User created",
        AuthResponse { user, token },
        Some(Meta::empty()),
    ))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<AuthResponse>> {
    let LoginRequest { username, password } = payload;

    let model = match find_by_username(&state.orm, username.trim()).await? {
        Some(u) => u,
        None => return Err(AppError::Unauthorized),
    };
    if !verify_password(&password, &model.password_hash) {
        return Err(AppError::Unauthorized);
    }
    let user = user_from_entity(model);

    audit::record(
        &state.pool,
        Some(user.id),
        "user_login",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    let token = issue_token(&state.config, &user)?;
    Ok(ApiResponse::success(
        "Logged in",
        AuthResponse { user, token },
        Some(Meta::empty()),
    ))
}

/// Tokens are stateless; the client drops its copy.
pub async fn logout_user(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<Ack>> {
    audit::record(
        &state.pool,
        Some(user.user_id),
        "user_logout",
        "users",
        serde_json::json!({ "user_id": user.user_id }),
    )
    .await;
    Ok(ApiResponse::ack("Logged out"))
}

/// Resolve the token holder against the database so deleted accounts stop working.
pub async fn current_user(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<User>> {
    let model = Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::Unauthorized)?;
    Ok(ApiResponse::success("Current user", user_from_entity(model), None))
}

/// Create the account or promote an existing one to admin, resetting its password.
pub async fn ensure_admin_account(
    orm: &OrmConn,
    username: &str,
    password: &str,
) -> AppResult<User> {
    let password_hash = hash_password(password)?;
    let model = match find_by_username(orm, username).await? {
        Some(existing) => {
            let mut active: UserActive = existing.into();
            active.password_hash = Set(password_hash);
            active.is_admin = Set(true);
            active.update(orm).await?
        }
        None => {
            UserActive {
                id: NotSet,
                username: Set(username.to_string()),
                password_hash: Set(password_hash),
                is_admin: Set(true),
                created_at: NotSet,
            }
            .insert(orm)
            .await?
        }
    };
    Ok(user_from_entity(model))
}

pub fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        username: model.username,
        is_admin: model.is_admin,
    }
}
