use contracts::system::auth::{LoginRequest, LoginResponse, RefreshRequest, UserInfo};

use crate::shared::api::{ApiClient, ApiError};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    ApiClient::anonymous()
        .post_public("/system/auth/login", &request)
        .await
}

/// Revoke the refresh token
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    ApiClient::anonymous()
        .post_no_content("/system/auth/logout", &request)
        .await
}

/// User behind the client's access token
pub async fn get_current_user(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client.get("/system/auth/me").await
}
