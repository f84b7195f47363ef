//! Account and Library Commands

use novilist_core::{ClientResult, Credentials, RegisterRequest, Session};
use super::{client, logged};

pub async fn current_session() -> ClientResult<Option<Session>> {
    let c = client()?;
    logged("current_session", c.current_session().await)
}

pub async fn login(username: &str, password: &str) -> ClientResult<Session> {
    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };
    let c = client()?;
    logged("login", c.login(credentials).await)
}

pub async fn register(username: &str, display_name: &str, password: &str) -> ClientResult<Session> {
    let request = RegisterRequest {
        username: username.to_string(),
        display_name: display_name.to_string(),
        password: password.to_string(),
    };
    let c = client()?;
    logged("register", c.register(request).await)
}

pub async fn logout() -> ClientResult<()> {
    let c = client()?;
    logged("logout", c.logout().await)
}

pub async fn set_following(novel_id: u32, follow: bool) -> ClientResult<Session> {
    let c = client()?;
    logged("set_following", c.set_following(novel_id, follow).await)
}
