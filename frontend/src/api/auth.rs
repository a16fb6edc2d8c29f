use super::{
    client::ApiClient,
    types::{Command, CommandError, LoginRequest, Session},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<Session, CommandError> {
        let data = self.command(&Command::Login(request)).await?;
        Ok(Session::from(data))
    }
}
