use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::{
    api::types::{interpret_body, Command, CommandError},
    config,
};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Posts `command` to the dispatch endpoint and returns the `data` of a
    /// successful reply.
    pub async fn command(&self, command: &Command) -> Result<Value, CommandError> {
        let base_url = self.resolved_base_url().await;
        debug!("dispatching command {}", command.name());

        let response = self
            .http_client()
            .post(format!("{}/command", base_url.trim_end_matches('/')))
            .json(command)
            .send()
            .await
            .map_err(|e| CommandError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CommandError::Request(e.to_string()))?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(CommandError::Status {
                    status: status.as_u16(),
                    body: text,
                });
            }
            Err(e) => return Err(CommandError::Decode(e.to_string())),
        };

        match interpret_body(body) {
            Ok(_) if !status.is_success() => Err(CommandError::Status {
                status: status.as_u16(),
                body: text,
            }),
            result => {
                if let Err(err) = &result {
                    debug!("command {} failed: {}", command.name(), err);
                }
                result
            }
        }
    }
}
