use crate::config::GraphConfig;
use crate::utils::error::DirectoryError;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// A member record as returned by the directory members endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupMember {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    // Absent for non-user members (nested groups, devices).
    #[serde(rename = "userPrincipalName", default)]
    pub user_principal_name: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct GroupList {
    value: Vec<GroupRef>,
}

#[derive(Deserialize)]
struct GroupRef {
    id: String,
}

#[derive(Deserialize)]
struct MemberList {
    value: Vec<GroupMember>,
}

/// Stateless client for the identity provider and the directory API.
/// One call per operation; no retries, no token caching.
#[derive(Clone)]
pub struct GraphClient {
    client: Client,
    config: GraphConfig,
}

impl GraphClient {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_seconds))
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    /// Client-credentials grant against the identity provider. Returns the
    /// bearer token string; every failure mode (network, non-2xx, bad JSON)
    /// collapses into `TokenRequest` since the caller cannot act on the
    /// distinction.
    pub async fn acquire_token(&self) -> Result<String, DirectoryError> {
        let url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.config.login_url, self.config.tenant_id
        );

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("scope", self.config.scope.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| DirectoryError::TokenRequest(format!("token endpoint unreachable: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::TokenRequest(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::TokenRequest(format!("invalid token response: {e}")))?;

        Ok(token.access_token)
    }

    /// Resolves a group display name to its id, then lists its members.
    pub async fn resolve_group_members(
        &self,
        group_name: &str,
        token: &str,
    ) -> Result<Vec<GroupMember>, DirectoryError> {
        let group_id = self.lookup_group_id(group_name, token).await?;
        debug!("group '{}' resolved to id {}", group_name, group_id);
        self.list_members(&group_id, token).await
    }

    async fn lookup_group_id(
        &self,
        group_name: &str,
        token: &str,
    ) -> Result<String, DirectoryError> {
        let url = format!("{}/groups", self.config.api_url);
        let filter = format!("displayName eq '{}'", escape_odata_literal(group_name));

        let response = self
            .client
            .get(&url)
            .query(&[("$filter", filter.as_str()), ("$select", "id")])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(format!("group lookup failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Transport(format!(
                "group lookup returned {status}: {body}"
            )));
        }

        let groups: GroupList = response
            .json()
            .await
            .map_err(|e| DirectoryError::MalformedResponse(format!("group lookup body: {e}")))?;

        match groups.value.into_iter().next() {
            Some(group) => Ok(group.id),
            None => Err(DirectoryError::GroupNotFound(group_name.to_string())),
        }
    }

    async fn list_members(
        &self,
        group_id: &str,
        token: &str,
    ) -> Result<Vec<GroupMember>, DirectoryError> {
        let url = format!("{}/groups/{}/members", self.config.api_url, group_id);

        let response = self
            .client
            .get(&url)
            .query(&[("$select", "id,displayName,userPrincipalName")])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(format!("member listing failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Transport(format!(
                "member listing returned {status}: {body}"
            )));
        }

        let members: MemberList = response
            .json()
            .await
            .map_err(|e| DirectoryError::MalformedResponse(format!("member listing body: {e}")))?;

        Ok(members.value)
    }
}

/// OData string literals escape embedded single quotes by doubling them.
/// Without this a quote in a group name breaks the filter syntax.
fn escape_odata_literal(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_single_quotes_in_filter_literals() {
        assert_eq!(escape_odata_literal("O'Brien's Team"), "O''Brien''s Team");
        assert_eq!(escape_odata_literal("Engineering"), "Engineering");
    }

    #[test]
    fn member_deserializes_without_upn() {
        let member: GroupMember =
            serde_json::from_str(r#"{"id":"m1","displayName":"Conference Room"}"#)
                .expect("member without UPN should deserialize");
        assert_eq!(member.id.as_deref(), Some("m1"));
        assert!(member.user_principal_name.is_none());
    }
}
