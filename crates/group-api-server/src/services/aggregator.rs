use crate::services::graph::GraphClient;
use crate::utils::error::DirectoryError;
use tracing::info;

/// Outcome of an interrupted resolution: the error that stopped processing
/// plus every UPN collected from the groups that completed before it.
#[derive(Debug)]
pub struct ResolveFailure {
    pub partial: Vec<String>,
    pub error: DirectoryError,
}

/// Drives the directory client across a request's group list.
pub struct GroupAggregator<'a> {
    graph: &'a GraphClient,
}

impl<'a> GroupAggregator<'a> {
    pub fn new(graph: &'a GraphClient) -> Self {
        Self { graph }
    }

    /// Resolves every group name into its member UPNs and concatenates them
    /// in input order. One token is acquired up front and shared across all
    /// lookups. Processing stops at the first failure; UPNs accumulated up
    /// to that point ride along on the error so the response can still
    /// carry them. Duplicate group names and duplicate UPNs are kept as-is.
    pub async fn resolve_all(
        &self,
        group_names: &[&str],
    ) -> Result<Vec<String>, ResolveFailure> {
        let token = match self.graph.acquire_token().await {
            Ok(token) => token,
            Err(error) => {
                return Err(ResolveFailure {
                    partial: Vec::new(),
                    error,
                })
            }
        };

        let mut upns = Vec::new();
        for name in group_names {
            match self.graph.resolve_group_members(name, &token).await {
                Ok(members) => {
                    let before = upns.len();
                    upns.extend(
                        members
                            .into_iter()
                            .filter_map(|member| member.user_principal_name),
                    );
                    info!("group '{}' contributed {} members", name, upns.len() - before);
                }
                Err(error) => {
                    return Err(ResolveFailure {
                        partial: upns,
                        error,
                    })
                }
            }
        }

        Ok(upns)
    }
}
