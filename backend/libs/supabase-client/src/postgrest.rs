/// PostgREST data API request builder
///
/// Models the small query surface the application actually uses: column
/// selection, equality and `in` filters, exactly-one-row reads, and
/// single-call insert/update/delete. No pagination, no ordering, no
/// retries; a failed call surfaces the remote error message and stops.
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{remote_message, SupabaseError};
use crate::SupabaseClient;

#[derive(Clone)]
pub struct QueryBuilder {
    client: SupabaseClient,
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    single: bool,
    token: Option<String>,
}

impl QueryBuilder {
    pub(crate) fn new(client: SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            select: "*".to_string(),
            filters: Vec::new(),
            single: false,
            token: None,
        }
    }

    /// Restrict the returned columns (PostgREST `select=` parameter).
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    /// Equality filter: `column=eq.value`.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Membership filter: `column=in.(v1,v2,...)`.
    pub fn in_list<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.filters
            .push((column.to_string(), format!("in.({})", joined)));
        self
    }

    /// Expect exactly one row; zero or many rows is an error.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Issue the call with a user access token instead of the anon key.
    pub fn auth(mut self, access_token: &str) -> Self {
        self.token = Some(access_token.to_string());
        self
    }

    fn bearer(&self) -> &str {
        self.token.as_deref().unwrap_or(self.client.anon_key())
    }

    fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.select.clone())];
        params.extend(self.filters.iter().cloned());
        params
    }

    /// Read rows. `T` is the row list type, or a single row when
    /// `.single()` was requested.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, SupabaseError> {
        let mut request = self
            .client
            .http()
            .get(self.client.rest_url(&self.table))
            .query(&self.query_params())
            .header("apikey", self.client.anon_key())
            .bearer_auth(self.bearer());

        if self.single {
            request = request.header("Accept", "application/vnd.pgrst.object+json");
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // PostgREST answers 406 when a single-object read does not
            // match exactly one row.
            if self.single && status == StatusCode::NOT_ACCEPTABLE {
                return Err(SupabaseError::NotFound);
            }
            tracing::debug!(table = %self.table, %status, "data API read failed");
            return Err(SupabaseError::Api(remote_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    /// Read a single row, mapping "no such row" to `None`.
    pub async fn fetch_optional<T: DeserializeOwned>(self) -> Result<Option<T>, SupabaseError> {
        match self.single().fetch().await {
            Ok(row) => Ok(Some(row)),
            Err(SupabaseError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Insert one or more rows. The stored representation is not returned.
    pub async fn insert<T: Serialize>(self, rows: &T) -> Result<(), SupabaseError> {
        let response = self
            .client
            .http()
            .post(self.client.rest_url(&self.table))
            .header("apikey", self.client.anon_key())
            .bearer_auth(self.bearer())
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;

        Self::expect_success(response).await
    }

    /// Patch the rows matched by the accumulated filters.
    pub async fn update<T: Serialize>(self, patch: &T) -> Result<(), SupabaseError> {
        let response = self
            .client
            .http()
            .patch(self.client.rest_url(&self.table))
            .query(&self.filters)
            .header("apikey", self.client.anon_key())
            .bearer_auth(self.bearer())
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await?;

        Self::expect_success(response).await
    }

    /// Delete the rows matched by the accumulated filters.
    pub async fn delete(self) -> Result<(), SupabaseError> {
        let response = self
            .client
            .http()
            .delete(self.client.rest_url(&self.table))
            .query(&self.filters)
            .header("apikey", self.client.anon_key())
            .bearer_auth(self.bearer())
            .send()
            .await?;

        Self::expect_success(response).await
    }

    async fn expect_success(response: reqwest::Response) -> Result<(), SupabaseError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::debug!(%status, "data API write failed");
            return Err(SupabaseError::Api(remote_message(status, &body)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SupabaseConfig;

    fn builder() -> QueryBuilder {
        let client = SupabaseClient::new(SupabaseConfig {
            url: "https://x.supabase.co".into(),
            anon_key: "anon".into(),
        })
        .unwrap();
        client.from("profiles")
    }

    #[test]
    fn renders_equality_filters() {
        let q = builder().select("name, avatar_url").eq("email", "a@b.c");
        let params = q.query_params();
        assert_eq!(params[0], ("select".to_string(), "name, avatar_url".to_string()));
        assert_eq!(params[1], ("email".to_string(), "eq.a@b.c".to_string()));
    }

    #[test]
    fn renders_in_filter() {
        let q = builder().in_list("user_id", ["a", "b", "c"]);
        let params = q.query_params();
        assert_eq!(params[1], ("user_id".to_string(), "in.(a,b,c)".to_string()));
    }

    #[test]
    fn anon_key_is_default_bearer() {
        assert_eq!(builder().bearer(), "anon");
        assert_eq!(builder().auth("user-token").bearer(), "user-token");
    }
}
