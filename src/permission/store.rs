use super::error::Error;
use super::record::Permission;
use super::tree::build_tree;
use crate::locale::Translate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Loosely typed form values, keyed by camelCase field name.
pub type Values = Map<String, Value>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    /// Comma separated read mask.
    pub field_mask: Option<String>,
    /// Field names, `-` prefixed for descending.
    pub order_by: Vec<String>,
    /// JSON object of field equality filters.
    pub query: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub no_paging: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<Permission>,
    /// Matching records before paging.
    pub total: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRequest {
    pub data: Values,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub id: u32,
    pub data: Values,
    /// Comma separated fields of `data` to write.
    pub update_mask: String,
}

/// Backend the store forwards to.
#[async_trait::async_trait]
pub trait PermissionService: Send + Sync {
    async fn list(&self, request: ListRequest) -> Result<ListResponse, Error>;
    async fn get(&self, id: u32) -> Result<Permission, Error>;
    async fn create(&self, request: CreateRequest) -> Result<Permission, Error>;
    async fn update(&self, request: UpdateRequest) -> Result<Permission, Error>;
    async fn delete(&self, id: u32) -> Result<(), Error>;
}

/// CRUD entry point used by the admin routes.
#[derive(Clone)]
pub struct PermissionStore {
    service: Arc<dyn PermissionService>,
}

impl PermissionStore {
    pub fn new(service: Arc<dyn PermissionService>) -> Self {
        Self { service }
    }

    /// Lists permissions. Paging is disabled when neither page nor page size is given.
    pub async fn list_permission(
        &self,
        paging: Option<Paging>,
        form_values: Option<&Values>,
        field_mask: Option<&str>,
        order_by: Option<Vec<String>>,
    ) -> Result<ListResponse, Error> {
        let paging = paging.unwrap_or_default();
        self.service
            .list(ListRequest {
                field_mask: field_mask.map(str::to_owned),
                order_by: order_by.unwrap_or_default(),
                query: make_query_string(form_values),
                page: paging.page,
                page_size: paging.page_size,
                no_paging: paging.page.is_none() && paging.page_size.is_none(),
            })
            .await
    }

    pub async fn get_permission(&self, id: u32) -> Result<Permission, Error> {
        self.service.get(id).await
    }

    pub async fn create_permission(&self, values: Values) -> Result<Permission, Error> {
        self.service.create(CreateRequest { data: values }).await
    }

    /// Writes exactly the fields present in `values`.
    pub async fn update_permission(&self, id: u32, values: Values) -> Result<Permission, Error> {
        let update_mask = make_update_mask(values.keys().map(String::as_str));
        self.service
            .update(UpdateRequest {
                id,
                data: values,
                update_mask,
            })
            .await
    }

    pub async fn delete_permission(&self, id: u32) -> Result<(), Error> {
        self.service.delete(id).await
    }

    /// Lists every permission and arranges them for menu rendering.
    pub async fn list_permission_tree<T: Translate + ?Sized>(
        &self,
        translator: &T,
    ) -> Result<Vec<Permission>, Error> {
        let response = self.list_permission(None, None, None, None).await?;
        Ok(build_tree(response.items, translator))
    }
}

/// Encodes non-empty form values as a JSON filter object.
pub fn make_query_string(form_values: Option<&Values>) -> Option<String> {
    let filters: Values = form_values?
        .iter()
        .filter(|(_, value)| match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();

    if filters.is_empty() {
        None
    } else {
        Some(Value::Object(filters).to_string())
    }
}

pub fn make_update_mask<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fields.into_iter().collect::<Vec<_>>().join(",")
}
