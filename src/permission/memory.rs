use super::error::Error;
use super::record::Permission;
use super::store::{
    CreateRequest, ListRequest, ListResponse, PermissionService, UpdateRequest, Values,
};
use dashmap::DashMap;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

const DEFAULT_PAGE_SIZE: u32 = 10;

/// In-process PermissionService. Records are stored flat; `children` is never kept.
#[derive(Debug)]
pub struct MemoryService {
    records: DashMap<u32, Permission>,
    /// Wider than an id so running past `u32::MAX` is detected, not wrapped.
    next_id: AtomicU64,
}

impl Default for MemoryService {
    fn default() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the service. Later ids continue after the highest seeded id.
    pub fn with_records(records: Vec<Permission>) -> Self {
        let service = Self::default();
        for mut record in records {
            record.children.clear();
            service
                .next_id
                .fetch_max(u64::from(record.id) + 1, AtomicOrdering::SeqCst);
            service.records.insert(record.id, record);
        }
        service
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait::async_trait]
impl PermissionService for MemoryService {
    async fn list(&self, request: ListRequest) -> Result<ListResponse, Error> {
        let filters: Values = match &request.query {
            Some(query) => serde_json::from_str(query)
                .map_err(|err| Error::InvalidValues(format!("bad query: {}", err)))?,
            None => Values::new(),
        };

        let mut rows: Vec<(Values, Permission)> = Vec::with_capacity(self.records.len());
        for entry in self.records.iter() {
            let fields = to_fields(entry.value())?;
            let matched = filters
                .iter()
                .all(|(key, value)| fields.get(key) == Some(value));
            if matched {
                rows.push((fields, entry.value().to_owned()));
            }
        }

        // Sort by id, then apply order keys from last to first so the first key wins.
        rows.sort_by_key(|(_, record)| record.id);
        for key in request.order_by.iter().rev() {
            let (field, descending) = match key.strip_prefix('-') {
                Some(field) => (field, true),
                None => (key.as_str(), false),
            };
            rows.sort_by(|(a, _), (b, _)| {
                let order = compare_values(a.get(field), b.get(field));
                if descending {
                    order.reverse()
                } else {
                    order
                }
            });
        }

        let total = rows.len();
        let rows: Vec<(Values, Permission)> = if request.no_paging {
            rows
        } else {
            let page = request.page.unwrap_or(1).max(1) as usize;
            let size = request.page_size.unwrap_or(DEFAULT_PAGE_SIZE) as usize;
            rows.into_iter().skip((page - 1) * size).take(size).collect()
        };

        let items = match &request.field_mask {
            Some(mask) => rows
                .into_iter()
                .map(|(fields, _)| apply_field_mask(fields, mask))
                .collect::<Result<Vec<_>, _>>()?,
            None => rows.into_iter().map(|(_, record)| record).collect(),
        };

        Ok(ListResponse { items, total })
    }

    async fn get(&self, id: u32) -> Result<Permission, Error> {
        self.records
            .get(&id)
            .map(|record| record.value().to_owned())
            .ok_or(Error::NotFound(id))
    }

    async fn create(&self, request: CreateRequest) -> Result<Permission, Error> {
        let next = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let id = u32::try_from(next)
            .map_err(|_| Error::Service("permission ids are exhausted".to_owned()))?;
        let mut fields = request.data;
        fields.insert("id".to_owned(), Value::from(id));
        fields.remove("children");

        let record = from_fields(fields)?;
        self.records.insert(id, record.to_owned());
        log::debug!("Created permission {}", id);
        Ok(record)
    }

    async fn update(&self, request: UpdateRequest) -> Result<Permission, Error> {
        let current = self.get(request.id).await?;
        let mut fields = to_fields(&current)?;

        for key in request
            .update_mask
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != "id" && *key != "children")
        {
            match request.data.get(key) {
                Some(value) => fields.insert(key.to_owned(), value.to_owned()),
                // Masked but absent means reset to default.
                None => fields.remove(key),
            };
        }

        let record = from_fields(fields)?;
        // The record may have been deleted while we were merging.
        match self.records.get_mut(&request.id) {
            Some(mut slot) => *slot = record.to_owned(),
            None => return Err(Error::NotFound(request.id)),
        }
        Ok(record)
    }

    async fn delete(&self, id: u32) -> Result<(), Error> {
        match self.records.remove(&id) {
            Some(_) => {
                log::debug!("Deleted permission {}", id);
                Ok(())
            }
            None => Err(Error::NotFound(id)),
        }
    }
}

fn to_fields(record: &Permission) -> Result<Values, Error> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(Error::Service("permission did not serialize to an object".to_owned())),
    }
}

fn from_fields(fields: Values) -> Result<Permission, Error> {
    serde_json::from_value(Value::Object(fields)).map_err(|err| Error::InvalidValues(err.to_string()))
}

/// Keeps only the masked fields; `id` is always kept.
fn apply_field_mask(fields: Values, mask: &str) -> Result<Permission, Error> {
    let wanted: Vec<&str> = mask.split(',').map(str::trim).collect();
    let kept: Values = fields
        .into_iter()
        .filter(|(key, _)| key == "id" || wanted.contains(&key.as_str()))
        .collect();
    from_fields(kept)
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        // Missing fields sort first.
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
