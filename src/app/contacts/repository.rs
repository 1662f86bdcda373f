//! 联系人存储接口
//!
//! 所有操作都按所有者 id 过滤；其他用户的联系人与不存在的联系人无法区分。

use super::model::{Contact, ContactPayload};
use crate::core::error::CoreError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, owner: i32, payload: ContactPayload) -> Result<Contact, CoreError>;

    /// All owned contacts when `query` is empty, otherwise those whose
    /// first name, last name or email contains it (case-insensitive).
    async fn list(&self, owner: i32, query: &str) -> Result<Vec<Contact>, CoreError>;

    async fn get(&self, owner: i32, id: i32) -> Result<Option<Contact>, CoreError>;

    /// Full replace. `None` when no owned contact has that id.
    async fn update(
        &self,
        owner: i32,
        id: i32,
        payload: ContactPayload,
    ) -> Result<Option<Contact>, CoreError>;

    /// `false` when no owned contact has that id.
    async fn delete(&self, owner: i32, id: i32) -> Result<bool, CoreError>;

    /// Round-trip to the store.
    async fn ping(&self) -> Result<(), CoreError>;
}

#[derive(Default)]
struct MemoryState {
    next_id: i32,
    rows: BTreeMap<i32, Contact>,
}

/// Process-local store, ordered by id.
#[derive(Default)]
pub struct InMemoryContactRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, owner: i32, payload: ContactPayload) -> Result<Contact, CoreError> {
        let mut state = self.state.lock().await;
        state.next_id += 1;
        let contact = Contact {
            id: state.next_id,
            user_id: owner,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            birthday: payload.birthday,
            notes: payload.notes,
        };
        state.rows.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn list(&self, owner: i32, query: &str) -> Result<Vec<Contact>, CoreError> {
        let state = self.state.lock().await;
        Ok(state
            .rows
            .values()
            .filter(|c| c.user_id == owner)
            .filter(|c| query.is_empty() || c.matches(query))
            .cloned()
            .collect())
    }

    async fn get(&self, owner: i32, id: i32) -> Result<Option<Contact>, CoreError> {
        let state = self.state.lock().await;
        Ok(state.rows.get(&id).filter(|c| c.user_id == owner).cloned())
    }

    async fn update(
        &self,
        owner: i32,
        id: i32,
        payload: ContactPayload,
    ) -> Result<Option<Contact>, CoreError> {
        let mut state = self.state.lock().await;
        match state.rows.get_mut(&id) {
            Some(contact) if contact.user_id == owner => {
                contact.replace_with(payload);
                Ok(Some(contact.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, owner: i32, id: i32) -> Result<bool, CoreError> {
        let mut state = self.state.lock().await;
        let owned = state.rows.get(&id).is_some_and(|c| c.user_id == owner);
        if owned {
            state.rows.remove(&id);
        }
        Ok(owned)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
