//! 联系人处理器

use axum::{extract::State, response::Json};

use super::model::{BirthdaysQuery, Contact, ContactPayload, ListContactsQuery};
use crate::app::{auth::extractor::CurrentUser, AppState};
use crate::core::{
    error::CoreError,
    extract::{AppJson, AppPath, AppQuery},
    response::MessageResponse,
};

pub async fn create_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(payload): AppJson<ContactPayload>,
) -> Result<Json<Contact>, CoreError> {
    let contact = state.contacts.create(user.id, payload).await?;
    Ok(Json(contact))
}

pub async fn list_contacts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppQuery(query): AppQuery<ListContactsQuery>,
) -> Result<Json<Vec<Contact>>, CoreError> {
    let contacts = state.contacts.list(user.id, &query.find_string).await?;
    Ok(Json(contacts))
}

pub async fn get_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Contact>, CoreError> {
    let contact = state.contacts.get(user.id, id).await?;
    Ok(Json(contact))
}

pub async fn update_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ContactPayload>,
) -> Result<Json<Contact>, CoreError> {
    let contact = state.contacts.update(user.id, id, payload).await?;
    Ok(Json(contact))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, CoreError> {
    state.contacts.delete(user.id, id).await?;
    Ok(Json(MessageResponse::new("Contact successfully deleted")))
}

/// Serves both `/birthdays/` and the legacy `/birthdays_/` path.
pub async fn upcoming_birthdays(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppQuery(query): AppQuery<BirthdaysQuery>,
) -> Result<Json<Vec<Contact>>, CoreError> {
    let contacts = state.contacts.upcoming_birthdays(user.id, query.days).await?;
    Ok(Json(contacts))
}
