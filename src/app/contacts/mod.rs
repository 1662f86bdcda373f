//! 联系人模块：按用户隔离的联系人、搜索和生日窗口

pub mod birthday;
pub mod handler;
pub mod model;
pub mod postgres;
pub mod repository;
pub mod service;

use axum::{
    routing::{get, post},
    Router,
};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/contacts",
            post(handler::create_contact).get(handler::list_contacts),
        )
        .route(
            "/api/contacts/",
            post(handler::create_contact).get(handler::list_contacts),
        )
        .route("/api/contacts/birthdays", get(handler::upcoming_birthdays))
        .route("/api/contacts/birthdays/", get(handler::upcoming_birthdays))
        .route("/api/contacts/birthdays_", get(handler::upcoming_birthdays))
        .route("/api/contacts/birthdays_/", get(handler::upcoming_birthdays))
        .route(
            "/api/contacts/:id",
            get(handler::get_contact)
                .put(handler::update_contact)
                .delete(handler::delete_contact),
        )
}
