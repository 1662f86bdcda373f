//! 联系人业务服务

use super::birthday::BirthdayWindow;
use super::model::{Contact, ContactPayload};
use super::repository::ContactRepository;
use crate::core::clock::Clock;
use crate::core::error::CoreError;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

#[derive(Clone)]
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
    clock: Arc<dyn Clock>,
    default_window_days: u32,
}

impl ContactService {
    pub fn new(
        repository: Arc<dyn ContactRepository>,
        clock: Arc<dyn Clock>,
        default_window_days: u32,
    ) -> Self {
        Self {
            repository,
            clock,
            default_window_days,
        }
    }

    pub async fn create(&self, owner: i32, payload: ContactPayload) -> Result<Contact, CoreError> {
        payload.validate()?;
        let contact = self.repository.create(owner, payload).await?;
        info!(user_id = owner, contact_id = contact.id, "contact created");
        Ok(contact)
    }

    pub async fn list(&self, owner: i32, query: &str) -> Result<Vec<Contact>, CoreError> {
        let contacts = self.repository.list(owner, query).await?;
        debug!(user_id = owner, query, found = contacts.len(), "contacts listed");
        Ok(contacts)
    }

    pub async fn get(&self, owner: i32, id: i32) -> Result<Contact, CoreError> {
        self.repository
            .get(owner, id)
            .await?
            .ok_or_else(|| CoreError::contact_not_found(id))
    }

    pub async fn update(
        &self,
        owner: i32,
        id: i32,
        payload: ContactPayload,
    ) -> Result<Contact, CoreError> {
        payload.validate()?;
        let contact = self
            .repository
            .update(owner, id, payload)
            .await?
            .ok_or_else(|| CoreError::contact_not_found(id))?;
        info!(user_id = owner, contact_id = id, "contact updated");
        Ok(contact)
    }

    pub async fn delete(&self, owner: i32, id: i32) -> Result<(), CoreError> {
        if !self.repository.delete(owner, id).await? {
            return Err(CoreError::contact_not_found(id));
        }
        info!(user_id = owner, contact_id = id, "contact deleted");
        Ok(())
    }

    /// Owned contacts with a birthday in the next `days` days (inclusive),
    /// soonest first.
    pub async fn upcoming_birthdays(
        &self,
        owner: i32,
        days: Option<u32>,
    ) -> Result<Vec<Contact>, CoreError> {
        let window = BirthdayWindow::new(
            self.clock.today(),
            days.unwrap_or(self.default_window_days),
        );
        let contacts = self.repository.list(owner, "").await?;
        let upcoming = window.select(contacts);
        debug!(
            user_id = owner,
            today = %window.today(),
            days = window.days(),
            found = upcoming.len(),
            "birthday window evaluated"
        );
        Ok(upcoming)
    }

    pub async fn ping(&self) -> Result<(), CoreError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::contacts::repository::InMemoryContactRepository;
    use crate::core::clock::FixedClock;
    use chrono::NaiveDate;

    fn service(today: NaiveDate) -> ContactService {
        ContactService::new(
            Arc::new(InMemoryContactRepository::new()),
            Arc::new(FixedClock(today)),
            7,
        )
    }

    fn payload(first: &str, birthday: NaiveDate) -> ContactPayload {
        ContactPayload {
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "555-0100".to_string(),
            birthday,
            notes: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_carries_id() {
        let service = service(date(2023, 6, 1));
        let err = service.get(1, 17).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(ref msg) if msg == "Contact with id: 17 was not found"));

        let err = service.delete(1, 17).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_payload_is_rejected() {
        let service = service(date(2023, 6, 1));
        let mut body = payload("Ada", date(1815, 12, 10));
        body.email = "nope".to_string();

        let err = service.create(1, body).await.unwrap_err();
        assert!(matches!(err, CoreError::BadRequest(ref msg) if msg.contains("email")));
        assert!(service.list(1, "").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upcoming_birthdays_across_new_year() {
        let service = service(date(2023, 12, 28));
        service.create(1, payload("Jan", date(1990, 1, 2))).await.unwrap();
        service.create(1, payload("Past", date(1990, 12, 20))).await.unwrap();
        service.create(1, payload("Today", date(1990, 12, 28))).await.unwrap();
        service.create(1, payload("Late", date(1990, 1, 5))).await.unwrap();
        service.create(2, payload("Other", date(1990, 12, 29))).await.unwrap();

        let names: Vec<String> = service
            .upcoming_birthdays(1, None)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.first_name)
            .collect();
        assert_eq!(names, vec!["Today", "Jan"]);

        let wider = service.upcoming_birthdays(1, Some(8)).await.unwrap();
        assert_eq!(wider.len(), 3);
    }
}
